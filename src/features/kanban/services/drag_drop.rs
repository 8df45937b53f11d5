use crate::core::models::CardRecord;

/// Vertical extent of a card on screen, in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardBounds {
    pub top: f64,
    pub height: f64,
}

impl CardBounds {
    pub fn midpoint(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

/// The card under the pointer during a drag-over.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverTarget {
    pub card_id: String,
    pub bounds: CardBounds,
    pub pointer_y: f64,
}

impl HoverTarget {
    pub fn drops_after(&self) -> bool {
        self.pointer_y > self.bounds.midpoint()
    }
}

#[derive(Debug, Clone, Default)]
pub struct DragSession {
    source: Option<String>,
}

impl DragSession {
    pub fn start(&mut self, card_id: impl Into<String>) {
        self.source = Some(card_id.into());
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn finish(&mut self) -> Option<String> {
        self.source.take()
    }
}

/// Position the dragged card should take in `cards`, counted with the dragged
/// card left out. `None` means the drag-over changes nothing.
pub fn drop_index(
    cards: &[CardRecord],
    dragged_id: &str,
    hover: Option<&HoverTarget>,
) -> Option<usize> {
    let mut remaining = cards.iter().filter(|card| card.id != dragged_id);

    match hover {
        None => Some(remaining.count()),
        Some(target) if target.card_id == dragged_id => None,
        Some(target) => remaining
            .position(|card| card.id == target.card_id)
            .map(|index| if target.drops_after() { index + 1 } else { index }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn cards() -> Vec<CardRecord> {
        ["a", "b", "c"]
            .into_iter()
            .map(|id| CardRecord::new(id, id.to_uppercase()))
            .collect()
    }

    fn hover(card_id: &str, pointer_y: f64) -> HoverTarget {
        HoverTarget {
            card_id: card_id.to_string(),
            bounds: CardBounds { top: 100.0, height: 40.0 },
            pointer_y,
        }
    }

    #[rstest]
    fn no_hover_appends_to_end(cards: Vec<CardRecord>) {
        assert_eq!(drop_index(&cards, "a", None), Some(2));
        assert_eq!(drop_index(&cards, "elsewhere", None), Some(3));
        assert_eq!(drop_index(&[], "a", None), Some(0));
    }

    #[rstest]
    #[case("c", 110.0, Some(1))]
    #[case("c", 130.0, Some(2))]
    #[case("b", 119.0, Some(0))]
    #[case("b", 121.0, Some(1))]
    fn pointer_against_midpoint_picks_side(
        cards: Vec<CardRecord>,
        #[case] over: &str,
        #[case] pointer_y: f64,
        #[case] expected: Option<usize>,
    ) {
        assert_eq!(drop_index(&cards, "a", Some(&hover(over, pointer_y))), expected);
    }

    #[rstest]
    fn pointer_exactly_on_midpoint_drops_before(cards: Vec<CardRecord>) {
        assert_eq!(drop_index(&cards, "a", Some(&hover("c", 120.0))), Some(1));
    }

    #[rstest]
    fn hovering_dragged_card_is_noop(cards: Vec<CardRecord>) {
        assert_eq!(drop_index(&cards, "b", Some(&hover("b", 130.0))), None);
    }

    #[rstest]
    fn hovering_card_from_another_column_is_noop(cards: Vec<CardRecord>) {
        assert_eq!(drop_index(&cards, "a", Some(&hover("zz", 130.0))), None);
    }

    #[test]
    fn session_tracks_single_source() {
        let mut session = DragSession::default();
        session.start("1");
        session.start("2");
        assert_eq!(session.source(), Some("2"));
        assert_eq!(session.finish().as_deref(), Some("2"));
        assert_eq!(session.source(), None);
        assert_eq!(session.finish(), None);
    }
}
