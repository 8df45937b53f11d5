use std::collections::{BTreeMap, HashSet};

use serde::de::Deserializer;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    ToDo,
    InProgress,
    Done,
}

impl Column {
    pub fn as_str(&self) -> &'static str {
        match self {
            Column::ToDo => "To Do",
            Column::InProgress => "In Progress",
            Column::Done => "Done",
        }
    }

    /// Columns in display order.
    pub fn all() -> Vec<Column> {
        vec![Column::ToDo, Column::InProgress, Column::Done]
    }

    fn index(self) -> usize {
        match self {
            Column::ToDo => 0,
            Column::InProgress => 1,
            Column::Done => 2,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CardRecord {
    #[serde(deserialize_with = "card_id_from_json")]
    pub id: String,
    pub text: String,
}

impl CardRecord {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

// Ids written straight from a timestamp are numbers, ids read back from the
// page are strings. Both name the same card.
fn card_id_from_json<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Signed(i64),
        Unsigned(u64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(id) => id,
        RawId::Signed(id) => id.to_string(),
        RawId::Unsigned(id) => id.to_string(),
    })
}

/// Every column's cards in display order. Card ids are unique across the
/// whole board.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardState {
    columns: [Vec<CardRecord>; 3],
}

impl BoardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cards(&self, column: Column) -> &[CardRecord] {
        &self.columns[column.index()]
    }

    pub fn card_count(&self) -> usize {
        self.columns.iter().map(Vec::len).sum()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.locate(id).is_some()
    }

    /// Column and position of the card with `id`.
    pub fn locate(&self, id: &str) -> Option<(Column, usize)> {
        Column::all().into_iter().find_map(|column| {
            self.cards(column)
                .iter()
                .position(|card| card.id == id)
                .map(|index| (column, index))
        })
    }

    /// Appends `card` to the end of `column`. Blank text and ids already on
    /// the board are refused.
    pub fn push_card(&mut self, column: Column, card: CardRecord) -> bool {
        if card.text.trim().is_empty() || self.contains(&card.id) {
            return false;
        }
        self.columns[column.index()].push(card);
        true
    }

    pub fn remove_card(&mut self, id: &str) -> Option<CardRecord> {
        let (column, index) = self.locate(id)?;
        Some(self.columns[column.index()].remove(index))
    }

    /// Moves the card to `index` within `column`. The index counts positions
    /// in the target column with the moved card already taken out, and is
    /// clamped to the column's end.
    pub fn move_card(&mut self, id: &str, column: Column, index: usize) -> bool {
        let Some(card) = self.remove_card(id) else {
            return false;
        };
        let cards = &mut self.columns[column.index()];
        let index = index.min(cards.len());
        cards.insert(index, card);
        true
    }

    /// Timestamp-derived id for a new card, bumped past any id already taken.
    pub fn next_card_id(&self, now_millis: i64) -> String {
        let mut candidate = now_millis;
        while self.contains(&candidate.to_string()) {
            candidate += 1;
        }
        candidate.to_string()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

impl Serialize for BoardState {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for column in Column::all() {
            map.serialize_entry(column.as_str(), self.cards(column))?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for BoardState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = BTreeMap::<String, serde_json::Value>::deserialize(deserializer)?;
        let mut state = BoardState::new();
        let mut seen = HashSet::new();

        for column in Column::all() {
            let Some(serde_json::Value::Array(entries)) = raw.get(column.as_str()) else {
                continue;
            };
            for entry in entries {
                let Ok(card) = serde_json::from_value::<CardRecord>(entry.clone()) else {
                    continue;
                };
                if card.text.trim().is_empty() || !seen.insert(card.id.clone()) {
                    continue;
                }
                state.columns[column.index()].push(card);
            }
        }

        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn texts(state: &BoardState, column: Column) -> Vec<&str> {
        state.cards(column).iter().map(|c| c.text.as_str()).collect()
    }

    #[test]
    fn writes_columns_in_display_order() {
        let mut state = BoardState::new();
        state.push_card(Column::Done, CardRecord::new("1", "Ship it"));

        let json = state.to_json().unwrap();
        assert_eq!(
            json,
            r#"{"To Do":[],"In Progress":[],"Done":[{"id":"1","text":"Ship it"}]}"#
        );
    }

    #[test]
    fn reload_reproduces_column_order_and_ids() {
        let mut state = BoardState::new();
        state.push_card(Column::ToDo, CardRecord::new("1", "Write spec"));
        state.push_card(Column::ToDo, CardRecord::new("2", "Review"));
        state.push_card(Column::InProgress, CardRecord::new("3", "Build"));

        let reloaded = BoardState::from_json(&state.to_json().unwrap()).unwrap();
        assert_eq!(reloaded, state);
        assert_eq!(texts(&reloaded, Column::ToDo), vec!["Write spec", "Review"]);
    }

    #[test]
    fn reads_numeric_ids_as_text() {
        let raw = r#"{"To Do":[{"text":"Old card","id":1700000000000}],"In Progress":[],"Done":[]}"#;
        let state = BoardState::from_json(raw).unwrap();
        assert_eq!(state.cards(Column::ToDo)[0].id, "1700000000000");
    }

    #[test]
    fn ignores_unknown_columns_and_fills_missing_ones() {
        let raw = r#"{"Backlog":[{"id":"9","text":"Lost"}],"Done":[{"id":"1","text":"Kept"}]}"#;
        let state = BoardState::from_json(raw).unwrap();
        assert_eq!(state.card_count(), 1);
        assert!(state.cards(Column::ToDo).is_empty());
        assert!(!state.contains("9"));
    }

    #[test]
    fn keeps_first_occurrence_of_duplicate_id() {
        let raw = r#"{"To Do":[{"id":"1","text":"First"}],"In Progress":[{"id":"1","text":"Second"}],"Done":[]}"#;
        let state = BoardState::from_json(raw).unwrap();
        assert_eq!(state.locate("1"), Some((Column::ToDo, 0)));
        assert_eq!(state.card_count(), 1);
    }

    #[test]
    fn skips_malformed_entries() {
        let raw = r#"{"To Do":"nope","In Progress":[42,{"id":"2"},{"id":"3","text":"  "},{"id":"4","text":"Fine"}],"Done":null}"#;
        let state = BoardState::from_json(raw).unwrap();
        assert_eq!(state.card_count(), 1);
        assert_eq!(texts(&state, Column::InProgress), vec!["Fine"]);
    }

    #[rstest]
    #[case("not json")]
    #[case("null")]
    #[case("[1,2,3]")]
    #[case("\"To Do\"")]
    fn rejects_non_object_top_level(#[case] raw: &str) {
        assert!(BoardState::from_json(raw).is_err());
    }

    #[test]
    fn push_refuses_blank_text_and_taken_ids() {
        let mut state = BoardState::new();
        assert!(state.push_card(Column::ToDo, CardRecord::new("1", "A")));
        assert!(!state.push_card(Column::Done, CardRecord::new("1", "B")));
        assert!(!state.push_card(Column::Done, CardRecord::new("2", "   ")));
        assert_eq!(state.card_count(), 1);
    }

    #[rstest]
    #[case(Column::ToDo, 0, vec!["b", "a", "c"], vec![])]
    #[case(Column::ToDo, 2, vec!["a", "c", "b"], vec![])]
    #[case(Column::ToDo, 99, vec!["a", "c", "b"], vec![])]
    #[case(Column::Done, 0, vec!["a", "c"], vec!["b"])]
    fn move_card_splices_at_index(
        #[case] column: Column,
        #[case] index: usize,
        #[case] todo: Vec<&str>,
        #[case] done: Vec<&str>,
    ) {
        let mut state = BoardState::new();
        for text in ["a", "b", "c"] {
            state.push_card(Column::ToDo, CardRecord::new(text, text));
        }

        assert!(state.move_card("b", column, index));
        assert_eq!(texts(&state, Column::ToDo), todo);
        assert_eq!(texts(&state, Column::Done), done);
        assert_eq!(state.card_count(), 3);
    }

    #[test]
    fn move_unknown_card_changes_nothing() {
        let mut state = BoardState::new();
        state.push_card(Column::ToDo, CardRecord::new("1", "A"));
        let before = state.clone();

        assert!(!state.move_card("missing", Column::Done, 0));
        assert_eq!(state, before);
    }

    #[test]
    fn next_card_id_skips_taken_timestamps() {
        let mut state = BoardState::new();
        assert_eq!(state.next_card_id(1000), "1000");

        state.push_card(Column::ToDo, CardRecord::new("1000", "A"));
        state.push_card(Column::Done, CardRecord::new("1001", "B"));
        assert_eq!(state.next_card_id(1000), "1002");
    }
}
