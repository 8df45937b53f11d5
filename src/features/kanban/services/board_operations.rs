use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;

use super::drag_drop::{drop_index, DragSession, HoverTarget};
use crate::core::models::{BoardState, CardRecord, Column};
use crate::core::services::{console, load_board, save_board, BoardStorage, StorageError};

fn system_clock() -> i64 {
    Utc::now().timestamp_millis()
}

/// Owns the board state and every transition on it. The view only reads
/// `state()` and forwards user events here.
pub struct Board {
    state: BoardState,
    storage: Arc<dyn BoardStorage>,
    drag: DragSession,
    open_entries: HashSet<Column>,
    clock: fn() -> i64,
}

impl Board {
    pub fn initialize(storage: Arc<dyn BoardStorage>) -> Self {
        let state = load_board(storage.as_ref());
        Self {
            state,
            storage,
            drag: DragSession::default(),
            open_entries: HashSet::new(),
            clock: system_clock,
        }
    }

    pub fn with_clock(mut self, clock: fn() -> i64) -> Self {
        self.clock = clock;
        self
    }

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    pub fn is_entry_open(&self, column: Column) -> bool {
        self.open_entries.contains(&column)
    }

    /// Opens the column's text entry. Returns false if one is already open.
    pub fn open_entry(&mut self, column: Column) -> bool {
        self.open_entries.insert(column)
    }

    pub fn cancel_entry(&mut self, column: Column) {
        self.open_entries.remove(&column);
    }

    /// Closes the column's entry and, if `text` has content, appends a new
    /// card to the end of the column and persists.
    pub fn confirm_entry(&mut self, column: Column, text: &str) -> Option<CardRecord> {
        self.open_entries.remove(&column);

        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let card = CardRecord::new(self.state.next_card_id((self.clock)()), text);
        if !self.state.push_card(column, card.clone()) {
            return None;
        }
        self.persist();
        Some(card)
    }

    pub fn delete_card(&mut self, id: &str) -> Option<CardRecord> {
        let removed = self.state.remove_card(id)?;
        if self.drag.source() == Some(id) {
            self.drag.finish();
        }
        self.persist();
        Some(removed)
    }

    pub fn dragging(&self) -> Option<&str> {
        self.drag.source()
    }

    /// Marks `id` as the drag source. A previous drag whose end was never
    /// reported is committed first.
    pub fn drag_start(&mut self, id: &str) -> bool {
        if !self.state.contains(id) {
            return false;
        }
        self.drag_end();
        self.drag.start(id);
        true
    }

    /// Moves the dragged card to where the pointer is over `column`. Returns
    /// whether the board changed.
    pub fn drag_over(&mut self, column: Column, hover: Option<&HoverTarget>) -> bool {
        let Some(source) = self.drag.source() else {
            return false;
        };
        let Some(index) = drop_index(self.state.cards(column), source, hover) else {
            return false;
        };
        if self.state.locate(source) == Some((column, index)) {
            return false;
        }

        let source = source.to_string();
        self.state.move_card(&source, column, index)
    }

    /// Ends the active drag and persists wherever the card landed. Returns
    /// false if no drag was active.
    pub fn drag_end(&mut self) -> bool {
        if self.drag.finish().is_none() {
            return false;
        }
        self.persist();
        true
    }

    pub fn persist(&self) {
        if let Err(e) = self.try_persist() {
            console::error(&format!("Failed to save board: {}", e));
        }
    }

    fn try_persist(&self) -> Result<(), StorageError> {
        save_board(self.storage.as_ref(), &self.state)
    }
}
