use std::sync::Arc;

use leptos::prelude::*;
use crate::core::config::BoardConfig;
use crate::core::models::Column;
use crate::core::services::{console, BoardStorage, BrowserStorage, MemoryStorage};
use crate::features::kanban::services::{Board, HoverTarget};

#[derive(Clone, Copy)]
pub struct BoardHook {
    pub board: ReadSignal<Board>,
    pub open_entry: Callback<Column>,
    pub confirm_entry: Callback<(Column, String)>,
    pub cancel_entry: Callback<Column>,
    pub delete_card: Callback<String>,
    pub drag_start: Callback<String>,
    pub drag_over: Callback<(Column, Option<HoverTarget>)>,
    pub drag_end: Callback<()>,
}

fn open_storage(config: &BoardConfig) -> Arc<dyn BoardStorage> {
    match BrowserStorage::open(config.storage_key.clone()) {
        Ok(storage) => Arc::new(storage),
        Err(e) => {
            // Keep the board usable for this session
            console::error(&format!("{}; changes will not survive a reload", e));
            Arc::new(MemoryStorage::default())
        }
    }
}

pub fn use_board(config: BoardConfig) -> BoardHook {
    let board = RwSignal::new(Board::initialize(open_storage(&config)));

    let open_entry = Callback::new(move |column: Column| {
        board.maybe_update(|b| b.open_entry(column));
    });

    let confirm_entry = Callback::new(move |(column, text): (Column, String)| {
        board.update(|b| {
            if let Some(card) = b.confirm_entry(column, &text) {
                console::log(&format!("Added card {} to {}", card.id, column.as_str()));
            }
        });
    });

    let cancel_entry = Callback::new(move |column: Column| {
        board.update(|b| b.cancel_entry(column));
    });

    let delete_card = Callback::new(move |card_id: String| {
        board.maybe_update(|b| b.delete_card(&card_id).is_some());
    });

    let drag_start = Callback::new(move |card_id: String| {
        board.maybe_update(|b| b.drag_start(&card_id));
    });

    // Fires continuously while the pointer moves; only notify when a card moved
    let drag_over = Callback::new(move |(column, hover): (Column, Option<HoverTarget>)| {
        board.maybe_update(|b| b.drag_over(column, hover.as_ref()));
    });

    let drag_end = Callback::new(move |_: ()| {
        board.maybe_update(|b| b.drag_end());
    });

    // A card moved to another column is rebuilt, and the browser never sends
    // dragend to the detached original. Pointer and key events are held back
    // for the whole native drag, so the first one after it means the drag
    // is over.
    let settle_drag = move || {
        if board.with_untracked(|b| b.dragging().is_some()) {
            board.maybe_update(|b| b.drag_end());
        }
    };
    let pointermove_handle = window_event_listener(leptos::ev::pointermove, move |_| settle_drag());
    let keydown_handle = window_event_listener(leptos::ev::keydown, move |_| settle_drag());
    on_cleanup(move || {
        pointermove_handle.remove();
        keydown_handle.remove();
    });

    BoardHook {
        board: board.read_only(),
        open_entry,
        confirm_entry,
        cancel_entry,
        delete_card,
        drag_start,
        drag_over,
        drag_end,
    }
}
