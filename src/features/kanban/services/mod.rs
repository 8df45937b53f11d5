pub mod board_operations;
pub mod drag_drop;

pub use board_operations::Board;
pub use drag_drop::{CardBounds, HoverTarget};
