pub mod board;
pub mod card;
pub mod card_entry;
pub mod column;

pub use board::KanbanBoard;
pub use card::Card;
pub use card_entry::NewCardEntry;
pub use column::KanbanColumn;
