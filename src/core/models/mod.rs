pub mod board;

pub use board::{BoardState, CardRecord, Column};
