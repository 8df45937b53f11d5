pub mod console;
pub mod storage;

pub use storage::*;
