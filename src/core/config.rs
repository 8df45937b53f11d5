/// Local storage key the board has always been saved under.
pub const DEFAULT_STORAGE_KEY: &str = "boardState";

#[derive(Debug, Clone, PartialEq)]
pub struct BoardConfig {
    pub storage_key: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}
