use std::sync::{Arc, Mutex};

use thiserror::Error;

use super::console;
use crate::core::models::BoardState;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is not available in this environment")]
    Unavailable,
    #[error("failed to read '{key}' from local storage: {reason}")]
    Read { key: String, reason: String },
    #[error("failed to write '{key}' to local storage: {reason}")]
    Write { key: String, reason: String },
    #[error("failed to encode board state: {0}")]
    Encode(#[from] serde_json::Error),
}

/// A single string slot holding the serialized board.
pub trait BoardStorage: Send + Sync {
    fn read(&self) -> Result<Option<String>, StorageError>;
    fn write(&self, value: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`, looked up on every access so the handle itself
/// holds nothing but the key.
#[derive(Debug, Clone)]
pub struct BrowserStorage {
    key: String,
}

impl BrowserStorage {
    /// Fails when the page has no usable local storage.
    pub fn open(key: impl Into<String>) -> Result<Self, StorageError> {
        let storage = Self { key: key.into() };
        storage.local_storage()?;
        Ok(storage)
    }

    fn local_storage(&self) -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

impl BoardStorage for BrowserStorage {
    fn read(&self) -> Result<Option<String>, StorageError> {
        self.local_storage()?
            .get_item(&self.key)
            .map_err(|e| StorageError::Read {
                key: self.key.clone(),
                reason: format!("{:?}", e),
            })
    }

    fn write(&self, value: &str) -> Result<(), StorageError> {
        self.local_storage()?
            .set_item(&self.key, value)
            .map_err(|e| StorageError::Write {
                key: self.key.clone(),
                reason: format!("{:?}", e),
            })
    }
}

#[derive(Debug, Default)]
struct MemorySlot {
    value: Option<String>,
    writes: usize,
}

/// Process-local slot. Stands in for local storage when the browser refuses
/// it; clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slot: Arc<Mutex<MemorySlot>>,
}

impl MemoryStorage {
    pub fn with_value(value: impl Into<String>) -> Self {
        let storage = Self::default();
        if let Ok(mut slot) = storage.slot.lock() {
            slot.value = Some(value.into());
        }
        storage
    }

    pub fn value(&self) -> Option<String> {
        self.slot.lock().ok().and_then(|slot| slot.value.clone())
    }

    /// Number of writes since creation.
    pub fn writes(&self) -> usize {
        self.slot.lock().map(|slot| slot.writes).unwrap_or(0)
    }
}

impl BoardStorage for MemoryStorage {
    fn read(&self) -> Result<Option<String>, StorageError> {
        Ok(self.value())
    }

    fn write(&self, value: &str) -> Result<(), StorageError> {
        let mut slot = self.slot.lock().map_err(|e| StorageError::Write {
            key: "memory".to_string(),
            reason: e.to_string(),
        })?;
        slot.value = Some(value.to_string());
        slot.writes += 1;
        Ok(())
    }
}

// Load the board from storage. Anything unreadable yields an empty board.
pub fn load_board(storage: &dyn BoardStorage) -> BoardState {
    match storage.read() {
        Ok(Some(raw)) => match BoardState::from_json(&raw) {
            Ok(state) => {
                console::log(&format!("Loaded board with {} cards", state.card_count()));
                state
            }
            Err(e) => {
                console::error(&format!("Stored board is corrupt, starting empty: {}", e));
                BoardState::new()
            }
        },
        Ok(None) => BoardState::new(),
        Err(e) => {
            console::error(&format!("Failed to load board, starting empty: {}", e));
            BoardState::new()
        }
    }
}

// Save the whole board as the replacement value
pub fn save_board(storage: &dyn BoardStorage, state: &BoardState) -> Result<(), StorageError> {
    let json = state.to_json()?;
    storage.write(&json)?;
    console::log(&format!("Saved board with {} cards", state.card_count()));
    Ok(())
}
