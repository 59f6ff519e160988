//! JSON-serialized localStorage helpers.
//!
//! Values are stored as JSON strings under their keys. Reads fall back to
//! `None` when the key is absent or the stored value no longer deserializes,
//! leaving fallback policy to the caller.

use std::fmt;

use serde::{Serialize, de::DeserializeOwned};

use super::dom;

/// Storage operation errors.
#[derive(Debug, Clone)]
pub enum StorageError {
    /// localStorage not available.
    Unavailable,
    /// Failed to serialize data to JSON.
    SerializationFailed,
    /// Failed to write to storage.
    WriteFailed,
    /// Failed to remove from storage.
    RemoveFailed,
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable => write!(f, "localStorage not available"),
            Self::SerializationFailed => write!(f, "failed to serialize data to JSON"),
            Self::WriteFailed => write!(f, "failed to write to localStorage"),
            Self::RemoveFailed => write!(f, "failed to remove from localStorage"),
        }
    }
}

impl std::error::Error for StorageError {}

/// Get a value from localStorage.
///
/// Returns `None` if the key doesn't exist or deserialization fails.
pub fn get<T: DeserializeOwned>(key: &str) -> Option<T> {
    let storage = dom::local_storage()?;
    let json = storage.get_item(key).ok()??;
    serde_json::from_str(&json).ok()
}

/// Store a value in localStorage.
pub fn set<T: Serialize>(key: &str, data: &T) -> Result<(), StorageError> {
    let storage = dom::local_storage().ok_or(StorageError::Unavailable)?;
    let json = serde_json::to_string(data).map_err(|_| StorageError::SerializationFailed)?;
    storage
        .set_item(key, &json)
        .map_err(|_| StorageError::WriteFailed)
}

/// Remove a key from localStorage.
///
/// Removing an absent key succeeds.
pub fn remove(key: &str) -> Result<(), StorageError> {
    let storage = dom::local_storage().ok_or(StorageError::Unavailable)?;
    storage
        .remove_item(key)
        .map_err(|_| StorageError::RemoveFailed)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use wasm_bindgen_test::*;

    use super::*;
    use crate::models::{LayoutDirection, UiConfig};

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_round_trip() {
        let config = UiConfig {
            layout: LayoutDirection::Down,
            expand: false,
            controls: true,
        };
        set("storage_test_config", &config).unwrap();
        assert_eq!(get::<UiConfig>("storage_test_config"), Some(config));
        remove("storage_test_config").unwrap();
    }

    #[wasm_bindgen_test]
    fn test_absent_key_reads_none() {
        let _ = remove("storage_test_absent");
        assert_eq!(get::<UiConfig>("storage_test_absent"), None);
    }

    #[wasm_bindgen_test]
    fn test_malformed_entry_reads_none() {
        let storage = dom::local_storage().unwrap();
        storage
            .set_item("storage_test_malformed", "{not json")
            .unwrap();
        assert_eq!(get::<UiConfig>("storage_test_malformed"), None);
        remove("storage_test_malformed").unwrap();
    }

    #[wasm_bindgen_test]
    fn test_remove_absent_key_succeeds() {
        assert!(remove("storage_test_never_written").is_ok());
    }
}
