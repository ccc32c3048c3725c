//! Session caching for fetched configuration.
//!
//! Entries live in sessionStorage, so a closed tab always starts fresh while
//! navigation within a session reuses what was already fetched.

use serde::{Serialize, de::DeserializeOwned};

use super::dom;

/// Cache operation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// sessionStorage not available.
    StorageUnavailable,
    /// Failed to serialize data to JSON.
    SerializationFailed,
    /// Failed to write to storage (quota, private mode).
    WriteFailed,
}

/// Cache key for an item under a namespace prefix.
pub fn key(prefix: &str, id: &str) -> String {
    format!("{}{}", prefix, id)
}

/// Get cached data from sessionStorage.
///
/// Returns `None` if the key doesn't exist or the stored value no longer
/// decodes (stale shape after a deploy).
pub fn get<T: DeserializeOwned>(key: &str) -> Option<T> {
    let storage = dom::session_storage()?;
    let json = storage.get_item(key).ok()??;
    match serde_json::from_str(&json) {
        Ok(value) => Some(value),
        Err(e) => {
            log::debug!("dropping undecodable cache entry '{}': {}", key, e);
            let _ = storage.remove_item(key);
            None
        }
    }
}

/// Store data in sessionStorage.
pub fn set<T: Serialize>(key: &str, data: &T) -> Result<(), CacheError> {
    let storage = dom::session_storage().ok_or(CacheError::StorageUnavailable)?;
    let json = serde_json::to_string(data).map_err(|_| CacheError::SerializationFailed)?;
    storage
        .set_item(key, &json)
        .map_err(|_| CacheError::WriteFailed)
}
