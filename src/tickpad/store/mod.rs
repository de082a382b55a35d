//! # Storage Layer
//!
//! Tickpad persists everything as named text values, the same shape as browser
//! local storage: a key maps to a string, and a write replaces the whole value.
//! The [`KeyValueStore`] trait is that contract.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage. All keys live in one
//!   `storage.json` object inside the data directory. Writes go to a temp file
//!   that is renamed over the old one, so a load never observes half a write.
//! - [`memory::InMemoryStore`]: no persistence, for tests.
//!
//! ## Snapshots
//!
//! Collections are never written piecemeal. [`save_collection`] serializes the
//! full sequence as a JSON array and overwrites the key; [`load_collection`]
//! reverses it, treating a missing or unreadable value as an empty collection.
//!
//! ```text
//! storage.json
//! {
//!   "todos": "[{\"id\":1736083800000,\"text\":\"Buy milk\",\"completed\":false}]",
//!   "notes": "[]",
//!   "theme": "dark",
//!   "tab":   "todo"
//! }
//! ```

use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

pub mod fs;
pub mod memory;

/// Named text values that survive restarts.
pub trait KeyValueStore {
    /// Returns the stored text, or `None` when the key was never written.
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn save(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Loads a JSON array snapshot. Absent or corrupt data yields an empty vec.
pub fn load_collection<T, S>(store: &S, key: &str) -> Result<Vec<T>>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let Some(raw) = store.load(key)? else {
        return Ok(Vec::new());
    };

    match serde_json::from_str::<Option<Vec<T>>>(&raw) {
        Ok(items) => Ok(items.unwrap_or_default()),
        Err(err) => {
            warn!(key, error = %err, "discarding unreadable snapshot");
            Ok(Vec::new())
        }
    }
}

/// Serializes the whole collection and overwrites `key`.
pub fn save_collection<T, S>(store: &mut S, key: &str, items: &[T]) -> Result<()>
where
    T: Serialize,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(items)?;
    store.save(key, &raw)
}
