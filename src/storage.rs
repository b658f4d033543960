//! Durable local storage for the journal.
//!
//! Storage is a string-keyed slot store. The journal owns exactly one slot,
//! [`OBSERVATIONS_KEY`], holding the whole observation sequence as a JSON
//! array, overwritten in full on every change:
//!
//! ```text
//! <root>/
//!   zorki_observations.json   # [{"id": ..., "timestamp": ..., ...}, ...]
//! ```

pub mod codec;
mod file;
#[cfg(test)]
mod memory;

use std::io;

pub use file::FileStore;
#[cfg(test)]
pub use memory::MemoryStore;

/// The slot holding the serialized observation sequence.
pub const OBSERVATIONS_KEY: &str = "zorki_observations";

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = core::result::Result<T, StorageError>;

/// A string-keyed store of whole string values.
///
/// Reads and writes are synchronous local calls. `set` replaces the slot's
/// previous value entirely.
pub trait KeyValueStore {
    /// Reads a slot. An absent slot is `Ok(None)`, not an error.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrites a slot.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}
