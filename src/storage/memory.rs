//! In-memory slot store for tests.

use std::collections::HashMap;
use std::io;

use super::{KeyValueStore, Result};

/// Slot store held in a map. Reads and writes can be made to fail on demand.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
    fail_reads: bool,
    fail_writes: bool,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose slot `key` already holds `value`.
    pub fn with_slot(key: &str, value: &str) -> Self {
        let mut store = Self::default();
        store.slots.insert(key.to_string(), value.to_string());
        store
    }

    /// Make every subsequent `get` fail (or succeed again).
    pub fn fail_reads(&mut self, fail: bool) {
        self.fail_reads = fail;
    }

    /// Make every subsequent `set` fail (or succeed again).
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Number of successful writes.
    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn slot(&self, key: &str) -> Option<&str> {
        self.slots.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        if self.fail_reads {
            let err = io::Error::new(io::ErrorKind::PermissionDenied, "slot is locked");
            return Err(err.into());
        }
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes {
            return Err(io::Error::other("storage quota exceeded").into());
        }
        self.slots.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}
