//! In-memory storage implementation for testing.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::{Result, SpamSieveError};
use crate::storage::Storage;

/// An in-memory storage implementation.
///
/// This is useful for testing and for running without durable artifacts.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    /// The blobs stored in memory.
    blobs: Mutex<HashMap<String, Box<[u8]>>>,
}

impl MemoryStorage {
    /// Create a new memory storage.
    pub fn new() -> Self {
        MemoryStorage {
            blobs: Mutex::new(HashMap::new()),
        }
    }

    /// Get the number of blobs stored.
    pub fn blob_count(&self) -> usize {
        self.blobs.lock().unwrap().len()
    }
}

impl Storage for MemoryStorage {
    fn read(&self, name: &str) -> Result<Vec<u8>> {
        let blobs = self.blobs.lock().unwrap();
        blobs
            .get(name)
            .map(|data| data.to_vec())
            .ok_or_else(|| SpamSieveError::storage(format!("blob not found: {name}")))
    }

    fn write(&self, name: &str, data: &[u8]) -> Result<()> {
        let mut blobs = self.blobs.lock().unwrap();
        blobs.insert(name.to_string(), data.to_vec().into_boxed_slice());
        Ok(())
    }

    fn exists(&self, name: &str) -> bool {
        self.blobs.lock().unwrap().contains_key(name)
    }
}
