//! Storage abstraction layer for fitted model artifacts.
//!
//! This module exposes a small pluggable storage facade used by the model
//! store. File and memory backends can be swapped without touching
//! higher-level code, which keeps both initialization branches (load an
//! existing artifact vs. fit from the bootstrap corpus) independently
//! testable.
//!
//! # Storage Types
//!
//! ## FileStorage
//! - Disk-based persistent storage rooted at a directory
//!
//! ## MemoryStorage
//! - In-memory storage for testing; fast but non-persistent
//!
//! # Example
//!
//! ```
//! use spamsieve::storage::Storage;
//! use spamsieve::storage::memory::MemoryStorage;
//!
//! # fn main() -> spamsieve::error::Result<()> {
//! let storage = MemoryStorage::new();
//! storage.write("model.json", b"{}")?;
//! assert!(storage.exists("model.json"));
//! assert_eq!(storage.read("model.json")?, b"{}");
//! # Ok(())
//! # }
//! ```

pub mod file;
pub mod memory;

use crate::error::Result;

/// A trait for storage backends that can store and retrieve named blobs.
///
/// This provides a pluggable interface for different storage
/// implementations like the file system or memory.
pub trait Storage: Send + Sync + std::fmt::Debug {
    /// Read the full contents of a named blob.
    ///
    /// Returns a storage error if the blob does not exist or cannot be
    /// read.
    fn read(&self, name: &str) -> Result<Vec<u8>>;

    /// Write a named blob, replacing any existing contents.
    fn write(&self, name: &str, data: &[u8]) -> Result<()>;

    /// Check whether a named blob exists.
    fn exists(&self, name: &str) -> bool;
}
