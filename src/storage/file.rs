//! File system storage implementation.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, SpamSieveError};
use crate::storage::Storage;

/// A file system storage backend rooted at a directory.
///
/// Blob names are resolved relative to the root directory, which is created
/// on construction if it does not exist.
#[derive(Debug)]
pub struct FileStorage {
    /// Root directory for all blobs.
    root: PathBuf,
}

impl FileStorage {
    /// Create a new file storage rooted at the given directory.
    ///
    /// Creates the directory (and any missing parents) if needed.
    pub fn new<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)?;
        Ok(FileStorage { root })
    }

    /// Get the root directory of this storage.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

impl Storage for FileStorage {
    fn read(&self, name: &str) -> Result<Vec<u8>> {
        let path = self.path_for(name);
        fs::read(&path).map_err(|e| {
            SpamSieveError::storage(format!("failed to read {}: {e}", path.display()))
        })
    }

    fn write(&self, name: &str, data: &[u8]) -> Result<()> {
        let path = self.path_for(name);
        fs::write(&path, data).map_err(|e| {
            SpamSieveError::storage(format!("failed to write {}: {e}", path.display()))
        })
    }

    fn exists(&self, name: &str) -> bool {
        self.path_for(name).is_file()
    }
}
