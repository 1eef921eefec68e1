//! Mock filesystem for testing
//!
//! Wraps `MemoryFs` and records every status query so tests can assert
//! which candidates were probed.

use std::collections::HashSet;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::adapters::MemoryFs;
use crate::core::ports::{EntryKind, FileSystem, FileSystemError};

pub struct MockFileSystem {
    inner: MemoryFs,
    probed: Mutex<Vec<PathBuf>>,
    unreadable: Mutex<HashSet<PathBuf>>,
    force_error: Mutex<Option<FileSystemError>>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self {
            inner: MemoryFs::new(),
            probed: Mutex::new(Vec::new()),
            unreadable: Mutex::new(HashSet::new()),
            force_error: Mutex::new(None),
        }
    }

    /// Add a file to the mock filesystem
    pub fn add_file(&self, path: impl AsRef<Path>, contents: &str) {
        self.inner.add_file(path, contents);
    }

    /// Add a directory to the mock filesystem
    pub fn add_dir(&self, path: impl AsRef<Path>) {
        self.inner.add_dir(path);
    }

    /// Make `open` fail with `PermissionDenied` for this path
    pub fn deny_open(&self, path: impl AsRef<Path>) {
        self.unreadable
            .lock()
            .unwrap()
            .insert(path.as_ref().to_path_buf());
    }

    /// Inject an error to be returned on the next operation
    pub fn inject_error(&self, error: FileSystemError) {
        *self.force_error.lock().unwrap() = Some(error);
    }

    /// Paths passed to `metadata`, in call order
    pub fn probed_paths(&self) -> Vec<PathBuf> {
        self.probed.lock().unwrap().clone()
    }

    fn check_error(&self) -> Result<(), FileSystemError> {
        if let Some(err) = self.force_error.lock().unwrap().take() {
            return Err(err);
        }
        Ok(())
    }
}

impl Default for MockFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for MockFileSystem {
    fn metadata(&self, path: &Path) -> Result<EntryKind, FileSystemError> {
        self.probed.lock().unwrap().push(path.to_path_buf());
        self.check_error()?;
        self.inner.metadata(path)
    }

    fn open(&self, path: &Path) -> Result<Box<dyn Read + Send>, FileSystemError> {
        self.check_error()?;

        if self.unreadable.lock().unwrap().contains(path) {
            return Err(FileSystemError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "Permission denied",
            )));
        }

        self.inner.open(path)
    }
}
