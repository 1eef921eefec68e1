use std::io::Read;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum FileSystemError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Path error: {0}")]
    PathError(String),
}

/// Kind of an existing filesystem entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

pub trait FileSystem: Send + Sync {
    /// Query the status of a path
    ///
    /// Symbolic links are followed, so a link to a regular file reports
    /// `EntryKind::File`.
    ///
    /// # Arguments
    /// * `path` - The path to query
    ///
    /// # Returns
    /// * `Ok(EntryKind)` - The kind of the entry found at `path`
    /// * `Err` - If the entry does not exist or cannot be inspected
    fn metadata(&self, path: &Path) -> Result<EntryKind, FileSystemError>;

    /// Open a file for reading
    ///
    /// The returned reader owns the underlying handle; dropping it releases
    /// the handle.
    ///
    /// # Arguments
    /// * `path` - The file to open
    ///
    /// # Returns
    /// * `Ok(reader)` - A byte stream over the file contents
    /// * `Err` - If the file cannot be opened
    fn open(&self, path: &Path) -> Result<Box<dyn Read + Send>, FileSystemError>;
}
