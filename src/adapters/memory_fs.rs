//! In-memory filesystem
//!
//! Useful for exercising a loader without touching the disk. Adding a file
//! creates its parent directories, as `mkdir -p` would.

use std::collections::HashMap;
use std::io::{self, Cursor, Read};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::core::ports::{EntryKind, FileSystem, FileSystemError};

#[derive(Debug, Clone)]
enum Node {
    Directory,
    File(Vec<u8>),
}

#[derive(Debug, Default)]
pub struct MemoryFs {
    nodes: Mutex<HashMap<PathBuf, Node>>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or overwrite) a file and its parent directories
    pub fn add_file(&self, path: impl AsRef<Path>, contents: impl Into<Vec<u8>>) {
        let path = path.as_ref();
        let mut nodes = self.nodes();
        if let Some(parent) = path.parent() {
            insert_dirs(&mut nodes, parent);
        }
        nodes.insert(path.to_path_buf(), Node::File(contents.into()));
    }

    /// Add a directory and its parents
    pub fn add_dir(&self, path: impl AsRef<Path>) {
        insert_dirs(&mut self.nodes(), path.as_ref());
    }

    /// Remove an entry and everything below it
    pub fn remove(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        self.nodes().retain(|p, _| !p.starts_with(path));
    }

    fn nodes(&self) -> MutexGuard<'_, HashMap<PathBuf, Node>> {
        // The map is never left half-updated, so a poisoned lock is still usable.
        self.nodes.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn insert_dirs(nodes: &mut HashMap<PathBuf, Node>, path: &Path) {
    let mut current = PathBuf::new();
    for component in path.components() {
        current.push(component);
        nodes.entry(current.clone()).or_insert(Node::Directory);
    }
}

fn not_found(path: &Path) -> FileSystemError {
    FileSystemError::Io(io::Error::new(
        io::ErrorKind::NotFound,
        format!("{} not found", path.display()),
    ))
}

impl FileSystem for MemoryFs {
    fn metadata(&self, path: &Path) -> Result<EntryKind, FileSystemError> {
        match self.nodes().get(path) {
            Some(Node::Directory) => Ok(EntryKind::Directory),
            Some(Node::File(_)) => Ok(EntryKind::File),
            None => Err(not_found(path)),
        }
    }

    fn open(&self, path: &Path) -> Result<Box<dyn Read + Send>, FileSystemError> {
        match self.nodes().get(path) {
            Some(Node::File(contents)) => Ok(Box::new(Cursor::new(contents.clone()))),
            Some(Node::Directory) => Err(FileSystemError::Io(io::Error::new(
                io::ErrorKind::IsADirectory,
                format!("{} is a directory", path.display()),
            ))),
            None => Err(not_found(path)),
        }
    }
}
