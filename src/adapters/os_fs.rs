use std::fs;
use std::io::Read;
use std::path::Path;

use crate::core::ports::{EntryKind, FileSystem, FileSystemError};

/// Filesystem backed by `std::fs`
#[derive(Debug)]
pub struct OsFs;

impl OsFs {
    pub fn new() -> Self {
        Self
    }
}

impl Default for OsFs {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for OsFs {
    fn metadata(&self, path: &Path) -> Result<EntryKind, FileSystemError> {
        let metadata = fs::metadata(path)?;
        if metadata.is_dir() {
            Ok(EntryKind::Directory)
        } else {
            Ok(EntryKind::File)
        }
    }

    fn open(&self, path: &Path) -> Result<Box<dyn Read + Send>, FileSystemError> {
        let file = fs::File::open(path)?;
        Ok(Box::new(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_metadata_file() {
        let temp_dir = TempDir::new().unwrap();
        let adapter = OsFs::new();
        let file_path = temp_dir.path().join("config.toml");
        fs::File::create(&file_path).unwrap();

        assert_eq!(adapter.metadata(&file_path).unwrap(), EntryKind::File);
    }

    #[test]
    fn test_metadata_directory() {
        let temp_dir = TempDir::new().unwrap();
        let adapter = OsFs::new();

        assert_eq!(adapter.metadata(temp_dir.path()).unwrap(), EntryKind::Directory);
    }

    #[test]
    fn test_metadata_missing() {
        let temp_dir = TempDir::new().unwrap();
        let adapter = OsFs::new();

        let result = adapter.metadata(&temp_dir.path().join("nonexistent"));

        assert!(matches!(result, Err(FileSystemError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound));
    }

    #[cfg(unix)]
    #[test]
    fn test_metadata_follows_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let adapter = OsFs::new();
        let target = temp_dir.path().join("target.json");
        fs::File::create(&target).unwrap();

        let link = temp_dir.path().join("link.json");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        assert_eq!(adapter.metadata(&link).unwrap(), EntryKind::File);
    }

    #[test]
    fn test_open_reads_contents() {
        let temp_dir = TempDir::new().unwrap();
        let adapter = OsFs::new();
        let file_path = temp_dir.path().join("config.toml");
        fs::write(&file_path, "message = \"hi\"").unwrap();

        let mut content = String::new();
        adapter
            .open(&file_path)
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();

        assert_eq!(content, "message = \"hi\"");
    }

    #[test]
    fn test_open_missing() {
        let temp_dir = TempDir::new().unwrap();
        let adapter = OsFs::new();

        assert!(adapter.open(&temp_dir.path().join("nonexistent")).is_err());
    }
}
