pub mod environment;
pub mod file_system;

pub use environment::Environment;
pub use file_system::{EntryKind, FileSystem, FileSystemError};
