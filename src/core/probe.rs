use std::path::Path;

use crate::core::ports::{EntryKind, FileSystem};

/// Result of probing one candidate path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Probe {
    /// The status query failed: missing, inaccessible, or any other error
    Absent,
    Directory,
    File { extension: String },
}

/// Inspect `path` and classify what lives there
///
/// Errors from the status query are deliberately not distinguished; a path
/// that cannot be inspected is treated like one that does not exist.
pub fn probe(fs: &dyn FileSystem, path: &Path) -> Probe {
    match fs.metadata(path) {
        Ok(EntryKind::Directory) => Probe::Directory,
        Ok(EntryKind::File) => Probe::File {
            extension: extension_of(path),
        },
        Err(e) => {
            tracing::trace!(path = %path.display(), error = %e, "Status query failed");
            Probe::Absent
        }
    }
}

/// Extension of the base name of `path`, including the leading dot
///
/// Everything from the last `.` of the base name onwards is the extension,
/// so `.apprc` yields `.apprc` and `config.tar.gz` yields `.gz`. Returns an
/// empty string when the base name contains no dot.
///
/// The suffix is cut from the raw name, so a non-UTF-8 stem does not affect
/// it. An extension that is itself not UTF-8 is converted lossily; it cannot
/// match any registered key either way.
pub fn extension_of(path: &Path) -> String {
    let Some(name) = path.file_name() else {
        return String::new();
    };

    let bytes = name.as_encoded_bytes();
    bytes
        .iter()
        .rposition(|&b| b == b'.')
        .map(|pos| String::from_utf8_lossy(&bytes[pos..]).into_owned())
        .unwrap_or_default()
}
