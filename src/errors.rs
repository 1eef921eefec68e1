use std::path::PathBuf;

use thiserror::Error;

/// Failure of a configuration load
///
/// Decode failures and unreadable files never surface here; they cause the
/// search to move on to the next candidate.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("config not found")]
    ConfigNotFound,

    #[error("decoder not found for extension '{extension}' ({})", .path.display())]
    DecoderNotFound { path: PathBuf, extension: String },
}
