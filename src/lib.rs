//! Locate and load a named configuration file
//!
//! A load walks an ordered list of directory templates, expands environment
//! variables in each, appends a fixed subdirectory prefix and the file name,
//! and decodes the first regular file it finds with the decoder registered
//! for its extension.
//!
//! ```no_run
//! use serde::Deserialize;
//! use confusion::{Options, load_config};
//!
//! #[derive(Debug, Default, Deserialize)]
//! struct Config {
//!     message: String,
//! }
//!
//! let options = Options::standard("myapp");
//! let mut config = Config::default();
//! let path = load_config("config.toml", &options, &mut config)?;
//! println!("loaded {} from {}", config.message, path.display());
//! # Ok::<(), confusion::LoadError>(())
//! ```
//!
//! # Search rules
//!
//! - Templates are tried in order; the first file that decodes wins
//! - Missing paths, unreadable paths, and directories are skipped
//! - A file whose decoder rejects it is skipped
//! - A file with no decoder for its extension stops the search with
//!   [`LoadError::DecoderNotFound`]
//! - Running out of templates yields [`LoadError::ConfigNotFound`]

pub mod adapters;
pub mod core;
pub mod decoders;
pub mod errors;
pub mod options;

pub use crate::core::ports::{EntryKind, Environment, FileSystem, FileSystemError};
pub use crate::core::{
    Candidate, ConfigLoader, DecodeError, Decoder, DecoderRegistry, Loaded, Outcome, Trace,
    load_config,
};
pub use decoders::{JsonDecoder, TomlDecoder};
pub use errors::LoadError;
pub use options::Options;
