use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::adapters::{OsFs, ProcessEnv};
use crate::core::decoder::DecodeError;
use crate::core::ports::{Environment, FileSystem, FileSystemError};
use crate::core::probe::{self, Probe};
use crate::core::resolver;
use crate::errors::LoadError;
use crate::options::Options;

/// A successfully loaded configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Loaded<T> {
    /// Fully expanded path of the file that was decoded
    pub path: PathBuf,
    pub value: T,
}

/// What happened to one candidate path during a search
#[derive(Debug)]
pub enum Outcome {
    /// Missing or not inspectable
    Absent,
    Directory,
    /// A file exists but has no registered decoder; the search stopped here
    DecoderMissing { extension: String },
    /// The file exists but could not be opened
    Unreadable(FileSystemError),
    /// The decoder rejected the file; the search moved on
    DecodeFailed(DecodeError),
    Loaded,
}

#[derive(Debug)]
pub struct Candidate {
    pub path: PathBuf,
    pub outcome: Outcome,
}

/// Record of every candidate examined by one search, in order
///
/// Candidates after the one that ended the search are never examined and
/// therefore never appear here.
#[derive(Debug, Default)]
pub struct Trace {
    pub candidates: Vec<Candidate>,
}

impl Trace {
    fn record(&mut self, path: &Path, outcome: Outcome) {
        self.candidates.push(Candidate {
            path: path.to_path_buf(),
            outcome,
        });
    }

    /// Decode errors that were swallowed while falling back
    pub fn decode_failures(&self) -> impl Iterator<Item = (&Path, &DecodeError)> {
        self.candidates.iter().filter_map(|c| match &c.outcome {
            Outcome::DecodeFailed(e) => Some((c.path.as_path(), e)),
            _ => None,
        })
    }
}

/// Searches candidate directories for a configuration file
///
/// Holds no state besides its two capabilities, so one loader can serve any
/// number of loads, from any number of threads.
#[derive(Clone)]
pub struct ConfigLoader {
    fs: Arc<dyn FileSystem>,
    env: Arc<dyn Environment>,
}

impl ConfigLoader {
    pub fn new(fs: Arc<dyn FileSystem>, env: Arc<dyn Environment>) -> Self {
        Self { fs, env }
    }

    /// Loader backed by the real filesystem and the process environment
    pub fn os() -> Self {
        Self::new(Arc::new(OsFs::new()), Arc::new(ProcessEnv::new()))
    }

    /// Load `file_name` from the first matching location in `options`
    ///
    /// Templates are tried strictly in order:
    /// - missing paths and directories are skipped
    /// - a file whose extension has no decoder ends the search with
    ///   `LoadError::DecoderNotFound`
    /// - a file that fails to open or decode is skipped
    /// - the first file that decodes wins
    ///
    /// # Errors
    ///
    /// - `LoadError::DecoderNotFound` if a matching file has an unregistered extension
    /// - `LoadError::ConfigNotFound` if no template yields a decodable file
    pub fn load<T>(&self, file_name: &str, options: &Options<T>) -> Result<Loaded<T>, LoadError> {
        self.search(file_name, options, &mut Trace::default())
    }

    /// Same as [`load`](Self::load), also reporting every examined candidate
    pub fn load_traced<T>(
        &self,
        file_name: &str,
        options: &Options<T>,
    ) -> (Result<Loaded<T>, LoadError>, Trace) {
        let mut trace = Trace::default();
        let result = self.search(file_name, options, &mut trace);
        (result, trace)
    }

    /// Load into a caller-owned value
    ///
    /// `target` is only written when the load succeeds.
    ///
    /// # Errors
    ///
    /// See [`load`](Self::load).
    pub fn load_into<T>(
        &self,
        file_name: &str,
        options: &Options<T>,
        target: &mut T,
    ) -> Result<PathBuf, LoadError> {
        let loaded = self.load(file_name, options)?;
        *target = loaded.value;
        Ok(loaded.path)
    }

    fn search<T>(
        &self,
        file_name: &str,
        options: &Options<T>,
        trace: &mut Trace,
    ) -> Result<Loaded<T>, LoadError> {
        for template in options.templates() {
            let path =
                resolver::candidate_path(template, options.prefix(), file_name, self.env.as_ref());

            let extension = match probe::probe(self.fs.as_ref(), &path) {
                Probe::Absent => {
                    tracing::debug!(path = %path.display(), "Candidate not present");
                    trace.record(&path, Outcome::Absent);
                    continue;
                }
                Probe::Directory => {
                    tracing::debug!(path = %path.display(), "Candidate is a directory");
                    trace.record(&path, Outcome::Directory);
                    continue;
                }
                Probe::File { extension } => extension,
            };

            let Some(decoder) = options.registry().get(&extension) else {
                tracing::debug!(
                    path = %path.display(),
                    extension = %extension,
                    "No decoder registered"
                );
                trace.record(
                    &path,
                    Outcome::DecoderMissing {
                        extension: extension.clone(),
                    },
                );
                return Err(LoadError::DecoderNotFound { path, extension });
            };

            let mut reader = match self.fs.open(&path) {
                Ok(reader) => reader,
                Err(e) => {
                    tracing::debug!(path = %path.display(), error = %e, "Failed to open candidate");
                    trace.record(&path, Outcome::Unreadable(e));
                    continue;
                }
            };

            let decoded = decoder.decode(&mut reader);
            drop(reader);

            match decoded {
                Ok(value) => {
                    tracing::debug!(path = %path.display(), "Config loaded");
                    trace.record(&path, Outcome::Loaded);
                    return Ok(Loaded { path, value });
                }
                Err(e) => {
                    tracing::debug!(
                        path = %path.display(),
                        error = %e,
                        "Failed to decode candidate, trying next"
                    );
                    trace.record(&path, Outcome::DecodeFailed(e));
                }
            }
        }

        Err(LoadError::ConfigNotFound)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::os()
    }
}

/// Load `file_name` into `target` using the real filesystem and environment
///
/// Returns the path of the file that was loaded.
///
/// # Errors
///
/// See [`ConfigLoader::load`].
pub fn load_config<T>(
    file_name: &str,
    options: &Options<T>,
    target: &mut T,
) -> Result<PathBuf, LoadError> {
    ConfigLoader::os().load_into(file_name, options, target)
}
