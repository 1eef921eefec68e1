use std::collections::HashMap;
use std::fmt;
use std::io::Read;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(String),
}

/// A format-specific decoder
///
/// Decoders are stateless: they read the whole stream and either produce a
/// fresh value or report why they could not.
///
/// Any `Fn(&mut dyn Read) -> Result<T, DecodeError>` is a decoder, which is
/// handy for one-off formats:
///
/// ```
/// use std::io::Read;
/// use confusion::{DecodeError, DecoderRegistry};
///
/// let registry = DecoderRegistry::new().with(".txt", |reader: &mut dyn Read| {
///     let mut text = String::new();
///     reader.read_to_string(&mut text)?;
///     Ok::<_, DecodeError>(text.trim().to_string())
/// });
/// assert!(registry.contains(".txt"));
/// ```
pub trait Decoder<T>: Send + Sync {
    /// Decode a value from `reader`
    ///
    /// # Returns
    /// * `Ok(value)` - The stream held a valid document
    /// * `Err(DecodeError)` - The stream could not be read or parsed
    fn decode(&self, reader: &mut dyn Read) -> Result<T, DecodeError>;
}

impl<T, F> Decoder<T> for F
where
    F: Fn(&mut dyn Read) -> Result<T, DecodeError> + Send + Sync,
{
    fn decode(&self, reader: &mut dyn Read) -> Result<T, DecodeError> {
        self(reader)
    }
}

/// Maps file extensions to decoders
///
/// Keys include the leading dot (`".json"`, not `"json"`) and are matched
/// exactly; `".TOML"` and `".toml"` are distinct entries.
pub struct DecoderRegistry<T> {
    decoders: HashMap<String, Box<dyn Decoder<T>>>,
}

impl<T> DecoderRegistry<T> {
    pub fn new() -> Self {
        Self {
            decoders: HashMap::new(),
        }
    }

    /// Register `decoder` for `extension`, replacing any previous entry
    pub fn register(&mut self, extension: impl Into<String>, decoder: impl Decoder<T> + 'static) {
        self.decoders.insert(extension.into(), Box::new(decoder));
    }

    /// Builder form of [`register`](Self::register)
    #[must_use]
    pub fn with(
        mut self,
        extension: impl Into<String>,
        decoder: impl Decoder<T> + 'static,
    ) -> Self {
        self.register(extension, decoder);
        self
    }

    pub fn get(&self, extension: &str) -> Option<&dyn Decoder<T>> {
        self.decoders.get(extension).map(Box::as_ref)
    }

    pub fn contains(&self, extension: &str) -> bool {
        self.decoders.contains_key(extension)
    }

    /// Registered extensions in sorted order
    pub fn extensions(&self) -> Vec<&str> {
        let mut extensions: Vec<&str> = self.decoders.keys().map(String::as_str).collect();
        extensions.sort_unstable();
        extensions
    }

    pub fn is_empty(&self) -> bool {
        self.decoders.is_empty()
    }
}

impl<T> Default for DecoderRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for DecoderRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecoderRegistry")
            .field("extensions", &self.extensions())
            .finish()
    }
}
