pub mod ports;

pub mod decoder;
pub use decoder::{DecodeError, Decoder, DecoderRegistry};

pub mod loader;
pub use loader::{Candidate, ConfigLoader, Loaded, Outcome, Trace, load_config};

pub mod probe;
pub mod resolver;
