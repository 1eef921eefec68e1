//! Built-in decoders for common configuration formats
//!
//! Both decoders work for any `T: DeserializeOwned`, so the same decoder
//! value can be registered in registries of different target types.

mod json_decoder;
mod toml_decoder;

pub use json_decoder::JsonDecoder;
pub use toml_decoder::TomlDecoder;

use serde::de::DeserializeOwned;

use crate::core::DecoderRegistry;

impl<T: DeserializeOwned> DecoderRegistry<T> {
    /// Registry with `.json` and `.toml` decoders
    pub fn standard() -> Self {
        Self::new()
            .with(".json", JsonDecoder)
            .with(".toml", TomlDecoder)
    }
}
