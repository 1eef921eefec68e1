use std::io::Read;

use serde::de::DeserializeOwned;

use crate::core::{DecodeError, Decoder};

/// Decoder for `.json` files
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDecoder;

impl<T: DeserializeOwned> Decoder<T> for JsonDecoder {
    fn decode(&self, reader: &mut dyn Read) -> Result<T, DecodeError> {
        serde_json::from_reader(reader).map_err(|e| {
            if e.is_io() {
                DecodeError::Io(e.into())
            } else {
                DecodeError::Parse(e.to_string())
            }
        })
    }
}
