use std::io::Read;

use serde::de::DeserializeOwned;

use crate::core::{DecodeError, Decoder};

/// Decoder for `.toml` files
///
/// The document is buffered in full before parsing, since `toml` parses
/// from a string.
#[derive(Debug, Clone, Copy, Default)]
pub struct TomlDecoder;

impl<T: DeserializeOwned> Decoder<T> for TomlDecoder {
    fn decode(&self, reader: &mut dyn Read) -> Result<T, DecodeError> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;

        toml::from_str(&content).map_err(|e| DecodeError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::io::Cursor;

    #[derive(Debug, Deserialize)]
    struct Sample {
        message: String,
    }

    #[test]
    fn test_decode_valid_document() {
        let mut input = Cursor::new("message = \"Hello World\"\r\n");

        let sample: Sample = TomlDecoder.decode(&mut input).unwrap();

        assert_eq!(sample.message, "Hello World");
    }

    #[test]
    fn test_decode_syntax_error() {
        let mut input = Cursor::new("message = ");

        let result: Result<Sample, _> = TomlDecoder.decode(&mut input);

        assert!(matches!(result, Err(DecodeError::Parse(_))));
    }

    #[test]
    fn test_decode_invalid_utf8() {
        let mut input = Cursor::new(vec![0x6d, 0x3d, 0xff, 0xfe]);

        let result: Result<Sample, _> = TomlDecoder.decode(&mut input);

        assert!(matches!(result, Err(DecodeError::Io(_))));
    }
}
