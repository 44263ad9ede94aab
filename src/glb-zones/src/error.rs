//! Error types for container parsing

use std::fmt;

use thiserror::Error;

/// Four-byte tag as found in the container (magic or chunk type)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag(pub [u8; 4]);

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.iter().all(|b| b.is_ascii_graphic() || *b == 0) {
            let text: String = self
                .0
                .iter()
                .map(|&b| if b == 0 { "\\0".to_string() } else { (b as char).to_string() })
                .collect();
            write!(f, "'{}'", text)
        } else {
            write!(
                f,
                "{:02x} {:02x} {:02x} {:02x}",
                self.0[0], self.0[1], self.0[2], self.0[3]
            )
        }
    }
}

/// Malformed or truncated container data
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("Data too short: need {needed} bytes, got {actual}")]
    DataTooShort { needed: usize, actual: usize },

    #[error("Invalid GLB magic: expected 'glTF', got {0}")]
    InvalidMagic(Tag),

    #[error("Unexpected first chunk type: expected 'JSON', got {0}")]
    UnexpectedChunkType(Tag),

    #[error("Chunk length {length} exceeds available data ({available} bytes)")]
    ChunkOverrun { length: usize, available: usize },

    #[error("JSON chunk is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    #[error("Invalid scene JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Errors from file and stream I/O around the parser
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// True when the data itself was bad, as opposed to the read failing
    pub fn is_format(&self) -> bool {
        matches!(self, Error::Format(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
