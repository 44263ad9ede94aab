//! GLB (binary glTF) container reader
//!
//! # Layout
//!
//! All integers are little-endian `u32`:
//! - Bytes 0-3: `glTF` magic
//! - Bytes 4-7: Container version (2 for glTF 2.0)
//! - Bytes 8-11: Declared total length
//! - Bytes 12-15: First chunk length (L)
//! - Bytes 16-19: First chunk type, must be `JSON`
//! - Bytes 20..20+L: UTF-8 scene description
//!
//! Further chunks (usually a single `BIN\0` buffer) follow at 4-byte aligned
//! offsets. Only the JSON chunk is decoded.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use byteorder::{ByteOrder, LittleEndian};

use crate::error::{FormatError, Result, Tag};
use crate::scene::SceneDocument;

/// Magic bytes at offset 0
pub const MAGIC: [u8; 4] = *b"glTF";

/// Container version written by glTF 2.0 exporters
pub const VERSION: u32 = 2;

/// Top-level header size in bytes
pub const HEADER_SIZE: usize = 12;

/// Chunk header size in bytes (length + type)
pub const CHUNK_HEADER_SIZE: usize = 8;

/// Offset of the first chunk's payload
pub const PAYLOAD_OFFSET: usize = HEADER_SIZE + CHUNK_HEADER_SIZE;

/// Chunk type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkType {
    /// `JSON` scene description
    Json,
    /// `BIN\0` binary buffer
    Bin,
    Other([u8; 4]),
}

impl ChunkType {
    pub const JSON_TAG: [u8; 4] = *b"JSON";
    pub const BIN_TAG: [u8; 4] = *b"BIN\0";

    pub fn from_tag(tag: [u8; 4]) -> Self {
        match tag {
            Self::JSON_TAG => ChunkType::Json,
            Self::BIN_TAG => ChunkType::Bin,
            other => ChunkType::Other(other),
        }
    }

    pub fn tag(&self) -> [u8; 4] {
        match self {
            ChunkType::Json => Self::JSON_TAG,
            ChunkType::Bin => Self::BIN_TAG,
            ChunkType::Other(tag) => *tag,
        }
    }
}

/// Top-level container header (12 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub version: u32,
    /// Total length as declared by the writer
    pub length: u32,
}

impl Header {
    /// Parse and validate the header from the start of `data`
    pub fn from_bytes(data: &[u8]) -> std::result::Result<Self, FormatError> {
        if data.len() < HEADER_SIZE {
            return Err(FormatError::DataTooShort {
                needed: HEADER_SIZE,
                actual: data.len(),
            });
        }

        let magic = [data[0], data[1], data[2], data[3]];
        if magic != MAGIC {
            return Err(FormatError::InvalidMagic(Tag(magic)));
        }

        Ok(Self {
            version: LittleEndian::read_u32(&data[4..8]),
            length: LittleEndian::read_u32(&data[8..12]),
        })
    }

    fn warn_on_version(&self) {
        if self.version != VERSION {
            tracing::warn!(version = self.version, "Unexpected GLB version, continuing");
        }
    }

    /// The declared length is informational; a mismatch is only logged
    fn warn_on_length(&self, actual: usize) {
        if self.length as usize != actual {
            tracing::warn!(
                declared = self.length,
                actual,
                "GLB declared length does not match data size"
            );
        }
    }
}

/// Chunk header (8 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkHeader {
    /// Payload length in bytes, excluding this header
    pub length: u32,
    pub kind: ChunkType,
}

impl ChunkHeader {
    pub fn from_bytes(data: &[u8]) -> std::result::Result<Self, FormatError> {
        if data.len() < CHUNK_HEADER_SIZE {
            return Err(FormatError::DataTooShort {
                needed: CHUNK_HEADER_SIZE,
                actual: data.len(),
            });
        }

        Ok(Self {
            length: LittleEndian::read_u32(&data[0..4]),
            kind: ChunkType::from_tag([data[4], data[5], data[6], data[7]]),
        })
    }

    /// Reject anything but a JSON chunk in first position
    fn expect_json(&self) -> std::result::Result<(), FormatError> {
        match self.kind {
            ChunkType::Json => Ok(()),
            other => Err(FormatError::UnexpectedChunkType(Tag(other.tag()))),
        }
    }
}

/// A framed container borrowing its JSON chunk from the input buffer
#[derive(Debug, Clone, Copy)]
pub struct Container<'a> {
    pub header: Header,
    /// Exactly the first chunk's payload bytes
    pub json: &'a [u8],
}

impl<'a> Container<'a> {
    /// Validate the framing and locate the JSON chunk
    pub fn parse(data: &'a [u8]) -> std::result::Result<Self, FormatError> {
        let header = Header::from_bytes(data)?;
        header.warn_on_version();
        header.warn_on_length(data.len());

        if data.len() < PAYLOAD_OFFSET {
            return Err(FormatError::DataTooShort {
                needed: PAYLOAD_OFFSET,
                actual: data.len(),
            });
        }

        let chunk = ChunkHeader::from_bytes(&data[HEADER_SIZE..])?;
        chunk.expect_json()?;

        let length = chunk.length as usize;
        let available = data.len() - PAYLOAD_OFFSET;
        if length > available {
            return Err(FormatError::ChunkOverrun { length, available });
        }

        tracing::debug!(
            version = header.version,
            declared_length = header.length,
            json_length = length,
            "Parsed GLB framing"
        );

        Ok(Self {
            header,
            json: &data[PAYLOAD_OFFSET..PAYLOAD_OFFSET + length],
        })
    }

    /// Decode the JSON chunk into a scene description
    pub fn document(&self) -> std::result::Result<SceneDocument, FormatError> {
        SceneDocument::from_json(self.json)
    }
}

/// Parse a complete GLB held in memory
pub fn parse(data: &[u8]) -> std::result::Result<SceneDocument, FormatError> {
    Container::parse(data)?.document()
}

/// Read a GLB from a stream, consuming only the header and the JSON chunk
///
/// Partial reads are retried until the requested count is satisfied or the
/// source is exhausted. Running out of data is a [`FormatError`]; any other
/// read failure is returned as [`crate::Error::Io`].
pub fn read<R: Read>(mut reader: R) -> Result<SceneDocument> {
    let mut prefix = [0u8; PAYLOAD_OFFSET];

    let got = fill(&mut reader, &mut prefix[..HEADER_SIZE])?;
    if got < HEADER_SIZE {
        return Err(FormatError::DataTooShort {
            needed: HEADER_SIZE,
            actual: got,
        }
        .into());
    }

    let header = Header::from_bytes(&prefix[..HEADER_SIZE])?;
    header.warn_on_version();

    let got = fill(&mut reader, &mut prefix[HEADER_SIZE..])?;
    if got < CHUNK_HEADER_SIZE {
        return Err(FormatError::DataTooShort {
            needed: PAYLOAD_OFFSET,
            actual: HEADER_SIZE + got,
        }
        .into());
    }

    let chunk = ChunkHeader::from_bytes(&prefix[HEADER_SIZE..])?;
    chunk.expect_json()?;

    // Grow with the data actually present instead of trusting the length field
    let length = chunk.length as usize;
    let mut payload = Vec::new();
    reader
        .by_ref()
        .take(u64::from(chunk.length))
        .read_to_end(&mut payload)?;

    if payload.len() < length {
        return Err(FormatError::ChunkOverrun {
            length,
            available: payload.len(),
        }
        .into());
    }

    Ok(SceneDocument::from_json(&payload)?)
}

/// Read and parse a GLB file from disk
pub fn read_file(path: impl AsRef<Path>) -> Result<SceneDocument> {
    let path = path.as_ref();
    let data = fs::read(path)?;
    tracing::debug!(path = %path.display(), bytes = data.len(), "Read GLB file");
    Ok(parse(&data)?)
}

/// Read until `buf` is full or the source is exhausted; returns bytes read
fn fill<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// Container overview for the `inspect` command
#[derive(Debug, Clone)]
pub struct Summary {
    pub header: Header,
    /// Size of the data actually present
    pub actual_length: usize,
    /// Every chunk whose payload fits in the data, in file order
    pub chunks: Vec<ChunkHeader>,
    pub document: SceneDocument,
}

impl Summary {
    pub fn from_bytes(data: &[u8]) -> std::result::Result<Self, FormatError> {
        let container = Container::parse(data)?;
        let document = container.document()?;

        Ok(Self {
            header: container.header,
            actual_length: data.len(),
            chunks: walk_chunks(data),
            document,
        })
    }

    pub fn json_length(&self) -> u32 {
        self.chunks.first().map_or(0, |c| c.length)
    }
}

/// Walk chunk headers from the first chunk on, stopping at the first truncated one
fn walk_chunks(data: &[u8]) -> Vec<ChunkHeader> {
    let mut chunks = Vec::new();
    let mut offset = HEADER_SIZE;

    while let Some(rest) = data.get(offset..) {
        let Ok(chunk) = ChunkHeader::from_bytes(rest) else {
            break;
        };

        let padded = (chunk.length as usize).next_multiple_of(4);
        let end = offset + CHUNK_HEADER_SIZE + chunk.length as usize;
        if end > data.len() {
            break;
        }

        chunks.push(chunk);
        offset += CHUNK_HEADER_SIZE + padded;
    }

    chunks
}
