//! Error types for oxase

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for oxase operations
pub type Result<T> = std::result::Result<T, AseError>;

/// Errors that can occur while decoding or encoding a swatch file
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AseError {
    /// The stream does not start with the `ASEF` signature
    #[error("not an ASE file: signature {0:02X?} (expected 'ASEF')")]
    InvalidFileFormat([u8; 4]),

    /// The header carries a major version other than 1
    #[error("unsupported ASE version: {major}.{minor}")]
    UnsupportedVersion { major: i16, minor: i16 },

    /// The stream ended in the middle of a field
    #[error("input truncated: stream ended mid-field")]
    TruncatedInput,

    /// Negative block count in the header
    #[error("invalid block count: {0}")]
    InvalidBlockCount(i32),

    /// Block type tag is not color entry, group start or group end
    #[error("invalid block type: 0x{0:04X}")]
    InvalidBlockType(u16),

    /// Color model tag is not one of RGB, CMYK, LAB or Gray
    #[error("unknown color model: {}", String::from_utf8_lossy(.0))]
    UnknownColorModel([u8; 4]),

    /// Color type tag is not Global, Spot or Normal
    #[error("unknown color type: {0}")]
    UnknownColorType(u16),

    /// A group start was found while another group was still open
    #[error("group '{inner}' starts inside open group '{open}'")]
    UnexpectedNesting { open: String, inner: String },

    /// A group end was found with no group open
    #[error("group end without a matching group start")]
    UnmatchedGroupEnd,

    /// The stream ended with a group still open
    #[error("group '{name}' is never closed")]
    UnterminatedGroup { name: String },

    /// Text field is not well-formed UTF-16
    #[error("invalid UTF-16 text field")]
    InvalidText,

    /// Text is too long for a 16-bit length prefix
    #[error("text of {units} UTF-16 units does not fit a 16-bit length")]
    TextTooLong { units: usize },

    /// Document holds more blocks than the header can count
    #[error("too many blocks for an ASE header: {0}")]
    TooManyBlocks(usize),

    /// File passed to a path helper does not exist
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// I/O error from the underlying reader or writer
    #[error("I/O error: {0}")]
    Io(#[source] io::Error),
}

impl From<io::Error> for AseError {
    fn from(err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::UnexpectedEof {
            AseError::TruncatedInput
        } else {
            AseError::Io(err)
        }
    }
}
