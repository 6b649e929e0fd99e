//! # oxase - Adobe Swatch Exchange codec
//!
//! Reads and writes ASE palette files: named colors in RGB, CMYK, LAB or
//! grayscale, optionally collected into named groups.
//!
//! ## Quick Start
//!
//! ```no_run
//! use oxase_core::{Color, ColorType, ColorValue, Document, Group};
//!
//! let mut doc = Document::new();
//! doc.push_color(Color::new("Red", ColorValue::Rgb([1.0, 0.0, 0.0]), ColorType::Global));
//! doc.push_group(Group::with_colors(
//!     "Brand",
//!     vec![Color::new("Ink", ColorValue::Cmyk([0.0, 0.8, 1.0, 0.0]), ColorType::Spot)],
//! ));
//!
//! oxase_core::encode_file(&doc, "palette.ase")?;
//!
//! let decoded = oxase_core::decode_file("palette.ase")?;
//! assert_eq!(decoded.signature(), "ASEF");
//! assert_eq!(decoded.version().to_string(), "1.0");
//! # Ok::<(), oxase_core::AseError>(())
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for the document model

pub mod block;
pub mod codec;
pub mod color;
pub mod document;
pub mod error;
pub mod group;
pub mod stream;

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

pub use block::{BlockHeader, BlockType};
pub use color::{Color, ColorModel, ColorType, ColorValue};
pub use document::{Document, SIGNATURE, Version};
pub use error::{AseError, Result};
pub use group::Group;
pub use stream::{decode, encode};

/// Version of oxase
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Open an ASE file and decode it
pub fn decode_file(path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            AseError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            AseError::Io(e)
        }
    })?;
    decode(BufReader::new(file))
}

/// Encode a document into a file, replacing any existing contents
pub fn encode_file(doc: &Document, path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(path.as_ref()).map_err(AseError::Io)?;
    let mut writer = BufWriter::new(file);
    encode(doc, &mut writer)?;
    writer.flush()?;
    Ok(())
}
