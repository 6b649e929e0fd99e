//! Group records
//!
//! A group start block holds only the group name. The colors that follow it
//! up to the matching group end block belong to the group; pairing the
//! blocks is left to the stream driver.

use std::io::{Read, Write};

use crate::codec::{ReadAseExt, WriteAseExt, text_wire_len};
use crate::color::Color;
use crate::error::Result;

/// A named, single-level collection of swatches
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Group {
    pub name: String,
    pub colors: Vec<Color>,
}

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            colors: Vec::new(),
        }
    }

    pub fn with_colors(name: impl Into<String>, colors: Vec<Color>) -> Self {
        Self {
            name: name.into(),
            colors,
        }
    }

    pub fn push(&mut self, color: Color) {
        self.colors.push(color);
    }

    /// Decode a group start payload; colors are filled in by the caller
    pub fn read<R: Read + ?Sized>(reader: &mut R) -> Result<Self> {
        Ok(Self::new(reader.read_text()?))
    }

    /// Encode a group start payload
    pub fn write<W: Write + ?Sized>(&self, writer: &mut W) -> Result<()> {
        writer.write_text(&self.name)
    }

    pub fn payload_len(&self) -> usize {
        text_wire_len(&self.name)
    }
}
