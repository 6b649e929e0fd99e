//! Primitive wire codec
//!
//! Everything in an ASE file is big-endian. Integers and floats go straight
//! through `byteorder`; this module adds the two composite primitives the
//! format needs on top of that:
//!
//! - fixed 4-byte tags (file signature, color model)
//! - text fields: a 16-bit unit count followed by that many UTF-16BE code
//!   units, the last of which is a null terminator included in the count

use std::io::{Read, Write};

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};

use crate::error::{AseError, Result};

/// Reads ASE primitives from any byte source
pub trait ReadAseExt: Read {
    /// Read exactly `N` raw bytes
    fn read_tag<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut tag = [0u8; N];
        self.read_exact(&mut tag)?;
        Ok(tag)
    }

    /// Read a length-prefixed, null-terminated UTF-16BE string
    fn read_text(&mut self) -> Result<String> {
        let count = self.read_u16::<BigEndian>()? as usize;
        let mut units = vec![0u16; count];
        self.read_u16_into::<BigEndian>(&mut units)?;

        if units.last() == Some(&0) {
            units.pop();
        }

        String::from_utf16(&units).map_err(|_| AseError::InvalidText)
    }
}

impl<R: Read + ?Sized> ReadAseExt for R {}

/// Writes ASE primitives to any byte sink
pub trait WriteAseExt: Write {
    /// Write a length-prefixed, null-terminated UTF-16BE string
    fn write_text(&mut self, text: &str) -> Result<()> {
        let count = text_units(text)?;
        self.write_u16::<BigEndian>(count)?;
        for unit in text.encode_utf16() {
            self.write_u16::<BigEndian>(unit)?;
        }
        self.write_u16::<BigEndian>(0)?;
        Ok(())
    }
}

impl<W: Write + ?Sized> WriteAseExt for W {}

/// Unit count written in front of `text`, terminator included
fn text_units(text: &str) -> Result<u16> {
    let units = text.encode_utf16().count() + 1;
    u16::try_from(units).map_err(|_| AseError::TextTooLong { units })
}

/// Bytes a text field occupies on the wire, length prefix included
pub(crate) fn text_wire_len(text: &str) -> usize {
    2 + 2 * (text.encode_utf16().count() + 1)
}
