//! Block framing
//!
//! Every block begins with a 16-bit type tag and a 32-bit payload length.

use std::fmt;
use std::io::{Read, Write};

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};

use crate::error::{AseError, Result};

/// Block type tags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockType {
    ColorEntry,
    GroupStart,
    GroupEnd,
}

impl BlockType {
    pub const COLOR_ENTRY: u16 = 0x0001;
    pub const GROUP_START: u16 = 0xC001;
    pub const GROUP_END: u16 = 0xC002;

    pub fn from_tag(tag: u16) -> Result<Self> {
        match tag {
            Self::COLOR_ENTRY => Ok(Self::ColorEntry),
            Self::GROUP_START => Ok(Self::GroupStart),
            Self::GROUP_END => Ok(Self::GroupEnd),
            other => Err(AseError::InvalidBlockType(other)),
        }
    }

    pub const fn tag(self) -> u16 {
        match self {
            Self::ColorEntry => Self::COLOR_ENTRY,
            Self::GroupStart => Self::GROUP_START,
            Self::GroupEnd => Self::GROUP_END,
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ColorEntry => "color entry",
            Self::GroupStart => "group start",
            Self::GroupEnd => "group end",
        };
        f.write_str(name)
    }
}

/// Type tag and declared payload length of one block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockHeader {
    pub block_type: BlockType,
    /// Payload length as declared on the wire. Informational only.
    pub length: u32,
}

impl BlockHeader {
    pub fn new(block_type: BlockType, length: u32) -> Self {
        Self { block_type, length }
    }

    pub fn read<R: Read + ?Sized>(reader: &mut R) -> Result<Self> {
        let block_type = BlockType::from_tag(reader.read_u16::<BigEndian>()?)?;
        let length = reader.read_u32::<BigEndian>()?;
        Ok(Self { block_type, length })
    }

    pub fn write<W: Write + ?Sized>(&self, writer: &mut W) -> Result<()> {
        writer.write_u16::<BigEndian>(self.block_type.tag())?;
        writer.write_u32::<BigEndian>(self.length)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_header_layout() {
        let mut buf = Vec::new();
        BlockHeader::new(BlockType::GroupStart, 10)
            .write(&mut buf)
            .unwrap();
        assert_eq!(buf, [0xC0, 0x01, 0x00, 0x00, 0x00, 0x0A]);

        let header = BlockHeader::read(&mut Cursor::new(buf)).unwrap();
        assert_eq!(header.block_type, BlockType::GroupStart);
        assert_eq!(header.length, 10);
    }

    #[test]
    fn test_invalid_tag() {
        let data = [0x00, 0x02, 0x00, 0x00, 0x00, 0x00];
        let result = BlockHeader::read(&mut Cursor::new(data));
        assert!(matches!(result, Err(AseError::InvalidBlockType(0x0002))));
    }

    #[test]
    fn test_truncated_length() {
        let data = [0x00, 0x01, 0x00, 0x00];
        let result = BlockHeader::read(&mut Cursor::new(data));
        assert!(matches!(result, Err(AseError::TruncatedInput)));
    }
}
