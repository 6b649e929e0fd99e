//! Block stream driver
//!
//! # Structure
//!
//! An ASE stream is a fixed header followed by a flat run of blocks:
//!
//! 1. Signature `ASEF` (4 bytes)
//! 2. Version major, minor (2 x i16)
//! 3. Block count (i32)
//! 4. `count` blocks, each a [`BlockHeader`] plus payload
//!
//! Groups are not nested in the byte stream. A group start block opens a
//! group, the color blocks after it belong to that group, and a group end
//! block closes it. Only one group may be open at a time.

use std::io::{Read, Write};

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use tracing::{debug, trace};

use crate::block::{BlockHeader, BlockType};
use crate::codec::ReadAseExt;
use crate::color::Color;
use crate::document::{Document, SIGNATURE, Version};
use crate::error::{AseError, Result};
use crate::group::Group;

/// Decode a swatch document from a byte source.
///
/// Reads exactly the blocks the header announces; trailing bytes are left
/// unread. The reader is consumed unbuffered, so wrap files in a
/// `BufReader`.
pub fn decode<R: Read>(mut reader: R) -> Result<Document> {
    let mut doc = Document::new();

    let signature: [u8; 4] = reader.read_tag()?;
    if signature != SIGNATURE {
        return Err(AseError::InvalidFileFormat(signature));
    }

    let version = Version {
        major: reader.read_i16::<BigEndian>()?,
        minor: reader.read_i16::<BigEndian>()?,
    };
    if !version.is_supported() {
        return Err(AseError::UnsupportedVersion {
            major: version.major,
            minor: version.minor,
        });
    }

    let count = reader.read_i32::<BigEndian>()?;
    if count < 0 {
        return Err(AseError::InvalidBlockCount(count));
    }
    debug!(%version, blocks = count, "ASE header accepted");

    doc.signature = signature;
    doc.version = version;
    doc.declared_blocks = Some(count);

    let mut open: Option<Group> = None;

    for index in 0..count {
        let header = BlockHeader::read(&mut reader)?;
        trace!(index, block = %header.block_type, length = header.length, "block");

        let consumed = match header.block_type {
            BlockType::ColorEntry => {
                let color = Color::read(&mut reader)?;
                let len = color.payload_len();
                match open.as_mut() {
                    Some(group) => group.push(color),
                    None => doc.colors.push(color),
                }
                len
            }
            BlockType::GroupStart => {
                let group = Group::read(&mut reader)?;
                if let Some(current) = &open {
                    return Err(AseError::UnexpectedNesting {
                        open: current.name.clone(),
                        inner: group.name,
                    });
                }
                let len = group.payload_len();
                open = Some(group);
                len
            }
            BlockType::GroupEnd => {
                let group = open.take().ok_or(AseError::UnmatchedGroupEnd)?;
                doc.groups.push(group);
                0
            }
        };

        if consumed as u64 != u64::from(header.length) {
            debug!(
                index,
                declared = header.length,
                actual = consumed,
                "block length disagrees with payload"
            );
        }
    }

    if let Some(group) = open {
        return Err(AseError::UnterminatedGroup { name: group.name });
    }

    Ok(doc)
}

/// Encode a swatch document to a byte sink.
///
/// Writes signature `ASEF`, version 1.0 and a block count derived from the
/// current contents, then all top-level colors followed by each group
/// framed by start and end blocks. The writer is not flushed.
pub fn encode<W: Write>(doc: &Document, mut writer: W) -> Result<()> {
    let blocks = doc.block_count();
    let count = i32::try_from(blocks).map_err(|_| AseError::TooManyBlocks(blocks))?;
    debug!(blocks, groups = doc.groups.len(), "encoding ASE document");

    writer.write_all(&SIGNATURE)?;
    writer.write_i16::<BigEndian>(Version::V1_0.major)?;
    writer.write_i16::<BigEndian>(Version::V1_0.minor)?;
    writer.write_i32::<BigEndian>(count)?;

    for color in &doc.colors {
        write_color_block(&mut writer, color)?;
    }

    for group in &doc.groups {
        BlockHeader::new(BlockType::GroupStart, payload_len(group.payload_len())?)
            .write(&mut writer)?;
        group.write(&mut writer)?;
        for color in &group.colors {
            write_color_block(&mut writer, color)?;
        }
        BlockHeader::new(BlockType::GroupEnd, 0).write(&mut writer)?;
    }

    Ok(())
}

fn write_color_block<W: Write>(writer: &mut W, color: &Color) -> Result<()> {
    BlockHeader::new(BlockType::ColorEntry, payload_len(color.payload_len())?).write(writer)?;
    color.write(writer)
}

// Only a name far past the text field limit can overflow a block length.
fn payload_len(len: usize) -> Result<u32> {
    u32::try_from(len).map_err(|_| AseError::TextTooLong { units: len / 2 })
}
