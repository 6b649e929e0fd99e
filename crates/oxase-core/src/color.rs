//! Color records
//!
//! A color entry block carries, in order:
//!
//! | Field    | Size          |
//! |----------|---------------|
//! | name     | text field    |
//! | model    | 4 bytes ASCII |
//! | channels | N x f32       |
//! | type     | u16           |
//!
//! N is implied by the model; it is never stored on the wire.

use std::fmt;
use std::io::{Read, Write};

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};

use crate::codec::{ReadAseExt, WriteAseExt, text_wire_len};
use crate::error::{AseError, Result};

/// Color space of a swatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorModel {
    Rgb,
    Cmyk,
    Lab,
    Gray,
}

impl ColorModel {
    pub const ALL: [ColorModel; 4] = [Self::Rgb, Self::Cmyk, Self::Lab, Self::Gray];

    /// Parse a 4-byte wire tag
    pub fn from_tag(tag: [u8; 4]) -> Result<Self> {
        match &tag {
            b"RGB " => Ok(Self::Rgb),
            b"CMYK" => Ok(Self::Cmyk),
            b"LAB " => Ok(Self::Lab),
            b"Gray" => Ok(Self::Gray),
            _ => Err(AseError::UnknownColorModel(tag)),
        }
    }

    /// 4-byte wire tag
    pub const fn tag(self) -> [u8; 4] {
        match self {
            Self::Rgb => *b"RGB ",
            Self::Cmyk => *b"CMYK",
            Self::Lab => *b"LAB ",
            Self::Gray => *b"Gray",
        }
    }

    /// Number of f32 channels stored for this model
    pub const fn channel_count(self) -> usize {
        match self {
            Self::Rgb | Self::Lab => 3,
            Self::Cmyk => 4,
            Self::Gray => 1,
        }
    }
}

impl fmt::Display for ColorModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Rgb => "RGB",
            Self::Cmyk => "CMYK",
            Self::Lab => "LAB",
            Self::Gray => "Gray",
        };
        f.write_str(name)
    }
}

/// Channel values, tagged by color model
///
/// RGB, CMYK and Gray channels are normalized to 0.0..=1.0. LAB stores
/// L in 0.0..=1.0 and a/b as signed values (typically -128.0..=127.0).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "model", content = "values"))]
pub enum ColorValue {
    Rgb([f32; 3]),
    Cmyk([f32; 4]),
    Lab([f32; 3]),
    Gray(f32),
}

impl ColorValue {
    /// Build a value from a model and a channel slice of matching length
    pub fn from_channels(model: ColorModel, channels: &[f32]) -> Option<Self> {
        if channels.len() != model.channel_count() {
            return None;
        }
        Some(match model {
            ColorModel::Rgb => Self::Rgb([channels[0], channels[1], channels[2]]),
            ColorModel::Cmyk => Self::Cmyk([channels[0], channels[1], channels[2], channels[3]]),
            ColorModel::Lab => Self::Lab([channels[0], channels[1], channels[2]]),
            ColorModel::Gray => Self::Gray(channels[0]),
        })
    }

    pub fn model(&self) -> ColorModel {
        match self {
            Self::Rgb(_) => ColorModel::Rgb,
            Self::Cmyk(_) => ColorModel::Cmyk,
            Self::Lab(_) => ColorModel::Lab,
            Self::Gray(_) => ColorModel::Gray,
        }
    }

    /// Channel values in wire order
    pub fn channels(&self) -> &[f32] {
        match self {
            Self::Rgb(v) | Self::Lab(v) => v,
            Self::Cmyk(v) => v,
            Self::Gray(v) => std::slice::from_ref(v),
        }
    }

    fn read<R: Read + ?Sized>(reader: &mut R, model: ColorModel) -> Result<Self> {
        Ok(match model {
            ColorModel::Rgb => Self::Rgb(read_channels(reader)?),
            ColorModel::Cmyk => Self::Cmyk(read_channels(reader)?),
            ColorModel::Lab => Self::Lab(read_channels(reader)?),
            ColorModel::Gray => Self::Gray(reader.read_f32::<BigEndian>()?),
        })
    }
}

fn read_channels<R: Read + ?Sized, const N: usize>(reader: &mut R) -> Result<[f32; N]> {
    let mut channels = [0f32; N];
    reader.read_f32_into::<BigEndian>(&mut channels)?;
    Ok(channels)
}

/// How a swatch behaves when referenced by artwork
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColorType {
    /// Edits to the swatch propagate to every use
    Global,
    /// Spot ink, printed on its own plate
    Spot,
    /// Process color copied into artwork on use
    #[default]
    Normal,
}

impl ColorType {
    pub fn from_tag(tag: u16) -> Result<Self> {
        match tag {
            0 => Ok(Self::Global),
            1 => Ok(Self::Spot),
            2 => Ok(Self::Normal),
            other => Err(AseError::UnknownColorType(other)),
        }
    }

    pub const fn tag(self) -> u16 {
        match self {
            Self::Global => 0,
            Self::Spot => 1,
            Self::Normal => 2,
        }
    }
}

impl fmt::Display for ColorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Global => "Global",
            Self::Spot => "Spot",
            Self::Normal => "Normal",
        };
        f.write_str(name)
    }
}

/// A named swatch
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub name: String,
    pub value: ColorValue,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: ColorType,
}

impl Color {
    pub fn new(name: impl Into<String>, value: ColorValue, kind: ColorType) -> Self {
        Self {
            name: name.into(),
            value,
            kind,
        }
    }

    pub fn model(&self) -> ColorModel {
        self.value.model()
    }

    pub fn values(&self) -> &[f32] {
        self.value.channels()
    }

    /// Decode a color entry payload (the block header is already consumed)
    pub fn read<R: Read + ?Sized>(reader: &mut R) -> Result<Self> {
        let name = reader.read_text()?;
        let model = ColorModel::from_tag(reader.read_tag()?)?;
        let value = ColorValue::read(reader, model)?;
        let kind = ColorType::from_tag(reader.read_u16::<BigEndian>()?)?;

        Ok(Self { name, value, kind })
    }

    /// Encode a color entry payload (without the block header)
    pub fn write<W: Write + ?Sized>(&self, writer: &mut W) -> Result<()> {
        writer.write_text(&self.name)?;
        writer.write_all(&self.model().tag())?;
        for &channel in self.values() {
            writer.write_f32::<BigEndian>(channel)?;
        }
        writer.write_u16::<BigEndian>(self.kind.tag())?;
        Ok(())
    }

    /// Payload size in bytes, as written into the block header
    pub fn payload_len(&self) -> usize {
        text_wire_len(&self.name) + 4 + 4 * self.model().channel_count() + 2
    }
}
