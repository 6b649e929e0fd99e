//! Decoded swatch documents

use std::fmt;

use crate::color::Color;
use crate::error::Result;
use crate::group::Group;

/// File signature every ASE stream starts with
pub const SIGNATURE: [u8; 4] = *b"ASEF";

/// Format version from the file header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Version {
    pub major: i16,
    pub minor: i16,
}

impl Version {
    /// The only version written on encode
    pub const V1_0: Self = Self { major: 1, minor: 0 };

    /// Any 1.x header is accepted on decode
    pub fn is_supported(&self) -> bool {
        self.major == 1
    }
}

impl Default for Version {
    fn default() -> Self {
        Self::V1_0
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// A swatch exchange document
///
/// Colors outside any group are kept in [`Document::colors`]; grouped colors
/// live in their [`Group`]. Encoding always writes the top-level colors
/// first, then each group, so the interleaving of a foreign file is not
/// preserved.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Document {
    #[cfg_attr(feature = "serde", serde(skip, default = "default_signature"))]
    pub(crate) signature: [u8; 4],
    #[cfg_attr(feature = "serde", serde(skip))]
    pub(crate) version: Version,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub(crate) declared_blocks: Option<i32>,
    pub colors: Vec<Color>,
    pub groups: Vec<Group>,
}

#[cfg(feature = "serde")]
fn default_signature() -> [u8; 4] {
    SIGNATURE
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            signature: SIGNATURE,
            version: Version::V1_0,
            declared_blocks: None,
            colors: Vec::new(),
            groups: Vec::new(),
        }
    }

    pub fn with_content(colors: Vec<Color>, groups: Vec<Group>) -> Self {
        Self {
            colors,
            groups,
            ..Self::new()
        }
    }

    /// File signature as text, "ASEF" for any decoded document
    pub fn signature(&self) -> String {
        String::from_utf8_lossy(&self.signature).into_owned()
    }

    /// Header version; displays as "1.0"
    pub fn version(&self) -> Version {
        self.version
    }

    /// Block count read from the header, if this document was decoded.
    ///
    /// Never used for encoding; see [`Document::block_count`].
    pub fn declared_block_count(&self) -> Option<i32> {
        self.declared_blocks
    }

    /// Number of blocks the current contents encode to
    pub fn block_count(&self) -> usize {
        let grouped: usize = self.groups.iter().map(|g| g.colors.len()).sum();
        self.colors.len() + self.groups.len() * 2 + grouped
    }

    pub fn push_color(&mut self, color: Color) {
        self.colors.push(color);
    }

    pub fn push_group(&mut self, group: Group) {
        self.groups.push(group);
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty() && self.groups.is_empty()
    }

    /// Every color in encode order: top-level first, then each group's
    pub fn all_colors(&self) -> impl Iterator<Item = &Color> {
        self.colors
            .iter()
            .chain(self.groups.iter().flat_map(|g| g.colors.iter()))
    }

    /// Look up a color by name anywhere in the document
    pub fn find_color(&self, name: &str) -> Option<&Color> {
        self.all_colors().find(|c| c.name == name)
    }

    pub fn find_group(&self, name: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// Decode from an in-memory buffer
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        crate::stream::decode(data)
    }

    /// Encode into a new buffer
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        crate::stream::encode(self, &mut buf)?;
        Ok(buf)
    }
}
