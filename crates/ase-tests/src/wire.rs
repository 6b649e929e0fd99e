//! Hand-assembled ASE byte streams
//!
//! Builds streams field by field so decoder tests do not depend on the
//! encoder. Block lengths are computed from the payload unless overridden.

/// Block type tags as they appear on the wire
pub const COLOR_ENTRY: u16 = 0x0001;
pub const GROUP_START: u16 = 0xC001;
pub const GROUP_END: u16 = 0xC002;

/// Byte-level builder for ASE streams
#[derive(Debug, Clone)]
pub struct WireBuilder {
    signature: [u8; 4],
    version: (i16, i16),
    count: Option<i32>,
    blocks: Vec<(u16, Option<u32>, Vec<u8>)>,
}

impl Default for WireBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl WireBuilder {
    pub fn new() -> Self {
        Self {
            signature: *b"ASEF",
            version: (1, 0),
            count: None,
            blocks: Vec::new(),
        }
    }

    pub fn signature(mut self, signature: [u8; 4]) -> Self {
        self.signature = signature;
        self
    }

    pub fn version(mut self, major: i16, minor: i16) -> Self {
        self.version = (major, minor);
        self
    }

    /// Override the header block count (defaults to the number of blocks added)
    pub fn count(mut self, count: i32) -> Self {
        self.count = Some(count);
        self
    }

    /// Append a block with an arbitrary tag and payload
    pub fn raw_block(mut self, tag: u16, payload: Vec<u8>) -> Self {
        self.blocks.push((tag, None, payload));
        self
    }

    /// Append a block whose declared length differs from its payload
    pub fn block_with_length(mut self, tag: u16, length: u32, payload: Vec<u8>) -> Self {
        self.blocks.push((tag, Some(length), payload));
        self
    }

    /// Append a color entry block
    pub fn color(self, name: &str, model: &[u8; 4], values: &[f32], kind: u16) -> Self {
        self.raw_block(COLOR_ENTRY, color_payload(name, model, values, kind))
    }

    pub fn group_start(self, name: &str) -> Self {
        self.raw_block(GROUP_START, text(name))
    }

    pub fn group_end(self) -> Self {
        self.raw_block(GROUP_END, Vec::new())
    }

    pub fn build(&self) -> Vec<u8> {
        let mut out = self.signature.to_vec();
        out.extend_from_slice(&self.version.0.to_be_bytes());
        out.extend_from_slice(&self.version.1.to_be_bytes());
        let count = self.count.unwrap_or(self.blocks.len() as i32);
        out.extend_from_slice(&count.to_be_bytes());

        for (tag, length, payload) in &self.blocks {
            out.extend_from_slice(&tag.to_be_bytes());
            let length = length.unwrap_or(payload.len() as u32);
            out.extend_from_slice(&length.to_be_bytes());
            out.extend_from_slice(payload);
        }
        out
    }
}

/// Length-prefixed, null-terminated UTF-16BE text field
pub fn text(s: &str) -> Vec<u8> {
    let units: Vec<u16> = s.encode_utf16().chain(std::iter::once(0)).collect();
    let mut out = (units.len() as u16).to_be_bytes().to_vec();
    for unit in units {
        out.extend_from_slice(&unit.to_be_bytes());
    }
    out
}

/// Color entry payload with exactly the channels given
pub fn color_payload(name: &str, model: &[u8; 4], values: &[f32], kind: u16) -> Vec<u8> {
    let mut out = text(name);
    out.extend_from_slice(model);
    for v in values {
        out.extend_from_slice(&v.to_be_bytes());
    }
    out.extend_from_slice(&kind.to_be_bytes());
    out
}

/// Read the block count field from an encoded stream
pub fn header_count(bytes: &[u8]) -> i32 {
    i32::from_be_bytes([bytes[8], bytes[9], bytes[10], bytes[11]])
}

/// Block type tags in stream order, walking the declared lengths
pub fn block_tags(bytes: &[u8]) -> Vec<u16> {
    let mut tags = Vec::new();
    let mut offset = 12;
    while offset + 6 <= bytes.len() {
        let tag = u16::from_be_bytes([bytes[offset], bytes[offset + 1]]);
        let len = u32::from_be_bytes([
            bytes[offset + 2],
            bytes[offset + 3],
            bytes[offset + 4],
            bytes[offset + 5],
        ]) as usize;
        tags.push(tag);
        offset += 6 + len;
    }
    tags
}
