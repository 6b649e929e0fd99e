//! Malformed Input Tests
//!
//! Every rejection path of the decoder, driven by hand-built streams.

use std::io::Cursor;

use ase_tests::WireBuilder;
use ase_tests::wire::{COLOR_ENTRY, color_payload, text};
use oxase_core::{AseError, decode};

#[test]
fn test_bad_signature() {
    let bytes = WireBuilder::new()
        .signature(*b"8BCO")
        .color("Red", b"RGB ", &[1.0, 0.0, 0.0], 0)
        .build();
    let mut cursor = Cursor::new(bytes);

    let result = decode(&mut cursor);
    assert!(matches!(result, Err(AseError::InvalidFileFormat(sig)) if &sig == b"8BCO"));
    assert_eq!(cursor.position(), 4, "nothing past the signature is read");
}

#[test]
fn test_short_signature() {
    assert!(matches!(
        decode(Cursor::new(b"AS".to_vec())),
        Err(AseError::TruncatedInput)
    ));
}

#[test]
fn test_unsupported_major_version() {
    let bytes = WireBuilder::new().version(2, 0).build();
    assert!(matches!(
        decode(Cursor::new(bytes)),
        Err(AseError::UnsupportedVersion { major: 2, minor: 0 })
    ));
}

#[test]
fn test_invalid_block_type() {
    let bytes = WireBuilder::new()
        .color("Red", b"RGB ", &[1.0, 0.0, 0.0], 0)
        .raw_block(0x0002, Vec::new())
        .build();
    assert!(matches!(
        decode(Cursor::new(bytes)),
        Err(AseError::InvalidBlockType(0x0002))
    ));
}

#[test]
fn test_unknown_color_model() {
    let bytes = WireBuilder::new()
        .color("Hue", b"HSB ", &[0.5, 0.5, 0.5], 0)
        .build();
    assert!(matches!(
        decode(Cursor::new(bytes)),
        Err(AseError::UnknownColorModel(tag)) if &tag == b"HSB "
    ));
}

#[test]
fn test_unknown_color_type() {
    let bytes = WireBuilder::new()
        .color("Odd", b"Gray", &[0.5], 9)
        .build();
    assert!(matches!(
        decode(Cursor::new(bytes)),
        Err(AseError::UnknownColorType(9))
    ));
}

#[test]
fn test_nested_group() {
    let bytes = WireBuilder::new()
        .group_start("Outer")
        .group_start("Inner")
        .group_end()
        .group_end()
        .build();
    assert!(matches!(
        decode(Cursor::new(bytes)),
        Err(AseError::UnexpectedNesting { .. })
    ));
}

#[test]
fn test_unmatched_group_end() {
    let bytes = WireBuilder::new()
        .color("Red", b"RGB ", &[1.0, 0.0, 0.0], 0)
        .group_end()
        .build();
    assert!(matches!(
        decode(Cursor::new(bytes)),
        Err(AseError::UnmatchedGroupEnd)
    ));
}

#[test]
fn test_unterminated_group() {
    let bytes = WireBuilder::new()
        .group_start("Open")
        .color("Red", b"RGB ", &[1.0, 0.0, 0.0], 0)
        .build();
    assert!(matches!(
        decode(Cursor::new(bytes)),
        Err(AseError::UnterminatedGroup { name }) if name == "Open"
    ));
}

#[test]
fn test_invalid_text() {
    // Unpaired high surrogate followed by the terminator
    let mut payload = vec![0x00, 0x02, 0xD8, 0x3C, 0x00, 0x00];
    payload.extend_from_slice(b"Gray");
    payload.extend_from_slice(&0.5f32.to_be_bytes());
    payload.extend_from_slice(&[0x00, 0x00]);

    let bytes = WireBuilder::new().raw_block(COLOR_ENTRY, payload).build();
    assert!(matches!(
        decode(Cursor::new(bytes)),
        Err(AseError::InvalidText)
    ));
}

#[test]
fn test_cmyk_reads_four_channels_regardless_of_length() {
    let payload = color_payload("Ink", b"CMYK", &[0.1, 0.2, 0.3, 0.4], 1);
    let bytes = WireBuilder::new()
        .block_with_length(COLOR_ENTRY, 6, payload)
        .build();

    let doc = decode(Cursor::new(bytes)).unwrap();
    assert_eq!(doc.colors[0].values(), &[0.1, 0.2, 0.3, 0.4]);
}

#[test]
fn test_cmyk_truncated_mid_channel() {
    let mut payload = text("Ink");
    payload.extend_from_slice(b"CMYK");
    payload.extend_from_slice(&0.1f32.to_be_bytes());
    payload.extend_from_slice(&0.2f32.to_be_bytes());
    payload.extend_from_slice(&[0x3E, 0x99]);

    let bytes = WireBuilder::new()
        .block_with_length(COLOR_ENTRY, 34, payload)
        .build();
    assert!(matches!(
        decode(Cursor::new(bytes)),
        Err(AseError::TruncatedInput)
    ));
}

#[test]
fn test_header_count_larger_than_stream() {
    let bytes = WireBuilder::new()
        .count(3)
        .color("Red", b"RGB ", &[1.0, 0.0, 0.0], 0)
        .build();
    assert!(matches!(
        decode(Cursor::new(bytes)),
        Err(AseError::TruncatedInput)
    ));
}

#[test]
fn test_header_count_smaller_than_stream() {
    // Blocks past the declared count are never read
    let bytes = WireBuilder::new()
        .count(1)
        .color("Red", b"RGB ", &[1.0, 0.0, 0.0], 0)
        .raw_block(0xFFFF, Vec::new())
        .build();

    let doc = decode(Cursor::new(bytes)).unwrap();
    assert_eq!(doc.colors.len(), 1);
    assert_eq!(doc.declared_block_count(), Some(1));
}
