//! # ase-tests
//!
//! Fixture and round-trip testing for oxase.
//!
//! This crate provides:
//! - A wire builder that assembles ASE byte streams by hand, independent of
//!   the encoder under test
//! - Access to the on-disk sample corpus and its JSON descriptions
//! - Seeded random palette generation for round-trip checks

pub mod corpus;
pub mod palettes;
pub mod wire;

pub use corpus::{fixture_path, load_expected, load_sample};
pub use palettes::random_document;
pub use wire::WireBuilder;
