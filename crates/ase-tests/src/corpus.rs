//! Sample corpus
//!
//! Sample swatch files live in `fixtures/`, each with a JSON description of
//! the colors and groups it should decode to.

use std::path::{Path, PathBuf};

use anyhow::Context;
use oxase_core::{Color, Document, Group};
use serde::Deserialize;

/// Expected decoded contents of a fixture
#[derive(Debug, Deserialize)]
pub struct Expected {
    pub colors: Vec<Color>,
    pub groups: Vec<Group>,
}

/// Absolute path of a file in the fixtures directory
pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name)
}

/// Decode `<name>.ase` from the fixtures directory
pub fn load_sample(name: &str) -> anyhow::Result<Document> {
    let path = fixture_path(&format!("{name}.ase"));
    oxase_core::decode_file(&path).with_context(|| format!("decoding {}", path.display()))
}

/// Load `<name>.json` from the fixtures directory
pub fn load_expected(name: &str) -> anyhow::Result<Expected> {
    let path = fixture_path(&format!("{name}.json"));
    let data =
        std::fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&data).with_context(|| format!("parsing {}", path.display()))
}
