//! Random palette generation
//!
//! Seeded so failures reproduce.

use oxase_core::{Color, ColorModel, ColorType, ColorValue, Document, Group};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const NAME_CHARS: &[char] = &['A', 'z', '0', ' ', '-', 'é', 'ß', '色', '\u{1F3A8}'];

fn random_name(rng: &mut ChaCha8Rng) -> String {
    let len = rng.gen_range(0..24);
    (0..len)
        .map(|_| NAME_CHARS[rng.gen_range(0..NAME_CHARS.len())])
        .collect()
}

/// A well-formed color with random model, channels and type
pub fn random_color(rng: &mut ChaCha8Rng) -> Color {
    let model = ColorModel::ALL[rng.gen_range(0..ColorModel::ALL.len())];
    let channels: Vec<f32> = (0..model.channel_count())
        .map(|_| match model {
            ColorModel::Lab => rng.gen_range(-128.0..128.0),
            _ => rng.r#gen::<f32>(),
        })
        .collect();
    let value = ColorValue::from_channels(model, &channels)
        .unwrap_or(ColorValue::Gray(0.0));
    let kind = match rng.gen_range(0..3) {
        0 => ColorType::Global,
        1 => ColorType::Spot,
        _ => ColorType::Normal,
    };
    Color::new(random_name(rng), value, kind)
}

/// Document with up to `max_colors` top-level colors and `max_groups` groups
pub fn random_document(seed: u64, max_colors: usize, max_groups: usize) -> Document {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut doc = Document::new();

    for _ in 0..rng.gen_range(0..=max_colors) {
        doc.push_color(random_color(&mut rng));
    }
    for _ in 0..rng.gen_range(0..=max_groups) {
        let mut group = Group::new(random_name(&mut rng));
        for _ in 0..rng.gen_range(0..=max_colors) {
            group.push(random_color(&mut rng));
        }
        doc.push_group(group);
    }
    doc
}
