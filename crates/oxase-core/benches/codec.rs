//! Codec Benchmarks
//!
//! Decode and encode throughput for palettes of increasing size.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use oxase_core::{Color, ColorType, ColorValue, Document, Group};

/// Generate a palette with `count` colors, half of them split across groups of 16
fn generate_palette(count: usize) -> Document {
    let color = |i: usize| {
        let t = i as f32 / count as f32;
        let value = match i % 4 {
            0 => ColorValue::Rgb([t, (t * 2.0) % 1.0, (t * 3.0) % 1.0]),
            1 => ColorValue::Cmyk([t, 1.0 - t, 0.5, 0.1]),
            2 => ColorValue::Lab([t, t * 100.0 - 50.0, 50.0 - t * 100.0]),
            _ => ColorValue::Gray(t),
        };
        Color::new(format!("Swatch {i}"), value, ColorType::Global)
    };

    let mut doc = Document::new();
    for i in 0..count / 2 {
        doc.push_color(color(i));
    }
    for (n, chunk) in (count / 2..count).collect::<Vec<_>>().chunks(16).enumerate() {
        doc.push_group(Group::with_colors(
            format!("Group {n}"),
            chunk.iter().map(|&i| color(i)).collect(),
        ));
    }
    doc
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for size in [16, 256, 4096] {
        let bytes = generate_palette(size).to_bytes().unwrap();
        group.throughput(Throughput::Bytes(bytes.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &bytes, |b, bytes| {
            b.iter(|| oxase_core::decode(black_box(bytes.as_slice())).unwrap())
        });
    }

    group.finish();
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for size in [16, 256, 4096] {
        let doc = generate_palette(size);
        group.throughput(Throughput::Elements(doc.block_count() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &doc, |b, doc| {
            let mut buf = Vec::with_capacity(64 * size);
            b.iter(|| {
                buf.clear();
                oxase_core::encode(black_box(doc), &mut buf).unwrap();
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_decode, bench_encode);
criterion_main!(benches);
