// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the decode and thumbnail paths of ingestion.

use criterion::{criterion_group, criterion_main, Criterion};
use image_rs::{DynamicImage, ImageFormat, RgbaImage};
use lens_gallery::domain::media::RawImage;
use lens_gallery::domain::ui::ThumbnailEdge;
use lens_gallery::infrastructure::ImageCrateDecoder;
use lens_gallery::media::render_video_thumbnail;
use std::hint::black_box;
use std::io::Cursor;

/// Encodes a 1280x720 gradient as PNG.
fn sample_png() -> Vec<u8> {
    let image = RgbaImage::from_fn(1280, 720, |x, y| {
        image_rs::Rgba([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8, 255])
    });
    let mut bytes = Vec::new();
    DynamicImage::ImageRgba8(image)
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .expect("encode sample png");
    bytes
}

fn image_loading_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("image_loading");

    let png = sample_png();
    group.bench_function("decode_720p_png", |b| {
        b.iter(|| {
            let _ = black_box(ImageCrateDecoder::decode_blocking(black_box(&png)).unwrap());
        });
    });

    let frame = RawImage::from_rgba(1280, 720, vec![128; 1280 * 720 * 4]);
    group.bench_function("render_video_thumbnail", |b| {
        b.iter(|| {
            let _ = black_box(render_video_thumbnail(&frame, ThumbnailEdge::default()).unwrap());
        });
    });

    group.finish();
}

criterion_group!(benches, image_loading_benchmark);
criterion_main!(benches);
