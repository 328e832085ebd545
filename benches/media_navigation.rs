// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for viewer navigation and gesture handling.
//!
//! Measures the performance of:
//! - Appending a dropped batch to the store
//! - Navigation operations (next/previous with wrap-around)
//! - Removal from the middle of a large gallery
//! - Gesture routing for swipes and wheel zoom

use criterion::{criterion_group, criterion_main, Criterion};
use lens_gallery::domain::media::{MediaKind, MediaSource};
use lens_gallery::domain::ui::{Point, Size};
use lens_gallery::media::ingest::{DecodedBatch, DecodedItem};
use lens_gallery::media::NewRecord;
use lens_gallery::ui::viewer::subcomponents::gesture;
use lens_gallery::ui::viewer::{Message, ViewerController};
use std::hint::black_box;
use std::sync::Arc;
use std::time::Instant;

const GALLERY_SIZE: usize = 500;

fn batch(count: usize) -> DecodedBatch {
    let bytes: Arc<[u8]> = Arc::from(vec![0u8; 64]);
    DecodedBatch {
        items: (0..count)
            .map(|position| DecodedItem {
                position,
                record: NewRecord {
                    kind: MediaKind::Image,
                    source: MediaSource::new(Arc::clone(&bytes), "image/png"),
                    display_name: format!("photo-{position:04}.png"),
                },
                video: None,
            })
            .collect(),
        failures: Vec::new(),
    }
}

fn gallery() -> ViewerController {
    let mut viewer = ViewerController::default();
    viewer.handle(Message::ViewportResized(Size::new(1280.0, 720.0)), Instant::now());
    viewer.append_batch(batch(GALLERY_SIZE), Instant::now());
    viewer
}

/// Benchmark appending a batch to an empty gallery.
fn bench_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("media_navigation");

    group.bench_function("append_batch_500", |b| {
        b.iter(|| {
            let mut viewer = ViewerController::default();
            black_box(viewer.append_batch(batch(GALLERY_SIZE), Instant::now()));
        });
    });

    group.finish();
}

/// Benchmark navigation and removal.
///
/// Every navigation rebuilds the effects for the surface, so this measures
/// the full update path, not only the index arithmetic.
fn bench_navigate(c: &mut Criterion) {
    let mut group = c.benchmark_group("media_navigation");

    let viewer = gallery();

    group.bench_function("next_clicked", |b| {
        let mut viewer = viewer.clone();
        b.iter(|| black_box(viewer.handle(Message::NextClicked, Instant::now())));
    });

    group.bench_function("previous_clicked", |b| {
        let mut viewer = viewer.clone();
        b.iter(|| black_box(viewer.handle(Message::PreviousClicked, Instant::now())));
    });

    group.bench_function("remove_middle", |b| {
        b.iter(|| {
            let mut viewer = viewer.clone();
            black_box(viewer.handle(Message::RemoveRequested(GALLERY_SIZE / 2), Instant::now()));
        });
    });

    group.finish();
}

/// Benchmark gesture routing.
fn bench_gestures(c: &mut Criterion) {
    let mut group = c.benchmark_group("media_navigation");

    let viewer = gallery();

    group.bench_function("swipe_next", |b| {
        let mut viewer = viewer.clone();
        b.iter(|| {
            let now = Instant::now();
            for (step, x) in [600.0, 560.0, 500.0, 420.0].into_iter().enumerate() {
                let contacts = vec![Point::new(x, 300.0)];
                let msg = if step == 0 {
                    gesture::Message::Pressed(contacts)
                } else {
                    gesture::Message::Moved(contacts)
                };
                black_box(viewer.handle(Message::Gesture(msg), now));
            }
            black_box(viewer.handle(Message::Gesture(gesture::Message::Released(Vec::new())), now));
        });
    });

    group.bench_function("wheel_zoom", |b| {
        let mut viewer = viewer.clone();
        let mut delta_y = -1.0;
        b.iter(|| {
            // Alternate directions so the scale stays inside its range.
            delta_y = -delta_y;
            black_box(viewer.handle(
                Message::Gesture(gesture::Message::Wheel {
                    delta_y,
                    position: Point::new(900.0, 200.0),
                }),
                Instant::now(),
            ))
        });
    });

    group.finish();
}

criterion_group!(benches, bench_append, bench_navigate, bench_gestures);
criterion_main!(benches);
