// Copyright 2025 the Zoombox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Size};
use zoombox_scroll::{ScaleTranslate, bring_into_view, calculate_scrollable};

fn bench_calculate_scrollable(c: &mut Criterion) {
    let source = Rect::new(0.0, 0.0, 800.0, 600.0);
    let transforms = [
        ScaleTranslate::IDENTITY,
        ScaleTranslate::new(2.0, 2.0, -150.0, -90.0),
        ScaleTranslate::new(0.25, 0.25, 40.0, 650.0),
        ScaleTranslate::new(1.0, 1.0, -30.0, 30.0),
    ];

    c.bench_function("calculate_scrollable", |b| {
        b.iter(|| {
            for &t in &transforms {
                black_box(calculate_scrollable(source, t));
            }
        });
    });
}

fn bench_bring_into_view(c: &mut Criterion) {
    let viewport = Size::new(800.0, 600.0);
    let transform = ScaleTranslate::new(1.5, 1.5, -120.0, -40.0);
    let targets = [
        Rect::new(900.0, 100.0, 1000.0, 180.0),
        Rect::new(-300.0, -200.0, -100.0, -50.0),
        Rect::new(0.0, 0.0, 2400.0, 900.0),
        Rect::new(100.0, 100.0, 200.0, 200.0),
    ];

    c.bench_function("bring_into_view", |b| {
        b.iter(|| {
            for &target in &targets {
                black_box(bring_into_view(target, viewport, transform, true));
            }
        });
    });
}

criterion_group!(benches, bench_calculate_scrollable, bench_bring_into_view);
criterion_main!(benches);
