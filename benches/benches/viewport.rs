// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Size, Vec2};
use loupe_view::{BoundsClamp, ImageGeometry, ViewerConfig, ViewportState};

fn geometry() -> ImageGeometry {
    ImageGeometry::new(Rect::new(0.0, 0.0, 1280.0, 720.0), Size::new(1080.0, 720.0))
}

fn bench_viewport(c: &mut Criterion) {
    let mut group = c.benchmark_group("loupe_view");
    let geo = geometry();
    let config = ViewerConfig::default();

    group.bench_function("clamp_1k_translations", |b| {
        let clamp = BoundsClamp::for_scale(&geo, 2.5);
        b.iter(|| {
            let mut acc = Vec2::ZERO;
            for i in 0..1_000 {
                let t = Vec2::new(f64::from(i) * 3.0 - 1500.0, 900.0 - f64::from(i) * 2.0);
                acc += clamp.clamp(black_box(t));
            }
            black_box(acc);
        });
    });

    group.bench_function("zoom_about_sweep", |b| {
        b.iter(|| {
            let mut view = ViewportState::new();
            for i in 0..200 {
                let focal = Point::new(f64::from(i % 64) * 20.0, f64::from(i % 36) * 20.0);
                let scale = 1.0 + f64::from(i % 30) * 0.1;
                view.zoom_about(black_box(focal), scale, &geo, &config);
            }
            black_box(view);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_viewport);
criterion_main!(benches);
