// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Size};
use loupe_gesture::{GestureRecognizer, Input};
use loupe_modal::{Frame, ModalController, Stage};
use loupe_view::{ImageGeometry, ViewerConfig, ViewportState};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn next_u32(&mut self) -> u32 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 32) as u32
    }

    fn coord(&mut self, span: u32) -> f64 {
        f64::from(self.next_u32() % span)
    }
}

fn geometry() -> ImageGeometry {
    ImageGeometry::new(Rect::new(0.0, 0.0, 1280.0, 720.0), Size::new(1080.0, 720.0))
}

/// A mixed stream of mouse drags, wheel steps, pinches, and double clicks.
fn input_stream(len: usize, seed: u64) -> Vec<Input> {
    let mut rng = Lcg(seed);
    let mut out = Vec::with_capacity(len);
    while out.len() < len {
        match rng.next_u32() % 4 {
            0 => {
                out.push(Input::PointerDown {
                    position: Point::new(rng.coord(1280), rng.coord(720)),
                });
                for _ in 0..8 {
                    out.push(Input::PointerMove {
                        position: Point::new(rng.coord(1280), rng.coord(720)),
                    });
                }
                out.push(Input::PointerUp);
            }
            1 => out.push(Input::Wheel {
                position: Point::new(rng.coord(1280), rng.coord(720)),
                delta_y: rng.coord(400) - 200.0,
            }),
            2 => {
                let a = Point::new(rng.coord(1280), rng.coord(720));
                out.push(Input::touch_start([a, Point::new(a.x + 100.0, a.y)]));
                for step in 1..=8 {
                    let spread = 100.0 + f64::from(step) * 15.0;
                    out.push(Input::touch_move([a, Point::new(a.x + spread, a.y)]));
                }
                out.push(Input::touch_end([]));
            }
            _ => out.push(Input::DoubleClick {
                position: Point::new(rng.coord(1280), rng.coord(720)),
            }),
        }
    }
    out
}

#[derive(Default)]
struct NullStage;

impl Stage<u32> for NullStage {
    fn measure(&self) -> ImageGeometry {
        geometry()
    }

    fn present(&mut self, frame: Frame) {
        black_box(frame);
    }

    fn show(&mut self, _image: &u32) {}

    fn hide(&mut self) {}
}

fn bench_gestures(c: &mut Criterion) {
    let mut group = c.benchmark_group("loupe_gesture");
    let geo = geometry();
    let inputs = input_stream(4_096, 0x10C0_0000_0000_0001);

    group.bench_function("recognizer_mixed_4k", |b| {
        b.iter_batched(
            || (GestureRecognizer::new(ViewerConfig::default()), ViewportState::new()),
            |(mut recognizer, mut view)| {
                for input in &inputs {
                    black_box(recognizer.handle(&mut view, input, &geo).changed);
                }
                black_box(view);
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("modal_mixed_4k", |b| {
        b.iter_batched(
            || {
                let mut modal = ModalController::new(NullStage, ViewerConfig::default());
                modal.open(1);
                modal
            },
            |mut modal| {
                for input in &inputs {
                    black_box(modal.handle_input(input).changed);
                }
                black_box(modal.transform());
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_gestures);
criterion_main!(benches);
