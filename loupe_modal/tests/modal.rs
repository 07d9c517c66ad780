// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `loupe_modal` crate.
//!
//! A recording stage stands in for the DOM so the lifecycle can be checked
//! without a live document.

use std::cell::Cell;

use kurbo::{Point, Rect, Size, Vec2};
use loupe_gesture::{GesturePhase, Input};
use loupe_modal::{ClickTarget, Frame, Key, ModalController, Stage};
use loupe_view::{Cursor, ImageGeometry, ViewTransform, ViewerConfig};

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Show(u32),
    Hide,
    Present(Frame),
}

#[derive(Debug)]
struct RecordingStage {
    geometry: ImageGeometry,
    measured: Cell<usize>,
    calls: Vec<Call>,
}

impl RecordingStage {
    fn new() -> Self {
        Self {
            geometry: ImageGeometry::new(
                Rect::new(0.0, 0.0, 800.0, 600.0),
                Size::new(800.0, 600.0),
            ),
            measured: Cell::new(0),
            calls: Vec::new(),
        }
    }

    fn last_frame(&self) -> Option<Frame> {
        self.calls.iter().rev().find_map(|c| match c {
            Call::Present(f) => Some(*f),
            _ => None,
        })
    }
}

impl Stage<u32> for RecordingStage {
    fn measure(&self) -> ImageGeometry {
        self.measured.set(self.measured.get() + 1);
        self.geometry
    }

    fn present(&mut self, frame: Frame) {
        self.calls.push(Call::Present(frame));
    }

    fn show(&mut self, image: &u32) {
        self.calls.push(Call::Show(*image));
    }

    fn hide(&mut self) {
        self.calls.push(Call::Hide);
    }
}

fn identity_frame() -> Frame {
    Frame {
        transform: ViewTransform {
            scale: 1.0,
            translate_x: 0.0,
            translate_y: 0.0,
        },
        cursor: Cursor::Default,
    }
}

fn open_modal() -> ModalController<u32, RecordingStage> {
    let mut modal = ModalController::new(RecordingStage::new(), ViewerConfig::default());
    modal.open(7);
    modal
}

#[test]
fn starts_closed_and_ignores_input() {
    let mut modal = ModalController::new(RecordingStage::new(), ViewerConfig::default());
    assert!(!modal.is_open());
    assert_eq!(modal.active_image(), None);

    let resp = modal.handle_input(&Input::DoubleClick {
        position: Point::new(400.0, 300.0),
    });
    assert!(!resp.handled && !resp.changed);
    assert_eq!(modal.transform().scale, 1.0);
    assert_eq!(modal.stage().measured.get(), 0);
    assert!(modal.stage().calls.is_empty());
}

#[test]
fn open_binds_image_and_presents_identity() {
    let modal = open_modal();
    assert!(modal.is_open());
    assert_eq!(modal.active_image(), Some(&7));
    assert_eq!(
        modal.stage().calls,
        vec![Call::Show(7), Call::Present(identity_frame())]
    );
}

#[test]
fn input_measures_fresh_geometry_each_event() {
    let mut modal = open_modal();
    let _ = modal.handle_input(&Input::DoubleClick {
        position: Point::new(400.0, 300.0),
    });
    let _ = modal.handle_input(&Input::Wheel {
        position: Point::new(400.0, 300.0),
        delta_y: -100.0,
    });
    assert_eq!(modal.stage().measured.get(), 2);
}

#[test]
fn changes_are_presented_with_cursor() {
    let mut modal = open_modal();
    let _ = modal.handle_input(&Input::DoubleClick {
        position: Point::new(200.0, 450.0),
    });
    let frame = modal.stage().last_frame().unwrap();
    assert_eq!(frame.transform.scale, 2.0);
    assert_eq!(frame.transform.translate_x, 200.0);
    assert_eq!(frame.transform.translate_y, -150.0);
    assert_eq!(frame.cursor, Cursor::Grab);

    let _ = modal.handle_input(&Input::PointerDown {
        position: Point::new(10.0, 10.0),
    });
    assert_eq!(modal.stage().last_frame().unwrap().cursor, Cursor::Grabbing);

    let _ = modal.handle_input(&Input::PointerUp);
    assert_eq!(modal.stage().last_frame().unwrap().cursor, Cursor::Grab);
}

#[test]
fn unchanged_state_is_not_presented_again() {
    let mut modal = open_modal();
    let before = modal.stage().calls.len();
    // Wheel-out at unit scale changes nothing.
    let resp = modal.handle_input(&Input::Wheel {
        position: Point::new(100.0, 100.0),
        delta_y: 50.0,
    });
    assert!(resp.handled);
    assert!(!resp.changed);
    assert_eq!(modal.stage().calls.len(), before);
}

#[test]
fn every_close_trigger_closes_and_resets() {
    for trigger in 0..3 {
        let mut modal = open_modal();
        let _ = modal.handle_input(&Input::DoubleClick {
            position: Point::new(100.0, 100.0),
        });
        assert_eq!(modal.transform().scale, 2.0);

        let closed = match trigger {
            0 => modal.handle_click(ClickTarget::CloseControl),
            1 => modal.handle_click(ClickTarget::Backdrop),
            _ => modal.handle_key(Key::Escape),
        };
        assert!(closed);
        assert!(!modal.is_open());
        assert_eq!(modal.active_image(), None);
        assert_eq!(modal.frame(), identity_frame());
        assert_eq!(modal.stage().calls.last(), Some(&Call::Hide));
    }
}

#[test]
fn close_is_idempotent() {
    let mut modal = open_modal();
    assert!(modal.close());
    let calls = modal.stage().calls.len();

    assert!(!modal.close());
    assert!(!modal.handle_click(ClickTarget::Backdrop));
    assert!(!modal.handle_key(Key::Escape));
    assert_eq!(modal.stage().calls.len(), calls);
}

#[test]
fn image_click_and_other_keys_keep_modal_open() {
    let mut modal = open_modal();
    assert!(!modal.handle_click(ClickTarget::Image));
    assert!(!modal.handle_key(Key::Other));
    assert!(modal.is_open());
}

#[test]
fn close_wins_over_live_drag() {
    let mut modal = open_modal();
    let _ = modal.handle_input(&Input::DoubleClick {
        position: Point::new(400.0, 300.0),
    });
    let _ = modal.handle_input(&Input::PointerDown {
        position: Point::new(400.0, 300.0),
    });
    assert!(matches!(modal.phase(), GesturePhase::Dragging(_)));

    assert!(modal.close());
    assert_eq!(*modal.phase(), GesturePhase::Idle);
    assert!(!modal.view().is_dragging());

    // A late move from the cancelled drag does nothing once reopened.
    modal.open(8);
    let resp = modal.handle_input(&Input::PointerMove {
        position: Point::new(450.0, 300.0),
    });
    assert!(!resp.changed);
    assert_eq!(modal.view().translate(), Vec2::ZERO);
}

#[test]
fn reopening_on_another_image_resets_view() {
    let mut modal = open_modal();
    let _ = modal.handle_input(&Input::DoubleClick {
        position: Point::new(100.0, 100.0),
    });
    modal.open(9);
    assert_eq!(modal.active_image(), Some(&9));
    assert_eq!(modal.frame(), identity_frame());
    assert_eq!(
        modal.stage().calls[modal.stage().calls.len() - 2..],
        [Call::Show(9), Call::Present(identity_frame())]
    );
}

#[test]
fn relayout_reclamps_after_container_grows() {
    let mut modal = open_modal();
    let _ = modal.handle_input(&Input::Wheel {
        position: Point::new(0.0, 0.0),
        delta_y: -1000.0,
    });
    assert_eq!(modal.view().translate(), Vec2::new(400.0, 300.0));

    modal.stage_mut().geometry = ImageGeometry::new(
        Rect::new(0.0, 0.0, 1400.0, 1000.0),
        Size::new(800.0, 600.0),
    );
    let resp = modal.relayout();
    assert!(resp.changed);
    assert_eq!(modal.view().translate(), Vec2::new(100.0, 100.0));
}

#[test]
fn unloaded_image_stays_centered() {
    let mut modal = open_modal();
    modal.stage_mut().geometry = ImageGeometry::EMPTY;
    let _ = modal.handle_input(&Input::Wheel {
        position: Point::new(50.0, 50.0),
        delta_y: -500.0,
    });
    assert_eq!(modal.transform().scale, 1.5);
    assert_eq!(modal.view().translate(), Vec2::ZERO);
}
