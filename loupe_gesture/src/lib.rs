// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loupe Gesture: one state machine for mouse, wheel, and touch pan/zoom.
//!
//! An image lightbox receives three independent kinds of input: mouse drags,
//! wheel ticks, and one- or two-finger touch. This crate folds all of them
//! into a single [`GestureRecognizer`] that drives a
//! [`loupe_view::ViewportState`]:
//!
//! - [`drag`]: anchor-based panning with a single pointer or finger.
//! - [`pinch`]: two-finger scaling relative to a baseline distance.
//! - Wheel and double-click zoom: instantaneous, focal-point anchored steps
//!   that share one implementation ([`loupe_view::ViewportState::zoom_about`]).
//!
//! ## Phases
//!
//! | From               | Input                        | To        |
//! |--------------------|------------------------------|-----------|
//! | Idle               | pointer-down, zoomed         | Dragging  |
//! | Idle, Dragging     | second touch contact         | Pinching  |
//! | Dragging           | pointer-up / cancel          | Idle      |
//! | Pinching           | fewer than two contacts      | Idle      |
//! | any                | wheel, double-click, resize  | unchanged |
//!
//! Every step re-clamps translation against the geometry passed with the
//! event, so the viewport never holds a translation that is stale for the
//! current scale or layout.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size, Vec2};
//! use loupe_gesture::{GestureRecognizer, Input};
//! use loupe_view::{ImageGeometry, ViewerConfig, ViewportState};
//!
//! let geometry = ImageGeometry::new(Rect::new(0.0, 0.0, 800.0, 600.0), Size::new(800.0, 600.0));
//! let mut view = ViewportState::new();
//! let mut gestures = GestureRecognizer::new(ViewerConfig::default());
//!
//! // Double-click the center: zoom to 2x without moving the center.
//! let response = gestures.handle(
//!     &mut view,
//!     &Input::DoubleClick { position: Point::new(400.0, 300.0) },
//!     &geometry,
//! );
//! assert!(response.changed);
//! assert_eq!(view.scale(), 2.0);
//!
//! // Now the image can be dragged.
//! let _ = gestures.handle(&mut view, &Input::PointerDown { position: Point::new(400.0, 300.0) }, &geometry);
//! let _ = gestures.handle(&mut view, &Input::PointerMove { position: Point::new(450.0, 280.0) }, &geometry);
//! assert_eq!(view.translate(), Vec2::new(50.0, -20.0));
//! ```
//!
//! This crate is `no_std` compatible.

#![no_std]

pub mod drag;
mod input;
pub mod pinch;
mod recognizer;

pub use input::{Contacts, Input};
pub use recognizer::{GesturePhase, GestureRecognizer, Response};
