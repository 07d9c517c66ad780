// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loupe View: viewport state and bounds clamping for a pan/zoom image viewer.
//!
//! This crate provides the headless model behind a lightbox that lets users
//! zoom into and pan around a single image. It focuses on:
//! - Viewport state: a uniform scale plus a translation of the image center
//!   away from the container center, and the drag flag.
//! - Bounds clamping: the legal translation range for the current scale and
//!   measured geometry.
//! - A single focal-point zoom operation shared by every anchored zoom path.
//!
//! It does **not** interpret input events. Callers are expected to:
//! - Measure the container and the image's untransformed layout box on every
//!   event and pass them as [`ImageGeometry`].
//! - Drive the mutators from a gesture layer (see `loupe_gesture`).
//! - Render the resulting [`ViewTransform`] and [`Cursor`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use loupe_view::{ImageGeometry, ViewerConfig, ViewportState};
//!
//! let config = ViewerConfig::default();
//! let geometry = ImageGeometry::new(Rect::new(0.0, 0.0, 800.0, 600.0), Size::new(800.0, 600.0));
//!
//! let mut view = ViewportState::new();
//! // Zoom to 2x around a point right of center.
//! view.zoom_about(Point::new(600.0, 300.0), 2.0, &geometry, &config);
//! assert_eq!(view.scale(), 2.0);
//! assert_eq!(view.translate().x, -200.0);
//!
//! // Panning is always clamped to what the 2x image can cover.
//! view.set_translation((-1000.0, 0.0).into(), &geometry);
//! assert_eq!(view.translate().x, -400.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod bounds;
mod config;
mod geometry;
mod viewport;

pub use bounds::{BoundsClamp, clamp_translation};
pub use config::{MIN_SCALE_FLOOR, ViewerConfig};
pub use geometry::ImageGeometry;
pub use viewport::{Cursor, ViewTransform, ViewportState};
