// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loupe Modal: lifecycle of a pan/zoom image lightbox.
//!
//! [`ModalController`] sits above the gesture engine. It decides when input
//! is routed at all (only while open), binds a source image to the viewer,
//! resets the viewport between images, and forwards geometry queries and
//! rendering to a host-provided [`Stage`].
//!
//! The three close triggers (close control, backdrop click, Escape) are
//! equivalent and idempotent.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use loupe_gesture::Input;
//! use loupe_modal::{ClickTarget, Frame, Key, ModalController, Stage};
//! use loupe_view::{ImageGeometry, ViewerConfig};
//!
//! #[derive(Default)]
//! struct Headless {
//!     visible: bool,
//!     last: Frame,
//! }
//!
//! impl Stage<&'static str> for Headless {
//!     fn measure(&self) -> ImageGeometry {
//!         ImageGeometry::new(Rect::new(0.0, 0.0, 800.0, 600.0), Size::new(800.0, 600.0))
//!     }
//!     fn present(&mut self, frame: Frame) {
//!         self.last = frame;
//!     }
//!     fn show(&mut self, _image: &&'static str) {
//!         self.visible = true;
//!     }
//!     fn hide(&mut self) {
//!         self.visible = false;
//!     }
//! }
//!
//! let mut modal = ModalController::new(Headless::default(), ViewerConfig::default());
//! modal.open("photos/harbor.jpg");
//! assert!(modal.stage().visible);
//!
//! let _ = modal.handle_input(&Input::DoubleClick { position: Point::new(400.0, 300.0) });
//! assert_eq!(modal.stage().last.transform.scale, 2.0);
//!
//! // Clicking the image keeps the modal open; Escape closes and resets it.
//! assert!(!modal.handle_click(ClickTarget::Image));
//! assert!(modal.handle_key(Key::Escape));
//! assert!(!modal.is_open());
//! assert_eq!(modal.transform().scale, 1.0);
//! ```
//!
//! This crate is `no_std` compatible.

#![no_std]

mod controller;
mod stage;

pub use controller::{ClickTarget, Key, ModalController};
pub use stage::{Frame, Stage};
