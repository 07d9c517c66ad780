// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loupe Web: binds the Loupe lightbox to a browser page.
//!
//! On `wasm32` this crate provides:
//! - `DomStage`: a [`loupe_modal::Stage`] over existing modal markup that
//!   measures with `getBoundingClientRect`/`offsetWidth` and presents through
//!   the image's CSS `transform` and `cursor`.
//! - `bind`: wires thumbnails, close triggers, pointer, wheel, and touch
//!   listeners to a [`loupe_modal::ModalController`], and returns a `Loupe`
//!   handle that owns them.
//! - `start`: the module entry point. It installs `console_log` and the panic
//!   hook, reads [`WebConfig`] from the first `data-loupe` attribute, and binds.
//!
//! Pointer events drive mouse and pen input only. Touch input comes from touch
//! events, so one physical touch is never seen twice.
//!
//! Configuration parsing and the unit conversions in [`style`] do not need a
//! browser and are available on every target:
//!
//! ```rust
//! use loupe_web::WebConfig;
//!
//! let config = WebConfig::from_json(r#"{ "viewer": { "max_scale": 6.0 } }"#).unwrap();
//! assert_eq!(config.viewer.max_scale, 6.0);
//! assert_eq!(config.modal, "#lightbox");
//! ```

mod click;
mod config;
mod error;
pub mod style;

#[cfg(target_arch = "wasm32")]
mod bind;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod page;

pub use click::ClickGuard;
pub use config::WebConfig;
pub use error::LoupeError;

#[cfg(target_arch = "wasm32")]
pub use bind::{Loupe, bind, start};
#[cfg(target_arch = "wasm32")]
pub use dom::DomStage;
