// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM-independent conversions between browser units and engine values.

use loupe_scroll::smooth::{HEADER_MARGIN, MOBILE_HEADER_MARGIN};
use loupe_view::ViewTransform;

/// `WheelEvent.deltaMode`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeltaMode {
    /// `DOM_DELTA_PIXEL`
    Pixel,
    /// `DOM_DELTA_LINE`
    Line,
    /// `DOM_DELTA_PAGE`
    Page,
}

impl DeltaMode {
    /// Maps the raw `deltaMode` value; unknown values are treated as pixels.
    #[must_use]
    pub fn from_raw(mode: u32) -> Self {
        match mode {
            1 => Self::Line,
            2 => Self::Page,
            _ => Self::Pixel,
        }
    }
}

/// Converts a wheel delta to pixels.
///
/// Non-finite deltas become 0 so they never reach the viewport.
#[must_use]
pub fn wheel_delta_pixels(delta: f64, mode: DeltaMode, line_height: f64, page_height: f64) -> f64 {
    let px = match mode {
        DeltaMode::Pixel => delta,
        DeltaMode::Line => delta * line_height,
        DeltaMode::Page => delta * page_height,
    };
    if px.is_finite() { px } else { 0.0 }
}

/// CSS `transform` value for a view transform: `translate(xpx, ypx) scale(s)`.
#[must_use]
pub fn css_transform(transform: &ViewTransform) -> String {
    format!(
        "translate({}px, {}px) scale({})",
        transform.translate_x, transform.translate_y, transform.scale
    )
}

/// Header gap to leave above an anchor target for a viewport `width`.
///
/// Layouts at or below `breakpoint` use the taller mobile header.
#[must_use]
pub fn header_margin(width: f64, breakpoint: f64) -> f64 {
    if width <= breakpoint {
        MOBILE_HEADER_MARGIN
    } else {
        HEADER_MARGIN
    }
}

/// Header gap for an in-page link.
///
/// Only links inside the navigation drawer get the taller mobile margin;
/// other links always leave the desktop gap.
#[must_use]
pub fn anchor_margin(in_nav: bool, width: f64, breakpoint: f64) -> f64 {
    if in_nav {
        header_margin(width, breakpoint)
    } else {
        HEADER_MARGIN
    }
}

/// Resolves the full-resolution source for a thumbnail.
///
/// The configured attribute wins when it is present and non-blank.
#[must_use]
pub fn thumbnail_source(attribute: Option<String>, src: Option<String>) -> Option<String> {
    attribute
        .filter(|s| !s.trim().is_empty())
        .or_else(|| src.filter(|s| !s.trim().is_empty()))
}
