// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loupe Scroll: small page-shell helpers that live next to the lightbox.
//!
//! - [`ease_in_out_cubic`]: the easing curve used for anchor scrolling.
//! - [`smooth`]: a smooth scroll modelled as a cancellable task keyed by an
//!   [`AnimationToken`], so a new request supersedes an in-flight one.
//! - [`equal_height`]: the common height for a row of cards.
//!
//! None of these touch the pan/zoom engine; they share a page with it.
//!
//! ```rust
//! use loupe_scroll::{ScrollFrame, ScrollTick, SmoothScroll};
//!
//! let mut scroll = SmoothScroll::new();
//! let token = scroll.start(0.0, 0.0, 40.0);
//! let frame = ScrollFrame { scroll_y: 0.0, target_top: 500.0, max_scroll: 10_000.0 };
//! assert_eq!(scroll.tick(token, 0.0, frame), ScrollTick::Finished(460.0));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod smooth;

pub use smooth::{AnimationToken, ScrollFrame, ScrollTick, SmoothScroll};

/// Ease-in-out cubic on `p` in `[0, 1]`; values outside are clamped.
#[must_use]
pub fn ease_in_out_cubic(p: f64) -> f64 {
    let p = if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) };
    if p < 0.5 {
        4.0 * p * p * p
    } else {
        let q = -2.0 * p + 2.0;
        1.0 - q * q * q / 2.0
    }
}

/// Height every card in a row should take: the tallest natural height.
///
/// Non-finite or negative measurements are ignored; an empty row yields 0.
#[must_use]
pub fn equal_height(heights: impl IntoIterator<Item = f64>) -> f64 {
    heights
        .into_iter()
        .filter(|h| h.is_finite() && *h >= 0.0)
        .fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::{ease_in_out_cubic, equal_height};

    #[test]
    fn easing_endpoints_and_midpoint() {
        assert_eq!(ease_in_out_cubic(0.0), 0.0);
        assert_eq!(ease_in_out_cubic(0.5), 0.5);
        assert_eq!(ease_in_out_cubic(1.0), 1.0);
        assert_eq!(ease_in_out_cubic(0.25), 0.0625);
        assert_eq!(ease_in_out_cubic(0.75), 0.9375);
    }

    #[test]
    fn easing_clamps_input() {
        assert_eq!(ease_in_out_cubic(-3.0), 0.0);
        assert_eq!(ease_in_out_cubic(7.0), 1.0);
        assert_eq!(ease_in_out_cubic(f64::NAN), 0.0);
    }

    #[test]
    fn equal_height_picks_tallest() {
        assert_eq!(equal_height([120.0, 340.5, 200.0]), 340.5);
        assert_eq!(equal_height([0.0_f64; 0]), 0.0);
        assert_eq!(equal_height([f64::NAN, 10.0, -4.0]), 10.0);
    }
}
