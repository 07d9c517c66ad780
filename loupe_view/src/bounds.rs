// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Size, Vec2};

use crate::ImageGeometry;

/// Legal translation range for one image/container pairing.
///
/// For each axis the margin is `max(0, (rendered - container) / 2)` and a
/// translation is legal when it lies in `[-margin, +margin]`. An axis on which
/// the image already fits has a zero margin, so the image cannot drift off
/// center on that axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundsClamp {
    margins: Vec2,
}

impl BoundsClamp {
    /// Bounds that pin translation to the origin.
    pub const PINNED: Self = Self {
        margins: Vec2::ZERO,
    };

    /// Computes bounds from a rendered image size and a container size.
    #[must_use]
    pub fn new(rendered: Size, container: Size) -> Self {
        Self {
            margins: Vec2::new(
                margin(rendered.width, container.width),
                margin(rendered.height, container.height),
            ),
        }
    }

    /// Computes bounds for `geometry` drawn at `scale`.
    ///
    /// The rendered size is derived from the geometry on every call, so the
    /// result always matches the scale passed in. Unmeasurable geometry (a
    /// hidden container or an image that has not loaded) yields
    /// [`BoundsClamp::PINNED`].
    #[must_use]
    pub fn for_scale(geometry: &ImageGeometry, scale: f64) -> Self {
        if geometry.is_empty() {
            return Self::PINNED;
        }
        Self::new(geometry.rendered_size(scale), geometry.container_size())
    }

    /// Per-axis margins.
    #[must_use]
    pub fn margins(&self) -> Vec2 {
        self.margins
    }

    /// Clamps a candidate translation into the legal range.
    ///
    /// A non-finite component maps to zero.
    #[must_use]
    pub fn clamp(&self, translate: Vec2) -> Vec2 {
        Vec2::new(
            clamp_axis(translate.x, self.margins.x),
            clamp_axis(translate.y, self.margins.y),
        )
    }

    /// Returns `true` if `translate` is already within bounds.
    #[must_use]
    pub fn contains(&self, translate: Vec2) -> bool {
        translate.x.abs() <= self.margins.x && translate.y.abs() <= self.margins.y
    }
}

/// Clamps a translation against a rendered image size and container size.
///
/// Shorthand for `BoundsClamp::new(rendered, container).clamp(translate)`.
#[must_use]
pub fn clamp_translation(translate: Vec2, rendered: Size, container: Size) -> Vec2 {
    BoundsClamp::new(rendered, container).clamp(translate)
}

fn margin(rendered: f64, container: f64) -> f64 {
    let m = (rendered - container) / 2.0;
    if m.is_finite() { m.max(0.0) } else { 0.0 }
}

fn clamp_axis(value: f64, margin: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    value.clamp(-margin, margin)
}
