// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size, Vec2};

/// Measured layout of the displayed image and its container.
///
/// Hosts produce a fresh value for every input event. The image is assumed to
/// be centered in the container at scale 1, so the container center is also
/// the untransformed image center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageGeometry {
    /// Container rectangle in viewport (client) coordinates.
    pub container: Rect,
    /// Untransformed layout size of the image (its rendered size at scale 1).
    pub fitted: Size,
}

impl ImageGeometry {
    /// Geometry of a hidden or not yet loaded image.
    ///
    /// Every margin computed against it is zero, which pins translation to
    /// the origin.
    pub const EMPTY: Self = Self {
        container: Rect::ZERO,
        fitted: Size::ZERO,
    };

    /// Creates geometry from a container rect and the image's layout size.
    ///
    /// Non-finite or negative extents are replaced by zero.
    #[must_use]
    pub fn new(container: Rect, fitted: Size) -> Self {
        let container = if is_finite_rect(container) {
            container.abs()
        } else {
            Rect::ZERO
        };
        Self {
            container,
            fitted: sanitize_size(fitted),
        }
    }

    /// Container size.
    #[must_use]
    pub fn container_size(&self) -> Size {
        self.container.size()
    }

    /// Size of the image box when drawn at `scale`.
    #[must_use]
    pub fn rendered_size(&self, scale: f64) -> Size {
        sanitize_size(self.fitted * scale)
    }

    /// Converts a viewport point into an offset from the container center.
    #[must_use]
    pub fn to_local(&self, client: Point) -> Vec2 {
        client - self.container.center()
    }

    /// Returns `true` when nothing can be measured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.container.is_zero_area() || self.fitted.is_zero_area()
    }
}

impl Default for ImageGeometry {
    fn default() -> Self {
        Self::EMPTY
    }
}

fn is_finite_rect(rect: Rect) -> bool {
    rect.x0.is_finite() && rect.y0.is_finite() && rect.x1.is_finite() && rect.y1.is_finite()
}

fn sanitize_size(size: Size) -> Size {
    let clean = |v: f64| if v.is_finite() && v > 0.0 { v } else { 0.0 };
    Size::new(clean(size.width), clean(size.height))
}
