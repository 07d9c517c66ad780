// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Vec2};

use crate::{BoundsClamp, ImageGeometry, ViewerConfig};

/// Scale and translation of the displayed image, plus the drag flag.
///
/// `ViewportState` enforces two invariants after every mutation:
/// - `scale` lies in the configured range (`[1, 4]` by default).
/// - `translate` lies within the [`BoundsClamp`] computed for the current
///   scale and the geometry passed to the mutator.
///
/// When a controlled zoom path (`set_scale`, `zoom_about`) lands exactly on
/// the minimum scale, translation is reset to the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportState {
    scale: f64,
    translate: Vec2,
    is_dragging: bool,
}

impl ViewportState {
    /// Unzoomed, centered, not dragging.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        translate: Vec2::ZERO,
        is_dragging: false,
    };

    /// Creates the identity state.
    #[must_use]
    pub fn new() -> Self {
        Self::IDENTITY
    }

    /// Current scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Offset of the image center from the container center, in pixels.
    #[must_use]
    pub fn translate(&self) -> Vec2 {
        self.translate
    }

    /// Whether a drag gesture currently owns the viewport.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    /// Whether the image is zoomed past the configured minimum.
    #[must_use]
    pub fn is_zoomed(&self, config: &ViewerConfig) -> bool {
        self.scale > config.min_scale
    }

    /// Sets the scale, clamping it into the configured range.
    ///
    /// Translation is re-clamped against the bounds for the new scale, and
    /// forced to the origin if the result is exactly the minimum scale.
    pub fn set_scale(&mut self, scale: f64, geometry: &ImageGeometry, config: &ViewerConfig) {
        self.scale = config.clamp_scale(scale);
        self.settle(geometry, config);
    }

    /// Sets the translation after passing it through [`BoundsClamp`].
    pub fn set_translation(&mut self, translate: Vec2, geometry: &ImageGeometry) {
        self.translate = BoundsClamp::for_scale(geometry, self.scale).clamp(translate);
    }

    /// Zooms to `scale` while keeping the content under `focal` fixed.
    ///
    /// `focal` is a viewport point. With `q` the focal point relative to the
    /// container center, `t` the translation and `r` the scale ratio, the new
    /// translation is `t - (q - t) * (r - 1)`, which keeps `q` over the same
    /// image pixel. The result is then clamped like [`Self::set_scale`].
    pub fn zoom_about(
        &mut self,
        focal: Point,
        scale: f64,
        geometry: &ImageGeometry,
        config: &ViewerConfig,
    ) {
        let prev = self.scale;
        let next = config.clamp_scale(scale);
        let ratio = next / prev;
        if ratio.is_finite() && focal.x.is_finite() && focal.y.is_finite() {
            let local = geometry.to_local(focal);
            self.translate -= (local - self.translate) * (ratio - 1.0);
        }
        self.scale = next;
        self.settle(geometry, config);
    }

    /// Re-applies the bounds for the current scale.
    ///
    /// Call after the container or image geometry changed underneath an
    /// otherwise unchanged state.
    pub fn reclamp(&mut self, geometry: &ImageGeometry) {
        self.set_translation(self.translate, geometry);
    }

    /// Marks a drag gesture as active or finished.
    pub fn set_dragging(&mut self, dragging: bool) {
        self.is_dragging = dragging;
    }

    /// Returns to the identity state.
    pub fn reset(&mut self) {
        *self = Self::IDENTITY;
    }

    /// Transform to hand to the renderer.
    #[must_use]
    pub fn transform(&self) -> ViewTransform {
        ViewTransform {
            scale: self.scale,
            translate_x: self.translate.x,
            translate_y: self.translate.y,
        }
    }

    /// Pointer affordance for the current state.
    #[must_use]
    pub fn cursor(&self, config: &ViewerConfig) -> Cursor {
        if self.is_dragging {
            Cursor::Grabbing
        } else if self.is_zoomed(config) {
            Cursor::Grab
        } else {
            Cursor::Default
        }
    }

    fn settle(&mut self, geometry: &ImageGeometry, config: &ViewerConfig) {
        if self.scale == config.min_scale {
            self.translate = Vec2::ZERO;
        } else {
            self.reclamp(geometry);
        }
    }
}

impl Default for ViewportState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Viewport transform as consumed by a renderer.
///
/// The image is drawn translated by `(translate_x, translate_y)` and then
/// scaled by `scale` about its own center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    /// Uniform scale.
    pub scale: f64,
    /// Horizontal offset in pixels.
    pub translate_x: f64,
    /// Vertical offset in pixels.
    pub translate_y: f64,
}

impl ViewTransform {
    /// Maps a content offset (relative to the untransformed image center)
    /// to an offset from the container center.
    #[must_use]
    pub fn content_to_local(&self, content: Vec2) -> Vec2 {
        Vec2::new(self.translate_x, self.translate_y) + content * self.scale
    }

    /// Inverse of [`Self::content_to_local`].
    #[must_use]
    pub fn local_to_content(&self, local: Vec2) -> Vec2 {
        (local - Vec2::new(self.translate_x, self.translate_y)) / self.scale
    }

    /// The same mapping as an affine transform over center-relative points.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        Affine::translate((self.translate_x, self.translate_y)) * Affine::scale(self.scale)
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        ViewportState::IDENTITY.transform()
    }
}

/// Cursor affordance exposed to the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Cursor {
    /// Image is unzoomed; nothing to pan.
    #[default]
    Default,
    /// Image is zoomed and can be grabbed.
    Grab,
    /// A drag is in progress.
    Grabbing,
}

impl Cursor {
    /// CSS `cursor` keyword.
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Grab => "grab",
            Self::Grabbing => "grabbing",
        }
    }
}
