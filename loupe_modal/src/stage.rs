// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use loupe_view::{Cursor, ImageGeometry, ViewTransform};

/// What the host renders after every state change.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Frame {
    /// Transform to apply to the image.
    pub transform: ViewTransform,
    /// Pointer affordance to show over the image.
    pub cursor: Cursor,
}

/// The host side of a lightbox: element handles, measurement, and painting.
///
/// A `Stage` is handed to [`crate::ModalController`] once, at construction,
/// so the controller never looks anything up on its own. `K` identifies an
/// image (a URL, an asset id, a texture handle).
pub trait Stage<K> {
    /// Measures the container and the image's untransformed layout box.
    ///
    /// Called on every input event. Return [`ImageGeometry::EMPTY`] while the
    /// image is hidden or not loaded yet.
    fn measure(&self) -> ImageGeometry;

    /// Applies a transform and cursor to the displayed image.
    fn present(&mut self, frame: Frame);

    /// Makes the modal chrome visible and starts displaying `image`.
    fn show(&mut self, image: &K);

    /// Hides the modal chrome.
    fn hide(&mut self);
}

impl<K, S: Stage<K> + ?Sized> Stage<K> for &mut S {
    fn measure(&self) -> ImageGeometry {
        (**self).measure()
    }

    fn present(&mut self, frame: Frame) {
        (**self).present(frame);
    }

    fn show(&mut self, image: &K) {
        (**self).show(image);
    }

    fn hide(&mut self) {
        (**self).hide();
    }
}
