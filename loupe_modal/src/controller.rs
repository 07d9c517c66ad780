// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use loupe_gesture::{GesturePhase, GestureRecognizer, Input, Response};
use loupe_view::{Cursor, ViewTransform, ViewerConfig, ViewportState};

use crate::stage::{Frame, Stage};

/// Where a click on the open modal landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    /// The dimmed area around the image.
    Backdrop,
    /// The image itself.
    Image,
    /// The explicit close button.
    CloseControl,
}

/// Keys the lightbox reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// Closes the modal.
    Escape,
    /// Any other key.
    Other,
}

impl Key {
    /// Maps a DOM-style key name (`KeyboardEvent.key`).
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "Escape" | "Esc" => Self::Escape,
            _ => Self::Other,
        }
    }
}

/// Owns the lightbox lifecycle and the single viewport it displays.
///
/// Opening binds an image and resets the viewport; closing resets it again.
/// While open, input events are measured against the [`Stage`] and routed
/// through a [`GestureRecognizer`]; every resulting change is presented
/// immediately.
///
/// `reset` always wins over an in-flight gesture: open and close cancel any
/// drag or pinch before resetting.
#[derive(Debug)]
pub struct ModalController<K, S> {
    stage: S,
    view: ViewportState,
    gestures: GestureRecognizer,
    active: Option<K>,
}

impl<K, S: Stage<K>> ModalController<K, S> {
    /// Creates a closed controller around `stage`.
    pub fn new(stage: S, config: ViewerConfig) -> Self {
        Self {
            stage,
            view: ViewportState::new(),
            gestures: GestureRecognizer::new(config),
            active: None,
        }
    }

    /// Whether the modal is showing an image.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// Image currently bound to the viewer.
    #[must_use]
    pub fn active_image(&self) -> Option<&K> {
        self.active.as_ref()
    }

    /// Current viewport state.
    #[must_use]
    pub fn view(&self) -> &ViewportState {
        &self.view
    }

    /// Current gesture phase.
    #[must_use]
    pub fn phase(&self) -> &GesturePhase {
        self.gestures.phase()
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &ViewerConfig {
        self.gestures.config()
    }

    /// Current transform, for rendering.
    #[must_use]
    pub fn transform(&self) -> ViewTransform {
        self.view.transform()
    }

    /// Current cursor affordance.
    #[must_use]
    pub fn cursor(&self) -> Cursor {
        self.view.cursor(self.gestures.config())
    }

    /// Transform and cursor together.
    #[must_use]
    pub fn frame(&self) -> Frame {
        Frame {
            transform: self.transform(),
            cursor: self.cursor(),
        }
    }

    /// Host handle.
    #[must_use]
    pub fn stage(&self) -> &S {
        &self.stage
    }

    /// Mutable host handle.
    pub fn stage_mut(&mut self) -> &mut S {
        &mut self.stage
    }

    /// Opens the viewer on `image`, replacing any image already shown.
    pub fn open(&mut self, image: K) {
        log::debug!(
            "lightbox {}",
            if self.is_open() { "rebind" } else { "open" }
        );
        self.stage.show(&image);
        self.active = Some(image);
        self.reset();
    }

    /// Closes the viewer. Returns `false` if it was already closed.
    pub fn close(&mut self) -> bool {
        if self.active.take().is_none() {
            return false;
        }
        log::debug!("lightbox close");
        self.reset();
        self.stage.hide();
        true
    }

    /// Handles a click on the modal. Returns `true` if it closed the modal.
    pub fn handle_click(&mut self, target: ClickTarget) -> bool {
        match target {
            ClickTarget::Backdrop | ClickTarget::CloseControl => self.close(),
            ClickTarget::Image => false,
        }
    }

    /// Handles a key press. Returns `true` if it closed the modal.
    pub fn handle_key(&mut self, key: Key) -> bool {
        match key {
            Key::Escape => self.close(),
            Key::Other => false,
        }
    }

    /// Routes an input event through the gesture engine.
    ///
    /// Events are ignored while the modal is closed. Geometry is measured
    /// fresh for every event.
    pub fn handle_input(&mut self, input: &Input) -> Response {
        if !self.is_open() {
            return Response::default();
        }
        let geometry = self.stage.measure();
        let response = self.gestures.handle(&mut self.view, input, &geometry);
        if response.changed {
            self.stage.present(self.frame());
        }
        response
    }

    /// Re-clamps after a container or image layout change.
    pub fn relayout(&mut self) -> Response {
        self.handle_input(&Input::Resize)
    }

    fn reset(&mut self) {
        self.gestures.cancel(&mut self.view);
        self.view.reset();
        self.stage.present(self.frame());
    }
}

#[cfg(test)]
mod tests {
    use super::Key;

    #[test]
    fn key_names() {
        assert_eq!(Key::from_name("Escape"), Key::Escape);
        assert_eq!(Key::from_name("Esc"), Key::Escape);
        assert_eq!(Key::from_name("Enter"), Key::Other);
        assert_eq!(Key::from_name("escape"), Key::Other);
    }
}
