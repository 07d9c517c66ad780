// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag session: pan the viewport by following a single pointer.
//!
//! ## Usage
//!
//! 1) Start a session with [`DragSession::start`], passing the pointer position
//!    and the translation at that moment. The session stores the anchor
//!    `pointer - translation`.
//! 2) On each move, [`DragSession::translation_at`] returns the translation that
//!    keeps the grabbed pixel under the pointer (before clamping).
//! 3) If the translation is changed by something other than the drag (a wheel
//!    zoom, say), call [`DragSession::reanchor`] so the next move continues from
//!    the new translation.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use loupe_gesture::drag::DragSession;
//!
//! // Pointer down at (300, 300) while translated by (10, 10).
//! let mut drag = DragSession::start(Point::new(300.0, 300.0), Vec2::new(10.0, 10.0));
//! assert_eq!(drag.anchor(), Point::new(290.0, 290.0));
//!
//! // Move to (310, 295): translation follows the pointer.
//! assert_eq!(drag.translation_at(Point::new(310.0, 295.0)), Vec2::new(20.0, 5.0));
//! ```

use kurbo::{Point, Vec2};

/// State of a live drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    anchor: Point,
    last: Point,
}

impl DragSession {
    /// Starts a drag at `pointer` with the viewport currently at `translate`.
    #[must_use]
    pub fn start(pointer: Point, translate: Vec2) -> Self {
        Self {
            anchor: pointer - translate,
            last: pointer,
        }
    }

    /// Pointer position minus translation at drag start.
    #[must_use]
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    /// Last pointer position seen by the session.
    #[must_use]
    pub fn last_pointer(&self) -> Point {
        self.last
    }

    /// Records a move to `pointer` and returns the unclamped translation.
    pub fn translation_at(&mut self, pointer: Point) -> Vec2 {
        self.last = pointer;
        pointer - self.anchor
    }

    /// Re-derives the anchor from the last pointer position and `translate`.
    pub fn reanchor(&mut self, translate: Vec2) {
        self.anchor = self.last - translate;
    }
}
