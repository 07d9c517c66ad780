// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;
use smallvec::SmallVec;

/// Active touch contacts in viewport coordinates, in the order the platform
/// reports them.
pub type Contacts = SmallVec<[Point; 2]>;

/// One raw input event, from any modality.
///
/// All positions are viewport (client) coordinates. Touch variants carry the
/// full list of contacts still on the surface after the event, so a
/// `TouchEnd` with one contact means one finger remains.
#[derive(Clone, Debug, PartialEq)]
pub enum Input {
    /// Primary mouse or pen button pressed.
    PointerDown {
        /// Pointer position.
        position: Point,
    },
    /// Mouse or pen moved.
    PointerMove {
        /// Pointer position.
        position: Point,
    },
    /// Primary button released.
    PointerUp,
    /// The platform cancelled the pointer stream.
    PointerCancel,
    /// One or more fingers touched down.
    TouchStart {
        /// All active contacts.
        contacts: Contacts,
    },
    /// One or more fingers moved.
    TouchMove {
        /// All active contacts.
        contacts: Contacts,
    },
    /// One or more fingers lifted.
    TouchEnd {
        /// Contacts still down.
        contacts: Contacts,
    },
    /// The platform cancelled the touch stream.
    TouchCancel,
    /// Wheel or trackpad scroll.
    Wheel {
        /// Pointer position.
        position: Point,
        /// Vertical delta in pixels; positive scrolls down (zooms out).
        delta_y: f64,
    },
    /// Double click or double tap.
    DoubleClick {
        /// Pointer position.
        position: Point,
    },
    /// The container or image was laid out again.
    Resize,
}

impl Input {
    /// Builds a touch-start event from any contact iterator.
    pub fn touch_start(contacts: impl IntoIterator<Item = Point>) -> Self {
        Self::TouchStart {
            contacts: contacts.into_iter().collect(),
        }
    }

    /// Builds a touch-move event from any contact iterator.
    pub fn touch_move(contacts: impl IntoIterator<Item = Point>) -> Self {
        Self::TouchMove {
            contacts: contacts.into_iter().collect(),
        }
    }

    /// Builds a touch-end event from the contacts still down.
    pub fn touch_end(contacts: impl IntoIterator<Item = Point>) -> Self {
        Self::TouchEnd {
            contacts: contacts.into_iter().collect(),
        }
    }

    /// Short label for logging.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::PointerDown { .. } => "pointer-down",
            Self::PointerMove { .. } => "pointer-move",
            Self::PointerUp => "pointer-up",
            Self::PointerCancel => "pointer-cancel",
            Self::TouchStart { .. } => "touch-start",
            Self::TouchMove { .. } => "touch-move",
            Self::TouchEnd { .. } => "touch-end",
            Self::TouchCancel => "touch-cancel",
            Self::Wheel { .. } => "wheel",
            Self::DoubleClick { .. } => "double-click",
            Self::Resize => "resize",
        }
    }
}

pub(crate) fn is_finite_point(p: Point) -> bool {
    p.x.is_finite() && p.y.is_finite()
}
