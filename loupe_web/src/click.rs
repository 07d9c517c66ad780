// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Tells a click that ends a pan apart from a click on what it landed on.
///
/// Browsers fire `click` after a mouse drag whose press and release share an
/// ancestor, so a pan released over the backdrop would otherwise close the
/// lightbox. Feed it every pointer press, every pan step, and every cancel;
/// ask [`Self::take_click`] when a click arrives.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClickGuard {
    panned: bool,
}

impl ClickGuard {
    /// A pointer was pressed anywhere; any earlier pan is over.
    pub fn press(&mut self) {
        self.panned = false;
    }

    /// The current press moved the image.
    pub fn pan(&mut self) {
        self.panned = true;
    }

    /// The pointer stream was cancelled; no click will follow it.
    pub fn cancel(&mut self) {
        self.panned = false;
    }

    /// Whether the arriving click should be ignored. Consumes the pan.
    pub fn take_click(&mut self) -> bool {
        core::mem::take(&mut self.panned)
    }
}

#[cfg(test)]
mod tests {
    use super::ClickGuard;

    #[test]
    fn click_after_pan_is_ignored_once() {
        let mut guard = ClickGuard::default();
        guard.press();
        guard.pan();
        assert!(guard.take_click());
        assert!(!guard.take_click());
    }

    #[test]
    fn plain_click_passes() {
        let mut guard = ClickGuard::default();
        guard.press();
        assert!(!guard.take_click());
    }

    #[test]
    fn pan_released_off_page_does_not_swallow_next_click() {
        let mut guard = ClickGuard::default();
        guard.press();
        guard.pan();
        // Released outside the document: no click arrives. The next click
        // starts with a fresh press.
        guard.press();
        assert!(!guard.take_click());
    }

    #[test]
    fn cancelled_pan_does_not_swallow_next_click() {
        let mut guard = ClickGuard::default();
        guard.press();
        guard.pan();
        guard.cancel();
        assert!(!guard.take_click());
    }
}
