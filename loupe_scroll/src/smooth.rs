// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Smooth scrolling to an element as a cancellable, token-keyed task.
//!
//! The host drives the animation from its frame callback: every frame it
//! calls [`SmoothScroll::tick`] with the token it was given by
//! [`SmoothScroll::start`] and a fresh [`ScrollFrame`] measurement. Starting a
//! new scroll invalidates every older token, so a callback still queued for a
//! superseded animation sees [`ScrollTick::Stale`] and stops instead of
//! fighting the new one.

use crate::ease_in_out_cubic;

/// Default animation length in milliseconds.
pub const DEFAULT_DURATION_MS: f64 = 1000.0;

/// Gap left above the target for the fixed page header, in pixels.
pub const HEADER_MARGIN: f64 = 40.0;

/// Header gap on narrow layouts, where the header is taller.
pub const MOBILE_HEADER_MARGIN: f64 = 70.0;

/// Identifies one scroll animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AnimationToken(u64);

/// Layout measured by the host at the start of each frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollFrame {
    /// Current document scroll offset.
    pub scroll_y: f64,
    /// Target element's top edge relative to the viewport.
    pub target_top: f64,
    /// Largest reachable scroll offset (`scrollHeight - innerHeight`).
    pub max_scroll: f64,
}

/// What the host should do for this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollTick {
    /// Scroll to this offset and request another frame.
    Continue(f64),
    /// Scroll to this offset; the animation is over.
    Finished(f64),
    /// The token was superseded or cancelled; do nothing.
    Stale,
}

#[derive(Clone, Copy, Debug)]
struct Running {
    token: AnimationToken,
    from_y: f64,
    started_at: Option<f64>,
    duration: f64,
    margin: f64,
}

/// At most one smooth scroll at a time.
#[derive(Clone, Debug, Default)]
pub struct SmoothScroll {
    next_token: u64,
    running: Option<Running>,
}

impl SmoothScroll {
    /// Creates an idle animator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts scrolling from `from_y`, superseding any running animation.
    ///
    /// The clock starts on the first [`Self::tick`], matching frame-callback
    /// timestamps. `margin` is left between the viewport top and the target.
    pub fn start(&mut self, from_y: f64, duration_ms: f64, margin: f64) -> AnimationToken {
        if let Some(prev) = self.running {
            log::debug!("smooth scroll {:?} superseded", prev.token);
        }
        self.next_token = self.next_token.wrapping_add(1);
        let token = AnimationToken(self.next_token);
        self.running = Some(Running {
            token,
            from_y,
            started_at: None,
            duration: if duration_ms.is_finite() {
                duration_ms.max(0.0)
            } else {
                0.0
            },
            margin,
        });
        token
    }

    /// Cancels the running animation, if any.
    pub fn cancel(&mut self) {
        self.running = None;
    }

    /// Whether `token` names the running animation.
    #[must_use]
    pub fn is_current(&self, token: AnimationToken) -> bool {
        self.running.is_some_and(|r| r.token == token)
    }

    /// Advances the animation for the frame at `now_ms`.
    ///
    /// The destination is recomputed from `frame` every time, so layout shifts
    /// during the animation (images loading above the target) are followed.
    pub fn tick(&mut self, token: AnimationToken, now_ms: f64, frame: ScrollFrame) -> ScrollTick {
        let Some(running) = self.running.as_mut().filter(|r| r.token == token) else {
            return ScrollTick::Stale;
        };
        let started_at = *running.started_at.get_or_insert(now_ms);

        let progress = if running.duration > 0.0 {
            ((now_ms - started_at) / running.duration).clamp(0.0, 1.0)
        } else {
            1.0
        };

        let dest = (frame.scroll_y + frame.target_top - running.margin).min(frame.max_scroll);
        let y = running.from_y + (dest - running.from_y) * ease_in_out_cubic(progress);

        if progress >= 1.0 {
            self.running = None;
            ScrollTick::Finished(y)
        } else {
            ScrollTick::Continue(y)
        }
    }
}
