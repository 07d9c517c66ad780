// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinch session: scale the viewport by the ratio of two-finger distances.
//!
//! The scale at any point of the pinch is
//! `baseline_scale * current_distance / baseline_distance`. Callers clamp the
//! result. A pinch does not reposition the image around the fingers; only the
//! bounds clamp moves it.

use kurbo::Point;

/// Distance between the first two contacts, if there are at least two.
#[must_use]
pub fn contact_distance(contacts: &[Point]) -> Option<f64> {
    match contacts {
        [a, b, ..] => {
            let d = a.distance(*b);
            d.is_finite().then_some(d)
        }
        _ => None,
    }
}

/// State of a live pinch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchSession {
    baseline_distance: f64,
    baseline_scale: f64,
    last_distance: f64,
}

impl PinchSession {
    /// Starts a pinch with the contacts `distance` apart at `scale`.
    #[must_use]
    pub fn start(distance: f64, scale: f64) -> Self {
        let distance = distance.max(0.0);
        Self {
            baseline_distance: distance,
            baseline_scale: scale,
            last_distance: distance,
        }
    }

    /// Contact distance at pinch start (or at the last re-baseline).
    #[must_use]
    pub fn baseline_distance(&self) -> f64 {
        self.baseline_distance
    }

    /// Viewport scale at pinch start (or at the last re-baseline).
    #[must_use]
    pub fn baseline_scale(&self) -> f64 {
        self.baseline_scale
    }

    /// Returns the unclamped scale for contacts `distance` apart.
    ///
    /// While the baseline distance is zero (fingers landed on the same spot)
    /// the factor is 1; the first positive distance becomes the baseline.
    /// A non-finite distance yields `None`.
    pub fn scale_at(&mut self, distance: f64) -> Option<f64> {
        if !distance.is_finite() {
            return None;
        }
        let distance = distance.max(0.0);
        self.last_distance = distance;
        if self.baseline_distance <= 0.0 {
            self.baseline_distance = distance;
            return Some(self.baseline_scale);
        }
        Some(self.baseline_scale * (distance / self.baseline_distance))
    }

    /// Restarts the ratio from the last seen distance at `scale`.
    ///
    /// Used when the scale was changed outside the pinch mid-gesture.
    pub fn rebase(&mut self, scale: f64) {
        self.baseline_distance = self.last_distance;
        self.baseline_scale = scale;
    }
}
