// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Smallest minimum scale a [`ViewerConfig`] accepts.
///
/// Scales at or below zero would make the focal-point ratio undefined.
pub const MIN_SCALE_FLOOR: f64 = 1e-3;

/// Tunable constants of the pan/zoom engine.
///
/// Every value is normalized on construction so that the engine can rely on
/// `MIN_SCALE_FLOOR <= min_scale <= double_click_scale <= max_scale` and on a
/// finite, non-negative wheel sensitivity.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ViewerConfig {
    /// Scale at which the image fits the container; also the zoom-out limit.
    pub min_scale: f64,
    /// Zoom-in limit.
    pub max_scale: f64,
    /// Scale units gained per pixel of (negated) wheel delta.
    pub wheel_sensitivity: f64,
    /// Target scale of a double-click on an unzoomed image.
    pub double_click_scale: f64,
}

impl ViewerConfig {
    /// Default scale range is `[1.0, 4.0]`.
    pub const DEFAULT: Self = Self {
        min_scale: 1.0,
        max_scale: 4.0,
        wheel_sensitivity: 0.001,
        double_click_scale: 2.0,
    };

    /// Returns a copy with the given scale limits.
    ///
    /// The range is reordered if `min > max`, and the minimum is raised to
    /// [`MIN_SCALE_FLOOR`]. Non-finite limits keep the previous value.
    #[must_use]
    pub fn with_scale_limits(mut self, min_scale: f64, max_scale: f64) -> Self {
        self.min_scale = min_scale;
        self.max_scale = max_scale;
        self.normalized()
    }

    /// Returns a copy with the given wheel sensitivity.
    #[must_use]
    pub fn with_wheel_sensitivity(mut self, sensitivity: f64) -> Self {
        self.wheel_sensitivity = sensitivity;
        self.normalized()
    }

    /// Returns a copy with the given double-click target scale.
    #[must_use]
    pub fn with_double_click_scale(mut self, scale: f64) -> Self {
        self.double_click_scale = scale;
        self.normalized()
    }

    /// Clamps `scale` into `[min_scale, max_scale]`.
    ///
    /// NaN maps to `min_scale`.
    #[must_use]
    pub fn clamp_scale(&self, scale: f64) -> f64 {
        if scale.is_nan() {
            return self.min_scale;
        }
        scale.clamp(self.min_scale, self.max_scale)
    }

    /// Returns the config with all invariants restored.
    ///
    /// Deserialized or hand-built configs should pass through here before use;
    /// the `with_*` builders already do.
    #[must_use]
    pub fn normalized(self) -> Self {
        let fallback = Self::DEFAULT;
        let pick = |v: f64, d: f64| if v.is_finite() { v } else { d };

        let a = pick(self.min_scale, fallback.min_scale);
        let b = pick(self.max_scale, fallback.max_scale);
        let (min_scale, max_scale) = if a <= b { (a, b) } else { (b, a) };
        let min_scale = min_scale.max(MIN_SCALE_FLOOR);
        let max_scale = max_scale.max(min_scale);

        let wheel_sensitivity = pick(self.wheel_sensitivity, fallback.wheel_sensitivity).max(0.0);
        let double_click_scale = pick(self.double_click_scale, fallback.double_click_scale)
            .clamp(min_scale, max_scale);

        Self {
            min_scale,
            max_scale,
            wheel_sensitivity,
            double_click_scale,
        }
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
