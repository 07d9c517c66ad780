// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use loupe_view::ViewerConfig;
use serde::{Deserialize, Serialize};

use crate::LoupeError;

/// DOM binding settings.
///
/// Every field has a default matching the stock page markup, so an empty
/// JSON object (or no configuration at all) binds to it unchanged.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebConfig {
    /// Modal root; clicks that land on it directly count as backdrop clicks.
    pub modal: String,
    /// Full-resolution `<img>` inside the modal.
    pub image: String,
    /// Element the image is centered in; its box bounds the pan.
    pub container: String,
    /// Close button.
    pub close_control: String,
    /// Thumbnails that open the lightbox when activated.
    pub thumbnails: String,
    /// Thumbnail attribute holding the full-resolution source; falls back to
    /// the thumbnail's own `src`.
    pub source_attribute: String,
    /// Class set on the modal while it is open.
    pub open_class: String,
    /// Pixels per line for line-mode wheel deltas.
    pub wheel_line_height: f64,
    /// In-page links that scroll smoothly to their target; empty disables.
    pub anchor_links: String,
    /// Navigation drawer; links inside it use the mobile header margin on
    /// narrow layouts. Empty means no drawer.
    pub nav_container: String,
    /// Cards that share the height of the tallest one; empty disables.
    pub equal_height_cards: String,
    /// Widest viewport, in CSS pixels, that uses the mobile header margin.
    pub mobile_breakpoint: f64,
    /// `log` level for the console logger (`"off"`, `"error"`, ... `"trace"`).
    pub log_level: String,
    /// Pan/zoom engine settings.
    pub viewer: ViewerConfig,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            modal: "#lightbox".to_string(),
            image: "#lightbox-image".to_string(),
            container: ".lightbox__stage".to_string(),
            close_control: ".lightbox__close".to_string(),
            thumbnails: "[data-lightbox]".to_string(),
            source_attribute: "data-full".to_string(),
            open_class: "is-open".to_string(),
            wheel_line_height: 16.0,
            anchor_links: "a[href^=\"#\"]".to_string(),
            nav_container: ".site-header__nav".to_string(),
            equal_height_cards: ".project-card".to_string(),
            mobile_breakpoint: 767.0,
            log_level: "info".to_string(),
            viewer: ViewerConfig::default(),
        }
    }
}

impl WebConfig {
    /// Parses a configuration, filling unspecified fields with defaults.
    ///
    /// Blank input yields the default configuration.
    pub fn from_json(json: &str) -> Result<Self, LoupeError> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        let mut config: Self = serde_json::from_str(json)?;
        config.viewer = config.viewer.normalized();
        if !(config.wheel_line_height.is_finite() && config.wheel_line_height > 0.0) {
            config.wheel_line_height = Self::default().wheel_line_height;
        }
        if !config.mobile_breakpoint.is_finite() {
            config.mobile_breakpoint = Self::default().mobile_breakpoint;
        }
        Ok(config)
    }

    /// Parsed [`Self::log_level`]; unknown names fall back to `Info`.
    #[must_use]
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}
