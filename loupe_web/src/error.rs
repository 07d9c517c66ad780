// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Errors raised while binding the lightbox to a document.
///
/// Once bound, event handling cannot fail; these only surface from setup.
#[derive(Debug, Error)]
pub enum LoupeError {
    /// A required element is missing from the document.
    #[error("no element matches `{selector}`")]
    MissingElement {
        /// Selector that matched nothing.
        selector: String,
    },
    /// An element was found but has the wrong type.
    #[error("`{selector}` is not {expected}")]
    UnexpectedElement {
        /// Selector that matched.
        selector: String,
        /// Element type the binding needs.
        expected: &'static str,
    },
    /// A DOM call threw.
    #[error("DOM call failed: {0}")]
    Js(String),
    /// The configuration JSON could not be parsed.
    #[error("invalid lightbox configuration: {0}")]
    Config(#[from] serde_json::Error),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for LoupeError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

#[cfg(target_arch = "wasm32")]
impl From<LoupeError> for wasm_bindgen::JsValue {
    fn from(err: LoupeError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

#[cfg(test)]
mod tests {
    use super::LoupeError;

    #[test]
    fn messages_name_the_selector() {
        let err = LoupeError::MissingElement {
            selector: "#lightbox".to_string(),
        };
        assert_eq!(err.to_string(), "no element matches `#lightbox`");

        let err = LoupeError::UnexpectedElement {
            selector: ".lightbox__image".to_string(),
            expected: "an <img>",
        };
        assert_eq!(err.to_string(), "`.lightbox__image` is not an <img>");
    }
}
