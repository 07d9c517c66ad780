// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Size};
use loupe_modal::{Frame, Stage};
use loupe_view::ImageGeometry;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlImageElement};

use crate::style::css_transform;
use crate::{LoupeError, WebConfig};

/// Looks up `selector` and casts it to `T`.
pub(crate) fn query<T: JsCast>(
    document: &Document,
    selector: &str,
    expected: &'static str,
) -> Result<T, LoupeError> {
    let element = document
        .query_selector(selector)?
        .ok_or_else(|| LoupeError::MissingElement {
            selector: selector.to_string(),
        })?;
    element
        .dyn_into::<T>()
        .map_err(|_| LoupeError::UnexpectedElement {
            selector: selector.to_string(),
            expected,
        })
}

/// Sets one inline style property, logging failures.
pub(crate) fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(err) = element.style().set_property(property, value) {
        log::warn!("could not set {property}: {err:?}");
    }
}

/// A lightbox rendered into existing page markup.
///
/// The handles are resolved once, when the stage is built.
#[derive(Clone, Debug)]
pub struct DomStage {
    modal: HtmlElement,
    image: HtmlImageElement,
    container: HtmlElement,
    open_class: String,
}

impl DomStage {
    /// Wraps already-resolved elements.
    pub fn new(
        modal: HtmlElement,
        image: HtmlImageElement,
        container: HtmlElement,
        open_class: impl Into<String>,
    ) -> Self {
        Self {
            modal,
            image,
            container,
            open_class: open_class.into(),
        }
    }

    /// Resolves the modal, image, and container named by `config`.
    pub fn locate(document: &Document, config: &WebConfig) -> Result<Self, LoupeError> {
        Ok(Self::new(
            query(document, &config.modal, "an HTML element")?,
            query(document, &config.image, "an <img>")?,
            query(document, &config.container, "an HTML element")?,
            config.open_class.clone(),
        ))
    }

    /// Modal root.
    pub fn modal(&self) -> &HtmlElement {
        &self.modal
    }

    /// Displayed image.
    pub fn image(&self) -> &HtmlImageElement {
        &self.image
    }

    /// Element the image is centered in.
    pub fn container(&self) -> &HtmlElement {
        &self.container
    }

    fn set_aria_hidden(&self, hidden: bool) {
        let value = if hidden { "true" } else { "false" };
        if let Err(err) = self.modal.set_attribute("aria-hidden", value) {
            log::warn!("could not set aria-hidden: {err:?}");
        }
    }
}

impl Stage<String> for DomStage {
    fn measure(&self) -> ImageGeometry {
        let r = self.container.get_bounding_client_rect();
        ImageGeometry::new(
            Rect::new(r.left(), r.top(), r.right(), r.bottom()),
            // Layout size ignores CSS transforms, so this stays the scale-1 box.
            Size::new(
                f64::from(self.image.offset_width()),
                f64::from(self.image.offset_height()),
            ),
        )
    }

    fn present(&mut self, frame: Frame) {
        set_style(&self.image, "transform", &css_transform(&frame.transform));
        set_style(&self.image, "cursor", frame.cursor.as_css());
    }

    fn show(&mut self, image: &String) {
        self.image.set_src(image);
        if let Err(err) = self.modal.class_list().add_1(&self.open_class) {
            log::warn!("could not open modal: {err:?}");
        }
        self.set_aria_hidden(false);
    }

    fn hide(&mut self) {
        if let Err(err) = self.modal.class_list().remove_1(&self.open_class) {
            log::warn!("could not close modal: {err:?}");
        }
        self.set_aria_hidden(true);
    }
}
