// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Listener wiring between the page and the modal controller.

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::Point;
use loupe_gesture::Input;
use loupe_modal::{ClickTarget, Key, ModalController, Stage};
use wasm_bindgen::prelude::*;
use web_sys::{
    AddEventListenerOptions, Document, Event, EventTarget, HtmlElement, KeyboardEvent, MouseEvent,
    Node, PointerEvent, TouchEvent, TouchList, WheelEvent,
};

use crate::dom::{DomStage, query};
use crate::page;
use crate::style::{DeltaMode, thumbnail_source, wheel_delta_pixels};
use crate::{ClickGuard, LoupeError, WebConfig};

type Controller = Rc<RefCell<ModalController<String, DomStage>>>;

struct Listener {
    target: EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

/// Event listeners registered by one binding.
///
/// Dropping the set unregisters every listener.
#[derive(Default)]
pub(crate) struct Listeners {
    entries: Vec<Listener>,
}

impl Listeners {
    /// Registers `handler` for `kind` events of type `E` on `target`.
    ///
    /// Handlers that call `preventDefault` must pass `passive: false`.
    pub(crate) fn add<E: JsCast + 'static>(
        &mut self,
        target: &EventTarget,
        kind: &'static str,
        passive: bool,
        mut handler: impl FnMut(E) + 'static,
    ) -> Result<(), LoupeError> {
        let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            if let Ok(event) = event.dyn_into::<E>() {
                handler(event);
            }
        });
        let options = AddEventListenerOptions::new();
        options.set_passive(passive);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            kind,
            closure.as_ref().unchecked_ref(),
            &options,
        )?;
        self.entries.push(Listener {
            target: target.clone(),
            kind,
            closure,
        });
        Ok(())
    }

    fn leak(&mut self) {
        for listener in self.entries.drain(..) {
            listener.closure.forget();
        }
    }
}

impl Drop for Listeners {
    fn drop(&mut self) {
        for listener in &self.entries {
            let _ = listener.target.remove_event_listener_with_callback(
                listener.kind,
                listener.closure.as_ref().unchecked_ref(),
            );
        }
    }
}

/// A lightbox bound to a document.
///
/// Dropping it unbinds every listener; call [`Loupe::forget`] to keep the
/// binding for the lifetime of the page.
pub struct Loupe {
    controller: Controller,
    listeners: Listeners,
}

impl core::fmt::Debug for Loupe {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Loupe")
            .field("open", &self.is_open())
            .field("listeners", &self.listeners.entries.len())
            .finish_non_exhaustive()
    }
}

impl Loupe {
    /// Opens the lightbox on `source`.
    pub fn open(&self, source: &str) {
        self.controller.borrow_mut().open(source.to_string());
    }

    /// Closes the lightbox; returns `false` if it was already closed.
    pub fn close(&self) -> bool {
        self.controller.borrow_mut().close()
    }

    /// Whether the lightbox is showing an image.
    pub fn is_open(&self) -> bool {
        self.controller.borrow().is_open()
    }

    /// Keeps the listeners registered after this handle is gone.
    pub fn forget(mut self) {
        self.listeners.leak();
    }
}

fn client_point(event: &MouseEvent) -> Point {
    Point::new(f64::from(event.client_x()), f64::from(event.client_y()))
}

fn contacts(list: &TouchList) -> impl Iterator<Item = Point> + '_ {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|t| Point::new(f64::from(t.client_x()), f64::from(t.client_y())))
}

fn is_node(target: Option<EventTarget>, element: &HtmlElement) -> bool {
    target
        .as_ref()
        .and_then(|t| t.dyn_ref::<Node>())
        .is_some_and(|node| element.is_same_node(Some(node)))
}

/// Forwards `input` and suppresses the browser default if it was consumed.
fn forward(controller: &Controller, event: &Event, input: &Input) {
    let resp = controller.borrow_mut().handle_input(input);
    if resp.handled {
        event.prevent_default();
    }
}

/// Binds a lightbox to the elements named by `config`.
///
/// Fails if the modal, image, container, or close control is missing.
/// Thumbnails, anchor links, and equal-height cards are optional.
pub fn bind(document: &Document, config: WebConfig) -> Result<Loupe, LoupeError> {
    let window = document
        .default_view()
        .ok_or_else(|| LoupeError::Js("document has no window".to_string()))?;
    let stage = DomStage::locate(document, &config)?;
    let close: HtmlElement = query(document, &config.close_control, "an HTML element")?;

    let modal_el = stage.modal().clone();
    let image_el = stage.image().clone();
    let container_el = stage.container().clone();

    let controller: Controller = Rc::new(RefCell::new(ModalController::new(stage, config.viewer)));
    let mut listeners = Listeners::default();
    let guard = Rc::new(RefCell::new(ClickGuard::default()));

    // Open triggers.
    let thumbnails = document.query_selector_all(&config.thumbnails)?;
    for thumb in (0..thumbnails.length()).filter_map(|i| thumbnails.get(i)) {
        let Ok(thumb) = thumb.dyn_into::<HtmlElement>() else {
            continue;
        };
        let c = Rc::clone(&controller);
        let attribute = config.source_attribute.clone();
        let el = thumb.clone();
        listeners.add(&thumb, "click", false, move |event: MouseEvent| {
            let Some(source) =
                thumbnail_source(el.get_attribute(&attribute), el.get_attribute("src"))
            else {
                log::warn!("thumbnail has no image source");
                return;
            };
            event.prevent_default();
            c.borrow_mut().open(source);
        })?;
    }

    // Close triggers.
    {
        let c = Rc::clone(&controller);
        listeners.add(&close, "click", true, move |event: MouseEvent| {
            event.stop_propagation();
            let _ = c.borrow_mut().handle_click(ClickTarget::CloseControl);
        })?;
    }
    {
        let c = Rc::clone(&controller);
        let guard = Rc::clone(&guard);
        let modal = modal_el.clone();
        let image = image_el.clone();
        listeners.add(&modal_el, "click", true, move |event: MouseEvent| {
            if guard.borrow_mut().take_click() {
                return;
            }
            let target = if is_node(event.target(), &modal) {
                ClickTarget::Backdrop
            } else if is_node(event.target(), &image) {
                ClickTarget::Image
            } else {
                return;
            };
            let _ = c.borrow_mut().handle_click(target);
        })?;
    }
    {
        let c = Rc::clone(&controller);
        listeners.add(document, "keydown", false, move |event: KeyboardEvent| {
            if c.borrow_mut().handle_key(Key::from_name(&event.key())) {
                event.prevent_default();
            }
        })?;
    }

    // Every click is preceded by a press somewhere on the page.
    {
        let guard = Rc::clone(&guard);
        listeners.add(&window, "pointerdown", true, move |_: PointerEvent| {
            guard.borrow_mut().press();
        })?;
    }

    // Mouse and pen. Touch pointers are left to the touch listeners below.
    {
        let c = Rc::clone(&controller);
        listeners.add(&image_el, "pointerdown", false, move |event: PointerEvent| {
            if event.pointer_type() == "touch" || event.button() != 0 {
                return;
            }
            forward(&c, &event, &Input::PointerDown {
                position: client_point(&event),
            });
        })?;
    }
    {
        let c = Rc::clone(&controller);
        let guard = Rc::clone(&guard);
        listeners.add(&window, "pointermove", true, move |event: PointerEvent| {
            if event.pointer_type() == "touch" {
                return;
            }
            let mut modal = c.borrow_mut();
            let resp = modal.handle_input(&Input::PointerMove {
                position: client_point(&event),
            });
            if resp.changed && modal.view().is_dragging() {
                guard.borrow_mut().pan();
            }
        })?;
    }
    {
        let c = Rc::clone(&controller);
        listeners.add(&window, "pointerup", true, move |event: PointerEvent| {
            if event.pointer_type() != "touch" {
                let _ = c.borrow_mut().handle_input(&Input::PointerUp);
            }
        })?;
    }
    {
        let c = Rc::clone(&controller);
        let guard = Rc::clone(&guard);
        listeners.add(&window, "pointercancel", true, move |event: PointerEvent| {
            guard.borrow_mut().cancel();
            if event.pointer_type() != "touch" {
                let _ = c.borrow_mut().handle_input(&Input::PointerCancel);
            }
        })?;
    }
    {
        let c = Rc::clone(&controller);
        let line_height = config.wheel_line_height;
        listeners.add(&container_el, "wheel", false, move |event: WheelEvent| {
            let page_height = c.borrow().stage().measure().container_size().height;
            let delta_y = wheel_delta_pixels(
                event.delta_y(),
                DeltaMode::from_raw(event.delta_mode()),
                line_height,
                page_height,
            );
            forward(&c, &event, &Input::Wheel {
                position: client_point(&event),
                delta_y,
            });
        })?;
    }
    {
        let c = Rc::clone(&controller);
        listeners.add(&image_el, "dblclick", true, move |event: MouseEvent| {
            let _ = c.borrow_mut().handle_input(&Input::DoubleClick {
                position: client_point(&event),
            });
        })?;
    }

    // Touch.
    {
        let c = Rc::clone(&controller);
        listeners.add(&container_el, "touchstart", false, move |event: TouchEvent| {
            forward(&c, &event, &Input::touch_start(contacts(&event.touches())));
        })?;
    }
    {
        let c = Rc::clone(&controller);
        listeners.add(&container_el, "touchmove", false, move |event: TouchEvent| {
            forward(&c, &event, &Input::touch_move(contacts(&event.touches())));
        })?;
    }
    {
        let c = Rc::clone(&controller);
        listeners.add(&container_el, "touchend", false, move |event: TouchEvent| {
            forward(&c, &event, &Input::touch_end(contacts(&event.touches())));
        })?;
    }
    {
        let c = Rc::clone(&controller);
        listeners.add(&container_el, "touchcancel", true, move |_: TouchEvent| {
            let _ = c.borrow_mut().handle_input(&Input::TouchCancel);
        })?;
    }

    // Layout changes.
    {
        let c = Rc::clone(&controller);
        listeners.add(&image_el, "load", true, move |_: Event| {
            let _ = c.borrow_mut().relayout();
        })?;
    }
    {
        let c = Rc::clone(&controller);
        listeners.add(&window, "resize", true, move |_: Event| {
            let _ = c.borrow_mut().relayout();
        })?;
    }

    page::bind_anchor_scrolling(document, &window, &config, &mut listeners)?;
    page::bind_equal_heights(document, &window, &config, &mut listeners)?;

    log::debug!("lightbox bound with {} listeners", listeners.entries.len());
    Ok(Loupe {
        controller,
        listeners,
    })
}

/// Entry point: binds the lightbox with configuration read from the first
/// element carrying a `data-loupe` attribute.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let json = document
        .query_selector("[data-loupe]")?
        .and_then(|el| el.get_attribute("data-loupe"))
        .unwrap_or_default();
    let config = WebConfig::from_json(&json)?;

    if let Some(level) = config.level_filter().to_level()
        && console_log::init_with_level(level).is_err()
    {
        web_sys::console::warn_1(&"logger already installed".into());
    }

    bind(&document, config)?.forget();
    log::info!("lightbox ready");
    Ok(())
}
