// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page-shell behavior that ships with the lightbox: smooth anchor scrolling
//! and equal-height cards.

use std::cell::RefCell;
use std::rc::Rc;

use loupe_scroll::smooth::DEFAULT_DURATION_MS;
use loupe_scroll::{AnimationToken, ScrollFrame, ScrollTick, SmoothScroll, equal_height};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, HtmlElement, MouseEvent, Window};

use crate::bind::Listeners;
use crate::dom::set_style;
use crate::style::anchor_margin;
use crate::{LoupeError, WebConfig};

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn max_scroll(window: &Window) -> f64 {
    let scroll_height = window
        .document()
        .and_then(|d| d.document_element())
        .map_or(0.0, |e| f64::from(e.scroll_height()));
    let inner = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (scroll_height - inner).max(0.0)
}

/// Runs the animation named by `token` from frame callbacks until it
/// finishes or is superseded.
fn drive(
    window: &Window,
    scroll: Rc<RefCell<SmoothScroll>>,
    token: AnimationToken,
    target: Element,
) {
    let callback: FrameCallback = Rc::new(RefCell::new(None));
    let next = Rc::clone(&callback);
    let win = window.clone();
    *callback.borrow_mut() = Some(Closure::new(move |now: f64| {
        let frame = ScrollFrame {
            scroll_y: win.scroll_y().unwrap_or(0.0),
            target_top: target.get_bounding_client_rect().top(),
            max_scroll: max_scroll(&win),
        };
        let tick = scroll.borrow_mut().tick(token, now, frame);
        match tick {
            ScrollTick::Continue(y) => {
                win.scroll_to_with_x_and_y(0.0, y);
                if let Some(cb) = next.borrow().as_ref()
                    && let Err(err) = win.request_animation_frame(cb.as_ref().unchecked_ref())
                {
                    log::warn!("smooth scroll stopped: {err:?}");
                }
            }
            ScrollTick::Finished(y) => {
                win.scroll_to_with_x_and_y(0.0, y);
                drop(next.borrow_mut().take());
            }
            ScrollTick::Stale => drop(next.borrow_mut().take()),
        }
    }));

    let requested = callback
        .borrow()
        .as_ref()
        .map(|cb| window.request_animation_frame(cb.as_ref().unchecked_ref()));
    if let Some(Err(err)) = requested {
        log::warn!("smooth scroll not started: {err:?}");
        drop(callback.borrow_mut().take());
    }
}

/// Makes in-page links scroll smoothly to their target.
pub(crate) fn bind_anchor_scrolling(
    document: &Document,
    window: &Window,
    config: &WebConfig,
    listeners: &mut Listeners,
) -> Result<(), LoupeError> {
    if config.anchor_links.is_empty() {
        return Ok(());
    }
    let scroll = Rc::new(RefCell::new(SmoothScroll::new()));
    let links = document.query_selector_all(&config.anchor_links)?;
    for link in (0..links.length()).filter_map(|i| links.get(i)) {
        let Ok(link) = link.dyn_into::<Element>() else {
            continue;
        };
        let el = link.clone();
        let doc = document.clone();
        let win = window.clone();
        let scroll = Rc::clone(&scroll);
        let breakpoint = config.mobile_breakpoint;
        let nav = config.nav_container.clone();
        listeners.add(&link, "click", false, move |event: MouseEvent| {
            let Some(href) = el.get_attribute("href") else {
                return;
            };
            // A bare "#" is not a valid selector and matches nothing.
            let Ok(Some(target)) = doc.query_selector(&href) else {
                return;
            };
            event.prevent_default();
            let in_nav = !nav.is_empty() && matches!(el.closest(&nav), Ok(Some(_)));
            let width = win
                .inner_width()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(0.0);
            let token = scroll.borrow_mut().start(
                win.scroll_y().unwrap_or(0.0),
                DEFAULT_DURATION_MS,
                anchor_margin(in_nav, width, breakpoint),
            );
            log::debug!("scrolling to {href}");
            drive(&win, Rc::clone(&scroll), token, target);
        })?;
    }
    Ok(())
}

fn equalize(document: &Document, selector: &str) {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return;
    };
    let cards: Vec<HtmlElement> = (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|n| n.dyn_into::<HtmlElement>().ok())
        .collect();
    if cards.is_empty() {
        return;
    }
    for card in &cards {
        set_style(card, "height", "auto");
    }
    let height = equal_height(cards.iter().map(|c| f64::from(c.offset_height())));
    let value = format!("{height}px");
    for card in &cards {
        set_style(card, "height", &value);
    }
}

/// Keeps matching cards at a common height across loads and resizes.
pub(crate) fn bind_equal_heights(
    document: &Document,
    window: &Window,
    config: &WebConfig,
    listeners: &mut Listeners,
) -> Result<(), LoupeError> {
    if config.equal_height_cards.is_empty() {
        return Ok(());
    }
    equalize(document, &config.equal_height_cards);
    for kind in ["load", "resize"] {
        let doc = document.clone();
        let selector = config.equal_height_cards.clone();
        listeners.add(window, kind, true, move |_: Event| {
            equalize(&doc, &selector);
        })?;
    }
    Ok(())
}
