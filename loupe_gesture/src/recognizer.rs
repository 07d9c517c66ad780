// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;
use loupe_view::{ImageGeometry, ViewerConfig, ViewportState};

use crate::drag::DragSession;
use crate::input::{Input, is_finite_point};
use crate::pinch::{PinchSession, contact_distance};

/// Which gesture currently owns the viewport.
///
/// Wheel and double-click zooms are instantaneous and never change the phase.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum GesturePhase {
    /// No gesture in progress.
    #[default]
    Idle,
    /// One pointer or finger is panning the image.
    Dragging(DragSession),
    /// Two fingers are scaling the image.
    Pinching(PinchSession),
}

impl GesturePhase {
    /// Short label for logging.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Dragging(_) => "dragging",
            Self::Pinching(_) => "pinching",
        }
    }
}

/// Result of feeding one [`Input`] to a [`GestureRecognizer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[must_use]
pub struct Response {
    /// The event was meaningful to the viewer; hosts should suppress the
    /// platform default (page scroll, text selection, native zoom).
    pub handled: bool,
    /// The viewport state changed and needs to be rendered again.
    pub changed: bool,
}

/// Single state machine consuming mouse, wheel, and touch input.
///
/// The recognizer owns the gesture sessions; the [`ViewportState`] it drives
/// is passed in on every call together with freshly measured geometry, so
/// clamping always sees the current layout.
#[derive(Clone, Debug, Default)]
pub struct GestureRecognizer {
    config: ViewerConfig,
    phase: GesturePhase,
}

impl GestureRecognizer {
    /// Creates an idle recognizer.
    #[must_use]
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            config: config.normalized(),
            phase: GesturePhase::Idle,
        }
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> &GesturePhase {
        &self.phase
    }

    /// Abandons any live gesture without touching the transform.
    pub fn cancel(&mut self, view: &mut ViewportState) {
        self.transition(GesturePhase::Idle);
        view.set_dragging(false);
    }

    /// Feeds one input event through the state machine.
    pub fn handle(
        &mut self,
        view: &mut ViewportState,
        input: &Input,
        geometry: &ImageGeometry,
    ) -> Response {
        let before = *view;
        let handled = match input {
            Input::PointerDown { position } => self.begin_drag(view, *position),
            Input::PointerMove { position } => self.drag_to(view, *position, geometry),
            Input::PointerUp | Input::PointerCancel => self.end_drag(view),
            Input::TouchStart { contacts } => match contacts.as_slice() {
                [] => false,
                [only] => self.begin_drag(view, *only),
                _ => self.begin_pinch(view, contacts),
            },
            Input::TouchMove { contacts } => self.touch_move(view, contacts, geometry),
            Input::TouchEnd { contacts } => self.touch_end(view, contacts.len()),
            Input::TouchCancel => {
                let live = self.phase != GesturePhase::Idle;
                self.cancel(view);
                live
            }
            Input::Wheel { position, delta_y } => self.wheel(view, *position, *delta_y, geometry),
            Input::DoubleClick { position } => self.double_click(view, *position, geometry),
            Input::Resize => {
                view.reclamp(geometry);
                false
            }
        };
        let changed = *view != before;
        if changed {
            log::trace!(
                "{}: scale={} translate=({}, {})",
                input.kind(),
                view.scale(),
                view.translate().x,
                view.translate().y
            );
        }
        Response { handled, changed }
    }

    fn transition(&mut self, next: GesturePhase) {
        if self.phase.name() != next.name() {
            log::debug!("gesture {} -> {}", self.phase.name(), next.name());
        }
        self.phase = next;
    }

    fn begin_drag(&mut self, view: &mut ViewportState, pointer: Point) -> bool {
        if !is_finite_point(pointer) || !view.is_zoomed(&self.config) {
            return false;
        }
        match self.phase {
            GesturePhase::Pinching(_) => false,
            GesturePhase::Idle | GesturePhase::Dragging(_) => {
                self.transition(GesturePhase::Dragging(DragSession::start(
                    pointer,
                    view.translate(),
                )));
                view.set_dragging(true);
                true
            }
        }
    }

    fn drag_to(
        &mut self,
        view: &mut ViewportState,
        pointer: Point,
        geometry: &ImageGeometry,
    ) -> bool {
        let GesturePhase::Dragging(session) = &mut self.phase else {
            return false;
        };
        if !is_finite_point(pointer) {
            return true;
        }
        let translate = session.translation_at(pointer);
        view.set_translation(translate, geometry);
        true
    }

    fn end_drag(&mut self, view: &mut ViewportState) -> bool {
        if !matches!(self.phase, GesturePhase::Dragging(_)) {
            return false;
        }
        self.cancel(view);
        true
    }

    fn begin_pinch(&mut self, view: &mut ViewportState, contacts: &[Point]) -> bool {
        let Some(distance) = contact_distance(contacts) else {
            return false;
        };
        // A second finger discards any single-finger drag without applying it.
        self.transition(GesturePhase::Pinching(PinchSession::start(
            distance,
            view.scale(),
        )));
        view.set_dragging(false);
        true
    }

    fn touch_move(
        &mut self,
        view: &mut ViewportState,
        contacts: &[Point],
        geometry: &ImageGeometry,
    ) -> bool {
        match self.phase {
            GesturePhase::Pinching(_) if contacts.len() >= 2 => {
                self.pinch_to(view, contacts, geometry)
            }
            GesturePhase::Pinching(_) => {
                self.transition(GesturePhase::Idle);
                true
            }
            GesturePhase::Dragging(_) => match contacts {
                [] => false,
                [only] => self.drag_to(view, *only, geometry),
                // A second contact that showed up without its own touch-start.
                _ => self.begin_pinch(view, contacts),
            },
            GesturePhase::Idle => false,
        }
    }

    fn pinch_to(
        &mut self,
        view: &mut ViewportState,
        contacts: &[Point],
        geometry: &ImageGeometry,
    ) -> bool {
        let GesturePhase::Pinching(session) = &mut self.phase else {
            return false;
        };
        // Scale only; the image is not re-centered on the fingers.
        if let Some(scale) = contact_distance(contacts).and_then(|d| session.scale_at(d)) {
            view.set_scale(scale, geometry, &self.config);
        }
        true
    }

    fn touch_end(&mut self, view: &mut ViewportState, remaining: usize) -> bool {
        match self.phase {
            GesturePhase::Pinching(_) if remaining < 2 => {
                self.transition(GesturePhase::Idle);
                true
            }
            GesturePhase::Dragging(_) if remaining == 0 => self.end_drag(view),
            _ => false,
        }
    }

    fn wheel(
        &mut self,
        view: &mut ViewportState,
        pointer: Point,
        delta_y: f64,
        geometry: &ImageGeometry,
    ) -> bool {
        if !is_finite_point(pointer) || !delta_y.is_finite() {
            return true;
        }
        let target = view.scale() - delta_y * self.config.wheel_sensitivity;
        view.zoom_about(pointer, target, geometry, &self.config);
        self.rebase_sessions(view);
        true
    }

    fn double_click(
        &mut self,
        view: &mut ViewportState,
        pointer: Point,
        geometry: &ImageGeometry,
    ) -> bool {
        if !is_finite_point(pointer) {
            return true;
        }
        if view.is_zoomed(&self.config) {
            // Always a full reset, never a toggle back to the previous zoom.
            view.set_scale(self.config.min_scale, geometry, &self.config);
        } else {
            view.zoom_about(
                pointer,
                self.config.double_click_scale,
                geometry,
                &self.config,
            );
        }
        self.rebase_sessions(view);
        true
    }

    /// Keeps live sessions consistent with a transform changed outside them.
    ///
    /// A drag cannot outlive the zoom: at the minimum scale it ends, so the
    /// translation stays pinned to zero.
    fn rebase_sessions(&mut self, view: &mut ViewportState) {
        if matches!(self.phase, GesturePhase::Dragging(_)) && !view.is_zoomed(&self.config) {
            self.cancel(view);
            return;
        }
        match &mut self.phase {
            GesturePhase::Idle => {}
            GesturePhase::Dragging(session) => session.reanchor(view.translate()),
            GesturePhase::Pinching(session) => session.rebase(view.scale()),
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Size, Vec2};
    use loupe_view::{ImageGeometry, ViewerConfig, ViewportState};

    use super::{GesturePhase, GestureRecognizer};
    use crate::Input;

    fn geometry() -> ImageGeometry {
        ImageGeometry::new(Rect::new(0.0, 0.0, 800.0, 600.0), Size::new(800.0, 600.0))
    }

    fn zoomed(scale: f64, translate: Vec2) -> ViewportState {
        let mut view = ViewportState::new();
        view.set_scale(scale, &geometry(), &ViewerConfig::default());
        view.set_translation(translate, &geometry());
        view
    }

    #[test]
    fn pointer_down_at_unit_scale_stays_idle() {
        let mut rec = GestureRecognizer::default();
        let mut view = ViewportState::new();
        let resp = rec.handle(
            &mut view,
            &Input::PointerDown {
                position: Point::new(10.0, 10.0),
            },
            &geometry(),
        );
        assert!(!resp.handled);
        assert_eq!(*rec.phase(), GesturePhase::Idle);
        assert!(!view.is_dragging());
    }

    #[test]
    fn pointer_up_ends_drag() {
        let mut rec = GestureRecognizer::default();
        let mut view = zoomed(2.0, Vec2::ZERO);
        let geo = geometry();
        let _ = rec.handle(
            &mut view,
            &Input::PointerDown {
                position: Point::new(1.0, 1.0),
            },
            &geo,
        );
        assert!(view.is_dragging());

        let resp = rec.handle(&mut view, &Input::PointerUp, &geo);
        assert!(resp.handled && resp.changed);
        assert_eq!(*rec.phase(), GesturePhase::Idle);
        assert!(!view.is_dragging());
    }

    #[test]
    fn pointer_down_is_ignored_while_pinching() {
        let mut rec = GestureRecognizer::default();
        let mut view = zoomed(2.0, Vec2::ZERO);
        let geo = geometry();
        let _ = rec.handle(
            &mut view,
            &Input::touch_start([Point::new(0.0, 0.0), Point::new(100.0, 0.0)]),
            &geo,
        );
        let resp = rec.handle(
            &mut view,
            &Input::PointerDown {
                position: Point::new(5.0, 5.0),
            },
            &geo,
        );
        assert!(!resp.handled);
        assert!(matches!(rec.phase(), GesturePhase::Pinching(_)));
    }

    #[test]
    fn resize_reclamps_without_changing_phase() {
        let mut rec = GestureRecognizer::default();
        let mut view = zoomed(2.0, Vec2::new(400.0, 300.0));
        let _ = rec.handle(
            &mut view,
            &Input::PointerDown {
                position: Point::new(1.0, 1.0),
            },
            &geometry(),
        );

        // Container grew: at 2x the 800x600 image now only overflows by 200x150.
        let wider = ImageGeometry::new(Rect::new(0.0, 0.0, 1200.0, 900.0), Size::new(800.0, 600.0));
        let resp = rec.handle(&mut view, &Input::Resize, &wider);
        assert!(resp.changed);
        assert_eq!(view.translate(), Vec2::new(200.0, 150.0));
        assert!(matches!(rec.phase(), GesturePhase::Dragging(_)));
    }

    #[test]
    fn non_finite_wheel_delta_changes_nothing() {
        let mut rec = GestureRecognizer::default();
        let mut view = zoomed(2.0, Vec2::ZERO);
        let resp = rec.handle(
            &mut view,
            &Input::Wheel {
                position: Point::new(10.0, 10.0),
                delta_y: f64::NAN,
            },
            &geometry(),
        );
        assert!(resp.handled);
        assert!(!resp.changed);
    }

    #[test]
    fn config_is_normalized() {
        let config = ViewerConfig {
            min_scale: 5.0,
            max_scale: 2.0,
            ..ViewerConfig::default()
        };
        let rec = GestureRecognizer::new(config);
        assert_eq!(rec.config().min_scale, 2.0);
        assert_eq!(rec.config().max_scale, 5.0);
    }
}
