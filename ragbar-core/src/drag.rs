//! Drag controller — pointer events in, threshold updates out.
//!
//! State machine:
//! - **Idle**: `session` is `None`
//! - **Dragging**: `session` holds the threshold being moved
//!
//! `press` enters Dragging and begins capture, `pointer_move` updates the
//! dragged threshold, `release` returns to Idle and ends capture. Every
//! capture that `press` begins is ended by exactly one `release`.

use tracing::{debug, trace};

use crate::capture::PointerCapture;
use crate::thresholds::{Threshold, ThresholdSet};

/// On-screen geometry of the bar, in pointer coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackSurface {
    pub left: f64,
    pub width: f64,
}

impl TrackSurface {
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }

    /// A surface that cannot map coordinates (zero, negative or
    /// non-finite width) is treated as unmeasured.
    pub fn is_measured(&self) -> bool {
        self.left.is_finite() && self.width.is_finite() && self.width > 0.0
    }

    /// Raw percentage along the bar for a pointer x coordinate. Not clamped.
    pub fn percent_at(&self, client_x: f64) -> f64 {
        (client_x - self.left) / self.width * 100.0
    }
}

/// The threshold currently held by the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    pub threshold: Threshold,
}

/// Owns the threshold set and drives it from pointer events.
#[derive(Debug)]
pub struct DragController<C: PointerCapture> {
    thresholds: ThresholdSet,
    surface: Option<TrackSurface>,
    session: Option<DragSession>,
    capture: C,
}

impl<C: PointerCapture> DragController<C> {
    pub fn new(thresholds: ThresholdSet, capture: C) -> Self {
        Self {
            thresholds,
            surface: None,
            session: None,
            capture,
        }
    }

    pub fn thresholds(&self) -> &ThresholdSet {
        &self.thresholds
    }

    pub fn session(&self) -> Option<DragSession> {
        self.session
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn surface(&self) -> Option<TrackSurface> {
        self.surface
    }

    pub fn capture(&self) -> &C {
        &self.capture
    }

    /// Supply the bar geometry measured by the renderer. `None` means the
    /// bar is not laid out.
    pub fn set_surface(&mut self, surface: Option<TrackSurface>) {
        self.surface = surface.filter(TrackSurface::is_measured);
    }

    /// Begin dragging `threshold` and snap it to the press position.
    ///
    /// Ignored while another drag is active, and when no surface has been
    /// measured.
    pub fn press(&mut self, threshold: Threshold, client_x: f64) {
        if let Some(active) = self.session {
            debug!(
                pressed = ?threshold,
                active = ?active.threshold,
                "press ignored: drag already active"
            );
            return;
        }
        if self.surface.is_none() {
            debug!(pressed = ?threshold, "press ignored: track surface not measured");
            return;
        }

        self.session = Some(DragSession { threshold });
        self.update(threshold, client_x);
        self.begin_capture();
        debug!(threshold = ?threshold, value = self.thresholds.get(threshold), "drag started");
    }

    /// Move the dragged threshold to follow the pointer. No-op when Idle.
    pub fn pointer_move(&mut self, client_x: f64) {
        let Some(session) = self.session else {
            return;
        };
        self.update(session.threshold, client_x);
    }

    /// End the drag. No-op when Idle.
    pub fn release(&mut self) {
        let Some(session) = self.session.take() else {
            return;
        };
        self.end_capture();
        debug!(
            threshold = ?session.threshold,
            value = self.thresholds.get(session.threshold),
            "drag released"
        );
    }

    fn update(&mut self, threshold: Threshold, client_x: f64) {
        let Some(surface) = self.surface else {
            return;
        };
        let raw = surface.percent_at(client_x);
        let value = self.thresholds.apply(threshold, raw);
        trace!(threshold = ?threshold, client_x, raw, value, "threshold updated");
    }

    fn begin_capture(&mut self) {
        self.capture.subscribe_move();
        self.capture.subscribe_release();
    }

    fn end_capture(&mut self) {
        self.capture.unsubscribe_all();
    }
}
