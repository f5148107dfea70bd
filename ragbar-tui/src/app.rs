//! Application state — single-owner, main-thread only.
//!
//! The drag controller is the only writer of the thresholds; the renderer
//! reads them and feeds the measured bar geometry back each frame.

use ratatui::layout::Rect;

use ragbar_core::{DragController, Threshold, ThresholdSet};

use crate::capture::TerminalCapture;
use crate::layout::ScreenLayout;

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
}

const TOO_NARROW: &str = "Terminal too narrow to draw the bar";

pub struct AppState {
    pub controller: DragController<TerminalCapture>,
    /// Geometry of the last drawn frame; `None` before the first draw.
    pub layout: Option<ScreenLayout>,
    pub running: bool,
    pub status_message: Option<(String, StatusLevel)>,
}

impl AppState {
    pub fn new(thresholds: ThresholdSet) -> Self {
        Self {
            controller: DragController::new(thresholds, TerminalCapture::default()),
            layout: None,
            running: true,
            status_message: None,
        }
    }

    pub fn thresholds(&self) -> &ThresholdSet {
        self.controller.thresholds()
    }

    pub fn dragging(&self) -> Option<Threshold> {
        self.controller.session().map(|s| s.threshold)
    }

    /// Recompute geometry for a frame of `area` and hand the bar's surface
    /// to the controller.
    pub fn sync_layout(&mut self, area: Rect) {
        let layout = ScreenLayout::compute(area);
        let surface = layout.rows.surface();
        self.controller.set_surface(surface);
        self.layout = Some(layout);

        if surface.is_none() {
            self.set_warning(TOO_NARROW);
        } else if matches!(&self.status_message, Some((msg, _)) if msg == TOO_NARROW) {
            self.status_message = None;
        }
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }

    pub fn quit(&mut self) {
        self.running = false;
    }
}
