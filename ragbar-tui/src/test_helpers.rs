//! Test helpers for building app state and input events

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use ragbar_core::ThresholdSet;

use crate::app::AppState;

/// Frame size that gives a 101-column bar at x = 2 (one column per
/// percent), handle row y = 2, bar row y = 3.
pub const FRAME: Rect = Rect {
    x: 0,
    y: 0,
    width: 105,
    height: 12,
};

pub fn synced_app() -> AppState {
    let mut app = AppState::new(ThresholdSet::default());
    app.sync_layout(FRAME);
    app
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}
