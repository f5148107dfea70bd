//! Input dispatch — keys quit, the left mouse button drives the handles.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use tracing::debug;

use ragbar_core::PointerCapture;

use crate::app::AppState;

pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        _ => {}
    }
}

/// Route a mouse event.
///
/// A left press on a handle starts a drag. While the controller holds
/// capture, drags/moves and button releases are routed to it wherever the
/// pointer is.
pub fn handle_mouse(app: &mut AppState, mouse: MouseEvent) {
    let column = f64::from(mouse.column);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let Some(layout) = app.layout else {
                return;
            };
            let hit = layout
                .rows
                .hit_handle(app.thresholds(), mouse.column, mouse.row);
            if let Some(threshold) = hit {
                app.controller.press(threshold, column);
            } else {
                debug!(column = mouse.column, row = mouse.row, "press missed every handle");
            }
        }
        MouseEventKind::Drag(_) | MouseEventKind::Moved => {
            if app.controller.capture().routes_moves() {
                app.controller.pointer_move(column);
            }
        }
        MouseEventKind::Up(_) => {
            if !app.controller.capture().routes_release() {
                return;
            }
            let dragged = app.dragging();
            app.controller.release();
            if let Some(t) = dragged {
                let value = app.thresholds().get(t);
                app.set_status(format!("{} ≤ {value}%", t.label()));
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{key, mouse, synced_app};
    use ragbar_core::Threshold;

    #[test]
    fn q_and_esc_quit() {
        let mut app = synced_app();
        handle_key(&mut app, key(KeyCode::Char('q')));
        assert!(!app.running);

        let mut app = synced_app();
        handle_key(&mut app, key(KeyCode::Esc));
        assert!(!app.running);
    }

    #[test]
    fn ctrl_c_quits_plain_c_does_not() {
        let mut app = synced_app();
        handle_key(&mut app, key(KeyCode::Char('c')));
        assert!(app.running);
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(!app.running);
    }

    #[test]
    fn arrow_keys_do_not_move_thresholds() {
        let mut app = synced_app();
        handle_key(&mut app, key(KeyCode::Left));
        handle_key(&mut app, key(KeyCode::Right));
        assert_eq!(app.thresholds(), &ragbar_core::ThresholdSet::default());
    }

    #[test]
    fn press_drag_release() {
        let mut app = synced_app();
        // Red handle sits at column 32 on the handle row (y = 2).
        handle_mouse(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), 32, 2));
        assert_eq!(app.dragging(), Some(Threshold::RedEnd));

        // Pointer wanders off the bar; still routed.
        handle_mouse(&mut app, mouse(MouseEventKind::Drag(MouseButton::Left), 12, 9));
        assert_eq!(app.thresholds().red_end(), 10);

        handle_mouse(&mut app, mouse(MouseEventKind::Up(MouseButton::Left), 12, 9));
        assert_eq!(app.dragging(), None);
        assert!(!app.controller.capture().routes_moves());
        assert_eq!(
            app.status_message.as_ref().map(|(m, _)| m.as_str()),
            Some("Red ≤ 10%")
        );
    }

    #[test]
    fn press_off_handle_does_nothing() {
        let mut app = synced_app();
        handle_mouse(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), 45, 3));
        assert_eq!(app.dragging(), None);
        handle_mouse(&mut app, mouse(MouseEventKind::Drag(MouseButton::Left), 50, 3));
        assert_eq!(app.thresholds(), &ragbar_core::ThresholdSet::default());
    }

    #[test]
    fn right_button_does_not_grab() {
        let mut app = synced_app();
        handle_mouse(&mut app, mouse(MouseEventKind::Down(MouseButton::Right), 32, 2));
        assert_eq!(app.dragging(), None);
    }

    #[test]
    fn stray_release_is_ignored() {
        let mut app = synced_app();
        handle_mouse(&mut app, mouse(MouseEventKind::Up(MouseButton::Left), 32, 2));
        assert!(app.status_message.is_none());
    }

    #[test]
    fn press_before_first_frame_is_ignored() {
        let mut app = AppState::new(ragbar_core::ThresholdSet::default());
        handle_mouse(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), 32, 2));
        assert_eq!(app.dragging(), None);
    }
}
