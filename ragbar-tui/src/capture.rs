//! Terminal pointer capture.
//!
//! crossterm reports mouse events for the whole screen once mouse capture
//! is enabled, so "global" listeners reduce to two routing flags: while
//! set, drag and button-up events go to the controller no matter which
//! cell the pointer is over.

use ragbar_core::PointerCapture;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TerminalCapture {
    moves: bool,
    release: bool,
}

impl PointerCapture for TerminalCapture {
    fn subscribe_move(&mut self) {
        self.moves = true;
    }

    fn subscribe_release(&mut self) {
        self.release = true;
    }

    fn unsubscribe_all(&mut self) {
        self.moves = false;
        self.release = false;
    }

    fn routes_moves(&self) -> bool {
        self.moves
    }

    fn routes_release(&self) -> bool {
        self.release
    }
}
