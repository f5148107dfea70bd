//! RagBar TUI - terminal front end for the RAG threshold bar
//!
//! Draws the four-zone bar with ratatui and drives its three handles from
//! crossterm mouse events:
//! - Press on a handle to grab it
//! - Drag anywhere on screen to move it
//! - Release to let go

pub mod app;
pub mod capture;
pub mod cli;
pub mod input;
pub mod layout;
pub mod logging;
pub mod theme;
pub mod ui;

pub use app::AppState;
pub use capture::TerminalCapture;
pub use theme::Theme;

#[cfg(test)]
mod test_helpers;
