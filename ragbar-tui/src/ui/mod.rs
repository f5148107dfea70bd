//! Top-level UI layout — bordered bar panel with status bar.

pub mod status_bar;
pub mod widgets;

use ratatui::Frame;

use crate::app::AppState;
use crate::layout::{panel_block, ScreenLayout};
use crate::theme;
use widgets::ThresholdBar;

/// Draw the entire UI.
///
/// Uses the geometry from [`AppState::sync_layout`] when present so that
/// what is drawn is what gets hit-tested.
pub fn draw(f: &mut Frame, app: &AppState) {
    let layout = app
        .layout
        .unwrap_or_else(|| ScreenLayout::compute(f.area()));

    let block = panel_block()
        .border_style(theme::panel_border())
        .title(" RagBar ")
        .title_style(theme::title());
    let inner = block.inner(layout.panel);
    f.render_widget(block, layout.panel);

    f.render_widget(
        ThresholdBar::new(app.thresholds()).active(app.dragging()),
        inner,
    );

    status_bar::render(f, layout.status, app);
}
