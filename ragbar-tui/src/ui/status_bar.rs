//! Bottom status bar — live values, drag state, last message.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use ragbar_core::Zone;

use crate::app::{AppState, StatusLevel};
use crate::theme::{self, Theme};

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let palette = Theme::default();
    let set = app.thresholds();
    let mut spans: Vec<Span> = Vec::new();

    spans.push(Span::styled(" drag a ▼ handle · q:quit", theme::muted()));
    spans.push(Span::raw(" | "));

    for (zone, letter, value) in [
        (Zone::Red, "R", set.red_end()),
        (Zone::Amber, "A", set.amber_end()),
        (Zone::Green, "G", set.green_end()),
    ] {
        spans.push(Span::styled(
            format!("{letter} {value} "),
            Style::default().fg(palette.zone_color(zone)),
        ));
    }

    if let Some(t) = app.dragging() {
        spans.push(Span::raw("| "));
        spans.push(Span::styled(
            format!("dragging {} ", t.label()),
            theme::accent(),
        ));
    }

    if let Some((msg, level)) = &app.status_message {
        let style = match level {
            StatusLevel::Info => theme::accent(),
            StatusLevel::Warning => theme::warning(),
        };
        spans.push(Span::raw("| "));
        spans.push(Span::styled(msg.as_str(), style));
    }

    let line = Line::from(spans);
    let para = Paragraph::new(line);
    f.render_widget(para, area);
}
