//! Four-zone threshold bar with draggable handles.
//!
//! Layout (see [`BarRows`]):
//! ```text
//! RAG Thresholds                                  4-stage (R/A/G/Empty)
//!                ▼              ▼            ▼
//! ████████████████████████████████████████████░░░░░░░░
//!
//! Red ≤ 30%        Amber ≤ 60%        Green ≤ 85%        Empty > 85%
//! ```

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Paragraph, Widget};

use ragbar_core::zones::{self, Zone, CAPTION, TITLE};
use ragbar_core::{Threshold, ThresholdSet};

use crate::layout::BarRows;
use crate::theme::{self, Theme};

pub const HANDLE_SYMBOL: &str = "▼";
pub const FILL_SYMBOL: &str = "█";
pub const EMPTY_SYMBOL: &str = "░";

pub struct ThresholdBar<'a> {
    thresholds: &'a ThresholdSet,
    active: Option<Threshold>,
    theme: Theme,
}

impl<'a> ThresholdBar<'a> {
    pub fn new(thresholds: &'a ThresholdSet) -> Self {
        Self {
            thresholds,
            active: None,
            theme: Theme::default(),
        }
    }

    /// Highlight the handle being dragged.
    pub fn active(mut self, active: Option<Threshold>) -> Self {
        self.active = active;
        self
    }

    fn render_header(&self, area: Rect, buf: &mut Buffer) {
        let caption_width = CAPTION.chars().count() as u16;
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(caption_width)])
            .split(area);

        Paragraph::new(Span::styled(TITLE, theme::title())).render(cells[0], buf);
        Paragraph::new(Span::styled(CAPTION, theme::muted()))
            .alignment(Alignment::Right)
            .render(cells[1], buf);
    }

    fn render_track(&self, rows: &BarRows, buf: &mut Buffer) {
        let bar = rows.bar;
        for column in bar.left()..bar.right() {
            let zone = zones::zone_at(self.thresholds, rows.percent_for(column));
            let symbol = if zone == Zone::Empty {
                EMPTY_SYMBOL
            } else {
                FILL_SYMBOL
            };
            buf[(column, bar.y)]
                .set_symbol(symbol)
                .set_style(Style::default().fg(self.theme.zone_color(zone)));
        }
    }

    fn render_handles(&self, rows: &BarRows, buf: &mut Buffer) {
        let mut handles: Vec<(Threshold, u8)> = Threshold::ALL
            .into_iter()
            .zip(zones::handle_positions(self.thresholds))
            .collect();
        // Drawn last is on top. Pinned handles go underneath, as in hit testing.
        handles.sort_by_key(|&(t, _)| (self.thresholds.can_move(t), t.index()));

        for (t, position) in handles {
            let column = rows.column_for(f64::from(position));
            let mut style = Style::default().fg(self.theme.zone_color(Zone::closed_by(t)));
            if self.active == Some(t) {
                style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
            }
            buf[(column, rows.handles.y)]
                .set_symbol(HANDLE_SYMBOL)
                .set_style(style);
        }
    }

    fn render_labels(&self, area: Rect, buf: &mut Buffer) {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(area);
        let alignments = [
            Alignment::Left,
            Alignment::Center,
            Alignment::Center,
            Alignment::Right,
        ];

        let labels = zones::labels(self.thresholds);
        for (i, (zone, text)) in Zone::ALL.into_iter().zip(labels).enumerate() {
            let style = Style::default()
                .fg(self.theme.label_color(zone))
                .add_modifier(Modifier::BOLD);
            Paragraph::new(Span::styled(text, style))
                .alignment(alignments[i])
                .render(cells[i], buf);
        }
    }
}

impl Widget for ThresholdBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = BarRows::split(area);
        if rows.header.height > 0 {
            self.render_header(rows.header, buf);
        }
        if rows.bar.height == 0 || rows.bar.width == 0 {
            return;
        }
        self.render_track(&rows, buf);
        if rows.handles.height > 0 {
            self.render_handles(&rows, buf);
        }
        if rows.labels.height > 0 {
            self.render_labels(rows.labels, buf);
        }
    }
}
