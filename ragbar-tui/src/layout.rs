//! Screen geometry shared by rendering and mouse hit testing.
//!
//! Both sides split the frame through the same functions, so a handle is
//! hit exactly where it was drawn.

use std::cmp::Reverse;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Borders};

use ragbar_core::{Threshold, ThresholdSet, TrackSurface};

/// How many columns either side of a handle still grab it.
pub const HANDLE_REACH: u16 = 1;

/// Rows of the bar widget, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarRows {
    pub header: Rect,
    pub handles: Rect,
    pub bar: Rect,
    pub labels: Rect,
}

impl BarRows {
    pub fn split(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(1)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(area);

        Self {
            header: rows[0],
            handles: rows[1],
            bar: rows[2],
            labels: rows[4],
        }
    }

    /// Pointer geometry of the bar. The first column is 0% and the last is
    /// 100%, so a bar needs at least two columns to be measurable.
    pub fn surface(&self) -> Option<TrackSurface> {
        if self.bar.width <= 1 || self.bar.height == 0 {
            return None;
        }
        Some(TrackSurface::new(
            f64::from(self.bar.x),
            f64::from(self.bar.width - 1),
        ))
    }

    /// Column a percentage is drawn at.
    pub fn column_for(&self, percent: f64) -> u16 {
        let span = self.bar.width.saturating_sub(1);
        let offset = (percent.clamp(0.0, 100.0) * f64::from(span) / 100.0).round() as u16;
        self.bar.x + offset.min(span)
    }

    /// Percentage a bar column stands for.
    pub fn percent_for(&self, column: u16) -> f64 {
        match self.surface() {
            Some(surface) => surface.percent_at(f64::from(column)),
            None => 0.0,
        }
    }

    /// The handle under (`column`, `row`), if any.
    ///
    /// Handles can be grabbed on the handle row or the bar row within
    /// [`HANDLE_REACH`] columns. When several are in reach the nearest wins.
    /// On a tie a handle with room to move beats one pinned at its limit,
    /// then the higher threshold wins, since it is drawn on top.
    pub fn hit_handle(&self, set: &ThresholdSet, column: u16, row: u16) -> Option<Threshold> {
        let on_row = [self.handles, self.bar]
            .iter()
            .any(|r| r.height > 0 && row >= r.y && row < r.bottom());
        if !on_row || self.surface().is_none() {
            return None;
        }

        // Lower keys win: nearest first, then movable, then topmost.
        Threshold::ALL
            .into_iter()
            .filter_map(|t| {
                let distance = self.column_for(f64::from(set.get(t))).abs_diff(column);
                (distance <= HANDLE_REACH).then_some((t, distance))
            })
            .min_by_key(|&(t, distance)| (distance, !set.can_move(t), Reverse(t.index())))
            .map(|(t, _)| t)
    }
}

/// Full-frame layout: bordered panel, bar rows inside it, status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub panel: Rect,
    pub rows: BarRows,
    pub status: Rect,
}

impl ScreenLayout {
    pub fn compute(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(area);

        let panel = chunks[0];
        let inner = panel_block().inner(panel);

        Self {
            panel,
            rows: BarRows::split(inner),
            status: chunks[1],
        }
    }
}

/// Border drawn around the bar; layout uses it to find the inner area.
pub fn panel_block() -> Block<'static> {
    Block::default().borders(Borders::ALL)
}
