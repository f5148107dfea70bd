//! Zone palette and style tokens for the RagBar TUI.
//!
//! # Color Palette
//! - **Red / Amber / Green**: bar segments and their handles
//! - **Empty**: the unclaimed tail of the bar
//! - **Label** variants: one shade darker, for legend text
//! - **Accent**: focus and the dragged handle
//! - **Muted**: hints and secondary text

use ratatui::style::{Color, Modifier, Style};

use ragbar_core::Zone;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub red: Color,
    pub amber: Color,
    pub green: Color,
    pub empty: Color,
    pub red_label: Color,
    pub amber_label: Color,
    pub green_label: Color,
    pub empty_label: Color,
    /// Electric cyan (focus, active drag)
    pub accent: Color,
    /// Neon orange (warnings)
    pub warning: Color,
    /// Steel blue (hints)
    pub muted: Color,
    pub text_primary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::rag()
    }
}

impl Theme {
    pub fn rag() -> Self {
        Self {
            red: Color::Rgb(239, 68, 68),
            amber: Color::Rgb(245, 158, 11),
            green: Color::Rgb(34, 197, 94),
            empty: Color::Rgb(209, 213, 219),

            red_label: Color::Rgb(220, 38, 38),
            amber_label: Color::Rgb(217, 119, 6),
            green_label: Color::Rgb(22, 163, 74),
            empty_label: Color::Rgb(107, 114, 128),

            accent: Color::Rgb(0, 255, 255),
            warning: Color::Rgb(255, 140, 0),
            muted: Color::Rgb(100, 149, 237),
            text_primary: Color::White,
        }
    }

    /// Fill colour of a zone's bar segment (and of the handle closing it).
    pub fn zone_color(&self, zone: Zone) -> Color {
        match zone {
            Zone::Red => self.red,
            Zone::Amber => self.amber,
            Zone::Green => self.green,
            Zone::Empty => self.empty,
        }
    }

    /// Legend text colour of a zone.
    pub fn label_color(&self, zone: Zone) -> Color {
        match zone {
            Zone::Red => self.red_label,
            Zone::Amber => self.amber_label,
            Zone::Green => self.green_label,
            Zone::Empty => self.empty_label,
        }
    }
}

// ── Style helpers ────────────────────────────────────────────────────

pub fn accent() -> Style {
    Style::default().fg(Theme::default().accent)
}

pub fn warning() -> Style {
    Style::default().fg(Theme::default().warning)
}

pub fn muted() -> Style {
    Style::default().fg(Theme::default().muted)
}

pub fn title() -> Style {
    Style::default()
        .fg(Theme::default().text_primary)
        .add_modifier(Modifier::BOLD)
}

pub fn panel_border() -> Style {
    Style::default().fg(Theme::default().accent)
}
