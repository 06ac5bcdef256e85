//! Neon-on-dark theme tokens and style helpers.

use ratatui::style::{Color, Modifier, Style};

/// Electric cyan (focus, active dot, current slide border).
pub const ACCENT: Color = Color::Rgb(0, 255, 255);
/// Steel blue (inactive dots, hints, secondary text).
pub const MUTED: Color = Color::Rgb(100, 149, 237);
/// Neon orange (warnings).
pub const WARNING: Color = Color::Rgb(255, 140, 0);
/// Light gray (body text).
pub const TEXT: Color = Color::Rgb(200, 200, 200);

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn warning() -> Style {
    Style::default().fg(WARNING)
}

pub fn text() -> Style {
    Style::default().fg(TEXT)
}

pub fn slide_title() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn slide_border(current: bool) -> Style {
    if current {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(MUTED)
    }
}

pub fn control() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}
