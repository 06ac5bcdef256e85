//! Control row — left/right buttons with the dot indicators between them.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::{AppState, Regions};
use crate::theme;

pub fn render(f: &mut Frame, regions: &Regions, app: &AppState) {
    render_button(f, regions.prev_control, "◀");
    render_button(f, regions.next_control, "▶");

    // One cell per dot so the visuals match the recorded hit boxes exactly.
    for (cell, dot) in regions.dot_cells.iter().zip(&app.stage.dots) {
        if cell.width == 0 {
            continue;
        }
        let (symbol, style) = if dot.active {
            ("●", theme::accent())
        } else {
            ("○", theme::muted())
        };
        f.render_widget(Paragraph::new(Span::styled(symbol, style)), *cell);
    }
}

fn render_button(f: &mut Frame, area: Rect, label: &str) {
    let button = Paragraph::new(Line::from(Span::styled(label, theme::control())).centered())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::muted()),
        );
    f.render_widget(button, area);
}
