//! Top-level UI layout — slide strip, control row with dots, status bar.

pub mod control_row;
pub mod slide_strip;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;

use crate::app::{AppState, Regions};

/// Draw the entire UI and record the hit regions for mouse dispatch.
pub fn draw(f: &mut Frame, app: &mut AppState) {
    let regions = layout_regions(f.area(), app.stage.dots.len());

    slide_strip::render(f, regions.slide_area, app);
    control_row::render(f, &regions, app);
    status_bar::render(f, regions.status_bar, app);

    app.regions = regions;
}

/// Split the screen and compute every clickable region.
///
/// Kept separate from drawing so hit-testing and rendering share one source
/// of geometry and tests can run without a terminal.
pub fn layout_regions(area: Rect, dot_count: usize) -> Regions {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(area);

    let row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(7),
            Constraint::Min(10),
            Constraint::Length(7),
        ])
        .split(chunks[1]);

    let strip = row[1];
    let width = (dot_count as u16 * 2).min(strip.width);
    let start = strip.x + (strip.width - width) / 2;
    let dot_row = strip.y + strip.height / 2;
    let dot_cells = (0..dot_count)
        .map(|i| {
            let x = start + i as u16 * 2;
            if x + 2 <= strip.x + strip.width {
                Rect::new(x, dot_row, 2, 1)
            } else {
                // Off-screen dot: zero-sized, never hit.
                Rect::new(strip.right(), dot_row, 0, 0)
            }
        })
        .collect();

    Regions {
        slide_area: chunks[0],
        prev_control: row[0],
        next_control: row[2],
        dot_strip: strip,
        dot_cells,
        status_bar: chunks[2],
    }
}
