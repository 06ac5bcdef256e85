//! Slide strip — every slide drawn at its percent offset, clipped to the
//! viewport. The current slide sits at offset 0 and fills the area.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use carousel_core::Slide;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let current = app.controller.current();
    for (index, offset) in app.stage.offsets.iter().enumerate() {
        let Some(rect) = shifted_rect(area, *offset) else {
            continue;
        };
        render_slide(f, rect, &app.deck.slides[index], index == current);
    }
}

/// Shift `area` horizontally by `offset_pct` percent of its width, clipped
/// to the original bounds. `None` when fully off-screen.
fn shifted_rect(area: Rect, offset_pct: i64) -> Option<Rect> {
    let width = area.width as i64;
    let dx = offset_pct * width / 100;
    if dx <= -width || dx >= width {
        return None;
    }
    let left = (area.x as i64 + dx).max(area.x as i64);
    let right = (area.x as i64 + dx + width).min(area.x as i64 + width);
    if right <= left {
        return None;
    }
    Some(Rect::new(
        left as u16,
        area.y,
        (right - left) as u16,
        area.height,
    ))
}

fn render_slide(f: &mut Frame, rect: Rect, slide: &Slide, current: bool) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::slide_border(current))
        .title(Span::styled(
            format!(" {} ", slide.title),
            theme::slide_title(),
        ));
    let inner = block.inner(rect);
    f.render_widget(block, rect);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(slide.body.clone(), theme::text())),
    ];
    if !slide.attribution.is_empty() {
        lines.push(Line::from(""));
        lines.push(
            Line::from(Span::styled(
                format!("~ {}", slide.attribution),
                theme::muted(),
            ))
            .right_aligned(),
        );
    }
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}
