//! Bottom status bar — key hints plus the latest status message.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{AppState, StatusLevel};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut spans: Vec<Span> = Vec::new();

    spans.push(Span::styled(
        " ←/h prev  →/l next  click a dot to jump  q quit",
        theme::muted(),
    ));
    spans.push(Span::raw(" | "));

    match &app.status_message {
        Some((msg, level)) => {
            let style = match level {
                StatusLevel::Info => theme::accent(),
                StatusLevel::Warning => theme::warning(),
            };
            spans.push(Span::styled(msg.as_str(), style));
        }
        None => {
            spans.push(Span::styled(
                format!(
                    "Slide {}/{}",
                    app.controller.current() + 1,
                    app.controller.slide_count()
                ),
                theme::accent(),
            ));
        }
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
