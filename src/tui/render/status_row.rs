use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let (left, hint) = match app.mode {
        Mode::Edit => (None, "Tab accept  Enter save  Esc cancel"),
        Mode::Navigate => {
            let hint = if app.config.ui.show_key_hints {
                "j/k move  e edit  r reload  ? help  q quit"
            } else {
                ""
            };
            (app.status_message.as_deref(), hint)
        }
    };

    let mut spans: Vec<Span> = Vec::new();
    if let Some(message) = left {
        spans.push(Span::styled(
            format!(" {}", message),
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }

    let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let hint_width = hint.chars().count();
    if !hint.is_empty() && content_width + hint_width + 1 < width {
        let padding = width - content_width - hint_width - 1;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(
            format!("{} ", hint),
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
