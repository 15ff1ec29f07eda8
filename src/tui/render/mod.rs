pub mod day_view;
pub mod field;
pub mod help_overlay;
pub mod status_row;
pub mod suggestions;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use super::app::App;

/// Main render function — dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: title bar (2 rows) | content | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // title + separator
            Constraint::Min(1),    // day view
            Constraint::Length(1), // status row
        ])
        .split(area);

    render_title_bar(frame, app, chunks[0]);

    // Cleared here, set again by the day view when an edit row is drawn
    app.suggest_anchor = None;

    day_view::render_day_view(frame, app, chunks[1]);

    // Help overlay (rendered on top of everything)
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, frame.area());
    }

    // Suggestion dropdown (rendered on top of content)
    if app.edit.is_some() {
        suggestions::render_suggestions(frame, app, chunks[1]);
    }

    status_row::render_status_row(frame, app, chunks[2]);
}

/// Diary name on the left, the visible date window on the right, separator
/// line below.
fn render_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    let bg = app.theme.background;
    let width = area.width as usize;

    let mut spans = vec![Span::styled(
        format!(" {}", app.config.diary.name),
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )];

    let dates = app.window_dates();
    if let (Some(first), Some(last)) = (dates.first(), dates.last()) {
        let range = format!(
            "{} \u{2013} {} ",
            first.format("%b %-d"),
            last.format("%b %-d")
        );
        let used: usize = spans.iter().map(|s| s.content.chars().count()).sum();
        let range_width = range.chars().count();
        if used + range_width < width {
            spans.push(Span::styled(
                " ".repeat(width - used - range_width),
                Style::default().bg(bg),
            ));
            spans.push(Span::styled(range, Style::default().fg(app.theme.dim).bg(bg)));
        }
    }

    let title = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(title, chunks[0]);

    let separator = Paragraph::new("\u{2500}".repeat(width))
        .style(Style::default().fg(app.theme.dim).bg(bg));
    frame.render_widget(separator, chunks[1]);
}
