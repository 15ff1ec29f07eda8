use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

use super::field;

/// Render the visible window: a heading per day with its meal rows, the
/// cursor row marked, and the cursor entry swapped for an inline edit row
/// while editing.
pub fn render_day_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;

    if app.visible_rows().is_empty() {
        let empty = Paragraph::new(" No meals configured")
            .style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    let mut lines: Vec<Line> = Vec::new();
    let mut cursor_line = 0usize;
    let mut edit_col: Option<u16> = None;
    let mut row_idx = 0usize;

    for date in app.window_dates() {
        let Some(day) = app.store.diary().day(date) else {
            continue;
        };

        if !lines.is_empty() {
            lines.push(Line::from(""));
        }

        let heading_color = if date == app.today {
            app.theme.highlight
        } else {
            app.theme.green
        };
        lines.push(Line::from(Span::styled(
            format!(" {}", date.format("%a %Y-%m-%d")),
            Style::default()
                .fg(heading_color)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        )));

        for entry in &day.entries {
            let is_cursor = row_idx == app.cursor;
            if is_cursor {
                cursor_line = lines.len();
            }
            match (&app.edit, is_cursor) {
                (Some(edit), true) => {
                    let (spans, col) =
                        field::edit_spans(&entry.key, edit.field.draft(), edit.cursor, &app.theme);
                    edit_col = Some(col);
                    lines.push(Line::from(spans));
                }
                _ => {
                    lines.push(Line::from(field::display_spans(
                        entry,
                        is_cursor,
                        &app.theme,
                    )));
                }
            }
            row_idx += 1;
        }
    }

    // Keep the cursor row on screen
    let height = area.height as usize;
    if cursor_line < app.scroll_offset {
        app.scroll_offset = cursor_line;
    } else if height > 0 && cursor_line >= app.scroll_offset + height {
        app.scroll_offset = cursor_line + 1 - height;
    }
    let scroll = app.scroll_offset;

    // Anchor the suggestion dropdown at the edit cursor cell
    if let Some(col) = edit_col
        && cursor_line >= scroll
        && cursor_line < scroll + height
    {
        let x = area.x + col.min(area.width.saturating_sub(1));
        let y = area.y + (cursor_line - scroll) as u16;
        app.suggest_anchor = Some((x, y));
    }

    let visible: Vec<Line> = lines.into_iter().skip(scroll).take(height).collect();
    let paragraph = Paragraph::new(visible).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn shows_day_headings_and_rows() {
        let mut app = test_app();
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_day_view(frame, &mut app, area);
        });

        assert!(output.contains("Sun 2026-08-23"));
        assert!(output.contains("Tue 2026-08-25"));
        assert!(output.contains("Lunch: tomato soup"));
        assert!(output.contains("Dinner: Empty"));
    }

    #[test]
    fn cursor_row_is_marked() {
        let mut app = test_app();
        app.cursor = 1;
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_day_view(frame, &mut app, area);
        });

        assert!(output.contains(" \u{25B8} Dinner: Empty"));
        assert!(output.contains("   Lunch: tomato soup"));
    }

    #[test]
    fn editing_swaps_in_the_edit_row_and_sets_anchor() {
        let mut app = test_app();
        app.cursor = 0;
        app.begin_edit_at_cursor();
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_day_view(frame, &mut app, area);
        });

        // Draft with the end-of-line cursor bar, not the stored value
        assert!(output.contains(" \u{25B8} Lunch: tomato soup\u{258C}"));
        let (x, y) = app.suggest_anchor.unwrap();
        // " ▸ Lunch: " is 10 cells, "tomato soup" 11 more
        assert_eq!((x, y), (21, 1));
    }

    #[test]
    fn scroll_follows_the_cursor() {
        let mut app = test_app();
        app.cursor = app.visible_rows().len() - 1;
        // 3 days render as 11 lines; a 5-row viewport must scroll
        let output = render_to_string(TERM_W, 5, |frame, area| {
            render_day_view(frame, &mut app, area);
        });

        assert!(app.scroll_offset > 0);
        assert!(output.contains(" \u{25B8} Dinner: Empty"));
        assert!(!output.contains("2026-08-23"));
    }
}
