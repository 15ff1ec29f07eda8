use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;
use crate::util::unicode;

/// Maximum number of visible entries in the dropdown
const MAX_VISIBLE: usize = 8;

/// Render the suggestion dropdown floating at the edit cursor
pub fn render_suggestions(frame: &mut Frame, app: &App, content_area: Rect) {
    let suggest = match &app.edit {
        Some(edit) if edit.suggest.visible && !edit.suggest.filtered.is_empty() => &edit.suggest,
        _ => return,
    };
    let Some((anchor_x, anchor_y)) = app.suggest_anchor else {
        return;
    };

    let bg = app.theme.background;
    let count = suggest.filtered.len().min(MAX_VISIBLE);

    // Widest candidate (+ marker and padding) decides the popup width
    let max_width = suggest
        .filtered
        .iter()
        .take(MAX_VISIBLE)
        .map(|s| unicode::display_width(s))
        .max()
        .unwrap_or(10)
        + 5;

    let popup_w = (max_width as u16)
        .min(content_area.width.saturating_sub(2))
        .max(12);
    let popup_h = (count as u16) + 2; // +2 for borders

    // Below the edit row if there is room, above it otherwise
    let term_area = frame.area();
    let y = if anchor_y + 1 + popup_h <= term_area.height {
        anchor_y + 1
    } else {
        anchor_y.saturating_sub(popup_h)
    };
    let x = anchor_x.min(term_area.width.saturating_sub(popup_w));
    let popup_area = Rect::new(x, y, popup_w, popup_h);

    // Scroll window around the highlighted row
    let selected = suggest.selected;
    let scroll_start = match selected {
        Some(i) if i >= MAX_VISIBLE => i - MAX_VISIBLE + 1,
        _ => 0,
    };

    let inner_w = (popup_w as usize).saturating_sub(5);
    let mut lines: Vec<Line> = Vec::new();
    for (i, candidate) in suggest
        .filtered
        .iter()
        .skip(scroll_start)
        .take(MAX_VISIBLE)
        .enumerate()
    {
        let is_selected = selected == Some(scroll_start + i);
        let style = if is_selected {
            Style::default()
                .fg(app.theme.background)
                .bg(app.theme.highlight)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.text).bg(bg)
        };

        let prefix = if is_selected { " \u{25B8} " } else { "   " };
        let label = format!(
            "{:<width$}",
            unicode::truncate_to_width(candidate, inner_w),
            width = inner_w
        );
        lines.push(Line::from(vec![
            Span::styled(prefix, style),
            Span::styled(label, style),
        ]));
    }

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.dim).bg(bg))
        .style(Style::default().bg(bg));
    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, popup_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;
    use crossterm::event::KeyCode;

    fn render_with_dropdown(app: &mut App) -> String {
        render_to_string(TERM_W, TERM_H, |frame, area| {
            crate::tui::render::render(frame, app);
            let _ = area;
        })
    }

    #[test]
    fn dropdown_lists_matching_foods() {
        let mut app = test_app();
        app.cursor = 1;
        app.begin_edit_at_cursor();
        press(&mut app, KeyCode::Char('l'));

        let output = render_with_dropdown(&mut app);
        // "l" matches oatmeal and salad but not tomato soup
        assert!(output.contains("oatmeal"));
        assert!(output.contains("salad"));
        let popup_rows = output.lines().filter(|l| l.contains("tomato soup")).count();
        // only the diary row itself, no dropdown copy
        assert_eq!(popup_rows, 1);
    }

    #[test]
    fn highlighted_row_carries_the_marker() {
        let mut app = test_app();
        app.cursor = 1;
        app.begin_edit_at_cursor();
        press(&mut app, KeyCode::Char('o'));
        press(&mut app, KeyCode::Down);

        let output = render_with_dropdown(&mut app);
        assert!(output.contains("\u{25B8} oatmeal"));
    }

    #[test]
    fn hidden_dropdown_renders_nothing() {
        let mut app = test_app();
        app.cursor = 1;
        app.begin_edit_at_cursor();
        press(&mut app, KeyCode::Esc); // hide the dropdown, keep editing

        let output = render_with_dropdown(&mut app);
        assert!(!output.contains("oatmeal"));
    }
}
