use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

/// Render the help overlay (toggled with ?)
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let overlay_area = centered_rect(60, 80, area);

    // Clear the area behind the overlay
    frame.render_widget(Clear, overlay_area);

    let bg = app.theme.background;
    let key_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(app.theme.text).bg(bg);
    let header_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(" Key Bindings", header_style)));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Navigation", header_style)));
    add_binding(
        &mut lines,
        " \u{2191}\u{2193}/jk",
        "Move between meals",
        key_style,
        desc_style,
    );
    add_binding(
        &mut lines,
        " g/G",
        "Jump to first/last meal",
        key_style,
        desc_style,
    );
    add_binding(
        &mut lines,
        " Enter/e",
        "Edit the meal under the cursor",
        key_style,
        desc_style,
    );
    add_binding(&mut lines, " r", "Reload from disk", key_style, desc_style);
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Editing", header_style)));
    add_binding(
        &mut lines,
        " \u{2191}\u{2193}",
        "Move the suggestion highlight",
        key_style,
        desc_style,
    );
    add_binding(
        &mut lines,
        " Tab",
        "Take the suggestion, keep editing",
        key_style,
        desc_style,
    );
    add_binding(
        &mut lines,
        " Enter",
        "Save (the highlighted suggestion, or the draft)",
        key_style,
        desc_style,
    );
    add_binding(
        &mut lines,
        " Esc",
        "Close suggestions, then cancel",
        key_style,
        desc_style,
    );
    add_binding(
        &mut lines,
        " Ctrl+U/W",
        "Delete to start / word left",
        key_style,
        desc_style,
    );
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Global", header_style)));
    add_binding(&mut lines, " ?", "Toggle this help", key_style, desc_style);
    add_binding(&mut lines, " q", "Quit", key_style, desc_style);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.dim).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));

    frame.render_widget(paragraph, overlay_area);
}

fn add_binding<'a>(
    lines: &mut Vec<Line<'a>>,
    key: &'a str,
    desc: &'a str,
    key_style: Style,
    desc_style: Style,
) {
    let key_width = 12;
    let padded_key = format!("{:<width$}", key, width = key_width);
    lines.push(Line::from(vec![
        Span::styled(padded_key, key_style),
        Span::styled(desc, desc_style),
    ]));
}

/// Create a centered rectangle of the given percentage of the parent
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn overlay_lists_both_modes() {
        let app = test_app();
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_help_overlay(frame, &app, area);
        });
        assert!(output.contains("Key Bindings"));
        assert!(output.contains("Navigation"));
        assert!(output.contains("Editing"));
        assert!(output.contains("Toggle this help"));
    }
}
