use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

use crate::model::Entry;
use crate::tui::theme::Theme;
use crate::util::unicode;

/// Spans for one entry row in display form: `   Lunch: tomato soup`, with a
/// `▸` marker on the cursor row and a dimmed `Empty` placeholder.
pub fn display_spans(entry: &Entry, is_cursor: bool, theme: &Theme) -> Vec<Span<'static>> {
    let bg = theme.background;
    let mut spans = vec![marker_span(is_cursor, theme)];

    spans.push(Span::styled(
        entry.key.clone(),
        Style::default().fg(theme.cyan).bg(bg),
    ));
    spans.push(Span::styled(": ", Style::default().fg(theme.dim).bg(bg)));

    let value_style = match (&entry.value, is_cursor) {
        (Some(_), true) => Style::default()
            .fg(theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
        (Some(_), false) => Style::default().fg(theme.text).bg(bg),
        (None, _) => Style::default().fg(theme.dim).bg(bg),
    };
    spans.push(Span::styled(entry.display_value().to_string(), value_style));
    spans
}

/// Spans for the inline edit row plus the screen column of the edit cursor
/// (relative to the row start), which anchors the suggestion dropdown.
///
/// The cursor is drawn as a block over the grapheme under it, or a `▌` bar
/// at the end of the draft.
pub fn edit_spans(
    key: &str,
    draft: &str,
    cursor: usize,
    theme: &Theme,
) -> (Vec<Span<'static>>, u16) {
    let bg = theme.background;
    let mut spans = vec![marker_span(true, theme)];
    spans.push(Span::styled(
        key.to_string(),
        Style::default().fg(theme.cyan).bg(bg),
    ));
    spans.push(Span::styled(": ", Style::default().fg(theme.dim).bg(bg)));

    let prefix_width: usize = spans.iter().map(|s| unicode::display_width(&s.content)).sum();

    let cursor = cursor.min(draft.len());
    let before = &draft[..cursor];
    let at = unicode::grapheme_at(draft, cursor);

    let draft_style = Style::default().fg(theme.text_bright).bg(bg);
    if !before.is_empty() {
        spans.push(Span::styled(before.to_string(), draft_style));
    }
    if at.is_empty() {
        spans.push(Span::styled(
            "\u{258C}",
            Style::default().fg(theme.highlight).bg(bg),
        ));
    } else {
        spans.push(Span::styled(
            at.to_string(),
            Style::default().fg(theme.background).bg(theme.text_bright),
        ));
        let after = &draft[cursor + at.len()..];
        if !after.is_empty() {
            spans.push(Span::styled(after.to_string(), draft_style));
        }
    }

    let col = prefix_width + unicode::display_width(before);
    (spans, col as u16)
}

fn marker_span(is_cursor: bool, theme: &Theme) -> Span<'static> {
    if is_cursor {
        Span::styled(
            " \u{25B8} ",
            Style::default().fg(theme.highlight).bg(theme.background),
        )
    } else {
        Span::styled("   ", Style::default().bg(theme.background))
    }
}
