use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width of a string in terminal cells.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate a string to fit within `max_cells` terminal cells, appending `…`
/// if anything was cut.
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if max_cells == 0 {
        return String::new();
    }
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells == 1 {
        return "\u{2026}".to_string();
    }
    // reserve 1 cell for '…'
    let budget = max_cells - 1;
    let mut out = String::new();
    let mut used = 0;
    for g in s.graphemes(true) {
        let gw = display_width(g);
        if used + gw > budget {
            break;
        }
        used += gw;
        out.push_str(g);
    }
    out.push('\u{2026}');
    out
}

/// Byte offset of the grapheme boundary after `at`. None at end of string.
pub fn next_grapheme_boundary(s: &str, at: usize) -> Option<usize> {
    if at >= s.len() {
        return None;
    }
    let g = s[at..].graphemes(true).next()?;
    Some(at + g.len())
}

/// Byte offset of the grapheme boundary before `at`. None at start of string.
pub fn prev_grapheme_boundary(s: &str, at: usize) -> Option<usize> {
    if at == 0 {
        return None;
    }
    s[..at].grapheme_indices(true).last().map(|(i, _)| i)
}

/// The grapheme cluster starting at `at`, or "" past the end.
pub fn grapheme_at(s: &str, at: usize) -> &str {
    if at >= s.len() {
        return "";
    }
    s[at..].graphemes(true).next().unwrap_or("")
}

/// Terminal column of the byte offset `at` (clamped to the string).
pub fn byte_offset_to_display_col(s: &str, at: usize) -> usize {
    display_width(&s[..at.min(s.len())])
}

/// Start of the whitespace-delimited word left of `at`. Used for Ctrl+W.
pub fn word_boundary_left(s: &str, at: usize) -> usize {
    let mut grapheme_starts: Vec<(usize, &str)> = s[..at].grapheme_indices(true).collect();
    // Trailing whitespace belongs to the deleted span.
    while let Some((_, g)) = grapheme_starts.last() {
        if g.chars().all(char::is_whitespace) {
            grapheme_starts.pop();
        } else {
            break;
        }
    }
    let mut boundary = 0;
    for (i, g) in grapheme_starts.iter().rev() {
        if g.chars().all(char::is_whitespace) {
            break;
        }
        boundary = *i;
    }
    if grapheme_starts.is_empty() { 0 } else { boundary }
}
