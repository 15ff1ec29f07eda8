use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{ActiveEdit, App, Mode};
use crate::util::unicode;

pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    if app.edit.is_none() {
        app.mode = Mode::Navigate;
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        let edit = app.edit.as_mut().unwrap();
        match key.code {
            KeyCode::Char('a') => edit.cursor = 0,
            KeyCode::Char('e') => edit.cursor = edit.field.draft().len(),
            KeyCode::Char('u') => delete_to_start(edit),
            KeyCode::Char('w') => delete_word_left(edit),
            KeyCode::Char('c') => app.cancel_active_edit(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Esc => {
            // First Esc closes the dropdown; second abandons the edit.
            let edit = app.edit.as_mut().unwrap();
            if edit.suggest.visible {
                edit.suggest.visible = false;
                edit.suggest.selected = None;
            } else {
                app.cancel_active_edit();
            }
        }
        KeyCode::Enter => {
            // Enter on a highlighted dropdown row selects that suggestion;
            // otherwise it commits the draft as typed.
            let chosen = app
                .edit
                .as_ref()
                .and_then(|e| e.highlighted())
                .map(str::to_string);
            app.commit_active_edit(chosen);
        }
        KeyCode::Tab => accept_suggestion_into_draft(app.edit.as_mut().unwrap()),
        KeyCode::Down => move_selection(app.edit.as_mut().unwrap(), 1),
        KeyCode::Up => move_selection(app.edit.as_mut().unwrap(), -1),
        KeyCode::Left => {
            let edit = app.edit.as_mut().unwrap();
            if let Some(p) = unicode::prev_grapheme_boundary(edit.field.draft(), edit.cursor) {
                edit.cursor = p;
            }
        }
        KeyCode::Right => {
            let edit = app.edit.as_mut().unwrap();
            if let Some(n) = unicode::next_grapheme_boundary(edit.field.draft(), edit.cursor) {
                edit.cursor = n;
            }
        }
        KeyCode::Home => app.edit.as_mut().unwrap().cursor = 0,
        KeyCode::End => {
            let edit = app.edit.as_mut().unwrap();
            edit.cursor = edit.field.draft().len();
        }
        KeyCode::Backspace => backspace(app.edit.as_mut().unwrap()),
        KeyCode::Delete => delete_forward(app.edit.as_mut().unwrap()),
        KeyCode::Char(c) => insert_char(app.edit.as_mut().unwrap(), c),
        _ => {}
    }
}

/// Replace the draft and cursor in one step; every text change goes through
/// here so the dropdown always reflects the current draft.
fn set_draft(edit: &mut ActiveEdit, draft: String, cursor: usize) {
    edit.field.set_draft(draft);
    edit.cursor = cursor;
    edit.refilter();
}

fn insert_char(edit: &mut ActiveEdit, c: char) {
    let mut draft = edit.field.draft().to_string();
    draft.insert(edit.cursor, c);
    let cursor = edit.cursor + c.len_utf8();
    set_draft(edit, draft, cursor);
}

fn backspace(edit: &mut ActiveEdit) {
    let Some(p) = unicode::prev_grapheme_boundary(edit.field.draft(), edit.cursor) else {
        return;
    };
    let mut draft = edit.field.draft().to_string();
    draft.replace_range(p..edit.cursor, "");
    set_draft(edit, draft, p);
}

fn delete_forward(edit: &mut ActiveEdit) {
    let Some(n) = unicode::next_grapheme_boundary(edit.field.draft(), edit.cursor) else {
        return;
    };
    let mut draft = edit.field.draft().to_string();
    let cursor = edit.cursor;
    draft.replace_range(cursor..n, "");
    set_draft(edit, draft, cursor);
}

fn delete_to_start(edit: &mut ActiveEdit) {
    let mut draft = edit.field.draft().to_string();
    draft.replace_range(..edit.cursor, "");
    set_draft(edit, draft, 0);
}

fn delete_word_left(edit: &mut ActiveEdit) {
    let boundary = unicode::word_boundary_left(edit.field.draft(), edit.cursor);
    let mut draft = edit.field.draft().to_string();
    draft.replace_range(boundary..edit.cursor, "");
    set_draft(edit, draft, boundary);
}

/// Tab pulls the highlighted suggestion (or the first one) into the draft
/// and keeps editing, unlike Enter which commits it.
fn accept_suggestion_into_draft(edit: &mut ActiveEdit) {
    if !edit.suggest.visible || edit.suggest.filtered.is_empty() {
        return;
    }
    let idx = edit.suggest.selected.unwrap_or(0);
    let Some(value) = edit.suggest.filtered.get(idx).cloned() else {
        return;
    };
    let cursor = value.len();
    set_draft(edit, value, cursor);
}

fn move_selection(edit: &mut ActiveEdit, delta: isize) {
    if edit.suggest.filtered.is_empty() {
        return;
    }
    // Arrow keys re-open a dropdown dismissed with Esc
    edit.suggest.visible = true;
    let last = edit.suggest.filtered.len() - 1;
    edit.suggest.selected = Some(match (edit.suggest.selected, delta) {
        (None, d) if d > 0 => 0,
        (None, _) => last,
        (Some(i), d) if d > 0 => (i + 1).min(last),
        (Some(i), _) => i.saturating_sub(1),
    });
}
