use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::App;

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    // Help overlay intercepts everything until dismissed
    if app.show_help {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')) {
            app.show_help = false;
        }
        return;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
        }
        KeyCode::Char('?') => {
            app.show_help = true;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            let len = app.visible_rows().len();
            if len > 0 && app.cursor + 1 < len {
                app.cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.cursor = app.cursor.saturating_sub(1);
        }
        KeyCode::Char('g') => {
            app.cursor = 0;
        }
        KeyCode::Char('G') => {
            app.cursor = app.visible_rows().len().saturating_sub(1);
        }
        KeyCode::Char('e') | KeyCode::Enter => {
            app.begin_edit_at_cursor();
        }
        KeyCode::Char('r') => {
            app.reload_from_disk(false);
            app.status_message = Some("reloaded from disk".to_string());
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::Mode;
    use crate::tui::render::test_helpers::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn jk_moves_within_rows() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.cursor, 2);
        press(&mut app, KeyCode::Char('k'));
        assert_eq!(app.cursor, 1);
    }

    #[test]
    fn cursor_stops_at_edges() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('k'));
        assert_eq!(app.cursor, 0);

        press(&mut app, KeyCode::Char('G'));
        let last = app.visible_rows().len() - 1;
        assert_eq!(app.cursor, last);
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.cursor, last);
        press(&mut app, KeyCode::Char('g'));
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn enter_and_e_begin_editing() {
        let mut app = test_app();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, Mode::Edit);
        assert!(app.edit.is_some());

        app.cancel_active_edit();
        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.mode, Mode::Edit);
    }

    #[test]
    fn q_quits_and_help_toggles() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);
        // Keys are swallowed while help is up
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.cursor, 0);
        assert!(app.show_help);
        press(&mut app, KeyCode::Esc);
        assert!(!app.show_help);

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
