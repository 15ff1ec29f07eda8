use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use tempfile::TempDir;

use crate::io::diary_io::{LoadedDiary, load_diary};
use crate::parse::parse_diary;
use crate::store::MemoryStore;
use crate::tui::app::App;
use crate::tui::input;

pub const TERM_W: u16 = 60;
pub const TERM_H: u16 = 20;

pub const SAMPLE_CONFIG: &str = r#"
[diary]
name = "Test Diary"

[entries]
meals = ["Lunch", "Dinner"]
days_to_display = 3

[suggest]
foods = ["oatmeal", "salad"]
learn = true
"#;

pub const SAMPLE_DIARY_MD: &str = "\
# Test Diary

## 2026-08-23

- Lunch: tomato soup
- Dinner:
";

/// First day of the test window; the sample diary's only day.
pub fn test_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 23).unwrap()
}

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// An App over the sample diary that never touches disk. Good for render
/// and input tests; commits would try to save under `root`, so tests that
/// commit use `test_app_on_disk`.
pub fn test_app() -> App {
    let config = toml::from_str(SAMPLE_CONFIG).unwrap();
    let (diary, dropped) = parse_diary(SAMPLE_DIARY_MD);
    let loaded = LoadedDiary {
        root: PathBuf::from("/tmp/test-nosh"),
        config,
        store: MemoryStore::new(diary),
        dropped,
    };
    App::with_today(loaded, test_today())
}

/// An App backed by a real diary directory in a tempdir, so commits can
/// save and learn foods. Keep the TempDir alive for the test's duration.
pub fn test_app_on_disk() -> (TempDir, App) {
    let tmp = TempDir::new().unwrap();
    write_sample_diary(tmp.path());
    let loaded = load_diary(tmp.path()).unwrap();
    let app = App::with_today(loaded, test_today());
    (tmp, app)
}

pub fn write_sample_diary(root: &Path) {
    std::fs::write(root.join("nosh.toml"), SAMPLE_CONFIG).unwrap();
    std::fs::write(root.join("diary.md"), SAMPLE_DIARY_MD).unwrap();
}

/// Feed one key press through the input dispatcher.
pub fn press(app: &mut App, code: KeyCode) {
    input::handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

pub fn press_ctrl(app: &mut App, c: char) {
    input::handle_key(
        app,
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL),
    );
}

/// Put `value` in the active edit's draft, cursor at the end.
pub fn type_draft(app: &mut App, value: &str) {
    let edit = app.edit.as_mut().expect("no active edit");
    edit.field.set_draft(value);
    edit.cursor = value.len();
    edit.refilter();
}
