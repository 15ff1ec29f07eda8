use std::path::PathBuf;
use std::time::{Duration, Instant};

use chrono::{Days, NaiveDate};

use crate::field::{EditableField, StaticSuggestions, SuggestionSource};
use crate::io::config_io;
use crate::io::diary_io::{self, LoadedDiary};
use crate::io::lock::FileLock;
use crate::model::{DiaryConfig, EntryId};
use crate::store::{EntryStore, MemoryStore};

use super::theme::Theme;

/// How long after our own save watcher events are ignored.
const SELF_WRITE_SUPPRESS: Duration = Duration::from_millis(500);

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    Edit,
}

/// The suggestion dropdown attached to an active edit.
#[derive(Debug, Clone, Default)]
pub struct SuggestBox {
    /// Candidates matching the current draft, in pool order.
    pub filtered: Vec<String>,
    /// Highlighted row, if the user moved into the dropdown.
    pub selected: Option<usize>,
    /// Esc hides the dropdown without leaving the edit; typing re-shows it.
    pub visible: bool,
}

/// One entry being edited inline: the field core plus the cursor and
/// dropdown state the TUI layers on top of it.
pub struct ActiveEdit {
    pub field: EditableField,
    /// Byte offset of the cursor within the draft.
    pub cursor: usize,
    pub pool: StaticSuggestions,
    pub suggest: SuggestBox,
}

impl ActiveEdit {
    /// Re-filter the dropdown after the draft changed.
    pub fn refilter(&mut self) {
        self.suggest.filtered = self.pool.filter(self.field.draft());
        self.suggest.selected = None;
        self.suggest.visible = !self.suggest.filtered.is_empty();
    }

    /// The dropdown value Enter would accept, if any.
    pub fn highlighted(&self) -> Option<&str> {
        if !self.suggest.visible {
            return None;
        }
        let idx = self.suggest.selected?;
        self.suggest.filtered.get(idx).map(|s| s.as_str())
    }
}

/// Main application state
pub struct App {
    pub root: PathBuf,
    pub config: DiaryConfig,
    pub store: MemoryStore,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    /// First day of the visible window.
    pub today: NaiveDate,
    /// Cursor index into the flat visible entry rows
    pub cursor: usize,
    /// Scroll offset (first visible display line)
    pub scroll_offset: usize,
    /// Help overlay visible
    pub show_help: bool,
    /// One-line outcome report shown in the status row
    pub status_message: Option<String>,
    /// Present exactly while an entry is being edited
    pub edit: Option<ActiveEdit>,
    /// Screen position of the edit cursor, set during render, anchoring
    /// the suggestion popup
    pub suggest_anchor: Option<(u16, u16)>,
    /// Watcher events before this instant are our own save
    suppress_watch_until: Option<Instant>,
}

impl App {
    pub fn new(loaded: LoadedDiary) -> Self {
        let today = chrono::Local::now().date_naive();
        Self::with_today(loaded, today)
    }

    /// Like `new` but with an explicit first day, so tests are not tied to
    /// the wall clock.
    pub fn with_today(loaded: LoadedDiary, today: NaiveDate) -> Self {
        let LoadedDiary {
            root,
            config,
            mut store,
            dropped,
        } = loaded;

        store.ensure_window(today, config.entries.days_to_display, &config.entries.meals);
        let theme = Theme::from_config(&config.ui);

        let status_message = if dropped.is_empty() {
            None
        } else {
            Some(format!(
                "ignoring {} unrecognized line(s) in diary.md",
                dropped.len()
            ))
        };

        App {
            root,
            config,
            store,
            mode: Mode::Navigate,
            should_quit: false,
            theme,
            today,
            cursor: 0,
            scroll_offset: 0,
            show_help: false,
            status_message,
            edit: None,
            suggest_anchor: None,
            suppress_watch_until: None,
        }
    }

    /// The flat list of entry ids shown, in window order. Days outside the
    /// window (history beyond today) stay in the file but off screen.
    pub fn visible_rows(&self) -> Vec<EntryId> {
        let mut rows = Vec::new();
        for date in self.window_dates() {
            if let Some(day) = self.store.diary().day(date) {
                rows.extend(day.entries.iter().map(|e| e.id));
            }
        }
        rows
    }

    /// Dates of the visible window, ascending.
    pub fn window_dates(&self) -> Vec<NaiveDate> {
        (0..self.config.entries.days_to_display)
            .filter_map(|offset| self.today.checked_add_days(Days::new(offset as u64)))
            .collect()
    }

    /// Entry id under the cursor.
    pub fn cursor_entry_id(&self) -> Option<EntryId> {
        self.visible_rows().get(self.cursor).copied()
    }

    /// Date of the day containing `id`.
    pub fn entry_date(&self, id: EntryId) -> Option<NaiveDate> {
        self.store
            .diary()
            .days
            .iter()
            .find(|d| d.entries.iter().any(|e| e.id == id))
            .map(|d| d.date)
    }

    pub fn clamp_cursor(&mut self) {
        let len = self.visible_rows().len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    /// Mount an editable field on the cursor entry and enter Edit mode.
    pub fn begin_edit_at_cursor(&mut self) {
        let Some(id) = self.cursor_entry_id() else {
            return;
        };
        let unfilled = self.store.entry(id).is_none_or(|e| e.is_empty());

        let mut field = EditableField::new(id, &self.store);
        field.begin_edit();
        // An unfilled slot displays as "Empty" but edits from a blank
        // draft, not from the placeholder text.
        if unfilled {
            field.set_draft("");
        }
        let cursor = field.draft().len();

        let pool = self.suggestion_pool();
        let mut edit = ActiveEdit {
            field,
            cursor,
            pool,
            suggest: SuggestBox::default(),
        };
        edit.refilter();

        self.edit = Some(edit);
        self.mode = Mode::Edit;
        self.status_message = None;
    }

    /// Config foods first, then everything already in the diary.
    pub fn suggestion_pool(&self) -> StaticSuggestions {
        StaticSuggestions::merged(&self.config.suggest.foods, self.store.known_foods())
    }

    /// Finish the active edit: commit (through the dropdown value if one is
    /// highlighted), save the diary, and report the outcome.
    pub fn commit_active_edit(&mut self, chosen: Option<String>) {
        let Some(mut edit) = self.edit.take() else {
            return;
        };
        self.mode = Mode::Navigate;

        if edit.field.entry(&self.store).is_none() {
            // The entry vanished mid-edit (external change); nothing to save.
            self.status_message = Some("entry no longer exists; nothing saved".to_string());
            return;
        }

        let id = edit.field.id();
        let result = match &chosen {
            Some(value) => edit.field.select_suggestion(value, &mut self.store),
            None => edit.field.commit(&mut self.store),
        };

        if let Err(e) = result {
            self.status_message = Some(format!("save failed: {}", e));
            return;
        }

        let value = edit.field.state().original.clone();
        match self.save_diary_locked() {
            Ok(()) => {
                let (date, key) = self.describe_entry(id);
                self.status_message = Some(format!("saved {} \u{00B7} {}", key, date));
                if self.config.suggest.learn && !value.is_empty() {
                    if let Err(e) = config_io::learn_food(&self.root, &mut self.config, &value) {
                        self.status_message = Some(format!("saved, but nosh.toml update failed: {}", e));
                    }
                }
            }
            Err(e) => {
                self.status_message = Some(format!("save failed: {}", e));
            }
        }
    }

    /// Abandon the active edit without touching the store.
    pub fn cancel_active_edit(&mut self) {
        if let Some(mut edit) = self.edit.take() {
            edit.field.revert();
        }
        self.mode = Mode::Navigate;
    }

    fn describe_entry(&self, id: EntryId) -> (String, String) {
        let date = self
            .entry_date(id)
            .map(|d| d.to_string())
            .unwrap_or_default();
        let key = self
            .store
            .entry(id)
            .map(|e| e.key.clone())
            .unwrap_or_default();
        (date, key)
    }

    /// Write the diary file under the advisory lock.
    pub fn save_diary_locked(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let _lock = FileLock::acquire_default(&self.root)?;
        diary_io::save_diary(&self.root, &self.store)?;
        self.store.mark_clean();
        self.suppress_watch_until = Some(Instant::now() + SELF_WRITE_SUPPRESS);
        Ok(())
    }

    /// Whether watcher events right now are echoes of our own save.
    pub fn suppressing_watch(&self) -> bool {
        self.suppress_watch_until
            .is_some_and(|until| Instant::now() < until)
    }

    /// Reload config and diary from disk, rebinding the active edit by
    /// (date, meal) since entry ids do not survive a reparse. An edit whose
    /// entry is gone is dropped.
    pub fn reload_from_disk(&mut self, external: bool) {
        let loaded = match diary_io::load_diary(&self.root) {
            Ok(l) => l,
            Err(e) => {
                self.status_message = Some(format!("reload failed: {}", e));
                return;
            }
        };

        let rebind = self.edit.as_ref().and_then(|edit| {
            let entry = edit.field.entry(&self.store)?;
            let date = self.entry_date(entry.id)?;
            Some((date, entry.key.clone(), edit.field.draft().to_string(), edit.cursor))
        });

        self.config = loaded.config;
        self.store = loaded.store;
        self.store.ensure_window(
            self.today,
            self.config.entries.days_to_display,
            &self.config.entries.meals,
        );
        self.theme = Theme::from_config(&self.config.ui);

        if self.edit.is_some() {
            self.edit = None;
            match rebind.and_then(|(date, key, draft, cursor)| {
                let id = self.store.entry_for(date, &key)?.id;
                Some((id, draft, cursor))
            }) {
                Some((id, draft, cursor)) => {
                    let mut field = EditableField::new(id, &self.store);
                    field.begin_edit();
                    field.set_draft(draft);
                    let mut edit = ActiveEdit {
                        cursor: cursor.min(field.draft().len()),
                        field,
                        pool: self.suggestion_pool(),
                        suggest: SuggestBox::default(),
                    };
                    edit.refilter();
                    self.edit = Some(edit);
                }
                None => {
                    self.mode = Mode::Navigate;
                    self.status_message =
                        Some("edited entry disappeared on reload; edit dropped".to_string());
                }
            }
        }

        self.clamp_cursor();
        if external {
            self.status_message = Some("diary changed on disk; reloaded".to_string());
        }
    }
}

/// Restore UI state from .state.json
pub fn restore_ui_state(app: &mut App) {
    use crate::io::state::read_ui_state;

    let ui_state = match read_ui_state(&app.root) {
        Some(s) => s,
        None => return,
    };
    app.cursor = ui_state.cursor;
    app.scroll_offset = ui_state.scroll_offset;
    app.clamp_cursor();
}

/// Save UI state to .state.json
pub fn save_ui_state(app: &App) {
    use crate::io::state::{UiState, write_ui_state};

    let ui_state = UiState {
        cursor: app.cursor,
        scroll_offset: app.scroll_offset,
    };
    let _ = write_ui_state(&app.root, &ui_state);
}
