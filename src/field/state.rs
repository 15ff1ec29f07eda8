use crate::model::{EMPTY_LABEL, Entry};

/// Local state of one editable entry value.
///
/// `original` always holds the last value loaded from the store or
/// successfully saved to it; `current` may diverge from it only while
/// `editing`. Transitions are pure and return the next state, so the whole
/// edit/save/revert cycle is testable without a terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditState {
    pub current: String,
    pub original: String,
    pub editing: bool,
}

impl EditState {
    pub fn new(value: Option<&str>) -> Self {
        let shown = value.unwrap_or(EMPTY_LABEL).to_string();
        EditState {
            current: shown.clone(),
            original: shown,
            editing: false,
        }
    }

    /// Snapshot the displayed value of `entry`. A missing value (or a
    /// missing entry) shows as the `Empty` placeholder.
    pub fn from_entry(entry: Option<&Entry>) -> Self {
        EditState::new(entry.and_then(|e| e.value.as_deref()))
    }

    /// Enter editing. The draft starts as the displayed value.
    pub fn begin_edit(mut self) -> Self {
        self.editing = true;
        self
    }

    /// Replace the draft. Outside of editing this is a no-op, so stray
    /// input can never make `current` diverge from `original`.
    pub fn set_draft(mut self, value: impl Into<String>) -> Self {
        if self.editing {
            self.current = value.into();
        }
        self
    }

    /// Accept the draft: leave editing with `original` caught up to
    /// `current`. The store write is the component's job, not ours.
    pub fn commit(mut self) -> Self {
        self.editing = false;
        self.original = self.current.clone();
        self
    }

    /// Abandon the draft: leave editing with `current` restored.
    pub fn revert(mut self) -> Self {
        self.current = self.original.clone();
        self.editing = false;
        self
    }
}

impl Default for EditState {
    fn default() -> Self {
        EditState::new(None)
    }
}
