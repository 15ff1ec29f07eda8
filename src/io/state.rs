use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Persisted TUI state (written to .state.json in the diary directory).
/// Cosmetic only: a stale or missing file just resets the view.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct UiState {
    /// Flat index of the cursor across the visible entry rows.
    #[serde(default)]
    pub cursor: usize,
    #[serde(default)]
    pub scroll_offset: usize,
}

/// Read .state.json from the diary directory
pub fn read_ui_state(root: &Path) -> Option<UiState> {
    let path = root.join(".state.json");
    let content = fs::read_to_string(&path).ok()?;
    serde_json::from_str(&content).ok()
}

/// Write .state.json to the diary directory
pub fn write_ui_state(root: &Path, state: &UiState) -> Result<(), std::io::Error> {
    let path = root.join(".state.json");
    let content = serde_json::to_string_pretty(state)?;
    fs::write(&path, content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn write_and_read_round_trip() {
        let dir = TempDir::new().unwrap();
        let state = UiState {
            cursor: 5,
            scroll_offset: 2,
        };

        write_ui_state(dir.path(), &state).unwrap();
        assert_eq!(read_ui_state(dir.path()).unwrap(), state);
    }

    #[test]
    fn read_missing_file_returns_none() {
        let dir = TempDir::new().unwrap();
        assert!(read_ui_state(dir.path()).is_none());
    }

    #[test]
    fn read_malformed_json_returns_none() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".state.json"), "not json {{{").unwrap();
        assert!(read_ui_state(dir.path()).is_none());
    }

    #[test]
    fn missing_fields_default_to_zero() {
        let state: UiState = serde_json::from_str("{}").unwrap();
        assert_eq!(state.cursor, 0);
        assert_eq!(state.scroll_offset, 0);
    }
}
