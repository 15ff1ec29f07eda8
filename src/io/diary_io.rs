use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::model::config::DiaryConfig;
use crate::parse::{parse_diary, serialize_diary};
use crate::store::MemoryStore;

/// Config file that marks a directory as a diary.
pub const CONFIG_FILE: &str = "nosh.toml";
/// The diary itself.
pub const DIARY_FILE: &str = "diary.md";

/// Error type for diary I/O operations
#[derive(Debug, thiserror::Error)]
pub enum DiaryError {
    #[error("not a diary directory: no nosh.toml found")]
    NotADiary,
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse nosh.toml: {0}")]
    ConfigParseError(#[from] toml::de::Error),
    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Everything read from a diary directory.
#[derive(Debug)]
pub struct LoadedDiary {
    pub root: PathBuf,
    pub config: DiaryConfig,
    pub store: MemoryStore,
    /// Lines of diary.md the parser did not understand. These are gone
    /// from the next save, so callers should warn about them.
    pub dropped: Vec<String>,
}

/// Discover the diary directory by walking up from `start`, looking for
/// a `nosh.toml`.
pub fn discover_diary(start: &Path) -> Result<PathBuf, DiaryError> {
    let mut current = start.to_path_buf();
    loop {
        if current.join(CONFIG_FILE).is_file() {
            return Ok(current);
        }
        if !current.pop() {
            return Err(DiaryError::NotADiary);
        }
    }
}

/// Load the config and diary file from `root`. A missing diary.md is an
/// empty diary named after the config, not an error.
pub fn load_diary(root: &Path) -> Result<LoadedDiary, DiaryError> {
    let config_path = root.join(CONFIG_FILE);
    let config_text = fs::read_to_string(&config_path).map_err(|e| DiaryError::ReadError {
        path: config_path.clone(),
        source: e,
    })?;
    let config: DiaryConfig = toml::from_str(&config_text)?;

    let diary_path = root.join(DIARY_FILE);
    let (diary, dropped) = if diary_path.exists() {
        let text = fs::read_to_string(&diary_path).map_err(|e| DiaryError::ReadError {
            path: diary_path.clone(),
            source: e,
        })?;
        parse_diary(&text)
    } else {
        (crate::model::Diary::new(config.diary.name.clone()), Vec::new())
    };

    Ok(LoadedDiary {
        root: root.to_path_buf(),
        config,
        store: MemoryStore::new(diary),
        dropped,
    })
}

/// Save the diary file back to disk in canonical form.
pub fn save_diary(root: &Path, store: &MemoryStore) -> Result<(), DiaryError> {
    let path = root.join(DIARY_FILE);
    let content = serialize_diary(store.diary());
    atomic_write(&path, content.as_bytes()).map_err(|e| DiaryError::ReadError { path, source: e })
}

/// Write `content` to `path` atomically using a temp file + rename.
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
