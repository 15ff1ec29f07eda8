use std::path::{Path, PathBuf};
use std::sync::mpsc;

use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

use crate::io::diary_io::{CONFIG_FILE, DIARY_FILE};

/// Events sent from the file watcher to the TUI event loop.
#[derive(Debug)]
pub enum FileEvent {
    /// diary.md or nosh.toml changed on disk.
    Changed(Vec<PathBuf>),
}

/// A file system watcher over the diary directory.
pub struct DiaryWatcher {
    _watcher: RecommendedWatcher,
    rx: mpsc::Receiver<FileEvent>,
}

impl DiaryWatcher {
    /// Start watching `root`. The returned watcher's `poll()` is drained
    /// once per event-loop tick.
    pub fn start(root: &Path) -> Result<Self, notify::Error> {
        let (tx, rx) = mpsc::channel();

        let mut watcher = RecommendedWatcher::new(
            move |result: Result<Event, notify::Error>| {
                let event = match result {
                    Ok(e) => e,
                    Err(_) => return,
                };

                match event.kind {
                    EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_) => {}
                    _ => return,
                }

                // Only the two files we own; edits to .state.json, the
                // lock file or anything else in the directory are noise.
                let relevant: Vec<PathBuf> = event
                    .paths
                    .into_iter()
                    .filter(|p| {
                        matches!(
                            p.file_name().and_then(|n| n.to_str()),
                            Some(DIARY_FILE) | Some(CONFIG_FILE)
                        )
                    })
                    .collect();

                if !relevant.is_empty() {
                    let _ = tx.send(FileEvent::Changed(relevant));
                }
            },
            Config::default(),
        )?;

        watcher.watch(root, RecursiveMode::NonRecursive)?;
        Ok(DiaryWatcher {
            _watcher: watcher,
            rx,
        })
    }

    /// Non-blocking poll for pending file events.
    /// Returns all queued events (may be empty).
    pub fn poll(&self) -> Vec<FileEvent> {
        let mut events = Vec::new();
        while let Ok(evt) = self.rx.try_recv() {
            events.push(evt);
        }
        events
    }
}
