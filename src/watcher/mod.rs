//! File system watcher feeding tree refreshes

use notify_debouncer_mini::{new_debouncer, DebouncedEvent, Debouncer};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver};
use std::time::Duration;

/// Quiet period before a burst of changes is reported
const DEBOUNCE: Duration = Duration::from_millis(500);

/// Debounced recursive watcher over the tree root
pub struct FileWatcher {
    _debouncer: Debouncer<notify::RecommendedWatcher>,
    rx: Receiver<Result<Vec<DebouncedEvent>, notify::Error>>,
}

impl FileWatcher {
    /// Start watching `root` recursively
    pub fn new(root: &Path) -> anyhow::Result<Self> {
        let (tx, rx) = channel();

        let mut debouncer = new_debouncer(DEBOUNCE, move |res| {
            let _ = tx.send(res);
        })?;

        debouncer
            .watcher()
            .watch(root, notify::RecursiveMode::Recursive)?;

        Ok(Self {
            _debouncer: debouncer,
            rx,
        })
    }

    /// Paths changed since the last poll (non-blocking)
    ///
    /// Returns None when nothing changed. Watcher errors are logged and dropped.
    pub fn poll(&self) -> Option<Vec<PathBuf>> {
        let mut changed = Vec::new();
        while let Ok(batch) = self.rx.try_recv() {
            match batch {
                Ok(events) => changed.extend(events.into_iter().map(|e| e.path)),
                Err(e) => log::warn!("File watcher error: {}", e),
            }
        }
        changed.sort();
        changed.dedup();
        if changed.is_empty() {
            None
        } else {
            Some(changed)
        }
    }
}
