//! Change notifications for the content directory.
//!
//! The directory is watched rather than the individual files so that editors
//! which save by writing a temporary file and renaming it over the original
//! are still noticed.

use crate::model::ContentError;
use notify_debouncer_mini::{new_debouncer, DebounceEventResult, Debouncer};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Receiver;
use std::time::Duration;
use tracing::warn;

/// Quiet period before a burst of file events is reported.
pub const DEBOUNCE_TIMEOUT: Duration = Duration::from_millis(100);

/// Debounced watcher over one directory.
pub struct ContentWatcher {
    dir: PathBuf,
    _debouncer: Debouncer<notify::RecommendedWatcher>,
    event_rx: Receiver<DebounceEventResult>,
}

impl ContentWatcher {
    /// Start watching `dir` (non-recursively).
    ///
    /// # Errors
    ///
    /// Returns `ContentError::Watch` if the platform watcher cannot be created
    /// or cannot watch `dir`.
    pub fn new(dir: &Path) -> Result<Self, ContentError> {
        let watch_error = |e: notify::Error| ContentError::Watch {
            path: dir.to_path_buf(),
            message: e.to_string(),
        };

        let (tx, rx) = std::sync::mpsc::channel();
        let mut debouncer = new_debouncer(DEBOUNCE_TIMEOUT, tx).map_err(watch_error)?;
        debouncer
            .watcher()
            .watch(dir, notify::RecursiveMode::NonRecursive)
            .map_err(watch_error)?;

        Ok(Self {
            dir: dir.to_path_buf(),
            _debouncer: debouncer,
            event_rx: rx,
        })
    }

    /// Paths reported changed since the last call, sorted and deduplicated.
    ///
    /// Non-blocking - drains whatever the debouncer has delivered so far.
    pub fn changed_paths(&self) -> Vec<PathBuf> {
        let mut paths = Vec::new();

        while let Ok(result) = self.event_rx.try_recv() {
            match result {
                Ok(events) => paths.extend(events.into_iter().map(|event| event.path)),
                Err(errors) => warn!(dir = ?self.dir, ?errors, "File watcher error"),
            }
        }

        paths.sort();
        paths.dedup();
        paths
    }
}

impl fmt::Debug for ContentWatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentWatcher")
            .field("dir", &self.dir)
            .finish_non_exhaustive()
    }
}
