//! Content sources.
//!
//! Loads the page sequence and settings from a content directory laid out
//! the way the site server keeps it:
//!
//! ```text
//! content/
//!   book.json      ordered array of page records
//!   settings.json  title, subtitle, timing (optional)
//! ```
//!
//! When watching is enabled, a debounced file watcher reports edits and
//! [`ContentSource::poll_changes`] reloads the changed file, so pages can be
//! replaced wholesale while the viewer is running.

use crate::model::{BookSettings, ContentError, Page};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub mod file;
pub mod watch;

pub use file::{load_book, load_settings};
pub use watch::{ContentWatcher, DEBOUNCE_TIMEOUT};

/// File name of the page sequence inside the content directory.
pub const BOOK_FILE: &str = "book.json";

/// File name of the settings inside the content directory.
pub const SETTINGS_FILE: &str = "settings.json";

/// Which content file was reloaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentUpdate {
    /// `book.json` changed; the page sequence was replaced.
    Book,
    /// `settings.json` changed; settings were replaced.
    Settings,
}

/// Content loaded from a directory, optionally watched for changes.
#[derive(Debug)]
pub struct ContentSource {
    book_path: PathBuf,
    settings_path: PathBuf,
    pages: Vec<Page>,
    settings: BookSettings,
    watcher: Option<ContentWatcher>,
}

impl ContentSource {
    /// Load content from `content_dir`.
    ///
    /// # Errors
    ///
    /// Fails if `book.json` is missing or invalid, if `settings.json`
    /// exists but is invalid, or if `watch` is set and the directory cannot be
    /// watched. A missing `settings.json` uses defaults.
    pub fn open(content_dir: impl AsRef<Path>, watch: bool) -> Result<Self, ContentError> {
        let content_dir = content_dir.as_ref();
        let book_path = content_dir.join(BOOK_FILE);
        let settings_path = content_dir.join(SETTINGS_FILE);

        let pages = load_book(&book_path)?;
        let settings = match load_settings(&settings_path)? {
            Some(settings) => settings,
            None => {
                warn!(path = ?settings_path, "Settings file missing, using defaults");
                BookSettings::default()
            }
        };

        info!(
            pages = pages.len(),
            dir = ?content_dir,
            watch,
            "Content loaded"
        );

        let watcher = if watch {
            Some(ContentWatcher::new(content_dir)?)
        } else {
            None
        };

        Ok(Self {
            book_path,
            settings_path,
            pages,
            settings,
            watcher,
        })
    }

    /// Build a source from in-memory content. Never watches.
    pub fn from_parts(pages: Vec<Page>, settings: BookSettings) -> Self {
        Self {
            book_path: PathBuf::from(BOOK_FILE),
            settings_path: PathBuf::from(SETTINGS_FILE),
            pages,
            settings,
            watcher: None,
        }
    }

    /// Current page sequence.
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Current settings.
    pub fn settings(&self) -> &BookSettings {
        &self.settings
    }

    /// Path of the page sequence file.
    pub fn book_path(&self) -> &Path {
        &self.book_path
    }

    /// Whether the source reloads files when they change.
    pub fn is_watching(&self) -> bool {
        self.watcher.is_some()
    }

    /// Reload the files the watcher reported changed.
    ///
    /// Non-blocking. A file that fails to reload keeps its previous content
    /// and the failure is logged; it is retried on the next change.
    pub fn poll_changes(&mut self) -> Vec<ContentUpdate> {
        let mut updates = Vec::new();
        let Some(watcher) = &self.watcher else {
            return updates;
        };

        let changed = watcher.changed_paths();
        let book_changed = changed.iter().any(|path| is_named(path, BOOK_FILE));
        let settings_changed = changed.iter().any(|path| is_named(path, SETTINGS_FILE));

        if book_changed {
            match load_book(&self.book_path) {
                Ok(pages) => {
                    info!(pages = pages.len(), "Book reloaded");
                    self.pages = pages;
                    updates.push(ContentUpdate::Book);
                }
                Err(e) => warn!("Book reload failed, keeping previous pages: {}", e),
            }
        }

        if settings_changed {
            match load_settings(&self.settings_path) {
                Ok(Some(settings)) => {
                    info!("Settings reloaded");
                    self.settings = settings;
                    updates.push(ContentUpdate::Settings);
                }
                Ok(None) => warn!("Settings file removed, keeping previous settings"),
                Err(e) => warn!("Settings reload failed, keeping previous settings: {}", e),
            }
        }

        updates
    }
}

/// Event paths may be canonicalized by the platform, so only names compare.
fn is_named(path: &Path, name: &str) -> bool {
    path.file_name() == Some(OsStr::new(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::time::{Duration, Instant};

    /// Long enough for any debounced event to arrive.
    const RELOAD_TIMEOUT: Duration = Duration::from_secs(5);

    /// Long enough that a missing update means none is coming.
    const QUIET_PERIOD: Duration = Duration::from_millis(500);

    const TWO_PAGES: &str = r#"[
        {"id":"1","imageUrl":"/a.jpg","title":"A","caption":"first"},
        {"id":"2","imageUrl":"/b.jpg","title":"B","caption":"second"}
    ]"#;

    const THREE_PAGES: &str = r#"[
        {"id":"1","imageUrl":"/a.jpg","title":"A","caption":"first"},
        {"id":"2","imageUrl":"/b.jpg","title":"B","caption":"second"},
        {"id":"3","imageUrl":"/c.jpg","title":"C","caption":"third"}
    ]"#;

    fn make_content_dir(name: &str, book: &str, settings: Option<&str>) -> PathBuf {
        let dir = std::env::temp_dir().join(name);
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(BOOK_FILE), book).unwrap();
        if let Some(settings) = settings {
            fs::write(dir.join(SETTINGS_FILE), settings).unwrap();
        }
        dir
    }

    /// Poll until an update arrives or `timeout` passes.
    fn wait_for_updates(source: &mut ContentSource, timeout: Duration) -> Vec<ContentUpdate> {
        let deadline = Instant::now() + timeout;
        loop {
            let updates = source.poll_changes();
            if !updates.is_empty() || Instant::now() >= deadline {
                return updates;
            }
            std::thread::sleep(Duration::from_millis(20));
        }
    }

    #[test]
    fn open_loads_book_and_settings() {
        let dir = make_content_dir(
            "photobook_source_open",
            TWO_PAGES,
            Some(r#"{"bookTitle":"Harbor","autoplayIntervalMs":2000}"#),
        );

        let result = ContentSource::open(&dir, false);

        // Cleanup
        let _ = fs::remove_dir_all(&dir);

        let source = result.expect("content should load");
        assert_eq!(source.pages().len(), 2);
        assert_eq!(source.settings().display_title(), "Harbor");
        assert_eq!(source.settings().autoplay_interval_ms(), 2000);
    }

    #[test]
    fn open_without_settings_uses_defaults() {
        let dir = make_content_dir("photobook_source_no_settings", TWO_PAGES, None);

        let result = ContentSource::open(&dir, false);

        // Cleanup
        let _ = fs::remove_dir_all(&dir);

        let source = result.expect("settings are optional");
        assert_eq!(source.settings(), &BookSettings::default());
    }

    #[test]
    fn open_without_book_fails() {
        let dir = std::env::temp_dir().join("photobook_source_no_book");
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();

        let result = ContentSource::open(&dir, false);

        // Cleanup
        let _ = fs::remove_dir_all(&dir);

        assert!(matches!(result, Err(ContentError::FileNotFound { .. })));
    }

    #[test]
    fn poll_changes_reloads_edited_book() {
        let dir = make_content_dir("photobook_source_reload", TWO_PAGES, None);
        let mut source = ContentSource::open(&dir, true).unwrap();
        assert!(source.is_watching());
        assert!(source.poll_changes().is_empty(), "Nothing changed yet");

        fs::write(dir.join(BOOK_FILE), THREE_PAGES).unwrap();
        let updates = wait_for_updates(&mut source, RELOAD_TIMEOUT);

        // Cleanup
        let _ = fs::remove_dir_all(&dir);

        assert_eq!(updates, vec![ContentUpdate::Book]);
        assert_eq!(source.pages().len(), 3);
    }

    #[test]
    fn poll_changes_reloads_edited_settings() {
        let dir = make_content_dir(
            "photobook_source_settings_reload",
            TWO_PAGES,
            Some(r#"{"bookTitle":"Harbor"}"#),
        );
        let mut source = ContentSource::open(&dir, true).unwrap();

        fs::write(dir.join(SETTINGS_FILE), r#"{"bookTitle":"Quay"}"#).unwrap();
        let updates = wait_for_updates(&mut source, RELOAD_TIMEOUT);

        // Cleanup
        let _ = fs::remove_dir_all(&dir);

        assert_eq!(updates, vec![ContentUpdate::Settings]);
        assert_eq!(source.settings().display_title(), "Quay");
        assert_eq!(source.pages().len(), 2, "Book was not touched");
    }

    #[test]
    fn poll_changes_keeps_pages_on_invalid_reload() {
        let dir = make_content_dir("photobook_source_bad_reload", TWO_PAGES, None);
        let mut source = ContentSource::open(&dir, true).unwrap();

        fs::write(dir.join(BOOK_FILE), "[{\"id\": broken").unwrap();
        let updates = wait_for_updates(&mut source, QUIET_PERIOD);

        // Cleanup
        let _ = fs::remove_dir_all(&dir);

        assert!(updates.is_empty());
        assert_eq!(source.pages().len(), 2, "Previous pages should be kept");
    }

    #[test]
    fn poll_changes_keeps_settings_when_file_removed() {
        let dir = make_content_dir(
            "photobook_source_settings_removed",
            TWO_PAGES,
            Some(r#"{"bookTitle":"Harbor"}"#),
        );
        let mut source = ContentSource::open(&dir, true).unwrap();

        fs::remove_file(dir.join(SETTINGS_FILE)).unwrap();
        let updates = wait_for_updates(&mut source, QUIET_PERIOD);

        // Cleanup
        let _ = fs::remove_dir_all(&dir);

        assert!(updates.is_empty());
        assert_eq!(source.settings().display_title(), "Harbor");
    }

    #[test]
    fn unrelated_files_are_ignored() {
        let dir = make_content_dir("photobook_source_unrelated", TWO_PAGES, None);
        let mut source = ContentSource::open(&dir, true).unwrap();

        fs::write(dir.join("notes.txt"), "draft captions").unwrap();
        let updates = wait_for_updates(&mut source, QUIET_PERIOD);

        // Cleanup
        let _ = fs::remove_dir_all(&dir);

        assert!(updates.is_empty());
    }

    #[test]
    fn poll_changes_is_inert_when_not_watching() {
        let dir = make_content_dir("photobook_source_no_watch", TWO_PAGES, None);
        let mut source = ContentSource::open(&dir, false).unwrap();

        assert!(!source.is_watching());

        fs::write(dir.join(BOOK_FILE), THREE_PAGES).unwrap();
        let updates = wait_for_updates(&mut source, QUIET_PERIOD);

        // Cleanup
        let _ = fs::remove_dir_all(&dir);

        assert!(updates.is_empty());
        assert_eq!(source.pages().len(), 2);
    }

    #[test]
    fn from_parts_does_not_watch() {
        let source = ContentSource::from_parts(Vec::new(), BookSettings::default());
        assert!(!source.is_watching());
        assert!(source.pages().is_empty());
    }
}
