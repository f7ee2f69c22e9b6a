//! Error types for photobook.
//!
//! Errors are structured with `thiserror` and compose via `?` and `From`.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level application error
//!   - [`ContentError`] - Reading or decoding `book.json` / `settings.json`
//!   - [`ConfigError`](crate::config::ConfigError) - Config file failures
//!   - [`LoggingError`](crate::logging::LoggingError) - Tracing setup failures
//!   - `std::io::Error` - Terminal failures
//!
//! # Recovery Strategy
//!
//! Content errors at startup are fatal: there is no book to show. Content
//! errors while watching for changes are **non-fatal**: the previous content
//! stays on screen and the failure is logged. Degenerate input such as an
//! empty book is not an error at all; the viewer reports "nothing to
//! display" instead.

use crate::config::ConfigError;
use crate::logging::LoggingError;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// Content files could not be loaded.
    #[error("Failed to load content: {0}")]
    Content(#[from] ContentError),

    /// Configuration file could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Logging could not be initialized.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// Terminal or TUI rendering error.
    ///
    /// Fatal: without a working terminal the viewer cannot run.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors encountered when reading content files.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The content file does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use photobook::model::error::ContentError;
    ///
    /// let err = ContentError::FileNotFound {
    ///     path: PathBuf::from("content/book.json"),
    /// };
    /// assert!(err.to_string().contains("content/book.json"));
    /// ```
    #[error("File not found: {path}")]
    FileNotFound {
        /// Path that was attempted.
        path: PathBuf,
    },

    /// The file exists but could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON of the expected shape.
    #[error("Invalid JSON in {path}: {message}")]
    InvalidJson {
        /// Path with invalid content.
        path: PathBuf,
        /// Decoder error details (includes line and column).
        message: String,
    },

    /// The content directory could not be watched for changes.
    ///
    /// Running with `--no-watch` avoids this.
    #[error("Cannot watch {path} for changes: {message}")]
    Watch {
        /// Directory that was to be watched.
        path: PathBuf,
        /// Watcher error details.
        message: String,
    },
}

impl ContentError {
    /// Path of the file the error refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            ContentError::FileNotFound { path }
            | ContentError::Io { path, .. }
            | ContentError::InvalidJson { path, .. }
            | ContentError::Watch { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_json_message_includes_path_and_details() {
        let err = ContentError::InvalidJson {
            path: PathBuf::from("content/book.json"),
            message: "expected value at line 1 column 1".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("content/book.json"));
        assert!(text.contains("line 1 column 1"));
    }

    #[test]
    fn content_error_converts_into_app_error() {
        fn load() -> Result<(), AppError> {
            Err(ContentError::FileNotFound {
                path: PathBuf::from("missing.json"),
            })?;
            Ok(())
        }

        let err = load().expect_err("should fail");
        assert!(matches!(err, AppError::Content(_)));
        assert!(err.to_string().starts_with("Failed to load content"));
    }

    #[test]
    fn path_accessor_covers_every_variant() {
        let io = ContentError::Io {
            path: PathBuf::from("a.json"),
            source: std::io::Error::other("boom"),
        };
        assert_eq!(io.path(), std::path::Path::new("a.json"));

        let watch = ContentError::Watch {
            path: PathBuf::from("content"),
            message: "inotify limit reached".to_string(),
        };
        assert_eq!(watch.path(), std::path::Path::new("content"));
        assert!(watch.to_string().contains("inotify limit reached"));
    }
}
