//! Reading content files from disk.
//!
//! Thin wrappers that turn I/O and decode failures into [`ContentError`]s
//! carrying the offending path.

use crate::model::{BookSettings, ContentError, Page};
use serde::de::DeserializeOwned;
use std::path::Path;

/// Load the ordered page sequence from a `book.json` file.
///
/// # Errors
///
/// Returns `ContentError::FileNotFound` if the file does not exist,
/// `ContentError::Io` if it cannot be read, and `ContentError::InvalidJson`
/// if it is not a JSON array of page records.
pub fn load_book(path: &Path) -> Result<Vec<Page>, ContentError> {
    read_json(path)
}

/// Load book settings from a `settings.json` file.
///
/// Returns `Ok(None)` if the file does not exist (defaults apply).
///
/// # Errors
///
/// Returns `ContentError::Io` or `ContentError::InvalidJson` if the file
/// exists but cannot be read or decoded.
pub fn load_settings(path: &Path) -> Result<Option<BookSettings>, ContentError> {
    if !path.exists() {
        return Ok(None);
    }
    read_json(path).map(Some)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ContentError> {
    if !path.exists() {
        return Err(ContentError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let contents = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|e| ContentError::InvalidJson {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
