//! Domain model types (pure).
//!
//! Content records as they appear in the JSON files, plus the error taxonomy.

pub mod error;
pub mod key_action;
pub mod page;
pub mod settings;

// Re-export for convenience
pub use error::{AppError, ContentError};
pub use key_action::KeyAction;
pub use page::{CallToAction, Page};
pub use settings::BookSettings;
