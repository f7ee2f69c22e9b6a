//! Page records from `book.json`.

use serde::Deserialize;

/// One page of the book: an image with a title, caption and optional
/// call-to-action.
///
/// Read-only to the viewer core, which only ever indexes into the sequence.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// Stable identifier.
    pub id: String,
    /// Image reference (URL or path).
    pub image_url: String,
    /// Page title.
    pub title: String,
    /// Caption text.
    #[serde(default)]
    pub caption: String,
    /// Call-to-action label.
    #[serde(default)]
    pub cta_label: Option<String>,
    /// Call-to-action target.
    #[serde(default)]
    pub cta_link: Option<String>,
}

/// A call-to-action with both label and link present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallToAction<'a> {
    /// Button label.
    pub label: &'a str,
    /// Link target.
    pub link: &'a str,
}

impl Page {
    /// The page's call-to-action, if both label and link are non-empty.
    pub fn call_to_action(&self) -> Option<CallToAction<'_>> {
        let label = self.cta_label.as_deref().filter(|s| !s.is_empty())?;
        let link = self.cta_link.as_deref().filter(|s| !s.is_empty())?;
        Some(CallToAction { label, link })
    }
}
