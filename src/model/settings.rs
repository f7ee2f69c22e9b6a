//! Book settings from `settings.json`.

use crate::viewer::scheduler::{DEFAULT_AUTOPLAY_INTERVAL, DEFAULT_INACTIVITY_TIMEOUT};
use crate::viewer::TimingConfig;
use serde::Deserialize;

/// Title shown when the settings file does not provide one.
pub const DEFAULT_BOOK_TITLE: &str = "Photo Book";

/// Site copy and timing parameters.
///
/// Unknown keys are ignored so the same file the web site reads can be used
/// unchanged. Timing values are kept raw; see [`BookSettings::timing`].
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookSettings {
    /// Book title.
    #[serde(default)]
    pub book_title: String,
    /// Subtitle line.
    #[serde(default)]
    pub subtitle: String,
    /// Raw autoplay interval in milliseconds.
    #[serde(default, rename = "autoplayIntervalMs")]
    pub autoplay_interval_raw: Option<f64>,
    /// Raw inactivity timeout in milliseconds.
    #[serde(default, rename = "inactivityTimeoutMs")]
    pub inactivity_timeout_raw: Option<f64>,
    /// Primary call-to-action label.
    #[serde(default)]
    pub primary_cta_label: Option<String>,
    /// Primary call-to-action link.
    #[serde(default)]
    pub primary_cta_link: Option<String>,
    /// Longer description of the book.
    #[serde(default)]
    pub details_text: Option<String>,
    /// Selling points.
    #[serde(default)]
    pub bullet_points: Vec<String>,
}

impl BookSettings {
    /// Title to display, falling back to [`DEFAULT_BOOK_TITLE`].
    pub fn display_title(&self) -> &str {
        match self.book_title.trim() {
            "" => DEFAULT_BOOK_TITLE,
            title => title,
        }
    }

    /// Autoplay interval in milliseconds.
    ///
    /// Missing or zero falls back to the default; negative becomes 0 and is
    /// later clamped by [`TimingConfig`].
    pub fn autoplay_interval_ms(&self) -> u64 {
        resolve_ms(self.autoplay_interval_raw, millis(DEFAULT_AUTOPLAY_INTERVAL))
    }

    /// Inactivity timeout in milliseconds. Same fallback rules as the interval.
    pub fn inactivity_timeout_ms(&self) -> u64 {
        resolve_ms(self.inactivity_timeout_raw, millis(DEFAULT_INACTIVITY_TIMEOUT))
    }

    /// Timing configuration from this file alone.
    pub fn timing(&self) -> TimingConfig {
        self.timing_with_overrides(None, None)
    }

    /// Timing configuration with optional overrides taking precedence.
    pub fn timing_with_overrides(
        &self,
        interval_ms: Option<u64>,
        inactivity_ms: Option<u64>,
    ) -> TimingConfig {
        TimingConfig::from_millis(
            interval_ms.unwrap_or_else(|| self.autoplay_interval_ms()),
            inactivity_ms.unwrap_or_else(|| self.inactivity_timeout_ms()),
        )
    }
}

fn millis(duration: std::time::Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

fn resolve_ms(raw: Option<f64>, default: u64) -> u64 {
    match raw {
        None => default,
        Some(value) if value == 0.0 || value.is_nan() => default,
        Some(value) if value < 0.0 => 0,
        Some(value) => value as u64,
    }
}
