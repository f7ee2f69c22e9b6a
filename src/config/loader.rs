//! Configuration file loading with precedence handling.

use crate::viewer::DEFAULT_SWIPE_MIN_DISTANCE;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "PHOTOBOOK_CONFIG";

/// Environment variable overriding the content directory.
pub const CONTENT_DIR_ENV: &str = "PHOTOBOOK_CONTENT_DIR";

/// Content directory used when nothing else is configured.
pub const DEFAULT_CONTENT_DIR: &str = "content";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional. Corresponds to `~/.config/photobook/config.toml`:
///
/// ```toml
/// content_dir = "/srv/photobook/content"
/// watch = true
/// autoplay_interval_ms = 4000
/// inactivity_timeout_ms = 8000
/// swipe_min_distance = 6
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Directory holding `book.json` and `settings.json`.
    #[serde(default)]
    pub content_dir: Option<PathBuf>,

    /// Reload content files when they change.
    #[serde(default)]
    pub watch: Option<bool>,

    /// Autoplay interval override in milliseconds.
    #[serde(default)]
    pub autoplay_interval_ms: Option<u64>,

    /// Inactivity timeout override in milliseconds.
    #[serde(default)]
    pub inactivity_timeout_ms: Option<u64>,

    /// Minimum horizontal drag, in cells, that counts as a swipe.
    #[serde(default)]
    pub swipe_min_distance: Option<u32>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
/// Timing fields stay optional: when unset, the book's `settings.json`
/// decides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Content directory.
    pub content_dir: PathBuf,
    /// Watch content files for changes.
    pub watch: bool,
    /// Autoplay interval override in milliseconds.
    pub autoplay_interval_ms: Option<u64>,
    /// Inactivity timeout override in milliseconds.
    pub inactivity_timeout_ms: Option<u64>,
    /// Swipe threshold in cells.
    pub swipe_min_distance: u32,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from(DEFAULT_CONTENT_DIR),
            watch: true,
            autoplay_interval_ms: None,
            inactivity_timeout_ms: None,
            swipe_min_distance: DEFAULT_SWIPE_MIN_DISTANCE,
            log_file_path: default_log_path(),
        }
    }
}

/// Overrides collected from the command line.
///
/// `None` means the flag was not given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// Positional content directory.
    pub content_dir: Option<PathBuf>,
    /// `--interval`.
    pub autoplay_interval_ms: Option<u64>,
    /// `--inactivity`.
    pub inactivity_timeout_ms: Option<u64>,
    /// `--swipe-distance`.
    pub swipe_min_distance: Option<u32>,
    /// `--no-watch` was given.
    pub no_watch: bool,
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/photobook/photobook.log` on Unix-like systems,
/// or the platform equivalent. Falls back to the current directory if no
/// state directory is known.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("photobook").join("photobook.log")
    } else {
        PathBuf::from("photobook.log")
    }
}

/// Resolve default config file path.
///
/// Returns `~/.config/photobook/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("photobook").join("config.toml"))
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `PHOTOBOOK_CONFIG` environment variable
/// 3. Default path `~/.config/photobook/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_PATH_ENV) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        content_dir: config.content_dir.unwrap_or(defaults.content_dir),
        watch: config.watch.unwrap_or(defaults.watch),
        autoplay_interval_ms: config.autoplay_interval_ms,
        inactivity_timeout_ms: config.inactivity_timeout_ms,
        swipe_min_distance: config
            .swipe_min_distance
            .unwrap_or(defaults.swipe_min_distance),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `PHOTOBOOK_CONTENT_DIR`: Override content directory
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(dir) = std::env::var(CONTENT_DIR_ENV) {
        if !dir.is_empty() {
            config.content_dir = PathBuf::from(dir);
        }
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only flags the user actually gave are applied.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(mut config: ResolvedConfig, cli: CliOverrides) -> ResolvedConfig {
    if let Some(dir) = cli.content_dir {
        config.content_dir = dir;
    }

    if let Some(interval) = cli.autoplay_interval_ms {
        config.autoplay_interval_ms = Some(interval);
    }

    if let Some(timeout) = cli.inactivity_timeout_ms {
        config.inactivity_timeout_ms = Some(timeout);
    }

    if let Some(distance) = cli.swipe_min_distance {
        config.swipe_min_distance = distance;
    }

    if cli.no_watch {
        config.watch = false;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
