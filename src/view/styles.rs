//! Styling for the book view.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== BookStyles =====

/// Styles for each element of the book view.
///
/// Without colors, emphasis falls back to modifiers (bold, dim, underline)
/// so enabled and disabled controls stay distinguishable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookStyles {
    /// Book title in the header.
    pub book_title: Style,
    /// Subtitle under the book title.
    pub subtitle: Style,
    /// Page title.
    pub page_title: Style,
    /// Page caption.
    pub caption: Style,
    /// Image reference line.
    pub image: Style,
    /// Call-to-action link.
    pub call_to_action: Style,
    /// Enabled previous/next controls.
    pub button: Style,
    /// Disabled previous/next controls.
    pub button_disabled: Style,
    /// Page indicator between the controls.
    pub indicator: Style,
    /// Hints and secondary text.
    pub muted: Style,
    /// Autoplay badge while cycling.
    pub playing: Style,
    /// Autoplay badge while suspended.
    pub paused: Style,
    /// Border of the page surface.
    pub border: Style,
}

impl BookStyles {
    /// Create styles with the given color configuration.
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                book_title: Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                subtitle: Style::default().fg(Color::Gray),
                page_title: Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
                caption: Style::default().fg(Color::White),
                image: Style::default().fg(Color::DarkGray),
                call_to_action: Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::UNDERLINED),
                button: Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                button_disabled: Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::DIM),
                indicator: Style::default().fg(Color::White),
                muted: Style::default().fg(Color::DarkGray),
                playing: Style::default().fg(Color::Green),
                paused: Style::default().fg(Color::Yellow),
                border: Style::default().fg(Color::Cyan),
            }
        } else {
            Self {
                book_title: Style::default().add_modifier(Modifier::BOLD),
                subtitle: Style::default(),
                page_title: Style::default().add_modifier(Modifier::BOLD),
                caption: Style::default(),
                image: Style::default().add_modifier(Modifier::DIM),
                call_to_action: Style::default().add_modifier(Modifier::UNDERLINED),
                button: Style::default().add_modifier(Modifier::BOLD),
                button_disabled: Style::default().add_modifier(Modifier::DIM),
                indicator: Style::default(),
                muted: Style::default().add_modifier(Modifier::DIM),
                playing: Style::default(),
                paused: Style::default(),
                border: Style::default(),
            }
        }
    }
}

impl Default for BookStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }
}

// ===== Tests =====
