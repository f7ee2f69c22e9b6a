//! TUI rendering and the terminal event loop (impure shell).
//!
//! Terminal events become viewer input here: arrow keys, clicks on the
//! controls, drags on the page surface and terminal focus changes. The loop
//! sleeps until the viewer's next timer deadline or the next terminal event,
//! whichever comes first.

pub mod constants;
mod controls;
mod help;
pub mod layout;
pub mod page_panel;
pub mod pointer;
pub mod styles;

pub use help::render_help_overlay;
pub use layout::{render_layout, FrameContext, HitTarget, ScreenLayout};
pub use pointer::PointerTracker;
pub use styles::{BookStyles, ColorConfig};

use crate::config::keybindings::KeyBindings;
use crate::model::{AppError, ContentError, KeyAction};
use crate::source::{ContentSource, ContentUpdate};
use crate::viewer::{InputEvent, TimingConfig, Viewer, ViewerKey};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info};

/// Longest the loop sleeps when nothing is scheduled.
pub const MAX_IDLE_WAIT: Duration = Duration::from_secs(60);

/// Longest the loop sleeps while the content directory is watched.
///
/// The watcher delivers changes on a channel the terminal poll cannot wait
/// on, so the loop wakes at this rate to drain it.
pub const WATCH_DRAIN_INTERVAL: Duration = Duration::from_millis(500);

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Content could not be loaded
    #[error("Content error: {0}")]
    Content(#[from] ContentError),

    /// Application error
    #[error("Application error: {0}")]
    App(#[from] AppError),
}

/// Options resolved from config file, environment and CLI.
///
/// Timing overrides stay optional so a reloaded `settings.json` still
/// decides whatever the user did not pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewOptions {
    /// Autoplay interval override in milliseconds.
    pub autoplay_interval_ms: Option<u64>,
    /// Inactivity timeout override in milliseconds.
    pub inactivity_timeout_ms: Option<u64>,
    /// Swipe threshold in cells.
    pub swipe_min_distance: u32,
    /// Disable colors.
    pub no_color: bool,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            autoplay_interval_ms: None,
            inactivity_timeout_ms: None,
            swipe_min_distance: crate::viewer::DEFAULT_SWIPE_MIN_DISTANCE,
            no_color: false,
        }
    }
}

impl ViewOptions {
    /// Timing from `source`'s settings with these overrides applied.
    pub fn timing_for(&self, source: &ContentSource) -> TimingConfig {
        source
            .settings()
            .timing_with_overrides(self.autoplay_interval_ms, self.inactivity_timeout_ms)
    }
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    source: ContentSource,
    viewer: Viewer,
    options: ViewOptions,
    key_bindings: KeyBindings,
    styles: BookStyles,
    pointer: PointerTracker,
    help_visible: bool,
    /// Layout of the last rendered frame (for mouse hit-testing)
    last_layout: Option<ScreenLayout>,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen, mouse capture and
    /// focus reporting, then mounts the viewer over the loaded pages.
    pub fn new(source: ContentSource, options: ViewOptions) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(crossterm::event::EnableMouseCapture)?;
        stdout.execute(crossterm::event::EnableFocusChange)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self::assemble(terminal, source, options, Instant::now()))
    }

    /// Run the main event loop
    ///
    /// Returns when the user quits (q, Esc or Ctrl+C).
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            let timeout = self.poll_timeout(Instant::now());
            let event = if event::poll(timeout)? {
                Some(event::read()?)
            } else {
                None
            };

            // Timers due before the event must fire before it is handled
            let now = Instant::now();
            let mut dirty = self.viewer.tick(now) > 0;
            dirty |= self.poll_source(now);

            match event {
                Some(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if self.handle_key(key, now) {
                        return Ok(());
                    }
                    dirty = true;
                }
                Some(Event::Mouse(mouse)) => {
                    self.handle_mouse(mouse, now);
                    dirty = true;
                }
                Some(Event::FocusGained) => {
                    self.handle_focus(true, now);
                    dirty = true;
                }
                Some(Event::FocusLost) => {
                    self.handle_focus(false, now);
                    dirty = true;
                }
                Some(Event::Resize(width, height)) => {
                    debug!(width, height, "Terminal resized");
                    self.last_layout = None;
                    dirty = true;
                }
                _ => {}
            }

            if dirty {
                self.draw()?;
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    fn assemble(
        terminal: Terminal<B>,
        source: ContentSource,
        options: ViewOptions,
        now: Instant,
    ) -> Self {
        let viewer = Viewer::mount(source.pages().len(), options.timing_for(&source), now)
            .with_swipe_distance(options.swipe_min_distance);

        Self {
            terminal,
            source,
            viewer,
            options,
            key_bindings: KeyBindings::default(),
            styles: BookStyles::with_color_config(ColorConfig::from_env_and_args(
                options.no_color,
            )),
            pointer: PointerTracker::default(),
            help_visible: false,
            last_layout: None,
        }
    }

    /// How long the loop may sleep at `now`.
    fn poll_timeout(&self, now: Instant) -> Duration {
        let limit = if self.source.is_watching() {
            WATCH_DRAIN_INTERVAL
        } else {
            MAX_IDLE_WAIT
        };

        match self.viewer.next_deadline() {
            Some(deadline) => deadline.saturating_duration_since(now).min(limit),
            None => limit,
        }
    }

    /// Apply content reloads to the viewer.
    ///
    /// Returns true if anything changed.
    fn poll_source(&mut self, now: Instant) -> bool {
        let updates = self.source.poll_changes();

        for update in &updates {
            match update {
                ContentUpdate::Book => {
                    info!(
                        path = ?self.source.book_path(),
                        pages = self.source.pages().len(),
                        "Applying reloaded pages"
                    );
                    self.pointer.reset();
                    self.viewer.replace_pages(self.source.pages().len(), now);
                }
                ContentUpdate::Settings => {
                    let timing = self.options.timing_for(&self.source);
                    info!(?timing, "Applying reloaded settings");
                    self.viewer.set_timing(timing);
                }
            }
        }

        !updates.is_empty()
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        // Ctrl+C always quits, even if rebound
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        // Escape closes the help overlay before it can quit
        if key.code == KeyCode::Esc && self.help_visible {
            self.help_visible = false;
            return false;
        }

        let Some(action) = self.key_bindings.get(key) else {
            self.viewer.handle_input(InputEvent::Key(ViewerKey::Other), now);
            return false;
        };

        // Help overlay swallows navigation
        if self.help_visible && action.is_navigation() {
            return false;
        }

        match action {
            KeyAction::Previous => {
                self.viewer.handle_input(InputEvent::Key(ViewerKey::Left), now);
            }
            KeyAction::Next => {
                self.viewer.handle_input(InputEvent::Key(ViewerKey::Right), now);
            }
            KeyAction::ToggleHelp => self.help_visible = !self.help_visible,
            KeyAction::Quit => return true,
        }

        false
    }

    /// Handle a single mouse event
    fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        if self.help_visible {
            return;
        }

        let layout = match self.last_layout {
            Some(layout) => layout,
            None => {
                let area = self
                    .terminal
                    .size()
                    .map(|size| Rect::new(0, 0, size.width, size.height))
                    .unwrap_or_default();
                ScreenLayout::compute(area)
            }
        };

        for event in self.pointer.translate(mouse, &layout) {
            self.viewer.handle_input(event, now);
        }
    }

    /// Terminal focus stands in for page visibility.
    fn handle_focus(&mut self, gained: bool, now: Instant) {
        debug!(gained, "Terminal focus changed");
        if !gained {
            self.pointer.reset();
        }
        self.viewer.set_visible(gained, now);
    }

    /// Render the current state
    fn draw(&mut self) -> Result<(), TuiError> {
        let source = &self.source;
        let viewer = &self.viewer;
        let context = FrameContext {
            styles: &self.styles,
            help_visible: self.help_visible,
        };

        let mut layout = None;
        self.terminal.draw(|frame| {
            layout = Some(render_layout(frame, source, viewer, context));
        })?;
        self.last_layout = layout;

        Ok(())
    }

    /// Unmount the viewer, cancelling its timers. Consumes the app.
    pub fn close(self) {
        self.viewer.unmount();
    }
}

// ===== Test Helpers =====
//
// Test-only entry points used by the acceptance harness. Time is passed in
// explicitly so tests control the clock.

#[cfg(test)]
#[allow(dead_code)] // Not every helper is used by every test module
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp for testing without touching the real terminal.
    pub(crate) fn new_for_test(
        terminal: Terminal<B>,
        source: ContentSource,
        options: ViewOptions,
        now: Instant,
    ) -> Self {
        Self::assemble(terminal, source, options, now)
    }

    /// Viewer state for assertions.
    pub(crate) fn viewer(&self) -> &Viewer {
        &self.viewer
    }

    /// Whether the help overlay is open.
    pub(crate) fn help_visible(&self) -> bool {
        self.help_visible
    }

    /// Handle a single keyboard event. Returns true if app should quit.
    pub(crate) fn handle_key_test(&mut self, key: KeyEvent, now: Instant) -> bool {
        self.handle_key(key, now)
    }

    /// Handle a single mouse event.
    pub(crate) fn handle_mouse_test(&mut self, mouse: MouseEvent, now: Instant) {
        self.handle_mouse(mouse, now)
    }

    /// Handle a focus change.
    pub(crate) fn handle_focus_test(&mut self, gained: bool, now: Instant) {
        self.handle_focus(gained, now)
    }

    /// One loop wake without an event: fire timers and apply reloads.
    ///
    /// Returns the number of automatic advances.
    pub(crate) fn tick_test(&mut self, now: Instant) -> usize {
        let advances = self.viewer.tick(now);
        self.poll_source(now);
        advances
    }

    /// Apply pending content reloads. Returns true if anything changed.
    pub(crate) fn poll_source_test(&mut self, now: Instant) -> bool {
        self.poll_source(now)
    }

    /// Sleep the loop would choose at `now`.
    pub(crate) fn poll_timeout_test(&self, now: Instant) -> Duration {
        self.poll_timeout(now)
    }

    /// Render a single frame.
    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    /// Terminal for buffer inspection.
    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// Initialize and run the TUI application over `source`.
///
/// Handles terminal setup, runs the event loop and always tears the viewer
/// down before restoring the terminal, even when the loop fails.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_source(source: ContentSource, options: ViewOptions) -> Result<(), TuiError> {
    let mut app = TuiApp::new(source, options)?;

    let result = app.run();

    app.close();
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode, focus reporting and mouse capture, and leaves the
/// alternate screen.
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(crossterm::event::DisableFocusChange)?;
    io::stdout().execute(crossterm::event::DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
