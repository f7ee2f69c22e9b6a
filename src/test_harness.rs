//! Acceptance Test Harness for TUI testing
//!
//! Wraps `TuiApp<TestBackend>` with a virtual clock and convenience methods
//! for simulating readers: key presses, clicks on the controls, drags on the
//! page surface, focus changes and the passage of time.

#![allow(dead_code)] // Not every helper is used by every acceptance test

use crate::model::{BookSettings, Page};
use crate::source::ContentSource;
use crate::view::{ScreenLayout, TuiApp, TuiError, ViewOptions};
use crate::viewer::Viewer;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use std::path::Path;
use std::time::{Duration, Instant};

/// Convert a ratatui buffer to a string, one line per row.
///
/// Trailing whitespace and empty rows are dropped.
pub fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

/// Build `count` simple pages with ids `"1"..="count"`.
pub fn numbered_pages(count: usize) -> Vec<Page> {
    (1..=count)
        .map(|i| Page {
            id: i.to_string(),
            image_url: format!("/images/spread-{}.jpg", i),
            title: format!("Spread {}", i),
            caption: format!("Caption for spread {}", i),
            cta_label: None,
            cta_link: None,
        })
        .collect()
}

/// Test harness for acceptance testing
pub struct AcceptanceTestHarness {
    app: TuiApp<TestBackend>,
    width: u16,
    height: u16,
    now: Instant,
    running: bool,
}

impl AcceptanceTestHarness {
    /// Harness over `count` generated pages with default settings (80x24).
    pub fn with_pages(count: usize) -> Self {
        Self::with_content(numbered_pages(count), BookSettings::default(), ViewOptions::default())
    }

    /// Harness over in-memory content.
    pub fn with_content(pages: Vec<Page>, settings: BookSettings, options: ViewOptions) -> Self {
        let source = ContentSource::from_parts(pages, settings);
        Self::with_source(source, options, 80, 24)
    }

    /// Harness over a content directory on disk.
    pub fn from_content_dir(dir: &Path, watch: bool) -> Result<Self, TuiError> {
        let source = ContentSource::open(dir, watch)?;
        Ok(Self::with_source(source, ViewOptions::default(), 80, 24))
    }

    /// Harness with an explicit source and terminal size.
    pub fn with_source(source: ContentSource, options: ViewOptions, width: u16, height: u16) -> Self {
        let terminal = Terminal::new(TestBackend::new(width, height))
            .expect("TestBackend terminal never fails");
        let now = Instant::now();
        let app = TuiApp::new_for_test(terminal, source, options, now);

        Self {
            app,
            width,
            height,
            now,
            running: true,
        }
    }

    // ===== Time =====

    /// Current virtual time.
    pub fn now(&self) -> Instant {
        self.now
    }

    /// Let `ms` milliseconds pass, firing timers at each deadline on the way
    /// like the real loop would.
    ///
    /// Returns the number of automatic advances.
    pub fn advance_ms(&mut self, ms: u64) -> usize {
        let target = self.now + Duration::from_millis(ms);
        let mut advances = 0;

        while let Some(deadline) = self.app.viewer().next_deadline() {
            if deadline > target {
                break;
            }
            self.now = self.now.max(deadline);
            advances += self.app.tick_test(self.now);
        }

        self.now = target;
        advances += self.app.tick_test(self.now);
        advances
    }

    /// Wait in real time, up to `timeout_ms`, for the content watcher to
    /// deliver a change and apply it. Virtual time does not move.
    ///
    /// Returns true if the viewer received reloaded content.
    pub fn wait_for_reload(&mut self, timeout_ms: u64) -> bool {
        let deadline = Instant::now() + Duration::from_millis(timeout_ms);
        loop {
            if self.app.poll_source_test(self.now) {
                return true;
            }
            if Instant::now() >= deadline {
                return false;
            }
            std::thread::sleep(Duration::from_millis(20));
        }
    }

    // ===== Keyboard =====

    /// Send a single key event. Returns true if the app quit.
    pub fn send_key(&mut self, key: KeyCode) -> bool {
        self.send_key_with_mods(key, KeyModifiers::NONE)
    }

    /// Send key with modifiers (e.g., Ctrl+C). Returns true if the app quit.
    pub fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> bool {
        if !self.running {
            return true;
        }

        let quit = self.app.handle_key_test(KeyEvent::new(key, mods), self.now);
        if quit {
            self.running = false;
        }
        quit
    }

    // ===== Mouse =====

    fn layout(&self) -> ScreenLayout {
        ScreenLayout::compute(Rect::new(0, 0, self.width, self.height))
    }

    fn mouse(&mut self, kind: MouseEventKind, column: u16, row: u16) {
        let event = MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        };
        self.app.handle_mouse_test(event, self.now);
    }

    /// Left-click at a cell.
    pub fn click_at(&mut self, column: u16, row: u16) {
        self.mouse(MouseEventKind::Down(MouseButton::Left), column, row);
        self.mouse(MouseEventKind::Up(MouseButton::Left), column, row);
    }

    /// Click the "previous" control.
    pub fn click_previous(&mut self) {
        let button = self.layout().previous_button;
        self.click_at(button.x, button.y);
    }

    /// Click the "next" control.
    pub fn click_next(&mut self) {
        let button = self.layout().next_button;
        self.click_at(button.x, button.y);
    }

    /// Click the middle of the page surface.
    pub fn tap_surface(&mut self) {
        let surface = self.layout().surface;
        self.click_at(surface.x + surface.width / 2, surface.y + surface.height / 2);
    }

    /// Press on the surface at `from_x`, drag through `to_x`, release.
    pub fn drag(&mut self, from_x: u16, to_x: u16) {
        let row = {
            let surface = self.layout().surface;
            surface.y + surface.height / 2
        };
        self.mouse(MouseEventKind::Down(MouseButton::Left), from_x, row);
        self.mouse(MouseEventKind::Drag(MouseButton::Left), to_x, row);
        self.mouse(MouseEventKind::Up(MouseButton::Left), to_x, row);
    }

    // ===== Focus =====

    /// Terminal lost focus (page hidden).
    pub fn focus_lost(&mut self) {
        self.app.handle_focus_test(false, self.now);
    }

    /// Terminal regained focus (page visible).
    pub fn focus_gained(&mut self) {
        self.app.handle_focus_test(true, self.now);
    }

    // ===== Inspection =====

    /// Viewer core for assertions.
    pub fn viewer(&self) -> &Viewer {
        self.app.viewer()
    }

    /// Index of the page on screen.
    pub fn current_index(&self) -> usize {
        self.app.viewer().current_index()
    }

    /// Whether the help overlay is open.
    pub fn help_visible(&self) -> bool {
        self.app.help_visible()
    }

    /// Check if app is still running (didn't quit)
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// How long the real loop would sleep right now.
    pub fn poll_timeout(&self) -> Duration {
        self.app.poll_timeout_test(self.now)
    }

    /// Render the current frame to a string.
    pub fn render_to_string(&mut self) -> String {
        self.app
            .render_test()
            .expect("Rendering should succeed in test harness");
        buffer_to_string(self.app.terminal().backend().buffer())
    }

    /// Tear the app down like the real shell does on exit.
    pub fn close(self) {
        self.app.close();
    }
}
