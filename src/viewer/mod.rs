//! Paged viewer core (pure).
//!
//! Combines page navigation, the autoplay scheduler and the input arbiter
//! behind a single [`Viewer`]. The viewer never reads a clock: the shell
//! passes `now` into every call and polls [`Viewer::tick`] when
//! [`Viewer::next_deadline`] is reached.
//!
//! ```
//! use photobook::viewer::{InputEvent, TimingConfig, Viewer};
//! use std::time::{Duration, Instant};
//!
//! let t0 = Instant::now();
//! let mut viewer = Viewer::mount(3, TimingConfig::from_millis(3000, 5000), t0);
//!
//! viewer.tick(t0 + Duration::from_millis(3000));
//! assert_eq!(viewer.current_index(), 1);
//!
//! viewer.handle_input(InputEvent::PreviousClicked, t0 + Duration::from_millis(3100));
//! assert_eq!(viewer.current_index(), 0);
//! assert!(!viewer.is_autoplaying());
//!
//! viewer.unmount();
//! ```

pub mod arbiter;
pub mod gesture;
pub mod navigation;
pub mod scheduler;

pub use arbiter::{arbitrate, ArbiterOutput, InputEvent, ViewerKey};
pub use gesture::{Swipe, SwipeRecognizer, DEFAULT_SWIPE_MIN_DISTANCE};
pub use navigation::{NavCommand, Navigator};
pub use scheduler::{AutoplayPhase, AutoplayScheduler, TimingConfig, MIN_TIMER_INTERVAL};

use std::time::Instant;
use tracing::debug;

/// Point-in-time snapshot of the viewer's mutable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewerState {
    /// Index of the page currently shown.
    pub current_index: usize,
    /// Logical autoplay flag (cleared by interaction, restored after inactivity).
    pub autoplay_active: bool,
    /// Time of the most recent interaction.
    pub last_interaction_at: Option<Instant>,
}

/// Interactive paged viewer.
///
/// Created at mount, consumed at unmount. All timers live inside the
/// scheduler it owns, so dropping or unmounting the viewer leaves nothing
/// behind that could fire later.
#[derive(Debug, Clone)]
pub struct Viewer {
    navigator: Navigator,
    scheduler: AutoplayScheduler,
    recognizer: SwipeRecognizer,
}

impl Viewer {
    /// Mount a viewer over `page_count` pages, starting on the first page.
    pub fn mount(page_count: usize, timing: TimingConfig, now: Instant) -> Self {
        debug!(page_count, ?timing, "Viewer mounted");
        Self {
            navigator: Navigator::new(page_count),
            scheduler: AutoplayScheduler::mount(page_count, timing, now),
            recognizer: SwipeRecognizer::default(),
        }
    }

    /// Use a custom minimum swipe distance.
    pub fn with_swipe_distance(mut self, min_distance: u32) -> Self {
        self.recognizer = SwipeRecognizer::new(min_distance);
        self
    }

    /// Handle one user input event.
    ///
    /// Returns `true` if the current page changed.
    pub fn handle_input(&mut self, event: InputEvent, now: Instant) -> bool {
        let before = self.navigator.current_index();

        for output in arbitrate(&mut self.recognizer, event) {
            match output {
                ArbiterOutput::MarkInteraction => self.scheduler.mark_interaction(now),
                ArbiterOutput::Navigate(command) => self.navigator.apply(command),
            }
        }

        before != self.navigator.current_index()
    }

    /// Report a visibility change (terminal focus, tab visibility).
    ///
    /// Bypasses the arbiter: this is not an interaction.
    pub fn set_visible(&mut self, visible: bool, now: Instant) {
        self.scheduler.set_visible(visible, now);
    }

    /// Fire due timers and apply any automatic advances.
    ///
    /// Returns the number of advances applied.
    pub fn tick(&mut self, now: Instant) -> usize {
        let advances = self.scheduler.poll(now);
        for _ in 0..advances {
            self.navigator.advance();
        }
        advances
    }

    /// Replace the page sequence with one of `page_count` pages.
    ///
    /// The current index is clamped into range and autoplay re-evaluated.
    pub fn replace_pages(&mut self, page_count: usize, now: Instant) {
        debug!(
            old = self.navigator.page_count(),
            new = page_count,
            "Page sequence replaced"
        );
        self.navigator.set_page_count(page_count);
        self.recognizer.cancel();
        self.scheduler.set_page_count(page_count, now);
    }

    /// Replace the timing configuration. Armed deadlines are not moved.
    pub fn set_timing(&mut self, timing: TimingConfig) {
        self.scheduler.set_timing(timing);
    }

    /// Jump straight to a page. Out-of-range requests are ignored.
    ///
    /// Does not count as an interaction on its own.
    pub fn jump_to(&mut self, index: usize) -> bool {
        self.navigator.jump_to(index)
    }

    /// Index of the page currently shown.
    pub fn current_index(&self) -> usize {
        self.navigator.current_index()
    }

    /// Number of pages.
    pub fn page_count(&self) -> usize {
        self.navigator.page_count()
    }

    /// True when there is nothing to display.
    pub fn is_empty(&self) -> bool {
        self.navigator.page_count() == 0
    }

    /// Whether previous/next controls should be enabled.
    pub fn controls_enabled(&self) -> bool {
        self.navigator.can_navigate()
    }

    /// Human-readable position, e.g. `"Page 2 of 5"`. `None` when empty.
    pub fn indicator(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        Some(format!(
            "Page {} of {}",
            self.navigator.current_index() + 1,
            self.navigator.page_count()
        ))
    }

    /// True while the advance timer is armed.
    pub fn is_autoplaying(&self) -> bool {
        self.scheduler.is_running()
    }

    /// Current autoplay phase.
    pub fn autoplay_phase(&self) -> AutoplayPhase {
        self.scheduler.phase()
    }

    /// Earliest armed timer deadline.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.next_deadline()
    }

    /// Current timing configuration.
    pub fn timing(&self) -> TimingConfig {
        self.scheduler.timing()
    }

    /// Snapshot of the mutable viewer state.
    pub fn state(&self) -> ViewerState {
        ViewerState {
            current_index: self.navigator.current_index(),
            autoplay_active: self.scheduler.autoplay_wanted(),
            last_interaction_at: self.scheduler.last_interaction_at(),
        }
    }

    /// Tear the viewer down, cancelling every armed timer.
    pub fn unmount(self) {
        debug!(
            index = self.navigator.current_index(),
            "Viewer unmounted"
        );
        self.scheduler.teardown();
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "viewer_tests.rs"]
mod tests;
