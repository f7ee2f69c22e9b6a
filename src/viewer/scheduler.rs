//! Autoplay scheduler.
//!
//! Owns the two timers that drive autoplay: a recurring "advance" timer and
//! a one-shot "resume" timer armed after every interaction. Timers are plain
//! deadlines held in `Option` slots, so arming a timer replaces any pending
//! instance of the same kind and there is never more than one of each.
//!
//! The scheduler never reads a clock. Every operation takes `now`, and
//! [`AutoplayScheduler::poll`] fires whatever is due at that instant. This
//! keeps the state machine deterministic under virtual time in tests.
//!
//! # State Machine
//!
//! - **Running**: the advance timer is armed.
//! - **Suspended**: no advance timer. Either the resume countdown is armed
//!   (interaction) or the view is hidden and nothing is armed.
//!
//! Whether the advance timer should be armed is decided in one place,
//! [`AutoplayScheduler::should_run`], combining two orthogonal flags
//! (`autoplay_wanted`, `visible`) with the page count. Every event ends by
//! reconciling the armed timer with that predicate.
//!
//! The inactivity countdown keeps running while hidden. If it elapses while
//! hidden, autoplay is wanted again but stays unarmed until the view becomes
//! visible, at which point it restarts without further delay.

use std::time::{Duration, Instant};
use tracing::debug;

/// Smallest delay the scheduler will ever arm.
///
/// Zero or tiny intervals coming from configuration are clamped up to this.
pub const MIN_TIMER_INTERVAL: Duration = Duration::from_millis(50);

/// Default time between automatic page turns.
pub const DEFAULT_AUTOPLAY_INTERVAL: Duration = Duration::from_millis(3000);

/// Default quiet period after an interaction before autoplay resumes.
pub const DEFAULT_INACTIVITY_TIMEOUT: Duration = Duration::from_millis(5000);

/// Timing parameters for autoplay.
///
/// Both durations are clamped to at least [`MIN_TIMER_INTERVAL`] on
/// construction, so a zero-delay timer can never be armed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingConfig {
    autoplay_interval: Duration,
    inactivity_timeout: Duration,
}

impl TimingConfig {
    /// Create a timing configuration, clamping both durations.
    pub fn new(autoplay_interval: Duration, inactivity_timeout: Duration) -> Self {
        Self {
            autoplay_interval: autoplay_interval.max(MIN_TIMER_INTERVAL),
            inactivity_timeout: inactivity_timeout.max(MIN_TIMER_INTERVAL),
        }
    }

    /// Create a timing configuration from millisecond values.
    pub fn from_millis(autoplay_interval_ms: u64, inactivity_timeout_ms: u64) -> Self {
        Self::new(
            Duration::from_millis(autoplay_interval_ms),
            Duration::from_millis(inactivity_timeout_ms),
        )
    }

    /// Time between automatic advances.
    pub fn autoplay_interval(&self) -> Duration {
        self.autoplay_interval
    }

    /// Quiet period required after an interaction before autoplay resumes.
    pub fn inactivity_timeout(&self) -> Duration {
        self.inactivity_timeout
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self::new(DEFAULT_AUTOPLAY_INTERVAL, DEFAULT_INACTIVITY_TIMEOUT)
    }
}

/// Observable autoplay phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoplayPhase {
    /// Nothing to cycle through (0 or 1 pages). No timer is ever armed.
    Inert,
    /// The recurring advance timer is armed.
    Running {
        /// When the next automatic advance fires.
        next_advance: Instant,
    },
    /// No advance timer is armed.
    Suspended {
        /// When the resume countdown fires, if one is pending.
        resume_at: Option<Instant>,
    },
}

/// Recurring timer: fires at `next_fire`, then every interval after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RecurringTimer {
    next_fire: Instant,
}

/// One-shot timer: fires once at `fires_at`, then disarms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct OneShotTimer {
    fires_at: Instant,
}

/// Which timer is due next inside [`AutoplayScheduler::poll`].
enum Due {
    Advance(Instant),
    Resume(Instant),
}

/// Autoplay scheduler state machine.
#[derive(Debug, Clone)]
pub struct AutoplayScheduler {
    timing: TimingConfig,
    page_count: usize,
    /// Logical "autoplay should be on" flag. Cleared by interaction, set again
    /// when the resume countdown fires.
    autoplay_wanted: bool,
    visible: bool,
    last_interaction_at: Option<Instant>,
    advance_timer: Option<RecurringTimer>,
    resume_timer: Option<OneShotTimer>,
}

impl AutoplayScheduler {
    /// Create a scheduler at mount time.
    ///
    /// Starts running when there is more than one page; otherwise stays inert.
    pub fn mount(page_count: usize, timing: TimingConfig, now: Instant) -> Self {
        let mut scheduler = Self {
            timing,
            page_count,
            autoplay_wanted: true,
            visible: true,
            last_interaction_at: None,
            advance_timer: None,
            resume_timer: None,
        };
        scheduler.sync_advance_timer(now);
        scheduler
    }

    /// Record a user interaction.
    ///
    /// Cancels the advance timer and restarts the resume countdown from `now`.
    /// Repeated interactions push the resume point back; they never accumulate.
    pub fn mark_interaction(&mut self, now: Instant) {
        self.last_interaction_at = Some(now);

        if !self.has_pages_to_cycle() {
            return;
        }

        self.autoplay_wanted = false;
        let fires_at = now + self.timing.inactivity_timeout;
        self.resume_timer = Some(OneShotTimer { fires_at });
        debug!(?fires_at, "Interaction: autoplay suspended, resume countdown armed");

        self.sync_advance_timer(now);
    }

    /// Apply a visibility change.
    ///
    /// Hiding cancels the advance timer without touching the resume countdown.
    /// Showing re-arms the advance timer immediately if autoplay is still wanted.
    pub fn set_visible(&mut self, visible: bool, now: Instant) {
        if self.visible == visible {
            return;
        }
        self.visible = visible;
        debug!(visible, "Visibility changed");
        self.sync_advance_timer(now);
    }

    /// Replace the page count after the sequence changed.
    ///
    /// Dropping to 0 or 1 pages disarms everything; growing past 1 page starts
    /// autoplay if it is wanted.
    pub fn set_page_count(&mut self, page_count: usize, now: Instant) {
        self.page_count = page_count;

        if !self.has_pages_to_cycle() {
            if self.resume_timer.take().is_some() {
                debug!("Resume countdown cancelled: nothing to cycle through");
            }
            self.autoplay_wanted = true;
        }

        self.sync_advance_timer(now);
    }

    /// Replace the timing configuration.
    ///
    /// Already-armed deadlines are kept as they are; the new values apply from
    /// the next time a timer is armed or the advance timer reschedules itself.
    pub fn set_timing(&mut self, timing: TimingConfig) {
        self.timing = timing;
    }

    /// Fire every timer due at or before `now`, in chronological order.
    ///
    /// Returns the number of automatic advances that fired.
    pub fn poll(&mut self, now: Instant) -> usize {
        let mut advances = 0;

        loop {
            let advance_due = self
                .advance_timer
                .map(|t| t.next_fire)
                .filter(|at| *at <= now);
            let resume_due = self
                .resume_timer
                .map(|t| t.fires_at)
                .filter(|at| *at <= now);

            let due = match (advance_due, resume_due) {
                (None, None) => break,
                (Some(advance), Some(resume)) if advance < resume => Due::Advance(advance),
                (_, Some(resume)) => Due::Resume(resume),
                (Some(advance), None) => Due::Advance(advance),
            };

            match due {
                Due::Advance(at) => {
                    advances += 1;
                    self.fire_advance(at);
                }
                Due::Resume(at) => self.fire_resume(at),
            }
        }

        advances
    }

    /// Cancel every armed timer and consume the scheduler.
    ///
    /// Taking `self` by value means no further `poll` can run after teardown.
    pub fn teardown(mut self) {
        let had_advance = self.advance_timer.take().is_some();
        let had_resume = self.resume_timer.take().is_some();
        debug!(had_advance, had_resume, "Autoplay scheduler torn down");
    }

    /// Whether the advance timer should be armed right now.
    pub fn should_run(&self) -> bool {
        self.autoplay_wanted && self.visible && self.has_pages_to_cycle()
    }

    /// Current phase of the state machine.
    pub fn phase(&self) -> AutoplayPhase {
        if !self.has_pages_to_cycle() {
            return AutoplayPhase::Inert;
        }
        match self.advance_timer {
            Some(timer) => AutoplayPhase::Running {
                next_advance: timer.next_fire,
            },
            None => AutoplayPhase::Suspended {
                resume_at: self.resume_timer.map(|t| t.fires_at),
            },
        }
    }

    /// True while the advance timer is armed.
    pub fn is_running(&self) -> bool {
        self.advance_timer.is_some()
    }

    /// Logical autoplay flag, independent of visibility.
    pub fn autoplay_wanted(&self) -> bool {
        self.autoplay_wanted
    }

    /// Last visibility reported via [`set_visible`](Self::set_visible).
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Time of the most recent interaction, if any.
    pub fn last_interaction_at(&self) -> Option<Instant> {
        self.last_interaction_at
    }

    /// Current timing configuration.
    pub fn timing(&self) -> TimingConfig {
        self.timing
    }

    /// Earliest armed deadline, used by the shell to decide how long to sleep.
    pub fn next_deadline(&self) -> Option<Instant> {
        let advance = self.advance_timer.map(|t| t.next_fire);
        let resume = self.resume_timer.map(|t| t.fires_at);
        match (advance, resume) {
            (Some(a), Some(r)) => Some(a.min(r)),
            (a, r) => a.or(r),
        }
    }

    fn has_pages_to_cycle(&self) -> bool {
        self.page_count > 1
    }

    fn fire_advance(&mut self, at: Instant) {
        // Fixed cadence from the previous deadline, not from handling time.
        let next_fire = at + self.timing.autoplay_interval;
        self.advance_timer = Some(RecurringTimer { next_fire });
    }

    fn fire_resume(&mut self, at: Instant) {
        self.resume_timer = None;
        self.autoplay_wanted = true;
        debug!(visible = self.visible, "Inactivity window elapsed: autoplay wanted again");
        self.sync_advance_timer(at);
    }

    /// Reconcile the advance timer with [`should_run`](Self::should_run).
    fn sync_advance_timer(&mut self, now: Instant) {
        match (self.should_run(), self.advance_timer.is_some()) {
            (true, false) => {
                let next_fire = now + self.timing.autoplay_interval;
                self.advance_timer = Some(RecurringTimer { next_fire });
                debug!(?next_fire, "Advance timer armed");
            }
            (false, true) => {
                self.advance_timer = None;
                debug!("Advance timer cancelled");
            }
            _ => {}
        }
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "scheduler_tests.rs"]
mod tests;
