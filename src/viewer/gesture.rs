//! Horizontal swipe recognition.
//!
//! A small incremental state machine: Idle → Tracking → resolved on release.
//! Release is the only transition that can produce a [`Swipe`]; partial or
//! malformed contact sequences resolve to nothing.

use crate::viewer::navigation::NavCommand;

/// Minimum horizontal displacement for a contact to count as a swipe.
pub const DEFAULT_SWIPE_MIN_DISTANCE: u32 = 50;

/// Direction of a recognized swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Contact moved right-to-left. Reveals the next page.
    Left,
    /// Contact moved left-to-right. Reveals the previous page.
    Right,
}

impl Swipe {
    /// Navigation command this swipe maps to.
    pub fn command(self) -> NavCommand {
        match self {
            Swipe::Left => NavCommand::Advance,
            Swipe::Right => NavCommand::Retreat,
        }
    }
}

/// Contact tracking state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GestureState {
    /// No contact in progress.
    #[default]
    Idle,
    /// Contact started at `start_x`; `last_x` is the latest move position.
    Tracking {
        /// Horizontal position where the contact began.
        start_x: i32,
        /// Horizontal position of the most recent move, if any move happened.
        last_x: Option<i32>,
    },
}

/// Recognizes left/right swipes from start/move/end contact events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwipeRecognizer {
    min_distance: u32,
    state: GestureState,
}

impl SwipeRecognizer {
    /// Create a recognizer with the given minimum swipe distance.
    pub fn new(min_distance: u32) -> Self {
        Self {
            min_distance,
            state: GestureState::Idle,
        }
    }

    /// Minimum displacement (exclusive) required to recognize a swipe.
    pub fn min_distance(&self) -> u32 {
        self.min_distance
    }

    /// Current tracking state.
    pub fn state(&self) -> GestureState {
        self.state
    }

    /// Begin tracking a contact. Restarts tracking if one was already open.
    pub fn touch_start(&mut self, x: i32) {
        self.state = GestureState::Tracking {
            start_x: x,
            last_x: None,
        };
    }

    /// Record contact movement. Ignored when no contact is being tracked.
    pub fn touch_move(&mut self, x: i32) {
        if let GestureState::Tracking { start_x, .. } = self.state {
            self.state = GestureState::Tracking {
                start_x,
                last_x: Some(x),
            };
        }
    }

    /// End the contact and classify it.
    ///
    /// Returns `None` for a release with no prior start or no prior move, and
    /// for displacement that does not exceed the minimum distance.
    pub fn touch_end(&mut self) -> Option<Swipe> {
        let state = std::mem::take(&mut self.state);

        let GestureState::Tracking {
            start_x,
            last_x: Some(last_x),
        } = state
        else {
            return None;
        };

        let displacement = i64::from(last_x) - i64::from(start_x);
        let threshold = i64::from(self.min_distance);

        if displacement < -threshold {
            Some(Swipe::Left)
        } else if displacement > threshold {
            Some(Swipe::Right)
        } else {
            None
        }
    }

    /// Abandon any tracked contact without producing a swipe.
    pub fn cancel(&mut self) {
        self.state = GestureState::Idle;
    }
}

impl Default for SwipeRecognizer {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_MIN_DISTANCE)
    }
}
