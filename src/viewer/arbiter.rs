//! Input arbiter.
//!
//! Normalizes heterogeneous input (control clicks, keys, contact gestures,
//! surface taps) into [`ArbiterOutput`]s. Whenever an input yields a
//! navigation command, `MarkInteraction` is emitted first so the interaction
//! is recorded before the index changes.

use crate::viewer::gesture::SwipeRecognizer;
use crate::viewer::navigation::NavCommand;

/// Keys the viewer understands. Anything else maps to [`ViewerKey::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewerKey {
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Any other key. Ignored.
    Other,
}

/// Raw input delivered to the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// The "previous" control was activated.
    PreviousClicked,
    /// The "next" control was activated.
    NextClicked,
    /// A key was pressed.
    Key(ViewerKey),
    /// A contact began at horizontal position `x`.
    TouchStart {
        /// Horizontal position.
        x: i32,
    },
    /// A tracked contact moved to horizontal position `x`.
    TouchMove {
        /// Horizontal position.
        x: i32,
    },
    /// The contact was released.
    TouchEnd,
    /// The page surface was tapped or clicked.
    SurfaceTap,
}

/// Normalized result of one input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArbiterOutput {
    /// Suspend autoplay and restart the inactivity countdown.
    MarkInteraction,
    /// Move through the page sequence.
    Navigate(NavCommand),
}

/// Translate one input event into zero or more outputs, in application order.
///
/// Contact events feed `recognizer`; only a completed swipe produces output.
pub fn arbitrate(recognizer: &mut SwipeRecognizer, event: InputEvent) -> Vec<ArbiterOutput> {
    let command = match event {
        InputEvent::PreviousClicked => Some(NavCommand::Retreat),
        InputEvent::NextClicked => Some(NavCommand::Advance),
        InputEvent::Key(key) => key_command(key),
        InputEvent::TouchStart { x } => {
            recognizer.touch_start(x);
            None
        }
        InputEvent::TouchMove { x } => {
            recognizer.touch_move(x);
            None
        }
        InputEvent::TouchEnd => recognizer.touch_end().map(|swipe| swipe.command()),
        InputEvent::SurfaceTap => return vec![ArbiterOutput::MarkInteraction],
    };

    match command {
        Some(command) => vec![
            ArbiterOutput::MarkInteraction,
            ArbiterOutput::Navigate(command),
        ],
        None => Vec::new(),
    }
}

fn key_command(key: ViewerKey) -> Option<NavCommand> {
    match key {
        ViewerKey::Left => Some(NavCommand::Retreat),
        ViewerKey::Right => Some(NavCommand::Advance),
        ViewerKey::Other => None,
    }
}
