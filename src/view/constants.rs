//! Layout dimension constants for TUI rendering.

/// Height of the header (book title and subtitle).
pub const HEADER_HEIGHT: u16 = 2;

/// Height of the previous/next control row.
pub const CONTROLS_HEIGHT: u16 = 1;

/// Height of the status bar in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Label of the "previous" control.
pub const PREVIOUS_LABEL: &str = "[ ← Previous ]";

/// Label of the "next" control.
pub const NEXT_LABEL: &str = "[ Next → ]";

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 80;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;
