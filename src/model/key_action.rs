//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by `KeyBindings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Show the previous page. Default: ←
    Previous,
    /// Show the next page. Default: →
    Next,
    /// Toggle the key help line. Default: ?
    ToggleHelp,
    /// Exit the application. Default: q/Esc/Ctrl+c
    Quit,
}

impl KeyAction {
    /// True for actions that move through the book.
    pub fn is_navigation(self) -> bool {
        matches!(self, KeyAction::Previous | KeyAction::Next)
    }
}
