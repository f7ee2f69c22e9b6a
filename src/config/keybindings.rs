//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Arrow keys page through the book. Every other unbound key is ignored
/// by the viewer and does not count as an interaction.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Bindings with no keys bound.
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Look up the action for a key event.
    ///
    /// Only code and modifiers take part in the lookup; kind and state
    /// flags reported by some terminals are ignored.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&normalize(key)).copied()
    }

    /// Bind `key` to `action`, replacing any previous binding.
    pub fn bind(&mut self, key: KeyEvent, action: KeyAction) {
        self.bindings.insert(normalize(key), action);
    }
}

fn normalize(key: KeyEvent) -> KeyEvent {
    KeyEvent::new(key.code, key.modifiers)
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = Self::empty();
        let mut bind = |code, modifiers, action| {
            bindings.bind(KeyEvent::new(code, modifiers), action);
        };

        // Page navigation
        bind(KeyCode::Left, KeyModifiers::NONE, KeyAction::Previous);
        bind(KeyCode::Right, KeyModifiers::NONE, KeyAction::Next);

        // Help (some terminals report '?' with shift)
        bind(KeyCode::Char('?'), KeyModifiers::NONE, KeyAction::ToggleHelp);
        bind(KeyCode::Char('?'), KeyModifiers::SHIFT, KeyAction::ToggleHelp);

        // Application controls
        bind(KeyCode::Char('q'), KeyModifiers::NONE, KeyAction::Quit);
        bind(KeyCode::Esc, KeyModifiers::NONE, KeyAction::Quit);
        bind(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyAction::Quit);

        bindings
    }
}
