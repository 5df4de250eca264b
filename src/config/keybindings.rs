//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Bindings are consulted before item keys, so a menu item bound to a key
/// that is also a navigation key can only be reached by selecting it.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&key).copied()
    }

    /// Bind `key` to `action`, replacing any previous binding.
    pub fn bind(&mut self, key: KeyEvent, action: KeyAction) {
        self.bindings.insert(key, action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        const NONE: KeyModifiers = KeyModifiers::NONE;
        const CTRL: KeyModifiers = KeyModifiers::CONTROL;
        const SHIFT: KeyModifiers = KeyModifiers::SHIFT;

        let defaults = [
            // Selection
            (KeyCode::Char('k'), NONE, KeyAction::PrevItem),
            (KeyCode::Up, NONE, KeyAction::PrevItem),
            (KeyCode::Char('j'), NONE, KeyAction::NextItem),
            (KeyCode::Down, NONE, KeyAction::NextItem),
            (KeyCode::Char('u'), CTRL, KeyAction::PrevPage),
            (KeyCode::PageUp, NONE, KeyAction::PrevPage),
            (KeyCode::Char('d'), CTRL, KeyAction::NextPage),
            (KeyCode::PageDown, NONE, KeyAction::NextPage),
            (KeyCode::Char('g'), NONE, KeyAction::GotoTop),
            (KeyCode::Home, NONE, KeyAction::GotoTop),
            (KeyCode::Char('G'), SHIFT, KeyAction::GotoBottom),
            (KeyCode::End, NONE, KeyAction::GotoBottom),
            // Viewport
            (KeyCode::Char('y'), CTRL, KeyAction::ScrollUp),
            (KeyCode::Char('e'), CTRL, KeyAction::ScrollDown),
            (KeyCode::Char('h'), NONE, KeyAction::ScrollLeft),
            (KeyCode::Left, NONE, KeyAction::ScrollLeft),
            (KeyCode::Char('l'), NONE, KeyAction::ScrollRight),
            (KeyCode::Right, NONE, KeyAction::ScrollRight),
            // Items
            (KeyCode::Enter, NONE, KeyAction::Confirm),
            (KeyCode::Char(' '), NONE, KeyAction::Confirm),
            // Search and filter
            (KeyCode::Char('/'), NONE, KeyAction::StartSearch),
            (KeyCode::Char('n'), NONE, KeyAction::NextMatch),
            (KeyCode::Char('N'), SHIFT, KeyAction::PrevMatch),
            (KeyCode::Char('f'), NONE, KeyAction::StartFilter),
            (KeyCode::Esc, NONE, KeyAction::Cancel),
            // Application
            (KeyCode::Char('q'), NONE, KeyAction::Quit),
            (KeyCode::Char('c'), CTRL, KeyAction::Quit),
        ];

        let bindings = defaults
            .into_iter()
            .map(|(code, modifiers, action)| (KeyEvent::new(code, modifiers), action))
            .collect();

        Self { bindings }
    }
}
