//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by `KeyBindings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Selection movement
    /// Select the previous item. Default: k/↑
    PrevItem,
    /// Select the next item. Default: j/↓
    NextItem,
    /// Move the selection up by one page. Default: Ctrl+u/Page Up
    PrevPage,
    /// Move the selection down by one page. Default: Ctrl+d/Page Down
    NextPage,
    /// Select the first item. Default: g/Home
    GotoTop,
    /// Select the last item. Default: G/End
    GotoBottom,

    // Viewport scrolling (selection stays put)
    /// Scroll the viewport up one row. Default: Ctrl+y, mouse wheel
    ScrollUp,
    /// Scroll the viewport down one row. Default: Ctrl+e, mouse wheel
    ScrollDown,
    /// Scroll the viewport left. Default: h/←
    ScrollLeft,
    /// Scroll the viewport right. Default: l/→
    ScrollRight,

    // Items
    /// Press the selected item. Default: Enter/Space
    Confirm,

    // Search and filter
    /// Start typing a search query. Default: /
    StartSearch,
    /// Jump to the next search match. Default: n
    NextMatch,
    /// Jump to the previous search match. Default: N
    PrevMatch,
    /// Start typing a filter. Default: f
    StartFilter,
    /// Clear search highlight or active filter. Default: Esc
    Cancel,

    // Application
    /// Quit without choosing an item. Default: q/Ctrl+c
    Quit,
}

impl KeyAction {
    /// Whether this action moves the selection (and therefore re-focuses).
    pub fn moves_selection(&self) -> bool {
        matches!(
            self,
            KeyAction::PrevItem
                | KeyAction::NextItem
                | KeyAction::PrevPage
                | KeyAction::NextPage
                | KeyAction::GotoTop
                | KeyAction::GotoBottom
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movement_actions_move_selection() {
        for action in [
            KeyAction::PrevItem,
            KeyAction::NextItem,
            KeyAction::PrevPage,
            KeyAction::NextPage,
            KeyAction::GotoTop,
            KeyAction::GotoBottom,
        ] {
            assert!(action.moves_selection(), "{:?} should move selection", action);
        }
    }

    #[test]
    fn scroll_actions_leave_selection_alone() {
        for action in [
            KeyAction::ScrollUp,
            KeyAction::ScrollDown,
            KeyAction::ScrollLeft,
            KeyAction::ScrollRight,
            KeyAction::Confirm,
            KeyAction::Quit,
        ] {
            assert!(!action.moves_selection(), "{:?} should not move selection", action);
        }
    }
}
