//! Configuration module.
//!
//! # Module Structure
//!
//! - `loader`: TOML config file, precedence chain, ResolvedConfig
//! - `keybindings`: KeyBindings - key events to KeyAction

pub mod keybindings;
pub mod loader;

pub use keybindings::KeyBindings;
pub use loader::{
    apply_cli_overrides, apply_env_overrides, load_config_with_precedence, merge_config,
    ConfigError, ResolvedConfig,
};

/// Default number of rows kept between the cursor and the viewport edge.
pub const DEFAULT_SCROLL_OFF_MARGIN: usize = 2;

/// Per-list behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListConfig {
    /// Rows kept between the cursor and the edge it moves towards.
    ///
    /// Zero disables the margin; the viewport then only scrolls when the
    /// cursor leaves it.
    pub scroll_off_margin: usize,

    /// Re-render the visible window whenever the viewport scrolls or focus
    /// changes.
    ///
    /// Needed by lists whose rows depend on the selection.
    pub live_highlight: bool,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            scroll_off_margin: DEFAULT_SCROLL_OFF_MARGIN,
            live_highlight: false,
        }
    }
}
