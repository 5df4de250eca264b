//! List state machine (pure).
//!
//! State transitions driven by input, testable without a terminal.
//!
//! # Module Structure
//!
//! - `after_layout`: AfterLayout - FIFO of tasks deferred past the next layout
//! - `list_context`: ListContext - render and focus lifecycle of one list
//! - `list_controller`: navigation actions and click selection
//! - `search`: SearchState - search prompt and match cycling

pub mod after_layout;
pub mod list_context;
pub mod list_controller;
pub mod search;

// Re-export for convenience
pub use after_layout::AfterLayout;
pub use list_context::{format_list_footer, ListContext};
pub use list_controller::{handle_list_action, select_view_row};
pub use search::{execute_search, SearchQuery, SearchState};
