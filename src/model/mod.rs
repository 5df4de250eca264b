//! Domain model types.
//!
//! List contracts, the concrete list kinds built on them, and the error
//! hierarchy. Nothing here knows about viewports or terminals.
//!
//! # Module Structure
//!
//! - `list`: ListModel, ListSource, NonModelItem - what the engine needs from a list
//! - `filtered_list`: FilteredList - Vec-backed list with a text filter
//! - `menu`: MenuViewModel, MenuItem, parse_menu - sectioned menus
//! - `key_action`: KeyAction - abstract input actions
//! - `error`: ListError, InputError, AppError

pub mod error;
pub mod filtered_list;
pub mod key_action;
pub mod list;
pub mod menu;

pub use error::{AppError, HandlerError, InputError, ListError};
pub use filtered_list::FilteredList;
pub use key_action::KeyAction;
pub use list::{clamp_selection, ListModel, ListSource, NonModelItem};
pub use menu::{parse_menu, MenuItem, MenuSection, MenuSectionRow, MenuViewModel};
