//! listport
//!
//! Virtualized list view engine for terminal interfaces, with a menu picker
//! built on top of it.
//!
//! The engine keeps a model list (selection only, no item knowledge) bound to
//! a view surface. Rows come from a [`model::ListSource`], synthetic rows such
//! as section headers are spliced between model rows, and all index math
//! between model and view positions goes through
//! [`view_state::index_map::SyntheticIndexSet`].
//!
//! Pure core (`model`, `view_state`, `state`) and impure shell (`view`,
//! `source`, `logging`) are kept apart so the core is testable without a
//! terminal.

pub mod config;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod view;
pub mod view_state;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
