//! View-state layer - index mapping, rendering, and scroll-off
//!
//! Pure functions and data that turn a list into rows and keep the cursor
//! comfortably inside the viewport. Nothing here owns a terminal.
//!
//! # Module Structure
//!
//! - `index_map`: SyntheticIndexSet - model index ↔ view index translation
//! - `columns`: Alignment, ColumnLayout - column padding of display strings
//! - `renderer`: full and windowed renders, RenderLayout
//! - `scroll_off`: scroll-off margin checks
//! - `viewport`: Viewport and the ViewSurface host contract

pub mod columns;
pub mod index_map;
pub mod renderer;
pub mod scroll_off;
pub mod viewport;

pub use columns::{Alignment, ColumnLayout};
pub use index_map::SyntheticIndexSet;
pub use renderer::{render_full, render_window, RenderLayout, RenderedList};
pub use viewport::{Viewport, ViewSurface};
