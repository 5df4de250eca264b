//! The visible window and the contract of the surface that hosts a list.

/// Visible window over rendered rows.
///
/// # Invariants
/// - Rows `[origin_y, origin_y + height)` are visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    /// First visible view row.
    pub origin_y: usize,
    /// Number of visible rows.
    pub height: usize,
}

impl Viewport {
    /// Create a viewport starting at `origin_y` showing `height` rows.
    pub fn new(origin_y: usize, height: usize) -> Self {
        Self { origin_y, height }
    }

    /// One past the last visible row.
    pub fn end(&self) -> usize {
        self.origin_y.saturating_add(self.height)
    }

    /// Whether `row` is visible.
    pub fn contains(&self, row: usize) -> bool {
        row >= self.origin_y && row < self.end()
    }
}

/// Display surface a list renders into.
///
/// Rows are view indices. Implementations own scrolling state; the list
/// engine only reads it through [`viewport_bounds`](Self::viewport_bounds).
pub trait ViewSurface {
    /// Current visible window.
    fn viewport_bounds(&self) -> Viewport;

    /// Replace the whole content. Rows are separated by `\n`.
    fn set_content(&mut self, content: String);

    /// Overwrite only the visible rows, starting at the current origin.
    fn set_viewport_content(&mut self, content: String);

    /// Move the cursor to `row`, scrolling as needed to keep it visible.
    fn focus_point(&mut self, row: usize);

    /// Scroll the window up by `rows`.
    fn scroll_up(&mut self, rows: usize);

    /// Scroll the window down by `rows`.
    fn scroll_down(&mut self, rows: usize);

    /// Set the horizontal scroll offset.
    fn set_origin_x(&mut self, x: usize);

    /// Enable or disable the cursor-row highlight.
    fn set_highlight(&mut self, on: bool);

    /// Replace the footer text.
    fn set_footer(&mut self, footer: String);

    /// Ask the host to redraw on its next frame.
    fn request_redraw(&mut self);
}
