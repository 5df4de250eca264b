//! In-memory surface holding rendered rows and scroll state.

use crate::view_state::viewport::{Viewport, ViewSurface};

/// Rows, scroll origin, cursor, and footer of one list surface.
///
/// The host sets the height from its layout each tick; everything else is
/// driven through [`ViewSurface`].
///
/// # Invariants
/// - `origin_y <= lines.len().saturating_sub(height)` after any scroll
#[derive(Debug, Clone, Default)]
pub struct BufferView {
    lines: Vec<String>,
    origin_y: usize,
    origin_x: usize,
    cursor_y: usize,
    height: usize,
    footer: String,
    highlight: bool,
    needs_redraw: bool,
}

impl BufferView {
    /// Create an empty surface showing `height` rows.
    pub fn new(height: usize) -> Self {
        Self {
            height,
            ..Default::default()
        }
    }

    /// All rows.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Rows inside the viewport.
    pub fn visible_lines(&self) -> &[String] {
        let start = self.origin_y.min(self.lines.len());
        let end = self.origin_y.saturating_add(self.height).min(self.lines.len());
        &self.lines[start..end]
    }

    /// Visible row count.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Resize the viewport, keeping the origin in range.
    pub fn set_height(&mut self, height: usize) {
        if self.height != height {
            self.height = height;
            self.origin_y = self.origin_y.min(self.max_origin());
            self.needs_redraw = true;
        }
    }

    /// Horizontal scroll offset in columns.
    pub fn origin_x(&self) -> usize {
        self.origin_x
    }

    /// Row the cursor sits on.
    pub fn cursor_y(&self) -> usize {
        self.cursor_y
    }

    /// Footer text.
    pub fn footer(&self) -> &str {
        &self.footer
    }

    /// Whether the cursor row is highlighted.
    pub fn highlight(&self) -> bool {
        self.highlight
    }

    /// Return and clear the redraw request.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    /// Scroll left by `columns`.
    pub fn scroll_left(&mut self, columns: usize) {
        self.set_origin_x(self.origin_x.saturating_sub(columns));
    }

    /// Scroll right by `columns`.
    pub fn scroll_right(&mut self, columns: usize) {
        self.set_origin_x(self.origin_x.saturating_add(columns));
    }

    fn max_origin(&self) -> usize {
        self.lines.len().saturating_sub(self.height)
    }
}

/// Origin that makes `row` visible.
///
/// Content that fits pins the origin to 0. A row one step outside the
/// viewport scrolls by one; anything farther is centred.
fn calculate_new_origin(row: usize, origin: usize, line_count: usize, height: usize) -> usize {
    if height >= line_count {
        return 0;
    }
    let viewport = Viewport::new(origin, height);
    if viewport.contains(row) {
        return origin;
    }
    let max_origin = line_count - height;
    if height > 0 && row == viewport.end() {
        return (origin + 1).min(max_origin);
    }
    if height > 0 && row + 1 == origin {
        return origin - 1;
    }
    row.saturating_sub(height / 2).min(max_origin)
}

impl ViewSurface for BufferView {
    fn viewport_bounds(&self) -> Viewport {
        Viewport::new(self.origin_y, self.height)
    }

    fn set_content(&mut self, content: String) {
        self.lines = if content.is_empty() {
            Vec::new()
        } else {
            content.split('\n').map(str::to_string).collect()
        };
        self.origin_y = self.origin_y.min(self.max_origin());
        self.cursor_y = self.cursor_y.min(self.lines.len().saturating_sub(1));
        self.needs_redraw = true;
    }

    fn set_viewport_content(&mut self, content: String) {
        if content.is_empty() {
            return;
        }
        for (offset, line) in content.split('\n').enumerate() {
            if let Some(slot) = self.lines.get_mut(self.origin_y + offset) {
                *slot = line.to_string();
            }
        }
        self.needs_redraw = true;
    }

    fn focus_point(&mut self, row: usize) {
        let Some(last) = self.lines.len().checked_sub(1) else {
            self.cursor_y = 0;
            self.origin_y = 0;
            return;
        };
        let row = row.min(last);
        self.cursor_y = row;
        self.origin_y = calculate_new_origin(row, self.origin_y, self.lines.len(), self.height);
        self.needs_redraw = true;
    }

    fn scroll_up(&mut self, rows: usize) {
        self.origin_y = self.origin_y.saturating_sub(rows);
        self.needs_redraw = true;
    }

    fn scroll_down(&mut self, rows: usize) {
        self.origin_y = self.origin_y.saturating_add(rows).min(self.max_origin());
        self.needs_redraw = true;
    }

    fn set_origin_x(&mut self, x: usize) {
        if self.origin_x != x {
            self.origin_x = x;
            self.needs_redraw = true;
        }
    }

    fn set_highlight(&mut self, on: bool) {
        if self.highlight != on {
            self.highlight = on;
            self.needs_redraw = true;
        }
    }

    fn set_footer(&mut self, footer: String) {
        if self.footer != footer {
            self.footer = footer;
            self.needs_redraw = true;
        }
    }

    fn request_redraw(&mut self) {
        self.needs_redraw = true;
    }
}
