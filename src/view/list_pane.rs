//! Widget drawing a [`BufferView`] inside a bordered pane.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Widget},
};
use unicode_width::UnicodeWidthChar;

use super::buffer_view::BufferView;
use crate::view_state::index_map::SyntheticIndexSet;
use crate::view_state::viewport::ViewSurface;

/// Rows available inside a pane of `area`, borders excluded.
pub fn inner_height(area: Rect) -> usize {
    usize::from(area.height.saturating_sub(2))
}

/// Bordered list pane with the footer in the bottom border.
///
/// The cursor row is reversed when the view's highlight is on. Synthetic
/// rows, if given, are drawn bold.
pub struct ListPane<'a> {
    view: &'a BufferView,
    title: &'a str,
    synthetic: Option<&'a SyntheticIndexSet>,
}

impl<'a> ListPane<'a> {
    /// Create a pane for `view`.
    pub fn new(view: &'a BufferView, title: &'a str) -> Self {
        Self {
            view,
            title,
            synthetic: None,
        }
    }

    /// Draw the rows at these view positions as headers.
    pub fn synthetic_rows(mut self, synthetic: &'a SyntheticIndexSet) -> Self {
        self.synthetic = Some(synthetic);
        self
    }
}

impl Widget for ListPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = Style::default().fg(Color::Cyan);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Line::from(format!(" {} ", self.title)))
            .title_bottom(Line::from(format!(" {} ", self.view.footer())).right_aligned());
        let inner = block.inner(area);
        block.render(area, buf);

        let origin_y = self.view.viewport_bounds().origin_y;
        let origin_x = self.view.origin_x();

        for (offset, line) in self
            .view
            .visible_lines()
            .iter()
            .take(usize::from(inner.height))
            .enumerate()
        {
            let row = origin_y + offset;
            let Ok(dy) = u16::try_from(offset) else {
                break;
            };
            let y = inner.y + dy;

            let mut style = Style::default();
            if self.synthetic.is_some_and(|set| set.contains(row)) {
                style = style.add_modifier(Modifier::BOLD);
            }
            if self.view.highlight() && row == self.view.cursor_y() {
                style = style.add_modifier(Modifier::REVERSED);
                buf.set_style(Rect::new(inner.x, y, inner.width, 1), style);
            }

            buf.set_stringn(
                inner.x,
                y,
                clip_left(line, origin_x),
                usize::from(inner.width),
                style,
            );
        }
    }
}

/// Drop the first `columns` display columns of `line`.
fn clip_left(line: &str, columns: usize) -> &str {
    let mut skipped = 0;
    for (index, c) in line.char_indices() {
        if skipped >= columns {
            return &line[index..];
        }
        skipped += c.width().unwrap_or(0);
    }
    ""
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn view_with(lines: &[&str], height: usize) -> BufferView {
        let mut view = BufferView::new(height);
        view.set_content(lines.join("\n"));
        view
    }

    fn render(view: &BufferView, width: u16, height: u16) -> Buffer {
        let mut terminal =
            Terminal::new(TestBackend::new(width, height)).expect("test backend never fails");
        terminal
            .draw(|frame| frame.render_widget(ListPane::new(view, "Menu"), frame.area()))
            .expect("draw to test backend");
        terminal.backend().buffer().clone()
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol())
            .collect::<String>()
            .trim_end()
            .to_string()
    }

    #[test]
    fn inner_height_excludes_borders() {
        assert_eq!(inner_height(Rect::new(0, 0, 10, 12)), 10);
        assert_eq!(inner_height(Rect::new(0, 0, 10, 1)), 0);
    }

    #[test]
    fn clip_left_skips_display_columns() {
        assert_eq!(clip_left("abcdef", 2), "cdef");
        assert_eq!(clip_left("abc", 5), "");
        assert_eq!(clip_left("日本語", 2), "本語");
    }

    #[test]
    fn renders_visible_rows_and_footer() {
        let mut view = view_with(&["alpha", "beta", "gamma", "delta"], 2);
        view.scroll_down(1);
        view.set_footer("2 of 4".to_string());

        let buf = render(&view, 20, 4);

        assert_eq!(row_text(&buf, 0), "┌ Menu ────────────┐");
        assert_eq!(row_text(&buf, 1), "│beta              │");
        assert_eq!(row_text(&buf, 2), "│gamma             │");
        assert_eq!(row_text(&buf, 3), "└────────── 2 of 4 ┘");
    }

    #[test]
    fn highlighted_cursor_row_is_reversed() {
        let mut view = view_with(&["one", "two"], 2);
        view.set_highlight(true);
        view.focus_point(1);

        let buf = render(&view, 10, 4);

        assert!(buf[(1, 2)].modifier.contains(Modifier::REVERSED));
        assert!(!buf[(1, 1)].modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn horizontal_origin_clips_rows() {
        let mut view = view_with(&["0123456789"], 1);
        view.scroll_right(3);

        let buf = render(&view, 12, 3);

        assert_eq!(row_text(&buf, 1), "│3456789   │");
    }
}
