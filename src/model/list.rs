//! Contracts between the list engine and the data it displays.
//!
//! The engine never looks at items. It reads the selection through
//! [`ListModel`] and asks [`ListSource`] for display strings and synthetic
//! rows.

use crate::view_state::columns::Alignment;

/// Selection state of an ordered list.
///
/// # Invariants
/// - `selected_index() < len()` whenever `len() > 0`
/// - `selected_index() == 0` when the list is empty
pub trait ListModel {
    /// Number of model items.
    fn len(&self) -> usize;

    /// Whether the list has no items.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Currently selected model index.
    fn selected_index(&self) -> usize;

    /// Select `index`, clamped into `[0, len)`.
    fn set_selected_index(&mut self, index: usize);

    /// Repair the selection after the underlying items changed.
    fn revalidate_selection(&mut self) {
        let index = self.selected_index();
        self.set_selected_index(index);
    }

    /// Move the selection by `delta` rows, clamped at both ends.
    fn move_selection(&mut self, delta: isize) {
        let current = self.selected_index();
        let target = if delta.is_negative() {
            current.saturating_sub(delta.unsigned_abs())
        } else {
            current.saturating_add(delta.unsigned_abs())
        };
        self.set_selected_index(target);
    }
}

/// Clamp a requested selection into `[0, len)`, or 0 for an empty list.
pub fn clamp_selection(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        index.min(len - 1)
    }
}

/// A row rendered between model rows that has no model item behind it.
///
/// `index` is a model index: the row is inserted immediately before model row
/// `index` of the unmodified model sequence. An `index` equal to the model
/// length appends after the last row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonModelItem<P> {
    /// Model index the row is inserted before.
    pub index: usize,
    /// Render instruction resolved by [`ListSource::render_non_model_item`].
    pub payload: P,
}

impl<P> NonModelItem<P> {
    /// Create a synthetic row inserted before model row `index`.
    pub fn new(index: usize, payload: P) -> Self {
        Self { index, payload }
    }
}

/// Produces the text of a list.
pub trait ListSource {
    /// Render instruction carried by synthetic rows of this list kind.
    type Payload;

    /// Display columns for model rows `[start, start + len)`.
    ///
    /// Returning fewer rows than requested is tolerated; missing rows render
    /// empty.
    fn display_strings(&self, start: usize, len: usize) -> Vec<Vec<String>>;

    /// Per-column alignment. Columns without an entry are left-aligned.
    fn column_alignments(&self) -> Vec<Alignment> {
        Vec::new()
    }

    /// Synthetic rows to splice into a full render.
    ///
    /// `column_positions` holds the start offset of every display column so
    /// headers can line up under a column.
    fn non_model_items(&self, _column_positions: &[usize]) -> Vec<NonModelItem<Self::Payload>> {
        Vec::new()
    }

    /// Text of one synthetic row. An empty string renders a blank separator.
    fn render_non_model_item(
        &self,
        _item: &NonModelItem<Self::Payload>,
        _column_positions: &[usize],
    ) -> String {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Cursor {
        len: usize,
        selected: usize,
    }

    impl ListModel for Cursor {
        fn len(&self) -> usize {
            self.len
        }

        fn selected_index(&self) -> usize {
            self.selected
        }

        fn set_selected_index(&mut self, index: usize) {
            self.selected = clamp_selection(index, self.len);
        }
    }

    #[test]
    fn clamp_selection_handles_empty_list() {
        assert_eq!(clamp_selection(5, 0), 0);
    }

    #[test]
    fn clamp_selection_pins_to_last_item() {
        assert_eq!(clamp_selection(10, 4), 3);
        assert_eq!(clamp_selection(2, 4), 2);
    }

    #[test]
    fn move_selection_saturates_at_top() {
        let mut cursor = Cursor { len: 5, selected: 1 };
        cursor.move_selection(-3);
        assert_eq!(cursor.selected_index(), 0);
    }

    #[test]
    fn move_selection_clamps_at_bottom() {
        let mut cursor = Cursor { len: 5, selected: 3 };
        cursor.move_selection(10);
        assert_eq!(cursor.selected_index(), 4);
    }

    #[test]
    fn revalidate_repairs_selection_after_shrink() {
        let mut cursor = Cursor { len: 10, selected: 8 };
        cursor.len = 3;
        cursor.revalidate_selection();
        assert_eq!(cursor.selected_index(), 2);
    }
}
