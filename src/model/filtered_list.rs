//! Vec-backed list model with an optional text filter.

use super::list::{clamp_selection, ListModel};

/// Extracts the searchable columns of an item.
pub type SearchColumns<T> = fn(&T) -> Vec<String>;

/// A list of items with a selection and a case-insensitive substring filter.
///
/// While a filter is active, model indices refer to the filtered sequence.
///
/// # Invariants
/// - `visible` holds strictly increasing indices into `items`
/// - `selected` is valid for `visible.len()` (or 0 when empty)
#[derive(Debug, Clone)]
pub struct FilteredList<T> {
    items: Vec<T>,
    visible: Vec<usize>,
    filter: String,
    selected: usize,
    search_columns: SearchColumns<T>,
}

impl<T> FilteredList<T> {
    /// Create a list over `items`, matched against `search_columns` when
    /// filtering.
    pub fn new(items: Vec<T>, search_columns: SearchColumns<T>) -> Self {
        let visible = (0..items.len()).collect();
        Self {
            items,
            visible,
            filter: String::new(),
            selected: 0,
            search_columns,
        }
    }

    /// Replace the items, re-applying the current filter.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.apply_filter();
        self.revalidate_selection();
    }

    /// Set the filter text. Selection moves to the first match.
    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into();
        self.apply_filter();
        self.selected = 0;
    }

    /// Clear the filter, keeping the selected item selected where possible.
    pub fn clear_filter(&mut self) {
        let selected_item = self.visible.get(self.selected).copied();
        self.filter.clear();
        self.apply_filter();
        self.selected = selected_item.unwrap_or(0);
        self.revalidate_selection();
    }

    /// Current filter text.
    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Whether a non-empty filter is active.
    pub fn is_filtering(&self) -> bool {
        !self.filter.is_empty()
    }

    /// Visible item at model index `index`.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.visible.get(index).and_then(|&i| self.items.get(i))
    }

    /// Mutable visible item at model index `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        match self.visible.get(index) {
            Some(&i) => self.items.get_mut(i),
            None => None,
        }
    }

    /// Selected visible item.
    pub fn selected(&self) -> Option<&T> {
        self.get(self.selected)
    }

    /// Visible items in model order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.visible.iter().filter_map(|&i| self.items.get(i))
    }

    /// All items, ignoring the filter.
    pub fn all_items(&self) -> &[T] {
        &self.items
    }

    fn apply_filter(&mut self) {
        let needle = self.filter.to_lowercase();
        let search_columns = self.search_columns;
        self.visible = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| {
                needle.is_empty()
                    || search_columns(item)
                        .iter()
                        .any(|column| column.to_lowercase().contains(&needle))
            })
            .map(|(i, _)| i)
            .collect();
    }
}

impl<T> ListModel for FilteredList<T> {
    fn len(&self) -> usize {
        self.visible.len()
    }

    fn selected_index(&self) -> usize {
        self.selected
    }

    fn set_selected_index(&mut self, index: usize) {
        self.selected = clamp_selection(index, self.visible.len());
    }
}
