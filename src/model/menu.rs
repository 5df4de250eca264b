//! Menu list kind: labelled items grouped into titled sections.
//!
//! Sections are drawn as synthetic rows: a `--- title ---` header wherever
//! the section changes, preceded by a blank spacer when an earlier section
//! exists. Headers are suppressed while a filter is active because matches no
//! longer follow section order.

use std::fmt;

use tracing::warn;

use super::error::{HandlerError, ListError};
use super::filtered_list::FilteredList;
use super::list::{ListModel, ListSource, NonModelItem};
use crate::view_state::columns::Alignment;

/// Marker drawn in front of the selected item when selection marking is on.
pub const SELECTION_MARKER: &str = "›";

/// Callback run when a menu item is pressed.
pub type OnPress = Box<dyn FnMut() -> Result<(), HandlerError>>;

/// A titled group of menu items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuSection {
    /// Header text.
    pub title: String,
    /// Label column the header lines up with.
    ///
    /// Counted over [`MenuItem::label_columns`] only. Columns the menu adds in
    /// front of the labels (the key column, the selection marker) are skipped,
    /// so `0` always means the first label column.
    pub column: usize,
}

impl MenuSection {
    /// Create a section whose header aligns with label column `column`.
    pub fn new(title: impl Into<String>, column: usize) -> Self {
        Self {
            title: title.into(),
            column,
        }
    }
}

/// One selectable menu entry.
pub struct MenuItem {
    /// Display columns of the label.
    pub label_columns: Vec<String>,
    /// Key that presses this item directly.
    pub key: Option<char>,
    /// Section this item belongs to.
    pub section: Option<MenuSection>,
    on_press: Option<OnPress>,
}

impl MenuItem {
    /// Create an item with the given label columns.
    pub fn new<I, S>(label_columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            label_columns: label_columns.into_iter().map(Into::into).collect(),
            key: None,
            section: None,
            on_press: None,
        }
    }

    /// Bind a key to this item.
    pub fn with_key(mut self, key: char) -> Self {
        self.key = Some(key);
        self
    }

    /// Place this item in `section`.
    pub fn with_section(mut self, section: MenuSection) -> Self {
        self.section = Some(section);
        self
    }

    /// Run `handler` when the item is pressed.
    pub fn on_press<F>(mut self, handler: F) -> Self
    where
        F: FnMut() -> Result<(), HandlerError> + 'static,
    {
        self.on_press = Some(Box::new(handler));
        self
    }

    /// First label column, used in messages.
    pub fn label(&self) -> &str {
        self.label_columns.first().map(String::as_str).unwrap_or("")
    }
}

impl fmt::Debug for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuItem")
            .field("label_columns", &self.label_columns)
            .field("key", &self.key)
            .field("section", &self.section)
            .field("on_press", &self.on_press.is_some())
            .finish()
    }
}

fn label_search_columns(item: &MenuItem) -> Vec<String> {
    item.label_columns.clone()
}

/// Synthetic row payload of a menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuSectionRow {
    /// Blank line separating two sections.
    Spacer,
    /// Section title aligned under a label column.
    Header {
        /// Section title.
        title: String,
        /// Label column to align with.
        column: usize,
    },
}

/// View model backing a menu list.
#[derive(Debug)]
pub struct MenuViewModel {
    items: FilteredList<MenuItem>,
    column_alignments: Vec<Alignment>,
    selection_marker: bool,
    // Any visible item has a key; refreshed whenever the visible items change
    show_keys: bool,
}

impl Default for MenuViewModel {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl MenuViewModel {
    /// Create a menu over `items`.
    pub fn new(items: Vec<MenuItem>) -> Self {
        let mut menu = Self {
            items: FilteredList::new(items, label_search_columns),
            column_alignments: Vec::new(),
            selection_marker: false,
            show_keys: false,
        };
        menu.refresh_show_keys();
        menu
    }

    /// Replace the items and the per-label-column alignments.
    pub fn set_menu_items(&mut self, items: Vec<MenuItem>, column_alignments: Vec<Alignment>) {
        self.items.set_items(items);
        self.column_alignments = column_alignments;
        self.refresh_show_keys();
    }

    /// Draw [`SELECTION_MARKER`] in front of the selected row.
    ///
    /// Rows then depend on the selection, so the list needs live highlight to
    /// stay current between full renders.
    pub fn set_selection_marker(&mut self, on: bool) {
        self.selection_marker = on;
    }

    /// Visible items.
    pub fn items(&self) -> &FilteredList<MenuItem> {
        &self.items
    }

    /// Selected item, if any.
    pub fn selected_item(&self) -> Option<&MenuItem> {
        self.items.selected()
    }

    /// Apply a label filter. Section headers disappear while filtering.
    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.items.set_filter(filter);
        self.refresh_show_keys();
    }

    /// Remove the label filter.
    pub fn clear_filter(&mut self) {
        self.items.clear_filter();
        self.refresh_show_keys();
    }

    /// Whether a filter is active.
    pub fn is_filtering(&self) -> bool {
        self.items.is_filtering()
    }

    /// Model index of the visible item bound to `key`.
    pub fn index_of_key(&self, key: char) -> Option<usize> {
        self.items.iter().position(|item| item.key == Some(key))
    }

    /// Run the press handler of the item at `index`.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if no visible item has that index; `Action` carrying
    /// the handler's error unchanged if the handler fails. The selection is
    /// not touched either way.
    pub fn press(&mut self, index: usize) -> Result<(), ListError> {
        let len = self.items.len();
        let item = self
            .items
            .get_mut(index)
            .ok_or(ListError::IndexOutOfRange { index, len })?;
        let Some(handler) = item.on_press.as_mut() else {
            return Ok(());
        };
        handler().map_err(|source| {
            warn!(label = item.label(), error = %source, "Menu item action failed");
            ListError::Action {
                label: item.label().to_string(),
                source,
            }
        })
    }

    fn refresh_show_keys(&mut self) {
        self.show_keys = self.items.iter().any(|item| item.key.is_some());
    }

    /// Display columns in front of the label columns.
    fn prefix_columns(&self) -> usize {
        usize::from(self.selection_marker) + usize::from(self.show_keys)
    }
}

impl ListModel for MenuViewModel {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn selected_index(&self) -> usize {
        self.items.selected_index()
    }

    fn set_selected_index(&mut self, index: usize) {
        self.items.set_selected_index(index);
    }
}

impl ListSource for MenuViewModel {
    type Payload = MenuSectionRow;

    fn display_strings(&self, start: usize, len: usize) -> Vec<Vec<String>> {
        let selected = self.items.selected_index();
        let end = start.saturating_add(len).min(self.items.len());
        (start..end)
            .filter_map(|index| self.items.get(index).map(|item| (index, item)))
            .map(|(index, item)| {
                let mut columns = Vec::with_capacity(item.label_columns.len() + 2);
                if self.selection_marker {
                    let marker = if index == selected { SELECTION_MARKER } else { "" };
                    columns.push(marker.to_string());
                }
                if self.show_keys {
                    columns.push(item.key.map(String::from).unwrap_or_default());
                }
                columns.extend(item.label_columns.iter().cloned());
                columns
            })
            .collect()
    }

    fn column_alignments(&self) -> Vec<Alignment> {
        if self.column_alignments.is_empty() {
            return Vec::new();
        }
        let mut alignments = vec![Alignment::Left; self.prefix_columns()];
        alignments.extend(self.column_alignments.iter().copied());
        alignments
    }

    fn non_model_items(&self, _column_positions: &[usize]) -> Vec<NonModelItem<MenuSectionRow>> {
        if self.items.is_filtering() {
            return Vec::new();
        }

        let mut rows = Vec::new();
        let mut previous: Option<&MenuSection> = None;
        for (index, item) in self.items.iter().enumerate() {
            let Some(section) = item.section.as_ref() else {
                continue;
            };
            if previous == Some(section) {
                continue;
            }
            if previous.is_some() {
                rows.push(NonModelItem::new(index, MenuSectionRow::Spacer));
            }
            rows.push(NonModelItem::new(
                index,
                MenuSectionRow::Header {
                    title: section.title.clone(),
                    column: section.column,
                },
            ));
            previous = Some(section);
        }
        rows
    }

    fn render_non_model_item(
        &self,
        item: &NonModelItem<MenuSectionRow>,
        column_positions: &[usize],
    ) -> String {
        match &item.payload {
            MenuSectionRow::Spacer => String::new(),
            MenuSectionRow::Header { title, column } => {
                let display_column = self.prefix_columns() + column;
                let padding = column_positions
                    .get(display_column)
                    .or(column_positions.last())
                    .copied()
                    .unwrap_or(0);
                format!("{}--- {} ---", " ".repeat(padding), title)
            }
        }
    }
}

/// Parse a plain-text menu description.
///
/// - `# Title` starts a section (headers align with the first label column)
/// - `[k] label` binds key `k`
/// - Tabs separate label columns
/// - Blank lines are ignored
pub fn parse_menu(text: &str) -> Vec<MenuItem> {
    let mut items = Vec::new();
    let mut section: Option<MenuSection> = None;

    for line in text.lines() {
        let line = line.trim_end();
        if line.trim().is_empty() {
            continue;
        }
        if let Some(title) = line.strip_prefix("# ") {
            section = Some(MenuSection::new(title.trim(), 0));
            continue;
        }

        let (key, label) = split_key_prefix(line);
        let mut item = MenuItem::new(label.split('\t'));
        item.key = key;
        item.section = section.clone();
        items.push(item);
    }

    items
}

fn split_key_prefix(line: &str) -> (Option<char>, &str) {
    let mut chars = line.char_indices();
    match (chars.next(), chars.next(), chars.next(), chars.next()) {
        (Some((_, '[')), Some((_, key)), Some((_, ']')), Some((i, ' '))) => {
            (Some(key), &line[i + 1..])
        }
        _ => (None, line),
    }
}
