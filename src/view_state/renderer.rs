//! Full and windowed rendering of a list into text rows.
//!
//! A full render materializes every row: model rows from the display-string
//! provider, aligned into columns, with synthetic rows spliced in. It returns
//! the rows together with the [`RenderLayout`] (synthetic positions and column
//! widths) that produced them.
//!
//! A windowed render re-renders only a view range and reuses a layout from a
//! previous full render, including the synthetic rows it rendered. It is only
//! valid while the model range and synthetic rows are unchanged since that
//! full render; its output then equals the matching slice of the full render.

use tracing::{debug, warn};

use super::columns::{render_display_strings, ColumnLayout};
use super::index_map::SyntheticIndexSet;
use crate::model::list::{ListSource, NonModelItem};

/// Layout metadata recorded by a full render.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderLayout {
    synthetic: SyntheticIndexSet,
    synthetic_rows: Vec<String>,
    columns: ColumnLayout,
    model_len: usize,
}

impl RenderLayout {
    /// View positions of synthetic rows.
    pub fn synthetic(&self) -> &SyntheticIndexSet {
        &self.synthetic
    }

    /// Text of each synthetic row, in view order.
    pub fn synthetic_rows(&self) -> &[String] {
        &self.synthetic_rows
    }

    /// Column widths and offsets.
    pub fn columns(&self) -> &ColumnLayout {
        &self.columns
    }

    /// Number of model rows rendered.
    pub fn model_len(&self) -> usize {
        self.model_len
    }

    /// Total rendered rows, synthetic ones included.
    pub fn view_len(&self) -> usize {
        self.model_len + self.synthetic.len()
    }
}

/// Output of a full render.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderedList {
    /// Every rendered row in view order.
    pub lines: Vec<String>,
    /// Layout to hand to index mapping and windowed renders.
    pub layout: RenderLayout,
}

impl RenderedList {
    /// Rows joined with newlines.
    pub fn content(&self) -> String {
        self.lines.join("\n")
    }
}

/// Render model rows `[0, model_len)` with synthetic rows spliced in.
///
/// Each synthetic row is inserted at its declared model index plus the number
/// of synthetic rows already inserted, so positions declared against the
/// unmodified model sequence do not collide. Declarations past the end are
/// clamped to the end.
pub fn render_full<S>(source: &S, model_len: usize) -> RenderedList
where
    S: ListSource + ?Sized,
{
    let rows = source.display_strings(0, model_len);
    let alignments = source.column_alignments();
    let (mut lines, columns) = render_display_strings(&rows, &alignments);
    let rendered_model_rows = lines.len();

    let items = sorted_non_model_items(source, columns.positions());
    let mut synthetic = SyntheticIndexSet::new();
    let mut synthetic_rows = Vec::with_capacity(items.len());
    for (offset, item) in items.iter().enumerate() {
        let declared = item.index + offset;
        let view_index = declared.min(lines.len());
        if view_index != declared {
            warn!(
                declared_index = item.index,
                model_len = rendered_model_rows,
                "Synthetic row declared past the end of the list; appending"
            );
        }
        let row = source.render_non_model_item(item, columns.positions());
        lines.insert(view_index, row.clone());
        synthetic_rows.push(row);
        synthetic.push(view_index);
    }

    debug!(
        model_rows = rendered_model_rows,
        synthetic_rows = synthetic.len(),
        "Full list render"
    );

    RenderedList {
        lines,
        layout: RenderLayout {
            synthetic,
            synthetic_rows,
            columns,
            model_len: rendered_model_rows,
        },
    }
}

/// Render view rows `[start, start + height)` using a previous full render's
/// layout.
///
/// Only the model rows inside the window are requested from the provider.
/// Synthetic rows are copied from the layout. The range is clipped to the rendered rows; a window entirely past the end
/// yields no rows.
pub fn render_window<S>(
    source: &S,
    layout: &RenderLayout,
    start: usize,
    height: usize,
) -> Vec<String>
where
    S: ListSource + ?Sized,
{
    let end = start.saturating_add(height).min(layout.view_len());
    if start >= end {
        return Vec::new();
    }

    let synthetic = &layout.synthetic;

    let mut model_rows = 0;
    let mut first_model_row = None;
    for view_index in start..end {
        if !synthetic.contains(view_index) {
            model_rows += 1;
            first_model_row.get_or_insert(view_index);
        }
    }

    let rows = match first_model_row {
        Some(view_index) => source.display_strings(synthetic.view_to_model(view_index), model_rows),
        None => Vec::new(),
    };
    let mut rows = rows.iter();
    let lines: Vec<String> = (start..end)
        .map(|view_index| match synthetic.ordinal_of(view_index) {
            Some(ordinal) => layout
                .synthetic_rows
                .get(ordinal)
                .cloned()
                .unwrap_or_default(),
            None => rows
                .next()
                .map(|row| layout.columns.render_row(row))
                .unwrap_or_default(),
        })
        .collect();

    debug!(start, rows = lines.len(), model_rows, "Windowed list render");
    lines
}

fn sorted_non_model_items<S>(source: &S, positions: &[usize]) -> Vec<NonModelItem<S::Payload>>
where
    S: ListSource + ?Sized,
{
    let mut items = source.non_model_items(positions);
    // Stable: rows declared at the same index keep their declared order.
    items.sort_by_key(|item| item.index);
    items
}

#[cfg(test)]
#[path = "renderer_tests.rs"]
mod tests;
