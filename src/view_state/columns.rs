//! Column alignment for display strings.
//!
//! Rows arrive as columns of plain text. Every column is padded to its widest
//! cell (measured with `unicode-width`) and columns are joined by a single
//! space. The resulting [`ColumnLayout`] is kept so later partial renders pad
//! rows exactly as the full render did.

use unicode_width::UnicodeWidthStr;

/// Horizontal alignment of a display column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    /// Pad on the right. The last left-aligned column is not padded.
    #[default]
    Left,
    /// Pad on the left.
    Right,
}

/// Column widths and offsets computed by [`render_display_strings`].
///
/// # Invariants
/// - `kept`, `widths`, and `alignments` have equal length
/// - `positions.len() == column_count + 1` (the last entry is the end offset)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColumnLayout {
    /// Indices of the input columns that were rendered (blank ones dropped).
    kept: Vec<usize>,
    /// Pad width of each kept column.
    widths: Vec<usize>,
    /// Alignment of each kept column.
    alignments: Vec<Alignment>,
    /// Start offset of every input column, plus the end offset.
    positions: Vec<usize>,
}

impl ColumnLayout {
    /// Start offset of each input column followed by the end offset.
    ///
    /// A dropped (blank) column reports the position of the column after it.
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// Pad widths of the rendered columns.
    pub fn widths(&self) -> &[usize] {
        &self.widths
    }

    /// Render one row with this layout's widths and alignments.
    pub fn render_row(&self, row: &[String]) -> String {
        let mut line = String::new();
        let last = self.kept.len().saturating_sub(1);
        for (j, &column) in self.kept.iter().enumerate() {
            if j > 0 {
                line.push(' ');
            }
            let cell = row.get(column).map(String::as_str).unwrap_or("");
            let padding = self.widths[j].saturating_sub(cell.width());
            match self.alignments[j] {
                Alignment::Right => {
                    line.extend(std::iter::repeat(' ').take(padding));
                    line.push_str(cell);
                }
                Alignment::Left => {
                    line.push_str(cell);
                    if j < last {
                        line.extend(std::iter::repeat(' ').take(padding));
                    }
                }
            }
        }
        line
    }
}

/// Align rows of display columns into lines.
///
/// Columns that are empty in every row are dropped. `alignments` is indexed by
/// input column; missing entries default to [`Alignment::Left`].
///
/// # Returns
/// The rendered lines and the layout used to render them.
pub fn render_display_strings(
    rows: &[Vec<String>],
    alignments: &[Alignment],
) -> (Vec<String>, ColumnLayout) {
    let layout = compute_layout(rows, alignments);
    let lines = rows.iter().map(|row| layout.render_row(row)).collect();
    (lines, layout)
}

fn compute_layout(rows: &[Vec<String>], alignments: &[Alignment]) -> ColumnLayout {
    let column_count = rows.iter().map(Vec::len).max().unwrap_or(0);

    let mut kept = Vec::new();
    let mut removed = Vec::new();
    for column in 0..column_count {
        let blank = rows
            .iter()
            .all(|row| row.get(column).is_none_or(|cell| cell.is_empty()));
        if blank {
            removed.push(column);
        } else {
            kept.push(column);
        }
    }

    let widths: Vec<usize> = kept
        .iter()
        .map(|&column| {
            rows.iter()
                .filter_map(|row| row.get(column))
                .map(|cell| cell.width())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let kept_alignments = kept
        .iter()
        .map(|&column| alignments.get(column).copied().unwrap_or_default())
        .collect();

    let mut positions = Vec::with_capacity(column_count + 1);
    positions.push(0);
    for (j, width) in widths.iter().enumerate() {
        positions.push(positions[j] + width + 1);
    }
    // A dropped column sits where the next rendered column starts.
    for column in removed {
        if column < positions.len() {
            positions.insert(column, positions[column]);
        }
    }

    ColumnLayout {
        kept,
        widths,
        alignments: kept_alignments,
        positions,
    }
}
