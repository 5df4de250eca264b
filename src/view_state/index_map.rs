//! Translation between model index space and view index space.
//!
//! Model indices count only real items. View indices count every rendered
//! row, including synthetic rows (section headers, spacers). The bridge is the
//! ordered set of view positions occupied by synthetic rows, produced by the
//! last full render.

/// Strictly increasing view positions of synthetic rows.
///
/// # Invariants
/// - Positions are strictly increasing
/// - Built only by the renderer or from already-sorted data
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SyntheticIndexSet(Vec<usize>);

impl SyntheticIndexSet {
    /// Empty set: view and model indices coincide.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from positions, sorting and removing duplicates.
    pub fn from_positions(mut positions: Vec<usize>) -> Self {
        positions.sort_unstable();
        positions.dedup();
        Self(positions)
    }

    /// Record a synthetic row. Positions must be pushed in increasing order.
    pub(crate) fn push(&mut self, view_index: usize) {
        debug_assert!(
            self.0.last().is_none_or(|&last| last < view_index),
            "synthetic positions must be strictly increasing"
        );
        self.0.push(view_index);
    }

    /// Number of synthetic rows.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no synthetic rows are present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Synthetic positions in increasing order.
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Whether `view_index` holds a synthetic row.
    pub fn contains(&self, view_index: usize) -> bool {
        self.0.binary_search(&view_index).is_ok()
    }

    /// Ordinal of the synthetic row at `view_index`, if there is one.
    pub fn ordinal_of(&self, view_index: usize) -> Option<usize> {
        self.0.binary_search(&view_index).ok()
    }

    /// Map a model index to the view row that displays it.
    ///
    /// Every synthetic row at or before the running index pushes the model
    /// row down by one. Monotonic in `model_index`.
    pub fn model_to_view(&self, model_index: usize) -> usize {
        let mut index = model_index;
        for &position in &self.0 {
            if position > index {
                break;
            }
            index += 1;
        }
        index
    }

    /// Map a view row back to the model index it displays.
    ///
    /// Walks the set ascending and steps back once for every synthetic row at
    /// or before `view_index`, saturating at 0. A synthetic row maps to the
    /// model row drawn before it. Positions are compared against `view_index`
    /// itself rather than the running value, otherwise a spacer followed by a
    /// header would be counted once and the round trip with
    /// [`model_to_view`](Self::model_to_view) would break.
    pub fn view_to_model(&self, view_index: usize) -> usize {
        let mut index = view_index;
        for &position in &self.0 {
            if position > view_index {
                break;
            }
            index = index.saturating_sub(1);
        }
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(positions: &[usize]) -> SyntheticIndexSet {
        SyntheticIndexSet::from_positions(positions.to_vec())
    }

    #[test]
    fn empty_set_is_identity() {
        let set = SyntheticIndexSet::new();
        for i in 0..10 {
            assert_eq!(set.model_to_view(i), i);
            assert_eq!(set.view_to_model(i), i);
        }
    }

    #[test]
    fn model_to_view_skips_synthetic_rows() {
        let set = set(&[2, 5]);
        assert_eq!(set.model_to_view(0), 0);
        assert_eq!(set.model_to_view(1), 1);
        assert_eq!(set.model_to_view(2), 3);
        assert_eq!(set.model_to_view(3), 4);
        assert_eq!(set.model_to_view(4), 6);
    }

    #[test]
    fn view_to_model_inverts_model_to_view() {
        let set = set(&[2, 5]);
        assert_eq!(set.view_to_model(0), 0);
        assert_eq!(set.view_to_model(3), 2);
        assert_eq!(set.view_to_model(4), 3);
        assert_eq!(set.view_to_model(6), 4);
    }

    #[test]
    fn consecutive_synthetic_rows_at_top() {
        // Spacer and header before model row 0.
        let set = set(&[0, 1]);
        assert_eq!(set.model_to_view(0), 2);
        assert_eq!(set.view_to_model(2), 0);
    }

    #[test]
    fn synthetic_row_maps_to_preceding_model_row() {
        let set = set(&[2, 5]);
        assert_eq!(set.view_to_model(2), 1);
        assert_eq!(set.view_to_model(5), 3);
    }

    #[test]
    fn leading_synthetic_rows_saturate_at_zero() {
        let set = set(&[0, 1, 4]);
        assert_eq!(set.view_to_model(0), 0);
        assert_eq!(set.view_to_model(1), 0);
        assert_eq!(set.view_to_model(4), 1);
    }

    #[test]
    fn adjacent_synthetic_rows_round_trip() {
        // Header, two rows, spacer, header, two rows.
        let set = set(&[0, 3, 4]);
        for model_index in 0..4 {
            let view_index = set.model_to_view(model_index);
            assert_eq!(set.view_to_model(view_index), model_index);
        }
        assert_eq!(set.model_to_view(2), 5);
        assert_eq!(set.view_to_model(5), 2);
        assert_eq!(set.view_to_model(4), 1, "header after a spacer");
    }

    #[test]
    fn from_positions_sorts_and_dedups() {
        let set = SyntheticIndexSet::from_positions(vec![5, 2, 5, 0]);
        assert_eq!(set.as_slice(), &[0, 2, 5]);
    }

    #[test]
    fn contains_and_ordinal() {
        let set = set(&[1, 4, 9]);
        assert!(set.contains(4));
        assert!(!set.contains(5));
        assert_eq!(set.ordinal_of(9), Some(2));
        assert_eq!(set.ordinal_of(3), None);
    }

    #[test]
    fn push_appends_in_order() {
        let mut set = SyntheticIndexSet::new();
        set.push(0);
        set.push(3);
        assert_eq!(set.as_slice(), &[0, 3]);
        assert_eq!(set.len(), 2);
    }
}
