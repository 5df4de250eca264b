//! Scroll-off margin enforcement.
//!
//! After the cursor moves, the viewport scrolls so the cursor does not sit
//! within `margin` rows of the edge it moved towards. The check is
//! direction-specific: the caller runs the up-check after moving up and the
//! down-check after moving down, so a cursor resting on a margin boundary
//! after a wheel scroll is not pulled back from the other side.
//!
//! Nothing happens when the viewport is too short to hold both margins, or
//! when the row before the move was not visible (the viewport was scrolled
//! away from the cursor on purpose).

use tracing::debug;

use super::viewport::{Viewport, ViewSurface};

fn margins_apply(viewport: Viewport, margin: usize, before: usize) -> bool {
    viewport.height > margin.saturating_mul(2) && viewport.contains(before)
}

/// Rows to scroll up after moving the cursor from `before` to `after`.
///
/// Returns `None` when no scrolling is needed.
pub fn scroll_up_correction(
    viewport: Viewport,
    margin: usize,
    before: usize,
    after: usize,
) -> Option<usize> {
    if !margins_apply(viewport, margin, before) {
        return None;
    }
    let margin_end = viewport.origin_y + margin;
    (after < margin_end).then(|| margin_end - after)
}

/// Rows to scroll down after moving the cursor from `before` to `after`.
///
/// Returns `None` when no scrolling is needed.
pub fn scroll_down_correction(
    viewport: Viewport,
    margin: usize,
    before: usize,
    after: usize,
) -> Option<usize> {
    if !margins_apply(viewport, margin, before) {
        return None;
    }
    // height > 2 * margin, so this cannot underflow.
    let margin_start = viewport.origin_y + viewport.height - margin - 1;
    (after > margin_start).then(|| after - margin_start)
}

/// Apply [`scroll_up_correction`] to `view`. Returns the rows scrolled.
pub fn check_scroll_up<V>(view: &mut V, margin: usize, before: usize, after: usize) -> Option<usize>
where
    V: ViewSurface + ?Sized,
{
    let rows = scroll_up_correction(view.viewport_bounds(), margin, before, after)?;
    debug!(rows, before, after, margin, "Scroll-off: scrolling up");
    view.scroll_up(rows);
    Some(rows)
}

/// Apply [`scroll_down_correction`] to `view`. Returns the rows scrolled.
pub fn check_scroll_down<V>(
    view: &mut V,
    margin: usize,
    before: usize,
    after: usize,
) -> Option<usize>
where
    V: ViewSurface + ?Sized,
{
    let rows = scroll_down_correction(view.viewport_bounds(), margin, before, after)?;
    debug!(rows, before, after, margin, "Scroll-off: scrolling down");
    view.scroll_down(rows);
    Some(rows)
}
