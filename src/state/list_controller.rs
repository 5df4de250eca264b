//! Keyboard and mouse navigation of a list.
//!
//! Every selection change follows the same sequence: move the model
//! selection, apply the scroll-off margin in view space for the direction of
//! travel, then refocus (footer now, cursor after layout).

use tracing::trace;

use super::after_layout::AfterLayout;
use super::list_context::ListContext;
use crate::model::key_action::KeyAction;
use crate::model::list::{ListModel, ListSource};
use crate::view_state::scroll_off::{check_scroll_down, check_scroll_up};
use crate::view_state::viewport::ViewSurface;

/// Apply a navigation action. Returns `false` for actions this handler does
/// not own (confirm, search, quit, horizontal scroll).
pub fn handle_list_action<L, V>(
    ctx: &mut ListContext<L, V>,
    queue: &mut AfterLayout<ListContext<L, V>>,
    action: KeyAction,
) -> bool
where
    L: ListModel + ListSource + 'static,
    V: ViewSurface + 'static,
{
    trace!(?action, "List action");

    if action.moves_selection() && ctx.list().is_empty() {
        // Nothing to select or focus
        ctx.update_footer();
        return true;
    }

    match action {
        KeyAction::PrevItem => handle_line_change(ctx, queue, -1),
        KeyAction::NextItem => handle_line_change(ctx, queue, 1),
        KeyAction::PrevPage => {
            let step = page_step(ctx);
            handle_line_change(ctx, queue, -step);
        }
        KeyAction::NextPage => {
            let step = page_step(ctx);
            handle_line_change(ctx, queue, step);
        }
        KeyAction::GotoTop => {
            ctx.list_mut().set_selected_index(0);
            ctx.handle_focus(queue);
        }
        KeyAction::GotoBottom => {
            let last = ctx.list().len().saturating_sub(1);
            ctx.list_mut().set_selected_index(last);
            ctx.handle_focus(queue);
        }
        KeyAction::ScrollUp => ctx.scroll_view_up(1),
        KeyAction::ScrollDown => ctx.scroll_view_down(1),
        _ => return false,
    }

    true
}

/// Select the model row shown at view row `view_row` (a click).
///
/// Returns the selected model index, or `None` when the row is synthetic or
/// past the end; the selection is then unchanged.
pub fn select_view_row<L, V>(
    ctx: &mut ListContext<L, V>,
    queue: &mut AfterLayout<ListContext<L, V>>,
    view_row: usize,
) -> Option<usize>
where
    L: ListModel + ListSource + 'static,
    V: ViewSurface + 'static,
{
    let model_index = ctx.model_index_at_view_row(view_row)?;
    ctx.list_mut().set_selected_index(model_index);
    ctx.handle_focus(queue);
    Some(model_index)
}

/// Rows moved by a page action: viewport height minus one, at least one.
fn page_step<L, V>(ctx: &ListContext<L, V>) -> isize
where
    L: ListModel + ListSource,
    V: ViewSurface,
{
    let height = ctx.view().viewport_bounds().height;
    isize::try_from(height.saturating_sub(1).max(1)).unwrap_or(isize::MAX)
}

fn handle_line_change<L, V>(
    ctx: &mut ListContext<L, V>,
    queue: &mut AfterLayout<ListContext<L, V>>,
    change: isize,
) where
    L: ListModel + ListSource + 'static,
    V: ViewSurface + 'static,
{
    let before = ctx.list().selected_index();
    ctx.list_mut().move_selection(change);
    let after = ctx.list().selected_index();

    if before != after {
        let view_before = ctx.model_index_to_view_index(before);
        let view_after = ctx.model_index_to_view_index(after);
        let margin = ctx.config().scroll_off_margin;
        if change < 0 {
            check_scroll_up(ctx.view_mut(), margin, view_before, view_after);
        } else {
            check_scroll_down(ctx.view_mut(), margin, view_before, view_after);
        }
    }

    ctx.handle_focus(queue);
}

#[cfg(test)]
#[path = "list_controller_tests.rs"]
mod tests;
