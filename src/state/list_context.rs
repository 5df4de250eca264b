//! A list bound to the surface that displays it.
//!
//! [`ListContext`] owns the list, its surface, its configuration, and the
//! layout of the last full render. It drives the render and focus lifecycle:
//!
//! - render request: full render, whole content replaced
//! - focus gained: footer and highlight update now, cursor placement deferred
//!   until after layout
//! - focus lost: horizontal scroll reset
//!
//! When live highlight is on, viewport changes re-render only the visible
//! window with [`render_window`].

use tracing::debug;

use super::after_layout::AfterLayout;
use crate::config::ListConfig;
use crate::model::list::{ListModel, ListSource};
use crate::view_state::renderer::{render_full, render_window, RenderLayout};
use crate::view_state::viewport::ViewSurface;

/// Footer text for a list: `"{selected + 1} of {len}"`, or `"0 of 0"`.
pub fn format_list_footer(selected_index: usize, len: usize) -> String {
    if len == 0 {
        return "0 of 0".to_string();
    }
    format!("{} of {}", selected_index + 1, len)
}

/// A list together with the surface it renders into.
#[derive(Debug)]
pub struct ListContext<L, V> {
    list: L,
    view: V,
    config: ListConfig,
    layout: RenderLayout,
}

impl<L, V> ListContext<L, V>
where
    L: ListModel + ListSource,
    V: ViewSurface,
{
    /// Bind `list` to `view`. Nothing is rendered until [`handle_render`].
    ///
    /// [`handle_render`]: Self::handle_render
    pub fn new(list: L, view: V, config: ListConfig) -> Self {
        Self {
            list,
            view,
            config,
            layout: RenderLayout::default(),
        }
    }

    /// The list.
    pub fn list(&self) -> &L {
        &self.list
    }

    /// Mutable access to the list.
    ///
    /// Changing the items invalidates the layout; call
    /// [`handle_render`](Self::handle_render) afterwards.
    pub fn list_mut(&mut self) -> &mut L {
        &mut self.list
    }

    /// The surface.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Mutable access to the surface.
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Behaviour settings.
    pub fn config(&self) -> ListConfig {
        self.config
    }

    /// Layout of the last full render.
    pub fn layout(&self) -> &RenderLayout {
        &self.layout
    }

    /// View row displaying model row `model_index`.
    pub fn model_index_to_view_index(&self, model_index: usize) -> usize {
        self.layout.synthetic().model_to_view(model_index)
    }

    /// Model row displayed at, or just after, view row `view_index`.
    pub fn view_index_to_model_index(&self, view_index: usize) -> usize {
        self.layout.synthetic().view_to_model(view_index)
    }

    /// Model row displayed exactly at `view_index`.
    ///
    /// `None` for synthetic rows and rows past the end.
    pub fn model_index_at_view_row(&self, view_index: usize) -> Option<usize> {
        if view_index >= self.layout.view_len() || self.layout.synthetic().contains(view_index) {
            return None;
        }
        Some(self.view_index_to_model_index(view_index))
    }

    /// Footer text for the current selection.
    pub fn footer(&self) -> String {
        format_list_footer(self.list.selected_index(), self.list.len())
    }

    /// Render every row and replace the surface content.
    pub fn handle_render(&mut self) {
        self.list.revalidate_selection();
        let rendered = render_full(&self.list, self.list.len());
        self.view.set_content(rendered.content());
        self.layout = rendered.layout;
        self.view.request_redraw();
        self.update_footer();
    }

    /// Re-render only the rows currently in the viewport.
    pub fn refresh_viewport(&mut self) {
        let viewport = self.view.viewport_bounds();
        let lines = render_window(&self.list, &self.layout, viewport.origin_y, viewport.height);
        self.view.set_viewport_content(lines.join("\n"));
    }

    /// Focus gained or selection changed.
    ///
    /// Placing the cursor needs the viewport height of the coming layout, so
    /// it is queued on `queue`. Footer, highlight, and (with live highlight)
    /// the visible window are updated immediately.
    pub fn handle_focus(&mut self, queue: &mut AfterLayout<Self>)
    where
        L: 'static,
        V: 'static,
    {
        self.view.set_highlight(!self.list.is_empty());

        queue.push(|ctx: &mut Self| {
            ctx.focus_selected_line();
            Ok(())
        });

        self.update_footer();

        if self.config.live_highlight {
            self.refresh_viewport();
        }
    }

    /// Focus moved to another surface.
    pub fn handle_focus_lost(&mut self) {
        self.view.set_origin_x(0);

        if self.config.live_highlight {
            self.refresh_viewport();
        }
    }

    /// Select the search result at model index `index` and refocus.
    pub fn on_search_select(&mut self, index: usize, queue: &mut AfterLayout<Self>)
    where
        L: 'static,
        V: 'static,
    {
        self.list.set_selected_index(index);
        self.handle_focus(queue);
    }

    /// Move the surface cursor to the view row of the selection.
    ///
    /// Runs after layout. Re-renders the visible window if the viewport
    /// scrolled and live highlight is on. Does nothing for an empty list.
    pub fn focus_selected_line(&mut self) {
        if self.list.is_empty() {
            return;
        }

        let origin_before = self.view.viewport_bounds().origin_y;
        let row = self.model_index_to_view_index(self.list.selected_index());
        self.view.focus_point(row);
        let origin_after = self.view.viewport_bounds().origin_y;

        debug!(row, origin_before, origin_after, "Focused selected line");

        if origin_before != origin_after && self.config.live_highlight {
            self.refresh_viewport();
        }
    }

    /// Scroll the viewport up without moving the selection.
    pub fn scroll_view_up(&mut self, rows: usize) {
        self.view.scroll_up(rows);
        if self.config.live_highlight {
            self.refresh_viewport();
        }
    }

    /// Scroll the viewport down without moving the selection.
    pub fn scroll_view_down(&mut self, rows: usize) {
        self.view.scroll_down(rows);
        if self.config.live_highlight {
            self.refresh_viewport();
        }
    }

    /// Write the footer for the current selection to the surface.
    pub fn update_footer(&mut self) {
        let footer = self.footer();
        self.view.set_footer(footer);
    }
}

#[cfg(test)]
#[path = "list_context_tests.rs"]
mod tests;
