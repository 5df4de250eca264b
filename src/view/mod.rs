//! TUI rendering and terminal management (impure shell)
//!
//! # Module Structure
//!
//! - `buffer_view`: BufferView - in-memory surface implementing `ViewSurface`
//! - `list_pane`: ListPane - ratatui widget drawing a BufferView

pub mod buffer_view;
pub mod list_pane;

pub use buffer_view::BufferView;
pub use list_pane::ListPane;

use crate::config::keybindings::KeyBindings;
use crate::config::ListConfig;
use crate::model::{InputError, KeyAction, ListError, ListModel, MenuItem, MenuViewModel};
use crate::source::InputSource;
use crate::state::{handle_list_action, select_view_row, AfterLayout, ListContext, SearchState};
use crate::view_state::viewport::ViewSurface;
use crossterm::{
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
        MouseEventKind,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Layout, Position, Rect},
    widgets::Paragraph,
    Terminal,
};
use std::io::{self, Stdout};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Columns moved by one horizontal scroll step.
pub const HORIZONTAL_SCROLL_COLUMNS: usize = 4;

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Input source error
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    /// A task deferred past layout failed
    #[error("List error: {0}")]
    List(#[from] ListError),
}

/// The menu list bound to its surface.
pub type MenuContext = ListContext<MenuViewModel, BufferView>;

/// What the bottom prompt line is collecting.
#[derive(Debug, Clone, PartialEq, Eq)]
enum PromptMode {
    Normal,
    Filter {
        text: String,
    },
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: Backend,
{
    terminal: Terminal<B>,
    menu: MenuContext,
    after_layout: AfterLayout<MenuContext>,
    key_bindings: KeyBindings,
    search: SearchState,
    prompt: PromptMode,
    title: String,
    status: Option<String>,
    chosen: Option<String>,
    last_list_area: Option<Rect>,
    last_prompt: String,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(
        items: Vec<MenuItem>,
        config: ListConfig,
        title: impl Into<String>,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(crossterm::event::EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self::assemble(
            terminal,
            items,
            config,
            KeyBindings::default(),
            title.into(),
        ))
    }

    /// Run the main event loop
    ///
    /// Returns the label of the chosen item, or `None` if the user quit
    /// without choosing.
    pub fn run(&mut self) -> Result<Option<String>, TuiError> {
        self.tick()?;

        loop {
            let quit = match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.dispatch_key(key),
                Event::Mouse(mouse) => self.dispatch_mouse(mouse),
                Event::Resize(width, height) => {
                    debug!(width, height, "Terminal resized");
                    false
                }
                _ => continue,
            };

            if quit {
                return Ok(self.chosen.take());
            }

            self.tick()?;
        }
    }
}

impl<B> TuiApp<B>
where
    B: Backend,
{
    fn assemble(
        terminal: Terminal<B>,
        items: Vec<MenuItem>,
        config: ListConfig,
        key_bindings: KeyBindings,
        title: String,
    ) -> Self {
        let mut list = MenuViewModel::new(items);
        list.set_selection_marker(config.live_highlight);

        let mut menu = ListContext::new(list, BufferView::default(), config);
        let mut after_layout = AfterLayout::new();
        menu.handle_render();
        menu.handle_focus(&mut after_layout);

        Self {
            terminal,
            menu,
            after_layout,
            key_bindings,
            search: SearchState::default(),
            prompt: PromptMode::Normal,
            title,
            status: None,
            chosen: None,
            last_list_area: None,
            last_prompt: String::new(),
        }
    }

    /// Handle a key, reporting list failures on the prompt line.
    ///
    /// Returns true if app should quit
    fn dispatch_key(&mut self, key: KeyEvent) -> bool {
        match self.handle_key(key) {
            Ok(quit) => quit,
            Err(err) => {
                self.report(err);
                false
            }
        }
    }

    fn dispatch_mouse(&mut self, mouse: MouseEvent) -> bool {
        match self.handle_mouse(mouse) {
            Ok(quit) => quit,
            Err(err) => {
                self.report(err);
                false
            }
        }
    }

    fn report(&mut self, err: ListError) {
        warn!(error = %err, "List action failed");
        self.status = Some(err.to_string());
    }

    /// Handle a single keyboard event
    ///
    /// Prompts capture keys first, then bindings, then item keys.
    fn handle_key(&mut self, key: KeyEvent) -> Result<bool, ListError> {
        self.status = None;

        // Ctrl+C quits from any mode
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(true);
        }

        if self.search.is_typing() {
            self.handle_search_input(key);
            return Ok(false);
        }
        if matches!(self.prompt, PromptMode::Filter { .. }) {
            self.handle_filter_input(key);
            return Ok(false);
        }

        if let Some(action) = self.key_bindings.get(key) {
            return self.handle_action(action);
        }

        if let KeyCode::Char(c) = key.code {
            if !key.modifiers.contains(KeyModifiers::CONTROL) {
                if let Some(index) = self.menu.list().index_of_key(c) {
                    self.menu.list_mut().set_selected_index(index);
                    self.menu.handle_focus(&mut self.after_layout);
                    return self.press_item(index);
                }
            }
        }

        Ok(false)
    }

    fn handle_action(&mut self, action: KeyAction) -> Result<bool, ListError> {
        match action {
            KeyAction::Quit => return Ok(true),
            KeyAction::Confirm => {
                if self.menu.list().is_empty() {
                    return Ok(false);
                }
                let index = self.menu.list().selected_index();
                return self.press_item(index);
            }
            KeyAction::StartSearch => self.search.start(),
            KeyAction::NextMatch => {
                if let Some(index) = self.search.next_match() {
                    self.menu.on_search_select(index, &mut self.after_layout);
                }
            }
            KeyAction::PrevMatch => {
                if let Some(index) = self.search.prev_match() {
                    self.menu.on_search_select(index, &mut self.after_layout);
                }
            }
            KeyAction::StartFilter => {
                self.prompt = PromptMode::Filter {
                    text: self.menu.list().items().filter().to_string(),
                };
            }
            KeyAction::Cancel => {
                if matches!(self.search, SearchState::Active { .. }) {
                    self.search.cancel();
                } else if self.menu.list().is_filtering() {
                    self.apply_filter(String::new());
                }
            }
            KeyAction::ScrollLeft => self.menu.view_mut().scroll_left(HORIZONTAL_SCROLL_COLUMNS),
            KeyAction::ScrollRight => self
                .menu
                .view_mut()
                .scroll_right(HORIZONTAL_SCROLL_COLUMNS),
            navigation => {
                handle_list_action(&mut self.menu, &mut self.after_layout, navigation);
            }
        }
        Ok(false)
    }

    fn handle_search_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.search.cancel(),
            KeyCode::Enter => {
                if let Some(index) = self.search.submit(self.menu.list()) {
                    self.menu.on_search_select(index, &mut self.after_layout);
                }
            }
            KeyCode::Backspace => self.search.pop_char(),
            KeyCode::Char(c) => self.search.push_char(c),
            _ => {}
        }
    }

    fn handle_filter_input(&mut self, key: KeyEvent) {
        let PromptMode::Filter { text } = &mut self.prompt else {
            return;
        };
        match key.code {
            KeyCode::Esc => {
                self.prompt = PromptMode::Normal;
                self.apply_filter(String::new());
            }
            KeyCode::Enter => self.prompt = PromptMode::Normal,
            KeyCode::Backspace => {
                text.pop();
                let filter = text.clone();
                self.apply_filter(filter);
            }
            KeyCode::Char(c) => {
                text.push(c);
                let filter = text.clone();
                self.apply_filter(filter);
            }
            _ => {}
        }
    }

    /// Filter the menu and re-render from the top. Search matches refer to
    /// the old item set and are dropped.
    fn apply_filter(&mut self, filter: String) {
        if filter.is_empty() {
            self.menu.list_mut().clear_filter();
        } else {
            self.menu.list_mut().set_filter(filter);
        }
        self.search.cancel();
        self.menu.list_mut().set_selected_index(0);
        self.menu.handle_render();
        self.menu.handle_focus(&mut self.after_layout);
    }

    fn press_item(&mut self, index: usize) -> Result<bool, ListError> {
        self.menu.list_mut().press(index)?;
        self.chosen = self
            .menu
            .list()
            .items()
            .get(index)
            .map(|item| item.label().to_string());
        info!(index, label = ?self.chosen, "Item chosen");
        Ok(true)
    }

    /// Handle a mouse event
    ///
    /// Clicking the selected row confirms it.
    fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<bool, ListError> {
        match mouse.kind {
            MouseEventKind::ScrollUp => {
                handle_list_action(&mut self.menu, &mut self.after_layout, KeyAction::ScrollUp);
            }
            MouseEventKind::ScrollDown => {
                handle_list_action(&mut self.menu, &mut self.after_layout, KeyAction::ScrollDown);
            }
            MouseEventKind::Down(MouseButton::Left) => {
                return self.handle_click(mouse.column, mouse.row);
            }
            _ => {}
        }
        Ok(false)
    }

    fn handle_click(&mut self, column: u16, row: u16) -> Result<bool, ListError> {
        let Some(area) = self.last_list_area else {
            return Ok(false);
        };
        let inner = Rect::new(
            area.x.saturating_add(1),
            area.y.saturating_add(1),
            area.width.saturating_sub(2),
            area.height.saturating_sub(2),
        );
        if !inner.contains(Position::new(column, row)) {
            return Ok(false);
        }

        let view_row = self.menu.view().viewport_bounds().origin_y + usize::from(row - inner.y);
        let previous = self.menu.list().selected_index();
        match select_view_row(&mut self.menu, &mut self.after_layout, view_row) {
            Some(index) if index == previous => self.press_item(index),
            _ => Ok(false),
        }
    }

    /// List pane on top, one prompt line below.
    fn areas(&self) -> Result<(Rect, Rect), TuiError> {
        let size = self.terminal.size()?;
        let frame_area = Rect::new(0, 0, size.width, size.height);
        let [list_area, prompt_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame_area);
        Ok((list_area, prompt_area))
    }

    fn prompt_line(&self) -> String {
        if let Some(status) = &self.status {
            return status.clone();
        }
        if let PromptMode::Filter { text } = &self.prompt {
            return format!("filter: {}", text);
        }
        if let Some(status) = self.search.status() {
            return status;
        }
        if self.menu.list().is_filtering() {
            return format!("filter: {} (esc to clear)", self.menu.list().items().filter());
        }
        String::new()
    }

    /// One frame: layout, deferred tasks, then draw if anything changed.
    fn tick(&mut self) -> Result<(), TuiError> {
        let (list_area, prompt_area) = self.areas()?;
        self.menu
            .view_mut()
            .set_height(list_pane::inner_height(list_area));

        self.after_layout.run(&mut self.menu)?;

        let prompt = self.prompt_line();
        let redraw = self.menu.view_mut().take_redraw();
        if redraw || prompt != self.last_prompt || self.last_list_area != Some(list_area) {
            self.draw(list_area, prompt_area, &prompt)?;
        }
        self.last_list_area = Some(list_area);
        self.last_prompt = prompt;
        Ok(())
    }

    /// Render the current frame
    fn draw(&mut self, list_area: Rect, prompt_area: Rect, prompt: &str) -> Result<(), TuiError> {
        let view = self.menu.view();
        let synthetic = self.menu.layout().synthetic();
        let title = self.title.as_str();

        self.terminal.draw(|frame| {
            frame.render_widget(
                ListPane::new(view, title).synthetic_rows(synthetic),
                list_area,
            );
            frame.render_widget(Paragraph::new(prompt), prompt_area);
        })?;

        Ok(())
    }
}

// ===== Test Helpers =====
//
// The following methods are ONLY for testing within the crate.
//
// DO NOT use these in production code.

#[cfg(test)]
#[allow(dead_code)]
impl<B> TuiApp<B>
where
    B: Backend,
{
    /// Create TuiApp for testing (test-only constructor)
    pub(crate) fn new_for_test(terminal: Terminal<B>, items: Vec<MenuItem>, config: ListConfig) -> Self {
        Self::assemble(
            terminal,
            items,
            config,
            KeyBindings::default(),
            "Menu".to_string(),
        )
    }

    /// The menu context (test-only accessor)
    pub(crate) fn menu(&self) -> &MenuContext {
        &self.menu
    }

    /// Handle a single keyboard event (test-only accessor)
    ///
    /// Returns true if app should quit.
    pub(crate) fn handle_key_test(&mut self, key: KeyEvent) -> bool {
        self.dispatch_key(key)
    }

    /// Handle a single mouse event (test-only accessor)
    pub(crate) fn handle_mouse_test(&mut self, mouse: MouseEvent) -> bool {
        self.dispatch_mouse(mouse)
    }

    /// Run one frame (test-only accessor)
    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.tick()
    }

    /// Get reference to terminal (test-only accessor)
    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Label of the chosen item (test-only accessor)
    pub(crate) fn chosen(&self) -> Option<&str> {
        self.chosen.as_deref()
    }

    /// Current prompt line text (test-only accessor)
    pub(crate) fn prompt_text(&self) -> String {
        self.prompt_line()
    }
}

/// Read the menu from `input_source` and run the TUI until the user chooses
/// or quits.
///
/// Returns the chosen item's label. Logging must be initialized by caller
/// before calling this function.
pub fn run_with_source(
    input_source: InputSource,
    config: ListConfig,
) -> Result<Option<String>, TuiError> {
    let items = input_source.read_items()?;
    let title = match &input_source {
        InputSource::File(path) => path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string()),
        InputSource::Stdin => "stdin".to_string(),
    };

    let mut app = TuiApp::new(items, config, title)?;

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(crossterm::event::DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
