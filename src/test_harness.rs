//! Acceptance Test Harness for TUI testing
//!
//! Provides a high-level API for acceptance testing by wrapping
//! TuiApp<TestBackend> with convenient methods for simulating user interactions.

use crate::config::ListConfig;
use crate::model::parse_menu;
use crate::view::{MenuContext, TuiApp, TuiError};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

/// Convert a ratatui buffer to a string representation for snapshot testing.
///
/// Captures the visual output character by character, preserving layout.
/// Empty lines are removed to keep snapshots clean.
fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            let cell = &buffer[(x, y)];
            line.push_str(cell.symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

/// Test harness for acceptance testing
///
/// Wraps TuiApp<TestBackend> to provide a clean API for simulating user
/// interactions in acceptance tests.
pub struct AcceptanceTestHarness {
    app: TuiApp<TestBackend>,
    running: bool,
}

impl AcceptanceTestHarness {
    /// Load a menu description into a test app
    ///
    /// # Arguments
    /// * `menu` - Menu text in the format accepted by `parse_menu`
    /// * `width` - Terminal width in columns
    /// * `height` - Terminal height in rows
    /// * `config` - Per-list behaviour
    pub fn from_menu_text(
        menu: &str,
        width: u16,
        height: u16,
        config: ListConfig,
    ) -> Result<Self, TuiError> {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend)?;

        let mut app = TuiApp::new_for_test(terminal, parse_menu(menu), config);
        app.render_test()?;

        Ok(Self { app, running: true })
    }

    /// Send a single key event, then run one frame
    ///
    /// # Returns
    /// * `true` - If app quit as a result of this key
    /// * `false` - If app is still running
    pub fn send_key(&mut self, key: KeyCode) -> bool {
        self.send_key_with_mods(key, KeyModifiers::NONE)
    }

    /// Send key with modifiers (e.g., Ctrl+C)
    pub fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> bool {
        if !self.running {
            return true; // Already quit
        }

        let quit = self.app.handle_key_test(KeyEvent::new(key, mods));
        if quit {
            self.running = false;
        } else {
            self.app
                .render_test()
                .expect("Rendering should succeed in test harness");
        }

        quit
    }

    /// Send the same key `count` times
    pub fn repeat_key(&mut self, key: KeyCode, count: usize) {
        for _ in 0..count {
            if self.send_key(key) {
                break;
            }
        }
    }

    /// Type text (sends individual character key events)
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            if self.send_key(KeyCode::Char(ch)) {
                break; // Quit encountered
            }
        }
    }

    /// Read-only access to the menu list and its surface
    pub fn menu(&self) -> &MenuContext {
        self.app.menu()
    }

    /// Label chosen before quitting, if any
    pub fn chosen(&self) -> Option<&str> {
        self.app.chosen()
    }

    /// Check if app is still running
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Render the current frame to a string
    ///
    /// # Panics
    /// Panics if rendering fails (should never happen with TestBackend)
    pub fn render_to_string(&mut self) -> String {
        self.app
            .render_test()
            .expect("Rendering should succeed in test harness");

        let buffer = self.app.terminal().backend().buffer();
        buffer_to_string(buffer)
    }

    /// Send a left click at the specified coordinates, then run one frame
    pub fn click_at(&mut self, column: u16, row: u16) {
        self.send_mouse(MouseEventKind::Down(MouseButton::Left), column, row);
    }

    /// Turn the mouse wheel over the list
    pub fn wheel(&mut self, down: bool, notches: usize) {
        let kind = if down {
            MouseEventKind::ScrollDown
        } else {
            MouseEventKind::ScrollUp
        };
        for _ in 0..notches {
            self.send_mouse(kind, 2, 2);
        }
    }

    fn send_mouse(&mut self, kind: MouseEventKind, column: u16, row: u16) {
        if !self.running {
            return; // Already quit
        }

        let mouse_event = MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        };

        if self.app.handle_mouse_test(mouse_event) {
            self.running = false;
        } else {
            self.app
                .render_test()
                .expect("Rendering should succeed in test harness");
        }
    }
}
