//! Shared test utilities for the app module.
//!
//! - `create_test_app` / `create_test_app_with_clipboard` - `App` instances
//!   with an in-memory clipboard
//! - `create_test_app_with_lines` - `App` with composer content and cursor
//! - Key event helpers (`char_key`, `enter_key`, `ctrl_key`, `type_text`)
//! - `render_app_to_terminal` / `buffer_text` - render to a `TestBackend`

use std::time::Duration;

use anyhow::Result;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend, layout::Rect};
use tui_textarea::CursorMove;

use crate::app::{App, AppOptions};
use crate::tui::RecordingClipboard;

/// Username used by every test app.
pub const TEST_USER: &str = "tester";

/// Creates a [`KeyEvent`] with the given code and modifiers.
pub fn key_with(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

/// Creates a [`KeyEvent`] with no modifiers.
pub fn key(code: KeyCode) -> KeyEvent {
    key_with(code, KeyModifiers::NONE)
}

/// Creates a [`KeyEvent`] for a character key with no modifiers.
pub fn char_key(c: char) -> KeyEvent {
    key(KeyCode::Char(c))
}

/// Creates a [`KeyEvent`] for Ctrl + a character.
pub fn ctrl_key(c: char) -> KeyEvent {
    key_with(KeyCode::Char(c), KeyModifiers::CONTROL)
}

/// Creates a [`KeyEvent`] for the Enter key with specified modifiers.
pub fn enter_key(modifiers: KeyModifiers) -> KeyEvent {
    key_with(KeyCode::Enter, modifiers)
}

/// Shift+Tab as terminals report it.
pub fn back_tab_key() -> KeyEvent {
    key_with(KeyCode::BackTab, KeyModifiers::SHIFT)
}

/// Sends every character of `text` as a separate key press.
pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_key(char_key(c));
    }
}

/// Types `text` and presses Enter.
pub fn submit(app: &mut App, text: &str) {
    type_text(app, text);
    app.handle_key(enter_key(KeyModifiers::NONE));
}

/// Creates an `App` with a recording clipboard.
pub fn create_test_app() -> App {
    create_test_app_with_clipboard().0
}

/// Creates an `App` and returns a handle to its clipboard.
pub fn create_test_app_with_clipboard() -> (App, RecordingClipboard) {
    let clipboard = RecordingClipboard::new();
    let app = App::new(AppOptions {
        username: TEST_USER.to_string(),
        tasks_open: false,
        tick_rate: Duration::from_millis(10),
        notices: Vec::new(),
    })
    .with_clipboard(Box::new(clipboard.clone()));
    (app, clipboard)
}

/// Creates an `App` whose composer holds `lines` with the cursor at
/// (`cursor_row`, `cursor_col`), `cursor_col` counted in characters.
pub fn create_test_app_with_lines(lines: &[&str], cursor_row: usize, cursor_col: usize) -> App {
    let mut app = create_test_app();
    app.text_input
        .set_lines(lines.iter().map(|s| (*s).to_string()).collect());

    let textarea = &mut app.text_input.textarea;
    textarea.move_cursor(CursorMove::Top);
    for _ in 0..cursor_row {
        textarea.move_cursor(CursorMove::Down);
    }
    textarea.move_cursor(CursorMove::Head);
    for _ in 0..cursor_col {
        textarea.move_cursor(CursorMove::Forward);
    }
    app
}

/// Text of the most recent chat message.
pub fn last_message_text(app: &App) -> Option<&str> {
    app.chat.messages.last().map(|m| m.text.as_str())
}

/// Renders the app to a `TestBackend` terminal.
///
/// Calls `update_layout()` before rendering, as the main loop does.
///
/// # Errors
///
/// Returns an error if terminal creation or rendering fails.
pub fn render_app_to_terminal(
    app: &mut App,
    width: u16,
    height: u16,
) -> Result<Terminal<TestBackend>> {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend)?;

    app.update_layout(Rect::new(0, 0, width, height));
    terminal.draw(|f| app.render(f))?;

    Ok(terminal)
}

/// Rendered rows joined with newlines, for `contains` assertions.
pub fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    (0..buffer.area.height)
        .map(|y| {
            (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
