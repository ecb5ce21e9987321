//! Application state structures.
//!
//! - **`TextInputState`**: the composer: text buffer, history, command
//!   recognizer and argument navigation
//! - **`ChatState`**: posted messages and their scroll position
//! - **`TaskPanelState`**: task selection, context menu and inline editor
//! - **`LayoutState`**: layout calculated once per frame

use tui_textarea::{CursorMove, TextArea};

use crate::core::{HistoryList, Span};
use crate::tui::widgets::{ChatMessage, CommandPopupState, ContextMenuState};

/// Placeholder shown in the empty composer.
pub const COMPOSER_PLACEHOLDER: &str = "Send a message or type / for commands";

/// Events delivered to the app from background tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// One second of wall-clock time elapsed.
    Tick,
}

/// Which panel receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    /// The composer (and the chat list above it).
    #[default]
    Chat,
    /// The task panel.
    Tasks,
}

/// Slash command recognition state of the composer.
///
/// ```text
/// Idle --"/..." typed--> Listening --template with [..] picked--> Suppressed
///   ^                        |                                        |
///   +------ buffer cleared --+------------- buffer cleared -----------+
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecognizerState {
    /// Plain text, or nothing typed.
    #[default]
    Idle,
    /// The buffer starts with `/` and the command menu follows the typed name.
    Listening,
    /// A template with placeholders was inserted. The prefix is ignored and
    /// Tab / Shift+Tab move between arguments until the buffer is cleared.
    Suppressed,
}

// =============================================================================
// State Sub-Structs
// =============================================================================

/// State of the composer.
///
/// Uses `tui-textarea`'s `TextArea` for editing, cursor movement and
/// selection rendering.
pub struct TextInputState {
    pub textarea: TextArea<'static>,
    /// Submitted messages and the browsing cursor.
    pub history: HistoryList,
    pub recognizer: RecognizerState,
    /// Argument token currently selected while `Suppressed`.
    pub current_arg: usize,
    /// Span selected by template insertion or argument navigation.
    pub selection: Option<Span>,
    /// Slash command menu state.
    pub command_popup_state: CommandPopupState,
}

impl Default for TextInputState {
    fn default() -> Self {
        Self::new()
    }
}

impl TextInputState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            textarea: new_textarea(Vec::new()),
            history: HistoryList::new(),
            recognizer: RecognizerState::Idle,
            current_arg: 0,
            selection: None,
            command_popup_state: CommandPopupState::default(),
        }
    }

    /// Whether a leading `/` should be treated as a command prefix.
    #[must_use]
    pub fn listening_for_command(&self) -> bool {
        self.recognizer != RecognizerState::Suppressed
    }

    /// Empties the buffer and returns the recognizer to `Idle`.
    ///
    /// History entries are kept; the browsing cursor goes back to the end.
    pub fn clear(&mut self) {
        self.textarea = new_textarea(Vec::new());
        self.reset_command_state();
        self.history.reset_cursor();
    }

    /// Drops recognizer, argument and menu state without touching the text.
    pub fn reset_command_state(&mut self) {
        self.recognizer = RecognizerState::Idle;
        self.current_arg = 0;
        self.selection = None;
        self.command_popup_state = CommandPopupState::Hidden;
    }

    /// Returns the lines of text from the textarea.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        self.textarea.lines()
    }

    /// Returns the cursor position as (row, col), col counted in chars.
    #[must_use]
    pub fn cursor(&self) -> (usize, usize) {
        self.textarea.cursor()
    }

    /// Collects all input lines into a single string.
    #[must_use]
    pub fn collect_text(&self) -> String {
        self.textarea.lines().join("\n")
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.textarea.is_empty()
    }

    /// Replaces the buffer with `text` and puts the cursor at the very end.
    ///
    /// Recognizer state is left alone; callers decide whether the new text
    /// should be re-evaluated.
    pub fn set_text(&mut self, text: &str) {
        let lines = text.split('\n').map(String::from).collect();
        self.textarea = new_textarea(lines);
        self.textarea.move_cursor(CursorMove::Bottom);
        self.textarea.move_cursor(CursorMove::End);
        self.selection = None;
    }

    /// Selects `span` on the first line, leaving the cursor at its end.
    #[allow(clippy::cast_possible_truncation)]
    pub fn select_span(&mut self, span: Span) {
        self.textarea.cancel_selection();
        self.textarea
            .move_cursor(CursorMove::Jump(0, span.start.min(u16::MAX as usize) as u16));
        self.textarea.start_selection();
        self.textarea
            .move_cursor(CursorMove::Jump(0, span.end.min(u16::MAX as usize) as u16));
        self.selection = Some(span);
    }

    /// Text covered by the tracked selection.
    #[must_use]
    pub fn selected_text(&self) -> Option<&str> {
        let span = self.selection?;
        self.lines().first().map(|line| span.slice(line))
    }

    /// Sets the textarea content from a list of lines (for testing).
    #[cfg(test)]
    pub fn set_lines(&mut self, lines: Vec<String>) {
        self.textarea = new_textarea(lines);
    }
}

fn new_textarea(lines: Vec<String>) -> TextArea<'static> {
    let mut textarea = TextArea::new(lines);
    textarea.set_placeholder_text(COMPOSER_PLACEHOLDER);
    textarea
}

/// Posted messages and the chat list's scroll position.
#[derive(Debug, Clone)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub scroll: ScrollState,
    /// Whether old messages were dropped to stay under the cap.
    pub truncated: bool,
}

impl Default for ChatState {
    fn default() -> Self {
        Self {
            messages: Vec::new(),
            scroll: ScrollState::new(),
            truncated: false,
        }
    }
}

impl ChatState {
    pub fn clear(&mut self) {
        self.messages.clear();
        self.scroll.reset();
        self.truncated = false;
    }
}

/// One-line editor open on a task.
pub struct TaskEditor {
    /// Index of the task being edited.
    pub index: usize,
    pub textarea: TextArea<'static>,
}

impl TaskEditor {
    #[must_use]
    pub fn new(index: usize, value: &str) -> Self {
        let mut textarea = TextArea::new(vec![value.to_string()]);
        textarea.move_cursor(CursorMove::End);
        Self { index, textarea }
    }

    /// The edited text with line breaks folded into spaces.
    #[must_use]
    pub fn value(&self) -> String {
        self.textarea.lines().join(" ")
    }
}

/// Task panel interaction state. The tasks themselves live in the store.
#[derive(Default)]
pub struct TaskPanelState {
    pub selected: usize,
    pub menu: ContextMenuState,
    pub editor: Option<TaskEditor>,
}

impl TaskPanelState {
    /// Keeps the selection inside a list of `len` tasks.
    pub fn clamp_selection(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
    }
}

/// Dynamic layout tracking state.
///
/// Stores the [`ChatLayout`] calculated once per frame so scroll math and
/// rendering agree on dimensions.
///
/// [`ChatLayout`]: crate::app::ChatLayout
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutState {
    pub chat: crate::app::ChatLayout,
}

/// Visible height of the message list before the first frame is drawn.
pub const DEFAULT_MESSAGES_VISIBLE_HEIGHT: usize = 15;

impl LayoutState {
    /// Visible height of the message list (excluding borders).
    #[must_use]
    pub const fn messages_visible_height(&self) -> usize {
        if self.chat.messages_visible_height == 0 {
            DEFAULT_MESSAGES_VISIBLE_HEIGHT
        } else {
            self.chat.messages_visible_height
        }
    }

    /// Content width of the message list (excluding borders and scrollbar).
    #[must_use]
    pub const fn messages_content_width(&self) -> usize {
        self.chat.messages_content_width
    }
}

/// Scroll state for a panel, combining position and auto-scroll behavior.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrollState {
    /// Current scroll offset in visual rows from the top.
    pub offset: usize,
    /// Follow new content. Cleared when the user scrolls up, set again
    /// once they reach the bottom.
    pub auto_scroll: bool,
}

impl ScrollState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            offset: 0,
            auto_scroll: true,
        }
    }

    pub fn reset(&mut self) {
        self.offset = 0;
        self.auto_scroll = true;
    }

    pub fn scroll_up(&mut self) {
        self.offset = self.offset.saturating_sub(1);
        self.auto_scroll = false;
    }

    pub fn scroll_down(&mut self, content_len: usize, visible_height: usize) {
        let max_scroll = content_len.saturating_sub(visible_height);
        self.offset = (self.offset + 1).min(max_scroll);
        self.auto_scroll = self.offset >= max_scroll;
    }

    pub fn page_up(&mut self, page_size: usize) {
        self.offset = self.offset.saturating_sub(page_size);
        self.auto_scroll = false;
    }

    pub fn page_down(&mut self, content_len: usize, visible_height: usize, page_size: usize) {
        let max_scroll = content_len.saturating_sub(visible_height);
        self.offset = (self.offset + page_size).min(max_scroll);
        self.auto_scroll = self.offset >= max_scroll;
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
        self.auto_scroll = false;
    }

    pub fn scroll_to_bottom(&mut self, content_len: usize, visible_height: usize) {
        self.offset = content_len.saturating_sub(visible_height);
        self.auto_scroll = true;
    }

    pub fn auto_scroll_if_enabled(&mut self, content_len: usize, visible_height: usize) {
        if self.auto_scroll {
            self.offset = content_len.saturating_sub(visible_height);
        }
    }
}


#[cfg(test)]
mod text_input_tests {
    use super::*;

    #[test]
    fn set_text_places_cursor_at_end() {
        let mut input = TextInputState::new();
        input.set_text("one\ntwo words");
        assert_eq!(input.lines(), ["one", "two words"]);
        assert_eq!(input.cursor(), (1, 9));
    }

    #[test]
    fn clear_resets_command_state_but_keeps_history() {
        let mut input = TextInputState::new();
        input.history.append("hello");
        input.set_text("/pomodoro [work]");
        input.recognizer = RecognizerState::Suppressed;
        input.current_arg = 1;
        input.clear();
        assert!(input.is_empty());
        assert_eq!(input.recognizer, RecognizerState::Idle);
        assert_eq!(input.current_arg, 0);
        assert_eq!(input.history.len(), 1);
        assert!(input.listening_for_command());
    }

    #[test]
    fn select_span_tracks_selected_text() {
        let mut input = TextInputState::new();
        input.set_text("/pomodoro [work] [break]");
        input.select_span(Span::new(10, 16));
        assert_eq!(input.selected_text(), Some("[work]"));
        assert_eq!(input.cursor(), (0, 16));
    }

    #[test]
    fn task_editor_value_is_single_line() {
        let mut editor = TaskEditor::new(0, "a");
        editor.textarea.insert_newline();
        editor.textarea.insert_str("b");
        assert_eq!(editor.value(), "a b");
    }

    #[test]
    fn task_selection_clamps_to_list() {
        let mut panel = TaskPanelState {
            selected: 5,
            ..TaskPanelState::default()
        };
        panel.clamp_selection(3);
        assert_eq!(panel.selected, 2);
        panel.clamp_selection(0);
        assert_eq!(panel.selected, 0);
    }
}
