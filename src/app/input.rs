//! Composer handling for the App.
//!
//! This module handles:
//! - Re-evaluating the command recognizer after every buffer change
//! - Submission (chat message or slash command)
//! - History browsing with Up/Down
//! - Tab / Shift+Tab navigation between command arguments

use ratatui::crossterm::event::KeyEvent;
use tracing::trace;

use super::App;
use crate::app::state::RecognizerState;
use crate::core::{argument_spans, is_command};
use crate::tui::widgets::CommandPopupState;

impl App {
    /// Re-evaluates the recognizer after the buffer changed.
    ///
    /// This is the only place the recognizer moves on its own:
    /// - empty buffer: full reset to `Idle` (also leaves history browsing)
    /// - `Suppressed`: stays suppressed, the menu stays closed
    /// - otherwise `Listening` while the text starts with `/`, else `Idle`
    pub(crate) fn on_input_changed(&mut self) {
        self.text_input.selection = None;

        if self.text_input.is_empty() {
            self.text_input.reset_command_state();
            self.text_input.history.reset_cursor();
            return;
        }

        if self.text_input.recognizer == RecognizerState::Suppressed {
            self.text_input.command_popup_state = CommandPopupState::Hidden;
            return;
        }

        let text = self.text_input.collect_text();
        if is_command(&text) {
            self.text_input.recognizer = RecognizerState::Listening;
            self.update_slash_command_popup();
        } else {
            self.text_input.recognizer = RecognizerState::Idle;
            self.text_input.command_popup_state = CommandPopupState::Hidden;
        }
    }

    /// Passes a key to the composer's textarea.
    pub(crate) fn input_to_composer(&mut self, key: KeyEvent) {
        if self.text_input.textarea.input(key) {
            self.on_input_changed();
        } else if self.text_input.textarea.selection_range().is_none() {
            self.text_input.selection = None;
        }
    }

    pub(crate) fn insert_newline(&mut self) {
        self.text_input.textarea.insert_newline();
        self.on_input_changed();
    }

    /// Inserts pasted text at the cursor.
    pub(crate) fn insert_into_composer(&mut self, text: &str) {
        self.text_input.textarea.insert_str(text);
        self.on_input_changed();
    }

    /// Submits the composer.
    ///
    /// Blank input is ignored. Anything else is appended to history and the
    /// buffer is reset before the text is handled, so a command that posts a
    /// message or quits sees an empty composer. Text starting with `/` goes
    /// to the command registry and is never posted as a chat message.
    pub(super) fn submit_text_input(&mut self) {
        let text = self.text_input.collect_text();
        if text.trim().is_empty() {
            return;
        }

        self.text_input.history.append(text.clone());
        self.text_input.clear();

        if is_command(&text) {
            self.run_command_line(&text);
        } else {
            self.post_message(text);
        }
    }

    // =========================================================================
    // History
    // =========================================================================

    /// Shows the previous history entry.
    ///
    /// Only applies while the cursor is on the first row and the command
    /// menu is closed; returns `false` otherwise so the key can move the
    /// cursor instead. At the oldest entry nothing changes.
    pub(crate) fn history_older(&mut self) -> bool {
        if self.should_show_command_popup() || self.text_input.cursor().0 != 0 {
            return false;
        }
        if let Some(entry) = self.text_input.history.older().map(String::from) {
            trace!(cursor = self.text_input.history.cursor(), "history.older");
            self.text_input.set_text(&entry);
        }
        true
    }

    /// Shows the next history entry.
    ///
    /// Only applies while the cursor is on the last row and the command menu
    /// is closed. At the newest entry, or when not browsing, nothing changes.
    pub(crate) fn history_newer(&mut self) -> bool {
        let last_row = self.text_input.lines().len().saturating_sub(1);
        if self.should_show_command_popup() || self.text_input.cursor().0 != last_row {
            return false;
        }
        if let Some(entry) = self.text_input.history.newer().map(String::from) {
            trace!(cursor = self.text_input.history.cursor(), "history.newer");
            self.text_input.set_text(&entry);
        }
        true
    }

    // =========================================================================
    // Argument Navigation
    // =========================================================================

    /// Selects the next argument of the command line. No-op at the last one.
    pub(crate) fn next_argument(&mut self) {
        let next = self.text_input.current_arg + 1;
        self.select_argument(next);
    }

    /// Selects the previous argument. No-op at the first one.
    pub(crate) fn previous_argument(&mut self) {
        if let Some(prev) = self.text_input.current_arg.checked_sub(1) {
            self.select_argument(prev);
        }
    }

    fn select_argument(&mut self, index: usize) {
        let line = self.text_input.lines().first().cloned().unwrap_or_default();
        if let Some(span) = argument_spans(&line).get(index).copied() {
            self.text_input.current_arg = index;
            self.text_input.select_span(span);
        }
    }
}
