//! Event handling logic for the App.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::trace;

use super::App;
use crate::app::state::RecognizerState;
use crate::app::{AppEvent, AppMode};
use crate::core::{Action, PomodoroConfig};

/// Scroll page size for navigation.
const SCROLL_PAGE_SIZE: usize = 10;

impl App {
    /// Handles pasted text from bracketed paste mode.
    ///
    /// Multi-line pastes arrive as one event, so Enter inside the pasted text
    /// never submits.
    ///
    /// # Line Ending Normalization
    ///
    /// `\r\n` and standalone `\r` become `\n`; `tui-textarea` does not treat a
    /// lone `\r` as a line break.
    ///
    /// # Control Character Filtering
    ///
    /// Control characters other than `\n` (tabs included) are dropped.
    pub fn handle_paste(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }

        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        let filtered: String = normalized
            .chars()
            .filter(|c| !c.is_control() || *c == '\n')
            .collect();

        match self.mode {
            AppMode::Chat => self.insert_into_composer(&filtered),
            AppMode::Tasks => self.insert_into_task_editor(&filtered),
        }
    }

    /// Handles a key event.
    ///
    /// Timer hotkeys are handled first and work regardless of focus; the rest
    /// goes to the focused panel.
    pub fn handle_key(&mut self, key: KeyEvent) {
        trace!(
            target: "pomochat::keys",
            code = ?key.code,
            modifiers = ?key.modifiers,
            kind = ?key.kind,
            mode = ?self.mode,
            "key"
        );

        if self.handle_global_key(key) {
            return;
        }

        match self.mode {
            AppMode::Chat => self.handle_chat_key(key),
            AppMode::Tasks => self.handle_tasks_key(key),
        }
    }

    /// Timer and panel hotkeys. Returns `true` if the key was consumed.
    fn handle_global_key(&mut self, key: KeyEvent) -> bool {
        if !key.modifiers.contains(KeyModifiers::CONTROL) {
            return false;
        }
        match key.code {
            KeyCode::Char('p') => {
                // Play/pause; with nothing running this starts a default session.
                if self.store.pomodoro.started {
                    self.dispatch(Action::TogglePaused);
                } else {
                    self.dispatch(Action::StartPomodoro(PomodoroConfig::default()));
                }
            }
            KeyCode::Char('x') => self.dispatch(Action::StopPomodoro),
            KeyCode::Char('n') => self.dispatch(Action::ToggleMinimized),
            KeyCode::Char('t') => self.dispatch(Action::ToggleTasks),
            _ => return false,
        }
        true
    }

    /// Handles a key while the composer has focus.
    fn handle_chat_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        // Priority 1: Command menu handling (when the menu is visible)
        if self.should_show_command_popup() {
            match key.code {
                KeyCode::Up => {
                    self.command_popup_up();
                    return;
                }
                KeyCode::Down => {
                    self.command_popup_down();
                    return;
                }
                // Enter or Tab picks the highlighted template
                KeyCode::Tab => {
                    self.select_command_from_popup();
                    return;
                }
                KeyCode::Enter if !ctrl => {
                    self.select_command_from_popup();
                    return;
                }
                KeyCode::Esc => {
                    self.dismiss_command_popup();
                    return;
                }
                // Other keys fall through to normal handling
                _ => {}
            }
        }

        // Priority 2: Argument navigation inside an inserted template
        if self.text_input.recognizer == RecognizerState::Suppressed {
            match key.code {
                KeyCode::Tab => {
                    self.next_argument();
                    return;
                }
                KeyCode::BackTab => {
                    self.previous_argument();
                    return;
                }
                _ => {}
            }
        }

        // Priority 3: Message list scrolling with Ctrl (doesn't conflict with text navigation)
        if ctrl {
            match key.code {
                KeyCode::Up => {
                    self.scroll_messages_up();
                    return;
                }
                KeyCode::Down => {
                    self.scroll_messages_down();
                    return;
                }
                KeyCode::Home => {
                    self.scroll_messages_to_top();
                    return;
                }
                KeyCode::End => {
                    self.scroll_messages_to_bottom();
                    return;
                }
                _ => {}
            }
        }

        // Priority 4: Page scrolling
        match key.code {
            KeyCode::PageUp => {
                self.page_up_messages();
                return;
            }
            KeyCode::PageDown => {
                self.page_down_messages();
                return;
            }
            _ => {}
        }

        // Priority 5: Quit
        if ctrl && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        // Priority 6: Composer
        self.handle_text_input(key);
    }

    fn handle_text_input(&mut self, key: KeyEvent) {
        let modifiers = key.modifiers;
        match key.code {
            // Newline: Ctrl+J works on every terminal (ASCII LF)
            KeyCode::Char('j') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.insert_newline();
            }
            // Newline: Shift+Enter or Alt+Enter
            KeyCode::Enter
                if modifiers.contains(KeyModifiers::SHIFT)
                    || modifiers.contains(KeyModifiers::ALT) =>
            {
                self.insert_newline();
            }
            KeyCode::Enter => self.submit_text_input(),
            KeyCode::Up if modifiers.is_empty() => {
                if !self.history_older() {
                    self.input_to_composer(key);
                }
            }
            KeyCode::Down if modifiers.is_empty() => {
                if !self.history_newer() {
                    self.input_to_composer(key);
                }
            }
            KeyCode::Esc => {}
            // Delegate all other keys to tui-textarea
            _ => self.input_to_composer(key),
        }
    }

    // =========================================================================
    // Message List Scrolling
    // =========================================================================

    fn scroll_messages_up(&mut self) {
        self.chat.scroll.scroll_up();
    }

    fn scroll_messages_down(&mut self) {
        let content_len = self.messages_visual_line_count();
        self.chat
            .scroll
            .scroll_down(content_len, self.layout.messages_visible_height());
    }

    fn scroll_messages_to_top(&mut self) {
        self.chat.scroll.scroll_to_top();
    }

    /// Scrolls to the newest message (re-enables auto-scroll).
    fn scroll_messages_to_bottom(&mut self) {
        let content_len = self.messages_visual_line_count();
        self.chat
            .scroll
            .scroll_to_bottom(content_len, self.layout.messages_visible_height());
    }

    fn page_up_messages(&mut self) {
        self.chat.scroll.page_up(SCROLL_PAGE_SIZE);
    }

    fn page_down_messages(&mut self) {
        let content_len = self.messages_visual_line_count();
        self.chat.scroll.page_down(
            content_len,
            self.layout.messages_visible_height(),
            SCROLL_PAGE_SIZE,
        );
    }

    // =========================================================================
    // Background Events
    // =========================================================================

    /// Processes pending background events.
    ///
    /// Called once per loop iteration, after key handling, so a tick never
    /// interleaves with a key press.
    pub fn process_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            match event {
                AppEvent::Tick => self.dispatch(Action::Tick),
            }
        }
    }
}
