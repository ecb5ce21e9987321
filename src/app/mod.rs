//! Main application state and logic.
//!
//! This module contains the core App struct and its implementation,
//! organized into submodules:
//! - `input` - Composer: submission, history, argument navigation
//! - `tasks` - Task panel keys and the context menu
//! - `render` - UI rendering
//! - `state` - Application state structures
//! - `events` - Key, paste and background event handling
//!
//! ## Focus
//!
//! - **`Chat`**: keys go to the composer. The chat list above it scrolls with
//!   `PageUp`/`PageDown` and `Ctrl+Up`/`Ctrl+Down`.
//! - **`Tasks`**: keys go to the task panel (opened with `Ctrl+T` or `/tasks`).
//!
//! Timer hotkeys (`Ctrl+P`, `Ctrl+X`, `Ctrl+N`) work in both.

pub mod events;
mod input;
mod layout;
mod render;
pub mod slash_commands;
pub mod state;
mod tasks;

#[cfg(test)]
mod tests;

pub use layout::{ChatLayout, TASK_PANEL_WIDTH, calculate_chat_layout};

use std::time::Duration;

use ratatui::layout::Rect;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::core::{Action, CommandRegistry, Phase, Store, StoreEvent, format_seconds};
use crate::fs::DEFAULT_TICK_MS;
use crate::tui::widgets::{ChatMessage, MAX_CHAT_MESSAGES, calculate_visual_line_count};
use crate::tui::{Clipboard, SystemClipboard, Theme};

pub use self::slash_commands::command_query;
pub use self::state::{
    AppEvent, AppMode, ChatState, LayoutState, RecognizerState, ScrollState, TaskEditor,
    TaskPanelState, TextInputState,
};

/// Channel buffer size for background events.
const EVENT_CHANNEL_SIZE: usize = 64;

/// Options resolved from the CLI and the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppOptions {
    /// Name shown next to the user's messages.
    pub username: String,
    /// Open the task panel on start.
    pub tasks_open: bool,
    /// How long the main loop waits for terminal input per iteration.
    pub tick_rate: Duration,
    /// Startup problems shown as warnings below the welcome line.
    pub notices: Vec<String>,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            username: crate::cli::FALLBACK_USERNAME.to_string(),
            tasks_open: false,
            tick_rate: Duration::from_millis(DEFAULT_TICK_MS),
            notices: Vec::new(),
        }
    }
}

/// Main application state.
///
/// Organized into component sub-structs:
/// - `text_input`: the composer (buffer, history, recognizer, command menu)
/// - `chat`: posted messages and scrolling
/// - `tasks`: task panel selection, context menu and editor
/// - `store`: timer and task list, changed only through [`Store::dispatch`]
/// - `layout`: dimensions updated each frame
pub struct App {
    // =========================================================================
    // Shared State
    // =========================================================================
    pub(crate) store: Store,
    pub(crate) theme: Theme,
    /// Which panel has focus.
    pub(crate) mode: AppMode,
    pub(crate) username: String,
    tick_rate: Duration,
    should_quit: bool,

    // =========================================================================
    // Event Channels
    // =========================================================================
    event_rx: mpsc::Receiver<AppEvent>,
    event_tx: mpsc::Sender<AppEvent>,

    // =========================================================================
    // Component States
    // =========================================================================
    pub(crate) text_input: TextInputState,
    pub(crate) chat: ChatState,
    pub(crate) tasks: TaskPanelState,
    pub(crate) layout: LayoutState,

    /// Registry of available slash commands.
    pub(crate) command_registry: CommandRegistry,
    /// Destination of "Copy task".
    pub(crate) clipboard: Box<dyn Clipboard>,
}

impl App {
    /// Creates a new application instance.
    ///
    /// Nothing is spawned here; the caller feeds [`AppEvent::Tick`] through
    /// [`App::event_sender`].
    #[must_use]
    pub fn new(options: AppOptions) -> Self {
        let (event_tx, event_rx) = mpsc::channel(EVENT_CHANNEL_SIZE);

        let mut app = Self {
            store: Store::new(),
            theme: Theme::default(),
            mode: AppMode::Chat,
            username: options.username,
            tick_rate: options.tick_rate,
            should_quit: false,
            event_rx,
            event_tx,
            text_input: TextInputState::new(),
            chat: ChatState::default(),
            tasks: TaskPanelState::default(),
            layout: LayoutState::default(),
            command_registry: CommandRegistry::with_builtins(),
            clipboard: Box::new(SystemClipboard),
        };

        if options.tasks_open {
            app.store.dispatch(Action::ToggleTasks);
        }
        app.push_message(ChatMessage::system(
            "Type / for commands. /pomodoro starts a timer, Ctrl+T opens tasks.",
        ));
        for notice in options.notices {
            app.push_message(ChatMessage::warning(notice));
        }
        app
    }

    /// Replaces the clipboard used by "Copy task".
    #[must_use]
    pub fn with_clipboard(mut self, clipboard: Box<dyn Clipboard>) -> Self {
        self.clipboard = clipboard;
        self
    }

    /// Returns true if the application should quit.
    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// How long the main loop may block waiting for terminal input.
    #[must_use]
    pub const fn tick_rate(&self) -> Duration {
        self.tick_rate
    }

    /// Gets the event sender for background tasks (the one-second ticker).
    #[must_use]
    pub fn event_sender(&self) -> mpsc::Sender<AppEvent> {
        self.event_tx.clone()
    }

    /// Calculates and caches the layout based on terminal dimensions.
    ///
    /// Should be called once per frame before rendering so scroll math and
    /// rendering use the same dimensions.
    pub fn update_layout(&mut self, terminal_area: Rect) {
        self.layout.chat = calculate_chat_layout(terminal_area, self.store.tasks.open);
    }

    // =========================================================================
    // Store
    // =========================================================================

    /// Applies an action to the store and reacts to what it reports.
    pub(crate) fn dispatch(&mut self, action: Action) {
        let toggles_tasks = action == Action::ToggleTasks;
        if toggles_tasks {
            self.cancel_task_editor();
        }
        let event = self.store.dispatch(action);

        if toggles_tasks {
            self.mode = if self.store.tasks.open {
                AppMode::Tasks
            } else {
                AppMode::Chat
            };
            self.tasks.menu.close();
        }

        match event {
            Some(StoreEvent::PhaseChanged(phase)) => {
                let minutes = format_seconds(self.store.pomodoro.total_seconds);
                let text = match phase {
                    Phase::Work => format!("Break over. Focus for {minutes}."),
                    Phase::Break => format!("Focus session done. Take a {minutes} break."),
                };
                self.push_message(ChatMessage::system(text));
            }
            Some(StoreEvent::TaskCreated(index)) => {
                self.tasks.selected = index;
            }
            None => {}
        }
        self.tasks.clamp_selection(self.store.tasks.len());
    }

    // =========================================================================
    // Chat Messages
    // =========================================================================

    /// Posts a message from the user.
    pub(crate) fn post_message(&mut self, text: String) {
        info!(chars = text.chars().count(), "chat.message_posted");
        let message = ChatMessage::user(self.username.clone(), text);
        self.push_message(message);
    }

    /// Appends a message and scrolls to it before the next frame.
    ///
    /// Old messages are dropped once the list exceeds [`MAX_CHAT_MESSAGES`].
    pub(crate) fn push_message(&mut self, message: ChatMessage) {
        self.chat.messages.push(message);
        if self.chat.messages.len() > MAX_CHAT_MESSAGES {
            let drain_count = self.chat.messages.len() - MAX_CHAT_MESSAGES;
            self.chat.messages.drain(0..drain_count);
            self.chat.scroll.offset = self.chat.scroll.offset.saturating_sub(drain_count);
            self.chat.truncated = true;
            debug!(drain_count, "chat.truncated");
        }
        self.auto_scroll_messages();
    }

    /// Total visual rows of the message list at the current width.
    pub(crate) fn messages_visual_line_count(&self) -> usize {
        calculate_visual_line_count(&self.chat.messages, self.layout.messages_content_width())
    }

    fn auto_scroll_messages(&mut self) {
        let content_len = self.messages_visual_line_count();
        self.chat
            .scroll
            .auto_scroll_if_enabled(content_len, self.layout.messages_visible_height());
    }
}
