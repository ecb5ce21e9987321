//! Slash command recognition and menu handling for the composer.
//!
//! ## Recognition vs Dispatch
//!
//! - Recognition ([`command_query`]): finds the command name being typed so
//!   the menu can follow it
//! - Dispatch (`App::submit_text_input`): splits the submitted line and hands it to the
//!   [`CommandRegistry`](crate::core::CommandRegistry)

use crate::app::App;
use crate::app::state::RecognizerState;
use crate::core::{CommandContext, CommandResult, first_placeholder, split_command};
use crate::core::template::COMMAND_PREFIX;
use crate::tui::widgets::{ChatMessage, CommandMatch, CommandPopupState};

/// Returns the command name being typed, without the prefix.
///
/// Only a buffer consisting of the prefix followed by a single token counts:
/// once whitespace, a newline or arguments follow, the menu has nothing left
/// to complete.
///
/// ```
/// use pomochat::app::slash_commands::command_query;
///
/// assert_eq!(command_query("/pom"), Some("pom"));
/// assert_eq!(command_query("/"), Some(""));
/// assert_eq!(command_query("/pomodoro 25"), None);
/// assert_eq!(command_query("hello"), None);
/// ```
#[must_use]
pub fn command_query(text: &str) -> Option<&str> {
    let query = text.strip_prefix(COMMAND_PREFIX)?;
    if query.chars().any(char::is_whitespace) {
        return None;
    }
    Some(query)
}

impl App {
    pub(crate) fn command_context(&self) -> CommandContext {
        CommandContext {
            pomodoro_started: self.store.pomodoro.started,
            tasks_open: self.store.tasks.open,
        }
    }

    /// Refreshes the command menu from the typed command name.
    ///
    /// The menu hides once the buffer stops looking like a bare command name
    /// or nothing matches. The highlighted row is kept when still in range.
    pub(crate) fn update_slash_command_popup(&mut self) {
        let text = self.text_input.collect_text();
        let Some(query) = command_query(&text) else {
            self.text_input.command_popup_state = CommandPopupState::Hidden;
            return;
        };

        let matches: Vec<CommandMatch> = self
            .command_registry
            .matching(query)
            .into_iter()
            .map(|cmd| CommandMatch {
                name: cmd.name(),
                description: cmd.description(),
                template: cmd.template(),
            })
            .collect();

        let previous = self.text_input.command_popup_state.selected_index();
        let mut state = CommandPopupState::from_matches(matches);
        if let (Some(prev), CommandPopupState::Showing { matches, selected }) =
            (previous, &mut state)
        {
            *selected = prev.min(matches.len().saturating_sub(1));
        }
        self.text_input.command_popup_state = state;
    }

    /// Returns true if the command menu should be shown.
    #[must_use]
    pub fn should_show_command_popup(&self) -> bool {
        self.text_input.command_popup_state.is_visible()
    }

    pub(crate) fn command_popup_up(&mut self) {
        self.text_input.command_popup_state.select_up();
    }

    pub(crate) fn command_popup_down(&mut self) {
        self.text_input.command_popup_state.select_down();
    }

    /// Dismisses the command menu without selecting.
    ///
    /// The buffer keeps its text; the menu reopens on the next edit.
    pub(crate) fn dismiss_command_popup(&mut self) {
        self.text_input.command_popup_state = CommandPopupState::Hidden;
    }

    /// Picks the highlighted entry of the command menu.
    ///
    /// A template with placeholders is inserted with its first placeholder
    /// selected and the recognizer suppressed, so Tab walks the arguments.
    /// A template without placeholders clears the buffer and runs the
    /// command right away.
    pub(crate) fn select_command_from_popup(&mut self) {
        let Some(entry) = self.text_input.command_popup_state.selected_match().cloned() else {
            return;
        };

        match first_placeholder(&entry.template) {
            Some(span) => {
                self.text_input.set_text(&entry.template);
                self.text_input.select_span(span);
                self.text_input.recognizer = RecognizerState::Suppressed;
                self.text_input.current_arg = 0;
                self.text_input.command_popup_state = CommandPopupState::Hidden;
            }
            None => {
                self.text_input.clear();
                self.run_command_line(&entry.template);
            }
        }
    }

    /// Splits a command line and runs it through the registry.
    ///
    /// Unknown commands are swallowed; the registry logs them at debug.
    pub(crate) fn run_command_line(&mut self, line: &str) {
        let Some((command, args)) = split_command(line) else {
            return;
        };
        let ctx = self.command_context();
        let result = self.command_registry.dispatch(command, &args, &ctx);
        self.apply_command_result(result);
    }

    /// Applies the result of a slash command.
    pub(crate) fn apply_command_result(&mut self, result: CommandResult) {
        match result {
            CommandResult::Continue | CommandResult::Unhandled => {}
            CommandResult::Exit => {
                self.should_quit = true;
            }
            CommandResult::Clear => {
                self.chat.clear();
            }
            CommandResult::Message(msg) => {
                self.push_message(ChatMessage::system(msg));
            }
            CommandResult::Dispatch(action) => {
                self.dispatch(action);
            }
        }
    }
}
