//! Domain logic: timer, tasks, history, command templates and the store.
//!
//! Nothing in here touches the terminal. The `app` layer feeds key presses
//! and ticks in and renders whatever state comes out.

pub mod commands;
pub mod history;
pub mod pomodoro;
pub mod store;
pub mod template;
pub mod todo;

pub use commands::{CommandContext, CommandRegistry, CommandResult, SlashCommand};
pub use history::HistoryList;
pub use pomodoro::{Phase, PomodoroConfig, PomodoroState, format_seconds, progress_percentage};
pub use store::{Action, Store, StoreEvent};
pub use template::{Span, argument_spans, first_placeholder, is_command, split_command};
pub use todo::{Task, TaskList};
