//! `pomochat` - terminal chat panel with a pomodoro timer
//!
//! Messages stay local. Slash commands drive an embedded pomodoro timer and
//! a task list shown beside the conversation.

pub mod app;
pub mod cli;
pub mod core;
pub mod fs;
pub mod logging;
pub mod tui;
