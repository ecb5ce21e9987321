//! Slash command system.
//!
//! ## Architecture
//!
//! - [`SlashCommand`] trait defines the interface for all commands
//! - [`CommandRegistry`] manages registration, lookup and menu filtering
//! - [`CommandResult`] indicates how the app should respond to a command
//!
//! ## Adding New Commands
//!
//! 1. Create a struct implementing [`SlashCommand`]
//! 2. Register it in [`CommandRegistry::with_builtins()`]
//! 3. Handle any new [`CommandResult`] variants in `App::apply_command_result()`
//!
//! Commands never touch application state directly: state changes are
//! returned as store [`Action`]s.

use nucleo_matcher::pattern::{Atom, AtomKind, CaseMatching, Normalization};
use nucleo_matcher::{Config, Matcher, Utf32Str};
use tracing::debug;

use super::pomodoro::PomodoroConfig;
use super::store::Action;
use super::template::COMMAND_PREFIX;

/// Result of executing a slash command.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandResult {
    /// Command executed, nothing else to do.
    Continue,
    /// Command requests application exit.
    Exit,
    /// Command requests clearing the chat messages.
    Clear,
    /// Command requests a store change.
    Dispatch(Action),
    /// Command produced a message to show in the chat panel.
    Message(String),
    /// No command with that name is registered.
    Unhandled,
}

/// Context provided to commands during execution.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandContext {
    /// Whether a pomodoro session is in progress.
    pub pomodoro_started: bool,
    /// Whether the task panel is visible.
    pub tasks_open: bool,
}

/// Trait for implementing slash commands.
///
/// Commands are looked up by name without the leading slash.
pub trait SlashCommand: Send + Sync {
    /// Returns the command name (without the leading slash).
    fn name(&self) -> &'static str;

    /// Returns a short description for the command menu.
    fn description(&self) -> &'static str;

    /// Returns the template inserted when the command is picked from the
    /// menu. Bracketed parts are placeholders.
    fn template(&self) -> String {
        format!("{COMMAND_PREFIX}{}", self.name())
    }

    /// Executes the command with whitespace-split arguments.
    fn execute(&self, args: &[&str], ctx: &CommandContext) -> CommandResult;
}

/// Registry of available slash commands.
pub struct CommandRegistry {
    commands: Vec<Box<dyn SlashCommand>>,
}

impl CommandRegistry {
    /// Creates a new empty command registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Registers a new command with the registry.
    pub fn register(&mut self, cmd: Box<dyn SlashCommand>) {
        self.commands.push(cmd);
    }

    /// Finds a command by exact name match.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&dyn SlashCommand> {
        self.commands
            .iter()
            .find(|cmd| cmd.name() == name)
            .map(AsRef::as_ref)
    }

    /// Returns all registered commands.
    #[must_use]
    pub fn all(&self) -> &[Box<dyn SlashCommand>] {
        &self.commands
    }

    /// Returns the commands whose names fuzzy-match `query`, best first.
    ///
    /// An empty query returns every command in registration order. On equal
    /// scores the shorter name wins, so `/task` ranks above `/tasks`.
    #[must_use]
    pub fn matching(&self, query: &str) -> Vec<&dyn SlashCommand> {
        if query.is_empty() {
            return self.all().iter().map(AsRef::as_ref).collect();
        }

        let mut matcher = Matcher::new(Config::DEFAULT);
        let atom = Atom::new(
            query,
            CaseMatching::Ignore,
            Normalization::Smart,
            AtomKind::Fuzzy,
            false,
        );

        let mut scored: Vec<(u16, usize, &dyn SlashCommand)> = Vec::new();
        for (order, cmd) in self.commands.iter().enumerate() {
            let mut buf = Vec::new();
            let haystack = Utf32Str::new(cmd.name(), &mut buf);
            if let Some(score) = atom.score(haystack, &mut matcher) {
                scored.push((score, order, cmd.as_ref()));
            }
        }
        scored.sort_by(|a, b| {
            b.0.cmp(&a.0)
                .then_with(|| a.2.name().len().cmp(&b.2.name().len()))
                .then_with(|| a.1.cmp(&b.1))
        });
        scored.into_iter().map(|(_, _, cmd)| cmd).collect()
    }

    /// Runs the command named by `command` (with or without its prefix).
    ///
    /// Unknown commands are passed through as [`CommandResult::Unhandled`].
    pub fn dispatch(&self, command: &str, args: &[&str], ctx: &CommandContext) -> CommandResult {
        let name = command.strip_prefix(COMMAND_PREFIX).unwrap_or(command);
        match self.find(name) {
            Some(cmd) => {
                debug!(command = name, ?args, "command.dispatch");
                cmd.execute(args, ctx)
            }
            None => {
                debug!(command = name, "command.unhandled");
                CommandResult::Unhandled
            }
        }
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRegistry {
    /// Creates a registry with all built-in commands pre-registered.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(PomodoroCommand));
        registry.register(Box::new(PauseCommand));
        registry.register(Box::new(ResumeCommand));
        registry.register(Box::new(StopCommand));
        registry.register(Box::new(TimerCommand));
        registry.register(Box::new(TasksCommand));
        registry.register(Box::new(TaskCommand));
        registry.register(Box::new(ClearCommand));
        registry.register(Box::new(ExitCommand));
        registry
    }
}

// =============================================================================
// Built-in Commands
// =============================================================================

/// Starts a pomodoro session: `/pomodoro [work] [break]`.
pub struct PomodoroCommand;

impl SlashCommand for PomodoroCommand {
    fn name(&self) -> &'static str {
        "pomodoro"
    }

    fn description(&self) -> &'static str {
        "Start a pomodoro (minutes of work and break)"
    }

    fn template(&self) -> String {
        "/pomodoro [work] [break]".to_string()
    }

    fn execute(&self, args: &[&str], _ctx: &CommandContext) -> CommandResult {
        CommandResult::Dispatch(Action::StartPomodoro(PomodoroConfig::from_args(args)))
    }
}

/// Pauses the running timer.
pub struct PauseCommand;

impl SlashCommand for PauseCommand {
    fn name(&self) -> &'static str {
        "pause"
    }

    fn description(&self) -> &'static str {
        "Pause the timer (Ctrl+P)"
    }

    fn execute(&self, _args: &[&str], ctx: &CommandContext) -> CommandResult {
        if !ctx.pomodoro_started {
            return CommandResult::Message("No pomodoro is running".to_string());
        }
        CommandResult::Dispatch(Action::SetPaused(true))
    }
}

/// Resumes a paused timer.
pub struct ResumeCommand;

impl SlashCommand for ResumeCommand {
    fn name(&self) -> &'static str {
        "resume"
    }

    fn description(&self) -> &'static str {
        "Resume the timer (Ctrl+P)"
    }

    fn execute(&self, _args: &[&str], ctx: &CommandContext) -> CommandResult {
        if !ctx.pomodoro_started {
            return CommandResult::Message("No pomodoro is running".to_string());
        }
        CommandResult::Dispatch(Action::SetPaused(false))
    }
}

/// Stops the timer.
pub struct StopCommand;

impl SlashCommand for StopCommand {
    fn name(&self) -> &'static str {
        "stop"
    }

    fn description(&self) -> &'static str {
        "Stop the timer (Ctrl+X)"
    }

    fn execute(&self, _args: &[&str], _ctx: &CommandContext) -> CommandResult {
        CommandResult::Dispatch(Action::StopPomodoro)
    }
}

/// Toggles between the full timer view and the header clock.
pub struct TimerCommand;

impl SlashCommand for TimerCommand {
    fn name(&self) -> &'static str {
        "timer"
    }

    fn description(&self) -> &'static str {
        "Minimize or restore the timer (Ctrl+N)"
    }

    fn execute(&self, _args: &[&str], _ctx: &CommandContext) -> CommandResult {
        CommandResult::Dispatch(Action::ToggleMinimized)
    }
}

/// Shows or hides the task panel.
pub struct TasksCommand;

impl SlashCommand for TasksCommand {
    fn name(&self) -> &'static str {
        "tasks"
    }

    fn description(&self) -> &'static str {
        "Open or close the task list (Ctrl+T)"
    }

    fn execute(&self, _args: &[&str], _ctx: &CommandContext) -> CommandResult {
        CommandResult::Dispatch(Action::ToggleTasks)
    }
}

/// Adds a task: `/task [text]`.
pub struct TaskCommand;

impl SlashCommand for TaskCommand {
    fn name(&self) -> &'static str {
        "task"
    }

    fn description(&self) -> &'static str {
        "Add a task to the list"
    }

    fn template(&self) -> String {
        "/task [text]".to_string()
    }

    fn execute(&self, args: &[&str], _ctx: &CommandContext) -> CommandResult {
        let text = args.join(" ");
        if text.is_empty() {
            return CommandResult::Message("Usage: /task <text>".to_string());
        }
        CommandResult::Dispatch(Action::AddTask(text))
    }
}

/// Clears the chat messages. History is kept.
pub struct ClearCommand;

impl SlashCommand for ClearCommand {
    fn name(&self) -> &'static str {
        "clear"
    }

    fn description(&self) -> &'static str {
        "Clear chat messages"
    }

    fn execute(&self, _args: &[&str], _ctx: &CommandContext) -> CommandResult {
        CommandResult::Clear
    }
}

/// Command to exit the application gracefully.
pub struct ExitCommand;

impl SlashCommand for ExitCommand {
    fn name(&self) -> &'static str {
        "exit"
    }

    fn description(&self) -> &'static str {
        "Exit the application"
    }

    fn execute(&self, _args: &[&str], _ctx: &CommandContext) -> CommandResult {
        CommandResult::Exit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A simple test command for unit tests.
    struct TestCommand {
        name: &'static str,
        result: CommandResult,
    }

    impl SlashCommand for TestCommand {
        fn name(&self) -> &'static str {
            self.name
        }

        fn description(&self) -> &'static str {
            "test"
        }

        fn execute(&self, _args: &[&str], _ctx: &CommandContext) -> CommandResult {
            self.result.clone()
        }
    }

    fn names(commands: &[&dyn SlashCommand]) -> Vec<&'static str> {
        commands.iter().map(|c| c.name()).collect()
    }

    // =========================================================================
    // CommandRegistry Tests
    // =========================================================================

    #[test]
    fn new_registry_is_empty() {
        let registry = CommandRegistry::new();
        assert!(registry.all().is_empty());
        assert!(registry.find("pomodoro").is_none());
    }

    #[test]
    fn register_and_find() {
        let mut registry = CommandRegistry::new();
        registry.register(Box::new(TestCommand {
            name: "ping",
            result: CommandResult::Message("pong".into()),
        }));
        let cmd = registry.find("ping");
        assert!(cmd.is_some());
        assert_eq!(
            registry.dispatch("/ping", &[], &CommandContext::default()),
            CommandResult::Message("pong".into())
        );
    }

    #[test]
    fn default_template_is_prefixed_name() {
        let cmd = TestCommand {
            name: "ping",
            result: CommandResult::Continue,
        };
        assert_eq!(cmd.template(), "/ping");
    }

    #[test]
    fn builtins_are_registered_in_order() {
        let registry = CommandRegistry::with_builtins();
        assert_eq!(
            names(&registry.matching("")),
            vec![
                "pomodoro", "pause", "resume", "stop", "timer", "tasks", "task", "clear", "exit"
            ]
        );
    }

    #[test]
    fn matching_prefix_ranks_command_first() {
        let registry = CommandRegistry::with_builtins();
        let matches = registry.matching("pomo");
        assert_eq!(names(&matches).first(), Some(&"pomodoro"));
    }

    #[test]
    fn matching_prefers_shorter_name_on_equal_score() {
        let registry = CommandRegistry::with_builtins();
        let matches = registry.matching("task");
        assert_eq!(names(&matches)[..2], ["task", "tasks"]);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let registry = CommandRegistry::with_builtins();
        assert_eq!(names(&registry.matching("EXIT")), vec!["exit"]);
    }

    #[test]
    fn matching_nothing_returns_empty() {
        let registry = CommandRegistry::with_builtins();
        assert!(registry.matching("zzz").is_empty());
    }

    #[test]
    fn dispatch_unknown_is_unhandled() {
        let registry = CommandRegistry::with_builtins();
        assert_eq!(
            registry.dispatch("/nope", &["x"], &CommandContext::default()),
            CommandResult::Unhandled
        );
    }

    #[test]
    fn dispatch_accepts_name_without_prefix() {
        let registry = CommandRegistry::with_builtins();
        assert_eq!(
            registry.dispatch("exit", &[], &CommandContext::default()),
            CommandResult::Exit
        );
    }

    // =========================================================================
    // Built-in Command Tests
    // =========================================================================

    #[test]
    fn pomodoro_clamps_to_floors() {
        let result = PomodoroCommand.execute(&["10", "2"], &CommandContext::default());
        assert_eq!(
            result,
            CommandResult::Dispatch(Action::StartPomodoro(PomodoroConfig::default()))
        );
    }

    #[test]
    fn pomodoro_keeps_larger_values() {
        let result = PomodoroCommand.execute(&["45", "10"], &CommandContext::default());
        assert_eq!(
            result,
            CommandResult::Dispatch(Action::StartPomodoro(PomodoroConfig {
                work_minutes: 45.0,
                break_minutes: 10.0,
            }))
        );
    }

    #[test]
    fn pomodoro_template_has_placeholders() {
        assert_eq!(PomodoroCommand.template(), "/pomodoro [work] [break]");
    }

    #[test]
    fn pause_without_timer_reports_message() {
        assert!(matches!(
            PauseCommand.execute(&[], &CommandContext::default()),
            CommandResult::Message(_)
        ));
    }

    #[test]
    fn pause_and_resume_with_timer() {
        let ctx = CommandContext {
            pomodoro_started: true,
            tasks_open: false,
        };
        assert_eq!(
            PauseCommand.execute(&[], &ctx),
            CommandResult::Dispatch(Action::SetPaused(true))
        );
        assert_eq!(
            ResumeCommand.execute(&[], &ctx),
            CommandResult::Dispatch(Action::SetPaused(false))
        );
    }

    #[test]
    fn task_joins_arguments() {
        assert_eq!(
            TaskCommand.execute(&["buy", "milk"], &CommandContext::default()),
            CommandResult::Dispatch(Action::AddTask("buy milk".into()))
        );
    }

    #[test]
    fn task_without_text_reports_usage() {
        assert!(matches!(
            TaskCommand.execute(&[], &CommandContext::default()),
            CommandResult::Message(_)
        ));
    }

    #[test]
    fn simple_commands_map_to_results() {
        let ctx = CommandContext::default();
        assert_eq!(
            StopCommand.execute(&[], &ctx),
            CommandResult::Dispatch(Action::StopPomodoro)
        );
        assert_eq!(
            TimerCommand.execute(&[], &ctx),
            CommandResult::Dispatch(Action::ToggleMinimized)
        );
        assert_eq!(
            TasksCommand.execute(&[], &ctx),
            CommandResult::Dispatch(Action::ToggleTasks)
        );
        assert_eq!(ClearCommand.execute(&[], &ctx), CommandResult::Clear);
        assert_eq!(ExitCommand.execute(&[], &ctx), CommandResult::Exit);
    }
}
