//! Shared application store.
//!
//! Timer and task state are read by several UI parts (chat panel, header,
//! task panel) but only ever mutated here, through [`Store::dispatch`].

use tracing::{debug, info};

use super::pomodoro::{Phase, PomodoroConfig, PomodoroState, TickOutcome};
use super::todo::TaskList;

/// A requested state change.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- Pomodoro ---
    StartPomodoro(PomodoroConfig),
    SetPaused(bool),
    TogglePaused,
    StopPomodoro,
    ToggleMinimized,
    /// One second of wall-clock time elapsed.
    Tick,

    // --- Tasks ---
    ToggleTasks,
    AddTask(String),
    InsertTaskBelow(usize),
    DuplicateTask(usize),
    EditTask(usize, String),
    ToggleTaskDone(usize),
    DeleteTask(usize),
}

/// Notable result of a dispatched action, for the UI to react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    /// The timer rolled over into a new phase.
    PhaseChanged(Phase),
    /// A task was created at the given index.
    TaskCreated(usize),
}

/// Process-wide UI state, owned by the app and lent to renderers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Store {
    pub pomodoro: PomodoroState,
    pub tasks: TaskList,
}

impl Store {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies an action.
    pub fn dispatch(&mut self, action: Action) -> Option<StoreEvent> {
        if action != Action::Tick {
            debug!(?action, "store.dispatch");
        }
        match action {
            Action::StartPomodoro(config) => {
                info!(
                    work_minutes = config.work_minutes,
                    break_minutes = config.break_minutes,
                    "pomodoro.started"
                );
                self.pomodoro.start(config);
            }
            Action::SetPaused(paused) => self.pomodoro.set_paused(paused),
            Action::TogglePaused => {
                let paused = !self.pomodoro.paused;
                self.pomodoro.set_paused(paused);
            }
            Action::StopPomodoro => {
                info!("pomodoro.stopped");
                self.pomodoro.stop();
            }
            Action::ToggleMinimized => {
                let minimized = !self.pomodoro.minimized;
                self.pomodoro.set_minimized(minimized);
            }
            Action::Tick => {
                if let TickOutcome::PhaseChanged(phase) = self.pomodoro.tick() {
                    info!(phase = phase.label(), "pomodoro.phase_changed");
                    return Some(StoreEvent::PhaseChanged(phase));
                }
            }
            Action::ToggleTasks => self.tasks.toggle_open(),
            Action::AddTask(value) => {
                let index = self.tasks.add(value);
                return Some(StoreEvent::TaskCreated(index));
            }
            Action::InsertTaskBelow(index) => {
                let index = self.tasks.insert_below(index);
                return Some(StoreEvent::TaskCreated(index));
            }
            Action::DuplicateTask(index) => {
                return self.tasks.duplicate(index).map(StoreEvent::TaskCreated);
            }
            Action::EditTask(index, value) => self.tasks.edit(index, value),
            Action::ToggleTaskDone(index) => self.tasks.toggle_done(index),
            Action::DeleteTask(index) => {
                self.tasks.delete(index);
            }
        }
        None
    }
}
