//! Pomodoro countdown.
//!
//! The timer alternates between a work phase and a break phase until it is
//! stopped. It only advances when [`PomodoroState::tick`] is called, once per
//! elapsed second, so it has no notion of wall-clock time of its own.

/// Minimum length of a work phase, in minutes.
pub const MIN_WORK_MINUTES: u32 = 30;

/// Minimum length of a break phase, in minutes.
pub const MIN_BREAK_MINUTES: u32 = 5;

/// Seconds shown by an idle (stopped) timer.
pub const IDLE_SECONDS: u64 = MIN_WORK_MINUTES as u64 * 60;

/// Which half of the cycle the timer is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Work,
    Break,
}

impl Phase {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Work => "Focus",
            Self::Break => "Break",
        }
    }
}

/// Work and break lengths chosen for a session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PomodoroConfig {
    /// Work phase length in minutes.
    pub work_minutes: f64,
    /// Break phase length in minutes.
    pub break_minutes: f64,
}

impl Default for PomodoroConfig {
    fn default() -> Self {
        Self {
            work_minutes: f64::from(MIN_WORK_MINUTES),
            break_minutes: f64::from(MIN_BREAK_MINUTES),
        }
    }
}

impl PomodoroConfig {
    /// Builds a config from `/pomodoro` arguments.
    ///
    /// Each value is clamped to its floor; missing or non-numeric values fall
    /// back to the floor.
    #[must_use]
    pub fn from_args(args: &[&str]) -> Self {
        Self {
            work_minutes: parse_minutes(args.first().copied(), MIN_WORK_MINUTES),
            break_minutes: parse_minutes(args.get(1).copied(), MIN_BREAK_MINUTES),
        }
    }

    #[must_use]
    pub fn work_seconds(&self) -> u64 {
        minutes_to_seconds(self.work_minutes)
    }

    #[must_use]
    pub fn break_seconds(&self) -> u64 {
        minutes_to_seconds(self.break_minutes)
    }
}

/// Parses a minute count, never returning less than `floor`.
#[must_use]
pub fn parse_minutes(arg: Option<&str>, floor: u32) -> f64 {
    let floor = f64::from(floor);
    match arg.map(str::trim).and_then(|s| s.parse::<f64>().ok()) {
        Some(value) if value.is_finite() => value.max(floor),
        _ => floor,
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn minutes_to_seconds(minutes: f64) -> u64 {
    // Callers only pass values already clamped to a positive floor.
    (minutes * 60.0).round() as u64
}

/// Progress of the current phase as a percentage in `[1, 100]`.
///
/// The floor of 1 keeps a visible arc even when no time has elapsed.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn progress_percentage(total_seconds: u64, remaining_seconds: u64) -> f64 {
    if total_seconds == 0 {
        return 100.0;
    }
    let elapsed = total_seconds.saturating_sub(remaining_seconds) as f64;
    (elapsed / total_seconds as f64 * 100.0).max(1.0)
}

/// Formats seconds as `MM:SS` (minutes are not wrapped at 60).
#[must_use]
pub fn format_seconds(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// What a call to [`PomodoroState::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Timer is stopped or paused.
    Idle,
    /// One second elapsed within the current phase.
    Counted,
    /// The phase ran out and the timer switched to the given phase.
    PhaseChanged(Phase),
}

/// Timer state shared by the chat panel and the header.
#[derive(Debug, Clone, PartialEq)]
pub struct PomodoroState {
    pub started: bool,
    pub paused: bool,
    pub minimized: bool,
    pub phase: Phase,
    pub config: PomodoroConfig,
    /// Length of the current phase.
    pub total_seconds: u64,
    /// Seconds left in the current phase.
    pub remaining_seconds: u64,
    /// Completed work phases since the timer was started.
    pub completed_sessions: u32,
}

impl Default for PomodoroState {
    fn default() -> Self {
        Self {
            started: false,
            paused: false,
            minimized: false,
            phase: Phase::Work,
            config: PomodoroConfig::default(),
            total_seconds: IDLE_SECONDS,
            remaining_seconds: IDLE_SECONDS,
            completed_sessions: 0,
        }
    }
}

impl PomodoroState {
    /// Starts a new session with the given config, beginning with work.
    pub fn start(&mut self, config: PomodoroConfig) {
        self.config = config;
        self.started = true;
        self.paused = false;
        self.minimized = false;
        self.phase = Phase::Work;
        self.total_seconds = config.work_seconds();
        self.remaining_seconds = self.total_seconds;
        self.completed_sessions = 0;
    }

    pub fn set_paused(&mut self, paused: bool) {
        if self.started {
            self.paused = paused;
        }
    }

    pub fn set_minimized(&mut self, minimized: bool) {
        self.minimized = minimized;
    }

    /// Stops the timer and resets the display to the idle duration.
    pub fn stop(&mut self) {
        *self = Self {
            config: self.config,
            ..Self::default()
        };
    }

    /// Returns `true` while the countdown is actually running.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.started && !self.paused
    }

    /// Advances the countdown by one second.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.is_running() {
            return TickOutcome::Idle;
        }
        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds > 0 {
            return TickOutcome::Counted;
        }

        let next = match self.phase {
            Phase::Work => {
                self.completed_sessions += 1;
                Phase::Break
            }
            Phase::Break => Phase::Work,
        };
        self.phase = next;
        self.total_seconds = match next {
            Phase::Work => self.config.work_seconds(),
            Phase::Break => self.config.break_seconds(),
        };
        self.remaining_seconds = self.total_seconds;
        TickOutcome::PhaseChanged(next)
    }

    /// Progress of the current phase, see [`progress_percentage`].
    #[must_use]
    pub fn percentage(&self) -> f64 {
        progress_percentage(self.total_seconds, self.remaining_seconds)
    }
}
