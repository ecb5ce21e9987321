//! Terminal event modes pomochat depends on.
//!
//! - Bracketed paste: a multi-line paste arrives as one event, so its newlines
//!   reach the composer as text instead of as Enter presses that would submit
//!   half a message.
//! - Keyboard enhancement: without escape-code disambiguation many terminals
//!   report Shift+Tab, Shift+Enter and Ctrl+Shift+V like their plain forms.
//!   Argument navigation (Shift+Tab), the composer newline (Shift+Enter) and
//!   task duplication (Ctrl+Shift+V) need the modifier to survive.
//!
//! Both are optional. A terminal that refuses one keeps working with the
//! fallbacks: Ctrl+J / Alt+Enter for newlines, and the task context menu.

use std::io::stdout;

use ratatui::crossterm::event::{
    DisableBracketedPaste, EnableBracketedPaste, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use ratatui::crossterm::execute;
use tracing::{debug, warn};

/// An event mode the guard can switch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventMode {
    BracketedPaste,
    KeyboardEnhancement,
}

impl EventMode {
    /// Enable order. Modes are restored in reverse.
    pub const ALL: [Self; 2] = [Self::BracketedPaste, Self::KeyboardEnhancement];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::BracketedPaste => "bracketed_paste",
            Self::KeyboardEnhancement => "keyboard_enhancement",
        }
    }

    fn enable(self) -> std::io::Result<()> {
        match self {
            Self::BracketedPaste => execute!(stdout(), EnableBracketedPaste),
            Self::KeyboardEnhancement => execute!(
                stdout(),
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
            ),
        }
    }

    fn disable(self) -> std::io::Result<()> {
        match self {
            Self::BracketedPaste => execute!(stdout(), DisableBracketedPaste),
            Self::KeyboardEnhancement => execute!(stdout(), PopKeyboardEnhancementFlags),
        }
    }
}

/// Enables the event modes on creation and restores them on drop, including
/// during a panic unwind. Create it after `ratatui::init`, which resets
/// terminal flags.
pub struct TerminalEventGuard {
    enabled: Vec<EventMode>,
}

impl TerminalEventGuard {
    #[must_use]
    pub fn new() -> Self {
        let mut enabled = Vec::with_capacity(EventMode::ALL.len());
        for mode in EventMode::ALL {
            match mode.enable() {
                Ok(()) => {
                    debug!(mode = mode.label(), "terminal.mode.enabled");
                    enabled.push(mode);
                }
                Err(e) if mode == EventMode::BracketedPaste => {
                    warn!(mode = mode.label(), error = %e, "terminal.mode.unavailable");
                }
                Err(e) => debug!(mode = mode.label(), error = %e, "terminal.mode.unavailable"),
            }
        }
        Self { enabled }
    }

    /// Modes that were switched on and will be restored on drop.
    #[must_use]
    pub fn enabled(&self) -> &[EventMode] {
        &self.enabled
    }
}

impl Default for TerminalEventGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TerminalEventGuard {
    fn drop(&mut self) {
        for mode in self.enabled.drain(..).rev() {
            if let Err(e) = mode.disable() {
                debug!(mode = mode.label(), error = %e, "terminal.mode.restore_failed");
            }
        }
    }
}
