//! TUI presentation layer.

pub mod clipboard;
pub mod setup;
pub mod theme;
pub mod widgets;

pub use clipboard::{Clipboard, ClipboardError, RecordingClipboard, SystemClipboard};
pub use setup::{EventMode, TerminalEventGuard};
pub use theme::Theme;
