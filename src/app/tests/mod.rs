//! Tests for the app module.
//!
//! This module is organized into submodules by functionality:
//! - `commands` - Slash commands, timer hotkeys and tick events
//! - `helpers` - Shared test utilities
//! - `input` - Composer, history, command recognizer and paste handling
//! - `tasks` - Task panel shortcuts, inline editor and context menu
//! - `ui` - Rendering and message list scrolling

#[allow(clippy::unwrap_used, clippy::expect_used)]
pub mod helpers;
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tasks;
