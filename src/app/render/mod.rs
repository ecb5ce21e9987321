//! Rendering methods for the App.
//!
//! - **Chat**: header, message list (or timer view), composer, footer and
//!   the command menu
//! - **Timer**: full timer view and the header clock
//! - **Tasks**: task panel with its inline editor and context menu

mod chat;
mod tasks;
mod timer;

use ratatui::Frame;

use super::App;

impl App {
    /// Renders the application UI.
    ///
    /// Reads state only; `update_layout` must have run for this frame.
    pub fn render(&self, frame: &mut Frame) {
        self.render_chat(frame);
        if let Some(area) = self.layout.chat.tasks {
            self.render_task_panel(frame, area);
        }
    }
}
