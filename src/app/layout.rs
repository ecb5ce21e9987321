//! Layout calculation helpers for the TUI.
//!
//! This module is the single source of truth for layout definitions, so
//! dimension calculations in `App::update_layout` and rendering in
//! `App::render` always agree.

use ratatui::layout::{Constraint, Layout, Rect};

/// Width of the task panel when it is open.
pub const TASK_PANEL_WIDTH: u16 = 34;

/// Layout of the main screen.
///
/// ```text
/// +------------------------------------------+
/// | header (clock when minimized)            |
/// +---------------------------+--------------+
/// | messages / timer          | tasks        |
/// +---------------------------+--------------+
/// | composer                                 |
/// +------------------------------------------+
/// | footer (key hints)                       |
/// +------------------------------------------+
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ChatLayout {
    /// Header area (1 line).
    pub header: Rect,
    /// Message list or timer view.
    pub body: Rect,
    /// Task panel, present only while it is open.
    pub tasks: Option<Rect>,
    /// Composer area.
    pub input: Rect,
    /// Footer area (key hints, 1 line).
    pub footer: Rect,
    /// Visible height of the message list (excluding borders).
    pub messages_visible_height: usize,
    /// Content width for the message list (excluding borders and scrollbar).
    pub messages_content_width: usize,
    /// Inner content width for the composer (excluding borders).
    pub input_inner_width: usize,
    /// Inner content height for the composer (excluding borders).
    pub input_inner_height: usize,
}

const CHAT_LAYOUT_CONSTRAINTS: [Constraint; 4] = [
    Constraint::Length(1), // Header
    Constraint::Min(5),    // Body (grows)
    Constraint::Length(5), // Composer
    Constraint::Length(1), // Footer
];

const BODY_WITH_TASKS_CONSTRAINTS: [Constraint; 2] = [
    Constraint::Min(20),                    // Messages / timer
    Constraint::Length(TASK_PANEL_WIDTH),   // Tasks
];

/// Calculates the main screen layout.
///
/// When `tasks_open` is true the body is split and the task panel takes a
/// fixed-width column on the right.
#[must_use]
pub fn calculate_chat_layout(area: Rect, tasks_open: bool) -> ChatLayout {
    let chunks = Layout::vertical(CHAT_LAYOUT_CONSTRAINTS).split(area);

    let (body, tasks) = if tasks_open {
        let columns = Layout::horizontal(BODY_WITH_TASKS_CONSTRAINTS).split(chunks[1]);
        (columns[0], Some(columns[1]))
    } else {
        (chunks[1], None)
    };

    let input = chunks[2];

    // Messages: 2 for borders, 1 more column for the scrollbar
    let messages_visible_height = body.height.saturating_sub(2) as usize;
    let messages_content_width = body.width.saturating_sub(3) as usize;
    let input_inner_width = input.width.saturating_sub(2) as usize;
    let input_inner_height = input.height.saturating_sub(2) as usize;

    ChatLayout {
        header: chunks[0],
        body,
        tasks,
        input,
        footer: chunks[3],
        messages_visible_height,
        messages_content_width,
        input_inner_width,
        input_inner_height,
    }
}
