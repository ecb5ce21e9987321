//! Custom TUI widgets.

pub mod command_popup;
pub mod context_menu;
pub mod messages;
pub mod task_list;

pub use command_popup::{CommandMatch, CommandPopup, CommandPopupState, MAX_COMMAND_POPUP_ROWS};
pub use context_menu::{ContextMenu, ContextMenuItem, ContextMenuState};
pub use messages::{
    ChatMessage, MAX_CHAT_MESSAGES, MessageKind, MessageListWidget, calculate_visual_line_count,
};
pub use task_list::{TaskListWidget, first_visible_row};
