//! Task panel rendering with the inline editor and the context menu.

use ratatui::{Frame, layout::Rect, style::Style, widgets::Clear};

use crate::app::{App, AppMode};
use crate::tui::widgets::{ContextMenu, TaskListWidget, first_visible_row};

/// Columns taken by the selection marker and checkbox before a task's text.
const TASK_TEXT_OFFSET: u16 = 6;

impl App {
    pub(crate) fn render_task_panel(&self, frame: &mut Frame, area: Rect) {
        let editing = self.tasks.editor.as_ref().map(|e| e.index);
        let widget = TaskListWidget::new(self.store.tasks.tasks(), self.tasks.selected, &self.theme)
            .focused(self.mode == AppMode::Tasks)
            .editing(editing);
        frame.render_widget(widget, area);

        let inner = inner_area(area);
        let Some(row_y) = self.selected_row_y(inner) else {
            return;
        };

        if let Some(editor) = &self.tasks.editor {
            let editor_area = Rect {
                x: inner.x + TASK_TEXT_OFFSET.min(inner.width),
                y: row_y,
                width: inner.width.saturating_sub(TASK_TEXT_OFFSET),
                height: 1,
            };
            let mut textarea = editor.textarea.clone();
            textarea.set_style(self.theme.normal_style());
            textarea.set_cursor_line_style(Style::default());
            frame.render_widget(Clear, editor_area);
            frame.render_widget(&textarea, editor_area);
        }

        if self.tasks.menu.is_visible() {
            let menu = ContextMenu::new(&self.tasks.menu, &self.theme);
            let (width, height) = menu.preferred_size();
            let menu_area = calculate_context_menu_area(width, height, inner.x, row_y, frame.area());
            frame.render_widget(menu, menu_area);
        }
    }

    /// Screen row of the selected task, if it is visible.
    fn selected_row_y(&self, inner: Rect) -> Option<u16> {
        if self.store.tasks.is_empty() || inner.height == 0 {
            return None;
        }
        let first = first_visible_row(self.tasks.selected, inner.height as usize);
        let offset = u16::try_from(self.tasks.selected - first).ok()?;
        Some(inner.y + offset)
    }
}

fn inner_area(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

/// Places the context menu just below the selected row, or above it when the
/// screen has no room below, keeping it fully on screen.
fn calculate_context_menu_area(width: u16, height: u16, x: u16, row_y: u16, screen: Rect) -> Rect {
    let width = width.min(screen.width);
    let height = height.min(screen.height);

    let below = row_y.saturating_add(1);
    let y = if below.saturating_add(height) <= screen.bottom() {
        below
    } else {
        row_y.saturating_sub(height).max(screen.y)
    };
    let x = x.min(screen.right().saturating_sub(width));

    Rect {
        x,
        y,
        width,
        height,
    }
}
