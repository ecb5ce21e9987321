//! Task panel widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::core::Task;
use crate::tui::Theme;

/// Index of the first row shown when `selected` must stay inside `height` rows.
#[must_use]
pub const fn first_visible_row(selected: usize, height: usize) -> usize {
    selected.saturating_sub(height.saturating_sub(1))
}

/// Renders the task list with checkboxes.
pub struct TaskListWidget<'a> {
    tasks: &'a [Task],
    selected: usize,
    focused: bool,
    /// Row being edited; its text is left blank for the editor to draw over.
    editing: Option<usize>,
    theme: &'a Theme,
}

impl<'a> TaskListWidget<'a> {
    #[must_use]
    pub const fn new(tasks: &'a [Task], selected: usize, theme: &'a Theme) -> Self {
        Self {
            tasks,
            selected,
            focused: false,
            editing: None,
            theme,
        }
    }

    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    #[must_use]
    pub const fn editing(mut self, editing: Option<usize>) -> Self {
        self.editing = editing;
        self
    }
}

impl Widget for TaskListWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let done = self.tasks.iter().filter(|t| t.done).count();
        let title = format!(" Tasks {done}/{} ", self.tasks.len());
        let border_style = if self.focused {
            self.theme.highlight_style()
        } else {
            self.theme.border_style()
        };
        let block = Block::default()
            .title(Span::styled(title, self.theme.header_style()))
            .borders(Borders::ALL)
            .border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        if self.tasks.is_empty() {
            Paragraph::new(Span::styled("No tasks. Press a to add.", self.theme.muted_style()))
                .render(inner, buf);
            return;
        }

        let height = inner.height as usize;
        let first = first_visible_row(self.selected, height);
        let lines: Vec<Line> = self
            .tasks
            .iter()
            .enumerate()
            .skip(first)
            .take(height)
            .map(|(i, task)| {
                let is_selected = self.focused && i == self.selected;
                let marker = if is_selected { "> " } else { "  " };
                let checkbox = if task.done { "[x] " } else { "[ ] " };
                let text = if self.editing == Some(i) {
                    ""
                } else {
                    task.value.as_str()
                };
                let style = if is_selected {
                    self.theme.highlight_style()
                } else if task.done {
                    self.theme.muted_style()
                } else {
                    self.theme.normal_style()
                };
                Line::from(vec![
                    Span::styled(marker, style),
                    Span::styled(checkbox, style),
                    Span::styled(text.to_string(), style),
                ])
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}
