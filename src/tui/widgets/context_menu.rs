//! Task context menu widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Widget},
};

use crate::tui::Theme;

/// Actions offered by the task context menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextMenuItem {
    Copy,
    InsertBelow,
    Duplicate,
    Edit,
    Delete,
}

impl ContextMenuItem {
    #[must_use]
    pub const fn all() -> &'static [ContextMenuItem] {
        &[
            Self::Copy,
            Self::InsertBelow,
            Self::Duplicate,
            Self::Edit,
            Self::Delete,
        ]
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Copy => "Copy task",
            Self::InsertBelow => "Insert task below",
            Self::Duplicate => "Duplicate task",
            Self::Edit => "Edit task",
            Self::Delete => "Delete",
        }
    }

    /// Key that triggers the same action directly from the task panel.
    #[must_use]
    pub const fn shortcut(&self) -> &'static str {
        match self {
            Self::Copy => "Ctrl+C",
            Self::InsertBelow => "Alt+Enter",
            Self::Duplicate => "Ctrl+Shift+V",
            Self::Edit => "Enter",
            Self::Delete => "Del",
        }
    }
}

/// Visibility and highlight of the context menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContextMenuState {
    #[default]
    Hidden,
    Showing {
        selected: usize,
    },
}

impl ContextMenuState {
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        matches!(self, Self::Showing { .. })
    }

    pub fn open(&mut self) {
        *self = Self::Showing { selected: 0 };
    }

    pub fn close(&mut self) {
        *self = Self::Hidden;
    }

    pub fn select_up(&mut self) {
        if let Self::Showing { selected } = self {
            *selected = selected.saturating_sub(1);
        }
    }

    pub fn select_down(&mut self) {
        if let Self::Showing { selected } = self {
            *selected = (*selected + 1).min(ContextMenuItem::all().len() - 1);
        }
    }

    #[must_use]
    pub fn selected_item(&self) -> Option<ContextMenuItem> {
        match self {
            Self::Showing { selected } => ContextMenuItem::all().get(*selected).copied(),
            Self::Hidden => None,
        }
    }
}

/// Widget drawing the context menu as a bordered list.
pub struct ContextMenu<'a> {
    state: &'a ContextMenuState,
    theme: &'a Theme,
}

impl<'a> ContextMenu<'a> {
    #[must_use]
    pub const fn new(state: &'a ContextMenuState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    /// Returns (width, height) in terminal cells, or zeros when hidden.
    #[must_use]
    pub fn preferred_size(&self) -> (u16, u16) {
        if !self.state.is_visible() {
            return (0, 0);
        }
        let widest = ContextMenuItem::all()
            .iter()
            .map(|item| item.label().len() + 2 + item.shortcut().len())
            .max()
            .unwrap_or(0);
        #[allow(clippy::cast_possible_truncation)]
        let width = (widest + 4 + 2) as u16;
        #[allow(clippy::cast_possible_truncation)]
        let height = (ContextMenuItem::all().len() + 2) as u16;
        (width, height)
    }
}

impl Widget for ContextMenu<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let ContextMenuState::Showing { selected } = *self.state else {
            return;
        };

        Clear.render(area, buf);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style());
        let inner = block.inner(area);
        block.render(area, buf);

        let label_width = ContextMenuItem::all()
            .iter()
            .map(|item| item.label().len())
            .max()
            .unwrap_or(0);

        let items: Vec<ListItem> = ContextMenuItem::all()
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let is_selected = i == selected;
                let style = if is_selected {
                    self.theme.highlight_style()
                } else {
                    self.theme.normal_style()
                };
                let marker = if is_selected { "> " } else { "  " };
                ListItem::new(Line::from(vec![
                    Span::styled(marker, style),
                    Span::styled(format!("{:<label_width$}  ", item.label()), style),
                    Span::styled(item.shortcut(), self.theme.muted_style()),
                ]))
            })
            .collect();

        Widget::render(List::new(items), inner, buf);
    }
}
