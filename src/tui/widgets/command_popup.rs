//! Slash command menu widget.
//!
//! Shown above the composer while a command name is being typed. Each row
//! displays the command's template (placeholders included) and its
//! description.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::tui::Theme;

/// Maximum number of visible rows in the command menu.
pub const MAX_COMMAND_POPUP_ROWS: usize = 8;

/// A matched slash command for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandMatch {
    /// Command name (without slash).
    pub name: &'static str,
    /// Command description.
    pub description: &'static str,
    /// Text inserted into the composer when this entry is picked.
    pub template: String,
}

/// State of the slash command menu.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CommandPopupState {
    /// Menu is not visible.
    #[default]
    Hidden,
    /// Menu is showing matching commands.
    Showing {
        /// Matching commands, best match first.
        matches: Vec<CommandMatch>,
        /// Currently highlighted index.
        selected: usize,
    },
}

impl CommandPopupState {
    /// Builds the menu state for a list of matches.
    ///
    /// An empty list yields [`CommandPopupState::Hidden`] so the menu is never
    /// open without something to pick.
    #[must_use]
    pub fn from_matches(matches: Vec<CommandMatch>) -> Self {
        if matches.is_empty() {
            Self::Hidden
        } else {
            Self::Showing {
                matches,
                selected: 0,
            }
        }
    }

    /// Returns true if the menu is visible.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        matches!(self, Self::Showing { .. })
    }

    /// Move selection up by one.
    pub fn select_up(&mut self) {
        if let Self::Showing { selected, .. } = self {
            *selected = selected.saturating_sub(1);
        }
    }

    /// Move selection down by one.
    pub fn select_down(&mut self) {
        if let Self::Showing { matches, selected } = self {
            *selected = (*selected + 1).min(matches.len().saturating_sub(1));
        }
    }

    /// Returns the highlighted entry, if any.
    #[must_use]
    pub fn selected_match(&self) -> Option<&CommandMatch> {
        if let Self::Showing { matches, selected } = self {
            matches.get(*selected)
        } else {
            None
        }
    }

    /// Returns the number of matches if in Showing state.
    #[must_use]
    pub fn match_count(&self) -> usize {
        match self {
            Self::Showing { matches, .. } => matches.len(),
            Self::Hidden => 0,
        }
    }

    /// Returns the currently selected index if in Showing state.
    #[must_use]
    pub const fn selected_index(&self) -> Option<usize> {
        match self {
            Self::Showing { selected, .. } => Some(*selected),
            Self::Hidden => None,
        }
    }
}

/// Widget for rendering the slash command menu.
pub struct CommandPopup<'a> {
    state: &'a CommandPopupState,
    theme: &'a Theme,
}

impl<'a> CommandPopup<'a> {
    #[must_use]
    pub const fn new(state: &'a CommandPopupState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    /// Calculates the preferred size for the menu.
    ///
    /// Returns (width, height) in terminal cells.
    #[must_use]
    pub fn preferred_size(&self) -> (u16, u16) {
        let CommandPopupState::Showing { matches, .. } = self.state else {
            return (0, 0);
        };
        if matches.is_empty() {
            return (0, 0);
        }

        let max_template = max_template_width(matches);
        let max_desc = matches
            .iter()
            .map(|m| m.description.width())
            .max()
            .unwrap_or(0);

        // "> " + template + two spaces + description + borders and padding
        #[allow(clippy::cast_possible_truncation)]
        let width = (2 + max_template + 2 + max_desc + 4).min(72) as u16;

        #[allow(clippy::cast_possible_truncation)]
        let height = (matches.len().min(MAX_COMMAND_POPUP_ROWS) + 2) as u16;

        (width, height)
    }
}

fn max_template_width(matches: &[CommandMatch]) -> usize {
    matches
        .iter()
        .map(|m| m.template.width())
        .max()
        .unwrap_or(0)
}

impl Widget for CommandPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let CommandPopupState::Showing { matches, selected } = self.state else {
            return;
        };
        if matches.is_empty() {
            return;
        }

        Clear.render(area, buf);

        let block = Block::default()
            .title(" Commands ")
            .title_style(self.theme.header_style())
            .borders(Borders::ALL)
            .border_style(self.theme.border_style());

        let inner = block.inner(area);
        block.render(area, buf);

        let template_width = max_template_width(matches);
        let visible = inner.height as usize;
        // Keep the highlighted row on screen when the list is longer than the menu.
        let first = selected.saturating_sub(visible.saturating_sub(1));

        let items: Vec<ListItem> = matches
            .iter()
            .enumerate()
            .skip(first)
            .take(visible)
            .map(|(i, cmd)| {
                let is_selected = i == *selected;
                let style = if is_selected {
                    self.theme.highlight_style()
                } else {
                    self.theme.normal_style()
                };
                let prefix = if is_selected { "> " } else { "  " };
                let pad = template_width.saturating_sub(cmd.template.width());
                ListItem::new(Line::from(vec![
                    Span::styled(prefix, style),
                    Span::styled(format!("{}{}  ", cmd.template, " ".repeat(pad)), style),
                    Span::styled(cmd.description, self.theme.muted_style()),
                ]))
            })
            .collect();

        Widget::render(List::new(items), inner, buf);
    }
}
