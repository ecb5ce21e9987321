//! Chat message list widget.
//!
//! Messages are pre-wrapped to the content width so the scroll offset can be
//! expressed in visual rows. [`calculate_visual_line_count`] uses the same
//! wrapping, which keeps the app's scroll math and the rendered output in
//! agreement.

use chrono::{DateTime, Local};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{
        Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget,
        Widget,
    },
};
use unicode_width::UnicodeWidthChar;

use crate::tui::Theme;

/// Maximum number of messages kept in the chat panel.
/// Older messages are dropped from the front once this is exceeded.
pub const MAX_CHAT_MESSAGES: usize = 5000;

/// Who produced a message, for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MessageKind {
    /// Typed by the user.
    #[default]
    User,
    /// Status line from the app (phase changes, command feedback).
    System,
    /// Something went wrong or was not understood.
    Warning,
}

/// A single chat panel entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub author: String,
    pub text: String,
    pub kind: MessageKind,
    pub sent_at: DateTime<Local>,
}

impl ChatMessage {
    #[must_use]
    pub fn user(author: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            text: text.into(),
            kind: MessageKind::User,
            sent_at: Local::now(),
        }
    }

    #[must_use]
    pub fn system(text: impl Into<String>) -> Self {
        Self {
            author: "*".to_string(),
            text: text.into(),
            kind: MessageKind::System,
            sent_at: Local::now(),
        }
    }

    #[must_use]
    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            author: "!".to_string(),
            text: text.into(),
            kind: MessageKind::Warning,
            sent_at: Local::now(),
        }
    }

    /// `HH:MM author ` prefix shown before the first line of the message.
    #[must_use]
    pub fn prefix(&self) -> String {
        format!("{} {} ", self.sent_at.format("%H:%M"), self.author)
    }

    /// Logical lines before wrapping. Only the first one carries the prefix.
    fn logical_lines(&self) -> Vec<String> {
        let mut lines = self.text.split('\n');
        let first = format!("{}{}", self.prefix(), lines.next().unwrap_or_default());
        std::iter::once(first).chain(lines.map(String::from)).collect()
    }
}

/// Calculates the total number of visual rows after wrapping.
#[must_use]
pub fn calculate_visual_line_count(messages: &[ChatMessage], content_width: usize) -> usize {
    messages
        .iter()
        .flat_map(ChatMessage::logical_lines)
        .map(|line| {
            if content_width == 0 {
                1
            } else {
                wrap_line_to_width(&line, content_width).len()
            }
        })
        .sum()
}

/// Wraps a single line of text to fit within the given display width.
fn wrap_line_to_width(text: &str, width: usize) -> Vec<String> {
    if width == 0 || text.is_empty() {
        return vec![String::new()];
    }

    let mut result = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for ch in text.chars() {
        let char_width = ch.width().unwrap_or(0);
        if current_width + char_width > width {
            result.push(std::mem::take(&mut current));
            current_width = 0;
        }
        current.push(ch);
        current_width += char_width;
    }
    result.push(current);
    result
}

/// One wrapped row, remembering how many leading chars belong to the prefix.
struct VisualRow {
    text: String,
    prefix_chars: usize,
    kind: MessageKind,
}

fn visual_rows(messages: &[ChatMessage], width: usize) -> Vec<VisualRow> {
    let mut rows = Vec::new();
    for message in messages {
        let mut prefix_left = message.prefix().chars().count();
        for line in message.logical_lines() {
            for text in wrap_line_to_width(&line, width) {
                let len = text.chars().count();
                let prefix_chars = prefix_left.min(len);
                prefix_left -= prefix_chars;
                rows.push(VisualRow {
                    text,
                    prefix_chars,
                    kind: message.kind,
                });
            }
        }
    }
    rows
}

/// A scrollable list of chat messages.
pub struct MessageListWidget<'a> {
    messages: &'a [ChatMessage],
    scroll_offset: usize,
    title: &'a str,
    theme: &'a Theme,
    is_truncated: bool,
}

impl<'a> MessageListWidget<'a> {
    #[must_use]
    pub const fn new(
        messages: &'a [ChatMessage],
        scroll_offset: usize,
        title: &'a str,
        theme: &'a Theme,
    ) -> Self {
        Self {
            messages,
            scroll_offset,
            title,
            theme,
            is_truncated: false,
        }
    }

    /// Marks the list as having dropped older messages.
    #[must_use]
    pub const fn truncated(mut self, is_truncated: bool) -> Self {
        self.is_truncated = is_truncated;
        self
    }

    fn body_style(&self, kind: MessageKind) -> Style {
        match kind {
            MessageKind::User => self.theme.normal_style(),
            MessageKind::System => self.theme.muted_style(),
            MessageKind::Warning => self.theme.warning_style(),
        }
    }

    fn prefix_style(&self, kind: MessageKind) -> Style {
        match kind {
            MessageKind::User => self.theme.highlight_style(),
            MessageKind::System => self.theme.muted_style(),
            MessageKind::Warning => self.theme.warning_style(),
        }
    }
}

impl Widget for MessageListWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner_area = Block::default().borders(Borders::ALL).inner(area);
        let visible_height = inner_area.height as usize;
        // One column is reserved for the scrollbar.
        let content_width = inner_area.width.saturating_sub(1) as usize;

        let rows = visual_rows(self.messages, content_width);
        let total = rows.len();

        let visible: Vec<Line> = rows
            .into_iter()
            .skip(self.scroll_offset)
            .take(visible_height)
            .map(|row| {
                let split = row
                    .text
                    .char_indices()
                    .nth(row.prefix_chars)
                    .map_or(row.text.len(), |(byte, _)| byte);
                let (prefix, body) = row.text.split_at(split);
                Line::from(vec![
                    Span::styled(prefix.to_string(), self.prefix_style(row.kind)),
                    Span::styled(body.to_string(), self.body_style(row.kind)),
                ])
            })
            .collect();

        let truncation_info = if self.is_truncated {
            " [truncated]"
        } else {
            ""
        };
        let scroll_info = if total > visible_height {
            format!(
                " ({}-{}/{})",
                self.scroll_offset + 1,
                (self.scroll_offset + visible_height).min(total),
                total
            )
        } else {
            String::new()
        };
        let title = format!("{}{truncation_info}{scroll_info}", self.title);

        Block::default()
            .title(Line::from(Span::styled(title, self.theme.header_style())))
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .render(area, buf);

        Paragraph::new(visible).render(inner_area, buf);

        if total > visible_height {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("▲"))
                .end_symbol(Some("▼"))
                .track_symbol(Some("│"))
                .thumb_symbol("█")
                .track_style(self.theme.scrollbar_track_style())
                .thumb_style(self.theme.scrollbar_thumb_style());

            let mut scrollbar_state = ScrollbarState::new(total)
                .position(self.scroll_offset)
                .viewport_content_length(visible_height);

            scrollbar.render(inner_area, buf, &mut scrollbar_state);
        }
    }
}
