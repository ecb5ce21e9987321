//! Chat screen rendering: header, message list, composer, footer and the
//! command menu.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::app::state::RecognizerState;
use crate::app::{App, AppMode};
use crate::tui::widgets::{CommandPopup, MessageListWidget};

impl App {
    /// Renders everything except the task panel.
    ///
    /// Uses the cached layout from `self.layout.chat` which is calculated
    /// once per frame in `update_layout()`.
    pub(crate) fn render_chat(&self, frame: &mut Frame) {
        let layout = self.layout.chat;

        self.render_chat_header(frame, layout.header);

        // The full timer view replaces the messages while it is maximized.
        let pomodoro = &self.store.pomodoro;
        if pomodoro.started && !pomodoro.minimized {
            self.render_timer_view(frame, layout.body);
        } else {
            self.render_chat_messages(frame, layout.body);
        }

        self.render_chat_input(frame, layout.input);
        self.render_chat_footer(frame, layout.footer);

        if self.should_show_command_popup() {
            self.render_command_popup(frame, layout.input);
        }
    }

    /// Renders the header line. A minimized timer shows its clock here.
    fn render_chat_header(&self, frame: &mut Frame, area: Rect) {
        let header = Line::from(vec![
            Span::styled(" pomochat ", self.theme.header_style()),
            Span::styled(self.username.as_str(), self.theme.muted_style()),
        ]);
        frame.render_widget(Paragraph::new(header), area);

        let pomodoro = &self.store.pomodoro;
        if pomodoro.started && pomodoro.minimized {
            self.render_header_clock(frame, area);
        }
    }

    fn render_chat_messages(&self, frame: &mut Frame, area: Rect) {
        let widget = MessageListWidget::new(
            &self.chat.messages,
            self.chat.scroll.offset,
            " Chat ",
            &self.theme,
        )
        .truncated(self.chat.truncated);
        frame.render_widget(widget, area);
    }

    /// Renders the composer.
    fn render_chat_input(&self, frame: &mut Frame, area: Rect) {
        let focused = self.mode == AppMode::Chat;
        let border_style = if focused {
            self.theme.border_style()
        } else {
            self.theme.muted_style()
        };

        let block = Block::bordered()
            .title(" Message ")
            .title_style(self.theme.header_style())
            .title_bottom(Line::from(vec![
                Span::styled(" Shift+Enter", self.theme.highlight_style()),
                Span::styled(" newline ", self.theme.muted_style()),
            ]))
            .border_style(border_style);

        let mut textarea = self.text_input.textarea.clone();
        textarea.set_block(block);
        textarea.set_style(self.theme.normal_style());
        textarea.set_cursor_line_style(Style::default());
        textarea.set_selection_style(self.theme.selection_style());
        textarea.set_placeholder_style(self.theme.placeholder_style());
        if !focused {
            textarea.set_cursor_style(Style::default());
        }

        frame.render_widget(&textarea, area);
    }

    /// Renders the footer with key hints for the current state.
    fn render_chat_footer(&self, frame: &mut Frame, area: Rect) {
        let hints: &[(&str, &str)] = if self.mode == AppMode::Tasks {
            &[
                ("a", "Add"),
                ("Enter", "Edit"),
                ("Space", "Done"),
                ("m", "Menu"),
                ("Esc", "Back"),
            ]
        } else if self.should_show_command_popup() {
            &[
                ("↑/↓", "Navigate"),
                ("Tab/Enter", "Select"),
                ("Esc", "Dismiss"),
            ]
        } else if self.text_input.recognizer == RecognizerState::Suppressed {
            &[("Tab/Shift+Tab", "Next/previous argument"), ("Enter", "Run")]
        } else {
            &[
                ("Enter", "Send"),
                ("/", "Commands"),
                ("Ctrl+P", "Play/Pause"),
                ("Ctrl+T", "Tasks"),
                ("Ctrl+C", "Quit"),
            ]
        };

        let mut spans = Vec::with_capacity(hints.len() * 2);
        for (key, action) in hints {
            spans.push(Span::styled(format!(" [{key}] "), self.theme.highlight_style()));
            spans.push(Span::styled(*action, self.theme.muted_style()));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    // =========================================================================
    // Command Popup Rendering
    // =========================================================================

    /// Renders the slash command menu above the composer.
    fn render_command_popup(&self, frame: &mut Frame, input_area: Rect) {
        let popup = CommandPopup::new(&self.text_input.command_popup_state, &self.theme);

        let (popup_width, popup_height) = popup.preferred_size();
        if popup_height == 0 {
            return;
        }

        let popup_area = calculate_command_popup_area(popup_width, popup_height, input_area);
        frame.render_widget(popup, popup_area);
    }
}

/// Calculates the area for the command menu: directly above the input area,
/// aligned to its left edge and never wider than it.
fn calculate_command_popup_area(popup_width: u16, popup_height: u16, input_area: Rect) -> Rect {
    let width = popup_width.min(input_area.width);
    let height = popup_height.min(input_area.y);

    Rect {
        x: input_area.x,
        y: input_area.y.saturating_sub(height),
        width,
        height,
    }
}
