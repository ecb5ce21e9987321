//! Pomodoro rendering: the full timer view and the minimized header clock.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Gauge, Paragraph},
};

use crate::app::App;
use crate::core::format_seconds;

const TIMER_VIEW_CONSTRAINTS: [Constraint; 6] = [
    Constraint::Fill(1),   // Top padding
    Constraint::Length(1), // Phase label
    Constraint::Length(1), // Clock
    Constraint::Length(1), // Gauge
    Constraint::Length(1), // Key hints
    Constraint::Fill(1),   // Bottom padding
];

impl App {
    /// Renders the maximized timer in place of the message list.
    pub(crate) fn render_timer_view(&self, frame: &mut Frame, area: Rect) {
        let pomodoro = &self.store.pomodoro;
        let style = self.theme.phase_style(pomodoro.phase, pomodoro.paused);

        let block = Block::bordered()
            .title(" Pomodoro ")
            .title_style(self.theme.header_style())
            .border_style(self.theme.border_style());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::vertical(TIMER_VIEW_CONSTRAINTS).split(inner);

        let mut label = vec![Span::styled(pomodoro.phase.label(), style)];
        if pomodoro.paused {
            label.push(Span::styled(" (paused)", self.theme.muted_style()));
        }
        if pomodoro.completed_sessions > 0 {
            label.push(Span::styled(
                format!("  sessions: {}", pomodoro.completed_sessions),
                self.theme.muted_style(),
            ));
        }
        frame.render_widget(
            Paragraph::new(Line::from(label)).alignment(Alignment::Center),
            rows[1],
        );

        frame.render_widget(
            Paragraph::new(Span::styled(
                format_seconds(pomodoro.remaining_seconds),
                style,
            ))
            .alignment(Alignment::Center),
            rows[2],
        );

        let percentage = pomodoro.percentage();
        let gauge = Gauge::default()
            .gauge_style(style)
            .ratio((percentage / 100.0).clamp(0.0, 1.0))
            .label(format!("{percentage:.0}%"));
        frame.render_widget(gauge, rows[3]);

        let play = if pomodoro.paused { "Resume" } else { "Pause" };
        let hints = Line::from(vec![
            Span::styled("[Ctrl+P] ", self.theme.highlight_style()),
            Span::styled(format!("{play}  "), self.theme.muted_style()),
            Span::styled("[Ctrl+X] ", self.theme.highlight_style()),
            Span::styled("Stop  ", self.theme.muted_style()),
            Span::styled("[Ctrl+N] ", self.theme.highlight_style()),
            Span::styled("Minimize", self.theme.muted_style()),
        ]);
        frame.render_widget(Paragraph::new(hints).alignment(Alignment::Center), rows[4]);
    }

    /// Renders the minimized clock, right-aligned inside the header area.
    pub(crate) fn render_header_clock(&self, frame: &mut Frame, header: Rect) {
        let pomodoro = &self.store.pomodoro;
        let style = self.theme.phase_style(pomodoro.phase, pomodoro.paused);
        let clock = Line::from(vec![
            Span::styled(format!("{} ", pomodoro.phase.label()), self.theme.muted_style()),
            Span::styled(format_seconds(pomodoro.remaining_seconds), style),
            Span::raw(" "),
        ]);
        frame.render_widget(Paragraph::new(clock).alignment(Alignment::Right), header);
    }
}
