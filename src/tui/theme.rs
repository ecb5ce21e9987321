//! Centralized theme and styling.

use ratatui::style::{Color, Modifier, Style};

use crate::core::Phase;

/// Application theme with consistent colors and styles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Primary foreground color.
    pub fg: Color,
    /// Accent/highlight color.
    pub accent: Color,
    /// Warning color (yellow).
    pub warning: Color,
    /// Muted/secondary text color.
    pub muted: Color,
    /// Border color.
    pub border: Color,
    /// Gauge and clock color during a work phase.
    pub focus: Color,
    /// Gauge and clock color during a break.
    pub rest: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            fg: Color::White,
            accent: Color::Cyan,
            warning: Color::Yellow,
            muted: Color::DarkGray,
            border: Color::Gray,
            focus: Color::LightRed,
            rest: Color::Green,
        }
    }
}

impl Theme {
    /// Style for the header/title.
    #[must_use]
    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn normal_style(&self) -> Style {
        Style::default().fg(self.fg)
    }

    #[must_use]
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    #[must_use]
    pub fn warning_style(&self) -> Style {
        Style::default().fg(self.warning)
    }

    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Style for highlighted/selected items.
    #[must_use]
    pub fn highlight_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn scrollbar_thumb_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    #[must_use]
    pub fn scrollbar_track_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Style for placeholder text (visible on both light and dark backgrounds).
    #[must_use]
    pub fn placeholder_style(&self) -> Style {
        Style::default().fg(Color::Gray).add_modifier(Modifier::DIM)
    }

    /// Clock and gauge color for the current timer phase, dimmed while paused.
    #[must_use]
    pub fn phase_style(&self, phase: Phase, paused: bool) -> Style {
        let color = match phase {
            Phase::Work => self.focus,
            Phase::Break => self.rest,
        };
        let style = Style::default().fg(color).add_modifier(Modifier::BOLD);
        if paused {
            style.add_modifier(Modifier::DIM)
        } else {
            style
        }
    }

    /// Style of the text selected in the composer (the active placeholder).
    #[must_use]
    pub fn selection_style(&self) -> Style {
        Style::default().fg(Color::Black).bg(self.accent)
    }
}
