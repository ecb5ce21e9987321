//! Command templates, placeholder spans and command-line splitting.
//!
//! All offsets here are character offsets (not bytes) because that is how
//! `tui-textarea` addresses cursor columns.

/// Leading character that turns composer text into a command invocation.
pub const COMMAND_PREFIX: char = '/';

/// A half-open `[start, end)` range of character offsets within one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of characters covered.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Extracts the covered text from `line`.
    #[must_use]
    pub fn slice<'a>(&self, line: &'a str) -> &'a str {
        let start = char_to_byte(line, self.start);
        let end = char_to_byte(line, self.end);
        &line[start..end]
    }
}

fn char_to_byte(line: &str, char_idx: usize) -> usize {
    line.char_indices()
        .nth(char_idx)
        .map_or(line.len(), |(byte, _)| byte)
}

/// Returns `true` if the text starts with [`COMMAND_PREFIX`].
#[must_use]
pub fn is_command(text: &str) -> bool {
    text.starts_with(COMMAND_PREFIX)
}

/// Locates the first placeholder of a template: the first `[` and the `]`
/// that closes it, both inclusive.
///
/// Returns `None` when the template has no complete placeholder.
///
/// ```
/// use pomochat::core::template::{Span, first_placeholder};
///
/// assert_eq!(first_placeholder("/pomodoro [work] [break]"), Some(Span::new(10, 16)));
/// assert_eq!(first_placeholder("/tasks"), None);
/// ```
#[must_use]
pub fn first_placeholder(template: &str) -> Option<Span> {
    let mut open = None;
    for (idx, ch) in template.chars().enumerate() {
        match ch {
            '[' if open.is_none() => open = Some(idx),
            ']' => {
                if let Some(start) = open {
                    return Some(Span::new(start, idx + 1));
                }
            }
            _ => {}
        }
    }
    None
}

/// Spans of every whitespace-delimited token of `line`, in order.
fn token_spans(line: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut start = None;
    let mut count = 0;
    for (idx, ch) in line.chars().enumerate() {
        if ch.is_whitespace() {
            if let Some(s) = start.take() {
                spans.push(Span::new(s, idx));
            }
        } else if start.is_none() {
            start = Some(idx);
        }
        count = idx + 1;
    }
    if let Some(s) = start {
        spans.push(Span::new(s, count));
    }
    spans
}

/// Spans of the argument tokens of a command line, skipping the leading
/// command token.
///
/// Tokens are located by position rather than by searching for their text,
/// so repeated arguments (`/pomodoro [5] [5]`) each get their own span.
#[must_use]
pub fn argument_spans(line: &str) -> Vec<Span> {
    token_spans(line).into_iter().skip(1).collect()
}

/// Splits a command line into `(command, args)`.
///
/// The command keeps its prefix (`"/pomodoro"`). Returns `None` for text that
/// is not a command.
///
/// ```
/// use pomochat::core::template::split_command;
///
/// assert_eq!(split_command("/pomodoro 45 10"), Some(("/pomodoro", vec!["45", "10"])));
/// assert_eq!(split_command("hello"), None);
/// ```
#[must_use]
pub fn split_command(text: &str) -> Option<(&str, Vec<&str>)> {
    if !is_command(text) {
        return None;
    }
    let mut parts = text.split_whitespace();
    let command = parts.next()?;
    Some((command, parts.collect()))
}
