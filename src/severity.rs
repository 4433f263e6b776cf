use crate::visible;
use crossterm::style::{Color, Stylize};

/// The four kinds of log line, each drawn in a fixed color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Log,
    Error,
    Warn,
    Success,
}

impl Severity {
    pub fn color(self) -> Color {
        match self {
            Severity::Log => Color::White,
            Severity::Error => Color::Red,
            Severity::Warn => Color::Yellow,
            Severity::Success => Color::Green,
        }
    }

    /// Wraps `message` in this severity's color, followed by a reset.
    /// Control characters become spaces so the line occupies a single row.
    pub fn format(self, message: &str) -> String {
        visible::flatten(message)
            .as_ref()
            .with(self.color())
            .to_string()
    }
}
