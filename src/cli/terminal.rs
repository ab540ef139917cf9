//! Colour and width of the attached terminal

use owo_colors::{OwoColorize, Style, colors::css};

fn supports_color() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

/// Width of the terminal in columns, or `None` when output is not a terminal.
#[must_use]
pub fn terminal_width() -> Option<u16> {
    terminal_size::terminal_size().map(|(width, _)| width.0)
}

fn paint(text: &str, style: Style) -> String {
    if supports_color() {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}

/// Styles for the messages the form prints
pub trait Colorize {
    /// A record was saved or removed (green)
    fn success(&self) -> String;
    /// Nothing happened, but the user should know why (orange)
    fn warning(&self) -> String;
    /// Field errors (red)
    fn error(&self) -> String;
    /// Headings
    fn strong(&self) -> String;
    /// Hints and notices
    fn dim(&self) -> String;
}

impl<T: AsRef<str> + ?Sized> Colorize for T {
    fn success(&self) -> String {
        paint(self.as_ref(), Style::new().fg::<css::Green>())
    }

    fn warning(&self) -> String {
        paint(self.as_ref(), Style::new().fg::<css::Orange>())
    }

    fn error(&self) -> String {
        paint(self.as_ref(), Style::new().fg::<css::Crimson>())
    }

    fn strong(&self) -> String {
        paint(self.as_ref(), Style::new().bold())
    }

    fn dim(&self) -> String {
        paint(self.as_ref(), Style::new().dimmed())
    }
}
