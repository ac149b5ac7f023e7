//! TUI-specific theme helpers and style builders.
//!
//! This module extends `chameleon_config::Theme` with helpers for building
//! ratatui `Style` objects, and maps attribute text sizes onto terminal
//! emphasis.

use chameleon_config::{Theme, constants::EMPHASIS_TEXT_SIZE};
use ratatui::style::{Color, Modifier, Style};

/// Spinner characters for the built-in loading indicator.
pub const SPINNER_CHARS: [char; 8] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧'];

/// Get the spinner character for a given animation frame.
///
/// # Example
///
/// ```
/// use chameleon_tui::ui::theme::spinner_char;
///
/// assert_eq!(spinner_char(0), spinner_char(8));
/// ```
pub fn spinner_char(frame: usize) -> char {
    SPINNER_CHARS[frame % SPINNER_CHARS.len()]
}

/// Trait extending Theme with helper methods for creating styled widgets.
pub trait ThemeExt {
    /// Get the base text style.
    fn text(&self) -> Style;
    /// Get dimmed text style.
    fn text_dim(&self) -> Style;
    /// Get title style (accent + bold).
    fn title(&self) -> Style;
    /// Get border style.
    fn border(&self) -> Style;
    /// Get highlight/selection style.
    fn highlight(&self) -> Style;
    /// Get error style.
    fn error(&self) -> Style;
}

impl ThemeExt for Theme {
    fn text(&self) -> Style {
        Style::default().fg(self.title_text)
    }

    fn text_dim(&self) -> Style {
        Style::default().fg(self.sub_text)
    }

    fn title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    fn highlight(&self) -> Style {
        Style::default().fg(self.highlight_fg).bg(self.highlight_bg)
    }

    fn error(&self) -> Style {
        Style::default().fg(self.error)
    }
}

/// Helper functions for common style patterns.
pub mod helpers {
    use super::*;

    /// Style for text of the given color and attribute size.
    ///
    /// Terminals have one font size, so large text is shown bold instead.
    pub fn sized_text(color: Color, size: f32) -> Style {
        let style = Style::default().fg(color);
        if size >= EMPHASIS_TEXT_SIZE {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }

    /// Style for a filled button.
    pub fn button_style(text_color: Color, background: Color, text_size: f32) -> Style {
        sized_text(text_color, text_size).bg(background)
    }
}
