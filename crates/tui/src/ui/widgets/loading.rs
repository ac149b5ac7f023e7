//! Progress indicator widget.
//!
//! Draws a single spinner glyph, or a bordered 3x3 box around it when the
//! large indicator is configured.

use chameleon_config::Theme;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::theme::ThemeExt;

/// Render the loading indicator.
///
/// # Arguments
///
/// * `f` - The frame to render to
/// * `area` - The area to render within (1x1 for small, 3x3 for large)
/// * `glyph` - The spinner glyph for the current animation frame
/// * `large` - Whether to draw the bordered large variant
/// * `theme` - The theme for styling
pub fn render_progress(f: &mut Frame, area: Rect, glyph: char, large: bool, theme: &Theme) {
    if area.is_empty() {
        return;
    }

    let mut spinner = Paragraph::new(glyph.to_string())
        .style(theme.title())
        .alignment(Alignment::Center);
    if large {
        spinner = spinner.block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border()),
        );
    }
    f.render_widget(spinner, area);
}
