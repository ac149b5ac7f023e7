//! Message widgets for the empty and error presentations.
//!
//! Provides the drawable (multi-line glyph icon) and single-line label
//! renderers used by the state container.

use chameleon_config::Drawable;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::Paragraph,
};

/// Cells of horizontal padding on each side of a label.
pub const LABEL_PADDING: u16 = 1;

/// Shorten `text` to `width` columns, ending with an ellipsis when cut.
pub fn ellipsize(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut shortened: String = text.chars().take(width - 1).collect();
    shortened.push('…');
    shortened
}

/// Render a drawable, one glyph row per line.
pub fn render_drawable(f: &mut Frame, area: Rect, drawable: &Drawable, style: Style) {
    if area.is_empty() {
        return;
    }
    let lines: Vec<Line> = drawable
        .lines()
        .iter()
        .map(|line| Line::from(line.as_str()))
        .collect();
    f.render_widget(Paragraph::new(lines).style(style), area);
}

/// Render a centered single-line label, ellipsized to fit.
pub fn render_label(f: &mut Frame, area: Rect, text: &str, style: Style) {
    if area.is_empty() {
        return;
    }
    let inner = area.width.saturating_sub(LABEL_PADDING * 2);
    let label = Paragraph::new(ellipsize(text, inner as usize))
        .style(style)
        .alignment(Alignment::Center);
    let padded = Rect::new(area.x + LABEL_PADDING.min(area.width), area.y, inner, 1);
    f.render_widget(label, padded);
}
