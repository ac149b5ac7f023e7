//! Filled action button widget.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    widgets::Paragraph,
};

use crate::chameleon::StateButton;
use crate::ui::theme::helpers::button_style;

use super::message::ellipsize;

/// Render `button` filling `area` with its background color.
pub fn render_button(f: &mut Frame, area: Rect, button: &StateButton) {
    if area.is_empty() {
        return;
    }
    let style = button_style(button.text_color(), button.background(), button.text_size());
    let label = Paragraph::new(ellipsize(button.text(), area.width as usize))
        .style(style)
        .alignment(Alignment::Center);
    f.render_widget(label, area);
}
