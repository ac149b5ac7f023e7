//! Content views that can be hosted by the state container.
//!
//! Responsibilities:
//! - Define the `ChildView` seam the container renders through.
//! - Define the `ListContent` capability that marks a child as list-like.
//! - Provide `TextView`, a stock child without list semantics.
//!
//! Does NOT handle:
//! - Selection or scrolling (see `ui::components::SelectList`).

use chameleon_config::Theme;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    widgets::{Paragraph, Wrap},
};

use crate::ui::theme::ThemeExt;

/// A view the container can host as its content child.
pub trait ChildView: std::fmt::Debug {
    /// Draw the view into `area`.
    fn draw(&mut self, frame: &mut Frame, area: Rect, theme: &Theme);

    /// The list capability of this view, if it has one.
    fn as_list(&self) -> Option<&dyn ListContent> {
        None
    }

    /// Mutable access to the list capability of this view, if it has one.
    fn as_list_mut(&mut self) -> Option<&mut dyn ListContent> {
        None
    }
}

/// List semantics required of the container's content child.
pub trait ListContent {
    /// Number of items the list currently holds.
    fn item_count(&self) -> usize;

    /// Handle a navigation key. Returns `true` when the key was consumed.
    fn handle_key(&mut self, _key: KeyEvent) -> bool {
        false
    }
}

/// A plain block of text. Useful as a child, but not list-like.
#[derive(Debug, Clone, Default)]
pub struct TextView {
    text: String,
}

impl TextView {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl ChildView for TextView {
    fn draw(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let paragraph = Paragraph::new(self.text.as_str())
            .style(theme.text())
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }
}
