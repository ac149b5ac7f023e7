//! Generic selectable list, the stock content child of the state container.
//!
//! # Example
//!
//! ```
//! use chameleon_tui::{Chameleon, ui::components::SelectList};
//!
//! let mut chameleon = Chameleon::default();
//! chameleon
//!     .attach_content(Box::new(SelectList::new(vec!["first", "second"])))
//!     .unwrap();
//! assert!(!chameleon.has_no_content());
//! ```

use chameleon_config::Theme;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::Modifier,
    text::Line,
    widgets::{Block, List, ListItem, ListState},
};
use std::fmt::{Debug, Display};

use crate::chameleon::{ChildView, ListContent};
use crate::ui::theme::ThemeExt;

/// A selectable list with keyboard navigation and scrolling.
#[derive(Debug, Clone)]
pub struct SelectList<T> {
    items: Vec<T>,
    selected: usize,
    /// First visible item.
    scroll_offset: usize,
    /// Rows available in the last drawn area.
    visible_count: usize,
    block: Option<Block<'static>>,
    formatter: Option<fn(&T) -> String>,
}

impl<T: Display> SelectList<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            selected: 0,
            scroll_offset: 0,
            visible_count: 10,
            block: None,
            formatter: None,
        }
    }

    /// Create a list that formats items with `formatter` instead of `Display`.
    pub fn with_formatter(items: Vec<T>, formatter: fn(&T) -> String) -> Self {
        Self {
            formatter: Some(formatter),
            ..Self::new(items)
        }
    }

    /// Set the block (borders/title) for the list.
    pub fn block(mut self, block: Block<'static>) -> Self {
        self.block = Some(block);
        self
    }

    pub fn next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.selected = (self.selected + 1).min(self.items.len() - 1);
        self.adjust_scroll();
    }

    pub fn prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
        self.adjust_scroll();
    }

    pub fn first(&mut self) {
        self.selected = 0;
        self.scroll_offset = 0;
    }

    pub fn last(&mut self) {
        self.selected = self.items.len().saturating_sub(1);
        self.adjust_scroll();
    }

    pub fn page_down(&mut self) {
        let page_size = self.visible_count.saturating_sub(1);
        self.selected = (self.selected + page_size).min(self.items.len().saturating_sub(1));
        self.adjust_scroll();
    }

    pub fn page_up(&mut self) {
        let page_size = self.visible_count.saturating_sub(1);
        self.selected = self.selected.saturating_sub(page_size);
        self.adjust_scroll();
    }

    /// Keep the selected item inside the visible window.
    fn adjust_scroll(&mut self) {
        let visible = self.visible_count.max(1);
        if self.selected < self.scroll_offset {
            self.scroll_offset = self.selected;
        } else if self.selected >= self.scroll_offset + visible {
            self.scroll_offset = self.selected + 1 - visible;
        }
    }

    pub fn selected(&self) -> Option<&T> {
        self.items.get(self.selected)
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn set_selected(&mut self, index: usize) {
        if index < self.items.len() {
            self.selected = index;
            self.adjust_scroll();
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Replace all items, clamping the selection.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.selected = self.selected.min(self.items.len().saturating_sub(1));
        self.scroll_offset = self.scroll_offset.min(self.selected);
        self.adjust_scroll();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn format_item(&self, item: &T) -> String {
        match self.formatter {
            Some(f) => f(item),
            None => item.to_string(),
        }
    }

    /// Render the list without touching its scroll window.
    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let visible_items: Vec<ListItem> = self
            .items
            .iter()
            .enumerate()
            .skip(self.scroll_offset)
            .take(self.visible_count)
            .map(|(index, item)| {
                let is_selected = index == self.selected;
                let style = if is_selected {
                    theme.highlight().add_modifier(Modifier::BOLD)
                } else {
                    theme.text()
                };
                let prefix = if is_selected { "> " } else { "  " };
                let text = format!("{prefix}{}", self.format_item(item));
                ListItem::new(Line::from(text)).style(style)
            })
            .collect();

        let mut list = List::new(visible_items);
        if let Some(block) = &self.block {
            list = list.block(block.clone().border_style(theme.border()));
        }
        frame.render_widget(list, area);
    }

    /// Get a ListState for use with ratatui's StatefulWidget.
    pub fn state(&self) -> ListState {
        let mut state = ListState::default();
        if !self.items.is_empty() {
            state.select(Some(self.selected));
        }
        state
    }
}

impl<T: Display> Default for SelectList<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T: Display + Debug> ChildView for SelectList<T> {
    fn draw(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let rows = match &self.block {
            Some(block) => block.inner(area).height,
            None => area.height,
        };
        self.visible_count = usize::from(rows).max(1);
        self.adjust_scroll();
        self.render(frame, area, theme);
    }

    fn as_list(&self) -> Option<&dyn ListContent> {
        Some(self)
    }

    fn as_list_mut(&mut self) -> Option<&mut dyn ListContent> {
        Some(self)
    }
}

impl<T: Display> ListContent for SelectList<T> {
    fn item_count(&self) -> usize {
        self.items.len()
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.next(),
            KeyCode::Up | KeyCode::Char('k') => self.prev(),
            KeyCode::PageDown => self.page_down(),
            KeyCode::PageUp => self.page_up(),
            KeyCode::Home | KeyCode::Char('g') => self.first(),
            KeyCode::End | KeyCode::Char('G') => self.last(),
            _ => return false,
        }
        true
    }
}
