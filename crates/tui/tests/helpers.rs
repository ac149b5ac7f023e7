//! Test helpers for the state container and demo app.
//!
//! Provides key and mouse event constructors, sample content children and
//! buffer inspection for `TestBackend` renders.

#![allow(dead_code)]

use chameleon_config::{ChameleonAttr, Theme};
use chameleon_tui::{Chameleon, ui::components::SelectList};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, layout::Rect};

/// Create a character key event.
pub fn key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

/// Create an Enter key event.
pub fn enter_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)
}

/// Create a Down arrow key event.
pub fn down_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Down, KeyModifiers::NONE)
}

/// Create a Ctrl+char key event.
pub fn ctrl_key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

/// Create a left mouse button press at a cell.
pub fn left_click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

/// A list child with `count` numbered items.
pub fn sample_list(count: usize) -> Box<SelectList<String>> {
    Box::new(SelectList::new(
        (1..=count).map(|n| format!("Item {n}")).collect(),
    ))
}

/// A container with both message buttons enabled and a list attached.
pub fn chameleon_with_buttons(count: usize) -> Chameleon {
    let mut attr = ChameleonAttr::default();
    attr.empty.use_button = true;
    attr.error.use_button = true;
    let mut chameleon = Chameleon::new(attr);
    chameleon
        .attach_content(sample_list(count))
        .expect("first list child is accepted");
    chameleon
}

/// Render the container into a fresh `TestBackend` and return the buffer.
pub fn render(chameleon: &mut Chameleon, width: u16, height: u16) -> Buffer {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("test terminal");
    let theme = Theme::default();
    terminal
        .draw(|f| chameleon.render(f, f.area(), &theme))
        .expect("draw");
    terminal.backend().buffer().clone()
}

/// All symbols of a buffer, row-major.
pub fn buffer_text(buffer: &Buffer) -> String {
    buffer.content.iter().map(|c| c.symbol()).collect()
}

/// The symbols of one row of a buffer.
pub fn row_text(buffer: &Buffer, row: u16) -> String {
    let area: Rect = buffer.area;
    (area.x..area.right())
        .map(|x| buffer[(x, row)].symbol())
        .collect()
}
