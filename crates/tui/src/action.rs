//! Actions driving the demo application.
//!
//! Input handlers and container listeners produce actions; `App::update`
//! applies them one at a time.

use chameleon_config::ChameleonState;
use crossterm::event::{KeyEvent, MouseEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// A key press from the terminal.
    Input(KeyEvent),
    /// A mouse event from the terminal.
    Mouse(MouseEvent),
    /// The terminal was resized.
    Resize(u16, u16),
    /// Leave the application.
    Quit,
    /// Switch the container to a state chosen from the menu.
    ShowState(ChameleonState),
    /// Pretend to fetch data: show LOADING, then CONTENT after a delay.
    Reload,
    /// Advance animations and pending reloads by one UI tick.
    Tick,
    /// Switch to the next color theme.
    CycleTheme,
    /// The action button was pressed while `state` was shown.
    ButtonPressed(ChameleonState),
    /// The container moved from `old` to `new`.
    StateChanged {
        new: ChameleonState,
        old: ChameleonState,
    },
}
