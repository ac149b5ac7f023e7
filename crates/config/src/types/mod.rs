//! Shared type definitions for the Chameleon widget.
//!
//! Responsibilities:
//! - Define the presentation state enum shared by the attribute bag and the widget.
//! - Define color themes and the runtime palette.
//!
//! Does NOT handle:
//! - Attribute parsing (see `attrs` module).
//! - Rendering (see the TUI crate).

mod state;
mod theme;

pub use state::ChameleonState;
pub use theme::{ColorTheme, Theme};
