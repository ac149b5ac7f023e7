//! Chameleon TUI library.
//!
//! A ratatui container that hosts one list view and swaps it for an empty,
//! error, loading or blank presentation, plus the demo application built on
//! top of it.
//!
//! # Example
//!
//! ```rust
//! use chameleon_tui::{Chameleon, ui::components::SelectList};
//! use chameleon_config::ChameleonState;
//!
//! let mut chameleon = Chameleon::default();
//! chameleon
//!     .attach_content(Box::new(SelectList::<String>::new(Vec::new())))
//!     .unwrap();
//! chameleon.show_state(ChameleonState::Empty);
//! assert!(chameleon.has_no_content());
//! ```

pub mod action;
pub mod app;
pub mod chameleon;
pub mod cli;
pub mod runtime;
pub mod ui;

// Re-export commonly used types at the crate root
pub use action::Action;
pub use app::{App, FOOTER_HEIGHT};
pub use chameleon::{
    Chameleon, ChameleonError, ChildView, InvalidChildReason, ListContent, StateButton,
    StateVisibility, TextView, Visibility,
};
