//! Reusable UI components for the TUI.
//!
//! # Available Components
//!
//! - [`SelectList<T>`]: Generic selectable list with keyboard navigation, usable
//!   as the content child of a [`crate::Chameleon`]

pub mod select_list;

pub use select_list::SelectList;
