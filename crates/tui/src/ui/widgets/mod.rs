//! Shared UI widgets used by the state container.
//!
//! This module provides the renderers for the auxiliary views: the progress
//! indicator, the message icon and labels, and the action button.

pub mod button;
pub mod loading;
pub mod message;

pub use button::render_button;
pub use loading::render_progress;
pub use message::{ellipsize, render_drawable, render_label};
