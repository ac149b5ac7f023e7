//! Configuration for the Chameleon state container.
//!
//! This crate provides the presentation state enum, color themes, and the
//! attribute bag that styles every non-content state of the widget.

pub mod attrs;
pub mod constants;
pub mod types;

pub use attrs::{
    AttributeSet, ButtonStyle, ChameleonAttr, ConfigError, Drawable, LoadingAttr, SpinnerFrames,
    StateAttr, TextStyle,
};
pub use types::{ChameleonState, ColorTheme, Theme};
