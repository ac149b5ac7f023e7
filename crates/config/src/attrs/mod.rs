//! Attribute loading for the Chameleon widget.
//!
//! Responsibilities:
//! - Collect raw attributes from key/value pairs or JSON (`AttributeSet`).
//! - Parse typed values (colors, sizes, flags, drawables, spinner frames).
//! - Produce the immutable, defaults-filled `ChameleonAttr` bag.
//!
//! Does NOT handle:
//! - Applying styles to on-screen views (see the TUI crate).
//! - Watching attribute files for changes; a bag is read exactly once.
//!
//! Invariants / Assumptions:
//! - Absent attributes fall back to defaults; absence is never an error.
//! - Unknown keys are logged at warn level and otherwise ignored.
//! - An unrecognized `defaultState` maps to `Content` rather than failing.

mod bag;
mod error;
mod set;
mod value;

pub use bag::{ButtonStyle, ChameleonAttr, LoadingAttr, StateAttr, TextStyle, keys};
pub use error::ConfigError;
pub use set::AttributeSet;
pub use value::{Drawable, SpinnerFrames, parse_bool, parse_color, parse_size};
