//! Rendering building blocks for the state container.
//!
//! Reusable components (content children) live in `components`; the
//! renderers for the auxiliary views live in `widgets`.

pub mod components;
pub mod theme;
pub mod widgets;
