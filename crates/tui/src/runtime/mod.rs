//! Runtime support for the demo binary.

pub mod terminal;

pub use terminal::TerminalGuard;
