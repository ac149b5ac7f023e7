//! Centralized constants for the Chameleon workspace.
//!
//! Default attribute values live here so the attribute bag, the widget and the
//! tests agree on them.

// =============================================================================
// Text Defaults
// =============================================================================

pub const DEFAULT_EMPTY_TEXT: &str = "empty";
pub const DEFAULT_EMPTY_SUB_TEXT: &str = "empty content";
pub const DEFAULT_ERROR_TEXT: &str = "error";
pub const DEFAULT_ERROR_SUB_TEXT: &str = "error content";
pub const DEFAULT_LOADING_TEXT: &str = "loading";
pub const DEFAULT_LOADING_SUB_TEXT: &str = "now loading...";
pub const DEFAULT_BUTTON_TEXT: &str = "retry";

// =============================================================================
// Size Defaults (scale-independent points)
// =============================================================================

/// Default size for titles and button labels.
pub const TITLE_TEXT_SIZE: f32 = 16.0;

/// Default size for subtitles.
pub const SUB_TEXT_SIZE: f32 = 14.0;

/// Text at or above this size is rendered bold in the terminal.
pub const EMPHASIS_TEXT_SIZE: f32 = TITLE_TEXT_SIZE;

// =============================================================================
// Built-in Drawables
// =============================================================================

/// Built-in icon for the empty state.
pub const EMPTY_ICON: &str = "┌─────┐\n│     │\n└─────┘";

/// Built-in icon for the error state.
pub const ERROR_ICON: &str = "  ╱╲  \n ╱ !╲ \n╱____╲";

// =============================================================================
// Flags
// =============================================================================

/// Whether a loading message is configured when the attribute is absent.
pub const DEFAULT_HAS_LOADING_MESSAGE: bool = true;

// =============================================================================
// Demo Runtime
// =============================================================================

/// Capacity of the demo's action channel.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// UI tick interval; drives the progress animation.
pub const DEFAULT_UI_TICK_MS: u64 = 100;

/// Ticks a simulated reload stays in the loading state.
pub const DEFAULT_RELOAD_TICKS: u8 = 15;
