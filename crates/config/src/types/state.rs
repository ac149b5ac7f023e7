//! Presentation states of the Chameleon container.
//!
//! Invariants:
//! - Exactly one state is current at any time; any state may follow any other.
//! - The integer codes are 1 = Loading, 2 = Error, 3 = Empty, 4 = None.
//!   Every other code maps to `Content`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the five mutually exclusive presentation modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ChameleonState {
    Loading,
    Error,
    Empty,
    None,
    #[default]
    Content,
}

impl ChameleonState {
    /// Every state, in declaration order.
    pub const ALL: [ChameleonState; 5] = [
        ChameleonState::Loading,
        ChameleonState::Error,
        ChameleonState::Empty,
        ChameleonState::None,
        ChameleonState::Content,
    ];

    /// Map an attribute code to a state. Unrecognized codes yield `Content`.
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => Self::Loading,
            2 => Self::Error,
            3 => Self::Empty,
            4 => Self::None,
            _ => Self::Content,
        }
    }

    /// Parse a `defaultState` attribute value.
    ///
    /// Accepts the integer codes or the state names (case-insensitive).
    /// Anything unrecognized yields `Content`.
    pub fn from_attribute(raw: &str) -> Self {
        let raw = raw.trim();
        if let Ok(code) = raw.parse::<i64>() {
            return Self::from_code(code);
        }
        match raw.to_ascii_lowercase().as_str() {
            "loading" => Self::Loading,
            "error" => Self::Error,
            "empty" => Self::Empty,
            "none" => Self::None,
            _ => Self::Content,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Loading => "LOADING",
            Self::Error => "ERROR",
            Self::Empty => "EMPTY",
            Self::None => "NONE",
            Self::Content => "CONTENT",
        }
    }
}

impl fmt::Display for ChameleonState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
