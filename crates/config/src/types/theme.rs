//! Theme types for the Chameleon widget.
//!
//! Responsibilities:
//! - Define user-selectable color themes (`ColorTheme`).
//! - Define the expanded runtime `Theme` whose colors back the attribute defaults.
//! - Provide conversion from `ColorTheme` to `Theme`.
//!
//! Does NOT handle:
//! - Actual rendering (see the TUI crate).
//! - Per-state text colors (see `attrs::ChameleonAttr`, which only falls back to the theme).
//!
//! Invariants:
//! - `ColorTheme` is the selectable representation; `Theme` is the runtime representation.
//! - `title_text` and `sub_text` are the fallbacks for every unset text color attribute.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// User-selectable color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ColorTheme {
    #[default]
    Default,
    Light,
    Dark,
    HighContrast,
    Monochrome,
}

impl ColorTheme {
    /// All selectable themes, in cycle order.
    pub const ALL: [ColorTheme; 5] = [
        ColorTheme::Default,
        ColorTheme::Light,
        ColorTheme::Dark,
        ColorTheme::HighContrast,
        ColorTheme::Monochrome,
    ];

    /// Human-readable display name for UI surfaces.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::HighContrast => "High Contrast",
            Self::Monochrome => "Monochrome",
        }
    }

    /// Next theme in the cycle (used by the demo "t" key).
    pub fn cycle_next(self) -> Self {
        match self {
            Self::Default => Self::Light,
            Self::Light => Self::Dark,
            Self::Dark => Self::HighContrast,
            Self::HighContrast => Self::Monochrome,
            Self::Monochrome => Self::Default,
        }
    }
}

impl fmt::Display for ColorTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ColorTheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "default" => Ok(Self::Default),
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "high_contrast" => Ok(Self::HighContrast),
            "monochrome" => Ok(Self::Monochrome),
            other => Err(format!("unknown color theme '{other}'")),
        }
    }
}

/// Expanded runtime theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Default color for state titles and button labels.
    pub title_text: Color,
    /// Default color for state subtitles and the empty-state button background.
    pub sub_text: Color,
    pub border: Color,
    pub accent: Color,

    pub highlight_fg: Color,
    pub highlight_bg: Color,

    pub error: Color,
}

impl Theme {
    /// Expand a `ColorTheme` into a full runtime palette.
    pub fn from_color_theme(theme: ColorTheme) -> Self {
        match theme {
            ColorTheme::Default => Self {
                title_text: Color::White,
                sub_text: Color::Gray,
                border: Color::Cyan,
                accent: Color::Yellow,
                highlight_fg: Color::Yellow,
                highlight_bg: Color::DarkGray,
                error: Color::Red,
            },
            ColorTheme::Light => Self {
                title_text: Color::Black,
                sub_text: Color::Gray,
                border: Color::Blue,
                accent: Color::Magenta,
                highlight_fg: Color::Black,
                highlight_bg: Color::Gray,
                error: Color::Red,
            },
            ColorTheme::Dark => Self {
                title_text: Color::White,
                sub_text: Color::Gray,
                border: Color::Indexed(110), // soft blue/cyan
                accent: Color::Indexed(214), // orange-ish
                highlight_fg: Color::White,
                highlight_bg: Color::Indexed(236),
                error: Color::Red,
            },
            ColorTheme::HighContrast => Self {
                title_text: Color::White,
                sub_text: Color::Gray,
                border: Color::White,
                accent: Color::Yellow,
                highlight_fg: Color::White,
                highlight_bg: Color::Blue,
                error: Color::Red,
            },
            ColorTheme::Monochrome => Self {
                title_text: Color::White,
                sub_text: Color::Indexed(245),
                border: Color::Indexed(250),
                accent: Color::Indexed(255),
                highlight_fg: Color::Black,
                highlight_bg: Color::White,
                error: Color::Indexed(255),
            },
        }
    }
}

impl From<ColorTheme> for Theme {
    fn from(value: ColorTheme) -> Self {
        Self::from_color_theme(value)
    }
}

impl Default for Theme {
    fn default() -> Self {
        ColorTheme::Default.into()
    }
}
