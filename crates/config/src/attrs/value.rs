//! Typed attribute values and their parsers.
//!
//! Responsibilities:
//! - Parse raw attribute text into colors, sizes, flags, drawables and spinner frames.
//!
//! Does NOT handle:
//! - Deciding defaults for absent keys (see `bag`).
//!
//! Invariants:
//! - Parsers never panic; malformed input yields `ConfigError::InvalidValue` naming the key.
//! - `Drawable` always has at least one line; `SpinnerFrames` at least one frame.

use ratatui::style::Color;
use std::str::FromStr;

use super::error::ConfigError;

/// A text glyph used where an image would be shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drawable {
    lines: Vec<String>,
}

impl Drawable {
    /// Build a drawable from text. Lines are split on newlines or on a literal `\n`.
    pub fn from_text(text: &str) -> Self {
        let normalized = text.replace("\\n", "\n");
        let mut lines: Vec<String> = normalized.lines().map(str::to_string).collect();
        if lines.is_empty() {
            lines.push(String::new());
        }
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Width in terminal cells of the widest line.
    pub fn width(&self) -> u16 {
        self.lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0)
            .min(u16::MAX as usize) as u16
    }

    pub fn height(&self) -> u16 {
        self.lines.len().min(u16::MAX as usize) as u16
    }
}

/// Animation frames for the progress indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpinnerFrames {
    frames: Vec<char>,
}

impl SpinnerFrames {
    /// Every non-whitespace character of `text` becomes one frame.
    pub fn parse(key: &str, text: &str) -> Result<Self, ConfigError> {
        let frames: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();
        if frames.is_empty() {
            return Err(ConfigError::invalid(key, "spinner needs at least one frame"));
        }
        Ok(Self { frames })
    }

    pub fn frames(&self) -> &[char] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Frame for an animation tick; cycles through all frames.
    pub fn frame(&self, tick: usize) -> char {
        self.frames[tick % self.frames.len()]
    }
}

/// Parse a color name, indexed color or hex color.
///
/// Eight-digit hex colors are read as `#aarrggbb` and the alpha channel is dropped.
pub fn parse_color(key: &str, raw: &str) -> Result<Color, ConfigError> {
    let raw = raw.trim();
    let candidate = match raw.strip_prefix('#') {
        Some(hex) if hex.len() == 8 && hex.is_ascii() => format!("#{}", &hex[2..]),
        _ => raw.to_string(),
    };
    Color::from_str(&candidate)
        .map_err(|_| ConfigError::invalid(key, format!("'{raw}' is not a color")))
}

/// Parse a text size with an optional `sp`, `dp`, `px` or `pt` suffix.
pub fn parse_size(key: &str, raw: &str) -> Result<f32, ConfigError> {
    let trimmed = raw.trim();
    let number = ["sp", "dp", "px", "pt"]
        .iter()
        .find_map(|unit| trimmed.strip_suffix(unit))
        .unwrap_or(trimmed)
        .trim();

    let size: f32 = number
        .parse()
        .map_err(|_| ConfigError::invalid(key, format!("'{raw}' is not a size")))?;
    if !size.is_finite() || size < 0.0 {
        return Err(ConfigError::invalid(
            key,
            format!("size must be a non-negative number, got '{raw}'"),
        ));
    }
    Ok(size)
}

/// Parse a boolean flag.
pub fn parse_bool(key: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::invalid(key, format!("'{raw}' is not a boolean"))),
    }
}
