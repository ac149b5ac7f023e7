//! The immutable attribute bag.
//!
//! Responsibilities:
//! - Read every recognized attribute once and fill absent ones with defaults.
//! - Expose the result as plain data grouped per presentation state.
//!
//! Does NOT handle:
//! - Applying styles to views (see the `chameleon` module in the TUI crate).
//!
//! Invariants:
//! - A bag is never mutated after construction.
//! - Without an attribute set every field holds its documented default.
//! - Unknown keys are ignored (and logged); malformed known keys are errors.

use ratatui::style::Color;

use super::error::ConfigError;
use super::set::AttributeSet;
use super::value::{Drawable, SpinnerFrames, parse_bool, parse_color, parse_size};
use crate::constants::{
    DEFAULT_BUTTON_TEXT, DEFAULT_EMPTY_SUB_TEXT, DEFAULT_EMPTY_TEXT, DEFAULT_ERROR_SUB_TEXT,
    DEFAULT_ERROR_TEXT, DEFAULT_HAS_LOADING_MESSAGE, DEFAULT_LOADING_SUB_TEXT,
    DEFAULT_LOADING_TEXT, EMPTY_ICON, ERROR_ICON, SUB_TEXT_SIZE, TITLE_TEXT_SIZE,
};
use crate::types::{ChameleonState, Theme};

/// Recognized attribute names.
pub mod keys {
    pub const EMPTY_TEXT: &str = "emptyText";
    pub const EMPTY_TEXT_COLOR: &str = "emptyTextColor";
    pub const EMPTY_TEXT_SIZE: &str = "emptyTextSize";
    pub const EMPTY_SUB_TEXT: &str = "emptySubText";
    pub const EMPTY_SUB_TEXT_COLOR: &str = "emptySubTextColor";
    pub const EMPTY_SUB_TEXT_SIZE: &str = "emptySubTextSize";
    pub const EMPTY_DRAWABLE: &str = "emptyDrawable";
    pub const EMPTY_BUTTON_TEXT: &str = "emptyButtonText";
    pub const EMPTY_BUTTON_TEXT_COLOR: &str = "emptyButtonTextColor";
    pub const EMPTY_BUTTON_TEXT_SIZE: &str = "emptyButtonTextSize";
    pub const EMPTY_BUTTON_BACKGROUND_COLOR: &str = "emptyButtonBackgroundColor";
    pub const USE_EMPTY_BUTTON: &str = "useEmptyButton";

    pub const ERROR_TEXT: &str = "errorText";
    pub const ERROR_TEXT_COLOR: &str = "errorTextColor";
    pub const ERROR_TEXT_SIZE: &str = "errorTextSize";
    pub const ERROR_SUB_TEXT: &str = "errorSubText";
    pub const ERROR_SUB_TEXT_COLOR: &str = "errorSubTextColor";
    pub const ERROR_SUB_TEXT_SIZE: &str = "errorSubTextSize";
    pub const ERROR_DRAWABLE: &str = "errorDrawable";
    pub const ERROR_BUTTON_TEXT: &str = "errorButtonText";
    pub const ERROR_BUTTON_TEXT_COLOR: &str = "errorButtonTextColor";
    pub const ERROR_BUTTON_TEXT_SIZE: &str = "errorButtonTextSize";
    pub const ERROR_BUTTON_BACKGROUND_COLOR: &str = "errorButtonBackgroundColor";
    pub const USE_ERROR_BUTTON: &str = "useErrorButton";

    pub const PROGRESS_DRAWABLE: &str = "progressDrawable";
    pub const IS_LARGE_PROGRESS: &str = "isLargeProgress";
    pub const HAS_LOADING_MESSAGE: &str = "hasLoadingMessage";

    pub const LOADING_TEXT: &str = "loadingText";
    pub const LOADING_TEXT_COLOR: &str = "loadingTextColor";
    pub const LOADING_TEXT_SIZE: &str = "loadingTextSize";
    pub const LOADING_SUB_TEXT: &str = "loadingSubText";
    pub const LOADING_SUB_TEXT_COLOR: &str = "loadingSubTextColor";
    pub const LOADING_SUB_TEXT_SIZE: &str = "loadingSubTextSize";

    pub const DEFAULT_STATE: &str = "defaultState";

    /// Every recognized key.
    pub const ALL: &[&str] = &[
        EMPTY_TEXT,
        EMPTY_TEXT_COLOR,
        EMPTY_TEXT_SIZE,
        EMPTY_SUB_TEXT,
        EMPTY_SUB_TEXT_COLOR,
        EMPTY_SUB_TEXT_SIZE,
        EMPTY_DRAWABLE,
        EMPTY_BUTTON_TEXT,
        EMPTY_BUTTON_TEXT_COLOR,
        EMPTY_BUTTON_TEXT_SIZE,
        EMPTY_BUTTON_BACKGROUND_COLOR,
        USE_EMPTY_BUTTON,
        ERROR_TEXT,
        ERROR_TEXT_COLOR,
        ERROR_TEXT_SIZE,
        ERROR_SUB_TEXT,
        ERROR_SUB_TEXT_COLOR,
        ERROR_SUB_TEXT_SIZE,
        ERROR_DRAWABLE,
        ERROR_BUTTON_TEXT,
        ERROR_BUTTON_TEXT_COLOR,
        ERROR_BUTTON_TEXT_SIZE,
        ERROR_BUTTON_BACKGROUND_COLOR,
        USE_ERROR_BUTTON,
        PROGRESS_DRAWABLE,
        IS_LARGE_PROGRESS,
        HAS_LOADING_MESSAGE,
        LOADING_TEXT,
        LOADING_TEXT_COLOR,
        LOADING_TEXT_SIZE,
        LOADING_SUB_TEXT,
        LOADING_SUB_TEXT_COLOR,
        LOADING_SUB_TEXT_SIZE,
        DEFAULT_STATE,
    ];
}

/// Text content with its color and size.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub text: String,
    pub color: Color,
    pub size: f32,
}

/// Label and colors of the action button.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonStyle {
    pub text: String,
    pub text_color: Color,
    pub text_size: f32,
    pub background: Color,
}

/// Everything shown for the empty or the error state.
#[derive(Debug, Clone, PartialEq)]
pub struct StateAttr {
    pub title: TextStyle,
    pub sub_title: TextStyle,
    pub drawable: Drawable,
    pub button: ButtonStyle,
    pub use_button: bool,
}

/// Loading message texts.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadingAttr {
    pub title: TextStyle,
    pub sub_title: TextStyle,
}

/// Immutable style snapshot of a Chameleon container.
#[derive(Debug, Clone, PartialEq)]
pub struct ChameleonAttr {
    pub empty: StateAttr,
    pub error: StateAttr,
    pub loading: LoadingAttr,
    /// Custom spinner; `None` uses the built-in spinner.
    pub progress_drawable: Option<SpinnerFrames>,
    pub is_large_progress: bool,
    /// Centers the progress indicator on the image instead of the container.
    pub has_loading_message: bool,
    pub default_state: ChameleonState,
}

impl ChameleonAttr {
    /// A bag holding only defaults, colored from `theme`.
    pub fn defaults(theme: &Theme) -> Self {
        let title = |text: &str| TextStyle {
            text: text.to_string(),
            color: theme.title_text,
            size: TITLE_TEXT_SIZE,
        };
        let sub_title = |text: &str| TextStyle {
            text: text.to_string(),
            color: theme.sub_text,
            size: SUB_TEXT_SIZE,
        };
        let button = |background: Color| ButtonStyle {
            text: DEFAULT_BUTTON_TEXT.to_string(),
            text_color: theme.title_text,
            text_size: TITLE_TEXT_SIZE,
            background,
        };

        Self {
            empty: StateAttr {
                title: title(DEFAULT_EMPTY_TEXT),
                sub_title: sub_title(DEFAULT_EMPTY_SUB_TEXT),
                drawable: Drawable::from_text(EMPTY_ICON),
                button: button(theme.sub_text),
                use_button: false,
            },
            error: StateAttr {
                title: title(DEFAULT_ERROR_TEXT),
                sub_title: sub_title(DEFAULT_ERROR_SUB_TEXT),
                drawable: Drawable::from_text(ERROR_ICON),
                button: button(theme.title_text),
                use_button: false,
            },
            loading: LoadingAttr {
                title: title(DEFAULT_LOADING_TEXT),
                sub_title: sub_title(DEFAULT_LOADING_SUB_TEXT),
            },
            progress_drawable: None,
            is_large_progress: false,
            has_loading_message: DEFAULT_HAS_LOADING_MESSAGE,
            default_state: ChameleonState::Content,
        }
    }

    /// Build a bag from an optional attribute set.
    ///
    /// ```
    /// use chameleon_config::{AttributeSet, ChameleonAttr, ChameleonState, Theme};
    ///
    /// let attrs = AttributeSet::new().with("defaultState", "3").with("emptyText", "nothing here");
    /// let bag = ChameleonAttr::from_attributes(Some(&attrs), &Theme::default()).unwrap();
    /// assert_eq!(bag.default_state, ChameleonState::Empty);
    /// assert_eq!(bag.empty.title.text, "nothing here");
    /// assert_eq!(bag.error.title.text, "error");
    /// ```
    pub fn from_attributes(
        attrs: Option<&AttributeSet>,
        theme: &Theme,
    ) -> Result<Self, ConfigError> {
        let defaults = Self::defaults(theme);
        let Some(attrs) = attrs else {
            return Ok(defaults);
        };

        for key in attrs.keys().filter(|key| !keys::ALL.contains(key)) {
            tracing::warn!(key, "Ignoring unknown chameleon attribute");
        }

        let r = Reader { attrs };
        let empty = StateAttr {
            title: r.text_style(
                [keys::EMPTY_TEXT, keys::EMPTY_TEXT_COLOR, keys::EMPTY_TEXT_SIZE],
                defaults.empty.title,
            )?,
            sub_title: r.text_style(
                [
                    keys::EMPTY_SUB_TEXT,
                    keys::EMPTY_SUB_TEXT_COLOR,
                    keys::EMPTY_SUB_TEXT_SIZE,
                ],
                defaults.empty.sub_title,
            )?,
            drawable: r.drawable(keys::EMPTY_DRAWABLE, defaults.empty.drawable),
            button: r.button_style(
                [
                    keys::EMPTY_BUTTON_TEXT,
                    keys::EMPTY_BUTTON_TEXT_COLOR,
                    keys::EMPTY_BUTTON_TEXT_SIZE,
                    keys::EMPTY_BUTTON_BACKGROUND_COLOR,
                ],
                defaults.empty.button,
            )?,
            use_button: r.flag(keys::USE_EMPTY_BUTTON, defaults.empty.use_button)?,
        };

        let error = StateAttr {
            title: r.text_style(
                [keys::ERROR_TEXT, keys::ERROR_TEXT_COLOR, keys::ERROR_TEXT_SIZE],
                defaults.error.title,
            )?,
            sub_title: r.text_style(
                [
                    keys::ERROR_SUB_TEXT,
                    keys::ERROR_SUB_TEXT_COLOR,
                    keys::ERROR_SUB_TEXT_SIZE,
                ],
                defaults.error.sub_title,
            )?,
            drawable: r.drawable(keys::ERROR_DRAWABLE, defaults.error.drawable),
            button: r.button_style(
                [
                    keys::ERROR_BUTTON_TEXT,
                    keys::ERROR_BUTTON_TEXT_COLOR,
                    keys::ERROR_BUTTON_TEXT_SIZE,
                    keys::ERROR_BUTTON_BACKGROUND_COLOR,
                ],
                defaults.error.button,
            )?,
            use_button: r.flag(keys::USE_ERROR_BUTTON, defaults.error.use_button)?,
        };

        let loading = LoadingAttr {
            title: r.text_style(
                [
                    keys::LOADING_TEXT,
                    keys::LOADING_TEXT_COLOR,
                    keys::LOADING_TEXT_SIZE,
                ],
                defaults.loading.title,
            )?,
            sub_title: r.text_style(
                [
                    keys::LOADING_SUB_TEXT,
                    keys::LOADING_SUB_TEXT_COLOR,
                    keys::LOADING_SUB_TEXT_SIZE,
                ],
                defaults.loading.sub_title,
            )?,
        };

        let progress_drawable = match attrs.get(keys::PROGRESS_DRAWABLE) {
            Some(raw) => Some(SpinnerFrames::parse(keys::PROGRESS_DRAWABLE, raw)?),
            None => defaults.progress_drawable,
        };

        Ok(Self {
            empty,
            error,
            loading,
            progress_drawable,
            is_large_progress: r.flag(keys::IS_LARGE_PROGRESS, defaults.is_large_progress)?,
            has_loading_message: r
                .flag(keys::HAS_LOADING_MESSAGE, defaults.has_loading_message)?,
            default_state: attrs
                .get(keys::DEFAULT_STATE)
                .map_or(defaults.default_state, ChameleonState::from_attribute),
        })
    }
}

impl Default for ChameleonAttr {
    fn default() -> Self {
        Self::defaults(&Theme::default())
    }
}

/// Typed lookups over an attribute set.
struct Reader<'a> {
    attrs: &'a AttributeSet,
}

impl Reader<'_> {
    fn string(&self, key: &str, default: String) -> String {
        self.attrs.get(key).map_or(default, str::to_string)
    }

    fn color(&self, key: &str, default: Color) -> Result<Color, ConfigError> {
        self.attrs
            .get(key)
            .map_or(Ok(default), |raw| parse_color(key, raw))
    }

    fn size(&self, key: &str, default: f32) -> Result<f32, ConfigError> {
        self.attrs
            .get(key)
            .map_or(Ok(default), |raw| parse_size(key, raw))
    }

    fn flag(&self, key: &str, default: bool) -> Result<bool, ConfigError> {
        self.attrs
            .get(key)
            .map_or(Ok(default), |raw| parse_bool(key, raw))
    }

    fn drawable(&self, key: &str, default: Drawable) -> Drawable {
        self.attrs.get(key).map_or(default, Drawable::from_text)
    }

    /// Keys are `[text, color, size]`.
    fn text_style(&self, names: [&str; 3], default: TextStyle) -> Result<TextStyle, ConfigError> {
        let [text, color, size] = names;
        Ok(TextStyle {
            text: self.string(text, default.text),
            color: self.color(color, default.color)?,
            size: self.size(size, default.size)?,
        })
    }

    /// Keys are `[text, text color, text size, background]`.
    fn button_style(
        &self,
        names: [&str; 4],
        default: ButtonStyle,
    ) -> Result<ButtonStyle, ConfigError> {
        let [text, text_color, text_size, background] = names;
        Ok(ButtonStyle {
            text: self.string(text, default.text),
            text_color: self.color(text_color, default.text_color)?,
            text_size: self.size(text_size, default.text_size)?,
            background: self.color(background, default.background)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ColorTheme;

    #[test]
    fn test_defaults_without_attributes() {
        let theme = Theme::default();
        let bag = ChameleonAttr::from_attributes(None, &theme).unwrap();

        assert_eq!(bag.empty.title.text, "empty");
        assert_eq!(bag.empty.sub_title.text, "empty content");
        assert_eq!(bag.error.title.text, "error");
        assert_eq!(bag.error.sub_title.text, "error content");
        assert_eq!(bag.loading.title.text, "loading");
        assert_eq!(bag.loading.sub_title.text, "now loading...");
        assert_eq!(bag.empty.button.text, "retry");
        assert_eq!(bag.error.button.text, "retry");
        assert!(!bag.empty.use_button);
        assert!(!bag.error.use_button);
        assert!(!bag.is_large_progress);
        assert!(bag.has_loading_message);
        assert!(bag.progress_drawable.is_none());
        assert_eq!(bag.default_state, ChameleonState::Content);
        assert_eq!(bag.empty.drawable, Drawable::from_text(EMPTY_ICON));
        assert_eq!(bag.error.drawable, Drawable::from_text(ERROR_ICON));
    }

    #[test]
    fn test_default_colors_come_from_theme() {
        let theme = Theme::from_color_theme(ColorTheme::Light);
        let bag = ChameleonAttr::defaults(&theme);

        assert_eq!(bag.empty.title.color, theme.title_text);
        assert_eq!(bag.empty.sub_title.color, theme.sub_text);
        assert_eq!(bag.empty.button.background, theme.sub_text);
        assert_eq!(bag.error.button.background, theme.title_text);
        assert_eq!(bag.error.title.size, TITLE_TEXT_SIZE);
        assert_eq!(bag.error.sub_title.size, SUB_TEXT_SIZE);
    }

    #[test]
    fn test_empty_attribute_set_matches_absent_set() {
        let theme = Theme::default();
        let absent = ChameleonAttr::from_attributes(None, &theme).unwrap();
        let empty = ChameleonAttr::from_attributes(Some(&AttributeSet::new()), &theme).unwrap();
        assert_eq!(absent, empty);
        assert_eq!(absent, ChameleonAttr::default());
    }

    #[test]
    fn test_overrides_are_applied_per_field() {
        let attrs = AttributeSet::new()
            .with(keys::ERROR_TEXT, "Connection lost")
            .with(keys::ERROR_TEXT_COLOR, "red")
            .with(keys::ERROR_TEXT_SIZE, "20sp")
            .with(keys::USE_ERROR_BUTTON, "true")
            .with(keys::ERROR_BUTTON_TEXT, "try again")
            .with(keys::ERROR_DRAWABLE, "x_x")
            .with(keys::PROGRESS_DRAWABLE, "-\\|/")
            .with(keys::IS_LARGE_PROGRESS, "yes")
            .with(keys::HAS_LOADING_MESSAGE, "false")
            .with(keys::DEFAULT_STATE, "1");

        let bag = ChameleonAttr::from_attributes(Some(&attrs), &Theme::default()).unwrap();

        assert_eq!(bag.error.title.text, "Connection lost");
        assert_eq!(bag.error.title.color, Color::Red);
        assert_eq!(bag.error.title.size, 20.0);
        assert!(bag.error.use_button);
        assert_eq!(bag.error.button.text, "try again");
        assert_eq!(bag.error.drawable.lines(), &["x_x".to_string()]);
        assert_eq!(
            bag.progress_drawable.as_ref().map(|s| s.frames().len()),
            Some(4)
        );
        assert!(bag.is_large_progress);
        assert!(!bag.has_loading_message);
        assert_eq!(bag.default_state, ChameleonState::Loading);

        // Untouched fields keep defaults.
        assert_eq!(bag.empty.title.text, "empty");
        assert!(!bag.empty.use_button);
    }

    #[test]
    fn test_default_state_codes() {
        let cases = [
            ("1", ChameleonState::Loading),
            ("2", ChameleonState::Error),
            ("3", ChameleonState::Empty),
            ("4", ChameleonState::None),
            ("0", ChameleonState::Content),
            ("-1", ChameleonState::Content),
            ("99", ChameleonState::Content),
            ("garbage", ChameleonState::Content),
        ];
        for (raw, expected) in cases {
            let attrs = AttributeSet::new().with(keys::DEFAULT_STATE, raw);
            let bag = ChameleonAttr::from_attributes(Some(&attrs), &Theme::default()).unwrap();
            assert_eq!(bag.default_state, expected, "code {raw}");
        }
    }

    #[test]
    fn test_malformed_value_is_error() {
        let attrs = AttributeSet::new().with(keys::USE_EMPTY_BUTTON, "sometimes");
        let err = ChameleonAttr::from_attributes(Some(&attrs), &Theme::default()).unwrap_err();
        match err {
            ConfigError::InvalidValue { key, .. } => assert_eq!(key, keys::USE_EMPTY_BUTTON),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let attrs = AttributeSet::new()
            .with("emptyTxt", "typo")
            .with(keys::EMPTY_TEXT, "real");
        let bag = ChameleonAttr::from_attributes(Some(&attrs), &Theme::default()).unwrap();
        assert_eq!(bag.empty.title.text, "real");
    }

    #[test]
    fn test_all_keys_are_unique() {
        let mut sorted = keys::ALL.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), keys::ALL.len());
    }
}
