//! Models of the auxiliary views managed by the container.
//!
//! Responsibilities:
//! - Hold the content (text, colors, drawable, spinner) of each auxiliary view.
//! - Map a `ChameleonState` to the visibility of all six managed views.
//!
//! Does NOT handle:
//! - Positioning (see `layout`) or drawing (see `render`).
//!
//! Invariants:
//! - After `StateViews::show` the visibility of every view is a pure function
//!   of the state and the attribute bag; no earlier state leaks through.

use chameleon_config::{
    ButtonStyle, ChameleonAttr, ChameleonState, Drawable, SpinnerFrames, StateAttr, TextStyle,
};
use ratatui::style::Color;

use crate::ui::theme::{SPINNER_CHARS, spinner_char};

/// Whether a managed view takes part in rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    Visible,
    #[default]
    Gone,
}

impl Visibility {
    pub fn from_flag(visible: bool) -> Self {
        if visible { Self::Visible } else { Self::Gone }
    }

    pub fn is_visible(self) -> bool {
        self == Self::Visible
    }
}

/// Visibility of the six managed views for one state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateVisibility {
    pub content: Visibility,
    pub image: Visibility,
    pub title: Visibility,
    pub sub_title: Visibility,
    pub progress: Visibility,
    pub button: Visibility,
}

impl StateVisibility {
    /// The visibility table for `state`.
    pub fn for_state(state: ChameleonState, attr: &ChameleonAttr) -> Self {
        use Visibility::{Gone, Visible};

        let message = |use_button: bool| Self {
            content: Gone,
            image: Visible,
            title: Visible,
            sub_title: Visible,
            progress: Gone,
            button: Visibility::from_flag(use_button),
        };

        match state {
            ChameleonState::Content => Self {
                content: Visible,
                ..Self::hidden()
            },
            ChameleonState::Loading => Self {
                progress: Visible,
                ..Self::hidden()
            },
            ChameleonState::Empty => message(attr.empty.use_button),
            ChameleonState::Error => message(attr.error.use_button),
            ChameleonState::None => Self::hidden(),
        }
    }

    fn hidden() -> Self {
        Self {
            content: Visibility::Gone,
            image: Visibility::Gone,
            title: Visibility::Gone,
            sub_title: Visibility::Gone,
            progress: Visibility::Gone,
            button: Visibility::Gone,
        }
    }
}

/// The icon shown above the title.
#[derive(Debug, Clone, Default)]
pub struct ImageView {
    drawable: Option<Drawable>,
    visibility: Visibility,
}

impl ImageView {
    pub fn drawable(&self) -> Option<&Drawable> {
        self.drawable.as_ref()
    }

    /// Width and height of the current drawable in cells.
    pub fn size(&self) -> (u16, u16) {
        self.drawable
            .as_ref()
            .map_or((0, 0), |d| (d.width(), d.height()))
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }
}

/// A single line of styled text (title or subtitle).
#[derive(Debug, Clone)]
pub struct LabelView {
    text: String,
    color: Color,
    size: f32,
    visibility: Visibility,
}

impl LabelView {
    fn new() -> Self {
        Self {
            text: String::new(),
            color: Color::Reset,
            size: 0.0,
            visibility: Visibility::Gone,
        }
    }

    fn set_style(&mut self, style: &TextStyle) {
        self.text.clone_from(&style.text);
        self.color = style.color;
        self.size = style.size;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }
}

/// The animated loading indicator.
#[derive(Debug, Clone)]
pub struct ProgressIndicator {
    frames: Option<SpinnerFrames>,
    large: bool,
    frame: usize,
    visibility: Visibility,
}

impl ProgressIndicator {
    fn new(frames: Option<SpinnerFrames>, large: bool) -> Self {
        Self {
            frames,
            large,
            frame: 0,
            visibility: Visibility::Gone,
        }
    }

    /// Advance the animation by one frame. The counter stays below the
    /// frame count so the cycle never skips.
    pub fn advance(&mut self) {
        self.frame = (self.frame + 1) % self.frame_count();
    }

    fn frame_count(&self) -> usize {
        self.frames
            .as_ref()
            .map_or(SPINNER_CHARS.len(), SpinnerFrames::len)
    }

    /// The glyph for the current frame.
    pub fn glyph(&self) -> char {
        match &self.frames {
            Some(frames) => frames.frame(self.frame),
            None => spinner_char(self.frame),
        }
    }

    pub fn is_large(&self) -> bool {
        self.large
    }

    /// Width and height in cells.
    pub fn size(&self) -> (u16, u16) {
        if self.large { (3, 3) } else { (1, 1) }
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }
}

/// The action button shown under the messages in EMPTY and ERROR.
#[derive(Debug, Clone)]
pub struct StateButton {
    text: String,
    text_color: Color,
    text_size: f32,
    background: Color,
    visibility: Visibility,
}

impl StateButton {
    /// Cells of padding on each side of the label.
    pub const PADDING: u16 = 2;

    fn seeded(style: &ButtonStyle) -> Self {
        let mut button = Self {
            text: String::new(),
            text_color: Color::Reset,
            text_size: 0.0,
            background: Color::Reset,
            visibility: Visibility::Gone,
        };
        button.set_style(style);
        button
    }

    fn set_style(&mut self, style: &ButtonStyle) {
        self.text.clone_from(&style.text);
        self.text_color = style.text_color;
        self.text_size = style.text_size;
        self.background = style.background;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn text_color(&self) -> Color {
        self.text_color
    }

    pub fn text_size(&self) -> f32 {
        self.text_size
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Width and height in cells, including padding.
    pub fn size(&self) -> (u16, u16) {
        let label = u16::try_from(self.text.chars().count()).unwrap_or(u16::MAX);
        (label.saturating_add(Self::PADDING * 2), 1)
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }
}

/// All auxiliary views owned by one container.
#[derive(Debug, Clone)]
pub struct StateViews {
    pub image: ImageView,
    pub title: LabelView,
    pub sub_title: LabelView,
    pub progress: ProgressIndicator,
    pub button: StateButton,
}

impl StateViews {
    /// Create the views, all hidden. The button starts with the error style.
    pub(crate) fn create(attr: &ChameleonAttr) -> Self {
        Self {
            image: ImageView::default(),
            title: LabelView::new(),
            sub_title: LabelView::new(),
            progress: ProgressIndicator::new(
                attr.progress_drawable.clone(),
                attr.is_large_progress,
            ),
            button: StateButton::seeded(&attr.error.button),
        }
    }

    /// Fill in the state's content and apply its visibility.
    ///
    /// Returns the visibility the content child must take.
    pub(crate) fn show(&mut self, state: ChameleonState, attr: &ChameleonAttr) -> Visibility {
        match state {
            ChameleonState::Empty => self.fill(&attr.empty),
            ChameleonState::Error => self.fill(&attr.error),
            ChameleonState::Content | ChameleonState::Loading | ChameleonState::None => {}
        }

        let table = StateVisibility::for_state(state, attr);
        self.image.visibility = table.image;
        self.title.visibility = table.title;
        self.sub_title.visibility = table.sub_title;
        self.progress.visibility = table.progress;
        self.button.visibility = table.button;
        table.content
    }

    fn fill(&mut self, state_attr: &StateAttr) {
        self.image.drawable = Some(state_attr.drawable.clone());
        self.title.set_style(&state_attr.title);
        self.sub_title.set_style(&state_attr.sub_title);
        if state_attr.use_button {
            self.button.set_style(&state_attr.button);
        }
    }

    /// Current visibility of every managed auxiliary view, with `content`
    /// supplied by the caller.
    pub fn visibility(&self, content: Visibility) -> StateVisibility {
        StateVisibility {
            content,
            image: self.image.visibility,
            title: self.title.visibility,
            sub_title: self.sub_title.visibility,
            progress: self.progress.visibility,
            button: self.button.visibility,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chameleon_config::Theme;

    fn attr_with_buttons(empty: bool, error: bool) -> ChameleonAttr {
        let mut attr = ChameleonAttr::defaults(&Theme::default());
        attr.empty.use_button = empty;
        attr.error.use_button = error;
        attr.empty.button.text = "reload".to_string();
        attr.error.button.text = "try again".to_string();
        attr
    }

    #[test]
    fn test_views_start_hidden_with_error_button_style() {
        let attr = attr_with_buttons(true, true);
        let views = StateViews::create(&attr);

        assert_eq!(views.button.text(), "try again");
        let all = views.visibility(Visibility::Gone);
        assert_eq!(all, StateVisibility::for_state(ChameleonState::None, &attr));
    }

    #[test]
    fn test_empty_restyles_button_only_when_enabled() {
        let attr = attr_with_buttons(false, true);
        let mut views = StateViews::create(&attr);

        views.show(ChameleonState::Empty, &attr);
        assert_eq!(views.button.text(), "try again");
        assert!(!views.button.visibility().is_visible());

        let attr = attr_with_buttons(true, true);
        views.show(ChameleonState::Empty, &attr);
        assert_eq!(views.button.text(), "reload");
        assert!(views.button.visibility().is_visible());
    }

    #[test]
    fn test_error_button_follows_use_error_button() {
        let attr = attr_with_buttons(true, false);
        let mut views = StateViews::create(&attr);

        views.show(ChameleonState::Error, &attr);
        assert!(!views.button.visibility().is_visible());
        assert_eq!(views.title.text(), "error");
    }

    #[test]
    fn test_message_state_fills_texts_and_drawable() {
        let attr = attr_with_buttons(false, false);
        let mut views = StateViews::create(&attr);

        let content = views.show(ChameleonState::Empty, &attr);
        assert_eq!(content, Visibility::Gone);
        assert_eq!(views.title.text(), "empty");
        assert_eq!(views.sub_title.text(), "empty content");
        assert_eq!(views.image.drawable(), Some(&attr.empty.drawable));
    }

    #[test]
    fn test_progress_uses_configured_frames() {
        let mut attr = ChameleonAttr::default();
        attr.progress_drawable = SpinnerFrames::parse("progressDrawable", "ab").ok();
        let mut views = StateViews::create(&attr);

        assert_eq!(views.progress.glyph(), 'a');
        views.progress.advance();
        assert_eq!(views.progress.glyph(), 'b');
        views.progress.advance();
        assert_eq!(views.progress.glyph(), 'a');
    }

    #[test]
    fn test_progress_cycle_stays_regular_over_many_ticks() {
        let mut attr = ChameleonAttr::default();
        attr.progress_drawable = SpinnerFrames::parse("progressDrawable", "abc").ok();
        let mut views = StateViews::create(&attr);

        let mut glyphs = String::new();
        for _ in 0..600 {
            glyphs.push(views.progress.glyph());
            views.progress.advance();
        }
        assert_eq!(glyphs, "abc".repeat(200));
    }

    #[test]
    fn test_button_size_includes_padding() {
        let attr = ChameleonAttr::default();
        let views = StateViews::create(&attr);
        assert_eq!(views.button.size(), (5 + 4, 1));
    }
}
