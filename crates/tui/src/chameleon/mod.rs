//! The state-switching container.
//!
//! Responsibilities:
//! - Host exactly one list-like content child.
//! - Own the auxiliary views (image, title, subtitle, progress, button) and
//!   switch their visibility and content per `ChameleonState`.
//! - Notify the host of state transitions and button presses.
//!
//! Does NOT handle:
//! - Deciding which state to show; the host calls `show_state`.
//! - Loading data into the content child.
//!
//! Invariants:
//! - Exactly one state is current at any time.
//! - The auxiliary views are created and wired at most once per container.
//! - The state-change listener fires exactly once per actual transition and
//!   never when the requested state equals the current one.

mod content;
mod error;
mod layout;
mod render;
mod views;

pub use content::{ChildView, ListContent, TextView};
pub use error::{ChameleonError, InvalidChildReason};
pub use layout::{ProgressAnchor, ResolvedLayout, StateLayout};
pub use views::{
    ImageView, LabelView, ProgressIndicator, StateButton, StateViews, StateVisibility, Visibility,
};

use chameleon_config::{AttributeSet, ChameleonAttr, ChameleonState, ConfigError, Theme};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

/// Callback invoked with the button that was pressed.
pub type ButtonListener = Box<dyn FnMut(&StateButton)>;

/// Callback invoked with `(new, old)` on every state transition.
pub type StateChangeListener = Box<dyn FnMut(ChameleonState, ChameleonState)>;

/// A container that shows its list child or one of the empty, error,
/// loading and blank presentations in its place.
pub struct Chameleon {
    attr: ChameleonAttr,
    content: Option<Box<dyn ChildView>>,
    content_visibility: Visibility,
    views: Option<StateViews>,
    layout: Option<StateLayout>,
    current_state: ChameleonState,
    error_button_listener: Option<ButtonListener>,
    empty_button_listener: Option<ButtonListener>,
    state_change_listener: Option<StateChangeListener>,
    button_area: Option<Rect>,
}

impl std::fmt::Debug for Chameleon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Chameleon")
            .field("current_state", &self.current_state)
            .field("content", &self.content)
            .field("content_visibility", &self.content_visibility)
            .field("views", &self.views)
            .field("layout", &self.layout)
            .finish_non_exhaustive()
    }
}

impl Default for Chameleon {
    fn default() -> Self {
        Self::new(ChameleonAttr::default())
    }
}

impl Chameleon {
    /// Create a container from an already built attribute bag.
    pub fn new(attr: ChameleonAttr) -> Self {
        Self {
            attr,
            content: None,
            content_visibility: Visibility::Visible,
            views: None,
            layout: None,
            current_state: ChameleonState::Empty,
            error_button_listener: None,
            empty_button_listener: None,
            state_change_listener: None,
            button_area: None,
        }
    }

    /// Create a container by parsing `attrs` once. Absent attributes take
    /// their defaults, with theme-dependent colors taken from `theme`.
    pub fn from_attributes(
        attrs: Option<&AttributeSet>,
        theme: &Theme,
    ) -> Result<Self, ConfigError> {
        ChameleonAttr::from_attributes(attrs, theme).map(Self::new)
    }

    /// Attach the content child.
    ///
    /// On success the auxiliary views are created and wired, and the
    /// configured default state is shown.
    ///
    /// # Errors
    ///
    /// Returns [`ChameleonError::InvalidChild`] if a child is already attached
    /// or `view` is not list-like. The container is left unchanged.
    pub fn attach_content(&mut self, view: Box<dyn ChildView>) -> Result<(), ChameleonError> {
        let reason = if self.content.is_some() {
            Some(InvalidChildReason::AlreadyHasChild)
        } else if view.as_list().is_none() {
            Some(InvalidChildReason::NotAList)
        } else {
            None
        };
        if let Some(reason) = reason {
            tracing::warn!(%reason, "Rejected content child");
            return Err(ChameleonError::InvalidChild(reason));
        }

        self.content = Some(view);
        let attr = &self.attr;
        self.views.get_or_insert_with(|| StateViews::create(attr));
        self.layout
            .get_or_insert_with(|| StateLayout::wire(attr.has_loading_message));
        tracing::debug!(default_state = %self.attr.default_state, "Content attached");

        self.show_state(self.attr.default_state);
        Ok(())
    }

    /// Switch the presentation to `state`.
    pub fn show_state(&mut self, state: ChameleonState) {
        // The button rect belongs to the previous state until the next render.
        self.button_area = None;
        if let Some(views) = self.views.as_mut() {
            self.content_visibility = views.show(state, &self.attr);
        } else {
            self.content_visibility = StateVisibility::for_state(state, &self.attr).content;
        }

        let previous = self.current_state;
        self.current_state = state;
        if state != previous {
            tracing::debug!(new = %state, old = %previous, "State changed");
            if let Some(listener) = self.state_change_listener.as_mut() {
                listener(state, previous);
            }
        }
    }

    /// The current state.
    pub fn state(&self) -> ChameleonState {
        self.current_state
    }

    /// True iff a list child is attached and it holds no items.
    pub fn has_no_content(&self) -> bool {
        self.content
            .as_deref()
            .and_then(|content| content.as_list())
            .is_some_and(|list| list.item_count() == 0)
    }

    pub fn set_error_button_click_listener(
        &mut self,
        listener: impl FnMut(&StateButton) + 'static,
    ) {
        self.error_button_listener = Some(Box::new(listener));
    }

    pub fn set_empty_button_click_listener(
        &mut self,
        listener: impl FnMut(&StateButton) + 'static,
    ) {
        self.empty_button_listener = Some(Box::new(listener));
    }

    pub fn set_state_change_listener(
        &mut self,
        listener: impl FnMut(ChameleonState, ChameleonState) + 'static,
    ) {
        self.state_change_listener = Some(Box::new(listener));
    }

    /// Press the action button.
    ///
    /// Dispatches to the empty or error listener depending on the current
    /// state. Returns whether a listener ran.
    pub fn press_button(&mut self) -> bool {
        let Some(views) = self.views.as_ref() else {
            return false;
        };
        if !views.button.visibility().is_visible() {
            return false;
        }

        let listener = match self.current_state {
            ChameleonState::Empty => self.empty_button_listener.as_mut(),
            ChameleonState::Error => self.error_button_listener.as_mut(),
            ChameleonState::Content | ChameleonState::Loading | ChameleonState::None => None,
        };
        match listener {
            Some(listener) => {
                tracing::debug!(state = %self.current_state, "Button pressed");
                listener(&views.button);
                true
            }
            None => false,
        }
    }

    /// Handle a key press. Returns `true` when the key was consumed.
    ///
    /// Enter and Space press a visible button; other keys go to the content
    /// list while it is shown.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) && self.button_visible() {
            return self.press_button();
        }
        if !self.content_visibility.is_visible() {
            return false;
        }
        self.content
            .as_deref_mut()
            .and_then(|content| content.as_list_mut())
            .is_some_and(|list| list.handle_key(key))
    }

    /// Handle a mouse event. A left click on the rendered button presses it.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> bool {
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            return false;
        }
        let hit = self
            .button_area
            .is_some_and(|area| area.contains(Position::new(mouse.column, mouse.row)));
        hit && self.button_visible() && self.press_button()
    }

    /// Advance the progress animation by one frame.
    pub fn tick(&mut self) {
        if let Some(views) = self.views.as_mut() {
            views.progress.advance();
        }
    }

    /// The auxiliary views, once a content child has been attached.
    pub fn views(&self) -> Option<&StateViews> {
        self.views.as_ref()
    }

    /// The attribute bag this container was built from.
    pub fn attr(&self) -> &ChameleonAttr {
        &self.attr
    }

    /// The one-time layout wiring, once a content child has been attached.
    pub fn layout(&self) -> Option<&StateLayout> {
        self.layout.as_ref()
    }

    /// Whether the content child is currently shown.
    pub fn content_visibility(&self) -> Visibility {
        self.content_visibility
    }

    /// Visibility of all six managed views, once attached.
    pub fn visibility(&self) -> Option<StateVisibility> {
        self.views
            .as_ref()
            .map(|views| views.visibility(self.content_visibility))
    }

    /// Area the button occupied in the last render, if it was drawn and no
    /// state has been shown since.
    pub fn button_area(&self) -> Option<Rect> {
        self.button_area
    }

    pub fn content(&self) -> Option<&dyn ChildView> {
        self.content.as_deref()
    }

    pub fn content_mut(&mut self) -> Option<&mut (dyn ChildView + 'static)> {
        self.content.as_deref_mut()
    }

    fn button_visible(&self) -> bool {
        self.views
            .as_ref()
            .is_some_and(|views| views.button.visibility().is_visible())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::components::SelectList;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn list(count: usize) -> Box<dyn ChildView> {
        Box::new(SelectList::new((0..count).map(|i| format!("item {i}")).collect()))
    }

    #[test]
    fn test_initial_state_is_empty_before_attach() {
        let chameleon = Chameleon::default();
        assert_eq!(chameleon.state(), ChameleonState::Empty);
        assert!(chameleon.views().is_none());
        assert!(!chameleon.has_no_content());
    }

    #[test]
    fn test_attach_shows_default_state() {
        let mut chameleon = Chameleon::default();
        chameleon.attach_content(list(3)).unwrap();

        assert_eq!(chameleon.state(), ChameleonState::Content);
        assert!(chameleon.content_visibility().is_visible());
        assert!(chameleon.layout().is_some());
    }

    #[test]
    fn test_attach_rejects_second_child() {
        let mut chameleon = Chameleon::default();
        chameleon.attach_content(list(1)).unwrap();

        let err = chameleon.attach_content(list(2)).unwrap_err();
        assert_eq!(err.reason(), InvalidChildReason::AlreadyHasChild);
        let kept = chameleon.content().and_then(|c| c.as_list()).map(|l| l.item_count());
        assert_eq!(kept, Some(1));
    }

    #[test]
    fn test_attach_rejects_non_list() {
        let mut chameleon = Chameleon::default();
        let err = chameleon
            .attach_content(Box::new(TextView::new("not a list")))
            .unwrap_err();

        assert_eq!(err.reason(), InvalidChildReason::NotAList);
        assert!(chameleon.content().is_none());
        assert!(chameleon.views().is_none());
    }

    #[test]
    fn test_state_change_listener_receives_new_then_old() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut chameleon = Chameleon::default();
        chameleon.attach_content(list(0)).unwrap();

        let sink = Rc::clone(&seen);
        chameleon.set_state_change_listener(move |new, old| sink.borrow_mut().push((new, old)));
        chameleon.show_state(ChameleonState::Loading);
        chameleon.show_state(ChameleonState::Loading);
        chameleon.show_state(ChameleonState::Error);

        assert_eq!(
            *seen.borrow(),
            vec![
                (ChameleonState::Loading, ChameleonState::Content),
                (ChameleonState::Error, ChameleonState::Loading),
            ]
        );
    }

    #[test]
    fn test_show_state_before_attach_tracks_state() {
        let mut chameleon = Chameleon::default();
        chameleon.show_state(ChameleonState::Loading);

        assert_eq!(chameleon.state(), ChameleonState::Loading);
        assert!(!chameleon.content_visibility().is_visible());
        assert!(chameleon.visibility().is_none());
    }

    #[test]
    fn test_press_button_dispatches_by_state() {
        let mut attr = ChameleonAttr::default();
        attr.empty.use_button = true;
        attr.error.use_button = true;
        let mut chameleon = Chameleon::new(attr);
        chameleon.attach_content(list(0)).unwrap();

        let presses = Rc::new(RefCell::new(Vec::new()));
        let empty_sink = Rc::clone(&presses);
        chameleon.set_empty_button_click_listener(move |_| empty_sink.borrow_mut().push("empty"));
        let error_sink = Rc::clone(&presses);
        chameleon.set_error_button_click_listener(move |_| error_sink.borrow_mut().push("error"));

        assert!(!chameleon.press_button());
        chameleon.show_state(ChameleonState::Empty);
        assert!(chameleon.press_button());
        chameleon.show_state(ChameleonState::Error);
        assert!(chameleon.press_button());
        chameleon.show_state(ChameleonState::Loading);
        assert!(!chameleon.press_button());

        assert_eq!(*presses.borrow(), vec!["empty", "error"]);
    }

    #[test]
    fn test_press_hidden_button_does_nothing() {
        let mut chameleon = Chameleon::default();
        chameleon.attach_content(list(0)).unwrap();
        let pressed = Rc::new(RefCell::new(false));
        let sink = Rc::clone(&pressed);
        chameleon.set_error_button_click_listener(move |_| *sink.borrow_mut() = true);

        chameleon.show_state(ChameleonState::Error);
        assert!(!chameleon.press_button());
        assert!(!*pressed.borrow());
    }

    #[test]
    fn test_tick_advances_progress() {
        let mut chameleon = Chameleon::default();
        chameleon.attach_content(list(0)).unwrap();
        let before = chameleon.views().unwrap().progress.glyph();
        chameleon.tick();
        assert_ne!(chameleon.views().unwrap().progress.glyph(), before);
    }
}
