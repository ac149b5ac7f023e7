//! Demo application state and input handling.
//!
//! Responsibilities:
//! - Build the container from attributes and attach the sample list.
//! - Map menu keys to state changes and apply actions.
//! - Simulate a reload (LOADING for a while, then CONTENT) on button press.
//!
//! Does NOT handle:
//! - Terminal setup or the event loop (see `main.rs`).
//!
//! Invariants:
//! - Container listeners only enqueue actions; all state changes happen in
//!   `App::update`.

use chameleon_config::{
    AttributeSet, ChameleonState, ColorTheme, ConfigError, Theme,
    constants::DEFAULT_RELOAD_TICKS,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tokio::sync::mpsc::Sender;

use crate::action::Action;
use crate::chameleon::Chameleon;
use crate::ui::components::SelectList;
use crate::ui::theme::ThemeExt;

/// Rows used by the footer (menu and status line).
pub const FOOTER_HEIGHT: u16 = 2;

/// Menu entries shown in the footer.
const MENU: [(&str, &str); 7] = [
    ("c", "content"),
    ("l", "loading"),
    ("e", "empty"),
    ("r", "error"),
    ("n", "none"),
    ("t", "theme"),
    ("q", "quit"),
];

/// The demo application.
pub struct App {
    pub chameleon: Chameleon,
    pub color_theme: ColorTheme,
    pub theme: Theme,
    pub should_quit: bool,
    /// Last transition or button press, shown in the footer.
    pub status: String,
    reload_ticks: Option<u8>,
}

impl App {
    /// Build the container, attach `item_count` sample items and show EMPTY.
    ///
    /// Container listeners report through `tx`.
    pub fn new(
        attrs: Option<&AttributeSet>,
        color_theme: ColorTheme,
        item_count: usize,
        tx: Sender<Action>,
    ) -> Result<Self, ConfigError> {
        let theme = Theme::from_color_theme(color_theme);
        let mut chameleon = Chameleon::from_attributes(attrs, &theme)?;

        let items: Vec<String> = (1..=item_count).map(|n| format!("Item {n}")).collect();
        let list =
            SelectList::new(items).block(Block::default().borders(Borders::ALL).title(" Items "));
        if let Err(e) = chameleon.attach_content(Box::new(list)) {
            // A fresh container always accepts its first list.
            tracing::error!(error = %e, "Failed to attach sample list");
        }

        let error_tx = tx.clone();
        chameleon.set_error_button_click_listener(move |_| {
            let _ = error_tx.try_send(Action::ButtonPressed(ChameleonState::Error));
        });
        let empty_tx = tx.clone();
        chameleon.set_empty_button_click_listener(move |_| {
            let _ = empty_tx.try_send(Action::ButtonPressed(ChameleonState::Empty));
        });
        chameleon.set_state_change_listener(move |new, old| {
            let _ = tx.try_send(Action::StateChanged { new, old });
        });
        chameleon.show_state(ChameleonState::Empty);

        Ok(Self {
            chameleon,
            color_theme,
            theme,
            should_quit: false,
            status: String::new(),
            reload_ticks: None,
        })
    }

    /// Map a key press to an action. Keys consumed by the container (button
    /// presses, list navigation) yield `None`.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }
        if self.chameleon.handle_key(key) {
            return None;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            KeyCode::Char('c') => Some(Action::ShowState(ChameleonState::Content)),
            KeyCode::Char('l') => Some(Action::ShowState(ChameleonState::Loading)),
            KeyCode::Char('e') => Some(Action::ShowState(ChameleonState::Empty)),
            KeyCode::Char('r') => Some(Action::ShowState(ChameleonState::Error)),
            KeyCode::Char('n') => Some(Action::ShowState(ChameleonState::None)),
            KeyCode::Char('t') => Some(Action::CycleTheme),
            _ => None,
        }
    }

    /// Forward a mouse event to the container. A button click comes back
    /// through the button listeners as `Action::ButtonPressed`.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if !self.chameleon.handle_mouse(mouse) {
            tracing::trace!(column = mouse.column, row = mouse.row, "Mouse event ignored");
        }
    }

    /// Apply one action.
    pub fn update(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Input(key) => {
                if let Some(next) = self.handle_input(key) {
                    self.update(next);
                }
            }
            Action::Mouse(mouse) => self.handle_mouse(mouse),
            Action::Resize(width, height) => {
                tracing::debug!(width, height, "Terminal resized");
            }
            Action::ShowState(state) => {
                self.reload_ticks = None;
                self.chameleon.show_state(state);
            }
            Action::Reload => {
                self.chameleon.show_state(ChameleonState::Loading);
                self.reload_ticks = Some(DEFAULT_RELOAD_TICKS);
            }
            Action::Tick => {
                self.chameleon.tick();
                self.reload_ticks = match self.reload_ticks {
                    Some(0) | Some(1) => {
                        self.chameleon.show_state(ChameleonState::Content);
                        None
                    }
                    Some(n) => Some(n - 1),
                    None => None,
                };
            }
            Action::CycleTheme => {
                self.color_theme = self.color_theme.cycle_next();
                self.theme = Theme::from_color_theme(self.color_theme);
                self.status = format!("theme: {}", self.color_theme.display_name());
            }
            Action::ButtonPressed(state) => {
                tracing::info!(%state, "Button pressed, reloading");
                self.status = format!("{} button pressed", state.name().to_lowercase());
                self.update(Action::Reload);
            }
            Action::StateChanged { new, old } => {
                self.status = format!("{old} -> {new}");
            }
        }
    }

    /// Whether a simulated reload is in progress.
    pub fn is_reloading(&self) -> bool {
        self.reload_ticks.is_some()
    }

    pub fn render(&mut self, f: &mut Frame) {
        let [body, footer] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(FOOTER_HEIGHT)])
                .areas(f.area());

        let frame_block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border())
            .title(Span::styled(
                format!(" Chameleon [{}] ", self.chameleon.state()),
                self.theme.title(),
            ));
        let inner = frame_block.inner(body);
        f.render_widget(frame_block, body);
        self.chameleon.render(f, inner, &self.theme);

        self.render_footer(f, footer);
    }

    fn render_footer(&self, f: &mut Frame, area: Rect) {
        let mut menu = Vec::with_capacity(MENU.len() * 2);
        for (key, label) in MENU {
            menu.push(Span::styled(key, self.theme.title()));
            menu.push(Span::styled(format!(" {label}  "), self.theme.text_dim()));
        }
        let lines = vec![
            Line::from(menu),
            Line::from(Span::styled(self.status.as_str(), self.theme.text())),
        ];
        f.render_widget(Paragraph::new(lines), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc::{Receiver, channel};

    fn app(items: usize) -> (App, Receiver<Action>) {
        let (tx, rx) = channel(16);
        let app = App::new(None, ColorTheme::Default, items, tx).unwrap();
        (app, rx)
    }

    #[test]
    fn test_app_starts_in_empty() {
        let (app, mut rx) = app(3);
        assert_eq!(app.chameleon.state(), ChameleonState::Empty);
        assert_eq!(
            rx.try_recv().ok(),
            Some(Action::StateChanged {
                new: ChameleonState::Empty,
                old: ChameleonState::Content,
            })
        );
    }

    #[test]
    fn test_menu_keys() {
        let (mut app, _rx) = app(3);
        let key = |c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE);

        assert_eq!(
            app.handle_input(key('l')),
            Some(Action::ShowState(ChameleonState::Loading))
        );
        assert_eq!(
            app.handle_input(key('r')),
            Some(Action::ShowState(ChameleonState::Error))
        );
        assert_eq!(app.handle_input(key('t')), Some(Action::CycleTheme));
        assert_eq!(app.handle_input(key('q')), Some(Action::Quit));
        assert_eq!(app.handle_input(key('z')), None);
    }

    #[test]
    fn test_tick_finishes_reload() {
        let (mut app, _rx) = app(3);
        app.update(Action::Reload);
        assert_eq!(app.chameleon.state(), ChameleonState::Loading);

        for _ in 0..DEFAULT_RELOAD_TICKS {
            app.update(Action::Tick);
        }
        assert_eq!(app.chameleon.state(), ChameleonState::Content);
        assert!(!app.is_reloading());
    }

    #[test]
    fn test_show_state_cancels_reload() {
        let (mut app, _rx) = app(3);
        app.update(Action::Reload);
        app.update(Action::ShowState(ChameleonState::Error));

        assert!(!app.is_reloading());
        app.update(Action::Tick);
        assert_eq!(app.chameleon.state(), ChameleonState::Error);
    }

    #[test]
    fn test_cycle_theme_updates_status() {
        let (mut app, _rx) = app(0);
        app.update(Action::CycleTheme);
        assert_eq!(app.color_theme, ColorTheme::Default.cycle_next());
        assert!(app.status.starts_with("theme: "));
    }
}
