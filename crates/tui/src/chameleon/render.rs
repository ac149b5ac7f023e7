//! Drawing the container into a ratatui frame.

use chameleon_config::{ChameleonState, Theme};
use ratatui::{Frame, layout::Rect};

use super::Chameleon;
use crate::ui::theme::{ThemeExt, helpers::sized_text};
use crate::ui::widgets::{render_button, render_drawable, render_label, render_progress};

impl Chameleon {
    /// Draw the content child (when shown) and every visible auxiliary view.
    ///
    /// Records where the button was drawn so `handle_mouse` can hit-test it.
    pub fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        self.button_area = None;

        if self.content_visibility.is_visible()
            && let Some(content) = self.content.as_deref_mut()
        {
            content.draw(frame, area, theme);
        }

        let (Some(views), Some(layout)) = (self.views.as_ref(), self.layout.as_ref()) else {
            return;
        };
        let resolved = layout.resolve(area, views);

        if views.image.visibility().is_visible()
            && let Some(drawable) = views.image.drawable()
        {
            let style = match self.current_state {
                ChameleonState::Error => theme.error(),
                _ => theme.text_dim(),
            };
            render_drawable(frame, resolved.image, drawable, style);
        }

        for (label, rect) in [
            (&views.title, resolved.title),
            (&views.sub_title, resolved.sub_title),
        ] {
            if label.visibility().is_visible() {
                let style = sized_text(label.color(), label.size());
                render_label(frame, rect, label.text(), style);
            }
        }

        if views.progress.visibility().is_visible() {
            render_progress(
                frame,
                resolved.progress,
                views.progress.glyph(),
                views.progress.is_large(),
                theme,
            );
        }

        if views.button.visibility().is_visible() && !resolved.button.is_empty() {
            render_button(frame, resolved.button, &views.button);
            self.button_area = Some(resolved.button);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::components::SelectList;
    use chameleon_config::ChameleonAttr;
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(chameleon: &mut Chameleon) -> String {
        let backend = TestBackend::new(40, 16);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = Theme::default();

        terminal
            .draw(|f| chameleon.render(f, f.area(), &theme))
            .unwrap();

        let buffer = terminal.backend().buffer().clone();
        buffer
            .content
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_render_before_attach_draws_nothing() {
        let mut chameleon = Chameleon::default();
        let content = draw(&mut chameleon);
        assert!(content.trim().is_empty());
        assert!(chameleon.button_area().is_none());
    }

    #[test]
    fn test_render_content_hides_messages() {
        let mut chameleon = Chameleon::default();
        chameleon
            .attach_content(Box::new(SelectList::new(vec!["alpha", "beta"])))
            .unwrap();

        let content = draw(&mut chameleon);
        assert!(content.contains("> alpha"));
        assert!(!content.contains("empty"));
    }

    #[test]
    fn test_render_error_records_button_area() {
        let mut attr = ChameleonAttr::default();
        attr.error.use_button = true;
        let mut chameleon = Chameleon::new(attr);
        chameleon
            .attach_content(Box::new(SelectList::new(vec!["alpha"])))
            .unwrap();
        chameleon.show_state(ChameleonState::Error);

        let content = draw(&mut chameleon);
        assert!(content.contains("error content"));
        assert!(content.contains("retry"));
        assert!(!content.contains("alpha"));
        assert!(chameleon.button_area().is_some());
    }
}
