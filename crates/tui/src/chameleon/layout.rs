//! Placement of the auxiliary views inside the container.
//!
//! The wiring (`StateLayout`) is decided once, when the content child is
//! attached. Each render resolves it against the current area into concrete
//! rectangles (`ResolvedLayout`).
//!
//! Placement rules:
//! - The title row sits at the vertical center and spans the full width.
//! - The image ends `image_gap` rows above the title, horizontally centered.
//! - The subtitle follows the title; the button follows the subtitle.
//! - The progress indicator is centered on the image, or on the whole area
//!   when no loading message is configured. A gone image is a zero-size
//!   point just above the title.

use ratatui::layout::Rect;

use super::views::StateViews;

/// Rows between the bottom of the image and the title.
pub const IMAGE_GAP: u16 = 1;
/// Rows between the title and the subtitle.
pub const SUB_TITLE_GAP: u16 = 0;
/// Rows between the subtitle and the button.
pub const BUTTON_GAP: u16 = 1;

/// What the progress indicator is centered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressAnchor {
    /// Centered on the image position, leaving room for a message.
    Image,
    /// Centered on the whole container.
    Parent,
}

/// One-time wiring of the auxiliary views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateLayout {
    pub progress_anchor: ProgressAnchor,
    pub image_gap: u16,
    pub sub_title_gap: u16,
    pub button_gap: u16,
}

/// Concrete rectangles for one render pass. Every rectangle lies inside the
/// container area; views pushed past its bottom get zero height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedLayout {
    pub content: Rect,
    pub image: Rect,
    pub title: Rect,
    pub sub_title: Rect,
    pub progress: Rect,
    pub button: Rect,
}

impl StateLayout {
    pub fn wire(has_loading_message: bool) -> Self {
        Self {
            progress_anchor: if has_loading_message {
                ProgressAnchor::Image
            } else {
                ProgressAnchor::Parent
            },
            image_gap: IMAGE_GAP,
            sub_title_gap: SUB_TITLE_GAP,
            button_gap: BUTTON_GAP,
        }
    }

    pub fn resolve(&self, area: Rect, views: &StateViews) -> ResolvedLayout {
        let title_y = area.y + area.height.saturating_sub(1) / 2;
        let title = fit(Rect::new(area.x, title_y, area.width, 1), area);

        // A gone image collapses to a point so earlier drawables never move
        // the progress anchor.
        let (image_w, image_h) = if views.image.visibility().is_visible() {
            views.image.size()
        } else {
            (0, 0)
        };
        let image_bottom = title_y.saturating_sub(self.image_gap).max(area.y);
        let image_top = image_bottom.saturating_sub(image_h).max(area.y);
        let image = fit(
            Rect::new(
                centered_x(area, image_w),
                image_top,
                image_w,
                image_bottom - image_top,
            ),
            area,
        );

        let sub_title = fit(
            Rect::new(area.x, below(title, self.sub_title_gap), area.width, 1),
            area,
        );

        let (button_w, button_h) = views.button.size();
        let button = fit(
            Rect::new(
                centered_x(area, button_w),
                below(sub_title, self.button_gap),
                button_w,
                button_h,
            ),
            area,
        );

        let anchor = match self.progress_anchor {
            ProgressAnchor::Image => image,
            ProgressAnchor::Parent => area,
        };
        let (progress_w, progress_h) = views.progress.size();
        let progress = fit(centered_on(anchor, progress_w, progress_h), area);

        ResolvedLayout {
            content: area,
            image,
            title,
            sub_title,
            progress,
            button,
        }
    }
}

/// Row `gap` rows below `rect`, counting a zero-height rect as one row.
fn below(rect: Rect, gap: u16) -> u16 {
    rect.y
        .saturating_add(rect.height.max(1))
        .saturating_add(gap)
}

fn centered_x(area: Rect, width: u16) -> u16 {
    area.x + area.width.saturating_sub(width) / 2
}

fn centered_on(anchor: Rect, width: u16, height: u16) -> Rect {
    let center_x = anchor.x + anchor.width / 2;
    let center_y = anchor.y + anchor.height / 2;
    Rect::new(
        center_x.saturating_sub(width / 2),
        center_y.saturating_sub(height / 2),
        width,
        height,
    )
}

/// Clip `rect` to `area`.
fn fit(rect: Rect, area: Rect) -> Rect {
    let x = rect.x.clamp(area.x, area.right());
    let y = rect.y.clamp(area.y, area.bottom());
    let right = rect.right().clamp(x, area.right());
    let bottom = rect.bottom().clamp(y, area.bottom());
    Rect::new(x, y, right - x, bottom - y)
}
