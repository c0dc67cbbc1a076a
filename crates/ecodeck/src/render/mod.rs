pub mod article;
pub mod background;
pub mod chrome;
pub mod image_cache;
pub mod image_panel;
pub mod text;
pub mod transition;

use eframe::egui::{self, Rect};

use crate::deck::Slide;
use crate::theme::ThemeStyle;

use image_cache::ImageCache;
use transition::SlideMotion;

/// Reference resolution all sizes are authored against.
const REFERENCE_SIZE: egui::Vec2 = egui::vec2(1920.0, 1080.0);

const PAGE_PADDING: egui::Vec2 = egui::vec2(96.0, 40.0);
const MAX_PAGE_WIDTH: f32 = 1600.0;
const HEADER_HEIGHT: f32 = 44.0;
const FOOTER_HEIGHT: f32 = 52.0;
const SECTION_GAP: f32 = 24.0;
const CARD_PADDING: egui::Vec2 = egui::vec2(56.0, 56.0);
const COLUMN_GAP: f32 = 40.0;
/// Share of the card's inner width given to the text column.
const ARTICLE_SHARE: f32 = 0.56;

/// Uniform scale that fits the reference resolution into `rect`.
pub fn compute_scale(rect: Rect) -> f32 {
    (rect.width() / REFERENCE_SIZE.x).min(rect.height() / REFERENCE_SIZE.y)
}

/// Screen regions of the presentation for one window size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageLayout {
    pub header: Rect,
    pub card: Rect,
    pub footer: Rect,
    /// Card interior holding both columns.
    pub content: Rect,
    pub article: Rect,
    pub image: Rect,
}

impl PageLayout {
    pub fn compute(screen: Rect, scale: f32) -> Self {
        let inner = screen.shrink2(PAGE_PADDING * scale);
        let width = inner.width().min(MAX_PAGE_WIDTH * scale).max(0.0);
        let column = Rect::from_center_size(inner.center(), egui::vec2(width, inner.height()));

        let header = Rect::from_min_size(column.min, egui::vec2(width, HEADER_HEIGHT * scale));
        let footer = Rect::from_min_max(
            egui::pos2(column.left(), column.bottom() - FOOTER_HEIGHT * scale),
            column.max,
        );
        let card = Rect::from_min_max(
            egui::pos2(column.left(), header.bottom() + SECTION_GAP * scale),
            egui::pos2(
                column.right(),
                (footer.top() - SECTION_GAP * scale).max(header.bottom() + SECTION_GAP * scale),
            ),
        );

        let content = card.shrink2(CARD_PADDING * scale);
        let article_width = ((content.width() - COLUMN_GAP * scale) * ARTICLE_SHARE).max(0.0);
        let article = Rect::from_min_size(content.min, egui::vec2(article_width, content.height()));
        let image = Rect::from_min_max(
            egui::pos2(article.right() + COLUMN_GAP * scale, content.top()),
            content.max,
        );

        Self {
            header,
            card,
            footer,
            content,
            article,
            image,
        }
    }
}

/// `rect` scaled by `factor` about `origin`.
fn scale_about(rect: Rect, origin: egui::Pos2, factor: f32) -> Rect {
    Rect::from_min_max(
        origin + (rect.min - origin) * factor,
        origin + (rect.max - origin) * factor,
    )
}

/// Draw one slide's text and image columns inside the card, posed by `motion`.
#[allow(clippy::too_many_arguments)]
pub fn render_slide(
    ui: &egui::Ui,
    slide: &Slide,
    style: &ThemeStyle,
    layout: &PageLayout,
    motion: SlideMotion,
    entered_for: Option<f32>,
    image_cache: &ImageCache,
    scale: f32,
) {
    if motion.opacity <= 0.0 {
        return;
    }
    let painter = ui.painter().with_clip_rect(layout.card);
    let offset = egui::vec2(motion.offset_x * scale, 0.0);
    let place =
        |rect: Rect| scale_about(rect, layout.content.center(), motion.scale).translate(offset);
    let content_scale = scale * motion.scale;

    article::render(
        ui,
        &painter,
        slide,
        style,
        place(layout.article),
        motion.opacity,
        entered_for,
        content_scale,
    );
    image_panel::render(
        &painter,
        slide,
        place(layout.image),
        motion.opacity,
        image_cache,
        content_scale,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen(w: f32, h: f32) -> Rect {
        Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(w, h))
    }

    #[test]
    fn test_compute_scale() {
        assert_eq!(compute_scale(screen(1920.0, 1080.0)), 1.0);
        assert_eq!(compute_scale(screen(1280.0, 720.0)), 1280.0 / 1920.0);
        // Letterboxed: height limits.
        assert_eq!(compute_scale(screen(3840.0, 1080.0)), 1.0);
    }

    #[test]
    fn test_layout_regions_stack_without_overlap() {
        let screen = screen(1920.0, 1080.0);
        let layout = PageLayout::compute(screen, 1.0);
        assert!(screen.contains_rect(layout.header));
        assert!(screen.contains_rect(layout.footer));
        assert!(layout.header.bottom() < layout.card.top());
        assert!(layout.card.bottom() < layout.footer.top());
        assert!(layout.card.contains_rect(layout.article));
        assert!(layout.card.contains_rect(layout.image));
        assert!(layout.article.right() < layout.image.left());
        assert!(layout.article.width() > layout.image.width());
    }

    #[test]
    fn test_wide_screens_cap_page_width() {
        let layout = PageLayout::compute(screen(3840.0, 1080.0), 1.0);
        assert!((layout.card.width() - MAX_PAGE_WIDTH).abs() < 1e-3);
        assert!((layout.card.center().x - 1920.0).abs() < 1e-3);
    }

    #[test]
    fn test_tiny_window_keeps_card_height_non_negative() {
        let layout = PageLayout::compute(screen(200.0, 100.0), compute_scale(screen(200.0, 100.0)));
        assert!(layout.card.height() >= 0.0);
        assert!(layout.article.width() >= 0.0);
    }

    #[test]
    fn test_scale_about_center_keeps_center() {
        let rect = screen(100.0, 50.0);
        let scaled = scale_about(rect, rect.center(), 0.5);
        assert_eq!(scaled.center(), rect.center());
        assert_eq!(scaled.size(), egui::vec2(50.0, 25.0));
    }
}
