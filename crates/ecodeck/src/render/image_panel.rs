use eframe::egui::{self, Color32, Rect, Stroke};

use crate::deck::Slide;
use crate::render::image_cache::{ImageCache, cover_uv};
use crate::render::text::{paint_faded, paragraph_job};
use crate::theme::{ThemeStyle, Typography};

/// Widest the portrait frame gets, in reference pixels.
const MAX_FRAME_WIDTH: f32 = 384.0;
/// Portrait frame aspect, width over height.
const FRAME_ASPECT: f32 = 3.0 / 4.0;
const FRAME_RADIUS: f32 = 24.0;

/// Largest 3:4 frame centered in `area`, capped at the maximum frame width.
pub fn frame_rect(area: Rect, scale: f32) -> Rect {
    let mut width = area.width().min(MAX_FRAME_WIDTH * scale).max(0.0);
    let mut height = width / FRAME_ASPECT;
    if height > area.height() {
        height = area.height().max(0.0);
        width = height * FRAME_ASPECT;
    }
    Rect::from_center_size(area.center(), egui::vec2(width, height))
}

/// Draw the slide image, cover-fitted into a portrait frame, or its alt text
/// while the image is unavailable.
pub fn render(
    painter: &egui::Painter,
    slide: &Slide,
    area: Rect,
    opacity: f32,
    image_cache: &ImageCache,
    scale: f32,
) {
    if opacity <= 0.0 {
        return;
    }
    let frame = frame_rect(area, scale);
    let radius = FRAME_RADIUS * scale;

    // Halo behind the frame.
    painter.rect_filled(
        area.shrink(24.0 * scale),
        28.0 * scale,
        ThemeStyle::with_opacity(Color32::WHITE, 0.06 * opacity),
    );
    painter.rect_filled(
        frame,
        radius,
        ThemeStyle::with_opacity(Color32::BLACK, 0.2 * opacity),
    );

    match image_cache.get_or_load(painter.ctx(), slide.image.src) {
        Some(texture) => {
            let uv = cover_uv(texture.size_vec2(), frame);
            let tint = Color32::WHITE.gamma_multiply(opacity);
            painter.image(texture.id(), frame, uv, tint);
        }
        None => {
            let pad = 24.0 * scale;
            let job = paragraph_job(
                slide.image.alt,
                Typography::DEFAULT.detail * scale,
                ThemeStyle::text(0.5, 1.0),
                true,
                (frame.width() - pad * 2.0).max(1.0),
            );
            let galley = painter.layout_job(job);
            let pos = frame.center() - galley.size() / 2.0;
            paint_faded(painter, pos, galley, ThemeStyle::text(0.5, 1.0), opacity);
        }
    }

    painter.rect_stroke(
        frame,
        radius,
        Stroke::new(scale.max(1.0), ThemeStyle::with_opacity(Color32::WHITE, 0.1 * opacity)),
        egui::StrokeKind::Inside,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_is_portrait_and_capped() {
        let area = Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(700.0, 800.0));
        let frame = frame_rect(area, 1.0);
        assert!((frame.width() - 384.0).abs() < 1e-3);
        assert!((frame.height() - 512.0).abs() < 1e-3);
        assert_eq!(frame.center(), area.center());
    }

    #[test]
    fn test_frame_shrinks_to_short_area() {
        let area = Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(700.0, 400.0));
        let frame = frame_rect(area, 1.0);
        assert!((frame.height() - 400.0).abs() < 1e-3);
        assert!((frame.width() - 300.0).abs() < 1e-3);
    }

    #[test]
    fn test_frame_follows_scale() {
        let area = Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(2000.0, 2000.0));
        let frame = frame_rect(area, 0.5);
        assert!((frame.width() - 192.0).abs() < 1e-3);
    }
}
