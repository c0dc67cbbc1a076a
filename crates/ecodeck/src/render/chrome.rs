use std::f32::consts::{FRAC_PI_2, TAU};

use eframe::egui::{self, Color32, Pos2, Rect, Stroke};

use crate::controller::Command;
use crate::input::SHORTCUTS;
use crate::render::text::{counter_label, paint_faded, tracked_job};
use crate::render::transition::Reveal;
use crate::theme::{self, ThemeStyle, Typography};

const PAGINATION_BAR: egui::Vec2 = egui::vec2(32.0, 8.0);
const PAGINATION_GAP: f32 = 8.0;

/// What the header shows this frame.
pub struct HeaderState<'a> {
    pub eyebrow: Option<&'a str>,
    /// Seconds since the current slide was selected.
    pub since_selected: f32,
    pub auto_playing: bool,
    /// Fraction of the auto-play interval already elapsed.
    pub auto_progress: Option<f32>,
}

/// Eyebrow on the left, auto-play toggle on the right.
pub fn header(ui: &egui::Ui, rect: Rect, state: &HeaderState<'_>, scale: f32) -> Option<Command> {
    let painter = ui.painter();
    let fonts = Typography::DEFAULT;

    if let Some(eyebrow) = state.eyebrow {
        let (_, dy, opacity, _) = Reveal::EYEBROW.pose(Some(state.since_selected));
        let color = ThemeStyle::text(0.7, 1.0);
        let galley = painter.layout_job(tracked_job(
            eyebrow,
            fonts.eyebrow * scale,
            color,
            0.4,
            rect.width() * 0.7,
        ));
        let pos = egui::pos2(
            rect.left(),
            rect.center().y - galley.size().y / 2.0 + dy * scale,
        );
        paint_faded(painter, pos, galley, color, opacity);
    }

    let label = painter.layout_job(tracked_job(
        "Auto",
        fonts.small * 0.85 * scale,
        Color32::WHITE,
        0.3,
        f32::INFINITY,
    ));
    let icon = 18.0 * scale;
    let pad = egui::vec2(16.0 * scale, 6.0 * scale);
    let gap = 8.0 * scale;
    let size = egui::vec2(
        pad.x * 2.0 + icon + gap + label.size().x,
        pad.y * 2.0 + icon.max(label.size().y),
    );
    let button = Rect::from_min_size(
        egui::pos2(rect.right() - size.x, rect.center().y - size.y / 2.0),
        size,
    );
    let response = pill_button(ui, "auto_play", button, 0.1, 0.2);
    let icon_center = egui::pos2(button.left() + pad.x + icon / 2.0, button.center().y);
    paint_play_state(painter, icon_center, icon / 2.0, state, scale);
    painter.galley_with_override_text_color(
        egui::pos2(icon_center.x + icon / 2.0 + gap, button.center().y - label.size().y / 2.0),
        label,
        Color32::WHITE,
    );

    response.clicked().then_some(Command::ToggleAutoPlay)
}

/// Play or pause glyph inside a ring that fills toward the next advance.
fn paint_play_state(
    painter: &egui::Painter,
    center: Pos2,
    radius: f32,
    state: &HeaderState<'_>,
    scale: f32,
) {
    let accent = theme::BRAND_LIGHT;
    let ring = Stroke::new(1.5 * scale, ThemeStyle::with_opacity(accent, 0.35));
    painter.circle_stroke(center, radius, ring);

    if let Some(progress) = state.auto_progress {
        let steps = 32;
        let sweep = TAU * progress.clamp(0.0, 1.0);
        let points: Vec<Pos2> = (0..=steps)
            .map(|i| {
                let angle = -FRAC_PI_2 + sweep * i as f32 / steps as f32;
                center + radius * egui::vec2(angle.cos(), angle.sin())
            })
            .collect();
        painter.add(egui::Shape::line(points, Stroke::new(1.5 * scale, accent)));
    }

    let glyph = radius * 0.45;
    if state.auto_playing {
        for dx in [-glyph * 0.45, glyph * 0.45] {
            let bar = Rect::from_center_size(
                center + egui::vec2(dx, 0.0),
                egui::vec2(glyph * 0.4, glyph * 1.6),
            );
            painter.rect_filled(bar, 1.0 * scale, accent);
        }
    } else {
        let points = vec![
            center + egui::vec2(-glyph * 0.6, -glyph * 0.8),
            center + egui::vec2(glyph * 0.8, 0.0),
            center + egui::vec2(-glyph * 0.6, glyph * 0.8),
        ];
        painter.add(egui::Shape::convex_polygon(points, accent, Stroke::NONE));
    }
}

/// Prev/Next buttons, pagination bars and the slide counter.
pub fn footer(
    ui: &egui::Ui,
    rect: Rect,
    current: usize,
    slide_count: usize,
    scale: f32,
) -> Option<Command> {
    let painter = ui.painter();
    let fonts = Typography::DEFAULT;
    let mut command = None;

    let pad = egui::vec2(16.0 * scale, 8.0 * scale);
    let mut x = rect.left();
    for (id, text, fill, hover, target) in [
        ("prev", "\u{2190}  Prev", 0.1, 0.2, Command::Retreat),
        ("next", "Next  \u{2192}", 0.2, 0.3, Command::Advance),
    ] {
        let galley = painter.layout_job(tracked_job(
            text,
            fonts.small * 0.85 * scale,
            Color32::WHITE,
            0.3,
            f32::INFINITY,
        ));
        let button = Rect::from_min_size(
            egui::pos2(x, rect.center().y - (galley.size().y + pad.y * 2.0) / 2.0),
            galley.size() + pad * 2.0,
        );
        if pill_button(ui, id, button, fill, hover).clicked() {
            command = Some(target);
        }
        painter.galley_with_override_text_color(button.min + pad, galley, Color32::WHITE);
        x = button.right() + 12.0 * scale;
    }

    for (index, bar) in pagination_rects(rect, slide_count, scale)
        .into_iter()
        .enumerate()
    {
        let hit = bar.expand2(egui::vec2(PAGINATION_GAP / 2.0 * scale, 8.0 * scale));
        let response = ui
            .interact(hit, ui.id().with(("page", index)), egui::Sense::click())
            .on_hover_cursor(egui::CursorIcon::PointingHand);
        let fill = if index == current {
            Color32::WHITE
        } else if response.hovered() {
            ThemeStyle::text(0.4, 1.0)
        } else {
            ThemeStyle::text(0.2, 1.0)
        };
        painter.rect_filled(bar, bar.height() / 2.0, fill);
        if response.clicked() {
            command = Some(Command::Jump(index));
        }
    }

    let counter_color = ThemeStyle::text(0.4, 1.0);
    let counter = painter.layout_job(tracked_job(
        &counter_label(current, slide_count),
        fonts.small * 0.85 * scale,
        counter_color,
        0.3,
        f32::INFINITY,
    ));
    let pos = egui::pos2(
        rect.right() - counter.size().x,
        rect.center().y - counter.size().y / 2.0,
    );
    painter.galley_with_override_text_color(pos, counter, counter_color);

    command
}

/// One bar per slide, centered in the footer.
pub fn pagination_rects(rect: Rect, slide_count: usize, scale: f32) -> Vec<Rect> {
    let bar = PAGINATION_BAR * scale;
    let gap = PAGINATION_GAP * scale;
    let total = slide_count as f32 * bar.x + slide_count.saturating_sub(1) as f32 * gap;
    let left = rect.center().x - total / 2.0;
    (0..slide_count)
        .map(|i| {
            Rect::from_min_size(
                egui::pos2(left + i as f32 * (bar.x + gap), rect.center().y - bar.y / 2.0),
                bar,
            )
        })
        .collect()
}

fn pill_button(
    ui: &egui::Ui,
    id: &str,
    rect: Rect,
    fill: f32,
    hover_fill: f32,
) -> egui::Response {
    let response = ui
        .interact(rect, ui.id().with(id), egui::Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand);
    let strength = if response.hovered() { hover_fill } else { fill };
    ui.painter()
        .rect_filled(rect, rect.height() / 2.0, ThemeStyle::text(strength, 1.0));
    response
}

/// Keyboard reference, centered over the slide.
pub fn help_overlay(painter: &egui::Painter, screen: Rect, scale: f32) {
    let bg = ThemeStyle::with_opacity(theme::PAGE_BACKGROUND, 0.92);
    let text_color = ThemeStyle::text(0.9, 1.0);
    let key_color = ThemeStyle::with_opacity(theme::BRAND_LIGHT, 0.9);

    let padding = 24.0 * scale;
    let line_height = 32.0 * scale;
    let height = SHORTCUTS.len() as f32 * line_height + padding * 2.0 + 40.0 * scale;
    let width = 420.0 * scale;
    let panel = Rect::from_center_size(screen.center(), egui::vec2(width, height));

    painter.rect_filled(panel, 12.0 * scale, bg);
    painter.rect_stroke(
        panel,
        12.0 * scale,
        Stroke::new(scale.max(1.0), ThemeStyle::text(0.1, 1.0)),
        egui::StrokeKind::Inside,
    );

    let title = painter.layout_no_wrap(
        "Keyboard Shortcuts".to_string(),
        egui::FontId::proportional(20.0 * scale),
        text_color,
    );
    painter.galley(panel.min + egui::vec2(padding, padding), title, text_color);

    let mut y = panel.top() + padding + 40.0 * scale;
    for (key, description) in SHORTCUTS {
        let key_galley = painter.layout_no_wrap(
            key.to_string(),
            egui::FontId::monospace(15.0 * scale),
            key_color,
        );
        painter.galley(egui::pos2(panel.left() + padding, y), key_galley, key_color);

        let desc_galley = painter.layout_no_wrap(
            description.to_string(),
            egui::FontId::proportional(15.0 * scale),
            text_color,
        );
        painter.galley(
            egui::pos2(panel.left() + padding + 150.0 * scale, y),
            desc_galley,
            text_color,
        );
        y += line_height;
    }
}

/// Short confirmation near the bottom of the screen.
pub fn toast(painter: &egui::Painter, screen: Rect, message: &str, opacity: f32, scale: f32) {
    if opacity <= 0.0 {
        return;
    }
    let text_color = ThemeStyle::text(0.9, opacity);
    let bg = ThemeStyle::with_opacity(theme::BRAND_DARK, 0.9 * opacity);
    let galley = painter.layout_no_wrap(
        message.to_string(),
        egui::FontId::proportional(20.0 * scale),
        text_color,
    );
    let padding = 16.0 * scale;
    let size = galley.size() + egui::vec2(padding, padding) * 2.0;
    let rect = Rect::from_min_size(
        egui::pos2(
            screen.center().x - size.x / 2.0,
            screen.bottom() - 140.0 * scale - size.y,
        ),
        size,
    );
    painter.rect_filled(rect, 8.0 * scale, bg);
    painter.galley(rect.min + egui::vec2(padding, padding), galley, text_color);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_is_centered() {
        let rect = Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(1000.0, 40.0));
        let bars = pagination_rects(rect, 12, 1.0);
        assert_eq!(bars.len(), 12);
        let left = bars[0].left();
        let right = bars[11].right();
        assert!(((left + right) / 2.0 - 500.0).abs() < 1e-3);
        assert!((right - left - (12.0 * 32.0 + 11.0 * 8.0)).abs() < 1e-3);
    }

    #[test]
    fn test_pagination_bars_do_not_overlap() {
        let rect = Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(800.0, 40.0));
        let bars = pagination_rects(rect, 5, 0.5);
        for pair in bars.windows(2) {
            assert!(pair[0].right() < pair[1].left());
            assert_eq!(pair[0].height(), 4.0);
        }
    }

    #[test]
    fn test_single_slide_pagination() {
        let rect = Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(100.0, 40.0));
        let bars = pagination_rects(rect, 1, 1.0);
        assert_eq!(bars[0].center(), rect.center());
    }
}
