use std::f32::consts::{FRAC_PI_2, TAU};

use eframe::egui::{self, Color32, Pos2, Rect, Stroke};

use crate::render::transition::ease_in_out;
use crate::theme::{self, ThemeStyle, lerp_color};

/// Length of one orb pulse, in seconds.
pub const ORB_PERIOD: f32 = 6.0;
const ORB_DIAMETER: f32 = 620.0;
const ORB_TOP: f32 = -160.0;
const ORB_OPACITY: f32 = 0.6;

pub const CARD_RADIUS: f32 = 28.0;
const CORNER_SEGMENTS: usize = 8;
const DISC_SEGMENTS: usize = 64;

/// Vertical offset in reference pixels and opacity of the orb, `elapsed`
/// seconds into its loop.
pub fn orb_pulse(elapsed: f32) -> (f32, f32) {
    let phase = elapsed.rem_euclid(ORB_PERIOD) / ORB_PERIOD;
    let k = if phase < 0.5 {
        ease_in_out(phase * 2.0)
    } else {
        ease_in_out((1.0 - phase) * 2.0)
    };
    (-12.0 * k, 0.8 + 0.2 * k)
}

/// Page fill and the pulsing accent orb behind the card.
pub fn paint_page(
    painter: &egui::Painter,
    screen: Rect,
    style: &ThemeStyle,
    orb_elapsed: f32,
    scale: f32,
) {
    painter.rect_filled(screen, 0.0, theme::PAGE_BACKGROUND);

    let (dy, opacity) = orb_pulse(orb_elapsed);
    let radius = ORB_DIAMETER / 2.0 * scale;
    let center = egui::pos2(
        screen.center().x,
        screen.top() + (ORB_TOP + ORB_DIAMETER / 2.0 + dy) * scale,
    );
    let [from, to] = style.accent_soft;
    let core = lerp_color(from, to, 0.5).gamma_multiply(ORB_OPACITY * opacity);
    soft_disc(painter, center, radius, core, Color32::TRANSPARENT);
}

/// The slide card: glow, themed gradient, light blobs and hairline border.
pub fn paint_card(painter: &egui::Painter, card: Rect, style: &ThemeStyle, scale: f32) {
    let radius = CARD_RADIUS * scale;

    for (offset_y, blur, color) in [
        (10.0, 30.0, ThemeStyle::with_opacity(theme::BRAND, 0.25)),
        (4.0, 10.0, ThemeStyle::with_opacity(theme::BRAND_DARK, 0.25)),
    ] {
        let shadow = egui::Shadow {
            offset: [0, (offset_y * scale).round().clamp(0.0, 127.0) as i8],
            blur: (blur * scale).round().clamp(0.0, 255.0) as u8,
            spread: 0,
            color,
        };
        painter.add(shadow.as_shape(card, radius));
    }

    painter.add(egui::Shape::mesh(gradient_mesh(card, radius, &style.gradient)));

    let decor = painter.with_clip_rect(card);
    let blob = ThemeStyle::with_opacity(Color32::WHITE, 0.05);
    soft_disc(
        &decor,
        egui::pos2(
            card.left() - card.width() * 0.1 + 96.0 * scale,
            card.top() + card.height() * 0.1 + 96.0 * scale,
        ),
        150.0 * scale,
        blob,
        Color32::TRANSPARENT,
    );
    soft_disc(
        &decor,
        egui::pos2(
            card.right() + card.width() * 0.1 - 128.0 * scale,
            card.top() + card.height() * 0.3 + 128.0 * scale,
        ),
        200.0 * scale,
        blob,
        Color32::TRANSPARENT,
    );
    let diagonal = card.size().length();
    soft_disc(
        &decor,
        card.right_top(),
        diagonal * 0.55,
        ThemeStyle::with_opacity(Color32::WHITE, 0.12),
        Color32::TRANSPARENT,
    );

    painter.rect_stroke(
        card,
        radius,
        Stroke::new(scale.max(1.0), ThemeStyle::with_opacity(Color32::WHITE, 0.1)),
        egui::StrokeKind::Inside,
    );
}

/// Color along a top-left to bottom-right gradient with three even stops.
fn gradient_at(stops: &[Color32; 3], t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        lerp_color(stops[0], stops[1], t * 2.0)
    } else {
        lerp_color(stops[1], stops[2], t * 2.0 - 1.0)
    }
}

/// Outline of a rounded rectangle, clockwise from the top-left corner.
fn rounded_outline(rect: Rect, radius: f32, segments: usize) -> Vec<Pos2> {
    let radius = radius.min(rect.width() / 2.0).min(rect.height() / 2.0).max(0.0);
    let corners = [
        (egui::pos2(rect.left() + radius, rect.top() + radius), 2.0 * FRAC_PI_2),
        (egui::pos2(rect.right() - radius, rect.top() + radius), 3.0 * FRAC_PI_2),
        (egui::pos2(rect.right() - radius, rect.bottom() - radius), 0.0),
        (egui::pos2(rect.left() + radius, rect.bottom() - radius), FRAC_PI_2),
    ];
    let mut points = Vec::with_capacity(4 * (segments + 1));
    for (center, start) in corners {
        for i in 0..=segments {
            let angle = start + FRAC_PI_2 * i as f32 / segments as f32;
            points.push(center + radius * egui::vec2(angle.cos(), angle.sin()));
        }
    }
    points
}

/// Fan-triangulated rounded rect shaded with a diagonal three-stop gradient.
fn gradient_mesh(rect: Rect, radius: f32, stops: &[Color32; 3]) -> egui::Mesh {
    let position = |p: Pos2| {
        let u = (p.x - rect.left()) / rect.width().max(1.0);
        let v = (p.y - rect.top()) / rect.height().max(1.0);
        (u + v) / 2.0
    };

    let mut mesh = egui::Mesh::default();
    mesh.colored_vertex(rect.center(), gradient_at(stops, 0.5));
    let outline = rounded_outline(rect, radius, CORNER_SEGMENTS);
    for p in &outline {
        mesh.colored_vertex(*p, gradient_at(stops, position(*p)));
    }
    let n = outline.len() as u32;
    for i in 0..n {
        mesh.add_triangle(0, 1 + i, 1 + (i + 1) % n);
    }
    mesh
}

/// Disc fading from `core` at the center to `rim` at `radius`.
fn soft_disc(painter: &egui::Painter, center: Pos2, radius: f32, core: Color32, rim: Color32) {
    if radius <= 0.0 || core.a() == 0 {
        return;
    }
    let mut mesh = egui::Mesh::default();
    mesh.colored_vertex(center, core);
    for i in 0..DISC_SEGMENTS {
        let angle = TAU * i as f32 / DISC_SEGMENTS as f32;
        mesh.colored_vertex(center + radius * egui::vec2(angle.cos(), angle.sin()), rim);
    }
    let n = DISC_SEGMENTS as u32;
    for i in 0..n {
        mesh.add_triangle(0, 1 + i, 1 + (i + 1) % n);
    }
    painter.add(egui::Shape::mesh(mesh));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeName;

    #[test]
    fn test_orb_pulse_keyframes() {
        let (y, opacity) = orb_pulse(0.0);
        assert!(y.abs() < 1e-6);
        assert!((opacity - 0.8).abs() < 1e-6);

        let (y, opacity) = orb_pulse(3.0);
        assert!((y + 12.0).abs() < 1e-3);
        assert!((opacity - 1.0).abs() < 1e-3);

        let (y, _) = orb_pulse(ORB_PERIOD);
        assert!(y.abs() < 1e-6);
    }

    #[test]
    fn test_orb_pulse_is_symmetric() {
        let (a, _) = orb_pulse(1.5);
        let (b, _) = orb_pulse(4.5);
        assert!((a - b).abs() < 1e-3);
    }

    #[test]
    fn test_gradient_stops() {
        let stops = [Color32::RED, Color32::GREEN, Color32::BLUE];
        assert_eq!(gradient_at(&stops, 0.0), Color32::RED);
        assert_eq!(gradient_at(&stops, 0.5), Color32::GREEN);
        assert_eq!(gradient_at(&stops, 1.0), Color32::BLUE);
        assert_eq!(gradient_at(&stops, 7.0), Color32::BLUE);
    }

    #[test]
    fn test_rounded_outline_stays_inside_rect() {
        let rect = Rect::from_min_size(egui::pos2(10.0, 20.0), egui::vec2(300.0, 200.0));
        let outline = rounded_outline(rect, 28.0, 8);
        assert_eq!(outline.len(), 36);
        for p in outline {
            assert!(rect.expand(1e-3).contains(p), "{p:?}");
        }
    }

    #[test]
    fn test_rounded_outline_clamps_radius() {
        let rect = Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(40.0, 10.0));
        let outline = rounded_outline(rect, 100.0, 4);
        let top = outline.iter().map(|p| p.y).fold(f32::INFINITY, f32::min);
        let bottom = outline.iter().map(|p| p.y).fold(f32::NEG_INFINITY, f32::max);
        assert!(top >= -1e-3 && bottom <= 10.0 + 1e-3);
    }

    #[test]
    fn test_gradient_mesh_is_a_closed_fan() {
        let rect = Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(100.0, 50.0));
        let stops = ThemeName::Emerald.style().gradient;
        let mesh = gradient_mesh(rect, 10.0, &stops);
        let rim = 4 * (CORNER_SEGMENTS + 1);
        assert_eq!(mesh.vertices.len(), rim + 1);
        assert_eq!(mesh.indices.len(), rim * 3);
    }
}
