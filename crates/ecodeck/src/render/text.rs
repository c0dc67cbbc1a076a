use std::sync::Arc;

use eframe::egui::{self, Color32, FontFamily, FontId, Pos2};

/// Wrapped paragraph of a single style.
pub fn paragraph_job(
    text: &str,
    font_size: f32,
    color: Color32,
    italic: bool,
    max_width: f32,
) -> egui::text::LayoutJob {
    let mut job = egui::text::LayoutJob::default();
    job.wrap.max_width = max_width;
    let format = egui::text::TextFormat {
        font_id: FontId::new(font_size, FontFamily::Proportional),
        color,
        italics: italic,
        ..Default::default()
    };
    job.append(text, 0.0, format);
    job
}

/// Uppercase label with extra letter spacing, given in ems.
pub fn tracked_job(
    text: &str,
    font_size: f32,
    color: Color32,
    tracking_em: f32,
    max_width: f32,
) -> egui::text::LayoutJob {
    let mut job = egui::text::LayoutJob::default();
    job.wrap.max_width = max_width;
    let format = egui::text::TextFormat {
        font_id: FontId::new(font_size, FontFamily::Proportional),
        color,
        extra_letter_spacing: tracking_em * font_size,
        ..Default::default()
    };
    job.append(&text.to_uppercase(), 0.0, format);
    job
}

/// Paint a galley laid out at full strength, faded to `opacity`.
pub fn paint_faded(
    painter: &egui::Painter,
    pos: Pos2,
    galley: Arc<egui::Galley>,
    color: Color32,
    opacity: f32,
) {
    if opacity <= 0.0 {
        return;
    }
    painter.galley_with_override_text_color(pos, galley, color.gamma_multiply(opacity));
}

/// Text of a quote wrapped in curly quotation marks, unless already quoted.
pub fn curly_quoted(text: &str) -> String {
    let trimmed = text.trim();
    let open = trimmed.starts_with('\u{201C}') || trimmed.starts_with('"');
    let close = trimmed.ends_with('\u{201D}') || trimmed.ends_with('"');
    if open && close && trimmed.chars().count() > 1 {
        return trimmed.to_string();
    }
    format!("\u{201C}{trimmed}\u{201D}")
}

/// Zero-padded `current / total` counter, both 1-indexed.
pub fn counter_label(current: usize, total: usize) -> String {
    format!("{:02} / {:02}", current + 1, total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_pads_to_two_digits() {
        assert_eq!(counter_label(0, 12), "01 / 12");
        assert_eq!(counter_label(11, 12), "12 / 12");
        assert_eq!(counter_label(99, 120), "100 / 120");
    }

    #[test]
    fn test_curly_quotes_added_once() {
        assert_eq!(curly_quoted("Refill, reuse."), "\u{201C}Refill, reuse.\u{201D}");
        assert_eq!(
            curly_quoted("\u{201C}Already quoted\u{201D}"),
            "\u{201C}Already quoted\u{201D}"
        );
        assert_eq!(curly_quoted("  padded "), "\u{201C}padded\u{201D}");
    }

    #[test]
    fn test_tracked_job_uppercases_and_spaces() {
        let job = tracked_job("Vision", 10.0, Color32::WHITE, 0.3, f32::INFINITY);
        assert_eq!(job.text, "VISION");
        assert!((job.sections[0].format.extra_letter_spacing - 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_paragraph_job_wraps_at_width() {
        let job = paragraph_job("hello", 20.0, Color32::WHITE, true, 300.0);
        assert_eq!(job.wrap.max_width, 300.0);
        assert!(job.sections[0].format.italics);
    }
}
