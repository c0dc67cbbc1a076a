use std::sync::Arc;

use eframe::egui::{self, Color32, Pos2, Rect, Stroke, Vec2};

use crate::deck::Slide;
use crate::render::text::{curly_quoted, paint_faded, paragraph_job, tracked_job};
use crate::render::transition::Reveal;
use crate::theme::{ThemeStyle, Typography};

/// Smallest factor content is shrunk by to fit the card.
const MIN_FIT: f32 = 0.6;
const GROUP_GAP: f32 = 24.0;
const HEADING_GAP: f32 = 8.0;
const LIST_GAP: f32 = 16.0;
const PANEL_RADIUS: f32 = 16.0;
/// Narrowest article that still lays insights out in two columns.
const TWO_COLUMN_MIN_WIDTH: f32 = 520.0;

enum Item {
    Text {
        offset: Vec2,
        galley: Arc<egui::Galley>,
        color: Color32,
    },
    Panel {
        rect: Rect,
        radius: f32,
        fill: Color32,
        hover_fill: Option<Color32>,
        stroke: Option<Color32>,
    },
}

/// One independently revealed piece of the article.
struct Block {
    reveal: Reveal,
    gap_before: f32,
    size: Vec2,
    items: Vec<Item>,
    link: Option<&'static str>,
}

impl Block {
    fn text(reveal: Reveal, gap_before: f32, galley: Arc<egui::Galley>, color: Color32) -> Self {
        Self {
            reveal,
            gap_before,
            size: galley.size(),
            items: vec![Item::Text {
                offset: Vec2::ZERO,
                galley,
                color,
            }],
            link: None,
        }
    }
}

struct Palette {
    strong: Color32,
    soft: Color32,
    muted: Color32,
    faint: Color32,
    hairline: Color32,
    footer: Color32,
    glass: Color32,
    lift: Color32,
}

impl Palette {
    fn new(style: &ThemeStyle) -> Self {
        Self {
            strong: ThemeStyle::text(1.0, 1.0),
            soft: ThemeStyle::text(0.8, 1.0),
            muted: ThemeStyle::text(0.7, 1.0),
            faint: ThemeStyle::text(0.5, 1.0),
            hairline: ThemeStyle::text(0.1, 1.0),
            footer: ThemeStyle::text(0.4, 1.0),
            glass: style.glass,
            lift: ThemeStyle::text(0.1, 1.0),
        }
    }
}

/// Draw the text column of a slide inside `rect`.
///
/// Content that does not fit is shrunk, down to `MIN_FIT`, before it is
/// allowed to overflow. The footer note is pinned to the bottom.
#[allow(clippy::too_many_arguments)]
pub fn render(
    ui: &egui::Ui,
    painter: &egui::Painter,
    slide: &Slide,
    style: &ThemeStyle,
    rect: Rect,
    opacity: f32,
    entered_for: Option<f32>,
    scale: f32,
) {
    let palette = Palette::new(style);

    let mut fit = 1.0;
    let (mut blocks, mut footer) = build_blocks(painter, slide, &palette, style, rect.width(), scale);
    let needed = stacked_height(&blocks, scale) + footer_height(&footer, scale);
    if needed > rect.height() && needed > 0.0 {
        fit = (rect.height() / needed).clamp(MIN_FIT, 1.0);
        (blocks, footer) =
            build_blocks(painter, slide, &palette, style, rect.width(), scale * fit);
    }
    let scale = scale * fit;

    let mut y = rect.top();
    for block in &blocks {
        y += block.gap_before * scale;
        paint_block(ui, painter, slide.id, block, rect.left(), y, opacity, entered_for, scale);
        y += block.size.y;
    }

    if let Some(block) = footer {
        let top = (rect.bottom() - block.size.y).max(y + GROUP_GAP * scale);
        paint_block(ui, painter, slide.id, &block, rect.left(), top, opacity, entered_for, scale);
    }
}

fn stacked_height(blocks: &[Block], scale: f32) -> f32 {
    blocks
        .iter()
        .map(|b| b.gap_before * scale + b.size.y)
        .sum()
}

fn footer_height(footer: &Option<Block>, scale: f32) -> f32 {
    footer
        .as_ref()
        .map_or(0.0, |b| GROUP_GAP * scale + b.size.y)
}

fn build_blocks(
    painter: &egui::Painter,
    slide: &Slide,
    palette: &Palette,
    style: &ThemeStyle,
    width: f32,
    scale: f32,
) -> (Vec<Block>, Option<Block>) {
    let fonts = Typography::DEFAULT;
    let size = |s: f32| s * scale;
    let layout = |job| painter.layout_job(job);
    let mut blocks = Vec::new();

    blocks.push(Block::text(
        Reveal::TITLE,
        0.0,
        layout(paragraph_job(slide.title, size(fonts.title), palette.strong, false, width)),
        palette.strong,
    ));
    if let Some(subtitle) = slide.subtitle {
        blocks.push(Block::text(
            Reveal::SUBTITLE,
            HEADING_GAP,
            layout(paragraph_job(subtitle, size(fonts.subtitle), palette.soft, false, width)),
            palette.soft,
        ));
    }
    if let Some(description) = slide.description {
        blocks.push(Block::text(
            Reveal::DESCRIPTION,
            HEADING_GAP,
            layout(paragraph_job(
                description,
                size(fonts.description),
                palette.muted,
                false,
                width,
            )),
            palette.muted,
        ));
    }

    if let Some(metric) = slide.metric {
        let pad = egui::vec2(size(20.0), size(16.0));
        let label = layout(tracked_job(
            metric.label,
            size(fonts.small),
            palette.muted,
            0.3,
            width - pad.x * 2.0,
        ));
        let value = layout(paragraph_job(
            metric.value,
            size(fonts.body),
            palette.strong,
            false,
            width - pad.x * 2.0,
        ));
        let inner = egui::vec2(
            label.size().x.max(value.size().x),
            label.size().y + size(4.0) + value.size().y,
        );
        let panel = Rect::from_min_size(Pos2::ZERO, inner + pad * 2.0);
        let value_offset = pad + egui::vec2(0.0, label.size().y + size(4.0));
        blocks.push(Block {
            reveal: Reveal::METRIC,
            gap_before: GROUP_GAP,
            size: panel.size(),
            items: vec![
                panel_item(panel, size(PANEL_RADIUS), palette.lift, None),
                Item::Text {
                    offset: pad,
                    galley: label,
                    color: palette.muted,
                },
                Item::Text {
                    offset: value_offset,
                    galley: value,
                    color: palette.strong,
                },
            ],
            link: None,
        });
    }

    for (index, bullet) in slide.bullets.iter().enumerate() {
        let pad = size(16.0);
        let label = layout(paragraph_job(
            bullet.label,
            size(fonts.body),
            palette.strong,
            false,
            width - pad * 2.0,
        ));
        let mut items = Vec::new();
        let mut height = label.size().y;
        let mut texts = vec![(egui::vec2(pad, pad), label, palette.strong)];
        if let Some(detail) = bullet.detail {
            let detail = layout(paragraph_job(
                detail,
                size(fonts.detail),
                palette.muted,
                false,
                width - pad * 2.0,
            ));
            let offset = egui::vec2(pad, pad + height + size(4.0));
            height += size(4.0) + detail.size().y;
            texts.push((offset, detail, palette.muted));
        }
        let panel = Rect::from_min_size(Pos2::ZERO, egui::vec2(width, height + pad * 2.0));
        items.push(panel_item(panel, size(PANEL_RADIUS), palette.glass, Some(palette.hairline)));
        items.extend(texts.into_iter().map(|(offset, galley, color)| Item::Text {
            offset,
            galley,
            color,
        }));
        blocks.push(Block {
            reveal: Reveal::bullet(index),
            gap_before: if index == 0 { GROUP_GAP } else { LIST_GAP },
            size: panel.size(),
            items,
            link: None,
        });
    }

    let columns = if width >= size(TWO_COLUMN_MIN_WIDTH) { 2 } else { 1 };
    let gap = size(16.0);
    let cell_width = (width - gap * (columns - 1) as f32) / columns as f32;
    for (row, pair) in slide.insights.chunks(columns).enumerate() {
        let pad = size(16.0);
        let laid_out: Vec<_> = pair
            .iter()
            .map(|insight| {
                let headline = layout(paragraph_job(
                    insight.headline,
                    size(fonts.detail),
                    palette.muted,
                    false,
                    cell_width - pad * 2.0,
                ));
                let highlight = layout(paragraph_job(
                    insight.highlight,
                    size(fonts.body * 1.1),
                    palette.strong,
                    false,
                    cell_width - pad * 2.0,
                ));
                (headline, highlight)
            })
            .collect();
        let row_height = laid_out
            .iter()
            .map(|(h, v)| h.size().y + size(8.0) + v.size().y)
            .fold(0.0, f32::max)
            + pad * 2.0;

        let mut items = Vec::new();
        for (col, (headline, highlight)) in laid_out.into_iter().enumerate() {
            let x = col as f32 * (cell_width + gap);
            let cell = Rect::from_min_size(egui::pos2(x, 0.0), egui::vec2(cell_width, row_height));
            items.push(panel_item(cell, size(PANEL_RADIUS), palette.glass, Some(palette.hairline)));
            let highlight_offset = egui::vec2(x + pad, pad + headline.size().y + size(8.0));
            items.push(Item::Text {
                offset: egui::vec2(x + pad, pad),
                galley: headline,
                color: palette.muted,
            });
            items.push(Item::Text {
                offset: highlight_offset,
                galley: highlight,
                color: palette.strong,
            });
        }
        blocks.push(Block {
            reveal: Reveal::INSIGHT,
            gap_before: if row == 0 { GROUP_GAP } else { LIST_GAP },
            size: egui::vec2(width, row_height),
            items,
            link: None,
        });
    }

    if let Some(quote) = slide.quote {
        let pad = size(24.0);
        let body = layout(paragraph_job(
            &curly_quoted(quote.text),
            size(fonts.description),
            palette.soft,
            true,
            width - pad * 2.0,
        ));
        let source = layout(tracked_job(
            quote.source,
            size(fonts.small),
            palette.faint,
            0.3,
            width - pad * 2.0,
        ));
        let height = body.size().y + size(12.0) + source.size().y + pad * 2.0;
        let panel = Rect::from_min_size(Pos2::ZERO, egui::vec2(width, height));
        let bar = Rect::from_min_size(
            egui::pos2(0.0, pad),
            egui::vec2(size(4.0), height - pad * 2.0),
        );
        let source_offset = egui::vec2(pad, pad + body.size().y + size(12.0));
        blocks.push(Block {
            reveal: Reveal::QUOTE,
            gap_before: GROUP_GAP,
            size: panel.size(),
            items: vec![
                panel_item(panel, size(PANEL_RADIUS), palette.glass, Some(palette.hairline)),
                panel_item(bar, size(2.0), style.accent, None),
                Item::Text {
                    offset: egui::vec2(pad, pad),
                    galley: body,
                    color: palette.soft,
                },
                Item::Text {
                    offset: source_offset,
                    galley: source,
                    color: palette.faint,
                },
            ],
            link: None,
        });
    }

    if let Some(cta) = slide.cta {
        let pad = egui::vec2(size(24.0), size(12.0));
        let label = layout(tracked_job(
            &format!("{}  \u{2192}", cta.label),
            size(fonts.small),
            palette.strong,
            0.3,
            f32::INFINITY,
        ));
        let pill = Rect::from_min_size(Pos2::ZERO, label.size() + pad * 2.0);
        blocks.push(Block {
            reveal: Reveal::CTA,
            gap_before: GROUP_GAP,
            size: pill.size(),
            items: vec![
                Item::Panel {
                    rect: pill,
                    radius: pill.height() / 2.0,
                    fill: ThemeStyle::text(0.2, 1.0),
                    hover_fill: Some(ThemeStyle::text(0.3, 1.0)),
                    stroke: None,
                },
                Item::Text {
                    offset: pad,
                    galley: label,
                    color: palette.strong,
                },
            ],
            link: Some(cta.link),
        });
    }

    let footer = slide.footer_note.map(|note| {
        Block::text(
            Reveal::FOOTER,
            0.0,
            layout(tracked_job(
                note,
                size(fonts.small * 0.87),
                palette.footer,
                0.4,
                width,
            )),
            palette.footer,
        )
    });

    (blocks, footer)
}

fn panel_item(rect: Rect, radius: f32, fill: Color32, stroke: Option<Color32>) -> Item {
    Item::Panel {
        rect,
        radius,
        fill,
        hover_fill: None,
        stroke,
    }
}

#[allow(clippy::too_many_arguments)]
fn paint_block(
    ui: &egui::Ui,
    painter: &egui::Painter,
    slide_id: u32,
    block: &Block,
    left: f32,
    top: f32,
    opacity: f32,
    entered_for: Option<f32>,
    scale: f32,
) {
    let (dx, dy, reveal_opacity, grow) = block.reveal.pose(entered_for);
    let alpha = opacity * reveal_opacity;
    if alpha <= 0.0 {
        return;
    }
    let origin = egui::pos2(left + dx * scale, top + dy * scale);
    let pivot = origin + block.size / 2.0;
    let place = |p: Pos2| pivot + (p.to_vec2() + origin.to_vec2() - pivot.to_vec2()) * grow;

    let hovered = block.link.is_some_and(|link| {
        let hit = Rect::from_min_size(origin, block.size);
        // Links on a slide that is leaving are inert.
        if entered_for.is_none() {
            return false;
        }
        let response = ui
            .interact(hit, ui.id().with(("cta", slide_id)), egui::Sense::click())
            .on_hover_cursor(egui::CursorIcon::PointingHand);
        if response.clicked() {
            tracing::info!(%link, "opening call to action");
            ui.ctx().open_url(egui::OpenUrl::new_tab(link));
        }
        response.hovered()
    });

    for item in &block.items {
        match item {
            Item::Panel {
                rect,
                radius,
                fill,
                hover_fill,
                stroke,
            } => {
                let rect = Rect::from_min_max(place(rect.min), place(rect.max));
                let fill = match hover_fill {
                    Some(hover) if hovered => *hover,
                    _ => *fill,
                };
                painter.rect_filled(rect, *radius * grow, fill.gamma_multiply(alpha));
                if let Some(stroke) = stroke {
                    painter.rect_stroke(
                        rect,
                        *radius * grow,
                        Stroke::new(scale.max(1.0), stroke.gamma_multiply(alpha)),
                        egui::StrokeKind::Inside,
                    );
                }
            }
            Item::Text {
                offset,
                galley,
                color,
            } => {
                let pos = place(Pos2::ZERO + *offset);
                paint_faded(painter, pos, galley.clone(), *color, alpha);
            }
        }
    }
}
