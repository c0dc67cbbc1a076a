use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use eframe::egui;

/// Upper bound on a downloaded image body.
const MAX_IMAGE_BYTES: u64 = 20 * 1024 * 1024;

enum Entry {
    Loading,
    Ready(egui::TextureHandle),
    Failed,
}

type Finished = Arc<Mutex<Vec<(String, Result<egui::ColorImage>)>>>;

/// Slide images keyed by source URL.
///
/// Lookups happen on the UI thread. A miss starts a download on the rayon pool;
/// decoded pixels come back through `finished` and are uploaded as textures on
/// a later lookup.
pub struct ImageCache {
    fetch_enabled: bool,
    entries: RefCell<HashMap<String, Entry>>,
    finished: Finished,
}

impl ImageCache {
    pub fn new(fetch_enabled: bool) -> Self {
        Self {
            fetch_enabled,
            entries: RefCell::new(HashMap::new()),
            finished: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Texture for `src`, or `None` while it is loading, failed, or fetching is off.
    pub fn get_or_load(&self, ctx: &egui::Context, src: &str) -> Option<egui::TextureHandle> {
        self.upload_finished(ctx);

        let mut entries = self.entries.borrow_mut();
        match entries.get(src) {
            Some(Entry::Ready(texture)) => return Some(texture.clone()),
            Some(Entry::Loading) | Some(Entry::Failed) => return None,
            None => {}
        }
        if !self.fetch_enabled {
            return None;
        }

        entries.insert(src.to_string(), Entry::Loading);
        self.spawn_fetch(ctx.clone(), src.to_string());
        None
    }

    /// Start downloading `src` ahead of time.
    pub fn prefetch(&self, ctx: &egui::Context, src: &str) {
        let _ = self.get_or_load(ctx, src);
    }

    fn spawn_fetch(&self, ctx: egui::Context, src: String) {
        let finished = Arc::clone(&self.finished);
        tracing::debug!(%src, "fetching slide image");
        rayon::spawn(move || {
            let result = fetch_image(&src);
            if let Ok(mut done) = finished.lock() {
                done.push((src, result));
            }
            ctx.request_repaint();
        });
    }

    fn upload_finished(&self, ctx: &egui::Context) {
        let done = match self.finished.lock() {
            Ok(mut done) if !done.is_empty() => std::mem::take(&mut *done),
            _ => return,
        };

        let mut entries = self.entries.borrow_mut();
        for (src, result) in done {
            let entry = match result {
                Ok(image) => {
                    tracing::debug!(%src, size = ?image.size, "slide image ready");
                    Entry::Ready(ctx.load_texture(&src, image, egui::TextureOptions::LINEAR))
                }
                Err(e) => {
                    tracing::warn!(%src, "slide image unavailable: {e:#}");
                    Entry::Failed
                }
            };
            entries.insert(src, entry);
        }
    }
}

fn fetch_image(src: &str) -> Result<egui::ColorImage> {
    let bytes = ureq::get(src)
        .call()
        .with_context(|| format!("Failed to request {src}"))?
        .body_mut()
        .with_config()
        .limit(MAX_IMAGE_BYTES)
        .read_to_vec()
        .with_context(|| format!("Failed to read body of {src}"))?;
    decode_image(&bytes)
}

fn decode_image(bytes: &[u8]) -> Result<egui::ColorImage> {
    let image = image::load_from_memory(bytes)
        .context("Unsupported image data")?
        .into_rgba8();
    let size = [image.width() as usize, image.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(
        size,
        image.as_flat_samples().as_slice(),
    ))
}

/// UV window that crops a texture of `tex_size` so it fills `frame` without
/// distortion, keeping the center.
pub fn cover_uv(tex_size: egui::Vec2, frame: egui::Rect) -> egui::Rect {
    if tex_size.x <= 0.0 || tex_size.y <= 0.0 || frame.width() <= 0.0 || frame.height() <= 0.0 {
        return egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
    }
    let tex_aspect = tex_size.x / tex_size.y;
    let frame_aspect = frame.width() / frame.height();
    if tex_aspect > frame_aspect {
        // Wider than the frame: crop left and right.
        let visible = frame_aspect / tex_aspect;
        let margin = (1.0 - visible) / 2.0;
        egui::Rect::from_min_max(egui::pos2(margin, 0.0), egui::pos2(1.0 - margin, 1.0))
    } else {
        let visible = tex_aspect / frame_aspect;
        let margin = (1.0 - visible) / 2.0;
        egui::Rect::from_min_max(egui::pos2(0.0, margin), egui::pos2(1.0, 1.0 - margin))
    }
}
