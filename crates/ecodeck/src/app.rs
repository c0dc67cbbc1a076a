use eframe::egui;
use std::time::{Duration, Instant};

use crate::config::{DefaultsConfig, MAX_INTERVAL_SECS, MIN_INTERVAL_SECS};
use crate::controller::{Command, Controller, DEFAULT_INTERVAL, Direction};
use crate::deck::Deck;
use crate::input::{self, Action};
use crate::render::chrome::{self, HeaderState};
use crate::render::image_cache::ImageCache;
use crate::render::transition::{ActiveTransition, SlideMotion, TransitionFrame, TransitionKind};
use crate::render::{self, PageLayout, background};
use crate::theme;

const TOAST_DURATION: f32 = 1.5;
const TOAST_FADE_START: f32 = 1.0;

/// Launch flags as given on the command line.
#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    pub windowed: bool,
    /// 1-indexed.
    pub slide: Option<usize>,
    pub autoplay: Option<bool>,
    /// Seconds.
    pub interval: Option<u64>,
    pub transition: Option<TransitionKind>,
    pub offline: bool,
}

/// Effective start-up settings after merging flags, config and defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchSettings {
    /// 0-indexed, always inside the deck.
    pub start_slide: usize,
    pub autoplay: bool,
    pub interval: Duration,
    pub transition: TransitionKind,
}

impl LaunchSettings {
    /// Flags win over config, config wins over built-in defaults.
    /// Out-of-range start slides are clamped to the deck.
    pub fn resolve(
        options: &LaunchOptions,
        defaults: Option<&DefaultsConfig>,
        slide_count: usize,
    ) -> Self {
        let start = options
            .slide
            .or_else(|| defaults.and_then(|d| d.start_slide))
            .unwrap_or(1);
        let autoplay = options
            .autoplay
            .or_else(|| defaults.and_then(|d| d.autoplay))
            .unwrap_or(false);
        let interval = options
            .interval
            .or_else(|| defaults.and_then(|d| d.interval).filter(|s| valid_interval(*s)))
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_INTERVAL);
        let transition = options
            .transition
            .or_else(|| {
                defaults
                    .and_then(|d| d.transition.as_deref())
                    .and_then(config_transition)
            })
            .unwrap_or(TransitionKind::Slide);

        Self {
            start_slide: start.saturating_sub(1).min(slide_count.saturating_sub(1)),
            autoplay,
            interval,
            transition,
        }
    }
}

/// Config intervals outside the accepted range are reported and ignored.
fn valid_interval(secs: u64) -> bool {
    let valid = (MIN_INTERVAL_SECS..=MAX_INTERVAL_SECS).contains(&secs);
    if !valid {
        tracing::warn!(
            "ignoring defaults.interval: {secs} is outside {MIN_INTERVAL_SECS}..={MAX_INTERVAL_SECS} seconds"
        );
    }
    valid
}

fn config_transition(name: &str) -> Option<TransitionKind> {
    let kind = TransitionKind::parse(name);
    if kind.is_none() {
        tracing::warn!("ignoring defaults.transition: unknown transition '{name}'");
    }
    kind
}

struct Toast {
    message: String,
    start: Instant,
}

impl Toast {
    fn new(message: String, now: Instant) -> Self {
        Self {
            message,
            start: now,
        }
    }

    fn opacity(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.start).as_secs_f32();
        if elapsed < TOAST_FADE_START {
            1.0
        } else if elapsed < TOAST_DURATION {
            1.0 - (elapsed - TOAST_FADE_START) / (TOAST_DURATION - TOAST_FADE_START)
        } else {
            0.0
        }
    }

    fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.start).as_secs_f32() >= TOAST_DURATION
    }
}

struct DeckApp {
    deck: Deck,
    controller: Controller,
    transition_kind: TransitionKind,
    transition: Option<ActiveTransition>,
    /// Slide whose content is on screen once no transition is running.
    displayed: usize,
    /// When `displayed` started entering; drives the content reveal.
    entered_at: Instant,
    /// Slide the header and background follow; tracks the controller directly.
    selected: usize,
    selected_at: Instant,
    started: Instant,
    image_cache: ImageCache,
    show_help: bool,
    toast: Option<Toast>,
}

impl DeckApp {
    fn new(deck: Deck, settings: &LaunchSettings, fetch_images: bool, now: Instant) -> Self {
        let mut controller =
            Controller::new(deck.len(), settings.interval).starting_at(settings.start_slide);
        controller.set_auto_play(settings.autoplay, now);
        let start = controller.current();

        Self {
            deck,
            controller,
            transition_kind: settings.transition,
            transition: Some(ActiveTransition::new(
                None,
                start,
                settings.transition,
                Direction::None,
                now,
            )),
            displayed: start,
            entered_at: now,
            selected: start,
            selected_at: now,
            started: now,
            image_cache: ImageCache::new(fetch_images),
            show_help: false,
            toast: None,
        }
    }

    fn apply(&mut self, command: Command, now: Instant) {
        self.controller.apply(command, now);
        if command == Command::ToggleAutoPlay {
            let message = if self.controller.is_auto_playing() {
                "Auto-play on"
            } else {
                "Auto-play off"
            };
            self.toast = Some(Toast::new(message.to_string(), now));
        }
        self.sync(now);
    }

    fn cycle_transition(&mut self, now: Instant) {
        self.transition_kind = self.transition_kind.next();
        tracing::debug!(kind = self.transition_kind.name(), "transition changed");
        self.toast = Some(Toast::new(
            format!("Transition: {}", self.transition_kind.name()),
            now,
        ));
    }

    /// Start or retarget the visual transition toward the controller's slide.
    fn sync(&mut self, now: Instant) {
        let target = self.controller.current();
        let direction = self.controller.direction();

        if target != self.selected {
            self.selected = target;
            self.selected_at = now;
        }

        match &mut self.transition {
            Some(t) => {
                if t.to != target {
                    t.retarget(target, direction, now);
                }
            }
            None if target != self.displayed => {
                self.transition = Some(ActiveTransition::new(
                    Some(self.displayed),
                    target,
                    self.transition_kind,
                    direction,
                    now,
                ));
            }
            None => {}
        }
    }

    fn finish_transition(&mut self, now: Instant) {
        if let Some(t) = &self.transition {
            if t.is_complete(now) {
                self.displayed = t.to;
                self.entered_at = t.enter_start();
                self.transition = None;
            }
        }
    }

    fn frame(&self, now: Instant) -> TransitionFrame {
        match &self.transition {
            Some(t) => t.frame(now),
            None => TransitionFrame {
                slide: self.displayed,
                motion: SlideMotion::REST,
                entered_for: Some(now.saturating_duration_since(self.entered_at).as_secs_f32()),
            },
        }
    }

    fn auto_progress(&self, now: Instant) -> Option<f32> {
        let remaining = self.controller.time_until_tick(now)?;
        let interval = self.controller.interval().as_secs_f32();
        Some(1.0 - remaining.as_secs_f32() / interval.max(f32::EPSILON))
    }
}

impl eframe::App for DeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        let slide_count = self.deck.len();

        let (actions, fullscreen) = ctx.input(|i| {
            (
                input::collect_actions(i, slide_count),
                i.viewport().fullscreen.unwrap_or(false),
            )
        });

        // Collected here and sent after input handling.
        let mut viewport_cmds: Vec<egui::ViewportCommand> = Vec::new();
        for action in actions {
            match action {
                Action::Deck(command) => self.apply(command, now),
                Action::ToggleFullscreen => {
                    viewport_cmds.push(egui::ViewportCommand::Fullscreen(!fullscreen));
                }
                Action::ToggleHelp => self.show_help = !self.show_help,
                Action::CycleTransition => self.cycle_transition(now),
                Action::Dismiss if self.show_help => self.show_help = false,
                Action::Dismiss | Action::Quit => {
                    viewport_cmds.push(egui::ViewportCommand::Close);
                }
            }
        }
        for cmd in viewport_cmds {
            ctx.send_viewport_cmd(cmd);
        }

        if self.controller.tick(now) > 0 {
            self.sync(now);
        }
        self.finish_transition(now);

        if self.toast.as_ref().is_some_and(|t| t.is_expired(now)) {
            self.toast = None;
        }

        let frame = self.frame(now);
        let shown = self.deck.get_slide(frame.slide);
        let selected = self.deck.get_slide(self.selected);
        let selected_style = selected.style();
        let mut clicked = None;

        egui::CentralPanel::default()
            .frame(egui::Frame::new().inner_margin(0.0))
            .show(ctx, |ui| {
                let screen = ui.max_rect();
                let scale = render::compute_scale(screen);
                let layout = PageLayout::compute(screen, scale);
                let painter = ui.painter();

                let orb_elapsed = now.saturating_duration_since(self.started).as_secs_f32();
                background::paint_page(painter, screen, &selected_style, orb_elapsed, scale);
                background::paint_card(painter, layout.card, &selected_style, scale);

                render::render_slide(
                    ui,
                    shown,
                    &shown.style(),
                    &layout,
                    frame.motion,
                    frame.entered_for,
                    &self.image_cache,
                    scale,
                );

                // Warm the cache for whatever comes next.
                let next = (self.controller.current() + 1) % slide_count;
                self.image_cache
                    .prefetch(ctx, self.deck.get_slide(next).image.src);

                let header = HeaderState {
                    eyebrow: selected.eyebrow,
                    since_selected: now.saturating_duration_since(self.selected_at).as_secs_f32(),
                    auto_playing: self.controller.is_auto_playing(),
                    auto_progress: self.auto_progress(now),
                };
                clicked = chrome::header(ui, layout.header, &header, scale).or(clicked);
                clicked = chrome::footer(
                    ui,
                    layout.footer,
                    self.controller.current(),
                    slide_count,
                    scale,
                )
                .or(clicked);

                if let Some(toast) = &self.toast {
                    chrome::toast(painter, screen, &toast.message, toast.opacity(now), scale);
                }
                if self.show_help {
                    chrome::help_overlay(painter, screen, scale);
                }
            });

        if let Some(command) = clicked {
            self.apply(command, now);
        }

        // The orb never stops pulsing, so every frame is an animation frame.
        ctx.request_repaint();
    }
}

/// Window icon: a brand disc with a light rim.
fn app_icon() -> egui::IconData {
    const SIZE: u32 = 64;
    let center = (SIZE as f32 - 1.0) / 2.0;
    let mut rgba = Vec::with_capacity((SIZE * SIZE * 4) as usize);
    for y in 0..SIZE {
        for x in 0..SIZE {
            let d = ((x as f32 - center).powi(2) + (y as f32 - center).powi(2)).sqrt();
            let color = if d <= center * 0.78 {
                theme::BRAND
            } else if d <= center {
                theme::BRAND_LIGHT
            } else {
                egui::Color32::TRANSPARENT
            };
            rgba.extend_from_slice(&color.to_array());
        }
    }
    egui::IconData {
        rgba,
        width: SIZE,
        height: SIZE,
    }
}

pub fn run(deck: Deck, options: LaunchOptions, defaults: Option<DefaultsConfig>) -> anyhow::Result<()> {
    let settings = LaunchSettings::resolve(&options, defaults.as_ref(), deck.len());
    tracing::info!(
        start_slide = settings.start_slide + 1,
        autoplay = settings.autoplay,
        interval_s = settings.interval.as_secs(),
        transition = settings.transition.name(),
        "starting presentation"
    );

    let title = deck.title();
    let viewport = if options.windowed {
        egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_title(title)
    } else {
        egui::ViewportBuilder::default()
            .with_fullscreen(true)
            .with_title(title)
    };

    let viewport = viewport.with_icon(std::sync::Arc::new(app_icon()));

    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    let fetch_images = !options.offline;
    eframe::run_native(
        title,
        native_options,
        Box::new(move |_cc| Ok(Box::new(DeckApp::new(deck, &settings, fetch_images, Instant::now())))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}
