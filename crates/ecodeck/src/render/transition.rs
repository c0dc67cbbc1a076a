use std::time::{Duration, Instant};

use crate::controller::Direction;

pub const EXIT_DURATION: f32 = 0.5;
pub const ENTER_DURATION: f32 = 0.6;

/// Horizontal travel of entering and exiting slides, in reference pixels.
const SLIDE_OFFSET: f32 = 120.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    Slide,
    Fade,
    None,
}

impl TransitionKind {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "slide" => Some(Self::Slide),
            "fade" => Some(Self::Fade),
            "none" => Some(Self::None),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Slide => "slide",
            Self::Fade => "fade",
            Self::None => "none",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Slide => Self::Fade,
            Self::Fade => Self::None,
            Self::None => Self::Slide,
        }
    }
}

/// CSS-style cubic Bézier easing through (0,0), (x1,y1), (x2,y2), (1,1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

impl CubicBezier {
    /// Fast start, long soft landing.
    pub const ENTER: CubicBezier = CubicBezier::new(0.16, 1.0, 0.3, 1.0);
    /// Slow start, sharp finish.
    pub const EXIT: CubicBezier = CubicBezier::new(0.7, 0.0, 0.84, 0.0);
    pub const EASE_OUT: CubicBezier = CubicBezier::new(0.0, 0.0, 0.58, 1.0);
    pub const EASE_IN_OUT: CubicBezier = CubicBezier::new(0.42, 0.0, 0.58, 1.0);

    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    fn sample(a1: f32, a2: f32, t: f32) -> f32 {
        let u = 1.0 - t;
        3.0 * u * u * t * a1 + 3.0 * u * t * t * a2 + t * t * t
    }

    fn sample_derivative(a1: f32, a2: f32, t: f32) -> f32 {
        let u = 1.0 - t;
        3.0 * u * u * a1 + 6.0 * u * t * (a2 - a1) + 3.0 * t * t * (1.0 - a2)
    }

    /// Parameter `t` whose x coordinate is `x`.
    fn solve_t(&self, x: f32) -> f32 {
        let mut t = x;
        for _ in 0..8 {
            let err = Self::sample(self.x1, self.x2, t) - x;
            if err.abs() < 1e-5 {
                return t;
            }
            let d = Self::sample_derivative(self.x1, self.x2, t);
            if d.abs() < 1e-6 {
                break;
            }
            t -= err / d;
            if !(0.0..=1.0).contains(&t) {
                break;
            }
        }

        // Newton stalled; x(t) is monotonic on [0, 1], so bisect.
        let (mut lo, mut hi) = (0.0f32, 1.0f32);
        t = x;
        for _ in 0..32 {
            let value = Self::sample(self.x1, self.x2, t);
            if (value - x).abs() < 1e-5 {
                break;
            }
            if value < x {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) / 2.0;
        }
        t
    }

    /// Eased progress for linear progress `x` in [0, 1].
    pub fn ease(&self, x: f32) -> f32 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        Self::sample(self.y1, self.y2, self.solve_t(x))
    }
}

/// Where and how visibly to draw a slide this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideMotion {
    /// Horizontal offset in reference pixels.
    pub offset_x: f32,
    pub opacity: f32,
    pub scale: f32,
}

impl SlideMotion {
    pub const REST: SlideMotion = SlideMotion {
        offset_x: 0.0,
        opacity: 1.0,
        scale: 1.0,
    };

    fn lerp(from: SlideMotion, to: SlideMotion, t: f32) -> SlideMotion {
        let mix = |a: f32, b: f32| a + (b - a) * t;
        SlideMotion {
            offset_x: mix(from.offset_x, to.offset_x),
            opacity: mix(from.opacity, to.opacity),
            scale: mix(from.scale, to.scale),
        }
    }

    /// Pose an entering slide starts from.
    pub fn enter_from(kind: TransitionKind, direction: Direction) -> SlideMotion {
        match kind {
            TransitionKind::Slide => SlideMotion {
                offset_x: if direction.sign() > 0.0 {
                    SLIDE_OFFSET
                } else {
                    -SLIDE_OFFSET
                },
                opacity: 0.0,
                scale: 0.95,
            },
            TransitionKind::Fade => SlideMotion {
                opacity: 0.0,
                ..Self::REST
            },
            TransitionKind::None => Self::REST,
        }
    }

    /// Pose an exiting slide ends at.
    pub fn exit_to(kind: TransitionKind, direction: Direction) -> SlideMotion {
        match kind {
            TransitionKind::Slide => SlideMotion {
                offset_x: if direction.sign() < 0.0 {
                    SLIDE_OFFSET
                } else {
                    -SLIDE_OFFSET
                },
                opacity: 0.0,
                scale: 0.98,
            },
            TransitionKind::Fade => SlideMotion {
                opacity: 0.0,
                ..Self::REST
            },
            TransitionKind::None => Self::REST,
        }
    }
}

/// What the renderer draws on a given frame of a transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionFrame {
    pub slide: usize,
    pub motion: SlideMotion,
    /// Seconds since the drawn slide began entering; `None` while it is leaving.
    pub entered_for: Option<f32>,
}

/// An exit-then-enter change of the displayed slide.
#[derive(Debug, Clone)]
pub struct ActiveTransition {
    /// Slide leaving the screen; `None` when there is nothing to exit.
    pub from: Option<usize>,
    pub to: usize,
    pub kind: TransitionKind,
    pub direction: Direction,
    start: Instant,
}

impl ActiveTransition {
    pub fn new(
        from: Option<usize>,
        to: usize,
        kind: TransitionKind,
        direction: Direction,
        now: Instant,
    ) -> Self {
        Self {
            from,
            to,
            kind,
            direction,
            start: now,
        }
    }

    fn exit_duration(&self) -> f32 {
        match (self.from, self.kind) {
            (None, _) | (_, TransitionKind::None) => 0.0,
            _ => EXIT_DURATION,
        }
    }

    fn enter_duration(&self) -> f32 {
        if self.kind == TransitionKind::None {
            0.0
        } else {
            ENTER_DURATION
        }
    }

    /// Instant the incoming slide starts entering.
    pub fn enter_start(&self) -> Instant {
        self.start + Duration::from_secs_f32(self.exit_duration())
    }

    pub fn is_complete(&self, now: Instant) -> bool {
        let elapsed = now.saturating_duration_since(self.start).as_secs_f32();
        elapsed >= self.exit_duration() + self.enter_duration()
    }

    pub fn is_exiting(&self, now: Instant) -> bool {
        self.from.is_some() && now < self.enter_start()
    }

    /// Point the transition at a newer target.
    ///
    /// While the old slide is still leaving, it keeps leaving and only the
    /// destination changes. Once the incoming slide is on its way in, that
    /// slide becomes the one to exit.
    pub fn retarget(&mut self, to: usize, direction: Direction, now: Instant) {
        if to == self.to {
            self.direction = direction;
            return;
        }
        if !self.is_exiting(now) {
            self.from = Some(self.to);
            self.start = now;
        }
        self.to = to;
        self.direction = direction;
    }

    pub fn frame(&self, now: Instant) -> TransitionFrame {
        let elapsed = now.saturating_duration_since(self.start).as_secs_f32();
        let exit = self.exit_duration();

        if let Some(from) = self.from {
            if elapsed < exit {
                let t = CubicBezier::EXIT.ease(elapsed / exit);
                let motion = SlideMotion::lerp(
                    SlideMotion::REST,
                    SlideMotion::exit_to(self.kind, self.direction),
                    t,
                );
                return TransitionFrame {
                    slide: from,
                    motion,
                    entered_for: None,
                };
            }
        }

        let entered_for = elapsed - exit;
        let duration = self.enter_duration();
        let motion = if duration <= 0.0 {
            SlideMotion::REST
        } else {
            let t = CubicBezier::ENTER.ease(entered_for / duration);
            SlideMotion::lerp(
                SlideMotion::enter_from(self.kind, self.direction),
                SlideMotion::REST,
                t,
            )
        };
        TransitionFrame {
            slide: self.to,
            motion,
            entered_for: Some(entered_for),
        }
    }
}

/// Per-element entrance of slide content, timed from when the slide enters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reveal {
    pub delay: f32,
    pub duration: f32,
    /// Starting offset in reference pixels.
    pub dx: f32,
    pub dy: f32,
    pub from_scale: f32,
    pub easing: CubicBezier,
}

impl Reveal {
    const fn new(delay: f32, duration: f32, dx: f32, dy: f32) -> Self {
        Self {
            delay,
            duration,
            dx,
            dy,
            from_scale: 1.0,
            easing: CubicBezier::EASE_OUT,
        }
    }

    pub const EYEBROW: Reveal = Reveal::new(0.0, 0.6, 0.0, 12.0).eased(CubicBezier::ENTER);
    pub const TITLE: Reveal = Reveal::new(0.1, 0.6, 0.0, 18.0).eased(CubicBezier::ENTER);
    pub const SUBTITLE: Reveal = Reveal::new(0.18, 0.6, 0.0, 20.0).eased(CubicBezier::ENTER);
    pub const DESCRIPTION: Reveal = Reveal::new(0.28, 0.6, 0.0, 0.0);
    pub const METRIC: Reveal = Reveal {
        from_scale: 0.9,
        ..Reveal::new(0.3, 0.5, 0.0, 0.0).eased(CubicBezier::ENTER)
    };
    pub const INSIGHT: Reveal = Reveal::new(0.0, 0.5, 0.0, 12.0);
    pub const QUOTE: Reveal = Reveal::new(0.2, 0.6, 0.0, 18.0);
    pub const CTA: Reveal = Reveal::new(0.25, 0.5, 0.0, 12.0);
    pub const FOOTER: Reveal = Reveal::new(0.35, 0.6, 0.0, 0.0);

    /// Bullets slide in from the left, staggered by position.
    pub fn bullet(index: usize) -> Reveal {
        Reveal::new(0.1 * index as f32, 0.4, -20.0, 0.0)
    }

    const fn eased(self, easing: CubicBezier) -> Self {
        Self { easing, ..self }
    }

    /// Eased progress in [0, 1]. `None` means fully shown.
    pub fn progress(&self, entered_for: Option<f32>) -> f32 {
        let Some(elapsed) = entered_for else {
            return 1.0;
        };
        let local = (elapsed - self.delay) / self.duration;
        self.easing.ease(local.clamp(0.0, 1.0))
    }

    /// (dx, dy, opacity, scale) for the element.
    pub fn pose(&self, entered_for: Option<f32>) -> (f32, f32, f32, f32) {
        let t = self.progress(entered_for);
        let rest = 1.0 - t;
        (
            self.dx * rest,
            self.dy * rest,
            t,
            self.from_scale + (1.0 - self.from_scale) * t,
        )
    }
}

pub fn ease_in_out(t: f32) -> f32 {
    CubicBezier::EASE_IN_OUT.ease(t)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(start: Instant, secs: f32) -> Instant {
        start + Duration::from_secs_f32(secs)
    }

    #[test]
    fn test_bezier_endpoints() {
        for curve in [CubicBezier::ENTER, CubicBezier::EXIT, CubicBezier::EASE_OUT] {
            assert_eq!(curve.ease(0.0), 0.0);
            assert_eq!(curve.ease(1.0), 1.0);
            assert_eq!(curve.ease(-3.0), 0.0);
            assert_eq!(curve.ease(4.0), 1.0);
        }
    }

    #[test]
    fn test_bezier_is_monotonic() {
        for curve in [CubicBezier::ENTER, CubicBezier::EXIT, CubicBezier::EASE_IN_OUT] {
            let mut prev = 0.0;
            for i in 1..=100 {
                let y = curve.ease(i as f32 / 100.0);
                assert!(y + 1e-4 >= prev, "{curve:?} dips at {i}");
                prev = y;
            }
        }
    }

    #[test]
    fn test_enter_curve_front_loads_motion() {
        assert!(CubicBezier::ENTER.ease(0.25) > 0.7);
        assert!(CubicBezier::EXIT.ease(0.5) < 0.2);
    }

    #[test]
    fn test_linear_bezier_is_identity() {
        let linear = CubicBezier::new(1.0 / 3.0, 1.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0);
        for i in 0..=10 {
            let x = i as f32 / 10.0;
            assert!((linear.ease(x) - x).abs() < 1e-3);
        }
    }

    #[test]
    fn test_forward_slide_exits_left_enters_from_right() {
        let start = Instant::now();
        let t = ActiveTransition::new(
            Some(0),
            1,
            TransitionKind::Slide,
            Direction::Forward,
            start,
        );

        let leaving = t.frame(at(start, 0.499));
        assert_eq!(leaving.slide, 0);
        assert!(leaving.motion.offset_x < -100.0);
        assert_eq!(leaving.entered_for, None);

        let arriving = t.frame(at(start, 0.5));
        assert_eq!(arriving.slide, 1);
        assert!((arriving.motion.offset_x - 120.0).abs() < 0.5);
        assert!(arriving.motion.opacity < 0.01);
        assert!((arriving.motion.scale - 0.95).abs() < 1e-3);

        let settled = t.frame(at(start, 1.2));
        assert_eq!(settled.motion, SlideMotion::REST);
        assert!(t.is_complete(at(start, 1.15)));
        assert!(!t.is_complete(at(start, 1.0)));
    }

    #[test]
    fn test_backward_slide_mirrors_offsets() {
        let start = Instant::now();
        let t = ActiveTransition::new(
            Some(3),
            2,
            TransitionKind::Slide,
            Direction::Backward,
            start,
        );
        assert!(t.frame(at(start, 0.49)).motion.offset_x > 90.0);
        assert!(t.frame(at(start, 0.5)).motion.offset_x < -119.0);
    }

    #[test]
    fn test_initial_entry_has_no_exit_phase() {
        let start = Instant::now();
        let t = ActiveTransition::new(None, 0, TransitionKind::Slide, Direction::None, start);
        let frame = t.frame(start);
        assert_eq!(frame.slide, 0);
        assert_eq!(frame.entered_for, Some(0.0));
        // Direction zero enters from the left.
        assert!(frame.motion.offset_x < 0.0);
        assert_eq!(t.enter_start(), start);
        assert!(t.is_complete(at(start, 0.65)));
    }

    #[test]
    fn test_none_kind_completes_immediately() {
        let start = Instant::now();
        let t = ActiveTransition::new(Some(0), 5, TransitionKind::None, Direction::Forward, start);
        assert!(t.is_complete(start));
        assert_eq!(t.frame(start).slide, 5);
        assert_eq!(t.frame(start).motion, SlideMotion::REST);
    }

    #[test]
    fn test_fade_keeps_position() {
        let start = Instant::now();
        let t = ActiveTransition::new(Some(0), 1, TransitionKind::Fade, Direction::Forward, start);
        let frame = t.frame(at(start, 0.3));
        assert_eq!(frame.motion.offset_x, 0.0);
        assert!(frame.motion.opacity < 1.0);
    }

    #[test]
    fn test_retarget_during_exit_keeps_leaving_slide() {
        let start = Instant::now();
        let mut t = ActiveTransition::new(
            Some(0),
            1,
            TransitionKind::Slide,
            Direction::Forward,
            start,
        );
        t.retarget(2, Direction::Forward, at(start, 0.2));
        assert_eq!((t.from, t.to), (Some(0), 2));
        assert_eq!(t.enter_start(), at(start, 0.5));
    }

    #[test]
    fn test_retarget_during_enter_restarts_from_incoming() {
        let start = Instant::now();
        let mut t = ActiveTransition::new(
            Some(0),
            1,
            TransitionKind::Slide,
            Direction::Forward,
            start,
        );
        let later = at(start, 0.8);
        t.retarget(0, Direction::Backward, later);
        assert_eq!((t.from, t.to), (Some(1), 0));
        assert_eq!(t.direction, Direction::Backward);
        assert!(t.is_exiting(later));
    }

    #[test]
    fn test_reveal_progress() {
        assert_eq!(Reveal::TITLE.progress(None), 1.0);
        assert_eq!(Reveal::TITLE.progress(Some(0.05)), 0.0);
        assert_eq!(Reveal::TITLE.progress(Some(0.8)), 1.0);
        let (dx, dy, opacity, scale) = Reveal::bullet(2).pose(Some(0.2));
        assert_eq!((dx, dy, opacity, scale), (-20.0, 0.0, 0.0, 1.0));
        let (_, _, _, scale) = Reveal::METRIC.pose(Some(0.3));
        assert!((scale - 0.9).abs() < 1e-6);
    }

    #[test]
    fn test_transition_kind_names() {
        for kind in [TransitionKind::Slide, TransitionKind::Fade, TransitionKind::None] {
            assert_eq!(TransitionKind::parse(kind.name()), Some(kind));
        }
        assert_eq!(TransitionKind::parse("bogus"), None);
        assert_eq!(TransitionKind::None.next(), TransitionKind::Slide);
    }
}
