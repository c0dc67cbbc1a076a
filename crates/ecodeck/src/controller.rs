use std::time::{Duration, Instant};

use crate::timer::AutoPlayTimer;

pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(7);

/// Sign of the most recent navigation, used to pick transition motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Backward,
    #[default]
    None,
    Forward,
}

impl Direction {
    pub fn sign(self) -> f32 {
        match self {
            Self::Backward => -1.0,
            Self::None => 0.0,
            Self::Forward => 1.0,
        }
    }
}

/// Everything that can move the presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Advance,
    Retreat,
    Jump(usize),
    ToggleAutoPlay,
}

/// Slide index, navigation direction and auto-play for a deck of fixed length.
///
/// Auto-play is on exactly when a timer is armed. Dropping the controller
/// drops the timer, so no advance can fire after teardown.
#[derive(Debug)]
pub struct Controller {
    slide_count: usize,
    current: usize,
    direction: Direction,
    interval: Duration,
    auto_play: Option<AutoPlayTimer>,
}

impl Controller {
    pub fn new(slide_count: usize, interval: Duration) -> Self {
        assert!(slide_count > 0, "controller needs at least one slide");
        Self {
            slide_count,
            current: 0,
            direction: Direction::None,
            interval,
            auto_play: None,
        }
    }

    /// Start on `index` instead of the first slide. Direction stays `None`.
    pub fn starting_at(mut self, index: usize) -> Self {
        self.assert_in_range(index);
        self.current = index;
        self
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_auto_playing(&self) -> bool {
        self.auto_play.is_some()
    }

    pub fn advance(&mut self) {
        self.direction = Direction::Forward;
        self.current = (self.current + 1) % self.slide_count;
        tracing::debug!(slide = self.current, "advance");
    }

    pub fn retreat(&mut self) {
        self.direction = Direction::Backward;
        self.current = (self.current + self.slide_count - 1) % self.slide_count;
        tracing::debug!(slide = self.current, "retreat");
    }

    /// Go straight to `target`. Callers guarantee `target < slide_count()`.
    pub fn jump(&mut self, target: usize) {
        self.assert_in_range(target);
        self.direction = if target > self.current {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.current = target;
        tracing::debug!(slide = self.current, "jump");
    }

    /// Flip auto-play, arming or cancelling the timer. Returns the new state.
    pub fn toggle_auto_play(&mut self, now: Instant) -> bool {
        let enable = !self.is_auto_playing();
        self.set_auto_play(enable, now);
        enable
    }

    /// Turn auto-play on or off. Only an off-to-on change arms a new timer.
    pub fn set_auto_play(&mut self, enable: bool, now: Instant) {
        match (enable, self.auto_play.is_some()) {
            (true, false) => {
                let timer = AutoPlayTimer::arm(self.interval, now);
                tracing::info!(interval_ms = timer.interval().as_millis() as u64, "auto-play on");
                self.auto_play = Some(timer);
            }
            (false, true) => {
                self.auto_play = None;
                tracing::info!("auto-play off");
            }
            _ => {}
        }
    }

    pub fn apply(&mut self, command: Command, now: Instant) {
        match command {
            Command::Advance => self.advance(),
            Command::Retreat => self.retreat(),
            Command::Jump(target) => self.jump(target),
            Command::ToggleAutoPlay => {
                self.toggle_auto_play(now);
            }
        }
    }

    /// Fire one advance per auto-play interval elapsed by `now`.
    /// Returns the number of advances performed.
    pub fn tick(&mut self, now: Instant) -> usize {
        let due = self.auto_play.as_mut().map_or(0, |timer| timer.poll(now));
        for _ in 0..due {
            self.advance();
        }
        due
    }

    /// Time until the next auto-play advance, if auto-play is on.
    pub fn time_until_tick(&self, now: Instant) -> Option<Duration> {
        self.auto_play.as_ref().map(|timer| timer.remaining(now))
    }

    fn assert_in_range(&self, index: usize) {
        assert!(
            index < self.slide_count,
            "slide index {index} out of range for a deck of {}",
            self.slide_count
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::Deck;

    fn controller(n: usize) -> Controller {
        Controller::new(n, DEFAULT_INTERVAL)
    }

    #[test]
    fn test_initial_state() {
        let c = controller(12);
        assert_eq!(c.current(), 0);
        assert_eq!(c.direction(), Direction::None);
        assert!(!c.is_auto_playing());
        assert_eq!(c.time_until_tick(Instant::now()), None);
    }

    #[test]
    fn test_advance_n_times_is_cyclic() {
        for n in 1..=15 {
            let mut c = controller(n);
            for _ in 0..n {
                c.advance();
            }
            assert_eq!(c.current(), 0, "deck of {n}");
        }
    }

    #[test]
    fn test_retreat_n_times_returns_to_start() {
        for n in 1..=9 {
            for start in 0..n {
                let mut c = controller(n).starting_at(start);
                for _ in 0..n {
                    c.retreat();
                }
                assert_eq!(c.current(), start, "deck of {n} from {start}");
            }
        }
    }

    #[test]
    fn test_wraps_at_both_ends() {
        let mut c = controller(5).starting_at(4);
        c.advance();
        assert_eq!(c.current(), 0);
        assert_eq!(c.direction(), Direction::Forward);
        c.retreat();
        assert_eq!(c.current(), 4);
        assert_eq!(c.direction(), Direction::Backward);
    }

    #[test]
    fn test_jump_direction() {
        let mut c = controller(12).starting_at(5);
        c.jump(9);
        assert_eq!((c.current(), c.direction()), (9, Direction::Forward));
        c.jump(2);
        assert_eq!((c.current(), c.direction()), (2, Direction::Backward));
        c.jump(2);
        assert_eq!((c.current(), c.direction()), (2, Direction::Backward));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_jump_out_of_range_panics() {
        controller(3).jump(3);
    }

    #[test]
    fn test_builtin_deck_next_eleven_then_wrap() {
        let deck = Deck::builtin().unwrap();
        let mut c = controller(deck.len());
        let now = Instant::now();
        for _ in 0..11 {
            c.apply(Command::Advance, now);
        }
        assert_eq!(c.current(), 11);
        assert_eq!(deck.get_slide(c.current()).id, 12);
        c.apply(Command::Advance, now);
        assert_eq!(c.current(), 0);
        assert_eq!(deck.get_slide(c.current()).id, 1);
    }

    #[test]
    fn test_toggle_on_then_off_before_interval_never_advances() {
        let start = Instant::now();
        let mut c = controller(12);
        assert!(c.toggle_auto_play(start));
        assert_eq!(c.tick(start + Duration::from_secs(3)), 0);
        assert!(!c.toggle_auto_play(start + Duration::from_secs(4)));
        assert_eq!(c.tick(start + Duration::from_secs(60)), 0);
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn test_three_intervals_advance_exactly_three() {
        let start = Instant::now();
        let mut c = controller(12).starting_at(10);
        c.apply(Command::ToggleAutoPlay, start);
        let mut advanced = 0;
        for n in 1..=3 {
            advanced += c.tick(start + DEFAULT_INTERVAL * n);
            advanced += c.tick(start + DEFAULT_INTERVAL * n + Duration::from_millis(16));
        }
        assert_eq!(advanced, 3);
        assert_eq!(c.current(), (10 + 3) % 12);
        assert_eq!(c.direction(), Direction::Forward);
    }

    #[test]
    fn test_single_late_tick_catches_up() {
        let start = Instant::now();
        let mut c = controller(12);
        c.set_auto_play(true, start);
        assert_eq!(c.tick(start + DEFAULT_INTERVAL * 3), 3);
        assert_eq!(c.current(), 3);
    }

    #[test]
    fn test_long_pause_advances_once() {
        let start = Instant::now();
        let mut c = controller(12);
        c.set_auto_play(true, start);
        assert_eq!(c.tick(start + Duration::from_secs(3600)), 1);
        assert_eq!(c.current(), 1);
    }

    #[test]
    fn test_enabling_twice_keeps_original_deadline() {
        let start = Instant::now();
        let mut c = controller(12);
        c.set_auto_play(true, start);
        c.set_auto_play(true, start + Duration::from_secs(5));
        assert_eq!(
            c.time_until_tick(start + Duration::from_secs(5)),
            Some(Duration::from_secs(2))
        );
    }

    #[test]
    fn test_re_enabling_rearms_from_toggle_time() {
        let start = Instant::now();
        let mut c = controller(12);
        c.toggle_auto_play(start);
        c.toggle_auto_play(start + Duration::from_secs(6));
        let rearmed = start + Duration::from_secs(10);
        c.toggle_auto_play(rearmed);
        assert_eq!(c.tick(start + Duration::from_secs(14)), 0);
        assert_eq!(c.tick(rearmed + DEFAULT_INTERVAL), 1);
    }

    #[test]
    fn test_manual_navigation_does_not_touch_timer() {
        let start = Instant::now();
        let mut c = controller(12);
        c.toggle_auto_play(start);
        c.apply(Command::Retreat, start + Duration::from_secs(6));
        assert_eq!(c.current(), 11);
        assert_eq!(c.tick(start + DEFAULT_INTERVAL), 1);
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn test_direction_sign() {
        assert_eq!(Direction::Forward.sign(), 1.0);
        assert_eq!(Direction::Backward.sign(), -1.0);
        assert_eq!(Direction::None.sign(), 0.0);
    }
}
