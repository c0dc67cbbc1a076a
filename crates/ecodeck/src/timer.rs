use std::time::{Duration, Instant};

/// Shortest interval the timer accepts. Guards `poll` against a zero period.
const MIN_INTERVAL: Duration = Duration::from_millis(10);

/// Most ticks a single late poll replays. Beyond this the timer resyncs to
/// `now` and reports one tick, so a window restored after a long pause does
/// not spin through the deck.
const MAX_CATCH_UP_TICKS: usize = 3;

/// A repeating auto-play deadline.
///
/// The timer is armed by constructing it and cancelled by dropping it; the
/// owner polls it with the current time and receives the number of intervals
/// that elapsed since the last poll. Deadlines advance by whole intervals from
/// the arming instant, so moderately late polls neither drop nor duplicate
/// ticks.
#[derive(Debug, Clone)]
pub struct AutoPlayTimer {
    interval: Duration,
    next_fire: Instant,
}

impl AutoPlayTimer {
    pub fn arm(interval: Duration, now: Instant) -> Self {
        let interval = interval.max(MIN_INTERVAL);
        Self {
            interval,
            next_fire: now + interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Number of ticks due at `now`. Each returned tick is consumed.
    pub fn poll(&mut self, now: Instant) -> usize {
        if now < self.next_fire {
            return 0;
        }
        let overdue = now.duration_since(self.next_fire);
        let ticks = overdue.as_nanos() / self.interval.as_nanos() + 1;
        if ticks > MAX_CATCH_UP_TICKS as u128 {
            self.next_fire = now + self.interval;
            return 1;
        }
        self.next_fire += self.interval * ticks as u32;
        ticks as usize
    }

    /// Time left before the next tick.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.next_fire.saturating_duration_since(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEVEN: Duration = Duration::from_secs(7);

    #[test]
    fn test_no_tick_before_interval() {
        let start = Instant::now();
        let mut timer = AutoPlayTimer::arm(SEVEN, start);
        assert_eq!(timer.poll(start), 0);
        assert_eq!(timer.poll(start + Duration::from_millis(6999)), 0);
    }

    #[test]
    fn test_tick_exactly_at_interval() {
        let start = Instant::now();
        let mut timer = AutoPlayTimer::arm(SEVEN, start);
        assert_eq!(timer.poll(start + SEVEN), 1);
        assert_eq!(timer.poll(start + SEVEN), 0);
    }

    #[test]
    fn test_each_interval_ticks_once() {
        let start = Instant::now();
        let mut timer = AutoPlayTimer::arm(SEVEN, start);
        let total: usize = (1..=3)
            .map(|n| timer.poll(start + SEVEN * n + Duration::from_millis(5)))
            .sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn test_late_poll_reports_every_missed_tick() {
        let start = Instant::now();
        let mut timer = AutoPlayTimer::arm(SEVEN, start);
        assert_eq!(timer.poll(start + Duration::from_millis(21_500)), 3);
        // Next deadline stays on the original grid.
        assert_eq!(
            timer.remaining(start + Duration::from_millis(21_500)),
            Duration::from_millis(6_500)
        );
    }

    #[test]
    fn test_long_pause_resyncs_instead_of_replaying() {
        let start = Instant::now();
        let mut timer = AutoPlayTimer::arm(SEVEN, start);
        let back = start + Duration::from_secs(3600);
        assert_eq!(timer.poll(back), 1);
        assert_eq!(timer.remaining(back), SEVEN);
        assert_eq!(timer.poll(back + SEVEN), 1);
    }

    #[test]
    fn test_remaining_counts_down() {
        let start = Instant::now();
        let timer = AutoPlayTimer::arm(SEVEN, start);
        assert_eq!(timer.remaining(start), SEVEN);
        assert_eq!(timer.remaining(start + Duration::from_secs(5)), Duration::from_secs(2));
        assert_eq!(timer.remaining(start + Duration::from_secs(9)), Duration::ZERO);
    }

    #[test]
    fn test_zero_interval_is_clamped() {
        let start = Instant::now();
        let mut timer = AutoPlayTimer::arm(Duration::ZERO, start);
        assert_eq!(timer.interval(), MIN_INTERVAL);
        assert_eq!(timer.poll(start + Duration::from_millis(25)), 2);
    }
}
