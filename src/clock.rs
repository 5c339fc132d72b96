use crate::app::Pacer;
use std::num::NonZeroU32;
use std::time::{Duration, Instant};

/// Paces the game loop at a fixed number of ticks per second.
///
/// Each call to [`Pacer::wait_for_tick()`] sleeps until one tick period has
/// passed since the previous call returned.  If the caller was slower than
/// that, it returns immediately.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Ticker {
    period: Duration,
    last_tick: Option<Instant>,
}

impl Ticker {
    pub(crate) fn new(ticks_per_second: NonZeroU32) -> Ticker {
        Ticker {
            period: Duration::from_secs(1) / ticks_per_second.get(),
            last_tick: None,
        }
    }

    pub(crate) fn period(&self) -> Duration {
        self.period
    }

    /// How long to sleep at `now` before the next tick is due
    fn remaining(&self, now: Instant) -> Duration {
        match self.last_tick {
            Some(last) => (last + self.period).saturating_duration_since(now),
            None => Duration::ZERO,
        }
    }
}

impl Pacer for Ticker {
    fn wait_for_tick(&mut self) {
        let wait = self.remaining(Instant::now());
        if !wait.is_zero() {
            std::thread::sleep(wait);
        }
        self.last_tick = Some(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, Duration::from_secs(1))]
    #[case(20, Duration::from_millis(50))]
    #[case(60, Duration::from_nanos(16_666_666))]
    fn test_period(#[case] tps: u32, #[case] period: Duration) {
        let ticker = Ticker::new(NonZeroU32::new(tps).unwrap());
        assert_eq!(ticker.period(), period);
    }

    #[test]
    fn first_tick_does_not_wait() {
        let ticker = Ticker::new(NonZeroU32::new(20).unwrap());
        assert_eq!(ticker.remaining(Instant::now()), Duration::ZERO);
    }

    #[test]
    fn remaining_counts_down_from_last_tick() {
        let mut ticker = Ticker::new(NonZeroU32::new(20).unwrap());
        let start = Instant::now();
        ticker.last_tick = Some(start);
        assert_eq!(ticker.remaining(start), Duration::from_millis(50));
        assert_eq!(
            ticker.remaining(start + Duration::from_millis(30)),
            Duration::from_millis(20)
        );
        assert_eq!(
            ticker.remaining(start + Duration::from_millis(80)),
            Duration::ZERO
        );
    }

    #[test]
    fn wait_for_tick_paces_calls() {
        let mut ticker = Ticker::new(NonZeroU32::new(100).unwrap());
        ticker.wait_for_tick();
        let start = Instant::now();
        ticker.wait_for_tick();
        ticker.wait_for_tick();
        assert!(start.elapsed() >= Duration::from_millis(15));
    }
}
