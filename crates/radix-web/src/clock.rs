#![forbid(unsafe_code)]

//! Frame clock fed by host timestamps.

use std::time::Duration;

/// Turns monotonic host timestamps (milliseconds, e.g. the argument of a
/// `requestAnimationFrame` callback) into frame deltas.
///
/// The first timestamp only establishes the origin. Timestamps that go
/// backwards, or are not finite, yield a zero delta and do not move the
/// clock.
#[derive(Debug, Default, Clone)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    #[must_use]
    pub const fn new() -> Self {
        Self { last_ms: None }
    }

    /// Delta since the previous timestamp.
    pub fn delta(&mut self, now_ms: f64) -> Duration {
        if !now_ms.is_finite() {
            return Duration::ZERO;
        }
        let Some(last) = self.last_ms else {
            self.last_ms = Some(now_ms);
            return Duration::ZERO;
        };
        if now_ms <= last {
            return Duration::ZERO;
        }
        self.last_ms = Some(now_ms);
        Duration::from_secs_f64((now_ms - last) / 1000.0)
    }

    /// Forget the origin; the next timestamp starts a new run.
    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_stamp_sets_origin() {
        let mut c = FrameClock::new();
        assert_eq!(c.delta(1000.0), Duration::ZERO);
        assert_eq!(c.delta(1016.0), Duration::from_millis(16));
    }

    #[test]
    fn backwards_and_nan_are_ignored() {
        let mut c = FrameClock::new();
        c.delta(500.0);
        assert_eq!(c.delta(400.0), Duration::ZERO);
        assert_eq!(c.delta(f64::NAN), Duration::ZERO);
        assert_eq!(c.delta(510.0), Duration::from_millis(10));
    }

    #[test]
    fn reset_restarts() {
        let mut c = FrameClock::new();
        c.delta(10.0);
        c.reset();
        assert_eq!(c.delta(5000.0), Duration::ZERO);
    }
}
