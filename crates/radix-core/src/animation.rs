#![forbid(unsafe_code)]

//! Fixed-tick tweening.
//!
//! Animations advance in whole ticks of a configurable "time frame"
//! (default 10 ms). The host feeds wall-clock deltas through
//! [`FixedTicker::accumulate`]; every complete frame becomes one tick with
//! `elapsed = count * frame`. A [`TweenSet`] drives several channels from a
//! single ticker so that, for example, width, height and scale stay
//! frame-synchronized during a modal resize.
//!
//! # Invariants
//!
//! 1. Tick numbers are strictly increasing within one animation.
//! 2. While `elapsed <= duration` each channel is sampled from its easing
//!    curve; the first tick with `elapsed > duration` writes every channel's
//!    exact target and ends the animation.
//! 3. A finished [`TweenSet`] never calls its sink again.
//!
//! # Failure Modes
//!
//! - Zero frame length: clamped to one millisecond so accumulation always
//!   terminates.
//! - Zero duration: the first tick is already past the end and snaps.

pub mod easing;

pub use easing::{BACK_OVERSHOOT, Easing, UnknownEasing};

use std::time::Duration;

/// Default tick interval.
pub const DEFAULT_TIME_FRAME: Duration = Duration::from_millis(10);

const MIN_FRAME: Duration = Duration::from_millis(1);

/// Result of advancing a cooperative animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// More ticks are needed.
    Continue,
    /// The animation wrote its final value.
    Done,
}

impl Step {
    /// Whether the animation has finished.
    #[inline]
    #[must_use]
    pub const fn is_done(self) -> bool {
        matches!(self, Self::Done)
    }
}

// ---------------------------------------------------------------------------
// FixedTicker
// ---------------------------------------------------------------------------

/// Converts host deltas into whole ticks of a fixed frame length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedTicker {
    frame: Duration,
    pending: Duration,
    count: u32,
}

impl FixedTicker {
    /// Create a ticker with the given frame length.
    #[must_use]
    pub fn new(frame: Duration) -> Self {
        Self {
            frame: frame.max(MIN_FRAME),
            pending: Duration::ZERO,
            count: 0,
        }
    }

    /// Frame length.
    #[inline]
    #[must_use]
    pub const fn frame(&self) -> Duration {
        self.frame
    }

    /// Ticks taken so far.
    #[inline]
    #[must_use]
    pub const fn count(&self) -> u32 {
        self.count
    }

    /// Elapsed animation time, `count * frame`.
    #[inline]
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.frame.saturating_mul(self.count)
    }

    /// Add a host delta and return how many ticks became due.
    pub fn accumulate(&mut self, dt: Duration) -> u32 {
        self.pending = self.pending.saturating_add(dt);
        let due = self.pending.as_nanos() / self.frame.as_nanos();
        let due = u32::try_from(due).unwrap_or(u32::MAX);
        self.pending = self.pending.saturating_sub(self.frame.saturating_mul(due));
        due
    }

    /// Take one tick and return the new elapsed time.
    pub fn tick(&mut self) -> Duration {
        self.count = self.count.saturating_add(1);
        self.elapsed()
    }

    /// Restart from tick zero with nothing pending.
    pub fn reset(&mut self) {
        self.pending = Duration::ZERO;
        self.count = 0;
    }
}

impl Default for FixedTicker {
    fn default() -> Self {
        Self::new(DEFAULT_TIME_FRAME)
    }
}

// ---------------------------------------------------------------------------
// Tween
// ---------------------------------------------------------------------------

/// One eased scalar channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub easing: Easing,
}

impl Tween {
    #[must_use]
    pub const fn new(from: f64, to: f64, easing: Easing) -> Self {
        Self { from, to, easing }
    }

    /// `to - from`.
    #[inline]
    #[must_use]
    pub fn delta(&self) -> f64 {
        self.to - self.from
    }

    /// Value at `elapsed` over `duration`.
    #[must_use]
    pub fn sample(&self, elapsed: Duration, duration: Duration) -> f64 {
        self.easing.sample(
            as_millis_f64(elapsed),
            self.from,
            self.delta(),
            as_millis_f64(duration),
        )
    }
}

/// Duration in fractional milliseconds.
#[inline]
#[must_use]
pub fn as_millis_f64(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}

// ---------------------------------------------------------------------------
// TweenSet
// ---------------------------------------------------------------------------

/// Channel values produced by one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenFrame<const N: usize> {
    pub values: [f64; N],
    pub tick: u32,
    pub elapsed: Duration,
    /// Set on the final tick, whose values are the exact targets.
    pub last: bool,
}

/// `N` channels sharing one [`FixedTicker`].
#[derive(Debug, Clone)]
pub struct TweenSet<const N: usize> {
    channels: [Tween; N],
    duration: Duration,
    ticker: FixedTicker,
    current: [f64; N],
    done: bool,
}

impl<const N: usize> TweenSet<N> {
    /// Create a set that starts at each channel's `from`.
    #[must_use]
    pub fn new(channels: [Tween; N], duration: Duration, frame: Duration) -> Self {
        Self {
            current: channels.map(|c| c.from),
            channels,
            duration,
            ticker: FixedTicker::new(frame),
            done: false,
        }
    }

    #[must_use]
    pub fn channels(&self) -> &[Tween; N] {
        &self.channels
    }

    #[must_use]
    pub const fn duration(&self) -> Duration {
        self.duration
    }

    /// Most recently emitted values (the starts before the first tick).
    #[must_use]
    pub fn current(&self) -> [f64; N] {
        self.current
    }

    /// Exact end values.
    #[must_use]
    pub fn targets(&self) -> [f64; N] {
        self.channels.map(|c| c.to)
    }

    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.done
    }

    /// Ticks taken so far.
    #[must_use]
    pub const fn ticks(&self) -> u32 {
        self.ticker.count()
    }

    /// Feed `dt` and hand every due frame to `apply`, in tick order.
    pub fn advance<F>(&mut self, dt: Duration, mut apply: F) -> Step
    where
        F: FnMut(&TweenFrame<N>),
    {
        if self.done {
            return Step::Done;
        }
        let due = self.ticker.accumulate(dt);
        for _ in 0..due {
            let elapsed = self.ticker.tick();
            if elapsed > self.duration {
                self.finish_with(elapsed, &mut apply);
                return Step::Done;
            }
            let duration = self.duration;
            self.current = self.channels.map(|c| c.sample(elapsed, duration));
            apply(&TweenFrame {
                values: self.current,
                tick: self.ticker.count(),
                elapsed,
                last: false,
            });
        }
        Step::Continue
    }

    /// Jump straight to the targets, emitting one final frame.
    pub fn finish<F>(&mut self, mut apply: F)
    where
        F: FnMut(&TweenFrame<N>),
    {
        if self.done {
            return;
        }
        let elapsed = self.ticker.tick();
        self.finish_with(elapsed, &mut apply);
    }

    /// Stop without writing the targets. [`current`](Self::current) keeps
    /// the last emitted values.
    pub fn cancel(&mut self) {
        self.done = true;
    }

    fn finish_with<F>(&mut self, elapsed: Duration, apply: &mut F)
    where
        F: FnMut(&TweenFrame<N>),
    {
        self.current = self.targets();
        self.done = true;
        apply(&TweenFrame {
            values: self.current,
            tick: self.ticker.count(),
            elapsed,
            last: true,
        });
    }
}

// ---------------------------------------------------------------------------
// Delay
// ---------------------------------------------------------------------------

/// One-shot countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delay {
    remaining: Duration,
    fired: bool,
}

impl Delay {
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            remaining: delay,
            fired: false,
        }
    }

    #[must_use]
    pub const fn remaining(&self) -> Duration {
        self.remaining
    }

    /// Count down by `dt`. Returns [`Step::Done`] exactly once, on the call
    /// that reaches zero, and on every call after that.
    pub fn advance(&mut self, dt: Duration) -> Step {
        self.remaining = self.remaining.saturating_sub(dt);
        if self.remaining.is_zero() {
            self.fired = true;
            Step::Done
        } else {
            Step::Continue
        }
    }

    #[must_use]
    pub const fn has_fired(&self) -> bool {
        self.fired
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
