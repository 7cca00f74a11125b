#![forbid(unsafe_code)]

//! Animated window scrolling.
//!
//! Each [`SmoothScroller::scroll_to`] call starts its own animation with its
//! own tick driver; starting one never cancels another. The target offset is
//! clamped to be non-negative and the last tick writes it exactly.
//!
//! # Failure Modes
//!
//! - Unknown easing name: nothing is sampled, the window jumps straight to
//!   the target and a warning is logged. Before/after notifications are
//!   still emitted.

use std::time::Duration;

use radix_core::animation::{Easing, Step, Tween, TweenSet};
use radix_core::notify::Notifier;
use radix_core::{debug, trace, warn};

use crate::config::SmoothScrollConfig;
use crate::events::ScrollEvent;
use crate::overrides::ScrollOverrides;
use crate::surface::PageHost;

/// Identifies one in-flight scroll animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScrollId(u64);

/// What [`SmoothScroller::scroll_to`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollOutcome {
    /// An animation was started.
    Started(ScrollId),
    /// The easing did not resolve; the window was moved immediately.
    Jumped,
    /// Smooth scrolling is switched off.
    Disabled,
}

#[derive(Debug, Clone)]
struct ScrollAnimation {
    id: ScrollId,
    tween: TweenSet<1>,
}

#[derive(Debug)]
pub struct SmoothScroller {
    config: SmoothScrollConfig,
    time_frame: Duration,
    animations: Vec<ScrollAnimation>,
    next_id: u64,
    events: Notifier<ScrollEvent>,
}

impl SmoothScroller {
    #[must_use]
    pub fn new(config: SmoothScrollConfig, time_frame: Duration) -> Self {
        Self {
            config,
            time_frame,
            animations: Vec::new(),
            next_id: 0,
            events: Notifier::new(),
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.config.active
    }

    /// Animations still running.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.animations.len()
    }

    pub fn events_mut(&mut self) -> &mut Notifier<ScrollEvent> {
        &mut self.events
    }

    /// Scroll the window from its current offset to `to`.
    pub fn scroll_to<H: PageHost + ?Sized>(
        &mut self,
        to: f64,
        overrides: &ScrollOverrides,
        host: &mut H,
    ) -> ScrollOutcome {
        let from = host.window_scroll();
        self.scroll_between(from, to, overrides, host)
    }

    /// Scroll the window from `from` to `to`.
    pub fn scroll_between<H: PageHost + ?Sized>(
        &mut self,
        from: f64,
        to: f64,
        overrides: &ScrollOverrides,
        host: &mut H,
    ) -> ScrollOutcome {
        if !self.config.active {
            return ScrollOutcome::Disabled;
        }
        let to = to.max(0.0);
        let (duration, easing_name) = overrides.resolve(&self.config);
        self.events.emit(ScrollEvent::BeforeScroll { to });

        let Some(easing) = Easing::resolve(&easing_name) else {
            warn!(easing = %easing_name, "unknown scroll easing; jumping to target");
            host.set_window_scroll(to);
            self.events.emit(ScrollEvent::AfterScroll { to });
            return ScrollOutcome::Jumped;
        };

        let id = ScrollId(self.next_id);
        self.next_id += 1;
        debug!(from, to, ?easing, "smooth scroll started");
        self.animations.push(ScrollAnimation {
            id,
            tween: TweenSet::new([Tween::new(from, to, easing)], duration, self.time_frame),
        });
        ScrollOutcome::Started(id)
    }

    /// Stop one animation where it is. No after-scroll notification fires.
    pub fn cancel(&mut self, id: ScrollId) -> bool {
        let before = self.animations.len();
        self.animations.retain(|anim| anim.id != id);
        self.animations.len() != before
    }

    /// Advance every animation. Returns [`Step::Done`] once none remain.
    pub fn advance<H: PageHost + ?Sized>(&mut self, dt: Duration, host: &mut H) -> Step {
        let events = &mut self.events;
        self.animations.retain_mut(|anim| {
            let step = anim.tween.advance(dt, |frame| {
                trace!(tick = frame.tick, y = frame.values[0], "scroll tick");
                host.set_window_scroll(frame.values[0]);
            });
            if step.is_done() {
                let to = anim.tween.targets()[0];
                debug!(id = anim.id.0, to, "smooth scroll finished");
                events.emit(ScrollEvent::AfterScroll { to });
                return false;
            }
            true
        });
        if self.animations.is_empty() {
            Step::Done
        } else {
            Step::Continue
        }
    }
}
