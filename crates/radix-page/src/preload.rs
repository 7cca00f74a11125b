#![forbid(unsafe_code)]

//! Preloader dismissal.
//!
//! Once the page reports it has loaded, the preloader stays visible for
//! `preload.minload` more milliseconds and is then hidden with the `hide`
//! class.

use std::time::Duration;

use radix_core::animation::{Delay, Step};
use radix_core::debug;
use radix_core::event::ElementId;

use crate::config::PreloadConfig;
use crate::surface::{HIDE_CLASS, PageHost};

#[derive(Debug, Clone, Default)]
pub struct Preloader {
    active: bool,
    minload: Duration,
    pending: Option<(ElementId, Delay)>,
    hidden: bool,
}

impl Preloader {
    #[must_use]
    pub fn new(config: &PreloadConfig) -> Self {
        Self {
            active: config.active && !config.selector.is_empty(),
            minload: Duration::from_millis(config.minload),
            pending: None,
            hidden: false,
        }
    }

    /// Start the countdown for `preloader`.
    pub fn page_loaded(&mut self, preloader: ElementId) {
        if !self.active || self.hidden || self.pending.is_some() {
            return;
        }
        self.pending = Some((preloader, Delay::new(self.minload)));
    }

    #[must_use]
    pub const fn is_hidden(&self) -> bool {
        self.hidden
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn advance<H: PageHost + ?Sized>(&mut self, dt: Duration, host: &mut H) -> Step {
        let Some((el, delay)) = self.pending.as_mut() else {
            return Step::Done;
        };
        if delay.advance(dt).is_done() {
            let el = *el;
            host.add_class(el, HIDE_CLASS);
            self.pending = None;
            self.hidden = true;
            debug!(element = el.get(), "preloader hidden");
            return Step::Done;
        }
        Step::Continue
    }
}
