#![forbid(unsafe_code)]

//! Scroll-triggered reveal.
//!
//! On every window scroll the host reports each item's viewport-relative
//! geometry. An item is *in view* when its top is above 90% of the window
//! height and its bottom is below 10% of it; items with a fixed threshold
//! are in view once the page offset passes that threshold instead. Entering
//! view adds the item's class after its delay; leaving view removes it after
//! the same delay when `reset` is set.
//!
//! # Invariants
//!
//! 1. Only state changes queue a toggle: repeated scroll events while an
//!    item stays in view schedule nothing new.
//! 2. Toggles for one item apply in the order they were queued.

use std::time::Duration;

use radix_core::animation::Delay;
use radix_core::event::ElementId;
use serde::{Deserialize, Serialize};

use crate::config::ScrollAppearConfig;
use crate::overrides::{AppearOverrides, AppearSettings};
use crate::surface::PageHost;

/// Window band, as fractions of the window height.
pub const BAND_TOP: f64 = 0.9;
pub const BAND_BOTTOM: f64 = 0.1;

/// Viewport-relative geometry of one item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ItemGeometry {
    pub top: f64,
    pub height: f64,
}

/// Whether an item at `geometry` is inside the reveal band.
#[must_use]
pub fn in_band(geometry: ItemGeometry, window_height: f64) -> bool {
    geometry.top < window_height * BAND_TOP
        && geometry.top + geometry.height > window_height * BAND_BOTTOM
}

#[derive(Debug, Clone)]
struct AppearItem {
    id: ElementId,
    settings: AppearSettings,
    /// State most recently scheduled (or applied).
    shown: bool,
}

#[derive(Debug, Clone)]
struct PendingToggle {
    id: ElementId,
    class: String,
    show: bool,
    delay: Delay,
}

#[derive(Debug, Clone)]
pub struct ScrollAppear {
    config: ScrollAppearConfig,
    items: Vec<AppearItem>,
    pending: Vec<PendingToggle>,
}

impl ScrollAppear {
    #[must_use]
    pub fn new(config: ScrollAppearConfig) -> Self {
        Self {
            config,
            items: Vec::new(),
            pending: Vec::new(),
        }
    }

    pub fn register(&mut self, id: ElementId, overrides: &AppearOverrides) {
        if !self.config.active || self.items.iter().any(|i| i.id == id) {
            return;
        }
        self.items.push(AppearItem {
            id,
            settings: AppearSettings::resolve(&self.config, overrides),
            shown: false,
        });
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of toggles waiting on their delay.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Re-evaluate every item after a window scroll.
    ///
    /// `geometry` returns `None` for items the host could not measure; they
    /// are skipped.
    pub fn on_scroll<G>(&mut self, window_height: f64, page_offset: f64, mut geometry: G)
    where
        G: FnMut(ElementId) -> Option<ItemGeometry>,
    {
        for item in &mut self.items {
            let visible = match item.settings.fixed {
                Some(threshold) => page_offset > threshold,
                None => match geometry(item.id) {
                    Some(g) => in_band(g, window_height),
                    None => continue,
                },
            };
            let show = if visible {
                true
            } else if item.settings.reset {
                false
            } else {
                continue;
            };
            if show == item.shown {
                continue;
            }
            item.shown = show;
            self.pending.push(PendingToggle {
                id: item.id,
                class: item.settings.class.clone(),
                show,
                delay: Delay::new(item.settings.delay),
            });
        }
    }

    /// Count down queued toggles and apply the ones that are due.
    pub fn advance<H: PageHost + ?Sized>(&mut self, dt: Duration, host: &mut H) {
        self.pending.retain_mut(|toggle| {
            if !toggle.delay.advance(dt).is_done() {
                return true;
            }
            if toggle.show {
                host.add_class(toggle.id, &toggle.class);
            } else {
                host.remove_class(toggle.id, &toggle.class);
            }
            false
        });
    }
}
