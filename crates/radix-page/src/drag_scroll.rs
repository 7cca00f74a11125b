#![forbid(unsafe_code)]

//! Drag-to-scroll regions.
//!
//! A mouse or pen press inside a registered region claims the page-wide
//! [`DragSlot`], shows the `move` cursor, and records the region's scroll
//! offset and the pointer position. While the slot is held, pointer moves
//! set `scroll = origin_scroll + origin_pointer - pointer`, floored at zero.
//! Releasing the pointer anywhere frees the slot and resets the cursor.
//!
//! Touch input scrolls natively: a touch only marks the region active so
//! its scroll hint can be dismissed.
//!
//! # Invariants
//!
//! 1. At most one region is dragging, and only while it holds the slot.
//! 2. A region's hint is hidden at most once, after the region has been
//!    scrolled horizontally or when it turns out not to overflow.

use radix_core::debug;
use radix_core::event::{ElementId, PointerEvent};
use radix_core::geometry::Point;
use serde::{Deserialize, Serialize};

use crate::config::DragScrollConfig;
use crate::drag::{DragOwner, DragSlot};
use crate::surface::PageHost;

/// Horizontal overflow measurements for a region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionMetrics {
    pub scroll_width: f64,
    pub client_width: f64,
}

impl RegionMetrics {
    #[must_use]
    pub fn overflows(self) -> bool {
        self.scroll_width > self.client_width
    }
}

#[derive(Debug, Clone)]
struct DragRegion {
    id: ElementId,
    metrics: RegionMetrics,
    has_hint: bool,
    hint_hidden: bool,
}

/// Captured at pointer-down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragScrollSession {
    pub region: ElementId,
    pub origin_scroll: Point,
    pub origin_pointer: Point,
}

impl DragScrollSession {
    /// Scroll offset for a pointer at `pointer`.
    #[must_use]
    pub fn offset_for(&self, pointer: Point) -> Point {
        (self.origin_scroll + self.origin_pointer - pointer).clamp_non_negative()
    }
}

#[derive(Debug, Clone)]
pub struct DragScroll {
    config: DragScrollConfig,
    regions: Vec<DragRegion>,
    session: Option<DragScrollSession>,
    touched: Option<ElementId>,
}

impl DragScroll {
    #[must_use]
    pub fn new(config: DragScrollConfig) -> Self {
        Self {
            config,
            regions: Vec::new(),
            session: None,
            touched: None,
        }
    }

    /// Prepare `id` for dragging: scrollable styles, and a hint when it
    /// overflows.
    pub fn register<H: PageHost + ?Sized>(
        &mut self,
        id: ElementId,
        metrics: RegionMetrics,
        host: &mut H,
    ) {
        if !self.config.active || self.config.selector.is_empty() || self.contains(id) {
            return;
        }
        host.set_style(id, "overflow", "auto");
        host.set_style(id, "position", "relative");
        let has_hint = metrics.overflows() && self.config.hint;
        if has_hint {
            host.append_scroll_hint(id);
        }
        self.regions.push(DragRegion {
            id,
            metrics,
            has_hint,
            hint_hidden: false,
        });
    }

    #[must_use]
    pub fn contains(&self, id: ElementId) -> bool {
        self.regions.iter().any(|r| r.id == id)
    }

    #[must_use]
    pub fn session(&self) -> Option<&DragScrollSession> {
        self.session.as_ref()
    }

    /// Pointer pressed on `region`. Returns whether a drag started.
    pub fn pointer_down<H: PageHost + ?Sized>(
        &mut self,
        slot: &mut DragSlot,
        region: ElementId,
        event: &PointerEvent,
        host: &mut H,
    ) -> bool {
        if !self.contains(region) {
            return false;
        }
        if event.pointer_type.is_touch() {
            self.touched = Some(region);
            return false;
        }
        if !slot.claim(DragOwner::Region(region)) {
            return false;
        }
        host.set_style(region, "cursor", "move");
        self.session = Some(DragScrollSession {
            region,
            origin_scroll: host.element_scroll(region),
            origin_pointer: event.position,
        });
        debug!(region = region.get(), "drag-scroll started");
        true
    }

    /// Pointer moved anywhere on the page. Returns whether a region scrolled.
    pub fn pointer_move<H: PageHost + ?Sized>(
        &mut self,
        slot: &DragSlot,
        event: &PointerEvent,
        host: &mut H,
    ) -> bool {
        let active = self
            .session
            .filter(|s| slot.is_held_by(DragOwner::Region(s.region)));
        let scrolled = match active {
            Some(session) => {
                host.set_element_scroll(session.region, session.offset_for(event.position));
                true
            }
            None => false,
        };
        if let Some(region) = active.map(|s| s.region).or(self.touched) {
            self.update_hint(region, host);
        }
        scrolled
    }

    /// Pointer released anywhere on the page.
    pub fn pointer_up<H: PageHost + ?Sized>(&mut self, slot: &mut DragSlot, host: &mut H) {
        if let Some(session) = self.session.take() {
            host.set_style(session.region, "cursor", "");
            slot.release(DragOwner::Region(session.region));
        }
        self.touched = None;
    }

    fn update_hint<H: PageHost + ?Sized>(&mut self, region: ElementId, host: &mut H) {
        let Some(r) = self.regions.iter_mut().find(|r| r.id == region) else {
            return;
        };
        if !r.has_hint || r.hint_hidden {
            return;
        }
        if host.element_scroll(region).x > 0.0 || !r.metrics.overflows() {
            host.hide_scroll_hint(region);
            r.hint_hidden = true;
        }
    }
}
