#![forbid(unsafe_code)]

//! Page coordinator.
//!
//! [`Radix`] owns every behavior plus the surface they draw on, and routes
//! host input to them: clicks, pointer events, window scrolls, and the
//! render-loop `advance(dt)`. The host registers elements it discovered
//! through the configured selectors; nothing here queries a document.
//!
//! # Routing
//!
//! | Input | Handled by |
//! |-------|------------|
//! | click on a modal trigger | modal `open` (or `replace` when open) |
//! | click on a smooth-scroll link | smooth scroll to top / anchor |
//! | click on a nav trigger | nav toggle |
//! | any other click while the modal is open | modal outside-click close |
//! | pointer down on the modal wrapper | modal drag |
//! | pointer down on a drag region | drag-scroll |
//! | pointer move / up | whichever holds the drag slot |
//!
//! # Invariants
//!
//! 1. The modal and the drag-scroll regions share one [`DragSlot`].
//! 2. The modal scaffold is built once, when the first trigger registers.
//! 3. A successfully constructed page has queued `BeforeInit` then
//!    `AfterInit`; a rejected configuration emits nothing.

use std::collections::HashMap;
use std::time::Duration;

use radix_core::animation::Step;
use radix_core::event::{ElementId, HitRegion, PointerEvent, PointerPhase};
use radix_core::debug;
use radix_core::notify::Notifier;

use crate::config::{RadixConfig, Result};
use crate::drag::DragSlot;
use crate::drag_scroll::{DragScroll, RegionMetrics};
use crate::events::{PageEvent, RadixEvent};
use crate::flex_fix;
use crate::icons::{self, Icon};
use crate::links::{self, ScrollTarget};
use crate::modal::{CloseOutcome, ModalController, ModalState, OpenOutcome, ResizeOutcome};
use crate::nav::{NavMode, NavToggle};
use crate::overrides::{AppearOverrides, ModalOverrides, ScrollOverrides};
use crate::preload::Preloader;
use crate::scroll_appear::{ItemGeometry, ScrollAppear};
use crate::smooth_scroll::{ScrollOutcome, SmoothScroller};
use crate::surface::{ModalSurface, SOURCE_CLASS};

#[derive(Debug, Clone)]
struct ModalTrigger {
    targets: Vec<ElementId>,
    overrides: ModalOverrides,
}

#[derive(Debug, Clone)]
struct ScrollLink {
    target: ScrollTarget,
    overrides: ScrollOverrides,
}

/// What a click did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClickOutcome {
    Modal(OpenOutcome),
    Scroll(ScrollOutcome),
    Nav(bool),
    Outside(CloseOutcome),
    Ignored,
}

pub struct Radix<S: ModalSurface> {
    config: RadixConfig,
    surface: S,
    drag: DragSlot,
    modal: Option<ModalController>,
    triggers: HashMap<ElementId, ModalTrigger>,
    scroller: SmoothScroller,
    links: HashMap<ElementId, ScrollLink>,
    anchors: HashMap<String, ElementId>,
    drag_scroll: DragScroll,
    nav: NavToggle,
    appear: ScrollAppear,
    preloader: Preloader,
    events: Notifier<PageEvent>,
}

impl<S: ModalSurface> std::fmt::Debug for Radix<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Radix")
            .field("modal", &self.modal.as_ref().map(ModalController::state))
            .field("triggers", &self.triggers.len())
            .field("links", &self.links.len())
            .field("drag", &self.drag)
            .field("scrolls_in_flight", &self.scroller.in_flight())
            .field("nav_open", &self.nav.is_open())
            .finish_non_exhaustive()
    }
}

impl<S: ModalSurface> Radix<S> {
    /// Validate `config` and set up every enabled behavior on `surface`.
    pub fn new(config: RadixConfig, surface: S) -> Result<Self> {
        config.validate()?;
        let time_frame = config.time_frame();
        let modal = if config.modal.active {
            Some(ModalController::new(config.modal.clone(), time_frame)?)
        } else {
            None
        };
        let mut events = Notifier::new();
        events.emit(PageEvent::BeforeInit);
        debug!(
            time_frame_ms = config.time_frame,
            modal = modal.is_some(),
            "radix initialized"
        );
        let mut page = Self {
            scroller: SmoothScroller::new(config.smooth_scroll.clone(), time_frame),
            drag_scroll: DragScroll::new(config.drag_scroll.clone()),
            nav: NavToggle::new(config.toggle_nav.clone()),
            appear: ScrollAppear::new(config.scroll_appear.clone()),
            preloader: Preloader::new(&config.preload),
            config,
            surface,
            drag: DragSlot::new(),
            modal,
            triggers: HashMap::new(),
            links: HashMap::new(),
            anchors: HashMap::new(),
            events,
        };
        page.events.emit(PageEvent::AfterInit);
        Ok(page)
    }

    #[must_use]
    pub fn config(&self) -> &RadixConfig {
        &self.config
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    #[must_use]
    pub fn modal(&self) -> Option<&ModalController> {
        self.modal.as_ref()
    }

    /// Modal state, or `None` when the modal is disabled.
    #[must_use]
    pub fn modal_state(&self) -> Option<ModalState> {
        self.modal.as_ref().map(ModalController::state)
    }

    #[must_use]
    pub const fn drag_slot(&self) -> &DragSlot {
        &self.drag
    }

    #[must_use]
    pub fn nav(&self) -> &NavToggle {
        &self.nav
    }

    #[must_use]
    pub fn scroller(&self) -> &SmoothScroller {
        &self.scroller
    }

    // -- registration -------------------------------------------------------

    /// Register a modal trigger. An empty `targets` list means the trigger
    /// shows itself. Returns `false` when the modal is disabled.
    pub fn register_modal_trigger(
        &mut self,
        trigger: ElementId,
        targets: Vec<ElementId>,
        overrides: ModalOverrides,
    ) -> bool {
        let Some(modal) = self.modal.as_mut() else {
            return false;
        };
        let targets = if targets.is_empty() {
            vec![trigger]
        } else {
            targets
        };
        for &target in &targets {
            self.surface.add_class(target, SOURCE_CLASS);
        }
        modal.ensure_scaffold(&mut self.surface);
        self.triggers
            .insert(trigger, ModalTrigger { targets, overrides });
        true
    }

    /// Make `name` resolvable as a `#name` link target.
    pub fn register_anchor(&mut self, name: impl Into<String>, el: ElementId) {
        self.anchors.insert(name.into(), el);
    }

    /// Apply link rules to `link`. `page_host` is the host name the page is
    /// served from.
    pub fn register_link(
        &mut self,
        link: ElementId,
        href: Option<&str>,
        page_host: &str,
        overrides: ScrollOverrides,
    ) {
        let plan = links::classify(
            href,
            page_host,
            &self.config.smooth_scroll,
            &self.config.auto_target_blank,
        );
        links::apply(link, &plan, &mut self.surface);
        if let Some(target) = plan.scroll {
            self.links.insert(link, ScrollLink { target, overrides });
        }
    }

    pub fn register_icon(&mut self, el: ElementId, name: &str) -> Option<Icon> {
        icons::substitute(&self.config.svg, el, name, &mut self.surface)
    }

    /// Fill a flex container holding `children` items. Returns the number
    /// of dummies appended.
    pub fn register_flex_fix(&mut self, container: ElementId, children: usize) -> usize {
        flex_fix::apply(&self.config.flex_fix, container, children, &mut self.surface)
    }

    pub fn register_drag_region(&mut self, region: ElementId, metrics: RegionMetrics) {
        self.drag_scroll.register(region, metrics, &mut self.surface);
    }

    pub fn register_appear_item(&mut self, item: ElementId, overrides: &AppearOverrides) {
        self.appear.register(item, overrides);
    }

    pub fn register_nav(&mut self, triggers: Vec<ElementId>, targets: Vec<ElementId>) {
        self.nav.register(triggers, targets);
    }

    // -- input --------------------------------------------------------------

    /// Open the modal for `trigger`, replacing the content when it is
    /// already open.
    pub fn activate_trigger(&mut self, trigger: ElementId) -> Option<OpenOutcome> {
        let modal = self.modal.as_mut()?;
        let entry = self.triggers.get(&trigger)?;
        let outcome = if modal.is_open() {
            modal.replace(&entry.targets, &entry.overrides, &mut self.surface)
        } else {
            modal.open(&entry.targets, &entry.overrides, &mut self.surface)
        };
        Some(outcome)
    }

    /// Route a click on `target`; `hit` says which modal regions contain it.
    pub fn click(&mut self, target: Option<ElementId>, hit: HitRegion) -> ClickOutcome {
        if let Some(el) = target {
            if let Some(outcome) = self.activate_trigger(el) {
                return ClickOutcome::Modal(outcome);
            }
            if let Some(outcome) = self.click_link(el) {
                return ClickOutcome::Scroll(outcome);
            }
            if self.nav.is_trigger(el) {
                if let Some(open) = self.nav.set(NavMode::Toggle, &mut self.surface) {
                    return ClickOutcome::Nav(open);
                }
            }
        }
        match self.modal.as_mut() {
            Some(modal) if modal.is_open() => {
                ClickOutcome::Outside(modal.close_on_outside_click(hit, &mut self.surface))
            }
            _ => ClickOutcome::Ignored,
        }
    }

    /// Smooth-scroll for a registered `#` or `#id` link. `None` when `link`
    /// is not one, or its anchor is unknown.
    pub fn click_link(&mut self, link: ElementId) -> Option<ScrollOutcome> {
        let entry = self.links.get(&link)?;
        let to = match &entry.target {
            ScrollTarget::Top => 0.0,
            ScrollTarget::Anchor(name) => {
                let el = self.anchors.get(name)?;
                self.surface.window_scroll() + self.surface.element_top(*el)?
            }
        };
        Some(self.scroller.scroll_to(to, &entry.overrides, &mut self.surface))
    }

    /// Smooth-scroll the window to `y`.
    pub fn scroll_to(&mut self, y: f64, overrides: &ScrollOverrides) -> ScrollOutcome {
        self.scroller.scroll_to(y, overrides, &mut self.surface)
    }

    /// Route a pointer event. Returns whether a drag started, moved, or
    /// ended.
    pub fn pointer(&mut self, event: &PointerEvent) -> bool {
        match event.phase {
            PointerPhase::Down => {
                if let Some(modal) = self.modal.as_mut() {
                    if modal.is_open() && event.hit.contains(HitRegion::WRAPPER) {
                        return modal.begin_drag(&mut self.drag, event, &self.surface);
                    }
                }
                match event.target {
                    Some(region) => self.drag_scroll.pointer_down(
                        &mut self.drag,
                        region,
                        event,
                        &mut self.surface,
                    ),
                    None => false,
                }
            }
            PointerPhase::Move => {
                let panned = match self.modal.as_mut() {
                    Some(modal) => modal.update_drag(&self.drag, event.position, &mut self.surface),
                    None => false,
                };
                let scrolled = self
                    .drag_scroll
                    .pointer_move(&self.drag, event, &mut self.surface);
                panned || scrolled
            }
            PointerPhase::Up => {
                let was_held = !self.drag.is_free();
                if let Some(modal) = self.modal.as_mut() {
                    modal.end_drag(&mut self.drag);
                }
                self.drag_scroll.pointer_up(&mut self.drag, &mut self.surface);
                was_held
            }
        }
    }

    pub fn close_modal(&mut self) -> CloseOutcome {
        match self.modal.as_mut() {
            Some(modal) => modal.close(&mut self.surface),
            None => CloseOutcome::Ignored,
        }
    }

    pub fn resize_modal(&mut self, scale: f64) -> ResizeOutcome {
        match self.modal.as_mut() {
            Some(modal) => modal.resize(scale, &mut self.surface),
            None => ResizeOutcome::Ignored,
        }
    }

    pub fn enlarge_modal(&mut self) -> ResizeOutcome {
        match self.modal.as_mut() {
            Some(modal) => modal.enlarge(&mut self.surface),
            None => ResizeOutcome::Ignored,
        }
    }

    pub fn shrink_modal(&mut self) -> ResizeOutcome {
        match self.modal.as_mut() {
            Some(modal) => modal.shrink(&mut self.surface),
            None => ResizeOutcome::Ignored,
        }
    }

    /// The scale readout was clicked.
    pub fn open_scale_selector(&mut self) -> Option<usize> {
        self.modal
            .as_mut()
            .and_then(|modal| modal.open_scale_selector(&mut self.surface))
    }

    /// A row of the scale list was clicked.
    pub fn select_scale(&mut self, index: usize) -> ResizeOutcome {
        match self.modal.as_mut() {
            Some(modal) => modal.select_scale(index, &mut self.surface),
            None => ResizeOutcome::Ignored,
        }
    }

    pub fn toggle_nav(&mut self, mode: NavMode) -> Option<bool> {
        self.nav.set(mode, &mut self.surface)
    }

    /// Re-check scroll-appear items after a window scroll.
    pub fn on_scroll<G>(&mut self, window_height: f64, page_offset: f64, geometry: G)
    where
        G: FnMut(ElementId) -> Option<ItemGeometry>,
    {
        self.appear.on_scroll(window_height, page_offset, geometry);
    }

    pub fn page_loaded(&mut self, preloader: ElementId) {
        self.preloader.page_loaded(preloader);
    }

    // -- time ---------------------------------------------------------------

    /// Drive every animation and delay by `dt`. Returns [`Step::Done`] when
    /// nothing is left running.
    pub fn advance(&mut self, dt: Duration) -> Step {
        let modal = match self.modal.as_mut() {
            Some(modal) => modal.advance(dt, &mut self.surface),
            None => Step::Done,
        };
        let scroll = self.scroller.advance(dt, &mut self.surface);
        self.appear.advance(dt, &mut self.surface);
        let preload = self.preloader.advance(dt, &mut self.surface);

        let idle = modal.is_done()
            && scroll.is_done()
            && preload.is_done()
            && self.appear.pending() == 0;
        if idle { Step::Done } else { Step::Continue }
    }

    pub fn events_mut(&mut self) -> &mut Notifier<PageEvent> {
        &mut self.events
    }

    /// Take every queued notification, grouped by source: page, modal,
    /// scroll, then nav.
    pub fn drain_events(&mut self) -> Vec<RadixEvent> {
        let mut out: Vec<RadixEvent> = self.events.drain_events().map(RadixEvent::from).collect();
        if let Some(modal) = self.modal.as_mut() {
            out.extend(modal.events_mut().drain_events().map(RadixEvent::from));
        }
        out.extend(self.scroller.events_mut().drain_events().map(RadixEvent::from));
        out.extend(self.nav.events_mut().drain_events().map(RadixEvent::from));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{ModalEvent, NavEvent, ScrollEvent};
    use crate::surface::{DomCommand, PageHost, RecordingSurface};
    use radix_core::geometry::{Point, Size};

    const MS: Duration = Duration::from_millis(1);
    const TRIGGER: ElementId = ElementId(1);
    const IMAGE: ElementId = ElementId(2);
    const LINK: ElementId = ElementId(3);

    fn page() -> Radix<RecordingSurface> {
        let surface = RecordingSurface::new()
            .with_area(Size::new(500.0, 500.0))
            .with_content(Size::new(400.0, 300.0));
        let mut p = Radix::new(RadixConfig::default(), surface).unwrap();
        p.drain_events();
        p
    }

    fn settle(page: &mut Radix<RecordingSurface>) {
        for _ in 0..1000 {
            if page.advance(16 * MS).is_done() {
                return;
            }
        }
        panic!("page never settled");
    }

    // ---- Construction tests ----

    #[test]
    fn invalid_config_is_rejected() {
        let config = RadixConfig {
            time_frame: 0,
            ..RadixConfig::default()
        };
        assert!(Radix::new(config, RecordingSurface::new()).is_err());
    }

    #[test]
    fn construction_queues_init_events() {
        let mut p = Radix::new(RadixConfig::default(), RecordingSurface::new()).unwrap();
        let names: Vec<_> = p.drain_events().iter().map(RadixEvent::dom_name).collect();
        assert_eq!(names, ["_radixInit", "radixInit_"]);
        assert!(p.drain_events().is_empty());
        assert!(p.surface().commands().is_empty());
    }

    #[test]
    fn disabled_modal_refuses_triggers() {
        let mut page = Radix::new(RadixConfig::all_inactive(), RecordingSurface::new()).unwrap();
        assert!(!page.register_modal_trigger(TRIGGER, vec![], ModalOverrides::default()));
        assert_eq!(page.modal_state(), None);
        assert_eq!(page.click(Some(TRIGGER), HitRegion::empty()), ClickOutcome::Ignored);
    }

    // ---- Modal routing tests ----

    #[test]
    fn trigger_click_opens_modal() {
        let mut p = page();
        assert!(p.register_modal_trigger(TRIGGER, vec![IMAGE], ModalOverrides::default()));
        assert_eq!(
            p.click(Some(TRIGGER), HitRegion::empty()),
            ClickOutcome::Modal(OpenOutcome::Opened { scale: 1.0 })
        );
        assert_eq!(p.modal_state(), Some(ModalState::Open));
        assert!(p.surface().commands().contains(&DomCommand::AddClass {
            el: IMAGE,
            class: SOURCE_CLASS.into()
        }));
    }

    #[test]
    fn trigger_without_targets_shows_itself() {
        let mut p = page();
        p.register_modal_trigger(TRIGGER, vec![], ModalOverrides::default());
        p.activate_trigger(TRIGGER);
        assert_eq!(p.modal().unwrap().session().unwrap().sources(), &[TRIGGER]);
    }

    #[test]
    fn nested_trigger_replaces_content() {
        let mut p = page();
        p.register_modal_trigger(TRIGGER, vec![IMAGE], ModalOverrides::default());
        p.register_modal_trigger(ElementId(9), vec![ElementId(10)], ModalOverrides::default());
        p.activate_trigger(TRIGGER);
        p.click(Some(ElementId(9)), HitRegion::CONTENT | HitRegion::ITEM);
        let session = p.modal().unwrap().session().unwrap();
        assert_eq!(session.sources(), &[ElementId(10)]);
    }

    #[test]
    fn outside_click_closes_and_content_click_does_not() {
        let mut p = page();
        p.register_modal_trigger(TRIGGER, vec![IMAGE], ModalOverrides::default());
        p.activate_trigger(TRIGGER);
        assert_eq!(
            p.click(None, HitRegion::CONTENT),
            ClickOutcome::Outside(CloseOutcome::KeptOpen)
        );
        assert_eq!(
            p.click(None, HitRegion::WRAPPER),
            ClickOutcome::Outside(CloseOutcome::Closed)
        );
        let names: Vec<_> = p.drain_events().iter().map(RadixEvent::dom_name).collect();
        assert_eq!(
            names,
            ["_radixModalOpen", "radixModalOpen_", "_radixModalClose", "radixModalClose_"]
        );
    }

    #[test]
    fn wrapper_drag_blocks_close_until_released() {
        let mut p = page();
        p.register_modal_trigger(TRIGGER, vec![IMAGE], ModalOverrides::default());
        p.activate_trigger(TRIGGER);
        assert!(p.pointer(&PointerEvent::down(100.0, 100.0).with_hit(HitRegion::WRAPPER)));
        assert!(p.pointer(&PointerEvent::moved(90.0, 80.0)));
        assert_eq!(p.surface().wrapper_scroll(), Point::new(10.0, 20.0));
        assert_eq!(p.close_modal(), CloseOutcome::Ignored);
        assert!(p.pointer(&PointerEvent::up(90.0, 80.0)));
        assert!(p.drag_slot().is_free());
        assert_eq!(p.close_modal(), CloseOutcome::Closed);
    }

    #[test]
    fn resize_runs_on_advance() {
        let mut p = page();
        p.register_modal_trigger(TRIGGER, vec![IMAGE], ModalOverrides::default());
        p.activate_trigger(TRIGGER);
        assert!(matches!(p.enlarge_modal(), ResizeOutcome::Started { .. }));
        assert_eq!(p.modal_state(), Some(ModalState::Resizing));
        settle(&mut p);
        assert_eq!(p.modal_state(), Some(ModalState::Open));
        assert!(
            p.drain_events()
                .contains(&RadixEvent::Modal(ModalEvent::ResizeFinished { scale: 1.5 }))
        );
    }

    #[test]
    fn scale_selector_picks_a_step() {
        let mut p = page();
        p.register_modal_trigger(TRIGGER, vec![IMAGE], ModalOverrides::default());
        assert_eq!(p.open_scale_selector(), None);
        p.activate_trigger(TRIGGER);
        assert_eq!(p.open_scale_selector(), Some(4));
        assert_eq!(p.select_scale(6), ResizeOutcome::Started { from: 1.0, to: 2.0 });
        settle(&mut p);
        assert_eq!(p.modal().unwrap().session().unwrap().scale(), 2.0);
        assert!(p.surface().commands().contains(&DomCommand::CloseScaleSelector));
    }

    // ---- Link and scroll tests ----

    #[test]
    fn top_link_scrolls_to_zero() {
        let mut p = page();
        p.surface_mut().observe_window_scroll(800.0);
        p.register_link(LINK, Some("#"), "example.com", ScrollOverrides::default());
        assert!(matches!(
            p.click(Some(LINK), HitRegion::empty()),
            ClickOutcome::Scroll(ScrollOutcome::Started(_))
        ));
        settle(&mut p);
        assert_eq!(p.surface().window_scroll(), 0.0);
        assert_eq!(
            p.drain_events(),
            vec![
                RadixEvent::Scroll(ScrollEvent::BeforeScroll { to: 0.0 }),
                RadixEvent::Scroll(ScrollEvent::AfterScroll { to: 0.0 }),
            ]
        );
    }

    #[test]
    fn anchor_link_targets_element() {
        let mut p = page();
        let section = ElementId(40);
        p.surface_mut().observe_window_scroll(100.0);
        p.surface_mut().set_element_top(section, 650.0);
        p.register_anchor("about", section);
        p.register_link(LINK, Some("#about"), "example.com", ScrollOverrides::default());
        p.click_link(LINK);
        settle(&mut p);
        assert_eq!(p.surface().window_scroll(), 750.0);
    }

    #[test]
    fn unknown_anchor_is_skipped() {
        let mut p = page();
        p.register_link(LINK, Some("#missing"), "example.com", ScrollOverrides::default());
        assert_eq!(p.click_link(LINK), None);
    }

    #[test]
    fn empty_href_becomes_hash() {
        let mut p = page();
        p.register_link(LINK, None, "example.com", ScrollOverrides::default());
        assert_eq!(
            p.surface().commands(),
            &[DomCommand::SetAttribute {
                el: LINK,
                name: "href".into(),
                value: "#".into()
            }]
        );
    }

    // ---- Other behavior tests ----

    #[test]
    fn nav_trigger_click_toggles() {
        let mut config = RadixConfig::default();
        config.toggle_nav.active = true;
        config.toggle_nav.trigger = ".burger".into();
        config.toggle_nav.target = "#menu".into();
        let mut p = Radix::new(config, RecordingSurface::new()).unwrap();
        p.drain_events();
        p.register_nav(vec![ElementId(5)], vec![ElementId(6)]);
        assert_eq!(p.click(Some(ElementId(5)), HitRegion::empty()), ClickOutcome::Nav(true));
        assert_eq!(p.toggle_nav(NavMode::Close), Some(false));
        let events = p.drain_events();
        assert_eq!(events.len(), 4);
        assert_eq!(events[1], RadixEvent::Nav(NavEvent::AfterOpen));
        assert_eq!(events[3], RadixEvent::Nav(NavEvent::AfterClose));
    }

    #[test]
    fn preloader_and_appear_keep_page_busy() {
        let mut config = RadixConfig::default();
        config.preload.active = true;
        config.preload.selector = "#loader".into();
        let mut p = Radix::new(config, RecordingSurface::new()).unwrap();
        p.page_loaded(ElementId(7));
        p.register_appear_item(ElementId(8), &AppearOverrides::default());
        p.on_scroll(1000.0, 0.0, |_| Some(ItemGeometry { top: 400.0, height: 50.0 }));
        assert_eq!(p.advance(100 * MS), Step::Continue);
        assert_eq!(p.advance(100 * MS), Step::Done);
        let cmds = p.surface().commands();
        assert!(cmds.contains(&DomCommand::AddClass {
            el: ElementId(7),
            class: "hide".into()
        }));
        assert!(cmds.contains(&DomCommand::AddClass {
            el: ElementId(8),
            class: "active".into()
        }));
    }

    #[test]
    fn region_drag_scrolls() {
        let mut p = page();
        let region = ElementId(20);
        p.register_drag_region(
            region,
            RegionMetrics {
                scroll_width: 900.0,
                client_width: 300.0,
            },
        );
        assert!(p.pointer(&PointerEvent::down(50.0, 0.0).with_target(region)));
        assert!(p.pointer(&PointerEvent::moved(20.0, 0.0)));
        assert_eq!(p.surface().element_scroll(region), Point::new(30.0, 0.0));
        p.pointer(&PointerEvent::up(20.0, 0.0));
        assert!(p.drag_slot().is_free());
    }
}
