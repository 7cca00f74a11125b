#![forbid(unsafe_code)]

//! Lightbox viewer with animated zoom and drag-to-pan.
//!
//! [`ModalController`] owns one reusable scaffold (viewport, area, wrapper,
//! content, toggles) on a [`ModalSurface`] and shows clones of host elements
//! in it. Opening measures the content, picks an initial scale (explicit
//! override, else the largest fitting step, else 1), and locks page scroll.
//! Resizing tweens width, height and scale together on one tick driver and
//! snaps to exact values on the final tick. Clicking the readout opens a
//! list with one row per permitted scale; picking a row resizes to it.
//!
//! # State machine
//!
//! ```text
//!            open()                    close()
//! Closed ──▶ Opening ──▶ Open ──────▶ Closing ──▶ Closed
//!                         │  ▲
//!              resize()   ▼  │ final tick
//!                       Resizing
//!
//! Open / Resizing ──begin_drag()──▶ Dragging ──end_drag()──▶ (same)
//! ```
//!
//! `Opening` and `Closing` only exist while `open`/`close` run; listeners
//! observe them through the before/after notifications.
//!
//! # Invariants
//!
//! 1. The logical scale always lies in `[first step, last step]`, rounded
//!    to the configured precision.
//! 2. A resize whose rounded, clamped target equals the current scale never
//!    starts a driver.
//! 3. A new resize cancels the in-flight one and starts from the values it
//!    last displayed.
//! 4. The final resize tick writes `ceil(content * scale)` pixel sizes and
//!    the exact scale.
//! 5. `close()` is refused while the wrapper is being dragged.
//! 6. Any resize request, and closing, hides an open scale selector.
//!
//! # Failure Modes
//!
//! - Unknown resize easing: the resize jumps to its target and logs a
//!   warning.
//! - Empty target list: `open`/`replace` do nothing and report
//!   [`OpenOutcome::NoTargets`].

pub mod scale;

use std::time::Duration;

use radix_core::animation::{Step, Tween, TweenSet};
use radix_core::event::{ElementId, HitRegion, PointerEvent};
use radix_core::format::{round_to, scale_label};
use radix_core::geometry::{Point, Size};
use radix_core::notify::Notifier;
use radix_core::{debug, trace, warn};

use crate::config::{ConfigError, ModalConfig};
use crate::drag::{DragOwner, DragSlot};
use crate::events::ModalEvent;
use crate::overrides::{ModalOverrides, ModalSettings};
use crate::surface::{CloneSpec, ITEM_CLASS, ModalScaffold, ModalSurface, SOURCE_CLASS};

use self::scale::ScaleSteps;

/// Scales closer than this count as unchanged.
const SCALE_EPSILON: f64 = 1e-9;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Observable controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModalState {
    Closed,
    Opening,
    Open,
    Resizing,
    Dragging,
    Closing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Closed,
    Opening,
    Open,
    Closing,
}

/// Result of [`ModalController::open`] and [`ModalController::replace`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OpenOutcome {
    Opened { scale: f64 },
    AlreadyOpen,
    NoTargets,
}

/// Result of [`ModalController::close`] and
/// [`ModalController::close_on_outside_click`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseOutcome {
    Closed,
    /// Closed already, or the wrapper is being dragged.
    Ignored,
    /// The click landed on content, controls, or an item.
    KeptOpen,
}

/// Result of [`ModalController::resize`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResizeOutcome {
    Started { from: f64, to: f64 },
    /// The target equals the current scale.
    Unchanged,
    /// The easing did not resolve; final values were written at once.
    Jumped { to: f64 },
    /// No open session.
    Ignored,
}

/// Pointer and wrapper scroll captured at drag start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragOrigin {
    pub pointer: Point,
    pub scroll: Point,
}

/// Width, height and scale as currently shown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Displayed {
    pub width: f64,
    pub height: f64,
    pub scale: f64,
}

impl Displayed {
    fn at(content: Size, scale: f64) -> Self {
        Self {
            width: content.width * scale,
            height: content.height * scale,
            scale,
        }
    }

    fn from_array([width, height, scale]: [f64; 3]) -> Self {
        Self {
            width,
            height,
            scale,
        }
    }
}

/// One open lightbox.
#[derive(Debug, Clone)]
pub struct ModalSession {
    sources: Vec<ElementId>,
    content_size: Size,
    scale: f64,
    displayed: Displayed,
    settings: ModalSettings,
    drag: Option<DragOrigin>,
    selector_open: bool,
}

impl ModalSession {
    #[must_use]
    pub fn sources(&self) -> &[ElementId] {
        &self.sources
    }

    /// Natural (unscaled) content size.
    #[must_use]
    pub const fn content_size(&self) -> Size {
        self.content_size
    }

    /// Logical scale: the target of the latest resize.
    #[must_use]
    pub const fn scale(&self) -> f64 {
        self.scale
    }

    #[must_use]
    pub const fn displayed(&self) -> Displayed {
        self.displayed
    }

    #[must_use]
    pub fn settings(&self) -> &ModalSettings {
        &self.settings
    }

    #[must_use]
    pub const fn drag_origin(&self) -> Option<DragOrigin> {
        self.drag
    }

    #[must_use]
    pub const fn is_selector_open(&self) -> bool {
        self.selector_open
    }
}

// ---------------------------------------------------------------------------
// Controller
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct ModalController {
    config: ModalConfig,
    steps: ScaleSteps,
    time_frame: Duration,
    clone_spec: CloneSpec,
    phase: Phase,
    session: Option<ModalSession>,
    resize: Option<TweenSet<3>>,
    scaffold_built: bool,
    events: Notifier<ModalEvent>,
}

/// Class name of a plain `.class` selector.
fn selector_class(selector: &str) -> Option<&str> {
    let class = selector.trim().strip_prefix('.')?;
    let simple = !class.is_empty()
        && class
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_');
    simple.then_some(class)
}

impl ModalController {
    pub fn new(config: ModalConfig, time_frame: Duration) -> Result<Self, ConfigError> {
        let steps = ScaleSteps::new(config.scale_step.clone())?;
        let mut strip_classes = vec![SOURCE_CLASS.to_string()];
        if let Some(class) = selector_class(&config.selector) {
            strip_classes.push(class.to_string());
        }
        Ok(Self {
            steps,
            time_frame,
            clone_spec: CloneSpec {
                strip_classes,
                add_class: ITEM_CLASS.to_string(),
            },
            config,
            phase: Phase::Closed,
            session: None,
            resize: None,
            scaffold_built: false,
            events: Notifier::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &ModalConfig {
        &self.config
    }

    #[must_use]
    pub fn steps(&self) -> &ScaleSteps {
        &self.steps
    }

    #[must_use]
    pub fn session(&self) -> Option<&ModalSession> {
        self.session.as_ref()
    }

    pub fn events_mut(&mut self) -> &mut Notifier<ModalEvent> {
        &mut self.events
    }

    #[must_use]
    pub fn state(&self) -> ModalState {
        match self.phase {
            Phase::Closed => ModalState::Closed,
            Phase::Opening => ModalState::Opening,
            Phase::Closing => ModalState::Closing,
            Phase::Open => {
                if self.is_dragging() {
                    ModalState::Dragging
                } else if self.resize.is_some() {
                    ModalState::Resizing
                } else {
                    ModalState::Open
                }
            }
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.phase == Phase::Open
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.drag.is_some())
    }

    /// Build the scaffold if it does not exist yet.
    pub fn ensure_scaffold<S: ModalSurface + ?Sized>(&mut self, surface: &mut S) {
        if self.scaffold_built {
            return;
        }
        let scale_labels = self
            .steps
            .as_slice()
            .iter()
            .map(|&step| scale_label(step, self.config.precision))
            .collect();
        surface.build_scaffold(&ModalScaffold {
            color: self.config.color.clone(),
            enlarge_text: self.config.enlarge_text.clone(),
            shrink_text: self.config.shrink_text.clone(),
            scale_labels,
        });
        self.scaffold_built = true;
        debug!("modal scaffold built");
    }

    // -- open / replace / close ---------------------------------------------

    /// Show clones of `targets`. Does nothing while already open.
    pub fn open<S: ModalSurface + ?Sized>(
        &mut self,
        targets: &[ElementId],
        overrides: &ModalOverrides,
        surface: &mut S,
    ) -> OpenOutcome {
        if matches!(self.phase, Phase::Open | Phase::Opening) {
            debug!("modal already open");
            return OpenOutcome::AlreadyOpen;
        }
        if targets.is_empty() {
            return OpenOutcome::NoTargets;
        }
        self.start_session(targets, overrides, surface)
    }

    /// Swap the displayed content for clones of `targets` (a nested trigger
    /// was activated). Opens normally when closed.
    pub fn replace<S: ModalSurface + ?Sized>(
        &mut self,
        targets: &[ElementId],
        overrides: &ModalOverrides,
        surface: &mut S,
    ) -> OpenOutcome {
        if self.phase == Phase::Closed {
            return self.open(targets, overrides, surface);
        }
        if targets.is_empty() {
            return OpenOutcome::NoTargets;
        }
        self.resize = None;
        self.start_session(targets, overrides, surface)
    }

    fn start_session<S: ModalSurface + ?Sized>(
        &mut self,
        targets: &[ElementId],
        overrides: &ModalOverrides,
        surface: &mut S,
    ) -> OpenOutcome {
        self.ensure_scaffold(surface);
        self.phase = Phase::Opening;
        self.events.emit(ModalEvent::BeforeOpen);
        self.hide_selector(surface);

        surface.clear_content();
        let content_size = surface.mount_content(targets, &self.clone_spec);
        let settings = ModalSettings::resolve(&self.config, overrides);
        surface.set_page_scroll_locked(true);
        surface.set_magnifier_visible(settings.magnify);
        surface.set_viewport_theme(&settings.color);

        let scale = self.initial_scale(content_size, &settings, surface.area_size());
        surface.set_content_scale(scale);
        let shown = content_size.scaled(scale).ceil();
        surface.set_wrapper_size(shown.width, shown.height);
        surface.set_viewport_active(true);
        surface.set_scale_readout(&scale_label(scale, settings.precision));

        debug!(
            targets = targets.len(),
            width = content_size.width,
            height = content_size.height,
            scale,
            "modal opened"
        );
        self.session = Some(ModalSession {
            sources: targets.to_vec(),
            content_size,
            scale,
            displayed: Displayed::at(content_size, scale),
            settings,
            drag: None,
            selector_open: false,
        });
        self.phase = Phase::Open;
        self.events.emit(ModalEvent::AfterOpen { scale });
        OpenOutcome::Opened { scale }
    }

    fn initial_scale(&self, content: Size, settings: &ModalSettings, area: Size) -> f64 {
        if let Some(requested) = settings.scale {
            let rounded = round_to(requested, settings.precision);
            if rounded > 0.0 {
                return self.steps.clamp(rounded);
            }
        }
        if settings.fit {
            self.steps.fit(content, area)
        } else {
            1.0
        }
    }

    /// Hide the modal and restore page scrolling.
    pub fn close<S: ModalSurface + ?Sized>(&mut self, surface: &mut S) -> CloseOutcome {
        if self.phase == Phase::Closed {
            return CloseOutcome::Ignored;
        }
        if self.is_dragging() {
            debug!("close ignored while dragging");
            return CloseOutcome::Ignored;
        }
        self.phase = Phase::Closing;
        self.events.emit(ModalEvent::BeforeClose);
        self.resize = None;
        self.hide_selector(surface);
        surface.set_viewport_active(false);
        surface.clear_content();
        surface.set_page_scroll_locked(false);
        surface.clear_inline_styles();
        self.session = None;
        self.phase = Phase::Closed;
        debug!("modal closed");
        self.events.emit(ModalEvent::AfterClose);
        CloseOutcome::Closed
    }

    /// Close unless the click hit content, controls, or a modal item.
    pub fn close_on_outside_click<S: ModalSurface + ?Sized>(
        &mut self,
        hit: HitRegion,
        surface: &mut S,
    ) -> CloseOutcome {
        if self.phase != Phase::Open {
            return CloseOutcome::Ignored;
        }
        if hit.keeps_modal_open() {
            return CloseOutcome::KeptOpen;
        }
        self.close(surface)
    }

    // -- resize ---------------------------------------------------------------

    /// Animate to `target` (rounded to precision, clamped to the steps).
    pub fn resize<S: ModalSurface + ?Sized>(&mut self, target: f64, surface: &mut S) -> ResizeOutcome {
        if self.phase != Phase::Open {
            return ResizeOutcome::Ignored;
        }
        self.hide_selector(surface);
        let Some(session) = self.session.as_mut() else {
            return ResizeOutcome::Ignored;
        };
        let precision = session.settings.precision;
        let target = self.steps.clamp(round_to(target, precision));
        if (target - session.scale).abs() < SCALE_EPSILON {
            return ResizeOutcome::Unchanged;
        }

        let from = match self.resize.take() {
            Some(in_flight) => Displayed::from_array(in_flight.current()),
            None => session.displayed,
        };
        session.scale = target;
        let to = Displayed::at(session.content_size, target);

        let Some(easing) = session.settings.easing else {
            warn!(easing = %session.settings.easing_name, "unknown resize easing; jumping to target");
            apply_final(surface, session.content_size, target, precision);
            session.displayed = to;
            self.events.emit(ModalEvent::ResizeFinished { scale: target });
            return ResizeOutcome::Jumped { to: target };
        };

        let channels = [
            Tween::new(from.width, to.width, easing),
            Tween::new(from.height, to.height, easing),
            Tween::new(from.scale, to.scale, easing),
        ];
        debug!(from = from.scale, to = target, "modal resize started");
        self.resize = Some(TweenSet::new(
            channels,
            session.settings.duration,
            self.time_frame,
        ));
        ResizeOutcome::Started {
            from: from.scale,
            to: target,
        }
    }

    /// Step up to the next permitted scale.
    pub fn enlarge<S: ModalSurface + ?Sized>(&mut self, surface: &mut S) -> ResizeOutcome {
        let Some(current) = self.session.as_ref().map(ModalSession::scale) else {
            return ResizeOutcome::Ignored;
        };
        self.resize(self.steps.step_up(current), surface)
    }

    /// Step down to the previous permitted scale.
    pub fn shrink<S: ModalSurface + ?Sized>(&mut self, surface: &mut S) -> ResizeOutcome {
        let Some(current) = self.session.as_ref().map(ModalSession::scale) else {
            return ResizeOutcome::Ignored;
        };
        self.resize(self.steps.step_down(current), surface)
    }

    // -- scale selector -------------------------------------------------------

    /// Show the scale list at the row of the current scale. Returns that
    /// row, or `None` when no session is open.
    pub fn open_scale_selector<S: ModalSurface + ?Sized>(&mut self, surface: &mut S) -> Option<usize> {
        if self.phase != Phase::Open {
            return None;
        }
        let session = self.session.as_mut()?;
        let index = self.steps.index_of(session.scale);
        surface.open_scale_selector(index);
        session.selector_open = true;
        Some(index)
    }

    /// Resize to the step in row `index` of the scale list.
    pub fn select_scale<S: ModalSurface + ?Sized>(&mut self, index: usize, surface: &mut S) -> ResizeOutcome {
        match self.steps.get(index) {
            Some(step) => self.resize(step, surface),
            None => ResizeOutcome::Ignored,
        }
    }

    fn hide_selector<S: ModalSurface + ?Sized>(&mut self, surface: &mut S) {
        if let Some(session) = self.session.as_mut().filter(|s| s.selector_open) {
            session.selector_open = false;
            surface.close_scale_selector();
        }
    }

    /// Drive the in-flight resize. Returns [`Step::Done`] when idle.
    pub fn advance<S: ModalSurface + ?Sized>(&mut self, dt: Duration, surface: &mut S) -> Step {
        let Some(mut tween) = self.resize.take() else {
            return Step::Done;
        };
        let Some(session) = self.session.as_mut() else {
            return Step::Done;
        };
        let content = session.content_size;
        let precision = session.settings.precision;
        let target = session.scale;
        let mut displayed = session.displayed;

        let step = tween.advance(dt, |frame| {
            let [width, height, scale] = frame.values;
            if frame.last {
                apply_final(&mut *surface, content, target, precision);
            } else {
                trace!(tick = frame.tick, width, height, scale, "modal resize tick");
                surface.set_content_scale(scale);
                surface.set_wrapper_size(width, height);
            }
            displayed = Displayed::from_array(frame.values);
        });
        session.displayed = displayed;

        match step {
            Step::Done => {
                debug!(scale = target, "modal resize finished");
                self.events.emit(ModalEvent::ResizeFinished { scale: target });
                Step::Done
            }
            Step::Continue => {
                self.resize = Some(tween);
                Step::Continue
            }
        }
    }

    // -- drag -----------------------------------------------------------------

    /// Start panning the wrapper. Refused for touch input, when drag is off
    /// for this session, or when another element holds the drag slot.
    pub fn begin_drag<S: ModalSurface + ?Sized>(
        &mut self,
        slot: &mut DragSlot,
        event: &PointerEvent,
        surface: &S,
    ) -> bool {
        if self.phase != Phase::Open || event.pointer_type.is_touch() {
            return false;
        }
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        if !session.settings.drag || !slot.claim(DragOwner::Modal) {
            return false;
        }
        session.drag = Some(DragOrigin {
            pointer: event.position,
            scroll: surface.wrapper_scroll(),
        });
        true
    }

    /// Pan the wrapper to follow `pointer`.
    pub fn update_drag<S: ModalSurface + ?Sized>(
        &mut self,
        slot: &DragSlot,
        pointer: Point,
        surface: &mut S,
    ) -> bool {
        if !slot.is_held_by(DragOwner::Modal) {
            return false;
        }
        let Some(origin) = self.session.as_ref().and_then(|s| s.drag) else {
            return false;
        };
        surface.set_wrapper_scroll((origin.scroll + origin.pointer - pointer).clamp_non_negative());
        true
    }

    /// Stop panning and release the drag slot.
    pub fn end_drag(&mut self, slot: &mut DragSlot) -> bool {
        let had_origin = self
            .session
            .as_mut()
            .and_then(|s| s.drag.take())
            .is_some();
        slot.release(DragOwner::Modal) || had_origin
    }
}

fn apply_final<S: ModalSurface + ?Sized>(surface: &mut S, content: Size, scale: f64, precision: u32) {
    let shown = content.scaled(scale).ceil();
    surface.set_content_scale(round_to(scale, precision));
    surface.set_wrapper_size(shown.width, shown.height);
    surface.set_scale_readout(&scale_label(scale, precision));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
