#![forbid(unsafe_code)]

//! `radix-web` connects Radix page behaviors to a browser page.
//!
//! Design goals:
//! - **Host-driven I/O**: the page discovers elements, measures layout, and
//!   forwards clicks, pointer events and scrolls as JSON.
//! - **Deterministic time**: the page passes frame timestamps (or explicit
//!   deltas); nothing here reads a clock on its own.
//! - **Command output**: every DOM mutation comes back as a `DomCommand`
//!   JSON record for the page to apply, and every notification as a named
//!   event record to re-dispatch.
//!
//! [`WebPage`] is the target-independent core. On `wasm32` it is exported to
//! JS as `RadixWeb`; native builds compile a stub so the workspace checks
//! everywhere.

pub mod clock;
pub mod protocol;

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::RadixWeb;

use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use radix_core::event::PointerEvent;
use radix_core::geometry::Point;
use radix_core::debug;
use radix_page::config::ConfigError;
use radix_page::drag_scroll::RegionMetrics;
use radix_page::nav::NavMode;
use radix_page::overrides::{AppearOverrides, ModalOverrides, ScrollOverrides};
use radix_page::page::ClickOutcome;
use radix_page::scroll_appear::ItemGeometry;
use radix_page::surface::{DomCommand, RecordingSurface};
use radix_page::{Radix, RadixConfig};

use crate::clock::FrameClock;
use crate::protocol::{
    Click, Control, EventRecord, Measurements, Registration, ScrollReport, attribute_pairs,
};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Bridge error type.
#[derive(Debug)]
pub enum WebError {
    /// The configuration was rejected.
    Config(ConfigError),
    /// A message did not parse.
    Json(serde_json::Error),
    /// A control name that does not exist.
    UnknownControl(String),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "invalid configuration: {err}"),
            Self::Json(err) => write!(f, "malformed message: {err}"),
            Self::UnknownControl(name) => write!(f, "unknown control: {name}"),
        }
    }
}

impl std::error::Error for WebError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::UnknownControl(_) => None,
        }
    }
}

impl From<ConfigError> for WebError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<serde_json::Error> for WebError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

pub type Result<T, E = WebError> = std::result::Result<T, E>;

// ---------------------------------------------------------------------------
// WebPage
// ---------------------------------------------------------------------------

/// One page's behaviors on a recording surface.
#[derive(Debug)]
pub struct WebPage {
    page: Radix<RecordingSurface>,
    clock: FrameClock,
    page_host: String,
}

impl WebPage {
    /// Build from a JSON configuration. Blank input means defaults.
    pub fn new(config_json: &str) -> Result<Self> {
        let config = if config_json.trim().is_empty() {
            RadixConfig::default()
        } else {
            RadixConfig::from_json(config_json)?
        };
        Self::with_config(config)
    }

    pub fn with_config(config: RadixConfig) -> Result<Self> {
        Ok(Self {
            page: Radix::new(config, RecordingSurface::new())?,
            clock: FrameClock::new(),
            page_host: String::new(),
        })
    }

    /// Host name the page is served from, for external-link detection.
    pub fn set_page_host(&mut self, host: &str) {
        self.page_host = host.to_string();
    }

    #[must_use]
    pub fn page(&self) -> &Radix<RecordingSurface> {
        &self.page
    }

    /// Apply fresh layout measurements.
    pub fn measure(&mut self, json: &str) -> Result<()> {
        let m: Measurements = serde_json::from_str(json)?;
        let surface = self.page.surface_mut();
        if let Some(y) = m.window_scroll {
            surface.observe_window_scroll(y);
        }
        if let Some(area) = m.area {
            surface.set_area(area);
        }
        if let Some(content) = m.content {
            surface.set_content(content);
        }
        if let Some(offset) = m.wrapper_scroll {
            surface.observe_wrapper_scroll(offset);
        }
        for t in m.element_tops {
            surface.set_element_top(t.el, t.top);
        }
        for s in m.element_scrolls {
            surface.observe_element_scroll(s.el, Point::new(s.x, s.y));
        }
        Ok(())
    }

    /// Register one discovered element.
    pub fn register(&mut self, json: &str) -> Result<()> {
        match serde_json::from_str::<Registration>(json)? {
            Registration::ModalTrigger {
                trigger,
                targets,
                attributes,
            } => {
                let overrides = ModalOverrides::from_attributes(attribute_pairs(&attributes));
                self.page.register_modal_trigger(trigger, targets, overrides);
            }
            Registration::Anchor { name, el } => self.page.register_anchor(name, el),
            Registration::Link {
                el,
                href,
                attributes,
            } => {
                let overrides = ScrollOverrides::from_attributes(attribute_pairs(&attributes));
                self.page
                    .register_link(el, href.as_deref(), &self.page_host, overrides);
            }
            Registration::Icon { el, name } => {
                self.page.register_icon(el, &name);
            }
            Registration::FlexFix {
                container,
                children,
            } => {
                self.page.register_flex_fix(container, children);
            }
            Registration::DragRegion {
                el,
                scroll_width,
                client_width,
            } => self.page.register_drag_region(
                el,
                RegionMetrics {
                    scroll_width,
                    client_width,
                },
            ),
            Registration::AppearItem { el, attributes } => {
                let overrides = AppearOverrides::from_attributes(attribute_pairs(&attributes));
                self.page.register_appear_item(el, &overrides);
            }
            Registration::Nav { triggers, targets } => self.page.register_nav(triggers, targets),
        }
        Ok(())
    }

    /// Route a click. Returns whether it was handled, so the page knows to
    /// cancel the default action.
    pub fn click(&mut self, json: &str) -> Result<bool> {
        let click: Click = serde_json::from_str(json)?;
        let outcome = self.page.click(click.target, click.hit);
        debug!(?outcome, "click routed");
        Ok(!matches!(outcome, ClickOutcome::Ignored))
    }

    /// Route a pointer event. Returns whether a drag consumed it.
    pub fn pointer(&mut self, json: &str) -> Result<bool> {
        let event: PointerEvent = serde_json::from_str(json)?;
        Ok(self.page.pointer(&event))
    }

    /// Run a named control (`closeModal`, `enlarge`, `shrink`,
    /// `scaleSelector`, `navToggle`, `navOpen`, `navClose`).
    pub fn control(&mut self, name: &str) -> Result<()> {
        match name.parse::<Control>()? {
            Control::CloseModal => {
                self.page.close_modal();
            }
            Control::Enlarge => {
                self.page.enlarge_modal();
            }
            Control::Shrink => {
                self.page.shrink_modal();
            }
            Control::ScaleSelector => {
                self.page.open_scale_selector();
            }
            Control::NavToggle => {
                self.page.toggle_nav(NavMode::Toggle);
            }
            Control::NavOpen => {
                self.page.toggle_nav(NavMode::Open);
            }
            Control::NavClose => {
                self.page.toggle_nav(NavMode::Close);
            }
        }
        Ok(())
    }

    pub fn resize_modal(&mut self, scale: f64) {
        self.page.resize_modal(scale);
    }

    /// Row `index` of the scale list was clicked.
    pub fn select_scale(&mut self, index: usize) {
        self.page.select_scale(index);
    }

    pub fn scroll_to(&mut self, y: f64) {
        self.page.scroll_to(y, &ScrollOverrides::default());
    }

    /// Window scrolled: update the offset and re-check appear items.
    pub fn on_scroll(&mut self, json: &str) -> Result<()> {
        let report: ScrollReport = serde_json::from_str(json)?;
        self.page
            .surface_mut()
            .observe_window_scroll(report.page_offset);
        let items: HashMap<_, _> = report
            .items
            .iter()
            .map(|g| {
                (
                    g.el,
                    ItemGeometry {
                        top: g.top,
                        height: g.height,
                    },
                )
            })
            .collect();
        self.page
            .on_scroll(report.window_height, report.page_offset, |el| {
                items.get(&el).copied()
            });
        Ok(())
    }

    pub fn page_loaded(&mut self, preloader: u64) {
        self.page.page_loaded(preloader.into());
    }

    /// Advance by an explicit delta. Returns whether anything is still
    /// running.
    pub fn advance(&mut self, dt_ms: f64) -> bool {
        let dt = if dt_ms.is_finite() && dt_ms > 0.0 {
            Duration::from_secs_f64(dt_ms / 1000.0)
        } else {
            Duration::ZERO
        };
        !self.page.advance(dt).is_done()
    }

    /// Advance to the frame timestamp `now_ms`. Returns whether anything is
    /// still running.
    pub fn frame(&mut self, now_ms: f64) -> bool {
        let dt = self.clock.delta(now_ms);
        let running = !self.page.advance(dt).is_done();
        if !running {
            self.clock.reset();
        }
        running
    }

    pub fn drain_commands(&mut self) -> Vec<DomCommand> {
        self.page.surface_mut().drain_commands()
    }

    pub fn drain_events(&mut self) -> Vec<EventRecord> {
        self.page
            .drain_events()
            .into_iter()
            .map(EventRecord::from)
            .collect()
    }

    pub fn drain_commands_json(&mut self) -> Result<String> {
        Ok(serde_json::to_string(&self.drain_commands())?)
    }

    pub fn drain_events_json(&mut self) -> Result<String> {
        Ok(serde_json::to_string(&self.drain_events())?)
    }
}

/// Install the JSON log subscriber for native embeddings. Returns `false`
/// when a global subscriber already exists.
#[cfg(feature = "tracing-json")]
pub fn init_logging() -> bool {
    radix_core::logging::init_json_subscriber()
}

/// Native builds compile this as a stub so `cargo check --workspace` stays
/// green on non-wasm targets.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Default)]
pub struct RadixWeb;

#[cfg(not(target_arch = "wasm32"))]
impl RadixWeb {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self
    }
}
