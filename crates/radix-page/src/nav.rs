#![forbid(unsafe_code)]

//! Navigation open/close toggle.
//!
//! The host registers the trigger and target elements it resolved from
//! `toggleNav.trigger` and `toggleNav.target`. Opening adds the configured
//! class to all of them (and optionally locks page scroll); closing undoes
//! both. Every transition is bracketed by before/after notifications.

use radix_core::debug;
use radix_core::event::ElementId;
use radix_core::notify::Notifier;
use serde::{Deserialize, Serialize};

use crate::config::ToggleNavConfig;
use crate::events::NavEvent;
use crate::surface::PageHost;

/// Requested transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NavMode {
    Toggle,
    Open,
    Close,
}

#[derive(Debug)]
pub struct NavToggle {
    config: ToggleNavConfig,
    triggers: Vec<ElementId>,
    targets: Vec<ElementId>,
    open: bool,
    events: Notifier<NavEvent>,
}

impl NavToggle {
    #[must_use]
    pub fn new(config: ToggleNavConfig) -> Self {
        Self {
            config,
            triggers: Vec::new(),
            targets: Vec::new(),
            open: false,
            events: Notifier::new(),
        }
    }

    /// Whether the toggle is configured with both selectors.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.config.active && !self.config.trigger.is_empty() && !self.config.target.is_empty()
    }

    pub fn register(&mut self, triggers: Vec<ElementId>, targets: Vec<ElementId>) {
        self.triggers = triggers;
        self.targets = targets;
    }

    #[must_use]
    pub fn is_trigger(&self, el: ElementId) -> bool {
        self.triggers.contains(&el)
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    pub fn events_mut(&mut self) -> &mut Notifier<NavEvent> {
        &mut self.events
    }

    /// Apply `mode`. Returns the resulting open state, or `None` when the
    /// toggle is not enabled.
    pub fn set<H: PageHost + ?Sized>(&mut self, mode: NavMode, host: &mut H) -> Option<bool> {
        if !self.is_enabled() {
            return None;
        }
        let open = match mode {
            NavMode::Toggle => !self.open,
            NavMode::Open => true,
            NavMode::Close => false,
        };
        self.events.emit(if open {
            NavEvent::BeforeOpen
        } else {
            NavEvent::BeforeClose
        });
        if self.config.prevent_scroll {
            host.set_page_scroll_locked(open);
        }
        self.open = open;
        for &el in self.triggers.iter().chain(&self.targets) {
            if open {
                host.add_class(el, &self.config.class);
            } else {
                host.remove_class(el, &self.config.class);
            }
        }
        debug!(open, "navigation toggled");
        self.events.emit(if open {
            NavEvent::AfterOpen
        } else {
            NavEvent::AfterClose
        });
        Some(open)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DomCommand, RecordingSurface};

    fn nav(prevent_scroll: bool) -> NavToggle {
        let mut n = NavToggle::new(ToggleNavConfig {
            active: true,
            trigger: ".burger".into(),
            target: "#menu".into(),
            prevent_scroll,
            ..ToggleNavConfig::default()
        });
        n.register(vec![ElementId(1)], vec![ElementId(2)]);
        n
    }

    #[test]
    fn toggle_flips_and_notifies() {
        let mut host = RecordingSurface::new();
        let mut n = nav(false);
        assert_eq!(n.set(NavMode::Toggle, &mut host), Some(true));
        assert_eq!(n.set(NavMode::Toggle, &mut host), Some(false));
        let events: Vec<_> = n.events_mut().drain_events().collect();
        assert_eq!(
            events,
            vec![
                NavEvent::BeforeOpen,
                NavEvent::AfterOpen,
                NavEvent::BeforeClose,
                NavEvent::AfterClose
            ]
        );
        assert_eq!(
            &host.commands()[..2],
            &[
                DomCommand::AddClass {
                    el: ElementId(1),
                    class: "opened".into()
                },
                DomCommand::AddClass {
                    el: ElementId(2),
                    class: "opened".into()
                },
            ]
        );
    }

    #[test]
    fn explicit_modes_are_idempotent() {
        let mut host = RecordingSurface::new();
        let mut n = nav(false);
        assert_eq!(n.set(NavMode::Close, &mut host), Some(false));
        assert_eq!(n.set(NavMode::Open, &mut host), Some(true));
        assert_eq!(n.set(NavMode::Open, &mut host), Some(true));
        assert!(n.is_open());
    }

    #[test]
    fn prevent_scroll_locks_page() {
        let mut host = RecordingSurface::new();
        let mut n = nav(true);
        n.set(NavMode::Open, &mut host);
        assert!(host.is_scroll_locked());
        n.set(NavMode::Close, &mut host);
        assert!(!host.is_scroll_locked());
    }

    #[test]
    fn disabled_without_selectors() {
        let mut host = RecordingSurface::new();
        let mut n = NavToggle::new(ToggleNavConfig {
            active: true,
            ..ToggleNavConfig::default()
        });
        assert_eq!(n.set(NavMode::Toggle, &mut host), None);
        assert!(host.commands().is_empty());
    }
}
