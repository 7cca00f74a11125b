#![forbid(unsafe_code)]

//! Lifecycle notifications emitted by page behaviors.
//!
//! Each behavior owns a [`Notifier`](radix_core::notify::Notifier) of its own
//! event type; [`RadixEvent`] is the union the page coordinator hands to the
//! host, which re-dispatches each one as a DOM custom event named by
//! [`RadixEvent::dom_name`].
//!
//! Names follow one pattern: a leading underscore marks the "before" event
//! (`_radixModalOpen`), a trailing one the "after" event (`radixModalOpen_`).

use serde::{Deserialize, Serialize};

/// Page setup lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PageEvent {
    BeforeInit,
    AfterInit,
}

/// Modal lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ModalEvent {
    BeforeOpen,
    AfterOpen { scale: f64 },
    BeforeClose,
    AfterClose,
    ResizeFinished { scale: f64 },
}

/// Smooth-scroll lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ScrollEvent {
    BeforeScroll { to: f64 },
    AfterScroll { to: f64 },
}

/// Navigation toggle lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum NavEvent {
    BeforeOpen,
    AfterOpen,
    BeforeClose,
    AfterClose,
}

/// Any page notification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", content = "event", rename_all = "camelCase")]
pub enum RadixEvent {
    Page(PageEvent),
    Modal(ModalEvent),
    Scroll(ScrollEvent),
    Nav(NavEvent),
}

impl RadixEvent {
    /// DOM custom event name.
    #[must_use]
    pub const fn dom_name(&self) -> &'static str {
        match self {
            Self::Page(PageEvent::BeforeInit) => "_radixInit",
            Self::Page(PageEvent::AfterInit) => "radixInit_",
            Self::Modal(ModalEvent::BeforeOpen) => "_radixModalOpen",
            Self::Modal(ModalEvent::AfterOpen { .. }) => "radixModalOpen_",
            Self::Modal(ModalEvent::BeforeClose) => "_radixModalClose",
            Self::Modal(ModalEvent::AfterClose) => "radixModalClose_",
            Self::Modal(ModalEvent::ResizeFinished { .. }) => "radixModalResize_",
            Self::Scroll(ScrollEvent::BeforeScroll { .. }) => "_radixScroll",
            Self::Scroll(ScrollEvent::AfterScroll { .. }) => "radixScroll_",
            Self::Nav(NavEvent::BeforeOpen) => "_radixNavOpen",
            Self::Nav(NavEvent::AfterOpen) => "radixNavOpen_",
            Self::Nav(NavEvent::BeforeClose) => "_radixNavClose",
            Self::Nav(NavEvent::AfterClose) => "radixNavClose_",
        }
    }
}

impl From<PageEvent> for RadixEvent {
    fn from(e: PageEvent) -> Self {
        Self::Page(e)
    }
}

impl From<ModalEvent> for RadixEvent {
    fn from(e: ModalEvent) -> Self {
        Self::Modal(e)
    }
}

impl From<ScrollEvent> for RadixEvent {
    fn from(e: ScrollEvent) -> Self {
        Self::Scroll(e)
    }
}

impl From<NavEvent> for RadixEvent {
    fn from(e: NavEvent) -> Self {
        Self::Nav(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dom_names() {
        let cases = [
            (RadixEvent::from(PageEvent::BeforeInit), "_radixInit"),
            (RadixEvent::from(PageEvent::AfterInit), "radixInit_"),
            (RadixEvent::from(ModalEvent::BeforeOpen), "_radixModalOpen"),
            (RadixEvent::from(ModalEvent::AfterOpen { scale: 1.0 }), "radixModalOpen_"),
            (RadixEvent::from(ModalEvent::BeforeClose), "_radixModalClose"),
            (RadixEvent::from(ModalEvent::AfterClose), "radixModalClose_"),
            (RadixEvent::from(ScrollEvent::BeforeScroll { to: 0.0 }), "_radixScroll"),
            (RadixEvent::from(ScrollEvent::AfterScroll { to: 0.0 }), "radixScroll_"),
            (RadixEvent::from(NavEvent::BeforeOpen), "_radixNavOpen"),
            (RadixEvent::from(NavEvent::AfterOpen), "radixNavOpen_"),
            (RadixEvent::from(NavEvent::BeforeClose), "_radixNavClose"),
            (RadixEvent::from(NavEvent::AfterClose), "radixNavClose_"),
        ];
        for (event, name) in cases {
            assert_eq!(event.dom_name(), name, "{event:?}");
        }
    }

    #[test]
    fn json_shape() {
        let json = serde_json::to_string(&RadixEvent::Modal(ModalEvent::AfterOpen { scale: 1.5 }))
            .unwrap();
        assert_eq!(
            json,
            r#"{"source":"modal","event":{"type":"afterOpen","scale":1.5}}"#
        );
        let json = serde_json::to_string(&RadixEvent::Page(PageEvent::AfterInit)).unwrap();
        assert_eq!(json, r#"{"source":"page","event":{"type":"afterInit"}}"#);
    }
}
