#![forbid(unsafe_code)]

//! JSON messages exchanged with the embedding page.
//!
//! Inputs are camelCase JSON objects the page builds from DOM queries and
//! listeners. Data attributes travel as a plain `name -> value` map exactly
//! as read from the element (`"data-modal-scale": "2"`).

use std::collections::BTreeMap;
use std::str::FromStr;

use radix_core::event::{ElementId, HitRegion};
use radix_core::geometry::{Point, Size};
use radix_page::events::RadixEvent;
use serde::{Deserialize, Serialize};

use crate::WebError;

/// Raw data attributes of one element.
pub type Attributes = BTreeMap<String, String>;

pub(crate) fn attribute_pairs(attributes: &Attributes) -> impl Iterator<Item = (&str, &str)> {
    attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
}

/// An element discovered by the page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Registration {
    ModalTrigger {
        trigger: ElementId,
        #[serde(default)]
        targets: Vec<ElementId>,
        #[serde(default)]
        attributes: Attributes,
    },
    Anchor {
        name: String,
        el: ElementId,
    },
    Link {
        el: ElementId,
        #[serde(default)]
        href: Option<String>,
        #[serde(default)]
        attributes: Attributes,
    },
    Icon {
        el: ElementId,
        name: String,
    },
    FlexFix {
        container: ElementId,
        children: usize,
    },
    DragRegion {
        el: ElementId,
        scroll_width: f64,
        client_width: f64,
    },
    AppearItem {
        el: ElementId,
        #[serde(default)]
        attributes: Attributes,
    },
    Nav {
        triggers: Vec<ElementId>,
        targets: Vec<ElementId>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ElementTop {
    pub el: ElementId,
    pub top: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ElementScroll {
    pub el: ElementId,
    pub x: f64,
    pub y: f64,
}

/// Layout values measured by the page. Absent fields keep their previous
/// value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Measurements {
    pub window_scroll: Option<f64>,
    /// Inner size of the modal area.
    pub area: Option<Size>,
    /// Natural size of the content the next open will mount.
    pub content: Option<Size>,
    pub wrapper_scroll: Option<Point>,
    pub element_tops: Vec<ElementTop>,
    pub element_scrolls: Vec<ElementScroll>,
}

/// A click, with the modal regions containing its target.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Click {
    #[serde(default)]
    pub target: Option<ElementId>,
    #[serde(default)]
    pub hit: HitRegion,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct AppearGeometry {
    pub el: ElementId,
    pub top: f64,
    pub height: f64,
}

/// Window scroll report for scroll-appear.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollReport {
    pub window_height: f64,
    pub page_offset: f64,
    #[serde(default)]
    pub items: Vec<AppearGeometry>,
}

/// Button-style actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    CloseModal,
    Enlarge,
    Shrink,
    ScaleSelector,
    NavToggle,
    NavOpen,
    NavClose,
}

impl FromStr for Control {
    type Err = WebError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "closeModal" => Ok(Self::CloseModal),
            "enlarge" => Ok(Self::Enlarge),
            "shrink" => Ok(Self::Shrink),
            "scaleSelector" => Ok(Self::ScaleSelector),
            "navToggle" => Ok(Self::NavToggle),
            "navOpen" => Ok(Self::NavOpen),
            "navClose" => Ok(Self::NavClose),
            other => Err(WebError::UnknownControl(other.to_string())),
        }
    }
}

/// A notification ready to be dispatched as a DOM custom event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EventRecord {
    pub name: &'static str,
    pub detail: RadixEvent,
}

impl From<RadixEvent> for EventRecord {
    fn from(detail: RadixEvent) -> Self {
        Self {
            name: detail.dom_name(),
            detail,
        }
    }
}
