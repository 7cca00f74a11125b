#![forbid(unsafe_code)]

//! Pointer input as reported by the host page.
//!
//! The host translates `mousedown`/`mousemove`/`mouseup` and their touch
//! counterparts into [`PointerEvent`]s. Element identity is an opaque
//! [`ElementId`] the host assigns; the host also resolves which modal
//! regions contain the target and reports them as [`HitRegion`] flags, so
//! the core never walks a DOM tree.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Opaque handle for a host DOM node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(pub u64);

impl ElementId {
    #[inline]
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[inline]
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for ElementId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

/// Input device behind a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerType {
    #[default]
    Mouse,
    Pen,
    Touch,
}

impl PointerType {
    /// Touch input scrolls natively and never starts a drag-pan.
    #[inline]
    #[must_use]
    pub const fn is_touch(self) -> bool {
        matches!(self, Self::Touch)
    }
}

/// Pointer lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerPhase {
    Down,
    Move,
    Up,
}

bitflags! {
    /// Modal regions that contain an event target.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct HitRegion: u8 {
        /// Inside the content box.
        const CONTENT = 0b0001;
        /// Inside the toggle controls (close button, magnifier).
        const TOGGLES = 0b0010;
        /// The target is itself a cloned modal item or nested trigger.
        const ITEM    = 0b0100;
        /// Inside the scrollable wrapper.
        const WRAPPER = 0b1000;
    }
}

impl HitRegion {
    /// Whether a click here should keep the modal open.
    #[inline]
    #[must_use]
    pub fn keeps_modal_open(self) -> bool {
        self.intersects(Self::CONTENT | Self::TOGGLES | Self::ITEM)
    }
}

impl Serialize for HitRegion {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.bits())
    }
}

impl<'de> Deserialize<'de> for HitRegion {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bits = u8::deserialize(deserializer)?;
        Ok(Self::from_bits_truncate(bits))
    }
}

/// A pointer event in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointerEvent {
    pub phase: PointerPhase,
    #[serde(default)]
    pub pointer_type: PointerType,
    pub position: Point,
    #[serde(default)]
    pub target: Option<ElementId>,
    #[serde(default)]
    pub hit: HitRegion,
}

impl PointerEvent {
    #[must_use]
    pub fn new(phase: PointerPhase, position: Point) -> Self {
        Self {
            phase,
            pointer_type: PointerType::Mouse,
            position,
            target: None,
            hit: HitRegion::empty(),
        }
    }

    #[must_use]
    pub fn down(x: f64, y: f64) -> Self {
        Self::new(PointerPhase::Down, Point::new(x, y))
    }

    #[must_use]
    pub fn moved(x: f64, y: f64) -> Self {
        Self::new(PointerPhase::Move, Point::new(x, y))
    }

    #[must_use]
    pub fn up(x: f64, y: f64) -> Self {
        Self::new(PointerPhase::Up, Point::new(x, y))
    }

    #[must_use]
    pub fn with_pointer_type(mut self, pointer_type: PointerType) -> Self {
        self.pointer_type = pointer_type;
        self
    }

    #[must_use]
    pub fn with_target(mut self, target: ElementId) -> Self {
        self.target = Some(target);
        self
    }

    #[must_use]
    pub fn with_hit(mut self, hit: HitRegion) -> Self {
        self.hit = hit;
        self
    }
}
