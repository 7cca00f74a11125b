#![forbid(unsafe_code)]

//! The boundary between page behaviors and the DOM.
//!
//! Behaviors never touch a document. They read a handful of measurements
//! and issue mutations through [`PageHost`] (page-wide effects) and
//! [`ModalSurface`] (the modal scaffold). A browser embedding implements the
//! traits directly; [`RecordingSurface`] implements them in memory, logging
//! every mutation as a serializable [`DomCommand`] and answering reads from
//! values the host measured ahead of time.
//!
//! # Invariants
//!
//! 1. [`RecordingSurface`] appends exactly one command per mutating call, in
//!    call order.
//! 2. Reads never produce commands.

use std::collections::HashMap;

use radix_core::event::ElementId;
use radix_core::format::{css_min_px, css_scale};
use radix_core::geometry::{Point, Size};
use serde::{Deserialize, Serialize};

use crate::icons::Icon;

/// Class added to every element registered as modal content.
pub const SOURCE_CLASS: &str = "rdx-modal-source";
/// Class added to every clone mounted in the modal.
pub const ITEM_CLASS: &str = "rdx-modal-item";
/// Class that marks an active viewport, nav, or preloader state.
pub const ACTIVE_CLASS: &str = "active";
/// Class that hides a preloader or scroll hint.
pub const HIDE_CLASS: &str = "hide";
/// Class added to flex-fix dummy items.
pub const DUMMY_CLASS: &str = "rdx-dummy-item";
/// Height of one scale-selector row, in CSS pixels.
pub const SCALE_ITEM_HEIGHT: f64 = 40.0;

/// How content is cloned into the modal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloneSpec {
    pub strip_classes: Vec<String>,
    pub add_class: String,
}

/// Static parts of the modal scaffold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModalScaffold {
    pub color: String,
    pub enlarge_text: String,
    pub shrink_text: String,
    /// One selector row per permitted scale, smallest first.
    pub scale_labels: Vec<String>,
}

/// Page-wide DOM effects.
pub trait PageHost {
    /// Current window scroll offset.
    fn window_scroll(&self) -> f64;
    fn set_window_scroll(&mut self, y: f64);
    /// Lock or unlock scrolling of the page behind overlays.
    fn set_page_scroll_locked(&mut self, locked: bool);

    /// Top edge of `el` relative to the viewport, if it exists.
    fn element_top(&self, el: ElementId) -> Option<f64>;
    fn element_scroll(&self, el: ElementId) -> Point;
    fn set_element_scroll(&mut self, el: ElementId, offset: Point);

    fn add_class(&mut self, el: ElementId, class: &str);
    fn remove_class(&mut self, el: ElementId, class: &str);
    fn set_attribute(&mut self, el: ElementId, name: &str, value: &str);
    fn set_style(&mut self, el: ElementId, property: &str, value: &str);

    /// Replace the children of `el` with a copy of `icon`.
    fn replace_with_icon(&mut self, el: ElementId, icon: Icon);
    /// Append `count` copies of the first child of `container`, marked with
    /// [`DUMMY_CLASS`]; `deep` copies descendants too.
    fn append_dummies(&mut self, container: ElementId, count: usize, deep: bool);
    /// Append a scroll hint (arrow icon) to a drag-scroll region.
    fn append_scroll_hint(&mut self, el: ElementId);
    fn hide_scroll_hint(&mut self, el: ElementId);
}

/// The modal scaffold: viewport, area, wrapper, content, and toggles.
pub trait ModalSurface: PageHost {
    fn build_scaffold(&mut self, scaffold: &ModalScaffold);
    /// Clone `sources` into the content box and return its natural size.
    fn mount_content(&mut self, sources: &[ElementId], spec: &CloneSpec) -> Size;
    fn clear_content(&mut self);
    /// Inner size of the area the wrapper may occupy.
    fn area_size(&self) -> Size;

    fn set_content_scale(&mut self, scale: f64);
    fn set_wrapper_size(&mut self, width: f64, height: f64);
    /// Drop inline styles from content and wrapper.
    fn clear_inline_styles(&mut self);

    fn set_viewport_active(&mut self, active: bool);
    fn set_viewport_theme(&mut self, color: &str);
    fn set_magnifier_visible(&mut self, visible: bool);
    fn set_scale_readout(&mut self, text: &str);
    /// Show the scale list scrolled to row `index`.
    fn open_scale_selector(&mut self, index: usize);
    fn close_scale_selector(&mut self);

    fn wrapper_scroll(&self) -> Point;
    fn set_wrapper_scroll(&mut self, offset: Point);
}

// ---------------------------------------------------------------------------
// DomCommand
// ---------------------------------------------------------------------------

/// A recorded DOM mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum DomCommand {
    SetWindowScroll { y: f64 },
    LockPageScroll { locked: bool },
    SetElementScroll { el: ElementId, x: f64, y: f64 },
    AddClass { el: ElementId, class: String },
    RemoveClass { el: ElementId, class: String },
    SetAttribute { el: ElementId, name: String, value: String },
    SetStyle { el: ElementId, property: String, value: String },
    ReplaceWithIcon { el: ElementId, icon: Icon },
    AppendDummies { container: ElementId, count: usize, deep: bool },
    AppendScrollHint { el: ElementId },
    HideScrollHint { el: ElementId },
    BuildModal(ModalScaffold),
    MountContent { sources: Vec<ElementId>, spec: CloneSpec },
    ClearContent,
    SetContentTransform { value: String },
    SetWrapperSize { width: String, height: String },
    ClearModalStyles,
    SetViewportActive { active: bool },
    SetViewportTheme { color: String },
    SetMagnifierVisible { visible: bool },
    SetScaleReadout { text: String },
    OpenScaleSelector { index: usize, scroll_top: f64 },
    CloseScaleSelector,
    SetWrapperScroll { x: f64, y: f64 },
}

// ---------------------------------------------------------------------------
// RecordingSurface
// ---------------------------------------------------------------------------

/// In-memory surface that records commands.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    commands: Vec<DomCommand>,
    window_scroll: f64,
    scroll_locked: bool,
    area: Size,
    content: Size,
    wrapper_scroll: Point,
    element_tops: HashMap<ElementId, f64>,
    element_scrolls: HashMap<ElementId, Point>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the area size reported to the modal.
    #[must_use]
    pub fn with_area(mut self, area: Size) -> Self {
        self.area = area;
        self
    }

    /// Set the content size reported by the next mounts.
    #[must_use]
    pub fn with_content(mut self, content: Size) -> Self {
        self.content = content;
        self
    }

    pub fn set_area(&mut self, area: Size) {
        self.area = area;
    }

    pub fn set_content(&mut self, content: Size) {
        self.content = content;
    }

    /// Record a measured viewport-relative element top.
    pub fn set_element_top(&mut self, el: ElementId, top: f64) {
        self.element_tops.insert(el, top);
    }

    /// Sync the window offset from the real page without recording.
    pub fn observe_window_scroll(&mut self, y: f64) {
        self.window_scroll = y;
    }

    /// Sync an element offset from the real page without recording.
    pub fn observe_element_scroll(&mut self, el: ElementId, offset: Point) {
        self.element_scrolls.insert(el, offset);
    }

    /// Sync the wrapper offset from the real page without recording.
    pub fn observe_wrapper_scroll(&mut self, offset: Point) {
        self.wrapper_scroll = offset;
    }

    #[must_use]
    pub fn commands(&self) -> &[DomCommand] {
        &self.commands
    }

    /// Take all recorded commands.
    pub fn drain_commands(&mut self) -> Vec<DomCommand> {
        std::mem::take(&mut self.commands)
    }

    #[must_use]
    pub const fn is_scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    fn push(&mut self, command: DomCommand) {
        self.commands.push(command);
    }
}

impl PageHost for RecordingSurface {
    fn window_scroll(&self) -> f64 {
        self.window_scroll
    }

    fn set_window_scroll(&mut self, y: f64) {
        self.window_scroll = y;
        self.push(DomCommand::SetWindowScroll { y });
    }

    fn set_page_scroll_locked(&mut self, locked: bool) {
        self.scroll_locked = locked;
        self.push(DomCommand::LockPageScroll { locked });
    }

    fn element_top(&self, el: ElementId) -> Option<f64> {
        self.element_tops.get(&el).copied()
    }

    fn element_scroll(&self, el: ElementId) -> Point {
        self.element_scrolls.get(&el).copied().unwrap_or_default()
    }

    fn set_element_scroll(&mut self, el: ElementId, offset: Point) {
        self.element_scrolls.insert(el, offset);
        self.push(DomCommand::SetElementScroll {
            el,
            x: offset.x,
            y: offset.y,
        });
    }

    fn add_class(&mut self, el: ElementId, class: &str) {
        self.push(DomCommand::AddClass {
            el,
            class: class.to_string(),
        });
    }

    fn remove_class(&mut self, el: ElementId, class: &str) {
        self.push(DomCommand::RemoveClass {
            el,
            class: class.to_string(),
        });
    }

    fn set_attribute(&mut self, el: ElementId, name: &str, value: &str) {
        self.push(DomCommand::SetAttribute {
            el,
            name: name.to_string(),
            value: value.to_string(),
        });
    }

    fn set_style(&mut self, el: ElementId, property: &str, value: &str) {
        self.push(DomCommand::SetStyle {
            el,
            property: property.to_string(),
            value: value.to_string(),
        });
    }

    fn replace_with_icon(&mut self, el: ElementId, icon: Icon) {
        self.push(DomCommand::ReplaceWithIcon { el, icon });
    }

    fn append_dummies(&mut self, container: ElementId, count: usize, deep: bool) {
        self.push(DomCommand::AppendDummies {
            container,
            count,
            deep,
        });
    }

    fn append_scroll_hint(&mut self, el: ElementId) {
        self.push(DomCommand::AppendScrollHint { el });
    }

    fn hide_scroll_hint(&mut self, el: ElementId) {
        self.push(DomCommand::HideScrollHint { el });
    }
}

impl ModalSurface for RecordingSurface {
    fn build_scaffold(&mut self, scaffold: &ModalScaffold) {
        self.push(DomCommand::BuildModal(scaffold.clone()));
    }

    fn mount_content(&mut self, sources: &[ElementId], spec: &CloneSpec) -> Size {
        self.push(DomCommand::MountContent {
            sources: sources.to_vec(),
            spec: spec.clone(),
        });
        self.content
    }

    fn clear_content(&mut self) {
        self.push(DomCommand::ClearContent);
    }

    fn area_size(&self) -> Size {
        self.area
    }

    fn set_content_scale(&mut self, scale: f64) {
        self.push(DomCommand::SetContentTransform {
            value: css_scale(scale),
        });
    }

    fn set_wrapper_size(&mut self, width: f64, height: f64) {
        self.push(DomCommand::SetWrapperSize {
            width: css_min_px(width),
            height: css_min_px(height),
        });
    }

    fn clear_inline_styles(&mut self) {
        self.push(DomCommand::ClearModalStyles);
    }

    fn set_viewport_active(&mut self, active: bool) {
        self.push(DomCommand::SetViewportActive { active });
    }

    fn set_viewport_theme(&mut self, color: &str) {
        self.push(DomCommand::SetViewportTheme {
            color: color.to_string(),
        });
    }

    fn set_magnifier_visible(&mut self, visible: bool) {
        self.push(DomCommand::SetMagnifierVisible { visible });
    }

    fn set_scale_readout(&mut self, text: &str) {
        self.push(DomCommand::SetScaleReadout {
            text: text.to_string(),
        });
    }

    fn open_scale_selector(&mut self, index: usize) {
        self.push(DomCommand::OpenScaleSelector {
            index,
            scroll_top: SCALE_ITEM_HEIGHT * index as f64,
        });
    }

    fn close_scale_selector(&mut self) {
        self.push(DomCommand::CloseScaleSelector);
    }

    fn wrapper_scroll(&self) -> Point {
        self.wrapper_scroll
    }

    fn set_wrapper_scroll(&mut self, offset: Point) {
        self.wrapper_scroll = offset;
        self.push(DomCommand::SetWrapperScroll {
            x: offset.x,
            y: offset.y,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_do_not_record() {
        let mut s = RecordingSurface::new().with_area(Size::new(800.0, 600.0));
        s.observe_window_scroll(120.0);
        assert_eq!(s.window_scroll(), 120.0);
        assert_eq!(s.area_size(), Size::new(800.0, 600.0));
        assert_eq!(s.element_scroll(ElementId(1)), Point::ZERO);
        assert!(s.commands().is_empty());
    }

    #[test]
    fn writes_record_in_order() {
        let mut s = RecordingSurface::new();
        s.set_window_scroll(40.0);
        s.set_content_scale(1.5);
        s.set_wrapper_size(600.0, 450.0);
        assert_eq!(
            s.drain_commands(),
            vec![
                DomCommand::SetWindowScroll { y: 40.0 },
                DomCommand::SetContentTransform {
                    value: "scale(1.5)".into()
                },
                DomCommand::SetWrapperSize {
                    width: "min(600px, 100%)".into(),
                    height: "min(450px, 100%)".into()
                },
            ]
        );
        assert!(s.commands().is_empty());
        assert_eq!(s.window_scroll(), 40.0);
    }

    #[test]
    fn command_json_shape() {
        let json = serde_json::to_string(&DomCommand::AddClass {
            el: ElementId(7),
            class: "active".into(),
        })
        .unwrap();
        assert_eq!(json, r#"{"op":"addClass","el":7,"class":"active"}"#);

        let json = serde_json::to_string(&DomCommand::AppendDummies {
            container: ElementId(2),
            count: 3,
            deep: false,
        })
        .unwrap();
        assert_eq!(
            json,
            r#"{"op":"appendDummies","container":2,"count":3,"deep":false}"#
        );
    }

    #[test]
    fn selector_rows_scroll_by_item_height() {
        let mut s = RecordingSurface::new();
        s.open_scale_selector(3);
        s.close_scale_selector();
        assert_eq!(
            s.commands(),
            &[
                DomCommand::OpenScaleSelector {
                    index: 3,
                    scroll_top: 120.0
                },
                DomCommand::CloseScaleSelector,
            ]
        );
        let json = serde_json::to_string(&s.commands()[0]).unwrap();
        assert_eq!(json, r#"{"op":"openScaleSelector","index":3,"scrollTop":120.0}"#);
    }
}
