//! End-to-end flows through the page coordinator on a recording surface.

use std::time::Duration;

use pretty_assertions::assert_eq;
use radix_core::animation::Step;
use radix_core::event::{ElementId, HitRegion, PointerEvent};
use radix_core::geometry::Size;
use radix_page::events::{ModalEvent, RadixEvent, ScrollEvent};
use radix_page::modal::ModalState;
use radix_page::overrides::{ModalOverrides, ScrollOverrides};
use radix_page::surface::{CloneSpec, DomCommand, ModalScaffold, RecordingSurface};
use radix_page::{Radix, RadixConfig};

const TRIGGER: ElementId = ElementId(1);
const IMAGE: ElementId = ElementId(2);

fn config() -> RadixConfig {
    RadixConfig::from_json(
        r#"{
            "timeFrame": 20,
            "somethingElse": true,
            "modal": { "color": "white", "scaleStep": [0.5, 1, 2], "resizeDuration": 40 }
        }"#,
    )
    .unwrap()
}

fn page() -> Radix<RecordingSurface> {
    let surface = RecordingSurface::new()
        .with_area(Size::new(500.0, 500.0))
        .with_content(Size::new(200.0, 100.0));
    let mut page = Radix::new(config(), surface).unwrap();
    page.drain_events();
    page
}

fn min_px(w: &str, h: &str) -> DomCommand {
    DomCommand::SetWrapperSize {
        width: format!("min({w}px, 100%)"),
        height: format!("min({h}px, 100%)"),
    }
}

fn transform(value: &str) -> DomCommand {
    DomCommand::SetContentTransform {
        value: value.to_string(),
    }
}

#[test]
fn modal_open_and_step_resize_command_stream() {
    let mut page = page();
    let overrides = ModalOverrides::from_attributes([
        ("data-modal-color", "red"),
        ("data-modal-fit", "false"),
        ("data-modal-easing", "linear"),
    ]);
    assert!(page.register_modal_trigger(TRIGGER, vec![IMAGE], overrides));
    page.click(Some(TRIGGER), HitRegion::empty());
    page.enlarge_modal();
    assert_eq!(page.advance(Duration::from_millis(60)), Step::Done);

    assert_eq!(
        page.surface_mut().drain_commands(),
        vec![
            DomCommand::AddClass {
                el: IMAGE,
                class: "rdx-modal-source".into()
            },
            DomCommand::BuildModal(ModalScaffold {
                color: "white".into(),
                enlarge_text: "拡大".into(),
                shrink_text: "縮小".into(),
                scale_labels: vec!["0.5x".into(), "1x".into(), "2x".into()],
            }),
            DomCommand::ClearContent,
            DomCommand::MountContent {
                sources: vec![IMAGE],
                spec: CloneSpec {
                    strip_classes: vec!["rdx-modal-source".into(), "radix-modal".into()],
                    add_class: "rdx-modal-item".into(),
                },
            },
            DomCommand::LockPageScroll { locked: true },
            DomCommand::SetMagnifierVisible { visible: true },
            DomCommand::SetViewportTheme {
                color: "red".into()
            },
            transform("scale(1)"),
            min_px("200", "100"),
            DomCommand::SetViewportActive { active: true },
            DomCommand::SetScaleReadout { text: "1x".into() },
            // 20 ms
            transform("scale(1.5)"),
            min_px("300", "150"),
            // 40 ms
            transform("scale(2)"),
            min_px("400", "200"),
            // final
            transform("scale(2)"),
            min_px("400", "200"),
            DomCommand::SetScaleReadout { text: "2x".into() },
        ]
    );
    assert_eq!(
        page.drain_events(),
        vec![
            RadixEvent::Modal(ModalEvent::BeforeOpen),
            RadixEvent::Modal(ModalEvent::AfterOpen { scale: 1.0 }),
            RadixEvent::Modal(ModalEvent::ResizeFinished { scale: 2.0 }),
        ]
    );
}

#[test]
fn close_clears_and_unlocks() {
    let mut page = page();
    page.register_modal_trigger(TRIGGER, vec![IMAGE], ModalOverrides::default());
    page.activate_trigger(TRIGGER);
    page.surface_mut().drain_commands();

    page.click(None, HitRegion::empty());
    assert_eq!(page.modal_state(), Some(ModalState::Closed));
    assert_eq!(
        page.surface_mut().drain_commands(),
        vec![
            DomCommand::SetViewportActive { active: false },
            DomCommand::ClearContent,
            DomCommand::LockPageScroll { locked: false },
            DomCommand::ClearModalStyles,
        ]
    );
}

#[test]
fn drag_across_behaviors_is_exclusive() {
    use radix_page::drag_scroll::RegionMetrics;

    let mut page = page();
    let region = ElementId(30);
    page.register_drag_region(
        region,
        RegionMetrics {
            scroll_width: 1000.0,
            client_width: 200.0,
        },
    );
    page.register_modal_trigger(TRIGGER, vec![IMAGE], ModalOverrides::default());
    page.activate_trigger(TRIGGER);

    assert!(page.pointer(&PointerEvent::down(0.0, 0.0).with_hit(HitRegion::WRAPPER)));
    assert!(!page.pointer(&PointerEvent::down(0.0, 0.0).with_target(region)));
    assert!(page.pointer(&PointerEvent::up(0.0, 0.0)));
    assert!(page.pointer(&PointerEvent::down(0.0, 0.0).with_target(region)));
    assert_eq!(page.modal_state(), Some(ModalState::Open));
}

#[test]
fn smooth_scroll_with_link_overrides() {
    let mut page = page();
    let overrides = ScrollOverrides::from_attributes([
        ("data-scroll-duration", "50"),
        ("data-scroll-easing", "linear"),
    ]);
    let link = ElementId(5);
    let target = ElementId(6);
    page.register_anchor("news", target);
    page.surface_mut().set_element_top(target, 100.0);
    page.register_link(link, Some("#news"), "example.com", overrides);
    page.click(Some(link), HitRegion::empty());

    assert_eq!(page.advance(Duration::from_millis(60)), Step::Done);
    let scrolls: Vec<f64> = page
        .surface()
        .commands()
        .iter()
        .filter_map(|c| match c {
            DomCommand::SetWindowScroll { y } => Some(*y),
            _ => None,
        })
        .collect();
    assert_eq!(scrolls.len(), 3);
    assert!((scrolls[0] - 40.0).abs() < 1e-9);
    assert!((scrolls[1] - 80.0).abs() < 1e-9);
    assert_eq!(scrolls[2], 100.0);
    assert_eq!(
        page.drain_events(),
        vec![
            RadixEvent::Scroll(ScrollEvent::BeforeScroll { to: 100.0 }),
            RadixEvent::Scroll(ScrollEvent::AfterScroll { to: 100.0 }),
        ]
    );
}

#[test]
fn external_and_pdf_links_open_in_new_tab() {
    let mut page = page();
    for (id, href) in [
        (7, "https://other.org/x"),
        (8, "/files/menu.pdf"),
        (9, "https://example.com/about"),
    ] {
        page.register_link(ElementId(id), Some(href), "example.com", ScrollOverrides::default());
    }
    assert_eq!(
        page.surface().commands(),
        &[
            DomCommand::SetAttribute {
                el: ElementId(7),
                name: "target".into(),
                value: "_blank".into()
            },
            DomCommand::AddClass {
                el: ElementId(7),
                class: "rdx-extlink".into()
            },
            DomCommand::SetAttribute {
                el: ElementId(8),
                name: "target".into(),
                value: "_blank".into()
            },
            DomCommand::AddClass {
                el: ElementId(8),
                class: "rdx-pdf".into()
            },
        ]
    );
}

#[test]
fn scale_selector_round_trip() {
    use radix_page::modal::ResizeOutcome;

    let mut page = page();
    page.register_modal_trigger(TRIGGER, vec![IMAGE], ModalOverrides::default());
    page.activate_trigger(TRIGGER);
    page.surface_mut().drain_commands();

    assert_eq!(page.open_scale_selector(), Some(2));
    assert_eq!(
        page.select_scale(0),
        ResizeOutcome::Started { from: 2.0, to: 0.5 }
    );
    assert_eq!(
        page.surface_mut().drain_commands(),
        vec![
            DomCommand::OpenScaleSelector {
                index: 2,
                scroll_top: 80.0
            },
            DomCommand::CloseScaleSelector,
        ]
    );
    assert_eq!(page.advance(Duration::from_millis(60)), Step::Done);
    assert_eq!(
        page.surface().commands().last(),
        Some(&DomCommand::SetScaleReadout { text: "0.5x".into() })
    );
}
