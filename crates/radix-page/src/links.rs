#![forbid(unsafe_code)]

//! Anchor rewriting rules.
//!
//! For every `<a>` on the page:
//!
//! - a missing or empty `href` becomes `#`;
//! - `#` scrolls smoothly to the top of the page, `#id` to that element;
//! - `*.pdf` opens in a new tab and gains `rdx-pdf`;
//! - `http…` links that do not mention the current host open in a new tab
//!   and gain `rdx-extlink`.

use radix_core::event::ElementId;
use serde::{Deserialize, Serialize};

use crate::config::{AutoTargetBlankConfig, SmoothScrollConfig};
use crate::surface::PageHost;

pub const PDF_CLASS: &str = "rdx-pdf";
pub const EXTERNAL_CLASS: &str = "rdx-extlink";

/// Where a smooth-scroll link goes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "camelCase")]
pub enum ScrollTarget {
    /// Top of the page (`href="#"`).
    Top,
    /// Element with this DOM id (`href="#id"`).
    Anchor(String),
}

/// Why a link opens in a new tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NewTab {
    Pdf,
    External,
}

impl NewTab {
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Pdf => PDF_CLASS,
            Self::External => EXTERNAL_CLASS,
        }
    }
}

/// What to do with one link.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkPlan {
    /// Replacement `href`, when the original was missing or empty.
    pub href: Option<String>,
    pub scroll: Option<ScrollTarget>,
    pub new_tab: Option<NewTab>,
}

/// Decide how to treat a link with `href` on a page served from `page_host`.
#[must_use]
pub fn classify(
    href: Option<&str>,
    page_host: &str,
    smooth: &SmoothScrollConfig,
    auto_blank: &AutoTargetBlankConfig,
) -> LinkPlan {
    let mut plan = LinkPlan::default();
    if !smooth.active && !auto_blank.active {
        return plan;
    }
    let href = match href {
        Some(h) if !h.is_empty() => h,
        _ => {
            plan.href = Some("#".to_string());
            "#"
        }
    };

    if smooth.active {
        if href == "#" {
            plan.scroll = Some(ScrollTarget::Top);
        } else if let Some(id) = href.strip_prefix('#') {
            plan.scroll = Some(ScrollTarget::Anchor(id.to_string()));
        }
    }

    if auto_blank.active {
        if href.len() > ".pdf".len() && href.ends_with(".pdf") {
            plan.new_tab = Some(NewTab::Pdf);
        } else if href.starts_with("http") && (page_host.is_empty() || !href.contains(page_host))
        {
            plan.new_tab = Some(NewTab::External);
        }
    }
    plan
}

/// Apply the attribute side of `plan` to `link`.
pub fn apply<H: PageHost + ?Sized>(link: ElementId, plan: &LinkPlan, host: &mut H) {
    if let Some(href) = &plan.href {
        host.set_attribute(link, "href", href);
    }
    if let Some(kind) = plan.new_tab {
        host.set_attribute(link, "target", "_blank");
        host.add_class(link, kind.class());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DomCommand, RecordingSurface};

    fn plan(href: Option<&str>) -> LinkPlan {
        classify(
            href,
            "example.com",
            &SmoothScrollConfig::default(),
            &AutoTargetBlankConfig::default(),
        )
    }

    #[test]
    fn missing_href_becomes_hash() {
        let p = plan(None);
        assert_eq!(p.href.as_deref(), Some("#"));
        assert_eq!(p.scroll, Some(ScrollTarget::Top));
        assert_eq!(plan(Some("")).href.as_deref(), Some("#"));
    }

    #[test]
    fn anchors_scroll() {
        assert_eq!(
            plan(Some("#contact")).scroll,
            Some(ScrollTarget::Anchor("contact".into()))
        );
        assert_eq!(plan(Some("/about")).scroll, None);
    }

    #[test]
    fn pdf_and_external_links() {
        assert_eq!(plan(Some("/files/guide.pdf")).new_tab, Some(NewTab::Pdf));
        assert_eq!(plan(Some(".pdf")).new_tab, None);
        assert_eq!(plan(Some("https://other.org/x")).new_tab, Some(NewTab::External));
        assert_eq!(plan(Some("https://example.com/x")).new_tab, None);
        assert_eq!(plan(Some("/local")).new_tab, None);
    }

    #[test]
    fn empty_page_host_treats_all_http_as_external() {
        let p = classify(
            Some("https://example.com/"),
            "",
            &SmoothScrollConfig::default(),
            &AutoTargetBlankConfig::default(),
        );
        assert_eq!(p.new_tab, Some(NewTab::External));
    }

    #[test]
    fn disabled_features_do_nothing() {
        let smooth = SmoothScrollConfig {
            active: false,
            ..SmoothScrollConfig::default()
        };
        let blank = AutoTargetBlankConfig { active: false };
        assert_eq!(classify(None, "x", &smooth, &blank), LinkPlan::default());
    }

    #[test]
    fn apply_sets_attributes() {
        let mut host = RecordingSurface::new();
        apply(ElementId(1), &plan(Some("a.pdf")), &mut host);
        assert_eq!(
            host.commands(),
            &[
                DomCommand::SetAttribute {
                    el: ElementId(1),
                    name: "target".into(),
                    value: "_blank".into()
                },
                DomCommand::AddClass {
                    el: ElementId(1),
                    class: PDF_CLASS.into()
                },
            ]
        );
    }
}
