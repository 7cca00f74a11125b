#![forbid(unsafe_code)]

//! Named icon substitution.
//!
//! Elements matching the icon selector carry an icon name as their text
//! (`<i class="radix-icon">cross</i>`). The host supplies the vector artwork
//! for each [`Icon`]; this module only maps names to icons and asks the host
//! to swap the element's children.

use std::fmt;

use radix_core::event::ElementId;
use radix_core::warn;
use serde::{Deserialize, Serialize};

use crate::config::SvgConfig;
use crate::surface::PageHost;

/// Built-in icon set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Icon {
    Hamburger,
    AngleTop,
    AngleRight,
    AngleBottom,
    AngleLeft,
    Cross,
    #[serde(rename = "arrowLR")]
    ArrowLr,
    #[serde(rename = "arrowTB")]
    ArrowTb,
}

impl Icon {
    pub const ALL: [Icon; 8] = [
        Icon::Hamburger,
        Icon::AngleTop,
        Icon::AngleRight,
        Icon::AngleBottom,
        Icon::AngleLeft,
        Icon::Cross,
        Icon::ArrowLr,
        Icon::ArrowTb,
    ];

    /// Name used in markup.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hamburger => "hamburger",
            Self::AngleTop => "angleTop",
            Self::AngleRight => "angleRight",
            Self::AngleBottom => "angleBottom",
            Self::AngleLeft => "angleLeft",
            Self::Cross => "cross",
            Self::ArrowLr => "arrowLR",
            Self::ArrowTb => "arrowTB",
        }
    }

    /// Class carried by the injected artwork.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Hamburger => "rdx-svg-hamburger",
            Self::AngleTop => "rdx-icon-angletop",
            Self::AngleRight => "rdx-icon-angleright",
            Self::AngleBottom => "rdx-icon-anglebottom",
            Self::AngleLeft => "rdx-icon-angleleft",
            Self::Cross => "rdx-icon-cross",
            Self::ArrowLr => "rdx-icon-arrowlr",
            Self::ArrowTb => "rdx-icon-arrowtb",
        }
    }

    /// Look up an icon by its markup name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL.into_iter().find(|icon| icon.name() == name)
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Replace `el` with the icon named by `text`.
///
/// Returns the icon on success. Unknown names are logged and the element is
/// left alone.
pub fn substitute<H: PageHost + ?Sized>(
    config: &SvgConfig,
    el: ElementId,
    text: &str,
    host: &mut H,
) -> Option<Icon> {
    if !config.active {
        return None;
    }
    match Icon::from_name(text) {
        Some(icon) => {
            host.replace_with_icon(el, icon);
            Some(icon)
        }
        None => {
            warn!(element = el.get(), name = text, "unknown icon name");
            None
        }
    }
}
