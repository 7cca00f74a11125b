#![forbid(unsafe_code)]

//! Per-element overrides read from `data-*` attributes.
//!
//! Keys are accepted either as attribute names (`data-modal-duration`) or as
//! `dataset` keys (`modalDuration`). Values that fail to parse are ignored
//! and the configured default applies, matching how the page treats any
//! other malformed markup.

use std::time::Duration;

use radix_core::animation::Easing;
use serde::{Deserialize, Serialize};

use crate::config::{ModalConfig, ScrollAppearConfig, SmoothScrollConfig};

/// Normalize an attribute name or dataset key to its dataset form.
///
/// `data-modal-resize-easing` and `modal-resize-easing` both become
/// `modalResizeEasing`; `modalScale` is returned unchanged.
#[must_use]
pub fn dataset_key(raw: &str) -> String {
    let raw = raw.trim();
    let raw = raw.strip_prefix("data-").unwrap_or(raw);
    let mut out = String::with_capacity(raw.len());
    let mut upper = false;
    for ch in raw.chars() {
        if ch == '-' {
            upper = !out.is_empty();
            continue;
        }
        if upper {
            out.extend(ch.to_uppercase());
            upper = false;
        } else {
            out.push(ch);
        }
    }
    out
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim() {
        "" | "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

fn parse_millis(value: &str) -> Option<u64> {
    let ms: f64 = value.trim().parse().ok()?;
    (ms.is_finite() && ms >= 0.0).then(|| ms.round() as u64)
}

fn parse_f64(value: &str) -> Option<f64> {
    value.trim().parse().ok().filter(|v: &f64| v.is_finite())
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

// ---------------------------------------------------------------------------
// Modal
// ---------------------------------------------------------------------------

/// Trigger-level modal overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ModalOverrides {
    /// Selector naming the content elements (`data-modal-target`).
    pub target: Option<String>,
    /// Resize duration in milliseconds.
    pub duration: Option<u64>,
    pub easing: Option<String>,
    /// Initial scale, bypassing fit.
    pub scale: Option<f64>,
    pub drag: Option<bool>,
    pub magnify: Option<bool>,
    pub fit: Option<bool>,
    pub color: Option<String>,
}

impl ModalOverrides {
    /// Read overrides from `(name, value)` attribute pairs.
    #[must_use]
    pub fn from_attributes<'a, I>(attributes: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut out = Self::default();
        for (name, value) in attributes {
            match dataset_key(name).as_str() {
                "modalTarget" => out.target = non_empty(value),
                "modalDuration" => out.duration = parse_millis(value),
                "modalEasing" => out.easing = non_empty(value),
                "modalScale" => out.scale = parse_f64(value).filter(|s| *s > 0.0),
                "modalDrag" => out.drag = parse_bool(value),
                "modalMagnify" => out.magnify = parse_bool(value),
                "modalFit" => out.fit = parse_bool(value),
                "modalColor" => out.color = non_empty(value),
                _ => {}
            }
        }
        out
    }
}

/// Modal settings for one open session: overrides layered over config.
#[derive(Debug, Clone, PartialEq)]
pub struct ModalSettings {
    pub color: String,
    pub duration: Duration,
    /// `None` when the configured name does not resolve; resizes then jump.
    pub easing: Option<Easing>,
    pub easing_name: String,
    pub scale: Option<f64>,
    pub fit: bool,
    pub drag: bool,
    pub magnify: bool,
    pub precision: u32,
}

impl ModalSettings {
    #[must_use]
    pub fn resolve(config: &ModalConfig, overrides: &ModalOverrides) -> Self {
        let easing_name = overrides
            .easing
            .clone()
            .unwrap_or_else(|| config.resize_easing.clone());
        Self {
            color: overrides.color.clone().unwrap_or_else(|| config.color.clone()),
            duration: Duration::from_millis(overrides.duration.unwrap_or(config.resize_duration)),
            easing: Easing::resolve(&easing_name),
            easing_name,
            scale: overrides.scale.filter(|s| s.is_finite() && *s > 0.0),
            fit: overrides.fit.unwrap_or(config.fit),
            drag: overrides.drag.unwrap_or(config.drag),
            magnify: overrides.magnify.unwrap_or(config.magnify),
            precision: config.precision,
        }
    }
}

// ---------------------------------------------------------------------------
// Smooth scroll
// ---------------------------------------------------------------------------

/// Link-level smooth-scroll overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScrollOverrides {
    /// Milliseconds.
    pub duration: Option<u64>,
    pub easing: Option<String>,
}

impl ScrollOverrides {
    #[must_use]
    pub fn from_attributes<'a, I>(attributes: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut out = Self::default();
        for (name, value) in attributes {
            match dataset_key(name).as_str() {
                "scrollDuration" => out.duration = parse_millis(value),
                "scrollEasing" => out.easing = non_empty(value),
                _ => {}
            }
        }
        out
    }

    /// Duration and easing name after applying these overrides.
    #[must_use]
    pub fn resolve(&self, config: &SmoothScrollConfig) -> (Duration, String) {
        (
            Duration::from_millis(self.duration.unwrap_or(config.duration)),
            self.easing.clone().unwrap_or_else(|| config.easing.clone()),
        )
    }
}

// ---------------------------------------------------------------------------
// Scroll appear
// ---------------------------------------------------------------------------

/// Item-level scroll-appear overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppearOverrides {
    pub reset: Option<bool>,
    pub class: Option<String>,
    /// Page offset past which the item shows, instead of the window band.
    pub fixed: Option<f64>,
    /// Milliseconds.
    pub delay: Option<u64>,
}

impl AppearOverrides {
    #[must_use]
    pub fn from_attributes<'a, I>(attributes: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut out = Self::default();
        for (name, value) in attributes {
            match dataset_key(name).as_str() {
                "appearReset" => out.reset = parse_bool(value),
                "appearClass" => out.class = non_empty(value),
                "appearFixed" => out.fixed = parse_f64(value),
                "appearDelay" => out.delay = parse_millis(value),
                _ => {}
            }
        }
        out
    }
}

/// Scroll-appear settings for one item.
#[derive(Debug, Clone, PartialEq)]
pub struct AppearSettings {
    pub reset: bool,
    pub class: String,
    pub fixed: Option<f64>,
    pub delay: Duration,
}

impl AppearSettings {
    #[must_use]
    pub fn resolve(config: &ScrollAppearConfig, overrides: &AppearOverrides) -> Self {
        Self {
            reset: overrides.reset.unwrap_or(config.reset),
            class: overrides.class.clone().unwrap_or_else(|| config.class.clone()),
            fixed: overrides.fixed,
            delay: Duration::from_millis(overrides.delay.unwrap_or(config.delay)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_key_forms() {
        assert_eq!(dataset_key("data-modal-duration"), "modalDuration");
        assert_eq!(dataset_key("modal-scale"), "modalScale");
        assert_eq!(dataset_key("modalEasing"), "modalEasing");
        assert_eq!(dataset_key("data-scroll-easing"), "scrollEasing");
    }

    #[test]
    fn modal_overrides_parse() {
        let o = ModalOverrides::from_attributes([
            ("data-modal-target", "#photo"),
            ("data-modal-duration", "450"),
            ("data-modal-easing", "ease-out"),
            ("data-modal-scale", "1.25"),
            ("data-modal-drag", "false"),
            ("data-modal-magnify", ""),
            ("data-modal-color", "white"),
            ("data-unrelated", "x"),
        ]);
        assert_eq!(o.target.as_deref(), Some("#photo"));
        assert_eq!(o.duration, Some(450));
        assert_eq!(o.easing.as_deref(), Some("ease-out"));
        assert_eq!(o.scale, Some(1.25));
        assert_eq!(o.drag, Some(false));
        assert_eq!(o.magnify, Some(true));
        assert_eq!(o.fit, None);
        assert_eq!(o.color.as_deref(), Some("white"));
    }

    #[test]
    fn unparsable_values_are_ignored() {
        let o = ModalOverrides::from_attributes([
            ("modalDuration", "slow"),
            ("modalScale", "-2"),
            ("modalFit", "maybe"),
        ]);
        assert_eq!(o, ModalOverrides::default());
    }

    #[test]
    fn settings_layer_overrides_over_config() {
        let config = ModalConfig::default();
        let s = ModalSettings::resolve(&config, &ModalOverrides::default());
        assert_eq!(s.color, "black");
        assert_eq!(s.duration, Duration::from_millis(300));
        assert_eq!(s.easing, Some(Easing::InOutBack));
        assert!(s.fit && s.drag && s.magnify);

        let o = ModalOverrides {
            easing: Some("nope".into()),
            fit: Some(false),
            ..ModalOverrides::default()
        };
        let s = ModalSettings::resolve(&config, &o);
        assert_eq!(s.easing, None);
        assert_eq!(s.easing_name, "nope");
        assert!(!s.fit);
    }

    #[test]
    fn scroll_overrides_resolve() {
        let config = SmoothScrollConfig::default();
        let o = ScrollOverrides::from_attributes([("data-scroll-duration", "250")]);
        let (d, e) = o.resolve(&config);
        assert_eq!(d, Duration::from_millis(250));
        assert_eq!(e, "easeInOutExpo");
    }

    #[test]
    fn appear_overrides_resolve() {
        let config = ScrollAppearConfig::default();
        let o = AppearOverrides::from_attributes([
            ("data-appear-fixed", "320"),
            ("data-appear-reset", "false"),
        ]);
        let s = AppearSettings::resolve(&config, &o);
        assert_eq!(s.fixed, Some(320.0));
        assert!(!s.reset);
        assert_eq!(s.class, "active");
        assert_eq!(s.delay, Duration::from_millis(200));
    }
}
