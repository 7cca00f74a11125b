#![forbid(unsafe_code)]

//! Page configuration.
//!
//! Every section is a `#[serde(default)]` struct, so a JSON object only needs
//! the keys it wants to change: missing keys keep their defaults and unknown
//! keys are ignored.
//!
//! ```ignore
//! let config = RadixConfig::from_json(r#"{
//!     "timeFrame": 16,
//!     "modal": { "color": "white", "resizeEasing": "ease-out-back" },
//!     "scrollAppear": { "reset": false }
//! }"#)?;
//! ```
//!
//! # Failure Modes
//!
//! - Malformed JSON or a mistyped value: [`ConfigError::Json`].
//! - Structural problems (zero time frame, bad scale steps, unknown easing
//!   names, out-of-range precision) are reported by
//!   [`RadixConfig::validate`], which [`RadixConfig::from_json`] runs.

use std::fmt;
use std::time::Duration;

use radix_core::animation::Easing;
use serde::{Deserialize, Serialize};

use crate::modal::scale::ScaleSteps;

/// Largest accepted `modal.precision`.
pub const MAX_PRECISION: u32 = 6;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Configuration parse or validation failure.
#[derive(Debug)]
pub enum ConfigError {
    /// The JSON document could not be parsed into a configuration.
    Json(serde_json::Error),
    /// `timeFrame` was zero.
    ZeroTimeFrame,
    /// `modal.scaleStep` was empty.
    EmptyScaleSteps,
    /// A scale step was zero, negative, or not finite.
    NonPositiveScaleStep { index: usize, value: f64 },
    /// `modal.scaleStep[index]` was not greater than its predecessor.
    UnorderedScaleSteps { index: usize },
    /// `modal.precision` exceeded [`MAX_PRECISION`].
    PrecisionOutOfRange(u32),
    /// An easing name did not resolve.
    UnknownEasing { field: &'static str, name: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(err) => write!(f, "invalid configuration JSON: {err}"),
            Self::ZeroTimeFrame => f.write_str("timeFrame must be at least 1 ms"),
            Self::EmptyScaleSteps => f.write_str("modal.scaleStep must not be empty"),
            Self::NonPositiveScaleStep { index, value } => {
                write!(f, "modal.scaleStep[{index}] = {value} is not positive")
            }
            Self::UnorderedScaleSteps { index } => {
                write!(f, "modal.scaleStep[{index}] is not ascending")
            }
            Self::PrecisionOutOfRange(p) => {
                write!(f, "modal.precision = {p} exceeds {MAX_PRECISION}")
            }
            Self::UnknownEasing { field, name } => write!(f, "{field}: unknown easing `{name}`"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        if let Self::Json(err) = self {
            return Some(err);
        }
        None
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// Result alias for configuration loading.
pub type Result<T, E = ConfigError> = std::result::Result<T, E>;

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

/// Full page configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RadixConfig {
    /// Tick interval for every animation, in milliseconds.
    pub time_frame: u64,
    pub preload: PreloadConfig,
    pub smooth_scroll: SmoothScrollConfig,
    pub auto_target_blank: AutoTargetBlankConfig,
    pub toggle_nav: ToggleNavConfig,
    pub svg: SvgConfig,
    pub drag_scroll: DragScrollConfig,
    pub flex_fix: FlexFixConfig,
    pub modal: ModalConfig,
    pub scroll_appear: ScrollAppearConfig,
}

impl Default for RadixConfig {
    fn default() -> Self {
        Self {
            time_frame: 10,
            preload: PreloadConfig::default(),
            smooth_scroll: SmoothScrollConfig::default(),
            auto_target_blank: AutoTargetBlankConfig::default(),
            toggle_nav: ToggleNavConfig::default(),
            svg: SvgConfig::default(),
            drag_scroll: DragScrollConfig::default(),
            flex_fix: FlexFixConfig::default(),
            modal: ModalConfig::default(),
            scroll_appear: ScrollAppearConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PreloadConfig {
    pub active: bool,
    pub selector: String,
    /// Minimum time the preloader stays up, in milliseconds.
    pub minload: u64,
}

impl Default for PreloadConfig {
    fn default() -> Self {
        Self {
            active: false,
            selector: String::new(),
            minload: 200,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SmoothScrollConfig {
    pub active: bool,
    /// Milliseconds.
    pub duration: u64,
    pub easing: String,
}

impl Default for SmoothScrollConfig {
    fn default() -> Self {
        Self {
            active: true,
            duration: 600,
            easing: "easeInOutExpo".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AutoTargetBlankConfig {
    pub active: bool,
}

impl Default for AutoTargetBlankConfig {
    fn default() -> Self {
        Self { active: true }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ToggleNavConfig {
    pub active: bool,
    pub trigger: String,
    pub target: String,
    pub class: String,
    /// Lock page scrolling while the navigation is open.
    pub prevent_scroll: bool,
}

impl Default for ToggleNavConfig {
    fn default() -> Self {
        Self {
            active: false,
            trigger: String::new(),
            target: String::new(),
            class: "opened".to_string(),
            prevent_scroll: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SvgConfig {
    pub active: bool,
    pub selector: String,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            active: true,
            selector: ".radix-icon".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DragScrollConfig {
    pub active: bool,
    pub selector: String,
    /// Show a scroll hint on regions that overflow.
    pub hint: bool,
}

impl Default for DragScrollConfig {
    fn default() -> Self {
        Self {
            active: true,
            selector: ".radix-drag".to_string(),
            hint: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FlexFixConfig {
    pub active: bool,
    pub selector: String,
    /// Deep-clone the first child as the dummy template.
    pub inherit: bool,
    /// Lower bound on the number of dummies appended.
    pub min: usize,
}

impl Default for FlexFixConfig {
    fn default() -> Self {
        Self {
            active: true,
            selector: ".radix-flexfix".to_string(),
            inherit: false,
            min: 0,
        }
    }
}

/// Default permitted magnifications.
pub const DEFAULT_SCALE_STEPS: [f64; 13] =
    [0.2, 0.4, 0.6, 0.8, 1.0, 1.5, 2.0, 2.5, 3.0, 3.5, 4.0, 4.5, 5.0];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ModalConfig {
    pub active: bool,
    pub selector: String,
    /// Theme class added to the viewport.
    pub color: String,
    /// Milliseconds.
    #[serde(alias = "resizeSpeed")]
    pub resize_duration: u64,
    pub resize_easing: String,
    pub scale_step: Vec<f64>,
    pub fit: bool,
    pub drag: bool,
    #[serde(alias = "magnifier")]
    pub magnify: bool,
    /// Decimal places kept when rounding a requested scale.
    pub precision: u32,
    pub enlarge_text: String,
    pub shrink_text: String,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            active: true,
            selector: ".radix-modal".to_string(),
            color: "black".to_string(),
            resize_duration: 300,
            resize_easing: "easeInOutBack".to_string(),
            scale_step: DEFAULT_SCALE_STEPS.to_vec(),
            fit: true,
            drag: true,
            magnify: true,
            precision: 1,
            enlarge_text: "拡大".to_string(),
            shrink_text: "縮小".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScrollAppearConfig {
    pub active: bool,
    pub selector: String,
    /// Milliseconds between crossing the threshold and toggling the class.
    pub delay: u64,
    /// Remove the class again when the item leaves the window.
    pub reset: bool,
    pub class: String,
}

impl Default for ScrollAppearConfig {
    fn default() -> Self {
        Self {
            active: true,
            selector: ".radix-appear".to_string(),
            delay: 200,
            reset: true,
            class: "active".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Construction & validation
// ---------------------------------------------------------------------------

impl RadixConfig {
    /// Parse a JSON options object and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults with every feature switched off (the time frame is kept).
    #[must_use]
    pub fn all_inactive() -> Self {
        let mut config = Self::default();
        config.preload.active = false;
        config.smooth_scroll.active = false;
        config.auto_target_blank.active = false;
        config.toggle_nav.active = false;
        config.svg.active = false;
        config.drag_scroll.active = false;
        config.flex_fix.active = false;
        config.modal.active = false;
        config.scroll_appear.active = false;
        config
    }

    /// Tick interval as a [`Duration`].
    #[must_use]
    pub fn time_frame(&self) -> Duration {
        Duration::from_millis(self.time_frame)
    }

    /// Check structural constraints.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.time_frame == 0 {
            return Err(ConfigError::ZeroTimeFrame);
        }
        ScaleSteps::new(self.modal.scale_step.clone())?;
        if self.modal.precision > MAX_PRECISION {
            return Err(ConfigError::PrecisionOutOfRange(self.modal.precision));
        }
        check_easing("smoothScroll.easing", &self.smooth_scroll.easing)?;
        check_easing("modal.resizeEasing", &self.modal.resize_easing)?;
        Ok(())
    }
}

fn check_easing(field: &'static str, name: &str) -> Result<(), ConfigError> {
    match Easing::resolve(name) {
        Some(_) => Ok(()),
        None => Err(ConfigError::UnknownEasing {
            field,
            name: name.to_string(),
        }),
    }
}
