#![forbid(unsafe_code)]

//! Penner easing catalog.
//!
//! Every curve has the classic `(t, b, c, d)` signature: elapsed time `t`,
//! start value `b`, delta `c`, and duration `d` (time units are the caller's
//! choice; Radix uses milliseconds). Curves are selected by name through
//! [`Easing::resolve`], which understands the camelCase catalog names
//! (`easeInOutQuad`), their kebab-case spelling (`ease-in-out-quad`), and the
//! CSS-style aliases:
//!
//! | Alias | Curve |
//! |-------|-------|
//! | `ease` | `easeInOutCirc` |
//! | `ease-in`, `easeIn` | `easeInQuad` |
//! | `ease-out`, `easeOut` | `easeOutQuad` |
//! | `ease-in-out`, `easeInOut` | `easeInOutQuad` |
//!
//! # Invariants
//!
//! 1. `sample(0, b, c, d) == b` for every curve (exactly, or within float
//!    rounding for the trigonometric and bounce families).
//! 2. `sample(d, b, c, d) == b + c` under the same tolerance.
//! 3. Elastic and back curves may leave `[b, b + c]` between the endpoints.
//!
//! # Failure Modes
//!
//! - Unknown name: [`Easing::resolve`] returns `None`; nothing is sampled.
//! - Non-positive duration: the curve is treated as already finished and
//!   returns `b + c`.
//! - Elastic with `c == 0`: returns `b` instead of propagating `NaN`.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

/// Default overshoot for the back family.
pub const BACK_OVERSHOOT: f64 = 1.70158;

/// Extra overshoot factor applied by `easeInOutBack`.
const BACK_IN_OUT_FACTOR: f64 = 1.525;

/// Bounce breakpoints, in units of `1 / 2.75`.
const BOUNCE_DIVISOR: f64 = 2.75;
const BOUNCE_GAIN: f64 = 7.5625;

/// A named easing curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Easing {
    Linear,
    InSine,
    OutSine,
    InOutSine,
    InQuad,
    OutQuad,
    InOutQuad,
    InCubic,
    OutCubic,
    InOutCubic,
    InQuart,
    OutQuart,
    InOutQuart,
    InQuint,
    OutQuint,
    InOutQuint,
    InExpo,
    OutExpo,
    InOutExpo,
    InCirc,
    OutCirc,
    InOutCirc,
    InElastic,
    OutElastic,
    InOutElastic,
    InBack,
    OutBack,
    InOutBack,
    InBounce,
    OutBounce,
    InOutBounce,
}

/// Canonical catalog names, in declaration order.
const CATALOG: [(&str, Easing); 31] = [
    ("linear", Easing::Linear),
    ("easeInSine", Easing::InSine),
    ("easeOutSine", Easing::OutSine),
    ("easeInOutSine", Easing::InOutSine),
    ("easeInQuad", Easing::InQuad),
    ("easeOutQuad", Easing::OutQuad),
    ("easeInOutQuad", Easing::InOutQuad),
    ("easeInCubic", Easing::InCubic),
    ("easeOutCubic", Easing::OutCubic),
    ("easeInOutCubic", Easing::InOutCubic),
    ("easeInQuart", Easing::InQuart),
    ("easeOutQuart", Easing::OutQuart),
    ("easeInOutQuart", Easing::InOutQuart),
    ("easeInQuint", Easing::InQuint),
    ("easeOutQuint", Easing::OutQuint),
    ("easeInOutQuint", Easing::InOutQuint),
    ("easeInExpo", Easing::InExpo),
    ("easeOutExpo", Easing::OutExpo),
    ("easeInOutExpo", Easing::InOutExpo),
    ("easeInCirc", Easing::InCirc),
    ("easeOutCirc", Easing::OutCirc),
    ("easeInOutCirc", Easing::InOutCirc),
    ("easeInElastic", Easing::InElastic),
    ("easeOutElastic", Easing::OutElastic),
    ("easeInOutElastic", Easing::InOutElastic),
    ("easeInBack", Easing::InBack),
    ("easeOutBack", Easing::OutBack),
    ("easeInOutBack", Easing::InOutBack),
    ("easeInBounce", Easing::InBounce),
    ("easeOutBounce", Easing::OutBounce),
    ("easeInOutBounce", Easing::InOutBounce),
];

const ALIASES: [(&str, Easing); 7] = [
    ("ease", Easing::InOutCirc),
    ("ease-in", Easing::InQuad),
    ("easeIn", Easing::InQuad),
    ("ease-out", Easing::OutQuad),
    ("easeOut", Easing::OutQuad),
    ("ease-in-out", Easing::InOutQuad),
    ("easeInOut", Easing::InOutQuad),
];

impl Easing {
    /// Every curve in the catalog.
    pub const ALL: [Easing; 31] = {
        let mut all = [Easing::Linear; 31];
        let mut i = 0;
        while i < CATALOG.len() {
            all[i] = CATALOG[i].1;
            i += 1;
        }
        all
    };

    /// Look up a curve by catalog name, kebab-case name, or alias.
    #[must_use]
    pub fn resolve(name: &str) -> Option<Self> {
        let name = name.trim();
        if let Some((_, easing)) = ALIASES.iter().find(|(alias, _)| *alias == name) {
            return Some(*easing);
        }
        if let Some((_, easing)) = CATALOG.iter().find(|(canonical, _)| *canonical == name) {
            return Some(*easing);
        }
        if name.contains('-') {
            let camel = kebab_to_camel(name);
            return CATALOG
                .iter()
                .find(|(canonical, _)| *canonical == camel)
                .map(|(_, easing)| *easing);
        }
        None
    }

    /// Canonical camelCase name.
    #[must_use]
    pub fn name(self) -> &'static str {
        CATALOG
            .iter()
            .find(|(_, easing)| *easing == self)
            .map_or("linear", |(name, _)| *name)
    }

    /// Whether the curve can leave `[b, b + c]` between its endpoints.
    #[must_use]
    pub const fn overshoots(self) -> bool {
        matches!(
            self,
            Self::InElastic
                | Self::OutElastic
                | Self::InOutElastic
                | Self::InBack
                | Self::OutBack
                | Self::InOutBack
        )
    }

    /// Sample the curve with the default back overshoot.
    #[inline]
    #[must_use]
    pub fn sample(self, t: f64, b: f64, c: f64, d: f64) -> f64 {
        self.sample_with_overshoot(t, b, c, d, BACK_OVERSHOOT)
    }

    /// Sample the curve with an explicit overshoot `s` (back family only;
    /// other curves ignore it).
    #[must_use]
    pub fn sample_with_overshoot(self, t: f64, b: f64, c: f64, d: f64, s: f64) -> f64 {
        if d <= 0.0 {
            return b + c;
        }
        match self {
            Self::Linear => c * t / d + b,

            Self::InSine => -c * (t / d * (PI / 2.0)).cos() + c + b,
            Self::OutSine => c * (t / d * (PI / 2.0)).sin() + b,
            Self::InOutSine => -c / 2.0 * ((PI * t / d).cos() - 1.0) + b,

            Self::InQuad => {
                let t = t / d;
                c * t * t + b
            }
            Self::OutQuad => {
                let t = t / d;
                -c * t * (t - 2.0) + b
            }
            Self::InOutQuad => {
                let t = t / (d / 2.0);
                if t < 1.0 {
                    return c / 2.0 * t * t + b;
                }
                let t = t - 1.0;
                -c / 2.0 * (t * (t - 2.0) - 1.0) + b
            }

            Self::InCubic => {
                let t = t / d;
                c * t * t * t + b
            }
            Self::OutCubic => {
                let t = t / d - 1.0;
                c * (t * t * t + 1.0) + b
            }
            Self::InOutCubic => {
                let t = t / (d / 2.0);
                if t < 1.0 {
                    return c / 2.0 * t * t * t + b;
                }
                let t = t - 2.0;
                c / 2.0 * (t * t * t + 2.0) + b
            }

            Self::InQuart => {
                let t = t / d;
                c * t * t * t * t + b
            }
            Self::OutQuart => {
                let t = t / d - 1.0;
                -c * (t * t * t * t - 1.0) + b
            }
            Self::InOutQuart => {
                let t = t / (d / 2.0);
                if t < 1.0 {
                    return c / 2.0 * t * t * t * t + b;
                }
                let t = t - 2.0;
                -c / 2.0 * (t * t * t * t - 2.0) + b
            }

            Self::InQuint => {
                let t = t / d;
                c * t * t * t * t * t + b
            }
            Self::OutQuint => {
                let t = t / d - 1.0;
                c * (t * t * t * t * t + 1.0) + b
            }
            Self::InOutQuint => {
                let t = t / (d / 2.0);
                if t < 1.0 {
                    return c / 2.0 * t * t * t * t * t + b;
                }
                let t = t - 2.0;
                c / 2.0 * (t * t * t * t * t + 2.0) + b
            }

            Self::InExpo => {
                if t == 0.0 {
                    b
                } else {
                    c * 2f64.powf(10.0 * (t / d - 1.0)) + b
                }
            }
            Self::OutExpo => {
                if t == d {
                    b + c
                } else {
                    c * (-(2f64.powf(-10.0 * t / d)) + 1.0) + b
                }
            }
            Self::InOutExpo => {
                if t == 0.0 {
                    return b;
                }
                if t == d {
                    return b + c;
                }
                let t = t / (d / 2.0);
                if t < 1.0 {
                    return c / 2.0 * 2f64.powf(10.0 * (t - 1.0)) + b;
                }
                let t = t - 1.0;
                c / 2.0 * (-(2f64.powf(-10.0 * t)) + 2.0) + b
            }

            Self::InCirc => {
                let t = t / d;
                -c * ((1.0 - t * t).sqrt() - 1.0) + b
            }
            Self::OutCirc => {
                let t = t / d - 1.0;
                c * (1.0 - t * t).sqrt() + b
            }
            Self::InOutCirc => {
                let t = t / (d / 2.0);
                if t < 1.0 {
                    return -c / 2.0 * ((1.0 - t * t).sqrt() - 1.0) + b;
                }
                let t = t - 2.0;
                c / 2.0 * ((1.0 - t * t).sqrt() + 1.0) + b
            }

            Self::InElastic => {
                if t == 0.0 || c == 0.0 {
                    return b;
                }
                let t = t / d;
                if t == 1.0 {
                    return b + c;
                }
                let p = d * 0.3;
                let (a, s) = elastic_shape(c, p);
                let t = t - 1.0;
                -(a * 2f64.powf(10.0 * t) * ((t * d - s) * (2.0 * PI) / p).sin()) + b
            }
            Self::OutElastic => {
                if t == 0.0 || c == 0.0 {
                    return b;
                }
                let t = t / d;
                if t == 1.0 {
                    return b + c;
                }
                let p = d * 0.3;
                let (a, s) = elastic_shape(c, p);
                a * 2f64.powf(-10.0 * t) * ((t * d - s) * (2.0 * PI) / p).sin() + c + b
            }
            Self::InOutElastic => {
                if t == 0.0 || c == 0.0 {
                    return b;
                }
                let t = t / (d / 2.0);
                if t == 2.0 {
                    return b + c;
                }
                let p = d * (0.3 * 1.5);
                let (a, s) = elastic_shape(c, p);
                let wave = |t: f64| ((t * d - s) * (2.0 * PI) / p).sin();
                if t < 1.0 {
                    let t = t - 1.0;
                    return -0.5 * (a * 2f64.powf(10.0 * t) * wave(t)) + b;
                }
                let t = t - 1.0;
                a * 2f64.powf(-10.0 * t) * wave(t) * 0.5 + c + b
            }

            Self::InBack => {
                let t = t / d;
                c * t * t * ((s + 1.0) * t - s) + b
            }
            Self::OutBack => {
                let t = t / d - 1.0;
                c * (t * t * ((s + 1.0) * t + s) + 1.0) + b
            }
            Self::InOutBack => {
                let s = s * BACK_IN_OUT_FACTOR;
                let t = t / (d / 2.0);
                if t < 1.0 {
                    return c / 2.0 * (t * t * ((s + 1.0) * t - s)) + b;
                }
                let t = t - 2.0;
                c / 2.0 * (t * t * ((s + 1.0) * t + s) + 2.0) + b
            }

            Self::InBounce => in_bounce(t, b, c, d),
            Self::OutBounce => out_bounce(t, b, c, d),
            Self::InOutBounce => {
                if t < d / 2.0 {
                    in_bounce(t * 2.0, 0.0, c, d) * 0.5 + b
                } else {
                    out_bounce(t * 2.0 - d, 0.0, c, d) * 0.5 + c * 0.5 + b
                }
            }
        }
    }
}

/// Amplitude and phase shift for the elastic family, with amplitude = `c`.
fn elastic_shape(c: f64, p: f64) -> (f64, f64) {
    let a = c;
    if a < c.abs() {
        (c, p / 4.0)
    } else {
        (a, p / (2.0 * PI) * (c / a).asin())
    }
}

fn out_bounce(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / d;
    if t < 1.0 / BOUNCE_DIVISOR {
        c * (BOUNCE_GAIN * t * t) + b
    } else if t < 2.0 / BOUNCE_DIVISOR {
        let t = t - 1.5 / BOUNCE_DIVISOR;
        c * (BOUNCE_GAIN * t * t + 0.75) + b
    } else if t < 2.5 / BOUNCE_DIVISOR {
        let t = t - 2.25 / BOUNCE_DIVISOR;
        c * (BOUNCE_GAIN * t * t + 0.9375) + b
    } else {
        let t = t - 2.625 / BOUNCE_DIVISOR;
        c * (BOUNCE_GAIN * t * t + 0.984375) + b
    }
}

fn in_bounce(t: f64, b: f64, c: f64, d: f64) -> f64 {
    c - out_bounce(d - t, 0.0, c, d) + b
}

fn kebab_to_camel(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for (i, part) in name.split('-').filter(|p| !p.is_empty()).enumerate() {
        if i == 0 {
            out.push_str(part);
            continue;
        }
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown easing name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownEasing(pub String);

impl fmt::Display for UnknownEasing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown easing `{}`", self.0)
    }
}

impl std::error::Error for UnknownEasing {}

impl FromStr for Easing {
    type Err = UnknownEasing;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s).ok_or_else(|| UnknownEasing(s.to_string()))
    }
}

impl Serialize for Easing {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Easing {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    // ---- Endpoint tests ----

    #[test]
    fn every_curve_starts_at_b() {
        for easing in Easing::ALL {
            let v = easing.sample(0.0, 40.0, 260.0, 300.0);
            assert!(close(v, 40.0), "{easing} at t=0 gave {v}");
        }
    }

    #[test]
    fn every_curve_ends_at_b_plus_c() {
        for easing in Easing::ALL {
            let v = easing.sample(300.0, 40.0, 260.0, 300.0);
            assert!(close(v, 300.0), "{easing} at t=d gave {v}");
        }
    }

    #[test]
    fn endpoints_hold_for_negative_delta() {
        for easing in Easing::ALL {
            assert!(close(easing.sample(0.0, 1000.0, -1000.0, 600.0), 1000.0));
            assert!(close(easing.sample(600.0, 1000.0, -1000.0, 600.0), 0.0));
        }
    }

    #[test]
    fn zero_duration_is_finished() {
        assert!(close(Easing::InOutQuad.sample(0.0, 1.0, 2.0, 0.0), 3.0));
    }

    // ---- Shape tests ----

    #[test]
    fn linear_midpoint() {
        assert!(close(Easing::Linear.sample(50.0, 0.0, 10.0, 100.0), 5.0));
    }

    #[test]
    fn quad_family_midpoints() {
        assert!(close(Easing::InQuad.sample(50.0, 0.0, 1.0, 100.0), 0.25));
        assert!(close(Easing::OutQuad.sample(50.0, 0.0, 1.0, 100.0), 0.75));
        assert!(close(Easing::InOutQuad.sample(50.0, 0.0, 1.0, 100.0), 0.5));
    }

    #[test]
    fn back_overshoots_below_start() {
        let v = Easing::InBack.sample(20.0, 0.0, 1.0, 100.0);
        assert!(v < 0.0, "easeInBack should dip below start, got {v}");
    }

    #[test]
    fn back_overshoot_parameter_is_honored() {
        let flat = Easing::InBack.sample_with_overshoot(20.0, 0.0, 1.0, 100.0, 0.0);
        assert!(close(flat, Easing::InCubic.sample(20.0, 0.0, 1.0, 100.0)));
    }

    #[test]
    fn elastic_with_zero_delta_stays_put() {
        for easing in [Easing::InElastic, Easing::OutElastic, Easing::InOutElastic] {
            assert!(close(easing.sample(30.0, 7.0, 0.0, 100.0), 7.0));
        }
    }

    #[test]
    fn bounce_breakpoints() {
        // First arc ends exactly at 1/2.75 with value 1.0.
        let d = 2.75;
        assert!(close(Easing::OutBounce.sample(1.0 - 1e-12, 0.0, 1.0, d), 1.0));
        // Second arc bottoms out at 0.75 at 1.5/2.75.
        assert!(close(Easing::OutBounce.sample(1.5, 0.0, 1.0, d), 0.75));
        // Third arc bottoms at 0.9375 at 2.25/2.75.
        assert!(close(Easing::OutBounce.sample(2.25, 0.0, 1.0, d), 0.9375));
        // Last arc bottoms at 0.984375 at 2.625/2.75.
        assert!(close(Easing::OutBounce.sample(2.625, 0.0, 1.0, d), 0.984375));
    }

    #[test]
    fn in_out_bounce_is_symmetric() {
        let a = Easing::InOutBounce.sample(25.0, 0.0, 1.0, 100.0);
        let b = Easing::InOutBounce.sample(75.0, 0.0, 1.0, 100.0);
        assert!(close(a + b, 1.0));
    }

    #[test]
    fn monotonic_curves_stay_in_range() {
        for easing in Easing::ALL.into_iter().filter(|e| !e.overshoots()) {
            for i in 0..=100 {
                let v = easing.sample(f64::from(i), 0.0, 1.0, 100.0);
                assert!(
                    (-EPS..=1.0 + EPS).contains(&v),
                    "{easing} left [0, 1] at t={i}: {v}"
                );
            }
        }
    }

    // ---- Name tests ----

    #[test]
    fn aliases_resolve() {
        assert_eq!(Easing::resolve("ease"), Some(Easing::InOutCirc));
        assert_eq!(Easing::resolve("ease-in"), Some(Easing::InQuad));
        assert_eq!(Easing::resolve("easeIn"), Some(Easing::InQuad));
        assert_eq!(Easing::resolve("ease-out"), Some(Easing::OutQuad));
        assert_eq!(Easing::resolve("ease-in-out"), Some(Easing::InOutQuad));
        assert_eq!(Easing::resolve("easeInOut"), Some(Easing::InOutQuad));
    }

    #[test]
    fn kebab_names_resolve() {
        assert_eq!(Easing::resolve("ease-in-out-quad"), Some(Easing::InOutQuad));
        assert_eq!(Easing::resolve("ease-out-bounce"), Some(Easing::OutBounce));
        assert_eq!(Easing::resolve(" linear "), Some(Easing::Linear));
    }

    #[test]
    fn unknown_names_are_none() {
        assert_eq!(Easing::resolve("wobble"), None);
        assert_eq!(Easing::resolve(""), None);
        assert!("easeSideways".parse::<Easing>().is_err());
    }

    #[test]
    fn names_round_trip_through_catalog() {
        for easing in Easing::ALL {
            assert_eq!(Easing::resolve(easing.name()), Some(easing));
        }
    }

    #[test]
    fn serde_uses_names() {
        let json = serde_json::to_string(&Easing::InOutBack).unwrap();
        assert_eq!(json, "\"easeInOutBack\"");
        let parsed: Easing = serde_json::from_str("\"ease\"").unwrap();
        assert_eq!(parsed, Easing::InOutCirc);
        assert!(serde_json::from_str::<Easing>("\"nope\"").is_err());
    }
}
