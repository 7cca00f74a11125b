#![forbid(unsafe_code)]

//! Decimal rounding and CSS value formatting.

/// Digits kept when printing in-flight animation values.
const STYLE_DIGITS: usize = 4;

fn factor(digits: u32) -> f64 {
    10f64.powi(i32::try_from(digits).unwrap_or(i32::MAX))
}

/// Round half away from zero to `digits` decimals.
#[must_use]
pub fn round_to(x: f64, digits: u32) -> f64 {
    let f = factor(digits);
    (x * f).round() / f
}

/// Fixed-point text with exactly `digits` decimals, `"2.50"`.
#[must_use]
pub fn fixed(x: f64, digits: usize) -> String {
    format!("{x:.digits$}")
}

/// Shortest text for `x` with at most `digits` decimals, `"2.5"`, `"2"`.
#[must_use]
pub fn trimmed(x: f64, digits: usize) -> String {
    let mut s = fixed(x, digits);
    if s.contains('.') {
        let keep = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(keep);
    }
    if s == "-0" {
        s.remove(0);
    }
    s
}

/// `transform` value, `"scale(1.5)"`.
#[must_use]
pub fn css_scale(scale: f64) -> String {
    format!("scale({})", trimmed(scale, STYLE_DIGITS))
}

/// Box dimension capped at the container, `"min(600px, 100%)"`.
#[must_use]
pub fn css_min_px(px: f64) -> String {
    format!("min({}px, 100%)", trimmed(px, STYLE_DIGITS))
}

/// Magnification readout, `"1.5x"`.
#[must_use]
pub fn scale_label(scale: f64, precision: u32) -> String {
    format!(
        "{}x",
        trimmed(round_to(scale, precision), precision as usize)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding_helpers() {
        assert_eq!(round_to(1.25, 1), 1.3);
        assert_eq!(round_to(0.6000000001, 1), 0.6);
        assert_eq!(round_to(2.25, 0), 2.0);
    }

    #[test]
    fn fixed_and_trimmed() {
        assert_eq!(fixed(2.0, 1), "2.0");
        assert_eq!(trimmed(2.0, 1), "2");
        assert_eq!(trimmed(2.50, 2), "2.5");
        assert_eq!(trimmed(120.0, 0), "120");
        assert_eq!(trimmed(-0.00001, 2), "0");
    }

    #[test]
    fn css_values() {
        assert_eq!(css_scale(1.5), "scale(1.5)");
        assert_eq!(css_scale(0.333333333), "scale(0.3333)");
        assert_eq!(css_min_px(600.0), "min(600px, 100%)");
        assert_eq!(css_min_px(412.75), "min(412.75px, 100%)");
    }

    #[test]
    fn readout_uses_shortest_form() {
        assert_eq!(scale_label(1.0, 1), "1x");
        assert_eq!(scale_label(1.5, 1), "1.5x");
        assert_eq!(scale_label(0.6000000001, 1), "0.6x");
    }
}
