#![forbid(unsafe_code)]

//! Permitted magnification steps.

use radix_core::geometry::Size;

use crate::config::ConfigError;

/// Steps closer than this are treated as equal when stepping.
const STEP_EPSILON: f64 = 1e-9;

/// A non-empty, strictly ascending list of positive scales.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleSteps(Vec<f64>);

impl ScaleSteps {
    /// Validate and wrap `steps`.
    pub fn new(steps: Vec<f64>) -> Result<Self, ConfigError> {
        if steps.is_empty() {
            return Err(ConfigError::EmptyScaleSteps);
        }
        for (index, &value) in steps.iter().enumerate() {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositiveScaleStep { index, value });
            }
            if index > 0 && value <= steps[index - 1] {
                return Err(ConfigError::UnorderedScaleSteps { index });
            }
        }
        Ok(Self(steps))
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Smallest step.
    #[must_use]
    pub fn first(&self) -> f64 {
        self.0[0]
    }

    /// Largest step.
    #[must_use]
    pub fn last(&self) -> f64 {
        self.0[self.0.len() - 1]
    }

    /// Step at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied()
    }

    /// Row of the largest step not above `scale`; the first row when
    /// `scale` is below every step.
    #[must_use]
    pub fn index_of(&self, scale: f64) -> usize {
        self.0
            .iter()
            .rposition(|&s| s <= scale + STEP_EPSILON)
            .unwrap_or(0)
    }

    /// Clamp `scale` into `[first, last]`.
    #[must_use]
    pub fn clamp(&self, scale: f64) -> f64 {
        scale.clamp(self.first(), self.last())
    }

    /// Largest step at which `content` fits inside `area`.
    ///
    /// Steps are tried in ascending order and the search stops at the first
    /// one that overflows; when even the smallest step overflows, the
    /// smallest step is returned.
    #[must_use]
    pub fn fit(&self, content: Size, area: Size) -> f64 {
        let mut best = self.first();
        for &step in &self.0 {
            if !content.scaled(step).fits_within(area) {
                break;
            }
            best = step;
        }
        best
    }

    /// Next step above `current`, or the last step.
    #[must_use]
    pub fn step_up(&self, current: f64) -> f64 {
        self.0
            .iter()
            .copied()
            .find(|&s| s > current + STEP_EPSILON)
            .unwrap_or_else(|| self.last())
    }

    /// Next step below `current`, or the first step.
    #[must_use]
    pub fn step_down(&self, current: f64) -> f64 {
        self.0
            .iter()
            .rev()
            .copied()
            .find(|&s| s < current - STEP_EPSILON)
            .unwrap_or_else(|| self.first())
    }
}

impl Default for ScaleSteps {
    fn default() -> Self {
        Self(crate::config::DEFAULT_SCALE_STEPS.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steps() -> ScaleSteps {
        ScaleSteps::default()
    }

    // ---- Fit tests ----

    #[test]
    fn fit_picks_largest_fitting_step() {
        let s = steps();
        assert_eq!(s.fit(Size::new(400.0, 300.0), Size::new(500.0, 500.0)), 1.0);
        assert_eq!(s.fit(Size::new(100.0, 100.0), Size::new(500.0, 500.0)), 5.0);
        assert_eq!(s.fit(Size::new(200.0, 100.0), Size::new(500.0, 500.0)), 2.5);
    }

    #[test]
    fn fit_defaults_to_smallest_when_nothing_fits() {
        let s = steps();
        assert_eq!(s.fit(Size::new(5000.0, 5000.0), Size::new(500.0, 500.0)), 0.2);
    }

    #[test]
    fn fit_is_inclusive_of_area_edges() {
        let s = ScaleSteps::new(vec![1.0, 1.5, 2.0]).unwrap();
        assert_eq!(s.fit(Size::new(10.0, 10.0), Size::new(20.0, 20.0)), 2.0);
        assert_eq!(s.fit(Size::new(10.0, 10.0), Size::new(19.0, 20.0)), 1.5);
    }

    // ---- Stepping tests ----

    #[test]
    fn step_up_and_down() {
        let s = steps();
        assert_eq!(s.step_up(1.0), 1.5);
        assert_eq!(s.step_up(0.6), 0.8);
        assert_eq!(s.step_up(1.2), 1.5);
        assert_eq!(s.step_down(1.0), 0.8);
        assert_eq!(s.step_down(1.2), 1.0);
    }

    #[test]
    fn stepping_saturates_at_bounds() {
        let s = steps();
        assert_eq!(s.step_up(5.0), 5.0);
        assert_eq!(s.step_down(0.2), 0.2);
        assert_eq!(s.step_up(9.0), 5.0);
    }

    #[test]
    fn index_of_matches_rows() {
        let s = steps();
        assert_eq!(s.index_of(0.2), 0);
        assert_eq!(s.index_of(1.0), 4);
        assert_eq!(s.index_of(1.3), 4);
        assert_eq!(s.index_of(5.0), 12);
        assert_eq!(s.index_of(0.1), 0);
        assert_eq!(s.get(5), Some(1.5));
        assert_eq!(s.get(13), None);
    }

    #[test]
    fn clamp_bounds() {
        let s = steps();
        assert_eq!(s.clamp(0.05), 0.2);
        assert_eq!(s.clamp(7.0), 5.0);
        assert_eq!(s.clamp(2.2), 2.2);
    }
}
