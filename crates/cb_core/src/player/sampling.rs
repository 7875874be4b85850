//! Random-distribution primitives shared by every generation stage
//!
//! One discrete weighted sampler is implemented here and reused for
//! nationality, star-rating, gem/bust-magnitude and pitch-type selection.

use crate::error::{GenError, Result};
use rand::Rng;
use rand_distr::StandardNormal;

/// Discrete distribution over arbitrary outcomes.
///
/// Weights are relative; they do not need to sum to 1.0.
#[derive(Debug, Clone)]
pub struct WeightedTable<T> {
    entries: Vec<(T, f64)>,
    total: f64,
}

impl<T: Clone> WeightedTable<T> {
    pub fn new(entries: Vec<(T, f64)>) -> Result<Self> {
        if entries.is_empty() {
            return Err(GenError::InvalidDistribution("weighted table has no outcomes".into()));
        }
        if entries.iter().any(|(_, w)| !w.is_finite() || *w < 0.0) {
            return Err(GenError::InvalidDistribution(
                "weighted table weights must be finite and non-negative".into(),
            ));
        }
        let total: f64 = entries.iter().map(|(_, w)| w).sum();
        if total <= 0.0 {
            return Err(GenError::InvalidDistribution(
                "weighted table weights must sum to a positive value".into(),
            ));
        }
        Ok(Self { entries, total })
    }

    /// Draw one outcome proportionally to its weight
    pub fn sample(&self, rng: &mut impl Rng) -> T {
        let mut remaining = rng.gen::<f64>() * self.total;
        for (outcome, weight) in &self.entries {
            remaining -= weight;
            if remaining < 0.0 {
                return outcome.clone();
            }
        }
        // Floating-point fallback: return the last outcome
        self.entries[self.entries.len() - 1].0.clone()
    }

    pub fn entries(&self) -> &[(T, f64)] {
        &self.entries
    }
}

/// Uniform integer in `[min, max]` inclusive
pub fn roll_int(rng: &mut impl Rng, min: i32, max: i32) -> i32 {
    debug_assert!(min <= max, "roll_int range is inverted: {}..={}", min, max);
    rng.gen_range(min..=max)
}

/// Uniform float in `[min, max)`
pub fn roll_float(rng: &mut impl Rng, min: f32, max: f32) -> f32 {
    debug_assert!(min < max, "roll_float range is inverted: {}..{}", min, max);
    rng.gen_range(min..max)
}

/// Normal draw with the given mean and standard deviation
pub fn roll_normal(rng: &mut impl Rng, mean: f32, std_dev: f32) -> f32 {
    let z: f32 = rng.sample(StandardNormal);
    mean + z * std_dev
}

/// Final clamp applied to every skill rating after all additive adjustments
pub fn clamp_rating(value: i32) -> u8 {
    value.clamp(1, 99) as u8
}
