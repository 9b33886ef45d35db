//! Sparse-weight normalization
//!
//! Weights in this workspace are probability mass that may sum to less than
//! one. The missing mass belongs to an implicit observation at value `0`.
//! [`SparseNormalizer`] makes that observation explicit, once per estimator
//! call, in one of two modes:
//!
//! - [`NormalizationMode::Conditional`] appends `(0, 1 - Σw)` when the mass is
//!   short of one and leaves samples that already carry unit mass (or more)
//!   untouched. Mass above one is never scaled down.
//! - [`NormalizationMode::UnitSum`] does the same padding, then divides every
//!   weight by the resulting total so the weights sum to one.

use crate::{Error, Result, WeightedSample};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Default slack on the `Σw < 1` check
pub const DEFAULT_UNIT_TOLERANCE: f64 = 1e-10;

/// How far a sample is pushed towards unit mass
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizationMode {
    /// Pad the implicit zero when `Σw < 1`; otherwise leave weights as given
    Conditional,
    /// Pad as in `Conditional`, then rescale the weights to sum to one
    UnitSum,
}

/// Configuration for [`SparseNormalizer`]
///
/// `unit_tolerance` absorbs floating-point noise at the `Σw < 1` boundary: a
/// sample with `1 - unit_tolerance <= Σw < 1` counts as carrying unit mass
/// and gets no implicit zero.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    pub unit_tolerance: f64,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            unit_tolerance: DEFAULT_UNIT_TOLERANCE,
        }
    }
}

impl NormalizerConfig {
    /// Exact comparison against one, no slack
    pub fn exact() -> Self {
        Self { unit_tolerance: 0.0 }
    }

    /// Check the tolerance lies in `[0, 1)`
    pub fn validate(&self) -> Result<()> {
        if !(0.0..1.0).contains(&self.unit_tolerance) {
            return Err(Error::InvalidParameter(format!(
                "unit tolerance {} must be in [0, 1)",
                self.unit_tolerance
            )));
        }
        Ok(())
    }
}

/// Applies the sparse-weight convention to a [`WeightedSample`]
///
/// # Examples
///
/// ```
/// use weighted_core::{NormalizationMode, SparseNormalizer, WeightedSample};
///
/// let normalizer = SparseNormalizer::default();
/// let sample = WeightedSample::from_slices(&[10.0, 20.0], &[0.3, 0.2]).unwrap();
/// let padded = normalizer.normalize(sample, NormalizationMode::Conditional);
///
/// assert_eq!(padded.values(), &[10.0, 20.0, 0.0]);
/// assert_eq!(padded.weights(), &[0.3, 0.2, 0.5]);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SparseNormalizer {
    config: NormalizerConfig,
}

impl SparseNormalizer {
    /// Create a normalizer from a validated configuration
    pub fn new(config: NormalizerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration
    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// Mass that the implicit zero receives for a sample of total weight
    /// `total`, or `None` if the sample already carries unit mass
    pub fn implicit_zero_mass(&self, total: f64) -> Option<f64> {
        if total < 1.0 - self.config.unit_tolerance {
            Some(1.0 - total)
        } else {
            None
        }
    }

    /// Normalize a sample
    ///
    /// Call this exactly once per estimator call: the appended pair is a
    /// regular pair afterwards and a second pass cannot tell it apart.
    pub fn normalize(&self, mut sample: WeightedSample, mode: NormalizationMode) -> WeightedSample {
        let mut total = sample.total_weight();

        if let Some(missing) = self.implicit_zero_mass(total) {
            trace!(total, missing, "padding implicit zero");
            sample.push_unchecked(0.0, missing);
            total = sample.total_weight();
        }

        if mode == NormalizationMode::UnitSum && total > 0.0 {
            if total.is_infinite() {
                sample.rescale_by_max_weight();
                total = sample.total_weight();
            }
            sample.divide_weights(total);
        }
        sample
    }
}

/// Validate and normalize borrowed slices with the default configuration
///
/// Convenience form of [`SparseNormalizer::normalize`] in
/// [`NormalizationMode::Conditional`].
///
/// # Examples
///
/// ```
/// use weighted_core::normalize;
///
/// let sample = normalize(&[1.0, 2.0], &[0.6, 0.4]).unwrap();
/// assert_eq!(sample.len(), 2);
/// ```
pub fn normalize(values: &[f64], weights: &[f64]) -> Result<WeightedSample> {
    let sample = WeightedSample::from_slices(values, weights)?;
    Ok(SparseNormalizer::default().normalize(sample, NormalizationMode::Conditional))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample(values: &[f64], weights: &[f64]) -> WeightedSample {
        WeightedSample::from_slices(values, weights).unwrap()
    }

    #[test]
    fn test_pads_when_mass_is_short() {
        let out = normalize(&[1.0, 2.0], &[0.3, 0.2]).unwrap();
        assert_eq!(out.values(), &[1.0, 2.0, 0.0]);
        assert_eq!(out.weights(), &[0.3, 0.2, 0.5]);
        assert_relative_eq!(out.total_weight(), 1.0, epsilon = 1e-15);
    }

    #[test]
    fn test_leaves_unit_mass_untouched() {
        let out = normalize(&[1.0, 2.0, 3.0], &[0.5, 0.25, 0.25]).unwrap();
        assert_eq!(out, sample(&[1.0, 2.0, 3.0], &[0.5, 0.25, 0.25]));
    }

    #[test]
    fn test_never_scales_down_excess_mass() {
        let out = normalize(&[1.0, 2.0], &[2.0, 3.0]).unwrap();
        assert_eq!(out.weights(), &[2.0, 3.0]);
    }

    #[test]
    fn test_idempotent_at_or_above_unit_mass() {
        let normalizer = SparseNormalizer::default();
        let once = normalizer.normalize(sample(&[4.0, 5.0], &[0.7, 0.6]), NormalizationMode::Conditional);
        let twice = normalizer.normalize(once.clone(), NormalizationMode::Conditional);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_sample_becomes_point_mass_at_zero() {
        let out = normalize(&[], &[]).unwrap();
        assert_eq!(out.values(), &[0.0]);
        assert_eq!(out.weights(), &[1.0]);
    }

    #[test]
    fn test_all_zero_weights() {
        let out = normalize(&[1.0, 2.0, 3.0], &[0.0, 0.0, 0.0]).unwrap();
        assert_eq!(out.values(), &[1.0, 2.0, 3.0, 0.0]);
        assert_eq!(out.weights(), &[0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_tolerance_absorbs_rounding_noise() {
        let weights = [0.1; 10];
        // 0.1 summed ten times is 0.9999999999999999
        assert!(weights.iter().sum::<f64>() < 1.0);

        let values = [1.0; 10];
        let out = normalize(&values, &weights).unwrap();
        assert_eq!(out.len(), 10);

        let exact = SparseNormalizer::new(NormalizerConfig::exact()).unwrap();
        let out = exact.normalize(sample(&values, &weights), NormalizationMode::Conditional);
        assert_eq!(out.len(), 11);
    }

    #[test]
    fn test_unit_sum_mode_rescales() {
        let normalizer = SparseNormalizer::default();

        let out = normalizer.normalize(sample(&[1.0, 2.0], &[2.0, 6.0]), NormalizationMode::UnitSum);
        assert_eq!(out.len(), 2);
        assert_relative_eq!(out.weights()[0], 0.25);
        assert_relative_eq!(out.weights()[1], 0.75);

        let out = normalizer.normalize(sample(&[1.0], &[0.4]), NormalizationMode::UnitSum);
        assert_eq!(out.values(), &[1.0, 0.0]);
        assert_relative_eq!(out.total_weight(), 1.0, epsilon = 1e-15);
    }

    #[test]
    fn test_unit_sum_with_overflowing_total() {
        let normalizer = SparseNormalizer::default();
        let out = normalizer.normalize(sample(&[1.0, 2.0], &[1e308, 1e308]), NormalizationMode::UnitSum);
        assert_eq!(out.len(), 2);
        assert_relative_eq!(out.weights()[0], 0.5);
        assert_relative_eq!(out.weights()[1], 0.5);
        assert_relative_eq!(out.effective_sample_size(), 2.0, epsilon = 1e-12);

        // finite total whose reciprocal is subnormal
        let out = normalizer.normalize(sample(&[1.0, 2.0], &[3e307, 6e307]), NormalizationMode::UnitSum);
        assert_relative_eq!(out.weights()[0], 1.0 / 3.0, epsilon = 1e-15);
        assert_relative_eq!(out.weights()[1], 2.0 / 3.0, epsilon = 1e-15);
    }

    #[test]
    fn test_invalid_tolerance_rejected() {
        assert!(SparseNormalizer::new(NormalizerConfig { unit_tolerance: -1e-3 }).is_err());
        assert!(SparseNormalizer::new(NormalizerConfig { unit_tolerance: 1.0 }).is_err());
        assert!(SparseNormalizer::new(NormalizerConfig { unit_tolerance: f64::NAN }).is_err());
        assert!(SparseNormalizer::new(NormalizerConfig { unit_tolerance: 1e-6 }).is_ok());
    }

    #[test]
    fn test_config_from_json() {
        let config: NormalizerConfig = serde_json::from_str(r#"{"unit_tolerance": 1e-6}"#).unwrap();
        assert_eq!(config.unit_tolerance, 1e-6);

        let config: NormalizerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, NormalizerConfig::default());

        let mode: NormalizationMode = serde_json::from_str(r#""unit_sum""#).unwrap();
        assert_eq!(mode, NormalizationMode::UnitSum);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_padded_mass_reaches_one(
                weights in prop::collection::vec(0.0f64..0.1, 0..10)
            ) {
                let values = vec![1.0; weights.len()];
                let out = normalize(&values, &weights).unwrap();
                prop_assert!(out.total_weight() >= 1.0 - DEFAULT_UNIT_TOLERANCE);
                prop_assert!(out.len() == weights.len() || out.len() == weights.len() + 1);
                prop_assert_eq!(&out.weights()[..weights.len()], &weights[..]);
            }

            #[test]
            fn prop_unit_sum_is_unit(
                weights in prop::collection::vec(0.0f64..5.0, 1..20)
            ) {
                let values = vec![1.0; weights.len()];
                let out = SparseNormalizer::default()
                    .normalize(sample(&values, &weights), NormalizationMode::UnitSum);
                prop_assert!((out.total_weight() - 1.0).abs() < 1e-12);
            }
        }
    }
}
