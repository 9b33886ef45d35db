//! Weighted empirical-CDF quantile (Hyndman-Fan Type 4)

use super::evaluate_levels;
use crate::{Error, QuantileEstimator, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use weighted_core::{
    utils::cumulative_sum, NormalizationMode, NormalizerConfig, SparseNormalizer, WeightedSample,
};

/// Piecewise-linear inverse of a weighted empirical CDF
///
/// Knots are the sorted values against their cumulative weights. Levels
/// below the first knot return the smallest value, levels at or above the
/// last knot return the largest.
#[derive(Clone, Debug, PartialEq)]
pub struct EmpiricalCdf {
    values: Vec<f64>,
    cumulative: Vec<f64>,
}

impl EmpiricalCdf {
    /// Build from a normalized sample; sorts it by value
    pub fn from_sample(mut sample: WeightedSample) -> Self {
        sample.sort_by_value();
        let (values, weights) = sample.into_parts();
        let cumulative = cumulative_sum(&weights);
        Self { values, cumulative }
    }

    /// Sorted values
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Cumulative weights, aligned with [`values`](Self::values)
    pub fn cumulative(&self) -> &[f64] {
        &self.cumulative
    }

    /// Interpolated quantile at `level`
    pub fn quantile(&self, level: f64) -> f64 {
        let (c, v) = (&self.cumulative, &self.values);
        let n = c.len();
        // only reachable from an empty sample that skipped normalization
        if n == 0 {
            return 0.0;
        }
        if level < c[0] {
            return v[0];
        }
        if level >= c[n - 1] {
            return v[n - 1];
        }

        // rightmost knot at or below the level; c[j + 1] > level >= c[j]
        let j = c.partition_point(|&x| x <= level) - 1;
        let t = (level - c[j]) / (c[j + 1] - c[j]);
        v[j] + t * (v[j + 1] - v[j])
    }
}

/// Weighted quantile by interpolating the empirical CDF
///
/// Sparse samples are padded with the implicit zero but never rescaled, so a
/// sample carrying more than unit mass keeps its total and levels near 1 may
/// fall past the last knot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmpiricalCdfQuantile {
    pub normalizer: NormalizerConfig,
}

impl EmpiricalCdfQuantile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_normalizer(normalizer: NormalizerConfig) -> Self {
        Self { normalizer }
    }

    /// Validate, pad and sort a sample into its empirical CDF
    pub fn fit(&self, values: &[f64], weights: &[f64]) -> Result<EmpiricalCdf> {
        let normalizer = SparseNormalizer::new(self.normalizer)?;
        let sample = WeightedSample::from_slices(values, weights)?;
        let sample = normalizer.normalize(sample, NormalizationMode::Conditional);
        Ok(EmpiricalCdf::from_sample(sample))
    }
}

impl QuantileEstimator for EmpiricalCdfQuantile {
    fn quantiles(&self, values: &[f64], levels: &[f64], weights: &[f64]) -> Result<Vec<f64>> {
        Error::check_levels(levels)?;
        let cdf = self.fit(values, weights)?;
        debug!(knots = cdf.values.len(), levels = levels.len(), "empirical CDF ready");
        evaluate_levels(levels, |p| Ok(cdf.quantile(p)))
    }

    fn name(&self) -> &'static str {
        "empirical_cdf"
    }
}

/// Weighted quantiles by empirical-CDF interpolation
///
/// # Example
///
/// ```rust
/// use weighted_quantile::weighted_quantile;
///
/// // Half the mass is missing and sits on an implicit zero
/// let q = weighted_quantile(&[10.0, 20.0], &[0.1, 0.5, 0.9], &[0.3, 0.2]).unwrap();
/// assert_eq!(q[0], 0.0);
/// assert_eq!(q[1], 0.0);
/// assert!((q[2] - 15.0).abs() < 1e-9);
/// ```
#[instrument(skip(values, levels, weights), fields(n = values.len(), levels = levels.len()))]
pub fn weighted_quantile(values: &[f64], levels: &[f64], weights: &[f64]) -> Result<Vec<f64>> {
    EmpiricalCdfQuantile::default().quantiles(values, levels, weights)
}

/// Weighted median by empirical-CDF interpolation
pub fn weighted_median(values: &[f64], weights: &[f64]) -> Result<f64> {
    EmpiricalCdfQuantile::default().median(values, weights)
}
