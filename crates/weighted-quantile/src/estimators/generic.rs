//! Generic weighted quantile estimator
//!
//! Any quantile that is a weighted sum of order statistics fits one scheme:
//! normalize the sample to unit mass, sort it, lay the cumulative weights on
//! a grid `0 = p₀ ≤ p₁ ≤ … ≤ pₙ = 1`, then give order statistic `i` the mass
//! `F(pᵢ₊₁) - F(pᵢ)` of a kernel CDF `F` chosen from the effective sample
//! size and the level. The kernel is the only thing that varies.

use super::evaluate_levels;
use crate::kernels::{weighted_sum, CdfKernel};
use crate::{Error, QuantileEstimator, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use weighted_core::{
    utils::cumulative_grid, NormalizationMode, NormalizerConfig, SparseNormalizer, WeightedSample,
};

/// A sorted, unit-mass sample laid out on its cumulative weight grid
#[derive(Clone, Debug, PartialEq)]
pub struct ProbabilityGrid {
    values: Vec<f64>,
    grid: Vec<f64>,
    effective_sample_size: f64,
}

impl ProbabilityGrid {
    /// Build from a sample already normalized to unit mass
    pub fn from_sample(mut sample: WeightedSample) -> Self {
        let effective_sample_size = sample.effective_sample_size();
        sample.sort_by_value();
        let (values, weights) = sample.into_parts();

        let mut grid = cumulative_grid(&weights);
        // the running sum may drift off 1; close the grid exactly at the last
        // positive weight so trailing zero-weight values keep empty intervals
        let close = weights.iter().rposition(|&w| w > 0.0).map_or(weights.len(), |i| i + 1);
        for point in &mut grid[close..] {
            *point = 1.0;
        }

        Self { values, grid, effective_sample_size }
    }

    /// Sorted values, including the implicit zero when one was added
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// `len() + 1` grid points from 0 to 1
    pub fn grid(&self) -> &[f64] {
        &self.grid
    }

    /// Kish effective sample size of the normalized weights
    pub fn effective_sample_size(&self) -> f64 {
        self.effective_sample_size
    }

    /// Weight each order statistic receives under `kernel` at `level`
    pub fn order_statistic_weights(&self, kernel: CdfKernel, level: f64) -> Result<Vec<f64>> {
        let cdf = kernel.cdf(self.effective_sample_size, level)?;
        Ok(cdf.interval_masses(&self.grid))
    }

    /// Estimate the quantile at `level` under `kernel`
    pub fn estimate(&self, kernel: CdfKernel, level: f64) -> Result<f64> {
        let weights = self.order_statistic_weights(kernel, level)?;
        let estimate = weighted_sum(&self.values, &weights);
        trace!(kernel = kernel.name(), level, estimate, "quantile evaluated");
        Ok(estimate)
    }
}

/// Weighted quantile estimator parameterized by a CDF kernel
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenericWeightedQuantile {
    kernel: CdfKernel,
    #[serde(default)]
    normalizer: NormalizerConfig,
}

impl GenericWeightedQuantile {
    pub fn new(kernel: CdfKernel) -> Self {
        Self { kernel, normalizer: NormalizerConfig::default() }
    }

    pub fn with_normalizer(mut self, normalizer: NormalizerConfig) -> Self {
        self.normalizer = normalizer;
        self
    }

    pub fn kernel(&self) -> CdfKernel {
        self.kernel
    }

    pub fn normalizer(&self) -> &NormalizerConfig {
        &self.normalizer
    }

    /// Validate, pad, rescale and sort a sample onto its probability grid
    pub fn prepare(&self, values: &[f64], weights: &[f64]) -> Result<ProbabilityGrid> {
        let normalizer = SparseNormalizer::new(self.normalizer)?;
        let sample = WeightedSample::from_slices(values, weights)?;
        let sample = normalizer.normalize(sample, NormalizationMode::UnitSum);
        let grid = ProbabilityGrid::from_sample(sample);
        debug!(
            kernel = self.kernel.name(),
            n = grid.values.len(),
            n_eff = grid.effective_sample_size,
            "probability grid ready"
        );
        Ok(grid)
    }
}

impl QuantileEstimator for GenericWeightedQuantile {
    fn quantiles(&self, values: &[f64], levels: &[f64], weights: &[f64]) -> Result<Vec<f64>> {
        Error::check_levels(levels)?;
        let grid = self.prepare(values, weights)?;
        evaluate_levels(levels, |p| grid.estimate(self.kernel, p))
    }

    fn name(&self) -> &'static str {
        self.kernel.name()
    }
}
