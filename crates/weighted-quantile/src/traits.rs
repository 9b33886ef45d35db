//! Core traits for quantile estimation

use crate::{Error, Result};

/// Main trait for weighted quantile estimation
///
/// Implementations take unsorted, index-aligned `values` and `weights` and
/// return one estimate per requested level, in the order of `levels`.
pub trait QuantileEstimator: Send + Sync {
    /// Estimate several quantiles from one sample
    ///
    /// The sample is validated, normalized and sorted once; every level is
    /// then evaluated independently.
    fn quantiles(&self, values: &[f64], levels: &[f64], weights: &[f64]) -> Result<Vec<f64>>;

    /// Estimate a single quantile
    fn quantile(&self, values: &[f64], level: f64, weights: &[f64]) -> Result<f64> {
        self.quantiles(values, std::slice::from_ref(&level), weights)?
            .pop()
            .ok_or_else(|| Error::Numerical(format!("{} returned no estimate", self.name())))
    }

    /// Estimate the median
    fn median(&self, values: &[f64], weights: &[f64]) -> Result<f64> {
        self.quantile(values, 0.5, weights)
    }

    /// Name of this estimator for debugging/logging
    fn name(&self) -> &'static str;
}
