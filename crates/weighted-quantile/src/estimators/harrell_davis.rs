//! Weighted Harrell-Davis quantile

use super::GenericWeightedQuantile;
use crate::kernels::CdfKernel;
use crate::{QuantileEstimator, Result};
use tracing::instrument;

/// Generic estimator with the Harrell-Davis Beta kernel
pub fn harrell_davis() -> GenericWeightedQuantile {
    GenericWeightedQuantile::new(CdfKernel::HarrellDavis)
}

/// Weighted Harrell-Davis quantiles
///
/// Every order statistic contributes, weighted by the mass a
/// `Beta((n + 1)p, (n + 1)(1 - p))` distribution puts on its slice of the
/// cumulative weight grid, where `n` is the Kish effective sample size.
/// Levels 0 and 1 return the smallest and largest value with positive weight.
///
/// # Example
///
/// ```rust
/// use weighted_quantile::whdquantile;
///
/// let q = whdquantile(&[1.0, 2.0, 3.0, 4.0, 5.0], &[0.5], &[0.2; 5]).unwrap();
/// assert!((q[0] - 3.0).abs() < 1e-9);
/// ```
#[instrument(skip(values, levels, weights), fields(n = values.len(), levels = levels.len()))]
pub fn whdquantile(values: &[f64], levels: &[f64], weights: &[f64]) -> Result<Vec<f64>> {
    harrell_davis().quantiles(values, levels, weights)
}
