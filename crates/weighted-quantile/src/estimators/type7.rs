//! Weighted Type 7 quantile

use super::GenericWeightedQuantile;
use crate::kernels::CdfKernel;
use crate::{QuantileEstimator, Result};
use tracing::instrument;

/// Generic estimator with the Type 7 kernel
pub fn type7() -> GenericWeightedQuantile {
    GenericWeightedQuantile::new(CdfKernel::Type7)
}

/// Weighted quantiles generalizing Hyndman-Fan Type 7
///
/// With uniform weights this is the classic linear interpolation between
/// order statistics `⌊h⌋` and `⌊h⌋ + 1`, `h = p(n - 1) + 1`.
///
/// # Example
///
/// ```rust
/// use weighted_quantile::wquantile;
///
/// let q = wquantile(&[1.0, 2.0, 3.0, 4.0, 5.0], &[0.25, 0.5, 0.75], &[0.2; 5]).unwrap();
/// assert!((q[0] - 2.0).abs() < 1e-9);
/// assert!((q[1] - 3.0).abs() < 1e-9);
/// assert!((q[2] - 4.0).abs() < 1e-9);
/// ```
#[instrument(skip(values, levels, weights), fields(n = values.len(), levels = levels.len()))]
pub fn wquantile(values: &[f64], levels: &[f64], weights: &[f64]) -> Result<Vec<f64>> {
    type7().quantiles(values, levels, weights)
}
