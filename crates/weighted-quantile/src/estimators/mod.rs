//! Weighted quantile estimators

mod empirical;
mod generic;
mod harrell_davis;
mod type7;

pub use empirical::{weighted_median, weighted_quantile, EmpiricalCdf, EmpiricalCdfQuantile};
pub use generic::{GenericWeightedQuantile, ProbabilityGrid};
pub use harrell_davis::{harrell_davis, whdquantile};
pub use type7::{type7, wquantile};

use crate::Result;

/// Evaluate `estimate` at every level, preserving the order of `levels`
///
/// Levels are independent once the sample is prepared; with the `parallel`
/// feature they are spread across the rayon pool.
#[cfg(not(feature = "parallel"))]
pub(crate) fn evaluate_levels<F>(levels: &[f64], estimate: F) -> Result<Vec<f64>>
where
    F: Fn(f64) -> Result<f64> + Sync,
{
    levels.iter().map(|&p| estimate(p)).collect()
}

#[cfg(feature = "parallel")]
pub(crate) fn evaluate_levels<F>(levels: &[f64], estimate: F) -> Result<Vec<f64>>
where
    F: Fn(f64) -> Result<f64> + Sync,
{
    use rayon::prelude::*;

    levels.par_iter().map(|&p| estimate(p)).collect()
}
