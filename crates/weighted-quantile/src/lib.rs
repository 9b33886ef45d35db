//! Weighted quantile estimation over sparse weights
//!
//! Three estimators share one input convention: unsorted `values` with
//! index-aligned nonnegative `weights`, where weights summing to less than 1
//! leave their missing mass on an implicit observation at `0`.
//!
//! - [`weighted_quantile`]: interpolated weighted empirical CDF (Type 4)
//! - [`wquantile`]: weighted Type 7
//! - [`whdquantile`]: weighted Harrell-Davis
//!
//! The last two are one [`GenericWeightedQuantile`] with different
//! [`CdfKernel`]s, driven by the Kish effective sample size.
//!
//! # Example
//!
//! ```rust
//! use weighted_quantile::{quantiles_with, QuantileMethod};
//!
//! let values = [3.0, 1.0, 2.0];
//! let weights = [0.2, 0.3, 0.1];
//!
//! for method in [QuantileMethod::EmpiricalCdf, QuantileMethod::Type7, QuantileMethod::HarrellDavis] {
//!     let q = quantiles_with(method, &values, &[0.1, 0.5, 0.9], &weights).unwrap();
//!     assert!(q.windows(2).all(|w| w[0] <= w[1]));
//! }
//! ```

pub mod config;
pub mod error;
pub mod estimators;
pub mod kernels;
pub mod traits;

// Re-export main types
pub use config::{quantiles_with, QuantileMethod, WeightedQuantile};
pub use error::{Error, Result};
pub use estimators::{
    harrell_davis, type7, weighted_median, weighted_quantile, whdquantile, wquantile,
    EmpiricalCdf, EmpiricalCdfQuantile, GenericWeightedQuantile, ProbabilityGrid,
};
pub use kernels::{BetaCdf, Cdf, CdfKernel, LinearCdf};
pub use traits::QuantileEstimator;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        quantiles_with, weighted_median, weighted_quantile, whdquantile, wquantile, Error,
        QuantileEstimator, QuantileMethod, Result, WeightedQuantile,
    };
}
