//! Weighted statistics over sparse probability weights
//!
//! Re-exports the workspace crates behind one import path:
//!
//! - [`base`]: sample validation, sparse-weight normalization, Kish `n_eff`
//! - [`moments`]: weighted mean, variance and standard deviation
//! - [`quantile`]: empirical-CDF, Type 7 and Harrell-Davis quantiles
//!
//! Weights are nonnegative probability mass. When they sum to less than 1,
//! the missing mass belongs to an implicit observation at `0`; sums at or
//! above 1 are used as given.
//!
//! # Example
//!
//! ```rust
//! use weighted_stats::prelude::*;
//!
//! let values = [10.0, 20.0];
//! let weights = [0.3, 0.2];
//!
//! let mean = weighted_mean(&values, &weights).unwrap();
//! assert!((mean - 7.0).abs() < 1e-12);
//!
//! let q = weighted_quantile(&values, &[0.1, 0.5, 0.9], &weights).unwrap();
//! assert_eq!(q[0], 0.0);
//! assert!((q[2] - 15.0).abs() < 1e-9);
//!
//! let hd = whdquantile(&values, &[0.0, 1.0], &weights).unwrap();
//! assert_eq!(hd, vec![0.0, 20.0]);
//! ```

pub use weighted_core as base;
pub use weighted_moments as moments;
pub use weighted_quantile as quantile;

pub use weighted_core::{
    effective_sample_size, Error, NormalizationMode, NormalizerConfig, Result, SparseNormalizer,
    WeightedSample, DEFAULT_UNIT_TOLERANCE,
};
pub use weighted_moments::{
    weighted_mean, weighted_std, weighted_variance, MomentSummary, WeightedMoments,
};
pub use weighted_quantile::{
    quantiles_with, weighted_median, weighted_quantile, whdquantile, wquantile, CdfKernel,
    Error as QuantileError, GenericWeightedQuantile, QuantileEstimator, QuantileMethod,
    WeightedQuantile,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        effective_sample_size, quantiles_with, weighted_mean, weighted_median, weighted_quantile,
        weighted_std, weighted_variance, whdquantile, wquantile, NormalizerConfig,
        QuantileEstimator, QuantileMethod, WeightedMoments, WeightedQuantile,
    };
}
