//! Weighted moments for sparse probability weights
//!
//! Mean, variance and standard deviation where `Σw < 1` leaves the missing
//! mass on an implicit observation at `0`. Variance supports a delta degrees
//! of freedom correction based on Kish's effective sample size.
//!
//! # Example
//!
//! ```rust
//! use weighted_moments::{weighted_mean, weighted_variance};
//!
//! // 0.5 of the mass is missing and sits at zero
//! let mean = weighted_mean(&[10.0, 20.0], &[0.3, 0.2]).unwrap();
//! assert!((mean - 7.0).abs() < 1e-12);
//!
//! // Effective sample size 2 cannot support ddof = 5
//! assert!(weighted_variance(&[1.0, 2.0], &[0.5, 0.5], 5).unwrap().is_nan());
//! ```

pub mod moments;

pub use moments::{weighted_mean, weighted_std, weighted_variance, MomentSummary, WeightedMoments};
// Re-export from weighted-core
pub use weighted_core::{Error, NormalizerConfig, Result};
