//! Core types for weighted statistical analysis
//!
//! This crate provides the pieces every weighted estimator shares:
//!
//! - [`WeightedSample`]: validated, index-aligned values and weights
//! - [`SparseNormalizer`]: the sparse-weight convention, where mass missing
//!   from `Σw < 1` sits on an implicit observation at `0`
//! - [`effective_sample_size`]: Kish's `(Σw)² / Σw²`
//! - [`Error`]: the error taxonomy shared across the workspace
//!
//! # Example
//!
//! ```rust
//! use weighted_core::{NormalizationMode, SparseNormalizer, WeightedSample};
//!
//! let sample = WeightedSample::from_slices(&[1.0, 2.0], &[0.3, 0.2]).unwrap();
//! let normalized = SparseNormalizer::default().normalize(sample, NormalizationMode::Conditional);
//!
//! // Half of the mass was missing and now sits on the implicit zero
//! assert_eq!(normalized.weights(), &[0.3, 0.2, 0.5]);
//! assert!((normalized.effective_sample_size() - 1.0 / 0.38).abs() < 1e-12);
//! ```

pub mod error;
pub mod sample;
pub mod sparse;
pub mod utils;

// Re-export core types
pub use error::{Error, Result};
pub use sample::{effective_sample_size, validate, WeightedSample};
pub use sparse::{
    normalize, NormalizationMode, NormalizerConfig, SparseNormalizer, DEFAULT_UNIT_TOLERANCE,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        effective_sample_size, Error, NormalizationMode, NormalizerConfig, Result,
        SparseNormalizer, WeightedSample,
    };
}
