//! Error types for weighted statistical analysis
//!
//! Provides the error taxonomy shared by all weighted-stats crates.

use thiserror::Error;

/// Core error type for weighted statistical operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// `values` and `weights` are not index-aligned
    #[error("Length mismatch: {values} values but {weights} weights")]
    LengthMismatch { values: usize, weights: usize },

    /// A weight below zero; weights are probability mass
    #[error("Negative weight {weight} at index {index}")]
    NegativeWeight { index: usize, weight: f64 },

    /// NaN or infinite entry in the input
    #[error("Non-finite {what} at index {index}")]
    NonFinite { what: &'static str, index: usize },

    /// Requested quantile level outside [0, 1]
    #[error("Quantile level {level} must be in [0, 1]")]
    QuantileLevelOutOfRange { level: f64 },

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for mismatched value/weight lengths
    pub fn size_mismatch(values: usize, weights: usize) -> Self {
        Self::LengthMismatch { values, weights }
    }

    /// Create an error for an invalid quantile level
    pub fn invalid_quantile(level: f64) -> Self {
        Self::QuantileLevelOutOfRange { level }
    }

    /// Check that a quantile level lies in [0, 1]
    ///
    /// NaN fails the range check and is reported as out of range.
    pub fn check_level(level: f64) -> Result<()> {
        if !(0.0..=1.0).contains(&level) {
            return Err(Self::invalid_quantile(level));
        }
        Ok(())
    }

    /// Check every level of a request
    pub fn check_levels(levels: &[f64]) -> Result<()> {
        levels.iter().try_for_each(|&level| Self::check_level(level))
    }
}
