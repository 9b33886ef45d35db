//! Error types for quantile estimation

use thiserror::Error;

/// Errors that can occur during quantile estimation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A CDF kernel could not be built for the requested parameters
    #[error("Numerical error: {0}")]
    Numerical(String),

    /// Input validation or normalization error
    #[error("Core computation error: {0}")]
    Core(#[from] weighted_core::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions
impl Error {
    /// Check that a level lies in [0, 1]; NaN is rejected
    pub fn check_level(level: f64) -> Result<()> {
        weighted_core::Error::check_level(level)?;
        Ok(())
    }

    /// Check that every requested level lies in [0, 1]
    pub fn check_levels(levels: &[f64]) -> Result<()> {
        weighted_core::Error::check_levels(levels)?;
        Ok(())
    }

    /// The level that was rejected, if this is a level error
    pub fn rejected_level(&self) -> Option<f64> {
        match self {
            Error::Core(weighted_core::Error::QuantileLevelOutOfRange { level }) => Some(*level),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_levels() {
        assert!(Error::check_levels(&[0.0, 0.5, 1.0]).is_ok());
        assert!(Error::check_level(f64::NAN).is_err());

        let err = Error::check_levels(&[0.5, 1.5]).unwrap_err();
        assert_eq!(err.rejected_level(), Some(1.5));
        assert_eq!(
            err.to_string(),
            "Core computation error: Quantile level 1.5 must be in [0, 1]"
        );
    }

    #[test]
    fn test_numerical_display() {
        let err = Error::Numerical("bad shape".to_string());
        assert_eq!(err.to_string(), "Numerical error: bad shape");
        assert_eq!(err.rejected_level(), None);
    }
}
