//! Harrell-Davis Beta CDF

use super::check_sample_size;
use crate::{Error, Result};
use statrs::distribution::{Beta, ContinuousCDF};

/// CDF of `Beta((n + 1)p, (n + 1)(1 - p))`
///
/// At `p = 0` and `p = 1` the Beta shape degenerates; the limits are point
/// masses just above 0 and at 1, which select the smallest and the largest
/// observation carrying positive weight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BetaCdf {
    Regular(Beta),
    /// `p = 0`
    LowerPoint,
    /// `p = 1`
    UpperPoint,
}

impl BetaCdf {
    /// Build the Harrell-Davis CDF for effective sample size `n` at level `p`
    pub fn new(n: f64, p: f64) -> Result<Self> {
        check_sample_size(n)?;

        if p <= 0.0 {
            return Ok(BetaCdf::LowerPoint);
        }
        if p >= 1.0 {
            return Ok(BetaCdf::UpperPoint);
        }

        let alpha = (n + 1.0) * p;
        let beta = (n + 1.0) * (1.0 - p);
        Beta::new(alpha, beta)
            .map(BetaCdf::Regular)
            .map_err(|e| Error::Numerical(format!("Beta({alpha}, {beta}): {e}")))
    }

    #[inline]
    pub fn eval(&self, x: f64) -> f64 {
        match self {
            BetaCdf::Regular(dist) => {
                if x <= 0.0 {
                    0.0
                } else if x >= 1.0 {
                    1.0
                } else {
                    dist.cdf(x)
                }
            }
            BetaCdf::LowerPoint => {
                if x > 0.0 {
                    1.0
                } else {
                    0.0
                }
            }
            BetaCdf::UpperPoint => {
                if x >= 1.0 {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }
}
