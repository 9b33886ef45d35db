//! CDF kernels for the weighted quantile framework
//!
//! A kernel maps the effective sample size `n` and a level `p` to a CDF on
//! `[0, 1]`. Evaluating that CDF on the cumulative weight grid of a sorted
//! sample yields the weight each order statistic receives.

mod harrell_davis;
mod type7;

pub use harrell_davis::BetaCdf;
pub use type7::LinearCdf;

use crate::Result;
use serde::{Deserialize, Serialize};

/// Which CDF family drives the generic estimator
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CdfKernel {
    /// Hyndman-Fan Type 7 linear interpolation
    Type7,
    /// Harrell-Davis Beta CDF
    HarrellDavis,
}

impl CdfKernel {
    /// Build the CDF for effective sample size `n` at level `p`
    pub fn cdf(self, n: f64, p: f64) -> Result<Cdf> {
        match self {
            CdfKernel::Type7 => LinearCdf::new(n, p).map(Cdf::Linear),
            CdfKernel::HarrellDavis => BetaCdf::new(n, p).map(Cdf::Beta),
        }
    }

    /// Short name for logging
    pub fn name(self) -> &'static str {
        match self {
            CdfKernel::Type7 => "type7",
            CdfKernel::HarrellDavis => "harrell_davis",
        }
    }
}

/// A CDF on `[0, 1]` produced by a [`CdfKernel`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Cdf {
    Linear(LinearCdf),
    Beta(BetaCdf),
}

impl Cdf {
    /// Evaluate the CDF at `x`
    #[inline]
    pub fn eval(&self, x: f64) -> f64 {
        match self {
            Cdf::Linear(cdf) => cdf.eval(x),
            Cdf::Beta(cdf) => cdf.eval(x),
        }
    }

    /// Mass the CDF assigns to each interval of a cumulative grid
    ///
    /// `grid` holds `n + 1` nondecreasing points starting at 0; the result has
    /// `n` entries, one per order statistic.
    pub fn interval_masses(&self, grid: &[f64]) -> Vec<f64> {
        let at: Vec<f64> = grid.iter().map(|&x| self.eval(x)).collect();
        at.windows(2).map(|pair| pair[1] - pair[0]).collect()
    }
}

/// Weighted sum of sorted values with their order-statistic weights
#[inline]
pub fn weighted_sum(values: &[f64], weights: &[f64]) -> f64 {
    debug_assert_eq!(values.len(), weights.len());
    values.iter().zip(weights).map(|(v, w)| v * w).sum()
}

/// Check an effective sample size before building a kernel
fn check_sample_size(n: f64) -> Result<()> {
    if n.is_finite() && n > 0.0 {
        Ok(())
    } else {
        Err(crate::Error::Numerical(format!(
            "effective sample size must be positive and finite, got {n}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_interval_masses_sum_to_one() {
        let grid = [0.0, 0.1, 0.35, 0.5, 0.9, 1.0];
        let n = 1.0 / [0.1f64, 0.25, 0.15, 0.4, 0.1].iter().map(|w| w * w).sum::<f64>();

        for kernel in [CdfKernel::Type7, CdfKernel::HarrellDavis] {
            for &p in &[0.0, 0.1, 0.5, 0.77, 1.0] {
                let masses = kernel.cdf(n, p).unwrap().interval_masses(&grid);
                assert_eq!(masses.len(), 5);
                assert!(masses.iter().all(|&m| m >= -1e-15));
                assert_relative_eq!(masses.iter().sum::<f64>(), 1.0, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_weighted_sum() {
        assert_eq!(weighted_sum(&[1.0, 2.0, 3.0], &[0.0, 0.5, 0.5]), 2.5);
        assert_eq!(weighted_sum(&[], &[]), 0.0);
    }

    #[test]
    fn test_invalid_sample_size() {
        for kernel in [CdfKernel::Type7, CdfKernel::HarrellDavis] {
            assert!(kernel.cdf(0.0, 0.5).is_err());
            assert!(kernel.cdf(f64::NAN, 0.5).is_err());
            assert!(kernel.cdf(f64::INFINITY, 0.5).is_err());
        }
    }

    #[test]
    fn test_kernel_serde_names() {
        assert_eq!(serde_json::to_string(&CdfKernel::HarrellDavis).unwrap(), "\"harrell_davis\"");
        let kernel: CdfKernel = serde_json::from_str("\"type7\"").unwrap();
        assert_eq!(kernel, CdfKernel::Type7);
        assert_eq!(kernel.name(), "type7");
    }
}
