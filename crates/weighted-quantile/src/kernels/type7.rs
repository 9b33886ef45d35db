//! Hyndman-Fan Type 7 as a CDF on `[0, 1]`

use super::check_sample_size;
use crate::Result;

/// Piecewise-linear CDF reproducing Type 7 interpolation
///
/// With `h = p(n - 1) + 1` the CDF is `x·n - h + 1` restricted to
/// `[(h - 1)/n, h/n]`, so it rises from 0 to 1 across one `1/n` window.
/// On uniform weights this puts mass `h - ⌊h⌋` on order statistic `⌊h⌋ + 1`
/// and the rest on `⌊h⌋`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearCdf {
    n: f64,
    h: f64,
}

impl LinearCdf {
    /// Build the Type 7 CDF for effective sample size `n` at level `p`
    pub fn new(n: f64, p: f64) -> Result<Self> {
        check_sample_size(n)?;
        Ok(Self { n, h: p * (n - 1.0) + 1.0 })
    }

    #[inline]
    pub fn eval(&self, x: f64) -> f64 {
        let lower = (self.h - 1.0) / self.n;
        let upper = self.h / self.n;
        x.min(upper).max(lower) * self.n - self.h + 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_window() {
        // n = 5, p = 0.5: h = 3, window [0.4, 0.6]
        let cdf = LinearCdf::new(5.0, 0.5).unwrap();
        assert_relative_eq!(cdf.eval(0.0), 0.0);
        assert_relative_eq!(cdf.eval(0.4), 0.0, epsilon = 1e-12);
        assert_relative_eq!(cdf.eval(0.5), 0.5, epsilon = 1e-12);
        assert_relative_eq!(cdf.eval(0.6), 1.0, epsilon = 1e-12);
        assert_relative_eq!(cdf.eval(1.0), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_extreme_levels() {
        let low = LinearCdf::new(4.0, 0.0).unwrap();
        assert_relative_eq!(low.eval(0.0), 0.0);
        assert_relative_eq!(low.eval(0.25), 1.0);

        let high = LinearCdf::new(4.0, 1.0).unwrap();
        assert_relative_eq!(high.eval(0.75), 0.0);
        assert_relative_eq!(high.eval(1.0), 1.0);
    }

    #[test]
    fn test_monotone() {
        let cdf = LinearCdf::new(3.7, 0.3).unwrap();
        let mut prev = cdf.eval(0.0);
        for i in 1..=100 {
            let next = cdf.eval(i as f64 / 100.0);
            assert!(next >= prev);
            prev = next;
        }
    }
}
