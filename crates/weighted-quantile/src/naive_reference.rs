//! Naive reference implementations of the weighted quantile estimators
//!
//! These implementations are intentionally simple and unoptimized.
//! They serve as a reference for verifying the optimized estimators.
//!
//! DO NOT USE IN PRODUCTION - these are for testing and debugging only!

use statrs::distribution::{Beta, ContinuousCDF};

/// Below this many units of missing mass a sample counts as complete
const UNIT_TOLERANCE: f64 = 1e-10;

/// Sort pairs by value after appending the implicit zero when mass is missing
fn padded_pairs(values: &[f64], weights: &[f64]) -> Vec<(f64, f64)> {
    assert_eq!(values.len(), weights.len(), "values and weights must align");

    let mut pairs: Vec<(f64, f64)> = values.iter().copied().zip(weights.iter().copied()).collect();
    let total: f64 = weights.iter().sum();
    if total < 1.0 - UNIT_TOLERANCE {
        pairs.push((0.0, 1.0 - total));
    }
    pairs.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap());
    pairs
}

/// Naive unweighted Harrell-Davis quantile estimator
///
/// Computes all weights from scratch every time, each element contributing
/// `1/n` to the cumulative probability.
pub struct NaiveHarrellDavis;

impl NaiveHarrellDavis {
    pub fn quantile(data: &[f64], p: f64) -> f64 {
        assert!(!data.is_empty(), "Cannot compute quantile of empty data");
        assert!((0.0..=1.0).contains(&p), "Probability must be in [0, 1]");

        let mut sorted = data.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());

        let n = sorted.len();
        if n == 1 || p == 0.0 {
            return sorted[0];
        }
        if p == 1.0 {
            return sorted[n - 1];
        }

        let n_f = n as f64;
        let beta_dist = Beta::new((n_f + 1.0) * p, (n_f + 1.0) * (1.0 - p)).unwrap();

        let mut c1 = 0.0;
        let mut beta_cdf_right = 0.0;
        for (j, x) in sorted.iter().enumerate() {
            let beta_cdf_left = beta_cdf_right;
            beta_cdf_right = beta_dist.cdf((j + 1) as f64 / n_f);
            c1 += (beta_cdf_right - beta_cdf_left) * x;
        }
        c1
    }
}

/// Naive unweighted Type 7: `x[⌊h⌋] + (h - ⌊h⌋)(x[⌊h⌋ + 1] - x[⌊h⌋])`
pub struct NaiveType7;

impl NaiveType7 {
    pub fn quantile(data: &[f64], p: f64) -> f64 {
        assert!(!data.is_empty(), "Cannot compute quantile of empty data");

        let mut sorted = data.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());

        let n = sorted.len();
        let h = p * (n - 1) as f64;
        let lo = h.floor() as usize;
        let hi = (lo + 1).min(n - 1);
        sorted[lo] + (h - lo as f64) * (sorted[hi] - sorted[lo])
    }
}

/// Naive weighted empirical-CDF quantile by linear scan over the knots
pub struct NaiveWeightedEcdf;

impl NaiveWeightedEcdf {
    pub fn quantile(values: &[f64], weights: &[f64], q: f64) -> f64 {
        let pairs = padded_pairs(values, weights);

        let mut cumulative = Vec::with_capacity(pairs.len());
        let mut running = 0.0;
        for &(_, w) in &pairs {
            running += w;
            cumulative.push(running);
        }

        let n = pairs.len();
        if q < cumulative[0] {
            return pairs[0].0;
        }
        for i in 0..n - 1 {
            if cumulative[i] <= q && q < cumulative[i + 1] {
                let t = (q - cumulative[i]) / (cumulative[i + 1] - cumulative[i]);
                return pairs[i].0 + t * (pairs[i + 1].0 - pairs[i].0);
            }
        }
        pairs[n - 1].0
    }
}

/// Naive weighted Harrell-Davis quantile, rebuilt from scratch per level
pub struct NaiveWeightedHarrellDavis;

impl NaiveWeightedHarrellDavis {
    pub fn quantile(values: &[f64], weights: &[f64], p: f64) -> f64 {
        let pairs = padded_pairs(values, weights);
        let total: f64 = pairs.iter().map(|&(_, w)| w).sum();
        let unit: Vec<(f64, f64)> = pairs.iter().map(|&(v, w)| (v, w / total)).collect();

        let positive = unit.iter().filter(|&&(_, w)| w > 0.0).map(|&(v, _)| v);
        if p == 0.0 {
            return positive.fold(f64::INFINITY, f64::min);
        }
        if p == 1.0 {
            return positive.fold(f64::NEG_INFINITY, f64::max);
        }

        let sum_sq: f64 = unit.iter().map(|&(_, w)| w * w).sum();
        let n_eff = 1.0 / sum_sq;
        let beta_dist = Beta::new((n_eff + 1.0) * p, (n_eff + 1.0) * (1.0 - p)).unwrap();

        // past the last positive weight the cumulative mass is exactly 1
        let last_positive = unit.iter().rposition(|&(_, w)| w > 0.0).unwrap();

        let mut result = 0.0;
        let mut left = 0.0;
        for (i, &(v, w)) in unit.iter().enumerate() {
            let right = if i >= last_positive { 1.0 } else { left + w };
            result += (beta_dist.cdf(right) - beta_dist.cdf(left)) * v;
            left = right;
        }
        result
    }
}
