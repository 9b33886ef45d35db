//! Validated, index-aligned value/weight pairs
//!
//! A [`WeightedSample`] is the input of every estimator in this workspace.
//! Construction checks the invariants once so downstream code can assume
//! equal lengths, finite entries and non-negative weights.

use crate::utils::argsort;
use crate::{Error, Result};

/// Index-aligned values and their probability mass
///
/// `weights[i]` is the mass of `values[i]`. Pair order carries no meaning.
///
/// # Examples
///
/// ```
/// use weighted_core::WeightedSample;
///
/// let sample = WeightedSample::from_slices(&[3.0, 1.0], &[0.2, 0.3]).unwrap();
/// assert_eq!(sample.len(), 2);
/// assert!((sample.total_weight() - 0.5).abs() < 1e-12);
///
/// assert!(WeightedSample::from_slices(&[1.0], &[-0.1]).is_err());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WeightedSample {
    values: Vec<f64>,
    weights: Vec<f64>,
}

impl WeightedSample {
    /// Create a sample, taking ownership of the buffers
    pub fn new(values: Vec<f64>, weights: Vec<f64>) -> Result<Self> {
        validate(&values, &weights)?;
        Ok(Self { values, weights })
    }

    /// Create a sample by copying borrowed slices
    pub fn from_slices(values: &[f64], weights: &[f64]) -> Result<Self> {
        validate(values, weights)?;
        Ok(Self {
            values: values.to_vec(),
            weights: weights.to_vec(),
        })
    }

    /// Values, in their current order
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Weights, aligned with [`values`](Self::values)
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Number of pairs
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the sample holds no pairs
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Sum of all weights
    pub fn total_weight(&self) -> f64 {
        self.weights.iter().sum()
    }

    /// `Σ value·weight`
    pub fn weighted_sum(&self) -> f64 {
        self.pairs().map(|(v, w)| v * w).sum()
    }

    /// Kish's effective sample size of the current weights
    pub fn effective_sample_size(&self) -> f64 {
        effective_sample_size(&self.weights)
    }

    /// Largest weight, 0 for an empty sample
    pub fn max_weight(&self) -> f64 {
        self.weights.iter().copied().fold(0.0, f64::max)
    }

    /// Divide every weight by the largest one
    ///
    /// Leaves relative weights unchanged, so scale-invariant statistics are
    /// unaffected, while bringing a sum that overflows back into range.
    pub fn rescale_by_max_weight(&mut self) {
        let max = self.max_weight();
        if max > 0.0 {
            self.divide_weights(max);
        }
    }

    /// Iterate over `(value, weight)` pairs
    pub fn pairs(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.values.iter().copied().zip(self.weights.iter().copied())
    }

    /// Reorder pairs by ascending value; each weight follows its value
    pub fn sort_by_value(&mut self) {
        if self.values.windows(2).all(|w| w[0] <= w[1]) {
            return;
        }
        let order = argsort(&self.values);
        self.values = order.iter().map(|&i| self.values[i]).collect();
        self.weights = order.iter().map(|&i| self.weights[i]).collect();
    }

    /// Consume the sample, returning `(values, weights)`
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.values, self.weights)
    }

    /// Append a pair that is known to be valid
    pub(crate) fn push_unchecked(&mut self, value: f64, weight: f64) {
        self.values.push(value);
        self.weights.push(weight);
    }

    /// Divide every weight by `divisor`; `1/divisor` is subnormal above ~4.5e307
    pub(crate) fn divide_weights(&mut self, divisor: f64) {
        for w in &mut self.weights {
            *w /= divisor;
        }
    }
}

/// Check the sample invariants without copying
///
/// Length is checked first, then each index in order: a non-finite value,
/// a non-finite weight, or a negative weight is reported at the first
/// offending position.
pub fn validate(values: &[f64], weights: &[f64]) -> Result<()> {
    if values.len() != weights.len() {
        return Err(Error::size_mismatch(values.len(), weights.len()));
    }

    for (index, (&value, &weight)) in values.iter().zip(weights).enumerate() {
        if !value.is_finite() {
            return Err(Error::NonFinite { what: "value", index });
        }
        if !weight.is_finite() {
            return Err(Error::NonFinite { what: "weight", index });
        }
        if weight < 0.0 {
            return Err(Error::NegativeWeight { index, weight });
        }
    }
    Ok(())
}

/// Kish's effective sample size, `(Σw)² / Σw²`
///
/// Returns 0.0 when every weight is zero (or the slice is empty).
///
/// # Examples
///
/// ```
/// use weighted_core::effective_sample_size;
///
/// // Uniform weights: n_eff equals n
/// assert!((effective_sample_size(&[0.25; 4]) - 4.0).abs() < 1e-12);
/// // All mass on one point: n_eff is 1
/// assert_eq!(effective_sample_size(&[0.0, 0.7, 0.0]), 1.0);
/// ```
pub fn effective_sample_size(weights: &[f64]) -> f64 {
    // n_eff is scale invariant; relative weights keep Σw² finite
    let max = weights.iter().copied().fold(0.0, f64::max);
    if max == 0.0 {
        return 0.0;
    }
    let (sum, sum_sq) = weights.iter().fold((0.0, 0.0), |(s, sq), &w| {
        let r = w / max;
        (s + r, sq + r * r)
    });
    sum * sum / sum_sq
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_validate_accepts_valid_input() {
        assert!(validate(&[], &[]).is_ok());
        assert!(validate(&[1.0, -2.0], &[0.0, 0.5]).is_ok());
    }

    #[test]
    fn test_validate_length_mismatch() {
        assert_eq!(
            validate(&[1.0, 2.0], &[0.5]),
            Err(Error::LengthMismatch { values: 2, weights: 1 })
        );
    }

    #[test]
    fn test_validate_negative_weight() {
        assert_eq!(
            validate(&[1.0, 2.0, 3.0], &[0.1, -0.2, 0.3]),
            Err(Error::NegativeWeight { index: 1, weight: -0.2 })
        );
    }

    #[test]
    fn test_validate_non_finite() {
        assert_eq!(
            validate(&[1.0, f64::NAN], &[0.1, 0.2]),
            Err(Error::NonFinite { what: "value", index: 1 })
        );
        assert_eq!(
            validate(&[1.0, 2.0], &[f64::INFINITY, 0.2]),
            Err(Error::NonFinite { what: "weight", index: 0 })
        );
    }

    #[test]
    fn test_sort_by_value_keeps_pairs() {
        let mut sample =
            WeightedSample::from_slices(&[5.0, 1.0, 3.0, 2.0], &[0.1, 0.2, 0.3, 0.4]).unwrap();
        sample.sort_by_value();
        assert_eq!(sample.values(), &[1.0, 2.0, 3.0, 5.0]);
        assert_eq!(sample.weights(), &[0.2, 0.4, 0.3, 0.1]);
    }

    #[test]
    fn test_sort_by_value_negative_and_duplicates() {
        let mut sample =
            WeightedSample::from_slices(&[0.0, -10.0, 0.0, 5.0], &[0.5, 0.1, 0.2, 0.2]).unwrap();
        sample.sort_by_value();
        assert_eq!(sample.values(), &[-10.0, 0.0, 0.0, 5.0]);
        assert_relative_eq!(sample.total_weight(), 1.0, epsilon = 1e-12);
        assert_eq!(sample.weights()[0], 0.1);
        assert_eq!(sample.weights()[3], 0.2);
    }

    #[test]
    fn test_effective_sample_size() {
        assert_eq!(effective_sample_size(&[]), 0.0);
        assert_eq!(effective_sample_size(&[0.0, 0.0]), 0.0);
        assert_relative_eq!(effective_sample_size(&[0.5, 0.5]), 2.0);
        // (0.1+0.2+0.3+0.4)^2 / (0.01+0.04+0.09+0.16)
        assert_relative_eq!(
            effective_sample_size(&[0.1, 0.2, 0.3, 0.4]),
            1.0 / 0.3,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_effective_sample_size_scale_invariant() {
        let w = [0.3, 0.1, 0.05, 0.4];
        let scaled: Vec<f64> = w.iter().map(|x| x * 7.5).collect();
        assert_relative_eq!(
            effective_sample_size(&w),
            effective_sample_size(&scaled),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_weighted_sum_and_total() {
        let sample = WeightedSample::from_slices(&[1.0, 2.0, 3.0], &[0.1, 0.2, 0.3]).unwrap();
        assert_relative_eq!(sample.weighted_sum(), 1.4, epsilon = 1e-12);
        assert_relative_eq!(sample.total_weight(), 0.6, epsilon = 1e-12);
    }

    #[test]
    fn test_effective_sample_size_large_weights() {
        assert_relative_eq!(effective_sample_size(&[1e200; 3]), 3.0, epsilon = 1e-12);
        assert_relative_eq!(effective_sample_size(&[1e308, 1e308]), 2.0, epsilon = 1e-12);
        assert_relative_eq!(
            effective_sample_size(&[1e300, 3e300]),
            effective_sample_size(&[0.25, 0.75]),
            epsilon = 1e-12
        );
        assert_eq!(effective_sample_size(&[0.0, 0.0]), 0.0);
    }

    #[test]
    fn test_rescale_by_max_weight() {
        let mut sample = WeightedSample::from_slices(&[1.0, 2.0], &[1e308, 5e307]).unwrap();
        assert!(sample.total_weight().is_infinite());
        sample.rescale_by_max_weight();
        assert_eq!(sample.weights()[0], 1.0);
        assert_relative_eq!(sample.weights()[1], 0.5, epsilon = 1e-12);
        assert_eq!(sample.max_weight(), 1.0);
    }
}

