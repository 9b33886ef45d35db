//! Weighted mean, variance and standard deviation
//!
//! Every estimator validates its input, applies the sparse-weight convention
//! once, and then works on the padded sample. Empty input is not an error:
//! it yields `0.0`.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use weighted_core::{
    NormalizationMode, NormalizerConfig, Result, SparseNormalizer, WeightedSample,
};

/// Weighted moment estimator
///
/// Carries the delta degrees of freedom used by [`variance`](Self::variance)
/// and [`std`](Self::std), and the normalizer configuration.
///
/// # Examples
///
/// ```
/// use weighted_moments::WeightedMoments;
///
/// let sample_var = WeightedMoments::new().with_ddof(1);
/// let v = sample_var.variance(&[1.0, 2.0, 3.0], &[0.1, 0.2, 0.3]).unwrap();
/// assert!((v - 1.64 * 10.0 / 7.0).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightedMoments {
    /// Delta degrees of freedom; 0 gives the population variance
    pub ddof: u32,
    pub normalizer: NormalizerConfig,
}

/// All moments of one sample, computed from a single normalization
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MomentSummary {
    pub mean: f64,
    pub variance: f64,
    pub std: f64,
    /// Kish's effective sample size of the padded weights
    pub effective_sample_size: f64,
    /// Total weight after padding, relative to the largest weight if the
    /// raw total overflows
    pub total_weight: f64,
}

impl WeightedMoments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ddof(mut self, ddof: u32) -> Self {
        self.ddof = ddof;
        self
    }

    pub fn with_normalizer(mut self, normalizer: NormalizerConfig) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// Weighted mean, `Σ(v·w) / Σw` over the padded sample
    pub fn mean(&self, values: &[f64], weights: &[f64]) -> Result<f64> {
        Ok(self.prepare(values, weights)?.as_ref().map_or(0.0, mean_of))
    }

    /// Weighted variance with this estimator's `ddof`
    ///
    /// Returns NaN when the effective sample size does not exceed `ddof`.
    pub fn variance(&self, values: &[f64], weights: &[f64]) -> Result<f64> {
        Ok(self
            .prepare(values, weights)?
            .as_ref()
            .map_or(0.0, |sample| variance_of(sample, self.ddof)))
    }

    /// Square root of [`variance`](Self::variance); NaN stays NaN
    pub fn std(&self, values: &[f64], weights: &[f64]) -> Result<f64> {
        Ok(self.variance(values, weights)?.sqrt())
    }

    /// Mean, variance, std and effective sample size in one pass
    pub fn summary(&self, values: &[f64], weights: &[f64]) -> Result<MomentSummary> {
        let Some(sample) = self.prepare(values, weights)? else {
            return Ok(MomentSummary {
                mean: 0.0,
                variance: 0.0,
                std: 0.0,
                effective_sample_size: 0.0,
                total_weight: 0.0,
            });
        };

        let variance = variance_of(&sample, self.ddof);
        Ok(MomentSummary {
            mean: mean_of(&sample),
            variance,
            std: variance.sqrt(),
            effective_sample_size: sample.effective_sample_size(),
            total_weight: sample.total_weight(),
        })
    }

    /// Validate and pad; `None` for empty input
    fn prepare(&self, values: &[f64], weights: &[f64]) -> Result<Option<WeightedSample>> {
        if values.is_empty() || weights.is_empty() {
            return Ok(None);
        }
        let normalizer = SparseNormalizer::new(self.normalizer)?;
        let sample = WeightedSample::from_slices(values, weights)?;
        let mut sample = normalizer.normalize(sample, NormalizationMode::Conditional);
        // finite weights whose sum overflows; the moments only see relative weights
        if sample.total_weight().is_infinite() {
            sample.rescale_by_max_weight();
        }
        Ok(Some(sample))
    }
}

fn mean_of(sample: &WeightedSample) -> f64 {
    let total = sample.total_weight();
    if total == 0.0 {
        return 0.0;
    }
    sample.weighted_sum() / total
}

fn variance_of(sample: &WeightedSample, ddof: u32) -> f64 {
    let total = sample.total_weight();
    if total == 0.0 {
        return 0.0;
    }

    let mean = sample.weighted_sum() / total;
    let sum_sq_dev: f64 = sample
        .pairs()
        .map(|(v, w)| {
            let dev = v - mean;
            w * dev * dev
        })
        .sum();
    let population = sum_sq_dev / total;

    if ddof == 0 {
        return population;
    }

    // Bessel-style correction on the effective, not the raw, sample size
    let n_eff = sample.effective_sample_size();
    let ddof = f64::from(ddof);
    if n_eff <= ddof {
        debug!(n_eff, ddof, "undersampled: effective sample size does not exceed ddof");
        return f64::NAN;
    }
    population * n_eff / (n_eff - ddof)
}

/// Weighted mean under the sparse-weight convention
///
/// Empty input yields `0.0`. Mismatched lengths, negative weights and
/// non-finite entries are errors.
#[instrument(skip(values, weights), fields(n = values.len()))]
pub fn weighted_mean(values: &[f64], weights: &[f64]) -> Result<f64> {
    WeightedMoments::new().mean(values, weights)
}

/// Weighted variance; `ddof = 0` is the population variance
///
/// Returns NaN when Kish's effective sample size is at most `ddof`.
#[instrument(skip(values, weights), fields(n = values.len()))]
pub fn weighted_variance(values: &[f64], weights: &[f64], ddof: u32) -> Result<f64> {
    WeightedMoments::new().with_ddof(ddof).variance(values, weights)
}

/// Weighted standard deviation, the square root of [`weighted_variance`]
#[instrument(skip(values, weights), fields(n = values.len()))]
pub fn weighted_std(values: &[f64], weights: &[f64], ddof: u32) -> Result<f64> {
    WeightedMoments::new().with_ddof(ddof).std(values, weights)
}
