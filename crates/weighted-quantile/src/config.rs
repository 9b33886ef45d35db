//! Method selection for weighted quantiles

use crate::estimators::{EmpiricalCdfQuantile, GenericWeightedQuantile};
use crate::kernels::CdfKernel;
use crate::{QuantileEstimator, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::instrument;
use weighted_core::NormalizerConfig;

/// Quantile estimation method
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuantileMethod {
    /// Interpolated empirical CDF (Type 4)
    #[default]
    EmpiricalCdf,
    /// Linear interpolation between order statistics (Type 7)
    Type7,
    /// Beta-weighted order statistics
    HarrellDavis,
}

impl QuantileMethod {
    /// CDF kernel used by the generic framework, if any
    pub fn kernel(self) -> Option<CdfKernel> {
        match self {
            QuantileMethod::EmpiricalCdf => None,
            QuantileMethod::Type7 => Some(CdfKernel::Type7),
            QuantileMethod::HarrellDavis => Some(CdfKernel::HarrellDavis),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            QuantileMethod::EmpiricalCdf => "empirical_cdf",
            QuantileMethod::Type7 => "type7",
            QuantileMethod::HarrellDavis => "harrell_davis",
        }
    }
}

impl fmt::Display for QuantileMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for QuantileMethod {
    type Err = weighted_core::Error;

    /// Accepts the method names and the names of the matching functions
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "empirical_cdf" | "type4" | "weighted_quantile" => Ok(QuantileMethod::EmpiricalCdf),
            "type7" | "wquantile" => Ok(QuantileMethod::Type7),
            "harrell_davis" | "hd" | "whdquantile" => Ok(QuantileMethod::HarrellDavis),
            other => Err(weighted_core::Error::InvalidParameter(format!(
                "unknown quantile method '{other}'"
            ))),
        }
    }
}

/// Configured weighted quantile estimator
///
/// ```rust
/// use weighted_quantile::{QuantileEstimator, QuantileMethod, WeightedQuantile};
///
/// let est = WeightedQuantile::new(QuantileMethod::Type7);
/// let q = est.quantiles(&[1.0, 2.0, 3.0, 4.0, 5.0], &[0.5], &[0.2; 5]).unwrap();
/// assert!((q[0] - 3.0).abs() < 1e-9);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightedQuantile {
    pub method: QuantileMethod,
    pub normalizer: NormalizerConfig,
}

impl WeightedQuantile {
    pub fn new(method: QuantileMethod) -> Self {
        Self { method, normalizer: NormalizerConfig::default() }
    }

    pub fn with_normalizer(mut self, normalizer: NormalizerConfig) -> Self {
        self.normalizer = normalizer;
        self
    }
}

impl QuantileEstimator for WeightedQuantile {
    fn quantiles(&self, values: &[f64], levels: &[f64], weights: &[f64]) -> Result<Vec<f64>> {
        match self.method.kernel() {
            None => EmpiricalCdfQuantile::with_normalizer(self.normalizer)
                .quantiles(values, levels, weights),
            Some(kernel) => GenericWeightedQuantile::new(kernel)
                .with_normalizer(self.normalizer)
                .quantiles(values, levels, weights),
        }
    }

    fn name(&self) -> &'static str {
        self.method.name()
    }
}

/// Weighted quantiles by the chosen method with default normalization
#[instrument(skip(values, levels, weights), fields(n = values.len(), levels = levels.len()))]
pub fn quantiles_with(
    method: QuantileMethod,
    values: &[f64],
    levels: &[f64],
    weights: &[f64],
) -> Result<Vec<f64>> {
    WeightedQuantile::new(method).quantiles(values, levels, weights)
}
