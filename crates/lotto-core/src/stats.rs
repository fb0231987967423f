//! Chi-square goodness-of-fit against a uniform distribution over the drawable
//! numbers, plus population spread of the per-number counts.

use serde::Serialize;
use statrs::distribution::{ChiSquared, ContinuousCDF};
use tracing::debug;

use crate::error::{LottoError, LottoResult};
use crate::tally::{ObservedCounts, MAX_NUMBER};

/// Degrees of freedom of the uniformity test.
pub const DEGREES_OF_FREEDOM: usize = MAX_NUMBER - 1;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TestResult {
    pub expected_frequency: f64,
    pub chi_square_statistic: f64,
    pub p_value: f64,
    pub standard_deviation: f64,
    pub variance: f64,
}

/// Test `observed` against equal expected counts of `total / MAX_NUMBER`.
///
/// Fails with [`LottoError::InsufficientData`] when nothing was tallied, since
/// the expected frequency would be zero.
pub fn chi_square_uniform(observed: &ObservedCounts) -> LottoResult<TestResult> {
    let total = observed.total();
    if total == 0 {
        return Err(LottoError::InsufficientData);
    }

    let expected_frequency = total as f64 / MAX_NUMBER as f64;
    let chi_square_statistic = observed
        .as_slice()
        .iter()
        .map(|&o| {
            let d = o as f64 - expected_frequency;
            d * d / expected_frequency
        })
        .sum::<f64>();

    let dist = ChiSquared::new(DEGREES_OF_FREEDOM as f64)
        .map_err(|e| LottoError::Stats(e.to_string()))?;
    let p_value = dist.sf(chi_square_statistic);

    let variance = population_variance(observed.as_slice());
    let standard_deviation = variance.sqrt();

    debug!(
        "chi2={chi_square_statistic:.4} df={DEGREES_OF_FREEDOM} p={p_value:.6} total={total}"
    );

    Ok(TestResult {
        expected_frequency,
        chi_square_statistic,
        p_value,
        standard_deviation,
        variance,
    })
}

/// Variance dividing by `n`, not `n - 1`.
fn population_variance(counts: &[u64]) -> f64 {
    if counts.is_empty() {
        return 0.0;
    }
    let n = counts.len() as f64;
    let mean = counts.iter().map(|&c| c as f64).sum::<f64>() / n;
    counts
        .iter()
        .map(|&c| {
            let d = c as f64 - mean;
            d * d
        })
        .sum::<f64>()
        / n
}
