//! Descriptive statistics for a single series of observations.
//!
//! All aggregates follow the usual missing-data convention: a NaN in the
//! input propagates into `mean`, `variance`, and friends, while the
//! `nan_`-prefixed variants and [`describe`] skip missing values and
//! report how many were skipped.

use serde::{Deserialize, Serialize};

use crate::error::StatsError;

/// Arithmetic mean of `data`.
///
/// NaN values propagate: if any observation is missing, the mean is NaN.
/// Use [`nan_mean`] to average over the present values instead.
///
/// # Errors
///
/// Returns [`StatsError::EmptyInput`] for an empty slice.
pub fn mean(data: &[f64]) -> Result<f64, StatsError> {
    if data.is_empty() {
        return Err(StatsError::EmptyInput);
    }
    Ok(data.iter().sum::<f64>() / data.len() as f64)
}

/// Average squared deviation from the mean with divisor `n - ddof`.
///
/// `ddof = 0` gives the population (biased) variance, `ddof = 1` the
/// sample (unbiased, Bessel-corrected) variance. Computed in two passes
/// over mean-centered values.
///
/// # Errors
///
/// Returns [`StatsError::TooFewSamples`] when `data.len() <= ddof`.
pub fn variance(data: &[f64], ddof: usize) -> Result<f64, StatsError> {
    let n = data.len();
    if n <= ddof {
        return Err(StatsError::TooFewSamples {
            needed: ddof + 1,
            got: n,
        });
    }
    let m = mean(data)?;
    let ss: f64 = data.iter().map(|&x| (x - m) * (x - m)).sum();
    Ok(ss / (n - ddof) as f64)
}

/// Standard deviation, `sqrt(variance(data, ddof))`.
pub fn std_dev(data: &[f64], ddof: usize) -> Result<f64, StatsError> {
    variance(data, ddof).map(f64::sqrt)
}

/// Standardized values `(x - mean) / std`.
///
/// A constant series yields [`StatsError::ZeroVariance`] rather than a
/// division by zero.
pub fn zscores(data: &[f64], ddof: usize) -> Result<Vec<f64>, StatsError> {
    let m = mean(data)?;
    let sd = std_dev(data, ddof)?;
    if sd == 0.0 {
        return Err(StatsError::ZeroVariance);
    }
    Ok(data.iter().map(|&x| (x - m) / sd).collect())
}

/// Mean over the non-NaN values, or `None` when every value is missing.
pub fn nan_mean(data: &[f64]) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0usize;
    for &x in data {
        if !x.is_nan() {
            sum += x;
            count += 1;
        }
    }
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

/// Number of missing (NaN) values in `data`.
pub fn nan_count(data: &[f64]) -> usize {
    data.iter().filter(|x| x.is_nan()).count()
}

/// Five-number-plus summary of a series, computed over present values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    /// Number of non-missing observations.
    pub count: usize,
    /// Number of missing (NaN) observations skipped.
    pub missing: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

/// Summarize `data` the way a dataframe `describe` would: count, mean,
/// standard deviation (divisor `n - ddof`), minimum, quartiles, maximum.
///
/// Missing values are skipped and reported in `missing`. Quartiles use
/// linear (R-7) interpolation on the sorted present values.
///
/// # Errors
///
/// * [`StatsError::EmptyInput`] when no value is present.
/// * [`StatsError::TooFewSamples`] when too few present values remain
///   for the requested `ddof`.
pub fn describe(data: &[f64], ddof: usize) -> Result<SummaryStats, StatsError> {
    let present: Vec<f64> = data.iter().copied().filter(|x| !x.is_nan()).collect();
    let missing = data.len() - present.len();
    if present.is_empty() {
        return Err(StatsError::EmptyInput);
    }

    let mut sorted = present.clone();
    sorted.sort_unstable_by(|a, b| a.partial_cmp(b).expect("NaN filtered above"));

    Ok(SummaryStats {
        count: present.len(),
        missing,
        mean: mean(&present)?,
        std: std_dev(&present, ddof)?,
        min: sorted[0],
        q25: quantile_sorted(&sorted, 0.25),
        median: quantile_sorted(&sorted, 0.5),
        q75: quantile_sorted(&sorted, 0.75),
        max: sorted[sorted.len() - 1],
    })
}

/// R-7 linear interpolation quantile on pre-sorted, NaN-free data.
/// Caller guarantees `sorted` is non-empty and `p` is in [0, 1].
fn quantile_sorted(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let h = (n - 1) as f64 * p;
    let j = h.floor() as usize;
    let g = h - h.floor();
    if j + 1 >= n {
        sorted[n - 1]
    } else {
        (1.0 - g) * sorted[j] + g * sorted[j + 1]
    }
}
