//! Paired-series statistics: covariance, Pearson's r, and its
//! significance test.

use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::descriptive::mean;
use crate::error::StatsError;

/// Sample covariance of two paired series with divisor `n - ddof`.
///
/// # Arguments
///
/// * `x`, `y` - Paired observations of equal length.
/// * `ddof` - Divisor correction: 0 for the biased estimator, 1 for the
///   unbiased (Bessel-corrected) one.
///
/// # Errors
///
/// * [`StatsError::LengthMismatch`] when the series differ in length.
/// * [`StatsError::TooFewSamples`] when `n <= ddof`.
pub fn covariance(x: &[f64], y: &[f64], ddof: usize) -> Result<f64, StatsError> {
    if x.len() != y.len() {
        return Err(StatsError::LengthMismatch {
            left: x.len(),
            right: y.len(),
        });
    }
    let n = x.len();
    if n <= ddof {
        return Err(StatsError::TooFewSamples {
            needed: ddof + 1,
            got: n,
        });
    }
    let mx = mean(x)?;
    let my = mean(y)?;
    let sum: f64 = x
        .iter()
        .zip(y.iter())
        .map(|(&a, &b)| (a - mx) * (b - my))
        .sum();
    Ok(sum / (n - ddof) as f64)
}

/// Pearson correlation coefficient of two paired series.
///
/// The covariance normalized by the product of the standard deviations;
/// the divisor correction cancels, so the result is the same for either
/// ddof. Finite results are clamped to `[-1, 1]` to absorb rounding.
///
/// # Errors
///
/// * [`StatsError::LengthMismatch`] / [`StatsError::TooFewSamples`] as
///   for [`covariance`].
/// * [`StatsError::ZeroVariance`] when either series is constant.
pub fn pearson_r(x: &[f64], y: &[f64]) -> Result<f64, StatsError> {
    if x.len() != y.len() {
        return Err(StatsError::LengthMismatch {
            left: x.len(),
            right: y.len(),
        });
    }
    let n = x.len();
    if n < 2 {
        return Err(StatsError::TooFewSamples { needed: 2, got: n });
    }
    let mx = mean(x)?;
    let my = mean(y)?;
    let mut sxy = 0.0;
    let mut sxx = 0.0;
    let mut syy = 0.0;
    for (&a, &b) in x.iter().zip(y.iter()) {
        let dx = a - mx;
        let dy = b - my;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }
    if sxx == 0.0 || syy == 0.0 {
        return Err(StatsError::ZeroVariance);
    }
    let r = sxy / (sxx.sqrt() * syy.sqrt());
    if r.is_finite() {
        Ok(r.clamp(-1.0, 1.0))
    } else {
        Ok(r)
    }
}

/// Result of a two-sided Pearson correlation significance test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationTest {
    /// Pearson correlation coefficient.
    pub r: f64,
    /// Student-t transform of `r`.
    pub t_statistic: f64,
    /// Two-sided p-value under the null hypothesis of no correlation.
    pub p_value: f64,
    /// Degrees of freedom, `n - 2`.
    pub df: usize,
}

/// Test the null hypothesis that two series are uncorrelated.
///
/// Computes Pearson's r and the statistic `t = r * sqrt(df / (1 - r^2))`
/// with `df = n - 2`, then a two-sided p-value from the Student-t
/// distribution. A perfect correlation (`|r| = 1`) yields `p = 0`.
///
/// # Errors
///
/// As for [`pearson_r`], except at least 3 samples are required so that
/// `df >= 1`.
pub fn pearson_test(x: &[f64], y: &[f64]) -> Result<CorrelationTest, StatsError> {
    if x.len() != y.len() {
        return Err(StatsError::LengthMismatch {
            left: x.len(),
            right: y.len(),
        });
    }
    if x.len() < 3 {
        return Err(StatsError::TooFewSamples {
            needed: 3,
            got: x.len(),
        });
    }
    let r = pearson_r(x, y)?;
    let df = x.len() - 2;
    let denom = 1.0 - r * r;
    let (t_statistic, p_value) = if denom <= 0.0 {
        (f64::INFINITY * r.signum(), 0.0)
    } else {
        let t = r * (df as f64 / denom).sqrt();
        let dist = StudentsT::new(0.0, 1.0, df as f64).unwrap();
        (t, 2.0 * (1.0 - dist.cdf(t.abs())))
    };
    Ok(CorrelationTest {
        r,
        t_statistic,
        p_value,
        df,
    })
}
