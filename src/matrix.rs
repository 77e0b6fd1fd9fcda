//! Column-wise statistics on a data matrix and its covariance structure.
//!
//! Throughout this module a data matrix has shape `(n_samples, n_variables)`:
//! rows are observations, columns are variables.

use ndarray::{Array1, Array2, Axis};

use crate::error::StatsError;

/// Per-column means of a data matrix.
///
/// # Errors
///
/// Returns [`StatsError::EmptyInput`] when the matrix has no rows.
pub fn column_means(x: &Array2<f64>) -> Result<Array1<f64>, StatsError> {
    x.mean_axis(Axis(0)).ok_or(StatsError::EmptyInput)
}

/// Subtract each column's mean, producing the centered matrix `A0`.
pub fn center_columns(x: &Array2<f64>) -> Result<Array2<f64>, StatsError> {
    let means = column_means(x)?;
    Ok(x - &means)
}

/// Covariance matrix of the columns, `A0ᵗ·A0 / (n - ddof)` where `A0` is
/// the column-centered data.
///
/// The result is square with one row/column per variable, symmetric, and
/// its diagonal holds the per-column variances (same `ddof`).
///
/// # Errors
///
/// Returns [`StatsError::TooFewSamples`] when `n_samples <= ddof`.
pub fn covariance_matrix(x: &Array2<f64>, ddof: usize) -> Result<Array2<f64>, StatsError> {
    let n = x.nrows();
    if n <= ddof {
        return Err(StatsError::TooFewSamples {
            needed: ddof + 1,
            got: n,
        });
    }
    let centered = center_columns(x)?;
    Ok(centered.t().dot(&centered) / (n - ddof) as f64)
}

/// Pearson correlation matrix of the columns.
///
/// The covariance matrix rescaled by the inverse standard deviations:
/// entries lie in `[-1, 1]` with a unit diagonal. A zero-variance column
/// has no defined correlation, so its row and column are filled with NaN
/// (the missing-data convention) and a warning is logged.
pub fn correlation_matrix(x: &Array2<f64>) -> Result<Array2<f64>, StatsError> {
    let cov = covariance_matrix(x, 1)?;
    let p = cov.nrows();
    let std: Vec<f64> = (0..p).map(|i| cov[(i, i)].sqrt()).collect();

    if std.iter().any(|&s| s == 0.0) {
        log::warn!("correlation matrix: zero-variance column, emitting NaN entries");
    }

    let mut corr = Array2::<f64>::zeros((p, p));
    for i in 0..p {
        for j in 0..p {
            if std[i] == 0.0 || std[j] == 0.0 {
                corr[(i, j)] = f64::NAN;
            } else if i == j {
                corr[(i, j)] = 1.0;
            } else {
                let r = cov[(i, j)] / (std[i] * std[j]);
                corr[(i, j)] = if r.is_finite() { r.clamp(-1.0, 1.0) } else { r };
            }
        }
    }
    Ok(corr)
}

/// Minimum stddev used in place of zero when standardizing, to avoid
/// division by zero on constant columns.
const MIN_STD: f64 = 1e-12;

/// Z-score each column: subtract its mean, divide by its (population)
/// standard deviation. Constant columns are centered only.
pub fn standardize_columns(x: &Array2<f64>) -> Result<Array2<f64>, StatsError> {
    let centered = center_columns(x)?;
    let std = centered.std_axis(Axis(0), 0.0);
    let std = std.mapv(|s| s.max(MIN_STD));
    Ok(&centered / &std)
}

/// Whether `a` is square and elementwise symmetric within `tol`.
pub fn is_symmetric(a: &Array2<f64>, tol: f64) -> bool {
    let (rows, cols) = a.dim();
    if rows != cols {
        return false;
    }
    for i in 0..rows {
        for j in (i + 1)..cols {
            if (a[(i, j)] - a[(j, i)]).abs() > tol {
                return false;
            }
        }
    }
    true
}
