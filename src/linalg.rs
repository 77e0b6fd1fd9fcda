//! Linear-algebra probes for a data matrix: row reduction, rank,
//! eigenvalues of symmetric matrices, singular values, and conditioning.
//!
//! Rank uses Gauss-Jordan elimination with partial pivoting and a
//! scale-aware tolerance; singular values come from the eigenvalues of
//! the smaller Gram matrix, computed with the cyclic Jacobi rotation
//! method. That is accurate enough to expose rank deficiency and
//! ill-conditioning, which is what these routines exist to diagnose.

use ndarray::{Array1, Array2};
use ndarray_stats::QuantileExt;

use crate::error::StatsError;
use crate::matrix::is_symmetric;

/// Result of reducing a matrix to reduced row-echelon form.
#[derive(Debug, Clone)]
pub struct RowEchelon {
    /// The reduced matrix: unit pivots, zeros above and below each pivot.
    pub matrix: Array2<f64>,
    /// Columns containing a pivot, in ascending order.
    pub pivot_columns: Vec<usize>,
}

impl RowEchelon {
    /// Number of pivots, i.e. the numerical rank.
    pub fn rank(&self) -> usize {
        self.pivot_columns.len()
    }
}

/// Scale-aware zero threshold for elimination pivots,
/// `max(m, n) * eps * max|a_ij|` (the matrix_rank convention).
fn zero_tolerance(a: &Array2<f64>) -> f64 {
    let (rows, cols) = a.dim();
    let max_abs = a.iter().fold(0.0f64, |acc, &v| acc.max(v.abs()));
    rows.max(cols) as f64 * f64::EPSILON * max_abs
}

/// Reduce `a` to reduced row-echelon form by Gauss-Jordan elimination
/// with partial pivoting.
///
/// Pivot candidates smaller in magnitude than the scale-aware tolerance
/// are treated as zero, so linearly dependent columns produce no pivot.
pub fn rref(a: &Array2<f64>) -> RowEchelon {
    let mut m = a.clone();
    let (rows, cols) = m.dim();
    let tol = zero_tolerance(a);

    let mut pivot_columns = Vec::new();
    let mut r = 0usize;
    for c in 0..cols {
        if r >= rows {
            break;
        }
        // Partial pivoting: take the largest remaining entry in column c.
        let mut best = r;
        for i in (r + 1)..rows {
            if m[(i, c)].abs() > m[(best, c)].abs() {
                best = i;
            }
        }
        if m[(best, c)].abs() <= tol {
            // Column is (numerically) dependent on earlier pivots.
            for i in r..rows {
                m[(i, c)] = 0.0;
            }
            continue;
        }
        if best != r {
            for j in 0..cols {
                m.swap((r, j), (best, j));
            }
        }
        let pivot = m[(r, c)];
        for j in c..cols {
            m[(r, j)] /= pivot;
        }
        m[(r, c)] = 1.0;
        for i in 0..rows {
            if i == r {
                continue;
            }
            let factor = m[(i, c)];
            if factor != 0.0 {
                for j in c..cols {
                    m[(i, j)] -= factor * m[(r, j)];
                }
                m[(i, c)] = 0.0;
            }
        }
        pivot_columns.push(c);
        r += 1;
    }

    RowEchelon {
        matrix: m,
        pivot_columns,
    }
}

/// Numerical rank of `a`: the number of pivot columns in its RREF.
///
/// A matrix whose columns are linearly dependent (e.g. a duplicated
/// column) has rank strictly less than its column count.
pub fn rank(a: &Array2<f64>) -> usize {
    rref(a).rank()
}

/// Eigenvalues of a symmetric matrix, sorted in descending order.
///
/// Uses the cyclic Jacobi rotation method; symmetry is verified up to a
/// tolerance proportional to the matrix scale. Missing (NaN) entries
/// propagate: the result is all NaN rather than an error.
///
/// # Errors
///
/// * [`StatsError::NotSquare`] for rectangular input.
/// * [`StatsError::NotSymmetric`] when `a` differs from its transpose
///   beyond the tolerance.
pub fn symmetric_eigenvalues(a: &Array2<f64>) -> Result<Array1<f64>, StatsError> {
    let (rows, cols) = a.dim();
    if rows != cols {
        return Err(StatsError::NotSquare { rows, cols });
    }
    let scale = a.iter().fold(0.0f64, |acc, &v| acc.max(v.abs()));
    if !is_symmetric(a, 1e-8 * scale.max(1.0)) {
        return Err(StatsError::NotSymmetric);
    }
    Ok(jacobi_eigenvalues(a.clone()))
}

/// Cyclic Jacobi sweeps on a symmetric matrix. Consumes a working copy;
/// returns the eigenvalues sorted in descending order.
fn jacobi_eigenvalues(mut a: Array2<f64>) -> Array1<f64> {
    let n = a.nrows();
    if n == 0 {
        return Array1::zeros(0);
    }
    if a.iter().any(|v| v.is_nan()) {
        // Missing data propagates, as everywhere else in the crate.
        return Array1::from_elem(n, f64::NAN);
    }
    let frobenius: f64 = a.iter().map(|v| v * v).sum::<f64>().sqrt();
    let target = f64::EPSILON * frobenius.max(f64::MIN_POSITIVE);

    const MAX_SWEEPS: usize = 50;
    for _ in 0..MAX_SWEEPS {
        let mut off = 0.0;
        for p in 0..n {
            for q in (p + 1)..n {
                off += a[(p, q)] * a[(p, q)];
            }
        }
        if off.sqrt() <= target {
            break;
        }
        for p in 0..n.saturating_sub(1) {
            for q in (p + 1)..n {
                let apq = a[(p, q)];
                if apq.abs() <= target / n as f64 {
                    continue;
                }
                let theta = (a[(q, q)] - a[(p, p)]) / (2.0 * apq);
                // tan of the rotation angle; the smaller root for stability.
                let t = if theta >= 0.0 {
                    1.0 / (theta + (theta * theta + 1.0).sqrt())
                } else {
                    -1.0 / (-theta + (theta * theta + 1.0).sqrt())
                };
                let c = 1.0 / (t * t + 1.0).sqrt();
                let s = t * c;
                // Apply the rotation to columns p and q, then rows p and q.
                for k in 0..n {
                    let akp = a[(k, p)];
                    let akq = a[(k, q)];
                    a[(k, p)] = c * akp - s * akq;
                    a[(k, q)] = s * akp + c * akq;
                }
                for k in 0..n {
                    let apk = a[(p, k)];
                    let aqk = a[(q, k)];
                    a[(p, k)] = c * apk - s * aqk;
                    a[(q, k)] = s * apk + c * aqk;
                }
            }
        }
    }

    let mut eigenvalues: Vec<f64> = (0..n).map(|i| a[(i, i)]).collect();
    // total_cmp keeps the sort panic-free even if non-finite input
    // pushed NaN onto the diagonal.
    eigenvalues.sort_unstable_by(|x, y| y.total_cmp(x));
    Array1::from_vec(eigenvalues)
}

/// Singular values of `a`, sorted in descending order.
///
/// Computed as the square roots of the eigenvalues of the smaller Gram
/// matrix (`AᵗA` when `a` is tall, `AAᵗ` when it is wide); negative
/// rounding artifacts are clamped to zero.
pub fn singular_values(a: &Array2<f64>) -> Array1<f64> {
    let (rows, cols) = a.dim();
    if rows == 0 || cols == 0 {
        return Array1::zeros(0);
    }
    let gram = if rows >= cols {
        a.t().dot(a)
    } else {
        a.dot(&a.t())
    };
    // f64::max would swallow NaN; keep it so missing data propagates.
    jacobi_eigenvalues(gram).mapv(|lambda| {
        if lambda.is_nan() {
            f64::NAN
        } else {
            lambda.max(0.0).sqrt()
        }
    })
}

/// 2-norm condition number of `a`, `sigma_max / sigma_min`.
///
/// Large values mean the matrix is close to singular and small input
/// perturbations produce large output changes. A numerically singular
/// matrix (smallest singular value below the rank tolerance) yields
/// `f64::INFINITY` and logs a warning.
///
/// # Errors
///
/// Returns [`StatsError::EmptyInput`] when `a` has no elements.
pub fn condition_number(a: &Array2<f64>) -> Result<f64, StatsError> {
    let sigma = singular_values(a);
    if sigma.is_empty() {
        return Err(StatsError::EmptyInput);
    }
    if sigma.iter().any(|v| v.is_nan()) {
        // Missing data propagates, as everywhere else in the crate.
        return Ok(f64::NAN);
    }
    let sigma_max = *sigma.max().expect("nonempty and finite");
    let sigma_min = *sigma.min().expect("nonempty and finite");
    // Cutoff relative to sigma_max, scaled by the larger dimension.
    // sqrt(eps) rather than eps: the singular values come from Gram
    // eigenvalues, which carry an eps * lambda_max error floor.
    let (rows, cols) = a.dim();
    if sigma_min <= rows.max(cols) as f64 * f64::EPSILON.sqrt() * sigma_max {
        log::warn!(
            "condition number: matrix is numerically singular (sigma_min = {:.3e})",
            sigma_min
        );
        return Ok(f64::INFINITY);
    }
    Ok(sigma_max / sigma_min)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn rref_of_identity_is_identity() {
        let eye = Array2::<f64>::eye(3);
        let reduced = rref(&eye);
        assert_eq!(reduced.matrix, eye);
        assert_eq!(reduced.pivot_columns, vec![0, 1, 2]);
    }

    #[test]
    fn rref_known_reduction() {
        // [[1, 2, 3], [2, 4, 6], [1, 0, 1]] has rank 2; column 1 depends
        // on columns 0 and 2 after reduction.
        let a = array![[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [1.0, 0.0, 1.0]];
        let reduced = rref(&a);
        assert_eq!(reduced.pivot_columns, vec![0, 1]);
        assert_eq!(reduced.rank(), 2);
        // Last row eliminated to zero.
        for j in 0..3 {
            assert!(reduced.matrix[(2, j)].abs() < 1e-12);
        }
    }

    #[test]
    fn rank_of_duplicated_column_is_deficient() {
        let a = array![
            [1.0, 1.0, 2.0],
            [2.0, 2.0, 1.0],
            [3.0, 3.0, 5.0],
            [4.0, 4.0, 3.0]
        ];
        assert_eq!(rank(&a), 2);
    }

    #[test]
    fn rank_of_zero_matrix_is_zero() {
        assert_eq!(rank(&Array2::<f64>::zeros((3, 3))), 0);
    }

    #[test]
    fn symmetric_eigenvalues_diagonal() {
        let a = array![[3.0, 0.0], [0.0, 1.0]];
        let eig = symmetric_eigenvalues(&a).unwrap();
        assert!((eig[0] - 3.0).abs() < 1e-12);
        assert!((eig[1] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn symmetric_eigenvalues_known_2x2() {
        // [[2, 1], [1, 2]] has eigenvalues 3 and 1.
        let a = array![[2.0, 1.0], [1.0, 2.0]];
        let eig = symmetric_eigenvalues(&a).unwrap();
        assert!((eig[0] - 3.0).abs() < 1e-10);
        assert!((eig[1] - 1.0).abs() < 1e-10);
    }

    #[test]
    fn symmetric_eigenvalues_rejects_asymmetric() {
        let a = array![[1.0, 2.0], [3.0, 4.0]];
        assert_eq!(symmetric_eigenvalues(&a), Err(StatsError::NotSymmetric));
    }

    #[test]
    fn symmetric_eigenvalues_rejects_rectangular() {
        let a = Array2::<f64>::zeros((2, 3));
        assert_eq!(
            symmetric_eigenvalues(&a),
            Err(StatsError::NotSquare { rows: 2, cols: 3 })
        );
    }

    #[test]
    fn singular_values_of_diagonal() {
        let a = array![[4.0, 0.0], [0.0, 3.0], [0.0, 0.0]];
        let sigma = singular_values(&a);
        assert_eq!(sigma.len(), 2);
        assert!((sigma[0] - 4.0).abs() < 1e-10);
        assert!((sigma[1] - 3.0).abs() < 1e-10);
    }

    #[test]
    fn condition_number_of_identity_is_one() {
        let eye = Array2::<f64>::eye(4);
        assert!((condition_number(&eye).unwrap() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn condition_number_of_singular_matrix_is_infinite() {
        let a = array![[1.0, 2.0], [2.0, 4.0]];
        assert!(condition_number(&a).unwrap().is_infinite());
    }

    #[test]
    fn condition_number_grows_near_collinearity() {
        let well = array![[1.0, 0.0], [0.0, 1.0], [1.0, -1.0]];
        let nearly = array![[1.0, 1.0 + 1e-6], [1.0, 1.0], [2.0, 2.0 - 1e-6]];
        let kappa_well = condition_number(&well).unwrap();
        let kappa_nearly = condition_number(&nearly).unwrap();
        assert!(kappa_nearly > 1e4 * kappa_well);
    }
}
