//! Integration tests for the covariance/correlation matrices and the
//! paired-series statistics they are built from.

use ndarray::{array, Array2, Axis};
use statmat::correlation::{covariance, pearson_r, pearson_test};
use statmat::descriptive::variance;
use statmat::matrix::{
    center_columns, correlation_matrix, covariance_matrix, is_symmetric, standardize_columns,
};

fn example_data() -> Array2<f64> {
    array![
        [4.0, 2.0, 0.6],
        [4.2, 2.1, 0.59],
        [3.9, 2.0, 0.58],
        [4.3, 2.1, 0.62],
        [4.1, 2.2, 0.63]
    ]
}

// ---------------------------------------------------------------------------
// Covariance matrix identities
// ---------------------------------------------------------------------------

#[test]
fn covariance_matrix_is_square_and_symmetric() {
    let cov = covariance_matrix(&example_data(), 1).unwrap();
    assert_eq!(cov.dim(), (3, 3));
    assert!(is_symmetric(&cov, 1e-12));
}

#[test]
fn covariance_matrix_diagonal_holds_column_variances() {
    let data = example_data();
    let cov = covariance_matrix(&data, 1).unwrap();
    for (j, col) in data.columns().into_iter().enumerate() {
        let var = variance(&col.to_vec(), 1).unwrap();
        assert!(
            (cov[(j, j)] - var).abs() < 1e-12,
            "diagonal entry {} should equal the column variance",
            j
        );
    }
}

#[test]
fn covariance_matrix_off_diagonal_matches_pairwise_covariance() {
    let data = example_data();
    let cov = covariance_matrix(&data, 1).unwrap();
    let x: Vec<f64> = data.column(0).to_vec();
    let y: Vec<f64> = data.column(2).to_vec();
    let pairwise = covariance(&x, &y, 1).unwrap();
    assert!((cov[(0, 2)] - pairwise).abs() < 1e-12);
}

#[test]
fn covariance_matrix_population_divisor() {
    let data = example_data();
    let sample = covariance_matrix(&data, 1).unwrap();
    let population = covariance_matrix(&data, 0).unwrap();
    let n = data.nrows() as f64;
    // population = sample * (n - 1) / n, entrywise
    for (s, p) in sample.iter().zip(population.iter()) {
        assert!((p - s * (n - 1.0) / n).abs() < 1e-12);
    }
}

#[test]
fn centering_removes_column_means() {
    let centered = center_columns(&example_data()).unwrap();
    for s in centered.mean_axis(Axis(0)).unwrap().iter() {
        assert!(s.abs() < 1e-12);
    }
}

// ---------------------------------------------------------------------------
// Correlation matrix
// ---------------------------------------------------------------------------

#[test]
fn correlation_matrix_has_unit_diagonal_and_bounded_entries() {
    let corr = correlation_matrix(&example_data()).unwrap();
    for i in 0..corr.nrows() {
        assert_eq!(corr[(i, i)], 1.0);
        for j in 0..corr.ncols() {
            let r = corr[(i, j)];
            assert!((-1.0..=1.0).contains(&r), "r = {} out of bounds", r);
        }
    }
}

#[test]
fn correlation_matrix_matches_pairwise_pearson() {
    let data = example_data();
    let corr = correlation_matrix(&data).unwrap();
    let x: Vec<f64> = data.column(0).to_vec();
    let y: Vec<f64> = data.column(1).to_vec();
    let r = pearson_r(&x, &y).unwrap();
    assert!((corr[(0, 1)] - r).abs() < 1e-12);
}

#[test]
fn correlation_matrix_zero_variance_column_yields_nan() {
    let data = array![[1.0, 7.0], [2.0, 7.0], [3.0, 7.0]];
    let corr = correlation_matrix(&data).unwrap();
    assert!(corr[(0, 1)].is_nan());
    assert!(corr[(1, 1)].is_nan());
    // The well-behaved column keeps its unit self-correlation.
    assert_eq!(corr[(0, 0)], 1.0);
}

#[test]
fn correlation_matrix_of_standardized_data_equals_covariance_matrix() {
    let data = example_data();
    let corr = correlation_matrix(&data).unwrap();
    let z = standardize_columns(&data).unwrap();
    // Standardizing uses the population std, so rescale the sample
    // covariance accordingly.
    let cov_z = covariance_matrix(&z, 0).unwrap();
    for (a, b) in corr.iter().zip(cov_z.iter()) {
        assert!((a - b).abs() < 1e-10);
    }
}

// ---------------------------------------------------------------------------
// Perfectly dependent columns
// ---------------------------------------------------------------------------

#[test]
fn linearly_dependent_columns_correlate_to_one() {
    // Second column is an affine image of the first.
    let data = array![[1.0, 5.0], [2.0, 7.0], [3.0, 9.0], [4.0, 11.0]];
    let corr = correlation_matrix(&data).unwrap();
    assert!((corr[(0, 1)] - 1.0).abs() < 1e-12);

    let x: Vec<f64> = data.column(0).to_vec();
    let y: Vec<f64> = data.column(1).to_vec();
    let test = pearson_test(&x, &y).unwrap();
    assert_eq!(test.p_value, 0.0);
}
