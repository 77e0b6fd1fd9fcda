//! Walkthrough of the covariance structure of a data matrix: the
//! covariance matrix, its symmetry and diagonal identities, the
//! correlation matrix, and a correlation significance test.

use anyhow::Result;
use ndarray::{Array2, Axis};
use rand::distributions::Distribution;
use statmat::correlation::pearson_test;
use statmat::matrix::{column_means, correlation_matrix, covariance_matrix, is_symmetric};
use statrs::distribution::Normal;

fn main() -> Result<()> {
    env_logger::init();

    // Three variables over 200 observations: hours studied, exam score
    // (driven by hours plus noise), and an unrelated one.
    let mut rng = rand::thread_rng();
    let noise = Normal::new(0.0, 4.0)?;
    let unrelated = Normal::new(50.0, 10.0)?;

    let n = 200;
    let mut values = Vec::with_capacity(n * 3);
    for i in 0..n {
        let hours = 1.0 + (i as f64 / n as f64) * 9.0;
        let score = 40.0 + 5.5 * hours + noise.sample(&mut rng);
        values.push(hours);
        values.push(score);
        values.push(unrelated.sample(&mut rng));
    }
    let data = Array2::from_shape_vec((n, 3), values)?;

    println!("column means: {:.3}", column_means(&data)?);

    let cov = covariance_matrix(&data, 1)?;
    println!("covariance matrix:\n{:.3}", cov);
    println!("symmetric: {}", is_symmetric(&cov, 1e-10));

    // The diagonal of the covariance matrix is the per-column variances.
    let variances = data.var_axis(Axis(0), 1.0);
    println!("diag:      {:.3}", cov.diag());
    println!("variances: {:.3}", variances);

    let corr = correlation_matrix(&data)?;
    println!("correlation matrix:\n{:.3}", corr);

    // Hours vs score should be strongly correlated and significant;
    // hours vs the unrelated column should not be.
    let hours: Vec<f64> = data.column(0).to_vec();
    let score: Vec<f64> = data.column(1).to_vec();
    let other: Vec<f64> = data.column(2).to_vec();

    let strong = pearson_test(&hours, &score)?;
    println!(
        "hours~score:     r = {:.4}, t = {:.2}, p = {:.3e}",
        strong.r, strong.t_statistic, strong.p_value
    );
    let weak = pearson_test(&hours, &other)?;
    println!(
        "hours~unrelated: r = {:.4}, t = {:.2}, p = {:.3}",
        weak.r, weak.t_statistic, weak.p_value
    );

    Ok(())
}
