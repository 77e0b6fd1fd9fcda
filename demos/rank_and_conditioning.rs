//! Walkthrough of rank deficiency and conditioning: a duplicated column
//! collapses the rank, row reduction shows which columns carry pivots,
//! and the condition number blows up as columns approach collinearity.

use anyhow::Result;
use ndarray::array;
use statmat::linalg::{condition_number, rank, rref};

fn main() -> Result<()> {
    env_logger::init();

    // Column 1 is exactly twice column 0: only two independent
    // directions despite three columns.
    let deficient = array![
        [1.0, 2.0, 1.0],
        [2.0, 4.0, 3.0],
        [3.0, 6.0, 2.0],
        [4.0, 8.0, 5.0]
    ];
    println!("data:\n{:.1}", deficient);
    println!("rank: {} (of {} columns)", rank(&deficient), deficient.ncols());

    let reduced = rref(&deficient);
    println!("rref:\n{:.3}", reduced.matrix);
    println!("pivot columns: {:?}", reduced.pivot_columns);

    // Conditioning: interpolate the second column from independent to a
    // copy of the first and watch kappa explode.
    println!("\ncondition number as columns become collinear:");
    for &eps in &[1.0, 1e-2, 1e-4, 1e-6, 0.0] {
        let a = array![
            [1.0, 1.0 + eps],
            [1.0, 1.0 - eps],
            [1.0, 1.0]
        ];
        println!("  eps = {:>7.0e}  kappa = {:.3e}", eps, condition_number(&a)?);
    }

    Ok(())
}
