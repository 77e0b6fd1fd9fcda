//! Walkthrough of single-series statistics: mean, the two variance
//! divisors, z-scores, a dataframe-style summary, and what happens when
//! a value is missing.

use anyhow::Result;
use statmat::descriptive::{describe, mean, nan_count, nan_mean, std_dev, variance, zscores};

fn main() -> Result<()> {
    env_logger::init();

    let scores = [61.0, 72.0, 84.0, 92.0, 55.0, 77.0, 68.0, 81.0];
    println!("scores: {:?}", scores);
    println!("mean: {:.3}", mean(&scores)?);

    // The divisor matters: n underestimates spread in small samples,
    // n - 1 (Bessel's correction) removes the bias.
    println!("population variance (n):   {:.3}", variance(&scores, 0)?);
    println!("sample variance (n - 1):   {:.3}", variance(&scores, 1)?);
    println!("sample std deviation:      {:.3}", std_dev(&scores, 1)?);

    let z = zscores(&scores, 1)?;
    println!("z-scores: {:?}", z);

    let summary = describe(&scores, 1)?;
    println!("summary: {:#?}", summary);

    // One missing observation poisons the plain mean; the nan-aware
    // variant averages what is present.
    let with_gap = [61.0, 72.0, f64::NAN, 92.0, 55.0];
    println!("mean with a gap:     {}", mean(&with_gap)?);
    println!("nan_mean with a gap: {:?}", nan_mean(&with_gap));
    println!("missing values:      {}", nan_count(&with_gap));

    Ok(())
}
