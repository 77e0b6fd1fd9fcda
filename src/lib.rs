//! statmat: descriptive statistics and covariance-structure analysis.
//!
//! This crate provides scalar statistics for single and paired series
//! (mean, variance with a configurable divisor, covariance, Pearson
//! correlation with a significance test), column-wise matrix statistics
//! (covariance and correlation matrices), and the linear-algebra probes
//! used to diagnose a data matrix (rank, reduced row-echelon form,
//! condition number), plus a small CSV loader for numeric tables.
//!
//! The design favors small, testable modules. Missing values are carried
//! as NaN: plain aggregates let NaN propagate, and `nan_`-prefixed
//! variants skip it explicitly.
pub mod correlation;
pub mod descriptive;
pub mod error;
pub mod io;
pub mod linalg;
pub mod matrix;
