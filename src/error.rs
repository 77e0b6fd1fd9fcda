use std::error::Error;
use std::fmt;

/// Error type shared by the statistics and linear-algebra routines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    /// The operation requires at least one value.
    EmptyInput,
    /// The operation requires more samples than were provided.
    TooFewSamples { needed: usize, got: usize },
    /// Paired-series operations require equal lengths.
    LengthMismatch { left: usize, right: usize },
    /// Correlation of a constant series is undefined.
    ZeroVariance,
    /// Eigenvalue routines require a square matrix.
    NotSquare { rows: usize, cols: usize },
    /// The symmetric eigensolver was given an asymmetric matrix.
    NotSymmetric,
}

impl fmt::Display for StatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatsError::EmptyInput => write!(f, "input is empty"),
            StatsError::TooFewSamples { needed, got } => {
                write!(f, "need at least {} samples, got {}", needed, got)
            }
            StatsError::LengthMismatch { left, right } => {
                write!(f, "paired series must have equal length ({} vs {})", left, right)
            }
            StatsError::ZeroVariance => write!(f, "series has zero variance"),
            StatsError::NotSquare { rows, cols } => {
                write!(f, "matrix must be square, got {}x{}", rows, cols)
            }
            StatsError::NotSymmetric => write!(f, "matrix is not symmetric"),
        }
    }
}

impl Error for StatsError {}
