//! Error types for generator construction and sampling.

use std::fmt;

/// Precondition violations reported by [`LcgParams`](crate::LcgParams)
/// construction and sampling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Seed outside `[1, m)`.
    InvalidSeed { seed: i64 },
    /// Parameters violate `m > 0`, `0 < a < m`, or `c < m`, or a zero
    /// sample size was requested.
    InvalidParameter { reason: String },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSeed { seed } => {
                write!(f, "invalid seed {seed}: must be positive and below the modulus")
            }
            Self::InvalidParameter { reason } => {
                write!(f, "invalid generator parameter: {reason}")
            }
        }
    }
}

impl std::error::Error for EngineError {}
