//! Immutable LCG parameterizations.

use serde::Serialize;

use crate::error::EngineError;

/// Parameters of the recurrence `x[i] = (a * x[i-1] + c) mod m`.
///
/// Construct with [`LcgParams::new`], which enforces `m > 0`, `0 < a < m`,
/// and `c < m`. Alternative generators are added by building a new value
/// rather than by writing a new named function; the two classic
/// parameterizations used throughout the crate are the constants [`RANDU`]
/// and [`MINSTD`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LcgParams {
    a: u64,
    c: u64,
    m: u64,
}

/// The RANDU generator: a = 65539, c = 0, m = 2^31.
///
/// Historically infamous: consecutive triples fall on 15 planes in the
/// unit cube. Kept as the "bad" reference generator.
pub const RANDU: LcgParams = LcgParams {
    a: 65539,
    c: 0,
    m: 1 << 31,
};

/// The MINSTD (Lehmer) generator: a = 16807, c = 0, m = 2^31 - 1.
///
/// The "good" reference generator, with far better equidistribution than
/// [`RANDU`].
pub const MINSTD: LcgParams = LcgParams {
    a: 16807,
    c: 0,
    m: (1 << 31) - 1,
};

impl LcgParams {
    /// Validate and build a parameterization.
    pub fn new(a: u64, c: u64, m: u64) -> Result<Self, EngineError> {
        if m == 0 {
            return Err(EngineError::InvalidParameter {
                reason: "modulus must be positive".to_string(),
            });
        }
        if a == 0 || a >= m {
            return Err(EngineError::InvalidParameter {
                reason: format!("multiplier {a} outside (0, {m})"),
            });
        }
        if c >= m {
            return Err(EngineError::InvalidParameter {
                reason: format!("increment {c} not below modulus {m}"),
            });
        }
        Ok(Self { a, c, m })
    }

    /// Multiplier `a`.
    pub fn multiplier(&self) -> u64 {
        self.a
    }

    /// Increment `c` (zero for a multiplicative generator).
    pub fn increment(&self) -> u64 {
        self.c
    }

    /// Modulus `m`.
    pub fn modulus(&self) -> u64 {
        self.m
    }
}
