//! Classical randomness test battery for uniform [0,1) samples.
//!
//! Four hypothesis tests consume an immutable sample (typically produced by
//! an LCG) and return an accept/reject decision together with the test
//! statistic: chi-square goodness-of-fit, runs (up/down), lag-1 serial
//! correlation, and a one-sample Kolmogorov-Smirnov test against
//! uniform(0,1). Every test is a pure function over the slice it is given;
//! nothing is mutated and no state is shared between invocations.
//!
//! Decision conventions differ on purpose and must stay distinct:
//! [`gof_test`] passes only inside the symmetric band
//! `alpha < p < 1 - alpha` (a fit that is "too good" is rejected just like
//! a poor one), while [`ks_test`] uses the usual one-sided `p > alpha`.

use serde::Serialize;
use statrs::distribution::{ChiSquared, ContinuousCDF, Normal};
use std::fmt;

// ═══════════════════════════════════════════════════════════════════════════════
// Core types
// ═══════════════════════════════════════════════════════════════════════════════

/// Default significance level.
pub const DEFAULT_ALPHA: f64 = 0.05;

/// Default boundary-point count for [`gof_test`].
pub const DEFAULT_BINS: usize = 256;

/// Outcome of a single hypothesis test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TestOutcome {
    /// True when the test fails to reject the null hypothesis.
    pub pass: bool,
    /// P-value (goodness-of-fit, KS) or standardized z score (runs,
    /// correlation).
    pub statistic: f64,
}

/// A test outcome labeled with the test that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NamedOutcome {
    pub name: &'static str,
    pub outcome: TestOutcome,
}

/// Precondition violations reported by the battery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestError {
    /// Zero-length sample passed to any test.
    EmptySample,
    /// Sample too short for the requested test.
    InsufficientSample { needed: usize, got: usize },
    /// Too few histogram boundary points for a chi-square statistic.
    InvalidBins { bins: usize },
}

impl fmt::Display for TestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySample => write!(f, "empty sample"),
            Self::InsufficientSample { needed, got } => {
                write!(f, "insufficient sample: need {needed} values, got {got}")
            }
            Self::InvalidBins { bins } => {
                write!(f, "invalid bin count {bins}: need at least 3 boundary points")
            }
        }
    }
}

impl std::error::Error for TestError {}

// ═══════════════════════════════════════════════════════════════════════════════
// Helpers
// ═══════════════════════════════════════════════════════════════════════════════

/// Two-sided normal critical value z_(1 - alpha/2).
fn two_sided_critical(alpha: f64) -> f64 {
    Normal::standard().inverse_cdf(1.0 - alpha / 2.0)
}

/// Reject empty and single-element samples for the pairwise tests.
fn require_pairs(sample: &[f64]) -> Result<usize, TestError> {
    match sample.len() {
        0 => Err(TestError::EmptySample),
        n if n < 2 => Err(TestError::InsufficientSample { needed: 2, got: n }),
        n => Ok(n),
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// 1. Goodness-of-fit (chi-square uniformity)
// ═══════════════════════════════════════════════════════════════════════════════

/// Chi-square goodness-of-fit test for uniformity over [0,1).
///
/// `bins` counts histogram boundary points, so the partition has
/// `bins - 1` equal-width intervals (the default 256 yields 255 cells).
/// The off-by-one convention is deliberate and kept for compatibility.
/// Expected counts assume equal frequency per cell; the p-value comes from
/// the chi-square survival function with `bins - 2` degrees of freedom.
///
/// Passes iff `alpha < p < 1 - alpha`.
pub fn gof_test(sample: &[f64], alpha: f64, bins: usize) -> Result<TestOutcome, TestError> {
    if sample.is_empty() {
        return Err(TestError::EmptySample);
    }
    // bins boundary points give bins - 1 intervals; the chi-square needs at
    // least one degree of freedom, hence at least two intervals.
    if bins < 3 {
        return Err(TestError::InvalidBins { bins });
    }
    let intervals = bins - 1;
    let n = sample.len() as f64;

    let mut observed = vec![0u64; intervals];
    for &v in sample {
        let cell = ((v * intervals as f64) as usize).min(intervals - 1);
        observed[cell] += 1;
    }

    let expected = n / intervals as f64;
    let chi2: f64 = observed
        .iter()
        .map(|&o| {
            let diff = o as f64 - expected;
            diff * diff / expected
        })
        .sum();

    let dist = ChiSquared::new((intervals - 1) as f64).unwrap();
    let p = dist.sf(chi2);

    let pass = alpha < p && p < 1.0 - alpha;
    if !pass {
        log::debug!("gof rejected uniformity: chi2={chi2:.3}, p={p:.4}");
    }
    Ok(TestOutcome { pass, statistic: p })
}

// ═══════════════════════════════════════════════════════════════════════════════
// 2. Runs (up/down) test
// ═══════════════════════════════════════════════════════════════════════════════

/// Runs (up/down) test of independence.
///
/// Consecutive pairs are classified as "up" when `sample[k+1] >=
/// sample[k]` (ties count as up) and "down" otherwise; a run is a maximal
/// block of same-direction pairs. The observed run count is standardized
/// against the expected count `(2n - 1)/3` with variance `(16n - 29)/90`
/// and passes iff `|z0| < z_(1 - alpha/2)`. The returned statistic is z0.
pub fn run_test_up_down(sample: &[f64], alpha: f64) -> Result<TestOutcome, TestError> {
    let n = require_pairs(sample)?;

    // The first comparison always opens a run; each direction flip starts
    // another.
    let mut runs = 1u64;
    let mut prev_up = sample[1] >= sample[0];
    for pair in sample.windows(2).skip(1) {
        let up = pair[1] >= pair[0];
        if up != prev_up {
            runs += 1;
        }
        prev_up = up;
    }

    let nf = n as f64;
    let mean = (2.0 * nf - 1.0) / 3.0;
    let variance = (16.0 * nf - 29.0) / 90.0;
    let z0 = (runs as f64 - mean) / variance.sqrt();

    let pass = z0.abs() < two_sided_critical(alpha);
    if !pass {
        log::debug!("runs test rejected independence: runs={runs}, z0={z0:.4}");
    }
    Ok(TestOutcome {
        pass,
        statistic: z0,
    })
}

// ═══════════════════════════════════════════════════════════════════════════════
// 3. Serial correlation test
// ═══════════════════════════════════════════════════════════════════════════════

/// Lag-1 serial correlation test of independence.
///
/// Uses the closed-form estimator
/// `rho = 12/(n-1) * sum(sample[k] * sample[k+1]) - 3` with variance
/// `(13n - 19)/(n - 1)^2`, standardized to z0 and compared against the
/// two-sided normal critical value. The returned statistic is z0.
pub fn correlation_test(sample: &[f64], alpha: f64) -> Result<TestOutcome, TestError> {
    let n = require_pairs(sample)?;
    let nf = n as f64;

    let lag_products: f64 = sample.windows(2).map(|w| w[0] * w[1]).sum();
    let rho = 12.0 / (nf - 1.0) * lag_products - 3.0;
    let variance = (13.0 * nf - 19.0) / ((nf - 1.0) * (nf - 1.0));
    let z0 = rho / variance.sqrt();

    let pass = z0.abs() < two_sided_critical(alpha);
    if !pass {
        log::debug!("correlation test rejected independence: rho={rho:.4}, z0={z0:.4}");
    }
    Ok(TestOutcome {
        pass,
        statistic: z0,
    })
}

// ═══════════════════════════════════════════════════════════════════════════════
// 4. Kolmogorov-Smirnov uniformity test
// ═══════════════════════════════════════════════════════════════════════════════

/// One-sample Kolmogorov-Smirnov test against uniform(0,1).
///
/// The statistic is the supremum distance between the empirical CDF and
/// the identity; the p-value uses the asymptotic Kolmogorov series with
/// the Stephens small-sample correction. Passes iff `p > alpha` strictly
/// (a p-value exactly equal to alpha rejects). The returned statistic is
/// the p-value.
pub fn ks_test(sample: &[f64], alpha: f64) -> Result<TestOutcome, TestError> {
    if sample.is_empty() {
        return Err(TestError::EmptySample);
    }

    let mut sorted = sample.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let nf = sorted.len() as f64;
    let mut d_max = 0.0f64;
    for (i, &x) in sorted.iter().enumerate() {
        let above = (i + 1) as f64 / nf - x;
        let below = x - i as f64 / nf;
        d_max = d_max.max(above.abs()).max(below.abs());
    }

    let p = kolmogorov_p(d_max, nf);
    let pass = p > alpha;
    if !pass {
        log::debug!("ks test rejected uniformity: D={d_max:.6}, p={p:.4}");
    }
    Ok(TestOutcome { pass, statistic: p })
}

/// Asymptotic Kolmogorov distribution tail with the Stephens correction
/// `lambda = (sqrt(n) + 0.12 + 0.11/sqrt(n)) * D`.
fn kolmogorov_p(d: f64, n: f64) -> f64 {
    let sqrt_n = n.sqrt();
    let lambda = (sqrt_n + 0.12 + 0.11 / sqrt_n) * d;
    let mut sum = 0.0;
    for k in 1..=100i32 {
        let sign = if k % 2 == 0 { -1.0 } else { 1.0 };
        sum += sign * (-2.0 * (k as f64 * lambda).powi(2)).exp();
    }
    (2.0 * sum).clamp(0.0, 1.0)
}

// ═══════════════════════════════════════════════════════════════════════════════
// Battery entry point
// ═══════════════════════════════════════════════════════════════════════════════

/// Run all four tests on a sample at a common significance level.
///
/// The goodness-of-fit test uses [`DEFAULT_BINS`]. Requires `n >= 2`; the
/// runs and correlation preconditions propagate as errors.
pub fn run_all_tests(sample: &[f64], alpha: f64) -> Result<Vec<NamedOutcome>, TestError> {
    Ok(vec![
        NamedOutcome {
            name: "goodness_of_fit",
            outcome: gof_test(sample, alpha, DEFAULT_BINS)?,
        },
        NamedOutcome {
            name: "runs_up_down",
            outcome: run_test_up_down(sample, alpha)?,
        },
        NamedOutcome {
            name: "serial_correlation",
            outcome: correlation_test(sample, alpha)?,
        },
        NamedOutcome {
            name: "kolmogorov_smirnov",
            outcome: ks_test(sample, alpha)?,
        },
    ])
}

// ═══════════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════════
