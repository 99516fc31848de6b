//! # lcgkit-core
//!
//! Linear-congruential generators with exact integer semantics.
//!
//! The recurrence `x[i] = (a * x[i-1] + c) mod m` is evaluated in wide
//! integer arithmetic and normalized to `[0, 1)` only at the end, so a
//! stream is bit-identical no matter how long it runs. Two classic
//! parameterizations ship as constants: [`RANDU`], kept around precisely
//! because its output is statistically bad, and [`MINSTD`], the Lehmer
//! generator behind [`good_generator`].
//!
//! ## Quick Start
//!
//! ```
//! use lcgkit_core::{good_generator, randu};
//!
//! let sample = randu(1, 5).unwrap();
//! assert_eq!(sample.len(), 5);
//! assert!(sample.iter().all(|v| (0.0..1.0).contains(v)));
//!
//! // Identical arguments always reproduce the same stream.
//! assert_eq!(good_generator(42, 100).unwrap(), good_generator(42, 100).unwrap());
//! ```
//!
//! Custom parameterizations go through [`LcgParams::new`], which validates
//! `0 < a < m` and `c < m` up front:
//!
//! ```
//! use lcgkit_core::LcgParams;
//!
//! let params = LcgParams::new(1103515245, 12345, 1 << 31).unwrap();
//! let stream = params.sample(7, 1000).unwrap();
//! assert_eq!(stream.len(), 1000);
//! ```
//!
//! Every operation is a pure function: no global state, no I/O, safe to
//! call from any number of threads at once.

pub mod engine;
pub mod error;
pub mod params;

pub use engine::{generate, good_generator, randu};
pub use error::EngineError;
pub use params::{LcgParams, MINSTD, RANDU};

/// Library version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
