#![warn(missing_docs)]
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

/// Core data structures for the intensity line.
///
/// The central type is [`models::IntensityLine`], which owns the canonical
/// breakpoint list and implements the interval mutations. [`models::Breakpoint`]
/// is the unit of that list, and the only shape in which the function is ever
/// handed back to callers.
pub mod models;

pub use models::{Breakpoint, IntensityLine, IntensityLineDto, IntensityLineError};

/// The arbitrary-precision integer used for all intensities.
///
/// Re-exported so downstream crates do not need a direct `num-bigint` dependency
/// to construct amounts or inspect query results.
pub use num_bigint::BigInt;
