//! Benchmark support crate for wayfinder.
//!
//! Provides seeded synthetic graphs and parameter types used by the Criterion
//! benchmarks for the traversal algorithms and the disjoint set.

pub mod error;
pub mod params;
pub mod synthetic;
