//! Benchmark support crate for sprig.
//!
//! Generates reproducible synthetic graphs and groups benchmark parameters
//! for the Criterion suites under `benches/`.

pub mod error;
pub mod graph;
pub mod params;
