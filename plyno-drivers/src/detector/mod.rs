//! Dirt detector implementations

pub mod bench;

pub use bench::{BenchDetector, MAX_READINGS};
