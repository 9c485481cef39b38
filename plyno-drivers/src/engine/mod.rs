//! Drum engine implementations

pub mod bench;

pub use bench::{BenchEngine, EngineOp, MAX_OPS};
