//! Water pump implementations

pub mod bench;

pub use bench::{BenchPump, BenchPumpConfig};
