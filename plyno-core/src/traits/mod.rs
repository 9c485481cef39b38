//! Device abstraction traits
//!
//! These traits define the interface between the wash cycle logic
//! and device-specific implementations.

pub mod detector;
pub mod engine;
pub mod pump;

pub use detector::{DetectorError, DirtDetector};
pub use engine::{Engine, EngineError};
pub use pump::{PumpError, WaterPump};
