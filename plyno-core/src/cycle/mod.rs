//! Wash cycle orchestration
//!
//! Drives the injected devices through the fixed wash sequence
//! (pour, wash, release, spin) and classifies every device failure
//! into a result code.

pub mod controller;
pub mod status;
pub mod tuning;

pub use controller::{WashController, MAX_TRACE_PHASES};
pub use status::{ErrorCode, LaundryStatus};
pub use tuning::{
    CycleTuning, LONG_WASH_THRESHOLD_PCT, MEDIUM_WASH_THRESHOLD_PCT, WATER_ML_PER_KG,
};
