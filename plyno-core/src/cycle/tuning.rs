//! Cycle tuning
//!
//! Policy constants for program selection and water dosing, collected
//! in a configuration struct so a board build can override them.

use crate::laundry::{LaundryBatch, Percentage};
use crate::program::Program;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Dirt degree at or above which a long wash is selected
pub const LONG_WASH_THRESHOLD_PCT: u8 = 60;

/// Dirt degree at or above which a medium wash is selected
pub const MEDIUM_WASH_THRESHOLD_PCT: u8 = 20;

/// Water dose per kilogram of laundry (millilitres)
pub const WATER_ML_PER_KG: u32 = 5_000;

/// Tuning parameters for the wash controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CycleTuning {
    /// Dirt threshold for the long program
    pub long_wash_threshold: Percentage,
    /// Dirt threshold for the medium program
    pub medium_wash_threshold: Percentage,
    /// Water dose per kilogram of laundry (millilitres)
    pub water_ml_per_kg: u32,
}

impl Default for CycleTuning {
    fn default() -> Self {
        Self {
            long_wash_threshold: Percentage::clamped(LONG_WASH_THRESHOLD_PCT),
            medium_wash_threshold: Percentage::clamped(MEDIUM_WASH_THRESHOLD_PCT),
            water_ml_per_kg: WATER_ML_PER_KG,
        }
    }
}

impl CycleTuning {
    /// Resolve a program from a measured dirt degree
    ///
    /// Monotonic in the dirt degree: at or above the long threshold the
    /// long program is selected, at or above the medium threshold the
    /// medium one, below that the short one.
    pub fn program_for(&self, dirt: Percentage) -> Program {
        if dirt >= self.long_wash_threshold {
            Program::Long
        } else if dirt >= self.medium_wash_threshold {
            Program::Medium
        } else {
            Program::Short
        }
    }

    /// Water volume to pour for a batch (millilitres)
    ///
    /// Proportional to batch weight. Uses a u64 intermediate to avoid
    /// overflow on absurdly heavy (already rejected) batches.
    pub fn water_volume_ml(&self, batch: &LaundryBatch) -> u32 {
        (batch.weight_g as u64 * self.water_ml_per_kg as u64 / 1_000) as u32
    }
}
