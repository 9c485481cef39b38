//! Dirt detector trait

use crate::laundry::{LaundryBatch, Percentage};

/// Errors that can occur while sampling dirt degree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DetectorError {
    /// Sensor disconnected (open circuit)
    OpenCircuit,
    /// Raw reading outside the calibrated window
    OutOfRange,
    /// Failure outside the detector's known fault set
    Other,
}

/// Trait for dirt degree sensors
///
/// Implementations measure how soiled a batch is (typically via an
/// optical turbidity probe in the sump) and report it as a percentage.
/// The measurement is only consulted when a cycle is started with
/// auto-detect program selection.
pub trait DirtDetector {
    /// Sample the dirt degree of a batch
    ///
    /// Takes `&mut self` because sensor reads typically require mutable access.
    fn detect_dirt_degree(&mut self, batch: &LaundryBatch) -> Result<Percentage, DetectorError>;
}
