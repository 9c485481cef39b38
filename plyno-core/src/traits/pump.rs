//! Water pump trait

/// Errors that can occur with pump operations
///
/// `Clogged` and `DryRun` are the pump's well-defined failure kinds;
/// `Other` covers anything outside that set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PumpError {
    /// Inlet or drain path blocked
    Clogged,
    /// Pump ran with no water to move
    DryRun,
    /// Failure outside the pump's known fault set
    Other,
}

/// Trait for the water pump
///
/// Implementations fill and drain the drum. Calls block until the
/// requested volume has moved or the pump faults.
pub trait WaterPump {
    /// Pour the given volume of water into the drum
    ///
    /// The controller always requests a batch-proportional volume;
    /// implementations may assume it fits a sane drum.
    fn pour(&mut self, volume_ml: u32) -> Result<(), PumpError>;

    /// Drain the drum completely
    fn release(&mut self) -> Result<(), PumpError>;
}
