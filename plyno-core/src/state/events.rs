//! Events that trigger phase transitions

/// Events that can trigger phase transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CycleEvent {
    // Cycle lifecycle events
    /// A new cycle was requested
    CycleStarted,
    /// Batch weight exceeds the material's load ceiling
    LoadRejected,
    /// Batch accepted with a fixed program
    LoadAccepted,
    /// Batch accepted, program to be resolved by dirt measurement
    AutoDetectRequested,
    /// Dirt measurement mapped to a concrete program
    ProgramResolved,

    // Sequence progress events
    /// Pump finished filling the drum
    WaterPoured,
    /// Engine finished the wash tumble
    WashFinished,
    /// Drum drained; proceed to the extraction spin
    SpinStarted,
    /// All remaining steps done
    CycleFinished,

    // Failure events
    /// A device reported a failure
    DeviceFaulted,
}

impl CycleEvent {
    /// Check if this event indicates a device failure
    pub const fn is_fault(&self) -> bool {
        matches!(self, CycleEvent::DeviceFaulted)
    }
}
