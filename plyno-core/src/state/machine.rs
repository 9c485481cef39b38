//! Phase machine definition
//!
//! A cycle runs the machine exactly once: it never re-enters an
//! earlier phase, and every run ends in a terminal phase.

use super::events::CycleEvent;

/// Phases of a wash cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CyclePhase {
    /// No cycle started yet
    Idle,
    /// Checking the batch against its material's load ceiling
    Validating,
    /// Sampling dirt degree (auto-detect only)
    Detecting,
    /// Pump filling the drum
    Pouring,
    /// Engine tumbling the drum
    Washing,
    /// Pump draining the drum
    Releasing,
    /// Engine running the extraction spin
    Spinning,
    /// Batch rejected as too heavy; no device was touched
    Rejected,
    /// Cycle over, successfully or after a device fault
    Done,
}

impl CyclePhase {
    /// Check if this is a terminal phase
    pub const fn is_terminal(&self) -> bool {
        matches!(self, CyclePhase::Rejected | CyclePhase::Done)
    }

    /// Check if a cycle is in flight
    pub const fn is_active(&self) -> bool {
        !matches!(
            self,
            CyclePhase::Idle | CyclePhase::Rejected | CyclePhase::Done
        )
    }

    /// Check if this phase has water standing in the drum
    pub const fn water_in_drum(&self) -> bool {
        matches!(self, CyclePhase::Washing | CyclePhase::Releasing)
    }

    /// Check if this phase has the drum turning
    pub const fn drum_turning(&self) -> bool {
        matches!(self, CyclePhase::Washing | CyclePhase::Spinning)
    }

    /// Process an event and return the next phase
    ///
    /// This is the core transition logic. Pairs not listed keep the
    /// current phase.
    pub const fn transition(self, event: CycleEvent) -> Self {
        use CycleEvent::*;
        use CyclePhase::*;

        match (self, event) {
            // A fresh cycle may begin from any terminal phase
            (Idle | Rejected | Done, CycleStarted) => Validating,

            // Validation outcomes
            (Validating, LoadRejected) => Rejected,
            (Validating, LoadAccepted) => Pouring,
            (Validating, AutoDetectRequested) => Detecting,

            // Auto-detect resolution
            (Detecting, ProgramResolved) => Pouring,

            // Wash sequence
            (Pouring, WaterPoured) => Washing,
            (Washing, WashFinished) => Releasing,
            (Releasing, SpinStarted) => Spinning,
            (Releasing | Spinning, CycleFinished) => Done,

            // A device fault ends the cycle from any device phase
            (
                Detecting | Pouring | Washing | Releasing | Spinning,
                DeviceFaulted,
            ) => Done,

            // Default: stay in current phase
            _ => self,
        }
    }
}
