//! Wash program types
//!
//! A program is a wash intensity profile. The user either picks one
//! directly or requests auto-detect, in which case the controller
//! resolves a program from the measured dirt degree. Results always
//! carry a resolved [`Program`], never the auto-detect request.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A resolved wash program
///
/// Ordered by intensity: a dirtier batch never maps to a shorter
/// program than a cleaner one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Program {
    Short,
    Medium,
    Long,
}

impl Program {
    /// Drum tumble duration for this program (seconds)
    pub const fn wash_time_s(&self) -> u16 {
        match self {
            Program::Short => 1_200,
            Program::Medium => 2_400,
            Program::Long => 3_600,
        }
    }
}

/// How the program for a cycle is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ProgramSelection {
    /// Run exactly this program
    Fixed(Program),
    /// Measure dirt degree and resolve a program from it
    AutoDetect,
}

impl ProgramSelection {
    /// Check if this selection requires a dirt measurement
    pub const fn is_auto(&self) -> bool {
        matches!(self, ProgramSelection::AutoDetect)
    }
}

/// Configuration for a single wash cycle
///
/// Built via chained `const fn` constructors; spin defaults to on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WashConfig {
    /// Program selection
    pub program: ProgramSelection,
    /// Run the final extraction spin
    pub spin: bool,
}

impl WashConfig {
    /// Configure a cycle with a fixed program
    pub const fn new(program: Program) -> Self {
        Self {
            program: ProgramSelection::Fixed(program),
            spin: true,
        }
    }

    /// Configure a cycle with auto-detected program selection
    pub const fn auto_detect() -> Self {
        Self {
            program: ProgramSelection::AutoDetect,
            spin: true,
        }
    }

    /// Disable the final extraction spin
    pub const fn without_spin(self) -> Self {
        Self {
            program: self.program,
            spin: false,
        }
    }
}
