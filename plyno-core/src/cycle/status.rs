//! Cycle result types
//!
//! Every `start` call returns a [`LaundryStatus`]; device failures are
//! converted into an [`ErrorCode`] and never escape the controller.

use crate::program::Program;
use crate::traits::{DetectorError, EngineError, PumpError};

/// Outcome classification of a wash cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ErrorCode {
    /// Full sequence completed
    NoError,
    /// Batch exceeds the material's load ceiling; nothing was started
    TooHeavy,
    /// The pump reported one of its well-defined failure kinds
    WaterPumpFailure,
    /// The engine reported one of its well-defined failure kinds
    EngineFailure,
    /// A device reported a failure kind outside its well-defined set
    UnknownError,
}

impl From<PumpError> for ErrorCode {
    fn from(err: PumpError) -> Self {
        match err {
            PumpError::Clogged | PumpError::DryRun => ErrorCode::WaterPumpFailure,
            PumpError::Other => ErrorCode::UnknownError,
        }
    }
}

impl From<EngineError> for ErrorCode {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::Stalled | EngineError::Overheated => ErrorCode::EngineFailure,
            EngineError::Other => ErrorCode::UnknownError,
        }
    }
}

impl From<DetectorError> for ErrorCode {
    fn from(_err: DetectorError) -> Self {
        // The taxonomy carries dedicated codes only for pump and engine
        ErrorCode::UnknownError
    }
}

/// Final status of a wash cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LaundryStatus {
    /// Outcome classification
    pub error_code: ErrorCode,
    /// The program actually executed
    ///
    /// `Some` only on [`ErrorCode::NoError`]. Under auto-detect this is
    /// the resolved program, never the auto-detect request.
    pub program: Option<Program>,
}

impl LaundryStatus {
    /// Status for a fully completed cycle
    pub const fn success(program: Program) -> Self {
        Self {
            error_code: ErrorCode::NoError,
            program: Some(program),
        }
    }

    /// Status for a rejected or aborted cycle
    pub const fn failure(error_code: ErrorCode) -> Self {
        Self {
            error_code,
            program: None,
        }
    }

    /// Check if the cycle completed
    pub const fn is_success(&self) -> bool {
        matches!(self.error_code, ErrorCode::NoError)
    }
}
