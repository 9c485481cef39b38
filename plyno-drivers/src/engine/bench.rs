//! Bench drum engine
//!
//! Completes wash tumbles and spins instantly while keeping an op log
//! and runtime accounting, so bench cycles can assert what the engine
//! was asked to do.

use heapless::Vec;

use plyno_core::traits::{Engine, EngineError};

/// Maximum logged operations
pub const MAX_OPS: usize = 16;

/// Operations observed by the bench engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EngineOp {
    /// Wash tumble with its requested duration
    Wash { time_s: u16 },
    /// Extraction spin
    Spin,
}

/// Bench engine with op log and fault injection
pub struct BenchEngine {
    ops: Vec<EngineOp, MAX_OPS>,
    wash_time_total_s: u32,
    spin_count: u32,
    fail_next_wash: Option<EngineError>,
    fail_next_spin: Option<EngineError>,
}

impl BenchEngine {
    /// Create an idle bench engine
    pub fn new() -> Self {
        Self {
            ops: Vec::new(),
            wash_time_total_s: 0,
            spin_count: 0,
            fail_next_wash: None,
            fail_next_spin: None,
        }
    }

    /// Operations observed so far, in order
    pub fn ops(&self) -> &[EngineOp] {
        &self.ops
    }

    /// Total wash tumble time requested so far (seconds)
    pub fn wash_time_total_s(&self) -> u32 {
        self.wash_time_total_s
    }

    /// Number of completed spins
    pub fn spin_count(&self) -> u32 {
        self.spin_count
    }

    /// Make the next wash tumble fail with the given error
    pub fn fail_next_wash(&mut self, err: EngineError) {
        self.fail_next_wash = Some(err);
    }

    /// Make the next spin fail with the given error
    pub fn fail_next_spin(&mut self, err: EngineError) {
        self.fail_next_spin = Some(err);
    }
}

impl Default for BenchEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for BenchEngine {
    fn run_washing(&mut self, time_s: u16) -> Result<(), EngineError> {
        if let Some(err) = self.fail_next_wash.take() {
            return Err(err);
        }
        // A zero-length tumble is outside the engine's known fault set
        if time_s == 0 {
            return Err(EngineError::Other);
        }
        let _ = self.ops.push(EngineOp::Wash { time_s });
        self.wash_time_total_s += time_s as u32;
        Ok(())
    }

    fn spin(&mut self) -> Result<(), EngineError> {
        if let Some(err) = self.fail_next_spin.take() {
            return Err(err);
        }
        let _ = self.ops.push(EngineOp::Spin);
        self.spin_count += 1;
        Ok(())
    }
}
