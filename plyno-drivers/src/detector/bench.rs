//! Bench dirt detector
//!
//! Plays back a scripted sequence of dirt readings instead of sampling
//! a real turbidity probe. The last reading repeats once the script is
//! exhausted, so a single-reading detector behaves like a constant one.

use heapless::Vec;

use plyno_core::laundry::{LaundryBatch, Percentage};
use plyno_core::traits::{DetectorError, DirtDetector};

/// Maximum scripted readings
pub const MAX_READINGS: usize = 8;

/// Scripted dirt detector for bench cycles
pub struct BenchDetector {
    readings: Vec<Percentage, MAX_READINGS>,
    next: usize,
    fail_next: Option<DetectorError>,
    sample_count: u32,
}

impl BenchDetector {
    /// Create a detector that always reports the same dirt degree
    pub fn reporting(degree: Percentage) -> Self {
        Self::with_readings(&[degree])
    }

    /// Create a detector playing back a reading script
    ///
    /// Readings beyond [`MAX_READINGS`] are dropped.
    pub fn with_readings(readings: &[Percentage]) -> Self {
        let mut script = Vec::new();
        for reading in readings.iter().take(MAX_READINGS) {
            let _ = script.push(*reading);
        }
        Self {
            readings: script,
            next: 0,
            fail_next: None,
            sample_count: 0,
        }
    }

    /// Make the next sample fail with the given error
    pub fn fail_next(&mut self, err: DetectorError) {
        self.fail_next = Some(err);
    }

    /// Number of samples taken so far
    pub fn sample_count(&self) -> u32 {
        self.sample_count
    }
}

impl DirtDetector for BenchDetector {
    fn detect_dirt_degree(&mut self, _batch: &LaundryBatch) -> Result<Percentage, DetectorError> {
        if let Some(err) = self.fail_next.take() {
            return Err(err);
        }
        self.sample_count += 1;

        // An empty script is a dead probe
        if self.readings.is_empty() {
            return Err(DetectorError::OpenCircuit);
        }

        let index = self.next.min(self.readings.len() - 1);
        self.next += 1;
        Ok(self.readings[index])
    }
}
