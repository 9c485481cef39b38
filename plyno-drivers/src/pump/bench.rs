//! Bench water pump
//!
//! Models the drum as a volume counter: pour accumulates, release
//! empties. Releasing an empty drum reports a dry run, and pouring
//! past the configured drum capacity is treated as an unexpected
//! fault, since the controller never doses that much.

use plyno_core::traits::{PumpError, WaterPump};

/// Bench pump configuration
#[derive(Debug, Clone)]
pub struct BenchPumpConfig {
    /// Drum capacity (millilitres)
    pub capacity_ml: u32,
}

impl Default for BenchPumpConfig {
    fn default() -> Self {
        Self {
            capacity_ml: 60_000,
        }
    }
}

/// Bench pump with drum volume model and fault injection
pub struct BenchPump {
    config: BenchPumpConfig,
    volume_ml: u32,
    pour_count: u32,
    release_count: u32,
    fail_next_pour: Option<PumpError>,
    fail_next_release: Option<PumpError>,
}

impl BenchPump {
    /// Create a pump over an empty drum
    pub fn new(config: BenchPumpConfig) -> Self {
        Self {
            config,
            volume_ml: 0,
            pour_count: 0,
            release_count: 0,
            fail_next_pour: None,
            fail_next_release: None,
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &BenchPumpConfig {
        &self.config
    }

    /// Current water volume in the drum (millilitres)
    pub fn volume_ml(&self) -> u32 {
        self.volume_ml
    }

    /// Check if the drum is empty
    pub fn is_empty(&self) -> bool {
        self.volume_ml == 0
    }

    /// Number of completed pours
    pub fn pour_count(&self) -> u32 {
        self.pour_count
    }

    /// Number of completed releases
    pub fn release_count(&self) -> u32 {
        self.release_count
    }

    /// Make the next pour fail with the given error
    pub fn fail_next_pour(&mut self, err: PumpError) {
        self.fail_next_pour = Some(err);
    }

    /// Make the next release fail with the given error
    pub fn fail_next_release(&mut self, err: PumpError) {
        self.fail_next_release = Some(err);
    }
}

impl Default for BenchPump {
    fn default() -> Self {
        Self::new(BenchPumpConfig::default())
    }
}

impl WaterPump for BenchPump {
    fn pour(&mut self, volume_ml: u32) -> Result<(), PumpError> {
        if let Some(err) = self.fail_next_pour.take() {
            return Err(err);
        }
        let filled = self.volume_ml.saturating_add(volume_ml);
        if filled > self.config.capacity_ml {
            return Err(PumpError::Other);
        }
        self.volume_ml = filled;
        self.pour_count += 1;
        Ok(())
    }

    fn release(&mut self) -> Result<(), PumpError> {
        if let Some(err) = self.fail_next_release.take() {
            return Err(err);
        }
        if self.volume_ml == 0 {
            return Err(PumpError::DryRun);
        }
        self.volume_ml = 0;
        self.release_count += 1;
        Ok(())
    }
}
