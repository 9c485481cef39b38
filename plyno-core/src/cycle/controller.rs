//! Wash controller
//!
//! Owns the three injected devices and drives one cycle at a time:
//! validate weight, resolve the program, pour, wash, release, spin.
//! Device calls are strictly sequential and blocking; the first
//! failure aborts the remaining sequence with no retries and no
//! rollback of already-issued calls.

use heapless::Vec;

use super::status::{ErrorCode, LaundryStatus};
use super::tuning::CycleTuning;
use crate::laundry::LaundryBatch;
use crate::program::{ProgramSelection, WashConfig};
use crate::state::{CycleEvent, CyclePhase};
use crate::traits::{DirtDetector, Engine, WaterPump};

/// Maximum phases a single cycle can visit
pub const MAX_TRACE_PHASES: usize = 8;

/// Wash cycle controller
///
/// Generic over the injected device implementations. One controller
/// drives at most one cycle at a time; `start` is reentrant-safe as
/// long as the device set is not shared across overlapping calls.
#[derive(Debug)]
pub struct WashController<D, E, P> {
    detector: D,
    engine: E,
    pump: P,
    tuning: CycleTuning,
    /// Current phase (terminal phase of the last cycle when idle)
    phase: CyclePhase,
    /// Phases visited by the current/last cycle, in order
    trace: Vec<CyclePhase, MAX_TRACE_PHASES>,
}

impl<D, E, P> WashController<D, E, P>
where
    D: DirtDetector,
    E: Engine,
    P: WaterPump,
{
    /// Create a controller with default tuning
    pub fn new(detector: D, engine: E, pump: P) -> Self {
        Self::with_tuning(detector, engine, pump, CycleTuning::default())
    }

    /// Create a controller with explicit tuning
    pub fn with_tuning(detector: D, engine: E, pump: P, tuning: CycleTuning) -> Self {
        Self {
            detector,
            engine,
            pump,
            tuning,
            phase: CyclePhase::Idle,
            trace: Vec::new(),
        }
    }

    /// Get the current phase
    pub fn phase(&self) -> CyclePhase {
        self.phase
    }

    /// Get the phases visited by the last cycle, in order
    pub fn trace(&self) -> &[CyclePhase] {
        &self.trace
    }

    /// Get the tuning in effect
    pub fn tuning(&self) -> &CycleTuning {
        &self.tuning
    }

    /// Get the injected dirt detector
    pub fn detector(&self) -> &D {
        &self.detector
    }

    /// Get the injected engine
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Get the injected water pump
    pub fn pump(&self) -> &P {
        &self.pump
    }

    /// Release the devices back to the caller
    pub fn into_devices(self) -> (D, E, P) {
        (self.detector, self.engine, self.pump)
    }

    /// Run one wash cycle
    ///
    /// Never panics and never propagates a device failure: every
    /// outcome is an [`ErrorCode`] in the returned status. On any
    /// error path the status carries no program.
    pub fn start(&mut self, batch: &LaundryBatch, config: &WashConfig) -> LaundryStatus {
        self.trace.clear();
        self.advance(CycleEvent::CycleStarted);

        // Local precondition: no device sees a call for a rejected batch
        if batch.overloaded() {
            self.advance(CycleEvent::LoadRejected);
            return LaundryStatus::failure(ErrorCode::TooHeavy);
        }

        let program = match config.program {
            ProgramSelection::Fixed(program) => {
                self.advance(CycleEvent::LoadAccepted);
                program
            }
            ProgramSelection::AutoDetect => {
                self.advance(CycleEvent::AutoDetectRequested);
                match self.detector.detect_dirt_degree(batch) {
                    Ok(dirt) => {
                        let program = self.tuning.program_for(dirt);
                        self.advance(CycleEvent::ProgramResolved);
                        program
                    }
                    Err(err) => return self.fault(err.into()),
                }
            }
        };

        if let Err(err) = self.pump.pour(self.tuning.water_volume_ml(batch)) {
            return self.fault(err.into());
        }
        self.advance(CycleEvent::WaterPoured);

        if let Err(err) = self.engine.run_washing(program.wash_time_s()) {
            return self.fault(err.into());
        }
        self.advance(CycleEvent::WashFinished);

        if let Err(err) = self.pump.release() {
            return self.fault(err.into());
        }

        if config.spin {
            self.advance(CycleEvent::SpinStarted);
            if let Err(err) = self.engine.spin() {
                return self.fault(err.into());
            }
        }

        self.advance(CycleEvent::CycleFinished);
        LaundryStatus::success(program)
    }

    /// Advance the phase machine and record the phase in the trace
    fn advance(&mut self, event: CycleEvent) {
        self.phase = self.phase.transition(event);
        let _ = self.trace.push(self.phase);
    }

    /// End the cycle after a device failure
    fn fault(&mut self, code: ErrorCode) -> LaundryStatus {
        self.advance(CycleEvent::DeviceFaulted);
        LaundryStatus::failure(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::laundry::{Material, Percentage};
    use crate::program::Program;
    use crate::traits::{DetectorError, EngineError, PumpError};
    use core::cell::Cell;

    // Scripted doubles share a sequence counter so tests can assert the
    // relative order of device calls.

    fn step(seq: &Cell<u32>) -> u32 {
        let n = seq.get();
        seq.set(n + 1);
        n
    }

    struct SeqDetector<'a> {
        seq: &'a Cell<u32>,
        reading: Result<Percentage, DetectorError>,
        called_at: Option<u32>,
    }

    impl<'a> SeqDetector<'a> {
        fn reporting(seq: &'a Cell<u32>, pct: u8) -> Self {
            Self {
                seq,
                reading: Ok(Percentage::clamped(pct)),
                called_at: None,
            }
        }

        fn failing(seq: &'a Cell<u32>, err: DetectorError) -> Self {
            Self {
                seq,
                reading: Err(err),
                called_at: None,
            }
        }
    }

    impl DirtDetector for SeqDetector<'_> {
        fn detect_dirt_degree(
            &mut self,
            _batch: &LaundryBatch,
        ) -> Result<Percentage, DetectorError> {
            self.called_at = Some(step(self.seq));
            self.reading
        }
    }

    struct SeqEngine<'a> {
        seq: &'a Cell<u32>,
        wash_result: Result<(), EngineError>,
        spin_result: Result<(), EngineError>,
        washed_at: Option<u32>,
        washed_for_s: Option<u16>,
        spun_at: Option<u32>,
    }

    impl<'a> SeqEngine<'a> {
        fn healthy(seq: &'a Cell<u32>) -> Self {
            Self {
                seq,
                wash_result: Ok(()),
                spin_result: Ok(()),
                washed_at: None,
                washed_for_s: None,
                spun_at: None,
            }
        }

        fn failing_wash(seq: &'a Cell<u32>, err: EngineError) -> Self {
            Self {
                wash_result: Err(err),
                ..Self::healthy(seq)
            }
        }

        fn failing_spin(seq: &'a Cell<u32>, err: EngineError) -> Self {
            Self {
                spin_result: Err(err),
                ..Self::healthy(seq)
            }
        }
    }

    impl Engine for SeqEngine<'_> {
        fn run_washing(&mut self, time_s: u16) -> Result<(), EngineError> {
            self.washed_at = Some(step(self.seq));
            self.washed_for_s = Some(time_s);
            self.wash_result
        }

        fn spin(&mut self) -> Result<(), EngineError> {
            self.spun_at = Some(step(self.seq));
            self.spin_result
        }
    }

    struct SeqPump<'a> {
        seq: &'a Cell<u32>,
        pour_result: Result<(), PumpError>,
        release_result: Result<(), PumpError>,
        poured_at: Option<u32>,
        poured_ml: Option<u32>,
        released_at: Option<u32>,
    }

    impl<'a> SeqPump<'a> {
        fn healthy(seq: &'a Cell<u32>) -> Self {
            Self {
                seq,
                pour_result: Ok(()),
                release_result: Ok(()),
                poured_at: None,
                poured_ml: None,
                released_at: None,
            }
        }

        fn failing_pour(seq: &'a Cell<u32>, err: PumpError) -> Self {
            Self {
                pour_result: Err(err),
                ..Self::healthy(seq)
            }
        }

        fn failing_release(seq: &'a Cell<u32>, err: PumpError) -> Self {
            Self {
                release_result: Err(err),
                ..Self::healthy(seq)
            }
        }
    }

    impl WaterPump for SeqPump<'_> {
        fn pour(&mut self, volume_ml: u32) -> Result<(), PumpError> {
            self.poured_at = Some(step(self.seq));
            self.poured_ml = Some(volume_ml);
            self.pour_result
        }

        fn release(&mut self) -> Result<(), PumpError> {
            self.released_at = Some(step(self.seq));
            self.release_result
        }
    }

    fn three_kg_jeans() -> LaundryBatch {
        LaundryBatch::new(Material::Jeans, 3_000)
    }

    fn healthy_rig(seq: &Cell<u32>) -> WashController<SeqDetector<'_>, SeqEngine<'_>, SeqPump<'_>> {
        WashController::new(
            SeqDetector::reporting(seq, 0),
            SeqEngine::healthy(seq),
            SeqPump::healthy(seq),
        )
    }

    #[test]
    fn test_static_program_success() {
        let seq = Cell::new(0);
        let mut controller = healthy_rig(&seq);

        let status = controller.start(&three_kg_jeans(), &WashConfig::new(Program::Long));

        assert_eq!(status, LaundryStatus::success(Program::Long));
        assert_eq!(controller.phase(), CyclePhase::Done);
    }

    #[test]
    fn test_light_material_success() {
        let seq = Cell::new(0);
        let mut controller = healthy_rig(&seq);
        let batch = LaundryBatch::new(Material::Delicate, 3_000);

        let status = controller.start(&batch, &WashConfig::new(Program::Short));

        assert!(status.is_success());
        assert_eq!(status.program, Some(Program::Short));
    }

    #[test]
    fn test_static_program_call_order() {
        let seq = Cell::new(0);
        let mut controller = healthy_rig(&seq);

        controller.start(&three_kg_jeans(), &WashConfig::new(Program::Long));

        let pump = controller.pump();
        let engine = controller.engine();
        let poured = pump.poured_at.unwrap();
        let washed = engine.washed_at.unwrap();
        let released = pump.released_at.unwrap();
        let spun = engine.spun_at.unwrap();
        assert!(poured < washed);
        assert!(washed < released);
        assert!(released < spun);

        // Static selection never samples the detector
        assert_eq!(controller.detector().called_at, None);
    }

    #[test]
    fn test_auto_detect_call_order() {
        let seq = Cell::new(0);
        let mut controller = WashController::new(
            SeqDetector::reporting(&seq, 40),
            SeqEngine::healthy(&seq),
            SeqPump::healthy(&seq),
        );

        let status = controller.start(&three_kg_jeans(), &WashConfig::auto_detect());

        assert_eq!(status.program, Some(Program::Medium));
        let detected = controller.detector().called_at.unwrap();
        let poured = controller.pump().poured_at.unwrap();
        assert!(detected < poured);
    }

    #[test]
    fn test_auto_detect_resolves_long() {
        let seq = Cell::new(0);
        let mut controller = WashController::new(
            SeqDetector::reporting(&seq, 70),
            SeqEngine::healthy(&seq),
            SeqPump::healthy(&seq),
        );

        let status = controller.start(&three_kg_jeans(), &WashConfig::auto_detect());

        assert_eq!(status.error_code, ErrorCode::NoError);
        assert_eq!(status.program, Some(Program::Long));
    }

    #[test]
    fn test_auto_detect_resolves_medium() {
        let seq = Cell::new(0);
        let mut controller = WashController::new(
            SeqDetector::reporting(&seq, 30),
            SeqEngine::healthy(&seq),
            SeqPump::healthy(&seq),
        );

        let status = controller.start(&three_kg_jeans(), &WashConfig::auto_detect());

        assert_eq!(status.program, Some(Program::Medium));
    }

    #[test]
    fn test_auto_detect_resolves_short() {
        let seq = Cell::new(0);
        let mut controller = WashController::new(
            SeqDetector::reporting(&seq, 10),
            SeqEngine::healthy(&seq),
            SeqPump::healthy(&seq),
        );

        let status = controller.start(&three_kg_jeans(), &WashConfig::auto_detect());

        assert_eq!(status.program, Some(Program::Short));
    }

    #[test]
    fn test_too_heavy_touches_no_device() {
        let seq = Cell::new(0);
        let mut controller = healthy_rig(&seq);
        let batch = LaundryBatch::new(Material::Jeans, 30_000);

        let status = controller.start(&batch, &WashConfig::new(Program::Long));

        assert_eq!(status, LaundryStatus::failure(ErrorCode::TooHeavy));
        assert_eq!(controller.phase(), CyclePhase::Rejected);
        assert_eq!(controller.detector().called_at, None);
        assert_eq!(controller.engine().washed_at, None);
        assert_eq!(controller.engine().spun_at, None);
        assert_eq!(controller.pump().poured_at, None);
        assert_eq!(controller.pump().released_at, None);
    }

    #[test]
    fn test_too_heavy_light_material() {
        let seq = Cell::new(0);
        let mut controller = healthy_rig(&seq);
        let batch = LaundryBatch::new(Material::Synthetic, 300_000);

        let status = controller.start(&batch, &WashConfig::new(Program::Long));

        assert_eq!(status.error_code, ErrorCode::TooHeavy);
        assert_eq!(status.program, None);
    }

    #[test]
    fn test_pour_failure_stops_sequence() {
        let seq = Cell::new(0);
        let mut controller = WashController::new(
            SeqDetector::reporting(&seq, 0),
            SeqEngine::healthy(&seq),
            SeqPump::failing_pour(&seq, PumpError::Clogged),
        );

        let status = controller.start(&three_kg_jeans(), &WashConfig::new(Program::Long));

        assert_eq!(status, LaundryStatus::failure(ErrorCode::WaterPumpFailure));
        assert_eq!(controller.phase(), CyclePhase::Done);
        assert_eq!(controller.engine().washed_at, None);
        assert_eq!(controller.engine().spun_at, None);
        assert_eq!(controller.pump().released_at, None);
    }

    #[test]
    fn test_release_failure_stops_sequence() {
        let seq = Cell::new(0);
        let mut controller = WashController::new(
            SeqDetector::reporting(&seq, 0),
            SeqEngine::healthy(&seq),
            SeqPump::failing_release(&seq, PumpError::DryRun),
        );

        let status = controller.start(&three_kg_jeans(), &WashConfig::new(Program::Long));

        assert_eq!(status.error_code, ErrorCode::WaterPumpFailure);
        assert_eq!(controller.engine().spun_at, None);
    }

    #[test]
    fn test_engine_failure() {
        let seq = Cell::new(0);
        let mut controller = WashController::new(
            SeqDetector::reporting(&seq, 0),
            SeqEngine::failing_wash(&seq, EngineError::Stalled),
            SeqPump::healthy(&seq),
        );

        let status = controller.start(&three_kg_jeans(), &WashConfig::new(Program::Long));

        assert_eq!(status.error_code, ErrorCode::EngineFailure);
        assert_eq!(status.program, None);
        // The drum is never drained after an aborted wash
        assert_eq!(controller.pump().released_at, None);
    }

    #[test]
    fn test_spin_failure() {
        let seq = Cell::new(0);
        let mut controller = WashController::new(
            SeqDetector::reporting(&seq, 0),
            SeqEngine::failing_spin(&seq, EngineError::Overheated),
            SeqPump::healthy(&seq),
        );

        let status = controller.start(&three_kg_jeans(), &WashConfig::new(Program::Long));

        assert_eq!(status.error_code, ErrorCode::EngineFailure);
        assert_eq!(status.program, None);
    }

    #[test]
    fn test_unexpected_engine_failure_is_unknown() {
        let seq = Cell::new(0);
        let mut controller = WashController::new(
            SeqDetector::reporting(&seq, 0),
            SeqEngine::failing_wash(&seq, EngineError::Other),
            SeqPump::healthy(&seq),
        );

        let status = controller.start(&three_kg_jeans(), &WashConfig::new(Program::Long));

        assert_eq!(status.error_code, ErrorCode::UnknownError);
    }

    #[test]
    fn test_unexpected_pump_failure_is_unknown() {
        let seq = Cell::new(0);
        let mut controller = WashController::new(
            SeqDetector::reporting(&seq, 0),
            SeqEngine::healthy(&seq),
            SeqPump::failing_pour(&seq, PumpError::Other),
        );

        let status = controller.start(&three_kg_jeans(), &WashConfig::new(Program::Long));

        assert_eq!(status.error_code, ErrorCode::UnknownError);
    }

    #[test]
    fn test_detector_failure_aborts_before_pour() {
        let seq = Cell::new(0);
        let mut controller = WashController::new(
            SeqDetector::failing(&seq, DetectorError::OpenCircuit),
            SeqEngine::healthy(&seq),
            SeqPump::healthy(&seq),
        );

        let status = controller.start(&three_kg_jeans(), &WashConfig::auto_detect());

        assert_eq!(status.error_code, ErrorCode::UnknownError);
        assert_eq!(controller.pump().poured_at, None);
        assert_eq!(controller.engine().washed_at, None);
    }

    #[test]
    fn test_spin_disabled_skips_spin() {
        let seq = Cell::new(0);
        let mut controller = healthy_rig(&seq);
        let config = WashConfig::new(Program::Long).without_spin();

        let status = controller.start(&three_kg_jeans(), &config);

        assert!(status.is_success());
        let (_, engine, pump) = controller.into_devices();
        assert_eq!(engine.spun_at, None);
        assert!(pump.released_at.is_some());
    }

    #[test]
    fn test_custom_tuning_changes_dose() {
        let seq = Cell::new(0);
        let tuning = CycleTuning {
            water_ml_per_kg: 1_000,
            ..CycleTuning::default()
        };
        let mut controller = WashController::with_tuning(
            SeqDetector::reporting(&seq, 0),
            SeqEngine::healthy(&seq),
            SeqPump::healthy(&seq),
            tuning,
        );

        controller.start(&three_kg_jeans(), &WashConfig::new(Program::Short));

        assert_eq!(controller.tuning().water_ml_per_kg, 1_000);
        assert_eq!(controller.pump().poured_ml, Some(3_000));
    }

    #[test]
    fn test_pour_volume_is_batch_proportional() {
        let seq = Cell::new(0);
        let mut controller = healthy_rig(&seq);

        controller.start(&three_kg_jeans(), &WashConfig::new(Program::Medium));

        // 3 kg at the default 5 l/kg dose
        assert_eq!(controller.pump().poured_ml, Some(15_000));
    }

    #[test]
    fn test_wash_time_follows_program() {
        let seq = Cell::new(0);
        let mut controller = healthy_rig(&seq);

        controller.start(&three_kg_jeans(), &WashConfig::new(Program::Long));

        assert_eq!(
            controller.engine().washed_for_s,
            Some(Program::Long.wash_time_s())
        );
    }

    #[test]
    fn test_trace_for_full_cycle() {
        let seq = Cell::new(0);
        let mut controller = WashController::new(
            SeqDetector::reporting(&seq, 70),
            SeqEngine::healthy(&seq),
            SeqPump::healthy(&seq),
        );

        controller.start(&three_kg_jeans(), &WashConfig::auto_detect());

        assert_eq!(
            controller.trace(),
            &[
                CyclePhase::Validating,
                CyclePhase::Detecting,
                CyclePhase::Pouring,
                CyclePhase::Washing,
                CyclePhase::Releasing,
                CyclePhase::Spinning,
                CyclePhase::Done,
            ]
        );
    }

    #[test]
    fn test_trace_resets_between_cycles() {
        let seq = Cell::new(0);
        let mut controller = healthy_rig(&seq);

        controller.start(&three_kg_jeans(), &WashConfig::new(Program::Short));
        let heavy = LaundryBatch::new(Material::Jeans, 30_000);
        controller.start(&heavy, &WashConfig::new(Program::Short));

        assert_eq!(
            controller.trace(),
            &[CyclePhase::Validating, CyclePhase::Rejected]
        );
        assert_eq!(controller.phase(), CyclePhase::Rejected);
    }
}
