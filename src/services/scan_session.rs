use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use uuid::Uuid;
use crate::config::constants::{PROGRESS_COMPLETE, PROGRESS_STEP_MAX, PROGRESS_STEP_MIN};
use crate::constants::catalog::SCAN_PHASES;
use crate::enums::scan_status::ScanStatus;
use crate::services::analysis_generator::AnalysisGenerator;
use crate::services::risk_classifier::RiskClassifier;
use crate::structs::repo_identifier::RepoIdentifier;
use crate::structs::scan_report::ScanReport;

/// Tick-driven state machine for the scan simulation. The host decides the
/// cadence; each `tick()` call advances progress by one random step and the
/// tick that reaches full progress synthesizes the final report.
pub struct ScanSession {
    id: String,
    status: ScanStatus,
    progress: f64,
    phase_index: usize,
    ticks: u32,
    target: Option<RepoIdentifier>,
    rng: StdRng,
}

impl ScanSession {
    /// Creates an idle session. A fixed `seed` makes every scan driven by
    /// this session reproducible.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };

        Self {
            id: Uuid::new_v4().to_string(),
            status: ScanStatus::Idle,
            progress: 0.0,
            phase_index: 0,
            ticks: 0,
            target: None,
            rng,
        }
    }

    /// Discards any previous scan state and enters Scanning for `target`.
    pub fn start(&mut self, target: RepoIdentifier) {
        self.id = Uuid::new_v4().to_string();
        log::debug!("🔍 Scan {} started for {}", self.id, target.full_name());

        self.status = ScanStatus::Scanning;
        self.progress = 0.0;
        self.phase_index = 0;
        self.ticks = 0;
        self.target = Some(target);
    }

    /// Advances the simulation by one step. Returns the finished report on
    /// the tick that reaches full progress, `None` otherwise. Ticking an
    /// idle or completed session is a no-op.
    pub fn tick(&mut self) -> Option<ScanReport> {
        if self.status != ScanStatus::Scanning {
            return None;
        }

        self.ticks += 1;
        let step = self.rng.gen_range(PROGRESS_STEP_MIN..PROGRESS_STEP_MAX);
        self.progress = (self.progress + step).min(PROGRESS_COMPLETE);
        self.phase_index = Self::phase_index_for(self.progress);

        if self.progress < PROGRESS_COMPLETE {
            return None;
        }

        self.status = ScanStatus::Complete;
        let target = self.target.clone()?;
        let analysis = AnalysisGenerator::generate(&target, &mut self.rng);
        let assessment = RiskClassifier::classify(analysis.risk_score);
        log::debug!("✅ Scan {} complete after {} ticks", self.id, self.ticks);

        Some(ScanReport {
            analysis,
            assessment,
            completed_at: chrono::Utc::now(),
            ticks: self.ticks,
        })
    }

    /// Caption index scales linearly with progress over the fixed list, so
    /// it never decreases while progress grows.
    fn phase_index_for(progress: f64) -> usize {
        let scaled = (progress / PROGRESS_COMPLETE) * (SCAN_PHASES.len() - 1) as f64;
        (scaled.floor() as usize).min(SCAN_PHASES.len() - 1)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn status(&self) -> ScanStatus {
        self.status
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    pub fn phase(&self) -> &'static str {
        SCAN_PHASES[self.phase_index]
    }

    pub fn target(&self) -> Option<&RepoIdentifier> {
        self.target.as_ref()
    }
}
