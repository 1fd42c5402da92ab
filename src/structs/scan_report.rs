use serde::Serialize;
use crate::structs::repo_analysis::RepoAnalysis;
use crate::structs::risk_assessment::RiskAssessment;

/// The combined displayable result of a completed scan.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub analysis: RepoAnalysis,
    pub assessment: RiskAssessment,
    pub completed_at: chrono::DateTime<chrono::Utc>,
    pub ticks: u32,
}
