use rand::seq::SliceRandom;
use rand::Rng;
use crate::config::constants::{
    MAX_FINDINGS_PER_SCAN, MIN_FINDINGS_PER_SCAN, RISK_SCORE_MAX, RISK_SCORE_MIN,
};
use crate::constants::catalog::{FINDING_CATALOG, LICENSE_POOL};
use crate::structs::repo_analysis::RepoAnalysis;
use crate::structs::repo_identifier::RepoIdentifier;

pub struct AnalysisGenerator;

impl AnalysisGenerator {
    /// Synthesizes a full analysis for `target`. Every metric is an
    /// independent uniform draw from `rng`, so a fixed seed reproduces the
    /// same analysis.
    pub fn generate<R: Rng>(target: &RepoIdentifier, rng: &mut R) -> RepoAnalysis {
        let stars = rng.gen_range(100..10_100);
        let forks = rng.gen_range(10..1_010);
        let open_issues = rng.gen_range(0..200);
        let contributors = rng.gen_range(1..=50);
        let risk_score = rng.gen_range(RISK_SCORE_MIN..=RISK_SCORE_MAX);
        let license = LICENSE_POOL[rng.gen_range(0..LICENSE_POOL.len())];
        let last_update = format!("{} days ago", rng.gen_range(1..=30));
        let age = format!("{} years", rng.gen_range(1..=5));

        // Fisher-Yates shuffle keeps every catalog ordering equally likely.
        let mut findings = FINDING_CATALOG.clone();
        findings.shuffle(rng);
        findings.truncate(rng.gen_range(MIN_FINDINGS_PER_SCAN..=MAX_FINDINGS_PER_SCAN));

        RepoAnalysis {
            owner: target.owner.clone(),
            repo_name: target.repo.clone(),
            stars,
            forks,
            open_issues,
            license: license.to_string(),
            last_update,
            age,
            contributors,
            risk_score,
            findings,
        }
    }
}
