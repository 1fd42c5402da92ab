use serde::{Deserialize, Serialize};
use crate::structs::finding::Finding;

/// Synthesized repository metrics and findings for one completed scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepoAnalysis {
    pub owner: String,
    pub repo_name: String,
    pub stars: u32,
    pub forks: u32,
    pub open_issues: u32,
    pub license: String,
    pub last_update: String,
    pub age: String,
    pub contributors: u32,
    pub risk_score: u8,
    pub findings: Vec<Finding>,
}
