use serde::{Deserialize, Serialize};
use crate::enums::risk_tier::RiskTier;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub label: String,
    pub tier: RiskTier,
    pub verdict_title: String,
    pub verdict_body: String,
}
