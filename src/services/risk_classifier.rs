use crate::enums::risk_tier::RiskTier;
use crate::structs::risk_assessment::RiskAssessment;

pub struct RiskClassifier;

impl RiskClassifier {
    /// Maps a 0-100 risk score onto a display tier and verdict. Total over
    /// all integer scores.
    pub fn classify(score: u8) -> RiskAssessment {
        if score >= 70 {
            RiskAssessment {
                label: "HIGH RISK".to_string(),
                tier: RiskTier::Critical,
                verdict_title: "Proceed with Extreme Caution".to_string(),
                verdict_body: "This repository shows significant security and privacy concerns. \
                    Installing it without a thorough manual review is not recommended."
                    .to_string(),
            }
        } else if score >= 40 {
            RiskAssessment {
                label: "MODERATE".to_string(),
                tier: RiskTier::Warning,
                verdict_title: "Review Before Installing".to_string(),
                verdict_body: "Some findings deserve attention. Weigh them against your use case \
                    before adding this repository to your stack."
                    .to_string(),
            }
        } else {
            RiskAssessment {
                label: "LOW RISK".to_string(),
                tier: RiskTier::Safe,
                verdict_title: "Relatively Safe to Use".to_string(),
                verdict_body: "No major issues were detected. Standard precautions still apply: \
                    pin versions and review changes before upgrading."
                    .to_string(),
            }
        }
    }
}
