use serde::{Deserialize, Serialize};

/// Display tier derived from the overall risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskTier {
    Safe,
    Warning,
    Critical,
}

impl RiskTier {
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Safe => "🟢",
            Self::Warning => "🟡",
            Self::Critical => "🔴",
        }
    }
}
