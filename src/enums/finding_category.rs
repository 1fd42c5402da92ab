use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FindingCategory {
    Security,
    Privacy,
    Maintenance,
    Trust,
    License,
}

impl FindingCategory {
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Security => "🔒",
            Self::Privacy => "🕵️",
            Self::Maintenance => "🔧",
            Self::Trust => "🤝",
            Self::License => "📜",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Security => "Security",
            Self::Privacy => "Privacy",
            Self::Maintenance => "Maintenance",
            Self::Trust => "Trust",
            Self::License => "License",
        }
    }
}
