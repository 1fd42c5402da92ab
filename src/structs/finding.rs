use serde::{Deserialize, Serialize};
use crate::enums::finding_category::FindingCategory;
use crate::enums::severity::Severity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub category: FindingCategory,
    pub severity: Severity,
    pub title: String,
    pub description: String,
}
