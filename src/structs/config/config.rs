use serde::{Deserialize, Serialize};
use crate::structs::config::scan_settings::ScanSettings;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanSettings,
}
