use std::fs;
use std::path::Path;
use crate::errors::{RepoVetError, RepoVetResult};
use crate::structs::config::config::Config;

pub struct ConfigManager;

impl ConfigManager {
    /// Loads `~/repovet/config.toml` when present, defaults otherwise.
    pub fn load() -> RepoVetResult<Config> {
        match dirs::home_dir() {
            Some(home) => {
                let path = home.join("repovet/config.toml");
                if path.exists() {
                    log::info!("📋 Loading config from: {}", path.display());
                }
                Self::load_from(&path)
            }
            None => Ok(Config::default()),
        }
    }

    /// Loads settings from an explicit path; a missing file yields defaults.
    pub fn load_from(path: &Path) -> RepoVetResult<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| RepoVetError::config_file_error(&path.display().to_string(), e.message()))
    }
}
