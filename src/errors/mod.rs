use std::fmt;
use std::error::Error as StdError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RepoVetError {
    // Target input errors
    EmptyTarget,
    InvalidTargetFormat {
        input: String,
    },

    // Configuration errors
    ConfigurationFileError {
        path: String,
        reason: String,
    },

    // System errors
    SystemError {
        operation: String,
        reason: String,
    },
}

impl RepoVetError {
    pub fn invalid_target(input: &str) -> Self {
        Self::InvalidTargetFormat {
            input: input.to_string(),
        }
    }

    pub fn config_file_error(path: &str, reason: &str) -> Self {
        Self::ConfigurationFileError {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn system_error(operation: &str, reason: &str) -> Self {
        Self::SystemError {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::EmptyTarget => true,
            Self::InvalidTargetFormat { .. } => true,
            Self::ConfigurationFileError { .. } => true,
            Self::SystemError { .. } => false,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::EmptyTarget => "Please enter a repository URL or owner/repo".to_string(),
            Self::InvalidTargetFormat { .. } => {
                "Invalid format. Use: owner/repo or https://github.com/owner/repo".to_string()
            }
            Self::ConfigurationFileError { path, reason } => {
                format!("Configuration file error at '{}': {}\n💡 Check file permissions and syntax", path, reason)
            }
            Self::SystemError { operation, reason } => {
                format!("System error during {}: {}", operation, reason)
            }
        }
    }
}

impl fmt::Display for RepoVetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl StdError for RepoVetError {}

/// Result type alias for repovet operations
pub type RepoVetResult<T> = Result<T, RepoVetError>;

impl From<std::io::Error> for RepoVetError {
    fn from(error: std::io::Error) -> Self {
        RepoVetError::SystemError {
            operation: "I/O operation".to_string(),
            reason: error.to_string(),
        }
    }
}
