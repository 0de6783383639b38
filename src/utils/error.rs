use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Request to {source_name} failed: {error}")]
    Transport {
        source_name: String,
        #[source]
        error: reqwest::Error,
    },

    #[error("{source_name} returned HTTP {status}")]
    HttpStatus { source_name: String, status: u16 },

    #[error("No usable fields in {source_name} response: {message}")]
    Extraction {
        source_name: String,
        message: String,
    },

    #[error("Unable to fetch real-time data from vessel tracking services")]
    SourcesExhausted,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration field '{field}' is invalid: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Unknown source '{name}'")]
    UnknownSource { name: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Upstream,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl TrackerError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            TrackerError::Transport { .. } | TrackerError::HttpStatus { .. } => {
                ErrorCategory::Network
            }
            TrackerError::Extraction { .. } | TrackerError::SourcesExhausted => {
                ErrorCategory::Upstream
            }
            TrackerError::ConfigError { .. }
            | TrackerError::ConfigValidationError { .. }
            | TrackerError::InvalidConfigValueError { .. }
            | TrackerError::MissingConfigError { .. }
            | TrackerError::UnknownSource { .. } => ErrorCategory::Configuration,
            TrackerError::IoError(_) | TrackerError::SerializationError(_) => {
                ErrorCategory::System
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            TrackerError::Extraction { .. } => ErrorSeverity::Low,
            TrackerError::Transport { .. } | TrackerError::HttpStatus { .. } => {
                ErrorSeverity::Medium
            }
            TrackerError::SourcesExhausted => ErrorSeverity::Medium,
            TrackerError::ConfigError { .. }
            | TrackerError::ConfigValidationError { .. }
            | TrackerError::InvalidConfigValueError { .. }
            | TrackerError::MissingConfigError { .. }
            | TrackerError::UnknownSource { .. } => ErrorSeverity::High,
            TrackerError::IoError(_) | TrackerError::SerializationError(_) => {
                ErrorSeverity::Critical
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check network connectivity and try again in a few minutes",
            ErrorCategory::Upstream => {
                "The ship's AIS transponder may be offline or the tracking sites changed their pages"
            }
            ErrorCategory::Configuration => "Check the tracker configuration file and API keys",
            ErrorCategory::System => "Check file permissions and available disk space",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            TrackerError::SourcesExhausted => self.to_string(),
            TrackerError::UnknownSource { name } => format!(
                "'{}' is not a known source (expected one of: cruisemapper, vesselfinder_api, vesselfinder_html, marinetraffic)",
                name
            ),
            other => match other.category() {
                ErrorCategory::Configuration => format!("Configuration problem: {}", other),
                ErrorCategory::Network => format!("Vessel tracking service unreachable: {}", other),
                _ => other.to_string(),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, TrackerError>;
