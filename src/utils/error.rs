use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("{source_name} responded with HTTP {status} for {url}")]
    UnexpectedStatus {
        source_name: String,
        status: u16,
        url: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Background task failed: {message}")]
    TaskError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Configuration,
    Data,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ReportError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ReportError::ApiError(_) | ReportError::UnexpectedStatus { .. } => {
                ErrorCategory::Network
            }
            ReportError::ConfigError { .. }
            | ReportError::MissingConfigError { .. }
            | ReportError::InvalidConfigValueError { .. }
            | ReportError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            ReportError::SerializationError(_) => ErrorCategory::Data,
            ReportError::IoError(_) | ReportError::TaskError { .. } => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Data => ErrorSeverity::Medium,
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for a run that failed with this error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ReportError::ApiError(e) if e.is_timeout() => {
                "The vacancy service did not answer in time".to_string()
            }
            ReportError::ApiError(e) if e.is_decode() => {
                "The vacancy service returned a response that could not be read".to_string()
            }
            ReportError::ApiError(_) => "Could not reach the vacancy service".to_string(),
            ReportError::UnexpectedStatus {
                source_name,
                status,
                ..
            } => format!("{} rejected the search request (HTTP {})", source_name, status),
            ReportError::MissingConfigError { field } => {
                format!("Required setting '{}' is not configured", field)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ReportError::UnexpectedStatus { status: 401 | 403, .. } => {
                "Check the API key (TOKEN_SUPERJOB) and the User-Agent setting".to_string()
            }
            ReportError::UnexpectedStatus { status: 429, .. } => {
                "The service is rate limiting requests, lower --concurrency and try again later"
                    .to_string()
            }
            ReportError::MissingConfigError { field } if field == "superjob.api_key" => {
                "Set TOKEN_SUPERJOB in the environment or in a .env file".to_string()
            }
            _ => match self.category() {
                ErrorCategory::Network => {
                    "Check the network connection and the configured endpoints".to_string()
                }
                ErrorCategory::Configuration => {
                    "Fix the configuration file or command line arguments".to_string()
                }
                ErrorCategory::Data => "The service payload changed shape, check the endpoint"
                    .to_string(),
                ErrorCategory::System => "Re-run with --verbose for details".to_string(),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
