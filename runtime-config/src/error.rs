use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Required variables missing: {}", .keys.join(", "))]
    MissingConfiguration { keys: Vec<String> },

    #[error("Failed retrieving SSM parameters: {}", .names.join(", "))]
    ParameterRetrievalFailed { names: Vec<String> },

    #[error("Error received communicating with url: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Invalid value for '{name}': {reason}")]
    InvalidSetting { name: String, reason: String },

    #[error("Failed to serialize payload: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Failure raised by the parameter store client itself.
    #[error(transparent)]
    ParameterStore(BoxError),

    /// Failure raised by the HTTP client (timeout, DNS, connection refused).
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

impl ConfigError {
    pub fn missing_keys(&self) -> Option<&[String]> {
        match self {
            Self::MissingConfiguration { keys } => Some(keys),
            _ => None,
        }
    }

    pub fn invalid_parameters(&self) -> Option<&[String]> {
        match self {
            Self::ParameterRetrievalFailed { names } => Some(names),
            _ => None,
        }
    }
}
