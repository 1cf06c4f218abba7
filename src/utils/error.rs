use thiserror::Error;

#[derive(Error, Debug)]
pub enum DelegationError {
    #[error("Delegate failed: {message}")]
    Delegate { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl DelegationError {
    pub fn delegate(message: impl Into<String>) -> Self {
        Self::Delegate {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// True when the failure came from a delegate callback rather than the holder or its setup.
    pub fn is_delegate_failure(&self) -> bool {
        matches!(self, Self::Delegate { .. })
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::Delegate { message } => format!("A delegate rejected the notification: {}", message),
            Self::IoError(e) => format!("Could not read a file: {}", e),
            Self::TomlError(e) => format!("The configuration file is not valid TOML: {}", e),
            Self::SerializationError(e) => format!("Could not serialize the report: {}", e),
            Self::ConfigError { message } => format!("Configuration problem: {}", message),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, DelegationError>;
