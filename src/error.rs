//! Domain error types for mydropdown
//!
//! Provides structured error types for different domains:
//! - `DropdownError` for value holders that fail validation
//! - `ConfigError` for loading the configuration file
//! - `AppError` as the top-level error type

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for mydropdown
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("{0}")]
    Other(String),
}

/// Errors related to a dropdown's value holder
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DropdownError {
    #[error("Dropdown has no options")]
    NoOptions,

    #[error("Selected value '{0}' is not one of the options")]
    UnknownSelection(String),
}

/// Errors related to the configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Animation stiffness must be a positive number, got {0}")]
    InvalidStiffness(f32),

    #[error("Dropdown #{index}: {source}")]
    InvalidDropdown {
        index: usize,
        #[source]
        source: DropdownError,
    },
}

/// Result type alias for AppError
pub type Result<T> = std::result::Result<T, AppError>;

/// Result type alias for ConfigError
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

impl From<String> for AppError {
    fn from(msg: String) -> Self {
        AppError::Other(msg)
    }
}

impl From<&str> for AppError {
    fn from(msg: &str) -> Self {
        AppError::Other(msg.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_dropdown_message_names_index() {
        let err = ConfigError::InvalidDropdown {
            index: 2,
            source: DropdownError::UnknownSelection("Blue".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "Dropdown #2: Selected value 'Blue' is not one of the options"
        );
    }

    #[test]
    fn test_config_error_wraps_into_app_error() {
        let err: AppError = ConfigError::InvalidDropdown {
            index: 0,
            source: DropdownError::NoOptions,
        }
        .into();
        assert!(matches!(err, AppError::Config(_)));
        assert!(err.to_string().starts_with("Config error:"));
    }
}
