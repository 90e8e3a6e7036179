//! Error types and handling for the `AIPackr` engine

use thiserror::Error;

/// Main error type for the `AIPackr` engine
#[derive(Error, Debug)]
pub enum PackingError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// JSON encoding or decoding errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

impl PackingError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            PackingError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            PackingError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            PackingError::Io { .. } => {
                "File operation failed. Please check the path and file permissions.".to_string()
            }
            PackingError::Serialization { .. } => {
                "Could not read the input. Please check that it is valid JSON.".to_string()
            }
        }
    }
}
