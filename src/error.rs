//! Error types for the mix_colors library

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for mix_colors operations
pub type Result<T> = std::result::Result<T, ColorError>;

/// Error types for color parsing, input loading and aggregation
#[derive(Error, Debug)]
pub enum ColorError {
    /// Input string is neither `rrggbbaa` hex nor `r,g,b,a` decimal
    #[error("non-valid color: {input:?}")]
    InvalidColorFormat { input: String },

    /// A component of an already validated color failed to parse
    #[error("Invalid {component} component: {value:?}")]
    InvalidComponent { component: &'static str, value: String },

    /// Color file could not be opened or read
    #[error("Color file unavailable: {}", .path.display())]
    FileUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No valid color was left to aggregate
    #[error("No valid colors to aggregate")]
    EmptyInput,

    /// Configuration file could not be loaded or saved
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ColorError {
    /// Create an invalid format error for the given input
    pub fn invalid_format(input: impl Into<String>) -> Self {
        Self::InvalidColorFormat {
            input: input.into(),
        }
    }

    /// Create a file error with context
    pub fn file_unavailable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileUnavailable {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration error with context
    pub fn config<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Check if the pipeline may skip this error and keep going
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ColorError::InvalidColorFormat { .. } | ColorError::FileUnavailable { .. }
        )
    }

    /// Get user-friendly error description for terminal display
    pub fn user_message(&self) -> String {
        match self {
            ColorError::InvalidColorFormat { input } => format!(
                "Ignoring {input:?}: use 8 lowercase hex digits (ff0000ff) or four decimals (255,0,0,255)."
            ),
            ColorError::FileUnavailable { path, .. } => {
                format!("Could not read {}, continuing without it.", path.display())
            }
            ColorError::EmptyInput => {
                "No valid color was given. Pass at least one color such as 255,0,0,255.".to_string()
            }
            ColorError::Config { .. } => {
                "Could not use the configuration file. Please check that it is valid JSON.".to_string()
            }
            ColorError::InvalidComponent { .. } => "Color parsing failed.".to_string(),
        }
    }
}
