use thiserror::Error;

/// Errors raised while building a request
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// The URL argument is required and was empty
    #[error("request(): 1st parameter (url) is required")]
    MissingUrl,
}

/// Errors raised by element identity generation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdError {
    /// Every candidate collided with an id already in the document.
    /// Only reachable when a retry cap was configured.
    #[error("could not find a free element id after {attempts} attempts")]
    Exhausted { attempts: usize },
}

/// Errors that can occur while reading or writing settings
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse settings: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to access settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid settings: {0}")]
    Invalid(String),
}

/// Result type for settings operations
pub type ConfigResult<T> = Result<T, ConfigError>;
