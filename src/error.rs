//! Error types for the apimex CLI

use thiserror::Error;

/// Result type alias for apimex operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors talking to the API-Manager REST interface
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Authentication failed. Check --username/--password or the stage profile.")]
    Unauthorized,

    #[error("Access denied: {0}")]
    Forbidden(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("API-Manager returned status {status} for {path}")]
    Communication { status: u16, path: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API-Manager response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to API-Manager".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Errors assembling the export document
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Can't initialize API-Manager API state")]
    StateInit(#[source] Box<Error>),

    #[error("Can't read the original API definition from the API-Manager")]
    Definition(#[source] Box<Error>),

    #[error("API-Manager {0} doesn't support /proxies/<apiId>/applications")]
    UnsupportedVersion(String),
}

/// Configuration-related errors
#[derive(Debug, Error)]
#[allow(dead_code)]
pub enum ConfigError {
    #[error("Stage profile not found: {0}")]
    NotFound(String),

    #[error("Failed to parse stage profile: {0}")]
    Parse(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

/// Render an error with its full cause chain, outermost first.
pub fn error_chain(err: &dyn std::error::Error) -> String {
    let mut rendered = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        rendered.push_str(": ");
        rendered.push_str(&cause.to_string());
        source = cause.source();
    }
    rendered
}
