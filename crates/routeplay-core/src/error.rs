//! Error types for routeplay

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouteplayError {
    // Ingestion errors
    #[error("Track log is not valid GPX: {reason}")]
    MalformedTrackLog { reason: String },

    // Configuration errors
    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RouteplayError>;
