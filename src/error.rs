//! Error types for card_sync

use std::fmt;

/// Unified error type for remote reads and lookup fetches
#[derive(Debug)]
pub enum SyncError {
    /// HTTP request failed (network error, timeout, etc.)
    Network(reqwest::Error),
    /// Failed to parse JSON response
    Parse(serde_json::Error),
    /// HTTP error status code
    HttpStatus(reqwest::StatusCode),
    /// Remote source returned a structured error response
    Remote { code: String, details: String },
}

impl fmt::Display for SyncError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncError::Network(e) => write!(f, "Network error: {}", e),
            SyncError::Parse(e) => write!(f, "Parse error: {}", e),
            SyncError::HttpStatus(status) => write!(f, "HTTP error: {}", status),
            SyncError::Remote { code, details } => write!(f, "{}: {}", code, details),
        }
    }
}

impl std::error::Error for SyncError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SyncError::Network(e) => Some(e),
            SyncError::Parse(e) => Some(e),
            SyncError::HttpStatus(_) => None,
            SyncError::Remote { .. } => None,
        }
    }
}

impl From<reqwest::Error> for SyncError {
    fn from(err: reqwest::Error) -> Self {
        SyncError::Network(err)
    }
}

impl From<serde_json::Error> for SyncError {
    fn from(err: serde_json::Error) -> Self {
        SyncError::Parse(err)
    }
}

/// Result alias for card_sync operations
pub type SyncResult<T> = std::result::Result<T, SyncError>;
