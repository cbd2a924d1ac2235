//! Error types for catalog operations.

use thiserror::Error;

/// Errors that can occur while talking to the scanning backend.
///
/// Transport problems and decode problems are separate variants so
/// callers can tell "the backend is unreachable" apart from "the backend
/// answered something we don't understand".
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Backend replied with a non-success status
    #[error("API error: status {status}, {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message, taken from the backend's error body when present
        message: String,
    },

    /// Response body was not the expected JSON shape
    #[error("failed to decode response: {message}")]
    Decode {
        /// Decode failure details
        message: String,
    },

    /// Network error (connection, DNS, timeout)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
