//! Error types for the trip API client.
//!
//! # Design
//! The `Display` text of every `NetworkError` variant is the message shown to
//! the user, so callers can surface `err.to_string()` directly. Payloads that
//! carry low-level detail (`Decoding`, `Encoding`) keep it for logging but do
//! not leak it into the message.

use thiserror::Error;

/// Errors returned by `ApiClient`, every `Transport`, and `TripService`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkError {
    /// The base URL, path, or query parameters did not form a valid URL.
    #[error("Invalid URL. Please try again.")]
    InvalidUrl,

    /// The transport failed before an HTTP response arrived (connectivity,
    /// timeout, TLS).
    #[error("Network request failed: {0}")]
    RequestFailed(String),

    /// The response body did not match the expected JSON shape.
    #[error("Failed to process server response.")]
    Decoding(String),

    /// The server answered with a status outside 200..=299.
    #[error("Server error (code: {0}). Please try again later.")]
    ServerError(u16),

    /// A successful response carried no body where a value was expected.
    #[error("No data received from server.")]
    NoData,

    /// The request body could not be serialized to JSON.
    #[error("Failed to encode request.")]
    Encoding(String),

    #[error("An unexpected error occurred.")]
    Unknown,
}

impl NetworkError {
    /// The HTTP status for `ServerError`, `None` otherwise.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            NetworkError::ServerError(status) => Some(*status),
            _ => None,
        }
    }

    /// Whether repeating the same request could plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            NetworkError::RequestFailed(_) => true,
            NetworkError::ServerError(status) => *status >= 500,
            _ => false,
        }
    }
}
