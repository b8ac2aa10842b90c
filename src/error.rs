// Error handling module
// Defines the error taxonomy surfaced to embedding applications

use thiserror::Error;

/// Errors that can occur while talking to the Retail Express API
#[derive(Error, Debug)]
pub enum ApiError {
    /// Credential exchange with the auth endpoint failed
    #[error("API authentication request failed: {message}")]
    Authentication {
        message: String,
        /// Upstream response body, when one was received
        body: Option<String>,
    },

    /// A response body could not be parsed as JSON
    #[error("Invalid JSON response from API: {method} {path}")]
    InvalidResponse {
        method: String,
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// A resource-endpoint call failed at the transport layer
    #[error("API request failed: {}. URI: {path}", .body.as_deref().unwrap_or("no response"))]
    Request {
        method: String,
        path: String,
        /// HTTP status when the server answered, `None` on a network failure
        status: Option<u16>,
        /// Upstream response body, or the transport error message when no
        /// response arrived
        body: Option<String>,
    },

    /// The client could not be constructed
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
