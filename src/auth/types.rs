// Authentication types

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Safety margin subtracted from a token's stated expiry so renewal happens
/// before the token actually lapses mid-request
pub const RENEWAL_SKEW_SECONDS: i64 = 60;

/// Authentication strategy for the Retail Express API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    /// Exchange the permanent API key for a short-lived bearer token via
    /// `auth/token` (default)
    #[default]
    TokenExchange,

    /// Use the API key directly as the bearer token, no exchange step and no
    /// expiry tracking
    StaticKey,
}

/// A cached bearer token with its renewal deadline
#[derive(Debug, Clone)]
pub struct Token {
    pub value: String,
    /// Stated expiry minus the renewal skew
    pub expires_at: DateTime<Utc>,
}

impl Token {
    /// Whether the token may still be sent
    pub fn is_valid(&self) -> bool {
        Utc::now() < self.expires_at
    }
}

/// Response body of the `auth/token` exchange endpoint
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub access_token: String,
    #[serde(default)]
    pub expires_on: String,
}
