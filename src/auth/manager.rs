// Token lifecycle management

use reqwest::Client;
use tokio::sync::RwLock;

use super::exchange;
use super::types::{AuthMode, Token};
use crate::error::ApiError;

/// Owns the authentication credential and the cached bearer token.
///
/// At most one valid token exists at a time. The cache is replaced wholesale
/// on renewal and never persisted outside process memory.
pub struct TokenManager {
    /// Permanent API key, sent as `x-api-key` and exchanged for tokens
    api_key: String,

    /// Full URL of the `auth/token` exchange endpoint
    auth_url: String,

    /// Authentication strategy
    mode: AuthMode,

    /// HTTP client for exchange requests
    client: Client,

    /// Cached token, `None` until the first successful exchange
    token: RwLock<Option<Token>>,
}

impl TokenManager {
    pub fn new(client: Client, mode: AuthMode, api_key: String, auth_url: String) -> Self {
        Self {
            api_key,
            auth_url,
            mode,
            client,
            token: RwLock::new(None),
        }
    }

    /// Get the bearer value for the next outbound request.
    ///
    /// Static-key mode returns the API key as-is. Token-exchange mode returns
    /// the cached token while it is valid, and performs exactly one fresh
    /// exchange otherwise. Renewal is serialized under the write lock, so
    /// concurrent callers that raced on an expired token share one exchange
    /// rather than issuing N.
    ///
    /// An exchange failure surfaces immediately and leaves the cache unset;
    /// there is no retry and no circuit breaker.
    pub async fn bearer_token(&self) -> Result<String, ApiError> {
        if self.mode == AuthMode::StaticKey {
            return Ok(self.api_key.clone());
        }

        {
            let token = self.token.read().await;
            if let Some(t) = token.as_ref() {
                if t.is_valid() {
                    tracing::debug!("Reusing cached access token");
                    return Ok(t.value.clone());
                }
            }
        }

        let mut slot = self.token.write().await;

        // Re-check under the write lock: another caller may have renewed
        // while this one waited.
        if let Some(t) = slot.as_ref() {
            if t.is_valid() {
                return Ok(t.value.clone());
            }
        }

        let token = exchange::exchange_api_key(&self.client, &self.auth_url, &self.api_key).await?;
        let value = token.value.clone();
        *slot = Some(token);
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn manager(mode: AuthMode) -> TokenManager {
        TokenManager::new(
            Client::new(),
            mode,
            "K".to_string(),
            // Unroutable on purpose: these tests must not touch the network
            "http://127.0.0.1:1/v2.1/auth/token".to_string(),
        )
    }

    #[tokio::test]
    async fn test_static_key_mode_returns_api_key_without_exchange() {
        let manager = manager(AuthMode::StaticKey);
        assert_eq!(manager.bearer_token().await.unwrap(), "K");
    }

    #[tokio::test]
    async fn test_valid_cached_token_is_returned_without_exchange() {
        let manager = manager(AuthMode::TokenExchange);
        {
            let mut slot = manager.token.write().await;
            *slot = Some(Token {
                value: "T1".to_string(),
                expires_at: Utc::now() + Duration::seconds(600),
            });
        }
        assert_eq!(manager.bearer_token().await.unwrap(), "T1");
    }

    #[tokio::test]
    async fn test_expired_token_triggers_exchange() {
        let manager = manager(AuthMode::TokenExchange);
        {
            let mut slot = manager.token.write().await;
            *slot = Some(Token {
                value: "T1".to_string(),
                expires_at: Utc::now() - Duration::seconds(1),
            });
        }
        // The exchange endpoint is unreachable, so renewal must fail rather
        // than hand back the expired token.
        let err = manager.bearer_token().await.unwrap_err();
        assert!(matches!(err, ApiError::Authentication { .. }));
    }
}
