// Credential exchange against the auth/token endpoint

use chrono::{DateTime, Duration, Utc};
use reqwest::Client;

use super::types::{Token, TokenResponse, RENEWAL_SKEW_SECONDS};
use crate::error::ApiError;

/// Exchange the permanent API key for a short-lived bearer token.
///
/// Expects a JSON body `{ "access_token": ..., "expires_on": ... }` with an
/// ISO-8601 expiry. The returned token carries `expires_on` minus the renewal
/// skew as its deadline.
pub async fn exchange_api_key(
    client: &Client,
    auth_url: &str,
    api_key: &str,
) -> Result<Token, ApiError> {
    tracing::debug!(url = %auth_url, "Exchanging API key for access token");

    let response = client
        .get(auth_url)
        .header("x-api-key", api_key)
        .header("Cache-Control", "no-cache")
        .send()
        .await
        .map_err(|e| ApiError::Authentication {
            message: e.to_string(),
            body: None,
        })?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        tracing::error!(
            status = status.as_u16(),
            body = %body,
            "Token exchange failed with error status"
        );
        return Err(ApiError::Authentication {
            message: if body.is_empty() {
                format!("HTTP status {}", status.as_u16())
            } else {
                body.clone()
            },
            body: (!body.is_empty()).then_some(body),
        });
    }

    let text = response.text().await.map_err(|e| ApiError::Authentication {
        message: e.to_string(),
        body: None,
    })?;

    let data: TokenResponse =
        serde_json::from_str(&text).map_err(|e| ApiError::Authentication {
            message: format!("invalid token response from API: {}", e),
            body: Some(text.clone()),
        })?;

    if data.access_token.is_empty() || data.expires_on.is_empty() {
        return Err(ApiError::Authentication {
            message: "invalid token response from API".to_string(),
            body: Some(text),
        });
    }

    let expires_on: DateTime<Utc> =
        data.expires_on
            .parse()
            .map_err(|e| ApiError::Authentication {
                message: format!("invalid expires_on in token response: {}", e),
                body: Some(text.clone()),
            })?;

    let expires_at = expires_on - Duration::seconds(RENEWAL_SKEW_SECONDS);

    tracing::info!(
        expires = %expires_at.to_rfc3339(),
        "Access token issued"
    );

    Ok(Token {
        value: data.access_token,
        expires_at,
    })
}
