// Request dispatch for the Retail Express API
// Builds authenticated JSON requests, delegates to reqwest, and normalizes
// transport and decode failures into the ApiError taxonomy

use reqwest::{Client, Method};
use serde_json::Value;

use crate::auth::TokenManager;
use crate::config::ClientConfig;
use crate::error::{ApiError, Result};

/// Pagination cursor for list endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub page_number: u32,
    pub page_size: u32,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            page_number: 1,
            page_size: 100,
        }
    }
}

impl Page {
    pub fn new(page_number: u32, page_size: u32) -> Self {
        Self {
            page_number,
            page_size,
        }
    }

    fn query(&self) -> [(&'static str, String); 2] {
        [
            ("page_number", self.page_number.to_string()),
            ("page_size", self.page_size.to_string()),
        ]
    }
}

/// Async client for the Retail Express API v2.1
///
/// Every request carries `Authorization: Bearer {token}` and the raw
/// `x-api-key` header. Errors propagate to the caller as-is: there is no
/// retry, no backoff, and no distinction between transient and permanent
/// failures. Callers wanting retries layer them above this client.
pub struct RetailExpressClient {
    /// Shared HTTP transport
    client: Client,

    /// Token lifecycle, one manager per client instance
    auth: TokenManager,

    /// Permanent API key, sent on every request
    api_key: String,

    /// `{base}/{version}` prefix for all endpoint paths
    endpoint_root: String,
}

impl RetailExpressClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = match config.http_client.clone() {
            Some(client) => client,
            None => Client::builder()
                .timeout(config.timeout)
                .build()
                .map_err(|e| ApiError::Config(format!("failed to create HTTP client: {}", e)))?,
        };

        let endpoint_root = config.endpoint_root();
        let auth = TokenManager::new(
            client.clone(),
            config.auth_mode,
            config.api_key.clone(),
            format!("{}/auth/token", endpoint_root),
        );

        Ok(Self {
            client,
            auth,
            api_key: config.api_key,
            endpoint_root,
        })
    }

    /// Generic dispatch primitive that all resource methods go through.
    ///
    /// Returns the decoded JSON body exactly as the API sent it; no schema
    /// validation is applied.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        query: Option<&[(&str, String)]>,
    ) -> Result<Value> {
        let token = self.auth.bearer_token().await?;
        let url = format!("{}/{}", self.endpoint_root, path);

        tracing::debug!(method = %method, path = %path, "Dispatching API request");

        let mut builder = self
            .client
            .request(method.clone(), &url)
            .bearer_auth(&token)
            .header("x-api-key", &self.api_key)
            .header(reqwest::header::ACCEPT, "application/json");

        if let Some(body) = body {
            builder = builder.json(body);
        }
        if let Some(query) = query {
            builder = builder.query(query);
        }

        let response = builder.send().await.map_err(|e| ApiError::Request {
            method: method.to_string(),
            path: path.to_string(),
            status: None,
            body: Some(e.to_string()),
        })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            tracing::warn!(
                status = status.as_u16(),
                method = %method,
                path = %path,
                "API request failed with error status"
            );
            return Err(ApiError::Request {
                method: method.to_string(),
                path: path.to_string(),
                status: Some(status.as_u16()),
                body: (!text.is_empty()).then_some(text),
            });
        }

        let text = response.text().await.map_err(|e| ApiError::Request {
            method: method.to_string(),
            path: path.to_string(),
            status: Some(status.as_u16()),
            body: Some(e.to_string()),
        })?;

        serde_json::from_str(&text).map_err(|source| ApiError::InvalidResponse {
            method: method.to_string(),
            path: path.to_string(),
            source,
        })
    }

    // ---------- Customer methods ----------

    pub async fn customers(&self, page: Page) -> Result<Value> {
        self.request(Method::GET, "customers", None, Some(&page.query()))
            .await
    }

    pub async fn customer(&self, id: u64) -> Result<Value> {
        self.request(Method::GET, &format!("customers/{}", id), None, None)
            .await
    }

    pub async fn create_customer(&self, payload: &Value) -> Result<Value> {
        self.request(Method::POST, "customers", Some(payload), None)
            .await
    }

    pub async fn update_customer(&self, id: u64, payload: &Value) -> Result<Value> {
        self.request(Method::PUT, &format!("customers/{}", id), Some(payload), None)
            .await
    }

    // ---------- Product methods ----------

    pub async fn products(&self, page: Page) -> Result<Value> {
        self.request(Method::GET, "products", None, Some(&page.query()))
            .await
    }

    pub async fn product(&self, id: u64) -> Result<Value> {
        self.request(Method::GET, &format!("products/{}", id), None, None)
            .await
    }

    // ---------- Order methods ----------

    pub async fn orders(&self, page: Page) -> Result<Value> {
        self.request(Method::GET, "orders", None, Some(&page.query()))
            .await
    }

    pub async fn order(&self, id: u64) -> Result<Value> {
        self.request(Method::GET, &format!("orders/{}", id), None, None)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_defaults() {
        let page = Page::default();
        assert_eq!(page.page_number, 1);
        assert_eq!(page.page_size, 100);
    }

    #[test]
    fn test_page_query_mapping() {
        let query = Page::new(2, 50).query();
        assert_eq!(query[0], ("page_number", "2".to_string()));
        assert_eq!(query[1], ("page_size", "50".to_string()));
    }
}
