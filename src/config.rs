// Client configuration
// All parameters are supplied programmatically; the library reads no
// environment variables and persists nothing

use std::time::Duration;

use crate::auth::AuthMode;

/// Production host of the Retail Express API
pub const DEFAULT_BASE_URL: &str = "https://api.retailexpress.com.au";

/// API version segment prefixed to every endpoint path
pub const DEFAULT_API_VERSION: &str = "v2.1";

/// Request timeout applied to the built transport
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Construction parameters for [`RetailExpressClient`]
///
/// [`RetailExpressClient`]: crate::client::RetailExpressClient
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Permanent API key (for the `x-api-key` header)
    pub api_key: String,

    /// Base URL of the API
    pub base_url: String,

    /// API version segment for all endpoints
    pub api_version: String,

    /// Authentication strategy
    pub auth_mode: AuthMode,

    /// Request timeout for the built transport
    pub timeout: Duration,

    /// Pre-built transport used instead of constructing one. Lets tests point
    /// the client at a mock server with their own timeouts or middleware.
    pub http_client: Option<reqwest::Client>,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            auth_mode: AuthMode::default(),
            timeout: DEFAULT_TIMEOUT,
            http_client: None,
        }
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    pub fn auth_mode(mut self, auth_mode: AuthMode) -> Self {
        self.auth_mode = auth_mode;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn http_client(mut self, http_client: reqwest::Client) -> Self {
        self.http_client = Some(http_client);
        self
    }

    /// Root for all endpoint paths: `{base}/{version}` with trailing slashes
    /// trimmed off the base.
    pub(crate) fn endpoint_root(&self) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), self.api_version)
    }
}
