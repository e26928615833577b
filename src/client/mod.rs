//! HTTP transport client for the Commerce API
//!
//! [`CommerceClient`] holds the reusable HTTP transport, the API credentials,
//! and the target base URL. Every endpoint operation funnels through the same
//! protocol: build the request, attach the four fixed headers, execute,
//! classify the status, then decode either the success payload or the error
//! envelope.
//!
//! # Examples
//!
//! ```no_run
//! use rust_commerce::{ClientConfig, CommerceClient, Credentials};
//!
//! # async fn example() -> rust_commerce::Result<()> {
//! let credentials = Credentials::from_default_env()?;
//! let client = CommerceClient::new(credentials.clone())?;
//!
//! // Or point at a sandbox, configured once at construction:
//! let sandbox = CommerceClient::with_config(
//!     credentials,
//!     ClientConfig::new().with_base_url("https://sandbox.example.com"),
//! )?;
//! # let _ = (client, sandbox);
//! # Ok(())
//! # }
//! ```

use reqwest::{header, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

use crate::credentials::Credentials;
use crate::types::ChargeError;
use crate::{CommerceError, Result};


/// Production Commerce API origin
pub const DEFAULT_BASE_URL: &str = "https://api.commerce.coinbase.com";

/// Header carrying the API key
pub const API_KEY_HEADER: &str = "X-CC-Api-Key";
/// Header pinning the API version
pub const API_VERSION_HEADER: &str = "X-CC-Version";
/// The API version this client speaks
pub const API_VERSION: &str = "2018-03-22";

/// Client configuration
///
/// Built once, validated at construction; the client holds no mutable
/// configuration afterwards, so separate production and sandbox clients stay
/// independent.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the Commerce API
    pub base_url: String,
    /// Request timeout applied to every call
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    /// Create a config targeting the production API
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }

    /// Override the base URL (for sandbox or mock endpoints)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        self.base_url = base_url;
        self
    }

    /// Set the per-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| CommerceError::config(format!("Invalid base URL: {}", e)))?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(CommerceError::config(
                "Base URL must start with http:// or https://",
            ));
        }

        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the Commerce REST API
///
/// Cheap to clone and safe for concurrent use once constructed; no shared
/// state is mutated during normal operation.
#[derive(Debug, Clone)]
pub struct CommerceClient {
    /// Reusable HTTP transport
    http: reqwest::Client,
    /// API credentials attached to every request
    credentials: Credentials,
    /// Target API origin, fixed at construction
    base_url: String,
}

impl CommerceClient {
    /// Create a client targeting the production API
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a client with explicit configuration
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let http = builder
            .build()
            .map_err(|e| CommerceError::config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            credentials,
            base_url: config.base_url,
        })
    }

    /// The base URL this client targets
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Attach the four fixed headers every Commerce call carries
    fn apply_headers(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header(API_KEY_HEADER, self.credentials.api_key())
            .header(API_VERSION_HEADER, API_VERSION)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ACCEPT, "application/json")
    }

    /// Build a request against `{base_url}{path}` with headers applied
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%method, %url, "building Commerce API request");
        self.apply_headers(self.http.request(method, url))
    }

    /// Execute a request and decode the response
    ///
    /// The body is read to completion on every path, so the connection is
    /// always released. 2xx decodes into `T`; anything else decodes the error
    /// envelope into [`CommerceError::Api`]. A body that fails to decode
    /// (including an empty 2xx body) surfaces as a local JSON error, never as
    /// an API error and never as a silent null result.
    pub(crate) async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::debug!(status = %status, "Commerce API returned an error response");
            let envelope: ChargeError = serde_json::from_str(&body)?;
            return Err(CommerceError::Api(envelope));
        }

        Ok(serde_json::from_str(&body)?)
    }
}
