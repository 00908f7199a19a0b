//! Geoapify HTTP client.

use std::time::Duration;

use tracing::debug;

use crate::domain::{Route, RouteQuery};

use super::convert::route_from_response;
use super::error::GeoapifyError;
use super::types::RouteResponse;

/// Default routing endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.geoapify.com/v1/mapmatching";

/// Placeholder key shipped in sample configuration; treated as unset.
const PLACEHOLDER_API_KEY: &str = "API_KEY";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for the Geoapify client.
#[derive(Debug, Clone)]
pub struct GeoapifyConfig {
    /// API key, sent as the `apiKey` query parameter
    pub api_key: Option<String>,
    /// Full URL of the routing endpoint
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl GeoapifyConfig {
    /// Create a config with the given API key, if any.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom endpoint URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Whether a real API key is present.
    pub fn is_configured(&self) -> bool {
        self.usable_key().is_some()
    }

    fn usable_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty() && *key != PLACEHOLDER_API_KEY)
    }
}

/// Geoapify routing client.
#[derive(Debug, Clone)]
pub struct GeoapifyClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl GeoapifyClient {
    /// Create a new client. A missing key is only reported when a route is requested.
    pub fn new(config: GeoapifyConfig) -> Result<Self, GeoapifyError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        let api_key = config.usable_key().map(str::to_string);

        Ok(Self {
            http,
            base_url: config.base_url,
            api_key,
        })
    }

    /// Whether requests can be made at all.
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Look up the fastest driving route for `query`.
    pub async fn get_route(&self, query: &RouteQuery) -> Result<Route, GeoapifyError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            GeoapifyError::NotConfigured("GEOAPIFY_API_KEY is not set".to_string())
        })?;

        let waypoints = format!("{}|{}", query.start_location, query.end_location);
        debug!(%waypoints, "requesting route");

        let response = self
            .http
            .get(&self.base_url)
            .query(&[
                ("apiKey", api_key),
                ("waypoints", waypoints.as_str()),
                ("mode", "drive"),
            ])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeoapifyError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let parsed: RouteResponse =
            serde_json::from_str(&body).map_err(|e| GeoapifyError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        route_from_response(query, &parsed)
    }
}
