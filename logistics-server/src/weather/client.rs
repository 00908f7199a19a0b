//! NWS alerts HTTP client.

use std::str::FromStr;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use tracing::{debug, warn};

use crate::domain::WeatherAlertState;

use super::error::WeatherError;
use super::types::AlertCollection;

/// Default base URL for the NWS API.
pub const DEFAULT_BASE_URL: &str = "https://api.weather.gov";

/// Default jurisdiction.
pub const DEFAULT_AREA: &str = "NJ";

/// NWS rejects requests without an identifying User-Agent.
pub const DEFAULT_USER_AGENT: &str = "logistics-server (contact@example.com)";

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// What [`WeatherClient::fetch_weather_alerts`] does when the feed fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WeatherFailureMode {
    /// Return the error to the caller
    #[default]
    Error,
    /// Log it and report no hazards
    Silent,
}

/// Unknown failure mode name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown failure mode {0:?} (expected \"error\" or \"silent\")")]
pub struct UnknownFailureMode(String);

impl FromStr for WeatherFailureMode {
    type Err = UnknownFailureMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "error" => Ok(WeatherFailureMode::Error),
            "silent" => Ok(WeatherFailureMode::Silent),
            _ => Err(UnknownFailureMode(s.to_string())),
        }
    }
}

/// Configuration for the weather client.
#[derive(Debug, Clone)]
pub struct WeatherConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Jurisdiction code appended to `/alerts/active/`
    pub area: String,
    /// User-Agent header value
    pub user_agent: String,
    /// Behaviour on fetch failure
    pub failure_mode: WeatherFailureMode,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            area: DEFAULT_AREA.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            failure_mode: WeatherFailureMode::default(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl WeatherConfig {
    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_area(mut self, area: impl Into<String>) -> Self {
        self.area = area.into();
        self
    }

    pub fn with_user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    pub fn with_failure_mode(mut self, mode: WeatherFailureMode) -> Self {
        self.failure_mode = mode;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Client for the NWS active alerts feed.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: reqwest::Client,
    url: String,
    failure_mode: WeatherFailureMode,
}

impl WeatherClient {
    /// Create a new weather client.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let mut headers = HeaderMap::new();
        let agent = HeaderValue::from_str(&config.user_agent)
            .map_err(|_| WeatherError::Config("invalid User-Agent value".to_string()))?;
        headers.insert(USER_AGENT, agent);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        let url = format!(
            "{}/alerts/active/{}",
            config.base_url.trim_end_matches('/'),
            config.area
        );

        Ok(Self {
            http,
            url,
            failure_mode: config.failure_mode,
        })
    }

    /// Current hazard flags, applying the configured failure mode.
    pub async fn fetch_weather_alerts(&self) -> Result<WeatherAlertState, WeatherError> {
        match self.fetch_alert_state().await {
            Ok(state) => Ok(state),
            Err(e) if self.failure_mode == WeatherFailureMode::Silent => {
                warn!(error = %e, "weather alerts unavailable, reporting no hazards");
                Ok(WeatherAlertState::default())
            }
            Err(e) => Err(e),
        }
    }

    /// Current hazard flags, failing on any fetch error.
    pub async fn fetch_alert_state(&self) -> Result<WeatherAlertState, WeatherError> {
        let alerts = self.fetch_alerts().await?;
        Ok(WeatherAlertState::from_events(alerts.events()))
    }

    /// Fetch the raw active alerts feed.
    pub async fn fetch_alerts(&self) -> Result<AlertCollection, WeatherError> {
        debug!(url = %self.url, "fetching weather alerts");

        let response = self.http.get(&self.url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(WeatherError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| WeatherError::Json {
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::Router;
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::get;

    use super::*;
    use crate::test_support::{dead_upstream, spawn_upstream};

    async fn client_serving(body: &'static str, mode: WeatherFailureMode) -> WeatherClient {
        let router = Router::new().route("/alerts/active/NJ", get(move || async move { body }));
        let base = spawn_upstream(router).await;
        WeatherClient::new(
            WeatherConfig::default()
                .with_base_url(base)
                .with_failure_mode(mode),
        )
        .unwrap()
    }

    #[test]
    fn config_defaults() {
        let config = WeatherConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.area, "NJ");
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(config.failure_mode, WeatherFailureMode::Error);
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn failure_mode_from_str() {
        assert_eq!(
            "error".parse::<WeatherFailureMode>(),
            Ok(WeatherFailureMode::Error)
        );
        assert_eq!(
            " Silent ".parse::<WeatherFailureMode>(),
            Ok(WeatherFailureMode::Silent)
        );
        let err = "loud".parse::<WeatherFailureMode>().unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"unknown failure mode "loud" (expected "error" or "silent")"#
        );
    }

    #[tokio::test]
    async fn winter_storm_sets_snow_only() {
        let client = client_serving(
            r#"{"features":[{"properties":{"event":"Winter Storm Warning"}}]}"#,
            WeatherFailureMode::Error,
        )
        .await;

        let state = client.fetch_weather_alerts().await.unwrap();
        assert_eq!(
            state,
            WeatherAlertState {
                snow: true,
                ..WeatherAlertState::default()
            }
        );
    }

    #[tokio::test]
    async fn no_alerts_is_all_clear() {
        let client = client_serving(r#"{"features":[]}"#, WeatherFailureMode::Error).await;
        assert_eq!(
            client.fetch_weather_alerts().await.unwrap(),
            WeatherAlertState::default()
        );
    }

    #[tokio::test]
    async fn accumulates_across_alerts() {
        let client = client_serving(
            r#"{"features":[
                {"properties":{"event":"Tornado Warning"}},
                {"properties":{"event":"Flash Flood Warning"}},
                {"properties":{"event":"Red Flag Warning"}},
                {"properties":{}}
            ]}"#,
            WeatherFailureMode::Error,
        )
        .await;

        let state = client.fetch_weather_alerts().await.unwrap();
        assert!(state.tornado);
        assert!(state.flood);
        assert!(!state.wildfire);
        assert!(!state.snow);
        assert!(!state.earthquake);
    }

    #[tokio::test]
    async fn sends_user_agent_to_area_path() {
        let seen: Arc<Mutex<Option<String>>> = Arc::default();
        let captured = Arc::clone(&seen);

        let router = Router::new().route(
            "/alerts/active/NY",
            get(move |headers: HeaderMap| {
                let captured = Arc::clone(&captured);
                async move {
                    *captured.lock().unwrap() = headers
                        .get("user-agent")
                        .and_then(|v| v.to_str().ok())
                        .map(str::to_string);
                    r#"{"features":[]}"#
                }
            }),
        );
        let base = spawn_upstream(router).await;
        let client = WeatherClient::new(
            WeatherConfig::default()
                .with_base_url(format!("{base}/"))
                .with_area("NY")
                .with_user_agent("fleet-test (ops@example.com)"),
        )
        .unwrap();

        client.fetch_alert_state().await.unwrap();
        assert_eq!(
            seen.lock().unwrap().as_deref(),
            Some("fleet-test (ops@example.com)")
        );
    }

    #[tokio::test]
    async fn error_mode_reports_failures() {
        let router = Router::new().route(
            "/alerts/active/NJ",
            get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down") }),
        );
        let base = spawn_upstream(router).await;
        let client = WeatherClient::new(WeatherConfig::default().with_base_url(base)).unwrap();

        match client.fetch_weather_alerts().await.unwrap_err() {
            WeatherError::Api { status, .. } => assert_eq!(status, 503),
            other => panic!("unexpected error: {other}"),
        }

        let client = client_serving("not json", WeatherFailureMode::Error).await;
        assert!(matches!(
            client.fetch_weather_alerts().await.unwrap_err(),
            WeatherError::Json { .. }
        ));
    }

    #[tokio::test]
    async fn silent_mode_swallows_failures() {
        let client = client_serving("not json", WeatherFailureMode::Silent).await;
        assert_eq!(
            client.fetch_weather_alerts().await.unwrap(),
            WeatherAlertState::default()
        );

        let client = WeatherClient::new(
            WeatherConfig::default()
                .with_base_url(dead_upstream().await)
                .with_failure_mode(WeatherFailureMode::Silent),
        )
        .unwrap();
        assert_eq!(
            client.fetch_weather_alerts().await.unwrap(),
            WeatherAlertState::default()
        );

        // the raw fetch still reports the error
        assert!(client.fetch_alert_state().await.is_err());
    }

    #[test]
    fn rejects_unprintable_user_agent() {
        let err = WeatherClient::new(WeatherConfig::default().with_user_agent("bad\nagent"))
            .unwrap_err();
        assert!(matches!(err, WeatherError::Config(_)));
    }
}
