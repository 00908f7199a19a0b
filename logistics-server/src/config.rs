//! Application configuration.
//!
//! Read once at startup from the environment (after `.env` is loaded) and
//! passed by reference to whatever needs it. Lookups go through a closure
//! so tests can supply values without touching the process environment.

use std::net::SocketAddr;

use crate::geoapify::GeoapifyConfig;
use crate::weather::{WeatherConfig, WeatherFailureMode};

/// Default listen address.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";

/// Default database location, created on first run.
const DEFAULT_DATABASE_URL: &str = "sqlite://logistics.db?mode=rwc";

/// Errors from reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {var}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    fn invalid(var: &'static str, value: &str, reason: impl ToString) -> Self {
        ConfigError::Invalid {
            var,
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Top-level server configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the HTTP server listens on
    pub bind_addr: SocketAddr,
    /// sqlx SQLite connection string
    pub database_url: String,
    /// Routing API settings
    pub geoapify: GeoapifyConfig,
    /// Weather alerts API settings
    pub weather: WeatherConfig,
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration using `lookup` to fetch each variable.
    ///
    /// Unset or empty variables fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_raw = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .parse()
            .map_err(|e| ConfigError::invalid("BIND_ADDR", &bind_raw, e))?;

        let database_url =
            get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let timeout_secs = match get("HTTP_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw
                    .parse()
                    .map_err(|e| ConfigError::invalid("HTTP_TIMEOUT_SECS", &raw, e))?;
                if secs == 0 {
                    return Err(ConfigError::invalid(
                        "HTTP_TIMEOUT_SECS",
                        &raw,
                        "must be at least 1",
                    ));
                }
                Some(secs)
            }
            None => None,
        };

        let mut geoapify = GeoapifyConfig::new(get("GEOAPIFY_API_KEY"));
        if let Some(url) = get("GEOAPIFY_BASE_URL") {
            geoapify = geoapify.with_base_url(url);
        }

        let mut weather = WeatherConfig::default();
        if let Some(url) = get("WEATHER_BASE_URL") {
            weather = weather.with_base_url(url);
        }
        if let Some(area) = get("WEATHER_AREA") {
            weather = weather.with_area(area);
        }
        if let Some(agent) = get("WEATHER_USER_AGENT") {
            weather = weather.with_user_agent(agent);
        }
        if let Some(raw) = get("WEATHER_FAILURE_MODE") {
            let mode: WeatherFailureMode = raw
                .parse()
                .map_err(|e| ConfigError::invalid("WEATHER_FAILURE_MODE", &raw, e))?;
            weather = weather.with_failure_mode(mode);
        }

        if let Some(secs) = timeout_secs {
            geoapify = geoapify.with_timeout(secs);
            weather = weather.with_timeout(secs);
        }

        Ok(Self {
            bind_addr,
            database_url,
            geoapify,
            weather,
        })
    }
}
