//! Application state for the web layer.

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::config::AppConfig;
use crate::geoapify::{GeoapifyClient, GeoapifyError};
use crate::services::{AccountService, CompanyService, PackageService};
use crate::store::{SqliteCompanyRepository, SqlitePackageRepository, SqliteUserRepository};
use crate::weather::{WeatherClient, WeatherError};

/// Errors from assembling the application state.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("failed to build routing client: {0}")]
    Geoapify(#[from] GeoapifyError),

    #[error("failed to build weather client: {0}")]
    Weather(#[from] WeatherError),
}

/// Shared application state.
///
/// Read-only after startup; cloned into each request.
#[derive(Clone)]
pub struct AppState {
    pub accounts: Arc<AccountService>,
    pub companies: Arc<CompanyService>,
    pub packages: Arc<PackageService>,
    pub geoapify: Arc<GeoapifyClient>,
    pub weather: Arc<WeatherClient>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        accounts: AccountService,
        companies: CompanyService,
        packages: PackageService,
        geoapify: GeoapifyClient,
        weather: WeatherClient,
    ) -> Self {
        Self {
            accounts: Arc::new(accounts),
            companies: Arc::new(companies),
            packages: Arc::new(packages),
            geoapify: Arc::new(geoapify),
            weather: Arc::new(weather),
        }
    }

    /// Wire SQLite repositories and HTTP clients from configuration.
    pub fn from_config(pool: SqlitePool, config: &AppConfig) -> Result<Self, StateError> {
        let accounts = AccountService::new(Arc::new(SqliteUserRepository::new(pool.clone())));
        let companies = CompanyService::new(Arc::new(SqliteCompanyRepository::new(pool.clone())));
        let packages = PackageService::new(Arc::new(SqlitePackageRepository::new(pool)));
        let geoapify = GeoapifyClient::new(config.geoapify.clone())?;
        let weather = WeatherClient::new(config.weather.clone())?;

        Ok(Self::new(accounts, companies, packages, geoapify, weather))
    }
}
