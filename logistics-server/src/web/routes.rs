//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get, post},
};
use serde::de::DeserializeOwned;
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::domain::{
    DomainError, FuelTimestamp, RefuelSchedule, Route, RouteQuery, WeatherAlertState,
    compute_next_refuel,
};
use crate::services::PACKAGE_DELETED_MESSAGE;

use super::dto::*;
use super::error::AppError;
use super::state::AppState;

/// Prefix under which all API routes are mounted.
pub const API_PREFIX: &str = "/api/geoapify";

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/create_user", post(create_user))
        .route("/login", post(login))
        .route("/create_company", post(create_company))
        .route("/add_package", post(add_package))
        .route("/list_packages", get(list_packages))
        .route("/remove_package/:id", delete(remove_package))
        .route("/fuel", post(fuel))
        .route("/get_route", post(get_route))
        .route(
            "/fetch_weather_alerts",
            get(fetch_weather_alerts).post(fetch_weather_alerts),
        );

    Router::new()
        .route("/health", get(health))
        .nest(API_PREFIX, api)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Parse a JSON body, turning any failure into a 400.
fn parse_json<T: DeserializeOwned>(body: &Bytes) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(|e| {
        // Bodies may carry passwords; only the parse error is logged.
        debug!(error = %e, "rejected request body");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })
}

async fn create_user(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<UserResponse>, AppError> {
    let req: CreateUserRequest = parse_json(&body)?;
    let user = state
        .accounts
        .create_user(&req.username, &req.email, &req.password)
        .await?;
    Ok(Json(user.into()))
}

async fn login(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<LoginResponse>, AppError> {
    let req: LoginRequest = parse_json(&body)?;
    let outcome = state.accounts.login(&req.username, &req.password).await?;
    Ok(Json(outcome.into()))
}

async fn create_company(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<CompanyResponse>, AppError> {
    let req: CreateCompanyRequest = parse_json(&body)?;
    let company = state
        .companies
        .create_company(&req.name, &req.email, req.number, &req.address)
        .await?;
    Ok(Json(company.into()))
}

async fn add_package(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<PackageResponse>, AppError> {
    let req: AddPackageRequest = parse_json(&body)?;
    let package = state.packages.add_package(&req.package_name).await?;
    Ok(Json(package.into()))
}

async fn list_packages(
    State(state): State<AppState>,
) -> Result<Json<Vec<PackageResponse>>, AppError> {
    let packages = state.packages.list_packages().await?;
    Ok(Json(packages.into_iter().map(PackageResponse::from).collect()))
}

async fn remove_package(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DetailResponse>, AppError> {
    let id: i64 = id.parse().map_err(|_| AppError::BadRequest {
        message: format!("Invalid package id: {id}"),
    })?;

    state.packages.remove_package(id).await?;
    Ok(Json(DetailResponse {
        detail: PACKAGE_DELETED_MESSAGE.to_string(),
    }))
}

async fn fuel(body: Bytes) -> Result<Json<RefuelSchedule>, AppError> {
    let req: FuelRequest = parse_json(&body)?;
    let current = FuelTimestamp::parse(&req.current_time).map_err(DomainError::from)?;
    let schedule = compute_next_refuel(current).map_err(DomainError::from)?;
    Ok(Json(schedule))
}

async fn get_route(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Route>, AppError> {
    let req: RouteRequest = parse_json(&body)?;
    let query = RouteQuery::new(&req.start_location, &req.end_location)?;
    let route = state.geoapify.get_route(&query).await?;
    Ok(Json(route))
}

async fn fetch_weather_alerts(
    State(state): State<AppState>,
) -> Result<Json<WeatherAlertState>, AppError> {
    let alerts = state.weather.fetch_weather_alerts().await?;
    Ok(Json(alerts))
}
