//! Request and response bodies for the JSON API.

use serde::{Deserialize, Serialize};

use crate::domain::{Company, Package, User};
use crate::services::LoginOutcome;

/// Error body, `{"detail": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

/// Plain acknowledgement, same shape as [`ErrorResponse`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailResponse {
    pub detail: String,
}

// --- Users ---

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// A registered user. Never includes the password or its hash.
#[derive(Debug, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub user_id: i64,
}

impl From<LoginOutcome> for LoginResponse {
    fn from(outcome: LoginOutcome) -> Self {
        Self {
            message: outcome.message.to_string(),
            user_id: outcome.user_id,
        }
    }
}

// --- Companies ---

#[derive(Debug, Deserialize)]
pub struct CreateCompanyRequest {
    pub name: String,
    pub email: String,
    pub number: i64,
    #[serde(default)]
    pub address: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CompanyResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub number: i64,
    pub address: String,
}

impl From<Company> for CompanyResponse {
    fn from(company: Company) -> Self {
        Self {
            id: company.id,
            name: company.name,
            email: company.email,
            number: company.number,
            address: company.address,
        }
    }
}

// --- Packages ---

#[derive(Debug, Deserialize)]
pub struct AddPackageRequest {
    pub package_name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PackageResponse {
    pub id: i64,
    pub package_name: String,
}

impl From<Package> for PackageResponse {
    fn from(package: Package) -> Self {
        Self {
            id: package.id,
            package_name: package.package_name,
        }
    }
}

// --- Fuel ---

/// Timestamp is kept as text so a bad value gets our own error message.
#[derive(Debug, Deserialize)]
pub struct FuelRequest {
    pub current_time: String,
}

// --- Routing ---

#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    pub start_location: String,
    pub end_location: String,
}
