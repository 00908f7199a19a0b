//! Mapping from service errors to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::{error, warn};

use crate::domain::DomainError;
use crate::geoapify::GeoapifyError;
use crate::services::{AccountError, CompanyError, PackageError};
use crate::weather::WeatherError;

use super::dto::ErrorResponse;

/// Error type for handlers. Every variant renders as `{"detail": message}`.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Unauthorized { message: String },
    NotFound { message: String },
    Internal { message: String },
    /// An external API failed; `message` is what the client sees.
    Upstream { message: String },
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Upstream { .. } => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn message(&self) -> &str {
        match self {
            AppError::BadRequest { message }
            | AppError::Unauthorized { message }
            | AppError::NotFound { message }
            | AppError::Internal { message }
            | AppError::Upstream { message } => message,
        }
    }

    fn bad_request(e: impl ToString) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }

    fn internal(e: impl ToString) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        AppError::bad_request(e)
    }
}

impl From<AccountError> for AppError {
    fn from(e: AccountError) -> Self {
        match e {
            AccountError::Validation(_) | AccountError::UsernameTaken | AccountError::EmailTaken => {
                AppError::bad_request(e)
            }
            AccountError::InvalidCredentials => AppError::Unauthorized {
                message: e.to_string(),
            },
            AccountError::Password(_) | AccountError::Store(_) => AppError::internal(e),
        }
    }
}

impl From<CompanyError> for AppError {
    fn from(e: CompanyError) -> Self {
        match e {
            CompanyError::Validation(_) | CompanyError::NameTaken | CompanyError::EmailTaken => {
                AppError::bad_request(e)
            }
            CompanyError::Store(_) => AppError::internal(e),
        }
    }
}

impl From<PackageError> for AppError {
    fn from(e: PackageError) -> Self {
        match e {
            PackageError::Validation(_) => AppError::bad_request(e),
            PackageError::NotFound(_) => AppError::NotFound {
                message: e.to_string(),
            },
            PackageError::Store(_) => AppError::internal(e),
        }
    }
}

impl From<GeoapifyError> for AppError {
    fn from(e: GeoapifyError) -> Self {
        match e {
            GeoapifyError::NoRoute => AppError::NotFound {
                message: "No route found".to_string(),
            },
            GeoapifyError::NotConfigured(msg) => AppError::Internal {
                message: format!("Routing is not configured: {msg}"),
            },
            GeoapifyError::Http(_) | GeoapifyError::Json { .. } | GeoapifyError::ApiError { .. } => {
                warn!(error = %e, "route lookup failed");
                AppError::Upstream {
                    message: "Error fetching route data".to_string(),
                }
            }
        }
    }
}

impl From<WeatherError> for AppError {
    fn from(e: WeatherError) -> Self {
        warn!(error = %e, "weather alert lookup failed");
        AppError::Upstream {
            message: "Error fetching weather alerts".to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            error!(%status, message = self.message(), "request failed");
        } else {
            warn!(%status, message = self.message(), "request rejected");
        }

        let body = Json(ErrorResponse {
            detail: self.message().to_string(),
        });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreError;

    #[test]
    fn account_errors_map_to_status() {
        assert_eq!(
            AppError::from(AccountError::UsernameTaken).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::from(AccountError::InvalidCredentials).status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::from(AccountError::Store(StoreError::Database(sqlx::Error::PoolClosed)))
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn geoapify_errors_map_to_status() {
        assert_eq!(
            AppError::from(GeoapifyError::NoRoute).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::from(GeoapifyError::NotConfigured("no key".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );

        let err = AppError::from(GeoapifyError::ApiError {
            status: 401,
            message: "Invalid apiKey".into(),
        });
        assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.message(), "Error fetching route data");
    }

    #[test]
    fn package_not_found_is_404() {
        let err = AppError::from(PackageError::NotFound(3));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.message(), "Package not found");
    }
}
