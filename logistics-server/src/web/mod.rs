//! HTTP layer for the logistics backend.
//!
//! JSON endpoints under `/api/geoapify`, plus `/health`.

mod dto;
mod error;
mod routes;
mod state;

pub use dto::*;
pub use error::AppError;
pub use routes::{API_PREFIX, create_router};
pub use state::{AppState, StateError};
