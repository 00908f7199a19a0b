//! National Weather Service alerts client.
//!
//! Fetches active alerts for one jurisdiction and folds their event names
//! into a [`WeatherAlertState`](crate::domain::WeatherAlertState).

mod client;
mod error;
mod types;

pub use client::{UnknownFailureMode, WeatherClient, WeatherConfig, WeatherFailureMode};
pub use error::WeatherError;
pub use types::{AlertCollection, AlertFeature, AlertProperties};
