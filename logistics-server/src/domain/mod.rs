//! Domain records for the logistics backend.
//!
//! These are the validated, in-memory shapes of requests and results.
//! Constructors enforce field rules, so code that receives these types can
//! trust their validity. None of them know how they are persisted.

mod account;
mod company;
mod email;
mod error;
mod fuel;
mod package;
mod route;
mod weather;

pub use account::{LoginAttempt, NewUser, User};
pub use company::{Company, NewCompany};
pub use email::{EmailAddress, InvalidEmail};
pub use error::DomainError;
pub use fuel::{
    FuelTimestamp, REFUEL_INTERVAL_HOURS, RefuelSchedule, TimestampError, compute_next_refuel,
};
pub use package::{NewPackage, Package};
pub use route::{ROUTE_TYPE_FASTEST, Route, RouteQuery};
pub use weather::{Hazard, WeatherAlertState, classify_event};
