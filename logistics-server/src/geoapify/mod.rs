//! Geoapify routing client.
//!
//! Looks up a driving route between two free-text locations using the
//! Geoapify map-matching endpoint. Only the first returned feature is
//! used; its distance, duration and traffic become a [`Route`].
//!
//! [`Route`]: crate::domain::Route

mod client;
mod convert;
mod error;
mod types;

pub use client::{GeoapifyClient, GeoapifyConfig};
pub use convert::route_from_response;
pub use error::GeoapifyError;
pub use types::{RouteFeature, RouteProperties, RouteResponse};
