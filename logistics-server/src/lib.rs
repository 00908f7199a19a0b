//! Logistics demo backend.
//!
//! Users, companies and packages in SQLite, a fixed-interval refuel
//! scheduler, and thin wrappers over the Geoapify routing and National
//! Weather Service alert APIs, served as a JSON HTTP API.

pub mod config;
pub mod domain;
pub mod geoapify;
pub mod password;
pub mod services;
pub mod store;
pub mod weather;
pub mod web;

#[cfg(test)]
mod test_support;
