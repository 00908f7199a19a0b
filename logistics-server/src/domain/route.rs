//! Driving route between two named locations.

use serde::{Deserialize, Serialize};

use super::DomainError;
use super::error::require_non_blank;

/// Route type label for routes requested as fastest-by-car.
pub const ROUTE_TYPE_FASTEST: &str = "fastest";

/// Validated endpoints of a route request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteQuery {
    pub start_location: String,
    pub end_location: String,
}

impl RouteQuery {
    pub fn new(start_location: &str, end_location: &str) -> Result<Self, DomainError> {
        Ok(Self {
            start_location: require_non_blank("start_location", start_location)?,
            end_location: require_non_blank("end_location", end_location)?,
        })
    }
}

/// A route, built fresh from a routing API response and never stored.
///
/// All optional fields are serialized, as `null` when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub start_location: String,
    pub end_location: String,
    pub waypoints: Option<Vec<String>>,
    /// Distance in metres
    pub distance: Option<f64>,
    /// Estimated travel time in seconds
    pub estimated_time: Option<f64>,
    pub traffic_conditions: Option<String>,
    pub route_type: Option<String>,
}

impl Route {
    /// Build a fastest-route record from the parts a routing response provides.
    pub fn fastest(
        start_location: impl Into<String>,
        end_location: impl Into<String>,
        distance: Option<f64>,
        estimated_time: Option<f64>,
        traffic_conditions: Option<String>,
    ) -> Self {
        Self {
            start_location: start_location.into(),
            end_location: end_location.into(),
            waypoints: None,
            distance,
            estimated_time,
            traffic_conditions,
            route_type: Some(ROUTE_TYPE_FASTEST.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_requires_both_ends() {
        let query = RouteQuery::new(" Newark, NJ ", "Trenton, NJ").unwrap();
        assert_eq!(query.start_location, "Newark, NJ");
        assert_eq!(query.end_location, "Trenton, NJ");

        assert_eq!(
            RouteQuery::new("", "B").unwrap_err(),
            DomainError::Blank("start_location")
        );
        assert_eq!(
            RouteQuery::new("A", " ").unwrap_err(),
            DomainError::Blank("end_location")
        );
    }

    #[test]
    fn fastest_sets_route_type() {
        let route = Route::fastest("A", "B", Some(100.0), Some(200.0), Some("heavy".into()));
        assert_eq!(route.route_type.as_deref(), Some("fastest"));
        assert!(route.waypoints.is_none());
    }

    #[test]
    fn serializes_nulls() {
        let route = Route::fastest("A", "B", None, None, None);
        let json = serde_json::to_value(&route).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "start_location": "A",
                "end_location": "B",
                "waypoints": null,
                "distance": null,
                "estimated_time": null,
                "traffic_conditions": null,
                "route_type": "fastest"
            })
        );
    }
}
