//! Conversion from Geoapify responses to domain routes.

use serde_json::Value;

use crate::domain::{Route, RouteQuery};

use super::error::GeoapifyError;
use super::types::RouteResponse;

/// Build a fastest route from the first feature of `response`.
pub fn route_from_response(
    query: &RouteQuery,
    response: &RouteResponse,
) -> Result<Route, GeoapifyError> {
    let feature = response.features.first().ok_or(GeoapifyError::NoRoute)?;
    let props = &feature.properties;

    let traffic = props.traffic.as_ref().and_then(|value| match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    });

    Ok(Route::fastest(
        query.start_location.as_str(),
        query.end_location.as_str(),
        props.distance,
        props.duration.or(props.time),
        traffic,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query() -> RouteQuery {
        RouteQuery::new("Newark, NJ", "Trenton, NJ").unwrap()
    }

    fn response(json: &str) -> RouteResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn uses_first_feature() {
        let resp = response(
            r#"{"features": [
                {"properties": {"distance": 100, "duration": 200, "traffic": "heavy"}},
                {"properties": {"distance": 999, "duration": 999, "traffic": "light"}}
            ]}"#,
        );

        let route = route_from_response(&query(), &resp).unwrap();
        assert_eq!(route.start_location, "Newark, NJ");
        assert_eq!(route.end_location, "Trenton, NJ");
        assert_eq!(route.distance, Some(100.0));
        assert_eq!(route.estimated_time, Some(200.0));
        assert_eq!(route.traffic_conditions.as_deref(), Some("heavy"));
        assert_eq!(route.route_type.as_deref(), Some("fastest"));
    }

    #[test]
    fn missing_properties_become_none() {
        let resp = response(r#"{"features": [{"properties": {}}]}"#);

        let route = route_from_response(&query(), &resp).unwrap();
        assert!(route.distance.is_none());
        assert!(route.estimated_time.is_none());
        assert!(route.traffic_conditions.is_none());
    }

    #[test]
    fn duration_preferred_over_time() {
        let resp = response(r#"{"features": [{"properties": {"time": 2, "duration": 3}}]}"#);
        let route = route_from_response(&query(), &resp).unwrap();
        assert_eq!(route.estimated_time, Some(3.0));

        let resp = response(r#"{"features": [{"properties": {"time": 2}}]}"#);
        let route = route_from_response(&query(), &resp).unwrap();
        assert_eq!(route.estimated_time, Some(2.0));
    }

    #[test]
    fn non_string_traffic_is_stringified() {
        let resp = response(r#"{"features": [{"properties": {"traffic": {"level": 3}}}]}"#);

        let route = route_from_response(&query(), &resp).unwrap();
        assert_eq!(route.traffic_conditions.as_deref(), Some(r#"{"level":3}"#));
    }

    #[test]
    fn empty_features_is_no_route() {
        let resp = response(r#"{"features": []}"#);
        assert!(matches!(
            route_from_response(&query(), &resp),
            Err(GeoapifyError::NoRoute)
        ));
    }
}
