//! Geoapify response DTOs.
//!
//! Only the fields the route record needs are mapped; everything else in
//! the GeoJSON feature collection is ignored.

use serde::Deserialize;

/// Feature collection returned by the routing endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteResponse {
    #[serde(default)]
    pub features: Vec<RouteFeature>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RouteFeature {
    #[serde(default)]
    pub properties: RouteProperties,
}

/// Summary properties of a matched route.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RouteProperties {
    /// Metres
    pub distance: Option<f64>,

    /// Seconds
    pub duration: Option<f64>,

    /// Seconds, under the name some Geoapify endpoints use instead of `duration`.
    pub time: Option<f64>,

    /// Usually a label such as `"free_flow"`, but not guaranteed to be a string.
    pub traffic: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_feature() {
        let json = r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "properties": {"distance": 1500.5, "time": 90, "mode": "drive"},
                "geometry": null
            }]
        }"#;

        let response: RouteResponse = serde_json::from_str(json).unwrap();
        let props = &response.features[0].properties;
        assert_eq!(props.distance, Some(1500.5));
        assert_eq!(props.duration, None);
        assert_eq!(props.time, Some(90.0));
        assert!(props.traffic.is_none());
    }

    #[test]
    fn accepts_both_duration_and_time() {
        let json = r#"{"features":[{"properties":{"distance":1,"time":2,"duration":3}}]}"#;

        let response: RouteResponse = serde_json::from_str(json).unwrap();
        let props = &response.features[0].properties;
        assert_eq!(props.duration, Some(3.0));
        assert_eq!(props.time, Some(2.0));
    }

    #[test]
    fn missing_features_is_empty() {
        let response: RouteResponse = serde_json::from_str("{}").unwrap();
        assert!(response.features.is_empty());
    }
}
