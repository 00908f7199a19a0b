//! NWS alert feed DTOs (GeoJSON, trimmed to the event name).

use serde::Deserialize;

/// Response from `/alerts/active/{area}`.
#[derive(Debug, Clone, Deserialize)]
pub struct AlertCollection {
    #[serde(default)]
    pub features: Vec<AlertFeature>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AlertFeature {
    #[serde(default)]
    pub properties: AlertProperties,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AlertProperties {
    /// Alert type, e.g. "Winter Storm Warning"
    pub event: Option<String>,
}

impl AlertCollection {
    /// Event names of all alerts that have one.
    pub fn events(&self) -> impl Iterator<Item = &str> {
        self.features
            .iter()
            .filter_map(|feature| feature.properties.event.as_deref())
    }
}
