//! Weather hazard classification.
//!
//! Each active alert's event text (e.g. "Winter Storm Warning") is mapped
//! to at most one hazard by the first matching keyword rule, and the
//! hazards seen across all alerts are OR-ed into a [`WeatherAlertState`].

use serde::{Deserialize, Serialize};

/// A hazard category that alerts can be classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hazard {
    Hurricane,
    Tornado,
    Snow,
    Flood,
    Wildfire,
    Earthquake,
}

/// Keyword rules, tried in order. The first rule with any keyword
/// contained in the lower-cased event text wins.
///
/// An event mentioning both "flood" and "fire" is therefore a flood only.
/// There is no rule for [`Hazard::Earthquake`].
const RULES: &[(&[&str], Hazard)] = &[
    (&["hurricane"], Hazard::Hurricane),
    (&["tornado"], Hazard::Tornado),
    (&["flood"], Hazard::Flood),
    (&["snow", "winter"], Hazard::Snow),
    (&["fire", "wildfire"], Hazard::Wildfire),
];

/// Classify a single alert's event text.
///
/// # Examples
///
/// ```
/// use logistics_server::domain::{Hazard, classify_event};
///
/// assert_eq!(classify_event("Winter Storm Warning"), Some(Hazard::Snow));
/// assert_eq!(classify_event("Flash Flood Watch"), Some(Hazard::Flood));
/// assert_eq!(classify_event("Heat Advisory"), None);
/// ```
pub fn classify_event(event: &str) -> Option<Hazard> {
    let event = event.to_lowercase();
    RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| event.contains(k)))
        .map(|&(_, hazard)| hazard)
}

/// Six hazard flags for a jurisdiction, all false by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherAlertState {
    pub hurricane: bool,
    pub tornado: bool,
    pub snow: bool,
    pub flood: bool,
    pub wildfire: bool,
    pub earthquake: bool,
}

impl WeatherAlertState {
    /// Classify every event and accumulate the flags.
    pub fn from_events<'a, I>(events: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut state = Self::default();
        for hazard in events.into_iter().filter_map(classify_event) {
            state.raise(hazard);
        }
        state
    }

    /// Set the flag for `hazard`.
    pub fn raise(&mut self, hazard: Hazard) {
        match hazard {
            Hazard::Hurricane => self.hurricane = true,
            Hazard::Tornado => self.tornado = true,
            Hazard::Snow => self.snow = true,
            Hazard::Flood => self.flood = true,
            Hazard::Wildfire => self.wildfire = true,
            Hazard::Earthquake => self.earthquake = true,
        }
    }

    /// Whether the flag for `hazard` is set.
    pub fn is_raised(&self, hazard: Hazard) -> bool {
        match hazard {
            Hazard::Hurricane => self.hurricane,
            Hazard::Tornado => self.tornado,
            Hazard::Snow => self.snow,
            Hazard::Flood => self.flood,
            Hazard::Wildfire => self.wildfire,
            Hazard::Earthquake => self.earthquake,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_each_rule() {
        assert_eq!(classify_event("Hurricane Warning"), Some(Hazard::Hurricane));
        assert_eq!(classify_event("Tornado Watch"), Some(Hazard::Tornado));
        assert_eq!(classify_event("Coastal Flood Advisory"), Some(Hazard::Flood));
        assert_eq!(classify_event("Lake Effect Snow Warning"), Some(Hazard::Snow));
        assert_eq!(classify_event("Winter Weather Advisory"), Some(Hazard::Snow));
        assert_eq!(classify_event("Red Flag Warning"), None);
        assert_eq!(classify_event("Fire Weather Watch"), Some(Hazard::Wildfire));
    }

    #[test]
    fn classify_is_case_insensitive() {
        assert_eq!(classify_event("TORNADO WARNING"), Some(Hazard::Tornado));
        assert_eq!(classify_event("wildfire smoke"), Some(Hazard::Wildfire));
    }

    #[test]
    fn first_match_wins() {
        assert_eq!(classify_event("Flood and Fire Statement"), Some(Hazard::Flood));
        assert_eq!(classify_event("Hurricane Flood Surge"), Some(Hazard::Hurricane));
        assert_eq!(classify_event("Winter Tornado"), Some(Hazard::Tornado));
    }

    #[test]
    fn earthquake_never_classified() {
        assert_eq!(classify_event("Earthquake Warning"), None);
        let state = WeatherAlertState::from_events(["Earthquake Warning"]);
        assert!(!state.earthquake);
    }

    #[test]
    fn winter_storm_sets_only_snow() {
        let state = WeatherAlertState::from_events(["Winter Storm Warning"]);
        assert_eq!(
            state,
            WeatherAlertState {
                snow: true,
                ..Default::default()
            }
        );
    }

    #[test]
    fn no_alerts_all_false() {
        let state = WeatherAlertState::from_events(std::iter::empty());
        assert_eq!(state, WeatherAlertState::default());
    }

    #[test]
    fn flags_accumulate_across_alerts() {
        let state = WeatherAlertState::from_events([
            "Tornado Warning",
            "Flash Flood Warning",
            "Special Weather Statement",
        ]);
        assert!(state.tornado);
        assert!(state.flood);
        assert!(!state.snow);
        assert!(!state.hurricane);
    }

    #[test]
    fn wire_shape() {
        let json = serde_json::to_value(WeatherAlertState::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "hurricane": false,
                "tornado": false,
                "snow": false,
                "flood": false,
                "wildfire": false,
                "earthquake": false
            })
        );
    }
}
