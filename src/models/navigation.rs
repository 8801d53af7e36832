// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Navigation (travel leg) model.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use super::Location;

/// A travel leg between two locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Navigation {
    pub id: String,
    /// Travel mode (sent as `type`)
    #[serde(rename = "type")]
    pub mode: TravelMode,
    /// Start timestamp (ISO 8601)
    pub start_at: String,
    /// Travel time in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    /// Distance in meters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    pub starting_location: Location,
    pub ending_location: Location,
    /// Route as serialized JSON, either a directions route object with a
    /// `geometry` member or a bare GeoJSON geometry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
}

/// How a navigation leg is travelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/src/generated/")
)]
pub enum TravelMode {
    Driving,
    Cycling,
    Walking,
    Flying,
    /// A mode this build does not know about
    #[serde(other)]
    Other,
}

impl TravelMode {
    pub fn label(self) -> &'static str {
        match self {
            TravelMode::Driving => "Driving",
            TravelMode::Cycling => "Cycling",
            TravelMode::Walking => "Walking",
            TravelMode::Flying => "Flying",
            TravelMode::Other => "Other",
        }
    }
}

impl Navigation {
    /// Travel time as `1hr 5min`, `45min` or `2hr`.
    ///
    /// Flights are drawn as straight lines with no computed duration, so they
    /// never get a label.
    pub fn duration_label(&self) -> Option<String> {
        if self.mode == TravelMode::Flying {
            return None;
        }
        let total_minutes = (self.duration? / 60.0).floor() as u64;
        let hours = total_minutes / 60;
        let minutes = total_minutes % 60;
        match (hours, minutes) {
            (0, 0) => None,
            (0, m) => Some(format!("{}min", m)),
            (h, 0) => Some(format!("{}hr", h)),
            (h, m) => Some(format!("{}hr {}min", h, m)),
        }
    }

    /// Distance in kilometers with one decimal, e.g. `12.3km`.
    pub fn distance_label(&self) -> Option<String> {
        if self.mode == TravelMode::Flying {
            return None;
        }
        self.distance.map(|meters| format!("{:.1}km", meters / 1000.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn navigation(mode: TravelMode, duration: Option<f64>, distance: Option<f64>) -> Navigation {
        let location = Location {
            id: "l".to_string(),
            name: String::new(),
            latitude: 0.0.into(),
            longitude: 0.0.into(),
        };
        Navigation {
            id: "n1".to_string(),
            mode,
            start_at: "2024-05-01T08:00:00Z".to_string(),
            duration,
            distance,
            starting_location: location.clone(),
            ending_location: location,
            route: None,
        }
    }

    #[test]
    fn test_duration_label_hours_and_minutes() {
        let nav = navigation(TravelMode::Driving, Some(3900.0), None);
        assert_eq!(nav.duration_label().as_deref(), Some("1hr 5min"));
    }

    #[test]
    fn test_duration_label_minutes_only() {
        let nav = navigation(TravelMode::Walking, Some(2700.0), None);
        assert_eq!(nav.duration_label().as_deref(), Some("45min"));
    }

    #[test]
    fn test_duration_label_whole_hours() {
        let nav = navigation(TravelMode::Cycling, Some(7200.0), None);
        assert_eq!(nav.duration_label().as_deref(), Some("2hr"));
    }

    #[test]
    fn test_duration_label_under_a_minute() {
        let nav = navigation(TravelMode::Walking, Some(30.0), None);
        assert_eq!(nav.duration_label(), None);
    }

    #[test]
    fn test_distance_label() {
        let nav = navigation(TravelMode::Driving, None, Some(12_345.0));
        assert_eq!(nav.distance_label().as_deref(), Some("12.3km"));
    }

    #[test]
    fn test_flying_has_no_labels() {
        let nav = navigation(TravelMode::Flying, Some(3600.0), Some(500_000.0));
        assert_eq!(nav.duration_label(), None);
        assert_eq!(nav.distance_label(), None);
    }

    #[test]
    fn test_unknown_mode_falls_back() {
        let nav: Navigation = serde_json::from_value(serde_json::json!({
            "id": "n2",
            "type": "transit",
            "startAt": "2024-05-01T08:00:00Z",
            "duration": 1800.0,
            "startingLocation": { "id": "a", "latitude": 0.0, "longitude": 0.0 },
            "endingLocation": { "id": "b", "latitude": 1.0, "longitude": 1.0 }
        }))
        .unwrap();
        assert_eq!(nav.mode, TravelMode::Other);
        assert_eq!(nav.mode.label(), "Other");
        assert_eq!(nav.duration_label().as_deref(), Some("30min"));
    }

    #[test]
    fn test_mode_serialized_as_type() {
        let nav = navigation(TravelMode::Cycling, None, None);
        let json = serde_json::to_value(&nav).unwrap();
        assert_eq!(json["type"], "cycling");
        assert_eq!(json["startAt"], "2024-05-01T08:00:00Z");
    }
}
