// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Scheduled trip activity model.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use super::Location;

/// A scheduled event within a trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    pub name: String,
    /// Start timestamp (ISO 8601)
    pub start_at: String,
    /// End timestamp (ISO 8601)
    pub end_at: String,
    #[serde(default)]
    pub category: ActivityCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub location: Location,
}

/// Activity category tag. Unknown tags read as `Other`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/src/generated/")
)]
pub enum ActivityCategory {
    Food,
    Shopping,
    Nightlife,
    Outdoors,
    Arts,
    Event,
    Business,
    #[default]
    #[serde(other)]
    Other,
}

impl ActivityCategory {
    pub const ALL: [ActivityCategory; 8] = [
        ActivityCategory::Food,
        ActivityCategory::Shopping,
        ActivityCategory::Nightlife,
        ActivityCategory::Outdoors,
        ActivityCategory::Arts,
        ActivityCategory::Event,
        ActivityCategory::Business,
        ActivityCategory::Other,
    ];

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            ActivityCategory::Food => "Food",
            ActivityCategory::Shopping => "Shopping",
            ActivityCategory::Nightlife => "Nightlife",
            ActivityCategory::Outdoors => "Outdoors",
            ActivityCategory::Arts => "Arts",
            ActivityCategory::Event => "Event",
            ActivityCategory::Business => "Business",
            ActivityCategory::Other => "Other",
        }
    }

    /// Accent color used for the category's card and pin.
    pub fn color(self) -> &'static str {
        match self {
            ActivityCategory::Food => "#FC9260",
            ActivityCategory::Shopping => "#F1CB3F",
            ActivityCategory::Nightlife => "#8A57D4",
            ActivityCategory::Outdoors => "#9AC05E",
            ActivityCategory::Arts => "#DD59AB",
            ActivityCategory::Event => "#E66767",
            ActivityCategory::Business => "#5C6CD6",
            ActivityCategory::Other => "#72CAB2",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_deserializes_lowercase() {
        let c: ActivityCategory = serde_json::from_str(r#""nightlife""#).unwrap();
        assert_eq!(c, ActivityCategory::Nightlife);
        assert_eq!(c.label(), "Nightlife");
    }

    #[test]
    fn test_unknown_category_is_other() {
        let c: ActivityCategory = serde_json::from_str(r#""sightseeing""#).unwrap();
        assert_eq!(c, ActivityCategory::Other);
    }

    #[test]
    fn test_every_category_has_distinct_color() {
        let mut colors: Vec<&str> = ActivityCategory::ALL.iter().map(|c| c.color()).collect();
        colors.sort_unstable();
        colors.dedup();
        assert_eq!(colors.len(), ActivityCategory::ALL.len());
    }
}
