// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! GeoJSON feature collection for the trip map.
//!
//! The map draws one shape source. Point features carry a `pin` image name
//! (and for stays a `callout`), route features are drawn as lines under the
//! pins. Every feature has the item `id` so taps can be mapped back.

use chrono::{FixedOffset, NaiveDate};
use geo::Coord;
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, JsonValue, Value};

use crate::error::ItineraryWarning;
use crate::models::{DayItinerary, ItemKind, Location, Stay, Trip};
use crate::time_utils::calendar_day_in;

pub const STAY_PIN: &str = "stayPin";
pub const ACTIVITY_PIN: &str = "activityPin";
pub const END_POINT_PIN: &str = "endPointPin";
pub const CHECK_IN_CALLOUT: &str = "checkInCallout";
pub const CHECK_OUT_CALLOUT: &str = "checkOutCallout";
pub const STAY_CALLOUT: &str = "stayCallout";

/// Map features for a day, plus warnings for pins that were left out.
pub fn day_features(
    trip: &Trip,
    day: &DayItinerary<'_>,
) -> (FeatureCollection, Vec<ItineraryWarning>) {
    let mut features = Vec::new();
    let mut warnings = Vec::new();

    for stay in &trip.stays.items {
        let Some(coord) = pin_coord(ItemKind::Stay, &stay.id, &stay.location, &mut warnings)
        else {
            continue;
        };
        let mut props = properties(&stay.id, "stay");
        props.insert("title".to_string(), JsonValue::from(stay.name.as_str()));
        props.insert("pin".to_string(), JsonValue::from(STAY_PIN));
        props.insert(
            "callout".to_string(),
            JsonValue::from(stay_callout(stay, day.date, day.offset)),
        );
        features.push(point_feature(coord, props));
    }

    for activity in &day.activities {
        let Some(coord) = pin_coord(
            ItemKind::Activity,
            &activity.id,
            &activity.location,
            &mut warnings,
        ) else {
            continue;
        };
        let mut props = properties(&activity.id, "activity");
        props.insert("title".to_string(), JsonValue::from(activity.name.as_str()));
        props.insert("pin".to_string(), JsonValue::from(ACTIVITY_PIN));
        features.push(point_feature(coord, props));
    }

    for active in &day.navigations {
        features.push(Feature {
            bbox: None,
            geometry: Some(active.route.to_geojson()),
            id: None,
            properties: Some(properties(&active.navigation.id, "route")),
            foreign_members: None,
        });
    }

    for active in &day.navigations {
        let nav = active.navigation;
        for location in [&nav.starting_location, &nav.ending_location] {
            if let Some(coord) = pin_coord(ItemKind::Navigation, &nav.id, location, &mut warnings) {
                let mut props = properties(&nav.id, "navigation");
                props.insert("pin".to_string(), JsonValue::from(END_POINT_PIN));
                features.push(point_feature(coord, props));
            }
        }
    }

    tracing::debug!(
        date = %day.date,
        features = features.len(),
        "Built map features"
    );

    let collection = FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    };
    (collection, warnings)
}

/// Callout shown above a stay pin on `date`, with days taken in `offset`.
///
/// Check-in wins when a stay starts and ends on the same day.
pub fn stay_callout(stay: &Stay, date: NaiveDate, offset: FixedOffset) -> &'static str {
    if calendar_day_in(&stay.check_in, offset).is_ok_and(|d| d == date) {
        CHECK_IN_CALLOUT
    } else if calendar_day_in(&stay.check_out, offset).is_ok_and(|d| d == date) {
        CHECK_OUT_CALLOUT
    } else {
        STAY_CALLOUT
    }
}

fn pin_coord(
    kind: ItemKind,
    id: &str,
    location: &Location,
    warnings: &mut Vec<ItineraryWarning>,
) -> Option<Coord<f64>> {
    let coord = location.coord();
    if coord.is_none() {
        tracing::warn!(%kind, id, "Invalid coordinate, map pin left out");
        warnings.push(ItineraryWarning::InvalidCoordinate {
            kind,
            id: id.to_string(),
        });
    }
    coord
}

fn properties(id: &str, poi: &str) -> JsonObject {
    let mut props = JsonObject::new();
    props.insert("id".to_string(), JsonValue::from(id));
    props.insert("poi".to_string(), JsonValue::from(poi));
    props
}

fn point_feature(coord: Coord<f64>, properties: JsonObject) -> Feature {
    Feature {
        bbox: None,
        geometry: Some(Geometry::new(Value::Point(vec![coord.x, coord.y]))),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}
