// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use chrono::NaiveDate;
use serde_json::{json, Value};
use trip_itinerary::models::{Activity, Location, Navigation, Stay, Trip};

/// Date in 2024 (a leap year).
#[allow(dead_code)]
pub fn day(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, month, day).expect("valid test date")
}

/// Timestamp string for noon UTC on a 2024 date.
#[allow(dead_code)]
pub fn noon(month: u32, day: u32) -> String {
    format!("2024-{:02}-{:02}T12:00:00.000Z", month, day)
}

#[allow(dead_code)]
pub fn location_json(id: &str, lng: f64, lat: f64) -> Value {
    json!({ "id": id, "name": format!("Place {}", id), "latitude": lat, "longitude": lng })
}

#[allow(dead_code)]
pub fn location(id: &str, lng: f64, lat: f64) -> Location {
    serde_json::from_value(location_json(id, lng, lat)).expect("valid location")
}

#[allow(dead_code)]
pub fn stay(id: &str, check_in: &str, check_out: &str, lng: f64, lat: f64) -> Stay {
    serde_json::from_value(json!({
        "id": id,
        "name": format!("Stay {}", id),
        "checkIn": check_in,
        "checkOut": check_out,
        "price": 80.0,
        "location": location_json(&format!("{}-loc", id), lng, lat),
    }))
    .expect("valid stay")
}

#[allow(dead_code)]
pub fn activity(id: &str, start_at: &str, end_at: &str, lng: f64, lat: f64) -> Activity {
    serde_json::from_value(json!({
        "id": id,
        "name": format!("Activity {}", id),
        "startAt": start_at,
        "endAt": end_at,
        "category": "outdoors",
        "location": location_json(&format!("{}-loc", id), lng, lat),
    }))
    .expect("valid activity")
}

/// Route text the way the app stores it: a route object with a geometry.
#[allow(dead_code)]
pub fn route_text(coords: &[(f64, f64)]) -> String {
    let coordinates: Vec<[f64; 2]> = coords.iter().map(|(x, y)| [*x, *y]).collect();
    json!({
        "distance": 1000.0,
        "duration": 600.0,
        "geometry": { "type": "LineString", "coordinates": coordinates }
    })
    .to_string()
}

#[allow(dead_code)]
pub fn navigation(id: &str, start_at: &str, route: &str) -> Navigation {
    serde_json::from_value(json!({
        "id": id,
        "type": "driving",
        "startAt": start_at,
        "duration": 600.0,
        "distance": 1000.0,
        "startingLocation": location_json(&format!("{}-from", id), 0.0, 0.0),
        "endingLocation": location_json(&format!("{}-to", id), 1.0, 1.0),
        "route": route,
    }))
    .expect("valid navigation")
}

/// Trip over the given dates with the given items.
#[allow(dead_code)]
pub fn trip(
    start_at: &str,
    end_at: &str,
    stays: Vec<Stay>,
    activities: Vec<Activity>,
    navigations: Vec<Navigation>,
) -> Trip {
    let mut trip: Trip = serde_json::from_value(json!({
        "id": "trip-1",
        "name": "Test trip",
        "startAt": start_at,
        "endAt": end_at,
        "inviteCode": "JOINME",
        "participants": { "items": [ { "account": { "id": "owner" } } ] }
    }))
    .expect("valid trip");
    trip.stays.items = stays;
    trip.activities.items = activities;
    trip.navigations.items = navigations;
    trip
}
