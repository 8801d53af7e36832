// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Trip model and the client-side projection of it.
//!
//! The backend owns trips. The app keeps a cached copy shaped like the
//! `TripFields` query result and patches it optimistically when the user
//! adds or removes an item; [`Trip::apply`] does the same patching here.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Activity, ItemKind, Navigation, Stay};
use crate::error::{ItineraryError, Result};
use crate::time_utils::calendar_day;

/// A `{ items, count }` list wrapper as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
}

impl<T> Default for Connection<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            count: None,
        }
    }
}

impl<T> Connection<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items, count: None }
    }

    fn push(&mut self, item: T) {
        self.items.push(item);
        self.sync_count();
    }

    fn remove_where(&mut self, pred: impl Fn(&T) -> bool) -> bool {
        let before = self.items.len();
        self.items.retain(|item| !pred(item));
        let removed = self.items.len() != before;
        if removed {
            self.sync_count();
        }
        removed
    }

    // Only maintain a count the server sent us in the first place.
    fn sync_count(&mut self) {
        if self.count.is_some() {
            self.count = Some(self.items.len() as u32);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub account: Account,
}

/// A user-created travel plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: String,
    pub name: String,
    /// First day of the trip (ISO 8601)
    pub start_at: String,
    /// Last day of the trip (ISO 8601)
    pub end_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_photo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invite_code: Option<String>,
    #[serde(default)]
    pub stays: Connection<Stay>,
    #[serde(default)]
    pub activities: Connection<Activity>,
    #[serde(default)]
    pub navigations: Connection<Navigation>,
    #[serde(default)]
    pub participants: Connection<Participant>,
}

/// An optimistic change to the cached trip.
#[derive(Debug, Clone)]
pub enum TripChange {
    AddStay(Stay),
    AddActivity(Activity),
    AddNavigation(Navigation),
    Remove { kind: ItemKind, id: String },
}

impl Trip {
    /// Parse a trip document.
    ///
    /// Accepts a bare trip object, a `{ "trip": ... }` query result or the
    /// full `{ "data": { "trip": ... } }` response envelope.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut value: serde_json::Value =
            serde_json::from_str(json).map_err(|e| ItineraryError::TripParse(e.to_string()))?;

        if let Some(data) = value.get_mut("data") {
            value = data.take();
        }
        if let Some(trip) = value.get_mut("trip") {
            value = trip.take();
        }

        serde_json::from_value(value).map_err(|e| ItineraryError::TripParse(e.to_string()))
    }

    /// First calendar day of the trip.
    pub fn start_date(&self) -> Result<NaiveDate> {
        calendar_day(&self.start_at)
    }

    /// Last calendar day of the trip.
    pub fn end_date(&self) -> Result<NaiveDate> {
        calendar_day(&self.end_at)
    }

    /// Apply an optimistic change. Returns `false` if nothing changed
    /// (removing an id that is not in the trip).
    pub fn apply(&mut self, change: TripChange) -> bool {
        match change {
            TripChange::AddStay(stay) => self.stays.push(stay),
            TripChange::AddActivity(activity) => self.activities.push(activity),
            TripChange::AddNavigation(navigation) => self.navigations.push(navigation),
            TripChange::Remove { kind, id } => {
                let removed = match kind {
                    ItemKind::Stay => self.stays.remove_where(|s| s.id == id),
                    ItemKind::Activity => self.activities.remove_where(|a| a.id == id),
                    ItemKind::Navigation => self.navigations.remove_where(|n| n.id == id),
                };
                if !removed {
                    tracing::debug!(trip_id = %self.id, %kind, %id, "Remove of unknown item ignored");
                }
                return removed;
            }
        }
        true
    }

    /// Whether the given account has joined this trip.
    pub fn is_participant(&self, account_id: &str) -> bool {
        self.participants
            .items
            .iter()
            .any(|p| p.account.id == account_id)
    }

    /// A viewer who has not joined sees the trip read-only, with options to
    /// join or duplicate it.
    pub fn is_preview_for(&self, account_id: &str) -> bool {
        !self.is_participant(account_id)
    }
}

/// Normalize a typed invite code (codes are upper case).
pub fn normalize_invite_code(code: &str) -> String {
    code.trim().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRIP_JSON: &str = r#"{
        "id": "t1",
        "name": "Balkans",
        "startAt": "2024-05-01T00:00:00.000Z",
        "endAt": "2024-05-07T00:00:00.000Z",
        "inviteCode": "ABC123",
        "stays": { "items": [] },
        "activities": { "items": [], "count": 0 },
        "navigations": { "items": [] },
        "participants": { "items": [ { "account": { "id": "acc-1" } } ] }
    }"#;

    #[test]
    fn test_from_json_bare() {
        let trip = Trip::from_json(TRIP_JSON).unwrap();
        assert_eq!(trip.name, "Balkans");
        assert_eq!(trip.activities.count, Some(0));
        assert_eq!(
            trip.start_date().unwrap(),
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
        );
    }

    #[test]
    fn test_from_json_response_envelope() {
        let wrapped = format!(r#"{{ "data": {{ "trip": {} }} }}"#, TRIP_JSON);
        let trip = Trip::from_json(&wrapped).unwrap();
        assert_eq!(trip.id, "t1");
    }

    #[test]
    fn test_from_json_invalid() {
        let err = Trip::from_json(r#"{ "id": "t1" }"#).unwrap_err();
        assert!(matches!(err, ItineraryError::TripParse(_)));
    }

    #[test]
    fn test_missing_collections_default_to_empty() {
        let trip = Trip::from_json(
            r#"{"id":"t","name":"n","startAt":"2024-01-01","endAt":"2024-01-02"}"#,
        )
        .unwrap();
        assert!(trip.stays.items.is_empty());
        assert!(trip.participants.items.is_empty());
    }

    #[test]
    fn test_preview_mode() {
        let trip = Trip::from_json(TRIP_JSON).unwrap();
        assert!(!trip.is_preview_for("acc-1"));
        assert!(trip.is_preview_for("acc-2"));
    }

    #[test]
    fn test_normalize_invite_code() {
        assert_eq!(normalize_invite_code(" abc123 "), "ABC123");
    }
}
