// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Error and warning types for itinerary computations.
//!
//! Document-level problems (a trip that does not deserialize, a selected date
//! that does not parse) are errors. Problems with a single stay, activity or
//! navigation are warnings: the entity is left out and the computation for
//! the day still completes.

use crate::models::ItemKind;
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Errors that abort a whole operation.
#[derive(Debug, thiserror::Error)]
pub enum ItineraryError {
    #[error("Failed to parse trip document: {0}")]
    TripParse(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

/// Recoverable per-entity condition reported alongside a result.
#[derive(Debug, Clone, PartialEq, Serialize, thiserror::Error)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/src/generated/")
)]
pub enum ItineraryWarning {
    #[error("navigation {navigation_id} has a malformed route: {reason}")]
    MalformedRoute {
        navigation_id: String,
        reason: String,
    },

    #[error("{kind} {id} has an invalid timestamp: {value:?}")]
    InvalidTimestamp {
        kind: ItemKind,
        id: String,
        value: String,
    },

    #[error("{kind} {id} has an invalid coordinate")]
    InvalidCoordinate { kind: ItemKind, id: String },
}

impl ItineraryWarning {
    /// Id of the stay, activity or navigation the warning is about.
    pub fn item_id(&self) -> &str {
        match self {
            ItineraryWarning::MalformedRoute { navigation_id, .. } => navigation_id,
            ItineraryWarning::InvalidTimestamp { id, .. } => id,
            ItineraryWarning::InvalidCoordinate { id, .. } => id,
        }
    }
}

/// Result type alias for itinerary operations.
pub type Result<T> = std::result::Result<T, ItineraryError>;
