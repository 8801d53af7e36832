// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Stay (lodging) model.

use serde::{Deserialize, Serialize};

use super::Location;

/// A lodging interval within a trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stay {
    pub id: String,
    pub name: String,
    /// Check-in timestamp (ISO 8601)
    pub check_in: String,
    /// Check-out timestamp (ISO 8601)
    pub check_out: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub location: Location,
}
