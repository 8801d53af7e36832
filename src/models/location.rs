// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Location model shared by stays, activities and navigations.

use geo::Coord;
use serde::{Deserialize, Serialize};

/// A degree value as the API sends it: a JSON number or numeric text.
///
/// Anything else (`null`, a missing field, an object) is kept as
/// [`Degrees::Other`] so the location loads and only its point is dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Degrees {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl Default for Degrees {
    fn default() -> Self {
        Degrees::Other(serde_json::Value::Null)
    }
}

impl Degrees {
    /// Numeric value, or `None` if the text is not a finite number.
    pub fn value(&self) -> Option<f64> {
        let value = match self {
            Degrees::Number(v) => *v,
            Degrees::Text(s) => s.trim().parse::<f64>().ok()?,
            Degrees::Other(_) => return None,
        };
        value.is_finite().then_some(value)
    }
}

impl From<f64> for Degrees {
    fn from(value: f64) -> Self {
        Degrees::Number(value)
    }
}

/// A named point on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub latitude: Degrees,
    #[serde(default)]
    pub longitude: Degrees,
}

impl Location {
    /// Map coordinate (`x` = longitude, `y` = latitude), if both values parse.
    pub fn coord(&self) -> Option<Coord<f64>> {
        Some(Coord {
            x: self.longitude.value()?,
            y: self.latitude.value()?,
        })
    }
}
