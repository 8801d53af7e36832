// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Route text decoding.
//!
//! Navigations store their route as JSON text. Routes coming from the
//! directions service are whole route objects (`{ "geometry": {...},
//! "distance": ..., ... }`); straight-line flights are stored as just
//! `{ "geometry": {...} }`. A bare GeoJSON geometry is accepted too.

use crate::models::RouteGeometry;
use geo::{Coord, LineString, MultiLineString, Point};
use geojson::{Position, Value};

/// Decode serialized route text into structured geometry.
pub fn parse_route(text: &str) -> Result<RouteGeometry, RouteError> {
    let json: serde_json::Value =
        serde_json::from_str(text).map_err(|e| RouteError::Json(e.to_string()))?;

    let geometry_json = match json {
        serde_json::Value::Object(mut object) => match object.remove("geometry") {
            Some(inner) => inner,
            None => serde_json::Value::Object(object),
        },
        other => return Err(RouteError::NotAnObject(json_kind(&other))),
    };

    let geometry = geojson::Geometry::try_from(geometry_json)
        .map_err(|e: geojson::Error| RouteError::GeoJson(e.to_string()))?;

    let route = convert_geometry(geometry.value)?;
    if route.is_empty() {
        return Err(RouteError::Empty);
    }
    Ok(route)
}

/// Convert a GeoJSON geometry, keeping its type.
fn convert_geometry(value: Value) -> Result<RouteGeometry, RouteError> {
    match value {
        Value::LineString(positions) if positions.is_empty() => Err(RouteError::Empty),
        Value::LineString(positions) => line_from_positions(&positions).map(RouteGeometry::Line),
        Value::MultiLineString(lines) => lines
            .iter()
            .map(|l| line_from_positions(l))
            .collect::<Result<Vec<_>, _>>()
            .map(|lines| RouteGeometry::MultiLine(MultiLineString::new(lines))),
        Value::Point(position) => coord_from_position(&position)
            .map(|c| RouteGeometry::Point(Point::from(c))),
        Value::MultiPoint(positions) => positions
            .iter()
            .map(coord_from_position)
            .collect::<Result<Vec<_>, _>>()
            .map(|coords| RouteGeometry::MultiPoint(coords.into_iter().map(Point::from).collect())),
        _ => Err(RouteError::UnsupportedGeometry),
    }
}

// GeoJSON line strings need at least two positions.
fn line_from_positions(positions: &[Position]) -> Result<LineString<f64>, RouteError> {
    if positions.len() < 2 {
        return Err(RouteError::TooFewPositions(positions.len()));
    }
    positions
        .iter()
        .map(coord_from_position)
        .collect::<Result<Vec<_>, _>>()
        .map(LineString::new)
}

// Built by hand: the geojson -> geo conversion indexes positions directly
// and would panic on one shorter than two values.
fn coord_from_position(p: &Position) -> Result<Coord<f64>, RouteError> {
    match p.as_slice() {
        [lng, lat, ..] if lng.is_finite() && lat.is_finite() => Ok(Coord { x: *lng, y: *lat }),
        _ => Err(RouteError::InvalidPosition(p.clone())),
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// Errors from route decoding.
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    #[error("Route is not valid JSON: {0}")]
    Json(String),

    #[error("Route must be a JSON object, got {0}")]
    NotAnObject(&'static str),

    #[error("Failed to parse GeoJSON geometry: {0}")]
    GeoJson(String),

    #[error("Unsupported geometry type (expected LineString, MultiLineString, Point or MultiPoint)")]
    UnsupportedGeometry,

    #[error("Invalid position {0:?} (expected [longitude, latitude])")]
    InvalidPosition(Position),

    #[error("LineString has {0} position(s), at least two are needed")]
    TooFewPositions(usize),

    #[error("Route has no positions")]
    Empty,
}
