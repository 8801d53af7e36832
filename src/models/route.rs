// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Route geometry of a navigation leg.

use geo::{Coord, CoordsIter, LineString, MultiLineString, MultiPoint, Point};
use geojson::Position;

/// Structured route geometry, keeping the shape of the source geometry so it
/// renders as the same GeoJSON type it arrived as.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteGeometry {
    Line(LineString<f64>),
    MultiLine(MultiLineString<f64>),
    Point(Point<f64>),
    MultiPoint(MultiPoint<f64>),
}

impl RouteGeometry {
    /// Every vertex, in order.
    pub fn vertices(&self) -> Box<dyn Iterator<Item = Coord<f64>> + '_> {
        match self {
            RouteGeometry::Line(line) => Box::new(line.coords_iter()),
            RouteGeometry::MultiLine(lines) => Box::new(lines.coords_iter()),
            RouteGeometry::Point(point) => Box::new(point.coords_iter()),
            RouteGeometry::MultiPoint(points) => Box::new(points.coords_iter()),
        }
    }

    pub fn vertex_count(&self) -> usize {
        match self {
            RouteGeometry::Line(line) => line.coords_count(),
            RouteGeometry::MultiLine(lines) => lines.coords_count(),
            RouteGeometry::Point(_) => 1,
            RouteGeometry::MultiPoint(points) => points.coords_count(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }

    /// GeoJSON geometry for map rendering, of the same type as the source.
    pub fn to_geojson(&self) -> geojson::Geometry {
        let value = match self {
            RouteGeometry::Line(line) => geojson::Value::LineString(positions(line.coords_iter())),
            RouteGeometry::MultiLine(lines) => geojson::Value::MultiLineString(
                lines.iter().map(|line| positions(line.coords_iter())).collect(),
            ),
            RouteGeometry::Point(point) => geojson::Value::Point(vec![point.x(), point.y()]),
            RouteGeometry::MultiPoint(points) => {
                geojson::Value::MultiPoint(positions(points.coords_iter()))
            }
        };
        geojson::Geometry::new(value)
    }
}

fn positions(coords: impl Iterator<Item = Coord<f64>>) -> Vec<Position> {
    coords.map(|c| vec![c.x, c.y]).collect()
}
