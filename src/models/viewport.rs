// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Map camera directives handed to the map renderer.

use geo::Coord;
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// A map coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/src/generated/")
)]
pub struct LngLat {
    pub lng: f64,
    pub lat: f64,
}

impl LngLat {
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }
}

impl From<Coord<f64>> for LngLat {
    fn from(c: Coord<f64>) -> Self {
        Self { lng: c.x, lat: c.y }
    }
}

/// Screen-space inset around fitted bounds, in points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/src/generated/")
)]
pub struct Padding {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Default for Padding {
    /// Extra room at the top keeps pins clear of the status bar.
    fn default() -> Self {
        Self {
            top: 100,
            right: 50,
            bottom: 50,
            left: 50,
        }
    }
}

/// What the map camera should do.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/src/generated/")
)]
pub enum ViewportDirective {
    /// Nothing to show; leave the camera where it is.
    NoOp,
    /// Center on a single point at a fixed zoom.
    Center {
        coordinate: LngLat,
        zoom_level: f64,
        animation_ms: u32,
    },
    /// Fit an axis-aligned box.
    FitBounds {
        northeast: LngLat,
        southwest: LngLat,
        padding: Padding,
        animation_ms: u32,
    },
}

impl ViewportDirective {
    pub fn is_noop(&self) -> bool {
        matches!(self, ViewportDirective::NoOp)
    }
}
