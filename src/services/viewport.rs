// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Viewport aggregation: turn a day's items into a camera directive.
//!
//! Stays and activities contribute their pin. Navigations contribute every
//! vertex of their route. Coordinates are used as-is; boxes crossing the
//! antimeridian are not special-cased.

use geo::{BoundingRect, Coord, MultiPoint};

use crate::config::ViewportConfig;
use crate::error::ItineraryWarning;
use crate::models::{DayItinerary, ItemKind, Location, RouteGeometry, Trip, ViewportDirective};

/// A directive plus what went into it.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    pub directive: ViewportDirective,
    /// Number of coordinates the directive covers
    pub point_count: usize,
    /// Pins left out because their coordinates did not parse
    pub warnings: Vec<ItineraryWarning>,
}

/// Computes camera directives using fixed zoom and padding settings.
#[derive(Debug, Clone, Default)]
pub struct ViewportAggregator {
    config: ViewportConfig,
}

impl ViewportAggregator {
    pub fn new(config: ViewportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ViewportConfig {
        &self.config
    }

    /// Directive covering everything active on the day.
    pub fn aggregate(&self, day: &DayItinerary<'_>) -> Viewport {
        let mut points = PointSet::default();

        for stay in &day.stays {
            points.add_location(ItemKind::Stay, &stay.id, &stay.location);
        }
        for activity in &day.activities {
            points.add_location(ItemKind::Activity, &activity.id, &activity.location);
        }
        for active in &day.navigations {
            points.add_route(&active.route);
        }

        points.into_viewport(self)
    }

    /// Initial camera for the trip screen.
    ///
    /// Covers every stay of the trip, the day's activities, and for each of
    /// the day's navigations its route plus both end points.
    pub fn overview(&self, trip: &Trip, day: &DayItinerary<'_>) -> Viewport {
        let mut points = PointSet::default();

        for stay in &trip.stays.items {
            points.add_location(ItemKind::Stay, &stay.id, &stay.location);
        }
        for activity in &day.activities {
            points.add_location(ItemKind::Activity, &activity.id, &activity.location);
        }
        for active in &day.navigations {
            let nav = active.navigation;
            points.add_route(&active.route);
            points.add_location(ItemKind::Navigation, &nav.id, &nav.starting_location);
            points.add_location(ItemKind::Navigation, &nav.id, &nav.ending_location);
        }

        points.into_viewport(self)
    }

    /// Center on a single pin (a tapped stay or activity).
    pub fn focus_location(&self, location: &Location) -> ViewportDirective {
        match location.coord() {
            Some(coord) => self.center(coord),
            None => ViewportDirective::NoOp,
        }
    }

    /// Fit a single navigation's route (a tapped navigation card).
    pub fn focus_route(&self, route: &RouteGeometry) -> ViewportDirective {
        let points: Vec<Coord<f64>> = route.vertices().collect();
        self.directive_for(&points)
    }

    /// Directive for a set of points: nothing for none, a centered camera
    /// for one, fitted bounds for more.
    pub fn directive_for(&self, points: &[Coord<f64>]) -> ViewportDirective {
        match points {
            [] => ViewportDirective::NoOp,
            [single] => self.center(*single),
            _ => {
                let multi: MultiPoint<f64> = points.iter().copied().collect();
                match multi.bounding_rect() {
                    Some(rect) => ViewportDirective::FitBounds {
                        northeast: rect.max().into(),
                        southwest: rect.min().into(),
                        padding: self.config.padding,
                        animation_ms: self.config.animation_ms,
                    },
                    None => ViewportDirective::NoOp,
                }
            }
        }
    }

    fn center(&self, coord: Coord<f64>) -> ViewportDirective {
        ViewportDirective::Center {
            coordinate: coord.into(),
            zoom_level: self.config.zoom_level,
            animation_ms: self.config.animation_ms,
        }
    }
}

/// Points collected for one directive, with warnings for dropped pins.
#[derive(Default)]
struct PointSet {
    coords: Vec<Coord<f64>>,
    warnings: Vec<ItineraryWarning>,
}

impl PointSet {
    fn add_location(&mut self, kind: ItemKind, id: &str, location: &Location) {
        match location.coord() {
            Some(coord) => self.coords.push(coord),
            None => {
                tracing::warn!(
                    %kind,
                    id,
                    latitude = ?location.latitude,
                    longitude = ?location.longitude,
                    "Invalid coordinate, pin left out of viewport"
                );
                self.warnings.push(ItineraryWarning::InvalidCoordinate {
                    kind,
                    id: id.to_string(),
                });
            }
        }
    }

    fn add_route(&mut self, route: &RouteGeometry) {
        self.coords.extend(route.vertices());
    }

    fn into_viewport(self, aggregator: &ViewportAggregator) -> Viewport {
        let directive = aggregator.directive_for(&self.coords);
        tracing::debug!(
            points = self.coords.len(),
            noop = directive.is_noop(),
            "Computed viewport"
        );
        Viewport {
            directive,
            point_count: self.coords.len(),
            warnings: self.warnings,
        }
    }
}
