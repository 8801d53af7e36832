// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Day planning: what runs when the user picks a date.
//!
//! 1. Filter the trip's items down to the selected day
//! 2. Aggregate the day's coordinates into a camera directive
//! 3. Order the timeline

use chrono::NaiveDate;
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::config::Config;
use crate::error::ItineraryWarning;
use crate::models::itinerary::timeline;
use crate::models::{DayItinerary, ItemKind, ItineraryItem, Trip, ViewportDirective};
use crate::services::filter::ItineraryFilter;
use crate::services::viewport::{Viewport, ViewportAggregator};

/// Filter and aggregator configured together.
#[derive(Debug, Clone, Default)]
pub struct DayPlanner {
    filter: ItineraryFilter,
    aggregator: ViewportAggregator,
}

impl DayPlanner {
    pub fn new(filter: ItineraryFilter, aggregator: ViewportAggregator) -> Self {
        Self { filter, aggregator }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            ItineraryFilter::new(config.membership).with_offset(config.utc_offset),
            ViewportAggregator::new(config.viewport.clone()),
        )
    }

    pub fn filter(&self) -> &ItineraryFilter {
        &self.filter
    }

    pub fn aggregator(&self) -> &ViewportAggregator {
        &self.aggregator
    }

    /// Plan `date` of `trip`. Always completes; bad items end up in
    /// [`DayPlan::warnings`].
    pub fn plan<'a>(&self, trip: &'a Trip, date: NaiveDate) -> DayPlan<'a> {
        tracing::info!(trip_id = %trip.id, %date, "Planning day");

        let itinerary = self.filter.filter_trip(trip, date);
        let viewport = self.aggregator.aggregate(&itinerary);

        DayPlan {
            trip,
            itinerary,
            viewport,
        }
    }
}

/// Result of planning one day.
#[derive(Debug, Clone)]
pub struct DayPlan<'a> {
    pub trip: &'a Trip,
    pub itinerary: DayItinerary<'a>,
    pub viewport: Viewport,
}

impl<'a> DayPlan<'a> {
    pub fn directive(&self) -> &ViewportDirective {
        &self.viewport.directive
    }

    /// Every warning from filtering and aggregation, filter warnings first.
    pub fn warnings(&self) -> impl Iterator<Item = &ItineraryWarning> {
        self.itinerary
            .warnings
            .iter()
            .chain(self.viewport.warnings.iter())
    }

    /// The day's timeline, ordered by start time.
    pub fn timeline(&self) -> Vec<ItineraryItem<'_>> {
        timeline(&self.trip.stays.items, &self.itinerary)
    }

    /// Owned, serializable summary of the plan.
    pub fn summary(&self) -> DaySummary {
        DaySummary {
            trip_id: self.trip.id.clone(),
            date: self.itinerary.date,
            stay_ids: self.itinerary.stays.iter().map(|s| s.id.clone()).collect(),
            activity_ids: self
                .itinerary
                .activities
                .iter()
                .map(|a| a.id.clone())
                .collect(),
            navigation_ids: self
                .itinerary
                .navigations
                .iter()
                .map(|n| n.navigation.id.clone())
                .collect(),
            timeline: self
                .timeline()
                .iter()
                .map(|item| TimelineEntry {
                    kind: item.kind(),
                    id: item.id().to_string(),
                })
                .collect(),
            viewport: self.viewport.directive.clone(),
            warnings: self.warnings().cloned().collect(),
        }
    }
}

/// Timeline entry in a [`DaySummary`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/src/generated/")
)]
pub struct TimelineEntry {
    pub kind: ItemKind,
    pub id: String,
}

/// Serializable day plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/src/generated/")
)]
pub struct DaySummary {
    pub trip_id: String,
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub date: NaiveDate,
    pub stay_ids: Vec<String>,
    pub activity_ids: Vec<String>,
    pub navigation_ids: Vec<String>,
    pub timeline: Vec<TimelineEntry>,
    pub viewport: ViewportDirective,
    pub warnings: Vec<ItineraryWarning>,
}
