// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Day-scoped view of a trip: the items active on one calendar day.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use super::{Activity, Location, Navigation, RouteGeometry, Stay};
use crate::error::ItineraryWarning;
use crate::time_utils::parse_timestamp;

/// Which kind of itinerary entity something refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/src/generated/")
)]
pub enum ItemKind {
    Stay,
    Activity,
    Navigation,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ItemKind::Stay => "stay",
            ItemKind::Activity => "activity",
            ItemKind::Navigation => "navigation",
        })
    }
}

/// A navigation whose route text parsed successfully.
#[derive(Debug, Clone)]
pub struct ActiveNavigation<'a> {
    pub navigation: &'a Navigation,
    pub route: RouteGeometry,
}

/// Items active on one day, in the order they appear in the trip.
#[derive(Debug, Clone)]
pub struct DayItinerary<'a> {
    pub date: NaiveDate,
    /// Offset the day was computed in
    pub offset: FixedOffset,
    pub stays: Vec<&'a Stay>,
    pub activities: Vec<&'a Activity>,
    pub navigations: Vec<ActiveNavigation<'a>>,
    /// Entities left out because of bad data
    pub warnings: Vec<ItineraryWarning>,
}

impl<'a> DayItinerary<'a> {
    pub fn empty(date: NaiveDate, offset: FixedOffset) -> Self {
        Self {
            date,
            offset,
            stays: Vec::new(),
            activities: Vec::new(),
            navigations: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.stays.is_empty() && self.activities.is_empty() && self.navigations.is_empty()
    }

    /// Total number of active items.
    pub fn len(&self) -> usize {
        self.stays.len() + self.activities.len() + self.navigations.len()
    }
}

/// One entry of the trip timeline.
#[derive(Debug, Clone, Copy)]
pub enum ItineraryItem<'a> {
    Stay(&'a Stay),
    Activity(&'a Activity),
    Navigation(&'a ActiveNavigation<'a>),
}

impl<'a> ItineraryItem<'a> {
    pub fn kind(&self) -> ItemKind {
        match self {
            ItineraryItem::Stay(_) => ItemKind::Stay,
            ItineraryItem::Activity(_) => ItemKind::Activity,
            ItineraryItem::Navigation(_) => ItemKind::Navigation,
        }
    }

    pub fn id(&self) -> &'a str {
        match *self {
            ItineraryItem::Stay(s) => &s.id,
            ItineraryItem::Activity(a) => &a.id,
            ItineraryItem::Navigation(n) => &n.navigation.id,
        }
    }

    /// Timestamp the item sorts by: check-in for stays, start otherwise.
    pub fn starts_at(&self) -> &'a str {
        match *self {
            ItineraryItem::Stay(s) => &s.check_in,
            ItineraryItem::Activity(a) => &a.start_at,
            ItineraryItem::Navigation(n) => &n.navigation.start_at,
        }
    }

    /// Pin location for stays and activities. Navigations are shown as a
    /// route instead and have none.
    pub fn pin(&self) -> Option<&'a Location> {
        match *self {
            ItineraryItem::Stay(s) => Some(&s.location),
            ItineraryItem::Activity(a) => Some(&a.location),
            ItineraryItem::Navigation(_) => None,
        }
    }

    fn sort_key(&self) -> (bool, Option<DateTime<FixedOffset>>) {
        let ts = parse_timestamp(self.starts_at()).ok();
        (ts.is_none(), ts)
    }
}

/// Build the trip timeline for a day.
///
/// Every stay of the trip is listed (the stay card shows check-in or
/// check-out only on the matching day), followed by the day's activities and
/// navigations, all ordered by start time. Items with an unreadable start go
/// last; ties keep their input order.
pub fn timeline<'a>(all_stays: &'a [Stay], day: &'a DayItinerary<'a>) -> Vec<ItineraryItem<'a>> {
    let mut items: Vec<ItineraryItem<'a>> = all_stays
        .iter()
        .map(ItineraryItem::Stay)
        .chain(day.activities.iter().map(|a| ItineraryItem::Activity(*a)))
        .chain(day.navigations.iter().map(ItineraryItem::Navigation))
        .collect();
    items.sort_by_cached_key(|item| item.sort_key());
    items
}
