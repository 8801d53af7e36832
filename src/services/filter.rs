// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Itinerary filter: which stays, activities and navigations are active on a
//! selected day of a trip.
//!
//! Stays and activities are active on every day from their start through
//! their end. A navigation is active only on the day it starts, however long
//! it takes.

use chrono::{Datelike, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ItineraryWarning;
use crate::models::{
    ActiveNavigation, Activity, DayItinerary, ItemKind, Navigation, RouteGeometry, Stay, Trip,
};
use crate::services::route::parse_route;
use crate::time_utils::{calendar_day_in, utc_offset};

/// How two calendar days are compared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DayMembership {
    /// Compare full dates. Handles trips that cross New Year.
    #[default]
    CalendarDate,
    /// Compare day-of-year only, ignoring the year. Matches what older app
    /// builds show, including their misclassification across December 31.
    DayOfYear,
}

impl DayMembership {
    fn key(self, date: NaiveDate) -> i32 {
        match self {
            DayMembership::CalendarDate => date.num_days_from_ce(),
            DayMembership::DayOfYear => date.ordinal() as i32,
        }
    }

    pub fn same_day(self, a: NaiveDate, b: NaiveDate) -> bool {
        self.key(a) == self.key(b)
    }

    /// Whether `day` falls in `start..=end`.
    pub fn within(self, start: NaiveDate, end: NaiveDate, day: NaiveDate) -> bool {
        let day = self.key(day);
        self.key(start) <= day && day <= self.key(end)
    }
}

impl FromStr for DayMembership {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "calendar-date" | "calendar_date" | "date" => Ok(DayMembership::CalendarDate),
            "day-of-year" | "day_of_year" | "ordinal" => Ok(DayMembership::DayOfYear),
            other => Err(format!("unknown day membership rule: {}", other)),
        }
    }
}

/// Selects the items active on a day.
///
/// Timestamps are bucketed into days in the display offset (UTC unless set
/// with [`ItineraryFilter::with_offset`]), not the offset they were sent in.
#[derive(Debug, Clone, Copy)]
pub struct ItineraryFilter {
    membership: DayMembership,
    offset: FixedOffset,
}

impl Default for ItineraryFilter {
    fn default() -> Self {
        Self::new(DayMembership::default())
    }
}

impl ItineraryFilter {
    pub fn new(membership: DayMembership) -> Self {
        Self {
            membership,
            offset: utc_offset(),
        }
    }

    pub fn with_offset(self, offset: FixedOffset) -> Self {
        Self { offset, ..self }
    }

    pub fn membership(&self) -> DayMembership {
        self.membership
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Filter a trip's items for `date`.
    pub fn filter_trip<'a>(&self, trip: &'a Trip, date: NaiveDate) -> DayItinerary<'a> {
        self.filter_day(
            &trip.stays.items,
            &trip.activities.items,
            &trip.navigations.items,
            date,
        )
    }

    /// Filter item collections for `date`.
    ///
    /// Output keeps input order. An item with an unreadable timestamp, or a
    /// navigation whose route does not decode, is left out and reported in
    /// [`DayItinerary::warnings`].
    pub fn filter_day<'a>(
        &self,
        stays: &'a [Stay],
        activities: &'a [Activity],
        navigations: &'a [Navigation],
        date: NaiveDate,
    ) -> DayItinerary<'a> {
        let mut day = DayItinerary::empty(date, self.offset);

        for stay in stays {
            match self.spans(ItemKind::Stay, &stay.id, &stay.check_in, &stay.check_out, date) {
                Ok(true) => day.stays.push(stay),
                Ok(false) => {}
                Err(warning) => day.warnings.push(warning),
            }
        }

        for activity in activities {
            match self.spans(
                ItemKind::Activity,
                &activity.id,
                &activity.start_at,
                &activity.end_at,
                date,
            ) {
                Ok(true) => day.activities.push(activity),
                Ok(false) => {}
                Err(warning) => day.warnings.push(warning),
            }
        }

        for navigation in navigations {
            let starts_today = self
                .day_of(ItemKind::Navigation, &navigation.id, &navigation.start_at)
                .map(|start| self.membership.same_day(start, date));
            // Only the day's routes are decoded
            let route = match starts_today {
                Ok(true) => decode_route(navigation).map(Some),
                Ok(false) => Ok(None),
                Err(warning) => Err(warning),
            };
            match route {
                Ok(Some(route)) => day.navigations.push(ActiveNavigation { navigation, route }),
                Ok(None) => {}
                Err(warning) => day.warnings.push(warning),
            }
        }

        for warning in &day.warnings {
            tracing::warn!(
                %date,
                item_id = warning.item_id(),
                warning = %warning,
                "Item left out of day itinerary"
            );
        }
        tracing::debug!(
            %date,
            stays = day.stays.len(),
            activities = day.activities.len(),
            navigations = day.navigations.len(),
            "Filtered day itinerary"
        );

        day
    }

    fn spans(
        &self,
        kind: ItemKind,
        id: &str,
        start: &str,
        end: &str,
        date: NaiveDate,
    ) -> Result<bool, ItineraryWarning> {
        let start = self.day_of(kind, id, start)?;
        let end = self.day_of(kind, id, end)?;
        Ok(self.membership.within(start, end, date))
    }

    fn day_of(&self, kind: ItemKind, id: &str, value: &str) -> Result<NaiveDate, ItineraryWarning> {
        calendar_day_in(value, self.offset).map_err(|_| ItineraryWarning::InvalidTimestamp {
            kind,
            id: id.to_string(),
            value: value.to_string(),
        })
    }
}

fn decode_route(navigation: &Navigation) -> Result<RouteGeometry, ItineraryWarning> {
    let text = navigation
        .route
        .as_deref()
        .ok_or_else(|| ItineraryWarning::MalformedRoute {
            navigation_id: navigation.id.clone(),
            reason: "route is missing".to_string(),
        })?;
    parse_route(text).map_err(|e| ItineraryWarning::MalformedRoute {
        navigation_id: navigation.id.clone(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_calendar_date_within_across_new_year() {
        let rule = DayMembership::CalendarDate;
        assert!(rule.within(date(2023, 12, 30), date(2024, 1, 2), date(2024, 1, 1)));
        assert!(rule.within(date(2023, 12, 30), date(2024, 1, 2), date(2023, 12, 31)));
        assert!(!rule.within(date(2023, 12, 30), date(2024, 1, 2), date(2024, 1, 3)));
    }

    #[test]
    fn test_day_of_year_misses_across_new_year() {
        // Start ordinal 364 > end ordinal 2, so nothing is ever inside
        let rule = DayMembership::DayOfYear;
        assert!(!rule.within(date(2023, 12, 30), date(2024, 1, 2), date(2024, 1, 1)));
        assert!(!rule.within(date(2023, 12, 30), date(2024, 1, 2), date(2023, 12, 31)));
    }

    #[test]
    fn test_day_of_year_ignores_year() {
        let rule = DayMembership::DayOfYear;
        assert!(rule.same_day(date(2023, 5, 5), date(2024, 5, 4)));
        assert!(!DayMembership::CalendarDate.same_day(date(2023, 5, 5), date(2024, 5, 4)));
    }

    #[test]
    fn test_membership_from_str() {
        assert_eq!(
            "day-of-year".parse::<DayMembership>().unwrap(),
            DayMembership::DayOfYear
        );
        assert_eq!(
            " Calendar-Date ".parse::<DayMembership>().unwrap(),
            DayMembership::CalendarDate
        );
        assert!("weekly".parse::<DayMembership>().is_err());
    }
}
