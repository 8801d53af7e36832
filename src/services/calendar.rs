// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Trip calendar: day counts, the day selector strip and stay markers.

use chrono::{Datelike, Days, FixedOffset, NaiveDate};
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::error::Result;
use crate::models::{Stay, Trip};
use crate::time_utils::{format_clock, format_day_month, parse_timestamp};

/// One entry of the day selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/src/generated/")
)]
pub struct TripDay {
    /// 1-based day number within the strip
    pub index: u32,
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub date: NaiveDate,
    /// Short weekday name, e.g. `Mon`
    pub weekday: String,
    pub day_of_month: u32,
    /// Padding day after the trip ends; shown but not selectable
    pub disabled: bool,
}

/// Number of days a trip covers, counting both ends.
///
/// A trip that ends before it starts has no days.
pub fn trip_length_days(start: NaiveDate, end: NaiveDate) -> u32 {
    let days = (end - start).num_days() + 1;
    days.max(0) as u32
}

/// Days of the trip for the day selector.
///
/// The strip always shows at least `min_visible` days; extra days after the
/// trip end are included as disabled.
pub fn trip_days(start: NaiveDate, end: NaiveDate, min_visible: u32) -> Vec<TripDay> {
    let length = trip_length_days(start, end);
    let shown = length.max(min_visible);

    (0..shown)
        .filter_map(|offset| {
            let date = start.checked_add_days(Days::new(offset.into()))?;
            Some(TripDay {
                index: offset + 1,
                date,
                weekday: date.format("%a").to_string(),
                day_of_month: date.day(),
                disabled: offset >= length,
            })
        })
        .collect()
}

/// Header label for a trip's dates, e.g. `3 Mar - 9 Mar`.
pub fn date_range_label(trip: &Trip) -> Result<String> {
    let start = trip.start_date()?;
    let end = trip.end_date()?;
    Ok(format!(
        "{} - {}",
        format_day_month(start),
        format_day_month(end)
    ))
}

/// Check-in/check-out line shown on a stay card for the selected day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "time", rename_all = "camelCase")]
pub enum StayMarker {
    CheckIn(String),
    CheckOut(String),
}

/// Markers for a stay on `date`, with times shown in `offset`. A one-day
/// stay has both.
pub fn stay_markers(stay: &Stay, date: NaiveDate, offset: FixedOffset) -> Vec<StayMarker> {
    let local = |value: &str| parse_timestamp(value).map(|ts| ts.with_timezone(&offset));
    let mut markers = Vec::new();
    if let Ok(ts) = local(&stay.check_in) {
        if ts.date_naive() == date {
            markers.push(StayMarker::CheckIn(format_clock(ts)));
        }
    }
    if let Ok(ts) = local(&stay.check_out) {
        if ts.date_naive() == date {
            markers.push(StayMarker::CheckOut(format_clock(ts)));
        }
    }
    markers
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_trip_length_single_day() {
        assert_eq!(trip_length_days(date(2024, 3, 3), date(2024, 3, 3)), 1);
    }

    #[test]
    fn test_trip_length_across_new_year() {
        assert_eq!(trip_length_days(date(2023, 12, 30), date(2024, 1, 2)), 4);
    }

    #[test]
    fn test_trip_length_inverted() {
        assert_eq!(trip_length_days(date(2024, 3, 5), date(2024, 3, 3)), 0);
    }

    #[test]
    fn test_trip_days_padded() {
        let days = trip_days(date(2024, 3, 4), date(2024, 3, 5), 5);
        assert_eq!(days.len(), 5);
        assert_eq!(days[0].weekday, "Mon");
        assert_eq!(days[0].index, 1);
        assert!(!days[1].disabled);
        assert!(days[2].disabled);
        assert_eq!(days[4].date, date(2024, 3, 8));
    }

    #[test]
    fn test_trip_days_longer_than_minimum() {
        let days = trip_days(date(2024, 2, 27), date(2024, 3, 2), 3);
        assert_eq!(days.len(), 5);
        assert!(days.iter().all(|d| !d.disabled));
        // Leap day included
        assert_eq!(days[2].day_of_month, 29);
    }

    fn inn(check_in: &str, check_out: &str) -> Stay {
        Stay {
            id: "s".to_string(),
            name: "Inn".to_string(),
            check_in: check_in.to_string(),
            check_out: check_out.to_string(),
            price: None,
            notes: None,
            location: crate::models::Location {
                id: "l".to_string(),
                name: String::new(),
                latitude: 0.0.into(),
                longitude: 0.0.into(),
            },
        }
    }

    fn utc() -> FixedOffset {
        crate::time_utils::utc_offset()
    }

    #[test]
    fn test_stay_markers() {
        let stay = inn("2024-03-04T15:00:00Z", "2024-03-06T10:30:00Z");
        assert_eq!(
            stay_markers(&stay, date(2024, 3, 4), utc()),
            vec![StayMarker::CheckIn("15:00".to_string())]
        );
        assert!(stay_markers(&stay, date(2024, 3, 5), utc()).is_empty());
        assert_eq!(
            stay_markers(&stay, date(2024, 3, 6), utc()),
            vec![StayMarker::CheckOut("10:30".to_string())]
        );
    }

    #[test]
    fn test_stay_markers_in_display_offset() {
        let stay = inn("2024-03-04T23:00:00Z", "2024-03-06T10:30:00Z");
        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        assert!(stay_markers(&stay, date(2024, 3, 4), plus_two).is_empty());
        assert_eq!(
            stay_markers(&stay, date(2024, 3, 5), plus_two),
            vec![StayMarker::CheckIn("01:00".to_string())]
        );
        assert_eq!(
            stay_markers(&stay, date(2024, 3, 6), plus_two),
            vec![StayMarker::CheckOut("12:30".to_string())]
        );
    }
}
