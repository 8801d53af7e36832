// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for parsing and formatting trip dates.

use crate::error::{ItineraryError, Result};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Offset, Utc};

/// Parse an API timestamp.
///
/// Accepts RFC 3339 (`2024-03-10T09:30:00.000Z`, `2024-03-10T09:30:00+02:00`),
/// an offset-less `YYYY-MM-DDTHH:MM:SS` (read as UTC) and a bare
/// `YYYY-MM-DD` (midnight UTC).
pub fn parse_timestamp(value: &str) -> Result<DateTime<FixedOffset>> {
    let value = value.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Ok(ts);
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.and_utc().fixed_offset());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc().fixed_offset())
        .ok_or_else(|| ItineraryError::InvalidDate(value.to_string()))
}

/// Calendar day of a timestamp, in the offset it was sent with.
pub fn calendar_day(value: &str) -> Result<NaiveDate> {
    parse_timestamp(value).map(|ts| ts.date_naive())
}

/// Calendar day of a timestamp as seen in `offset`, the zone the trip is
/// displayed in.
pub fn calendar_day_in(value: &str, offset: FixedOffset) -> Result<NaiveDate> {
    parse_timestamp(value).map(|ts| ts.with_timezone(&offset).date_naive())
}

/// The UTC offset, used when no display offset is configured.
pub fn utc_offset() -> FixedOffset {
    Utc.fix()
}

/// Parse a display offset such as `+02:00`, `-0530`, `Z` or `UTC`.
pub fn parse_offset(value: &str) -> Result<FixedOffset> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("z") || value.eq_ignore_ascii_case("utc") {
        return Ok(utc_offset());
    }
    value
        .parse::<FixedOffset>()
        .map_err(|_| ItineraryError::InvalidDate(value.to_string()))
}

/// Parse a selected date, given either as `YYYY-MM-DD` or as a full timestamp.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").or_else(|_| calendar_day(value))
}

/// Format a date the way trip headers show it, e.g. `3 Mar`.
pub fn format_day_month(date: NaiveDate) -> String {
    date.format("%-d %b").to_string()
}

/// Format the wall-clock time of a timestamp, e.g. `09:30`.
pub fn format_clock(ts: DateTime<FixedOffset>) -> String {
    ts.format("%H:%M").to_string()
}
