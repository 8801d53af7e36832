//! Configuration loaded from environment variables.
//!
//! Every setting has a default, so an empty environment yields a working
//! configuration. A value that is present but malformed is an error.

use chrono::{FixedOffset, NaiveDate};
use std::env;
use std::path::PathBuf;

use crate::models::Padding;
use crate::services::filter::DayMembership;
use crate::time_utils::{parse_offset, utc_offset};

/// Camera settings for viewport directives.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportConfig {
    /// Zoom used when centering on a single point
    pub zoom_level: f64,
    /// Inset applied when fitting bounds
    pub padding: Padding,
    /// Camera animation length in milliseconds
    pub animation_ms: u32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            zoom_level: 12.0,
            padding: Padding::default(),
            animation_ms: 500,
        }
    }
}

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub viewport: ViewportConfig,
    /// Rule for deciding whether an item falls on a day
    pub membership: DayMembership,
    /// Offset of the zone the trip is shown in; item days are taken here
    pub utc_offset: FixedOffset,
    /// Trip document to load (demo binary only)
    pub trip_file: Option<PathBuf>,
    /// Day to plan; the trip's first day when unset
    pub selected_date: Option<NaiveDate>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            viewport: ViewportConfig::default(),
            membership: DayMembership::default(),
            utc_offset: utc_offset(),
            trip_file: None,
            selected_date: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let defaults = ViewportConfig::default();
        let get = |key: &'static str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let zoom_level = match get("DEFAULT_ZOOM") {
            Some(v) => v
                .parse::<f64>()
                .ok()
                .filter(|z| z.is_finite() && *z >= 0.0)
                .ok_or(ConfigError::Invalid("DEFAULT_ZOOM", v))?,
            None => defaults.zoom_level,
        };

        let padding = match get("FIT_PADDING") {
            Some(v) => parse_padding(&v).ok_or(ConfigError::Invalid("FIT_PADDING", v))?,
            None => defaults.padding,
        };

        let animation_ms = match get("ANIMATION_MS") {
            Some(v) => v
                .parse::<u32>()
                .map_err(|_| ConfigError::Invalid("ANIMATION_MS", v))?,
            None => defaults.animation_ms,
        };

        let membership = match get("DAY_MEMBERSHIP") {
            Some(v) => v
                .parse::<DayMembership>()
                .map_err(|_| ConfigError::Invalid("DAY_MEMBERSHIP", v))?,
            None => DayMembership::default(),
        };

        let offset = match get("TZ_OFFSET") {
            Some(v) => parse_offset(&v).map_err(|_| ConfigError::Invalid("TZ_OFFSET", v))?,
            None => utc_offset(),
        };

        let selected_date = get("SELECTED_DATE")
            .map(|v| {
                NaiveDate::parse_from_str(&v, "%Y-%m-%d")
                    .map_err(|_| ConfigError::Invalid("SELECTED_DATE", v))
            })
            .transpose()?;

        Ok(Self {
            viewport: ViewportConfig {
                zoom_level,
                padding,
                animation_ms,
            },
            membership,
            utc_offset: offset,
            trip_file: get("TRIP_FILE").map(PathBuf::from),
            selected_date,
        })
    }
}

/// Parse `top,right,bottom,left`, or a single value for all four sides.
fn parse_padding(value: &str) -> Option<Padding> {
    let parts = value
        .split(',')
        .map(|p| p.trim().parse::<u32>().ok())
        .collect::<Option<Vec<_>>>()?;
    match parts.as_slice() {
        [all] => Some(Padding {
            top: *all,
            right: *all,
            bottom: *all,
            left: *all,
        }),
        [top, right, bottom, left] => Some(Padding {
            top: *top,
            right: *right,
            bottom: *bottom,
            left: *left,
        }),
        _ => None,
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1:?}")]
    Invalid(&'static str, String),
}
