// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Trip-Itinerary: day-scoped itinerary and map viewport for trip plans
//!
//! This crate decides which stays, activities and navigation legs of a trip
//! are active on a selected day, and turns their coordinates into a camera
//! directive (center on a point or fit a bounding box) for the trip map.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod time_utils;

pub use config::{Config, ViewportConfig};
pub use error::{ItineraryError, ItineraryWarning};
pub use models::{DayItinerary, Trip, ViewportDirective};
pub use services::{DayMembership, DayPlanner, ItineraryFilter, ViewportAggregator};
