// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - itinerary computations.

pub mod calendar;
pub mod filter;
pub mod map_features;
pub mod planner;
pub mod route;
pub mod viewport;

pub use filter::{DayMembership, ItineraryFilter};
pub use planner::{DayPlan, DayPlanner, DaySummary};
pub use route::{parse_route, RouteError};
pub use viewport::{Viewport, ViewportAggregator};
