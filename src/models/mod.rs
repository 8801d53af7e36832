// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for trips and their itinerary items.

pub mod activity;
pub mod itinerary;
pub mod location;
pub mod navigation;
pub mod route;
pub mod stay;
pub mod trip;
pub mod viewport;

pub use activity::{Activity, ActivityCategory};
pub use itinerary::{ActiveNavigation, DayItinerary, ItemKind, ItineraryItem};
pub use location::{Degrees, Location};
pub use navigation::{Navigation, TravelMode};
pub use route::RouteGeometry;
pub use stay::Stay;
pub use trip::{Connection, Participant, Trip, TripChange};
pub use viewport::{LngLat, Padding, ViewportDirective};
