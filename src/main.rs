// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Trip-Itinerary day planner
//!
//! Loads a trip document, plans one day of it and prints the result as JSON:
//! the active item ids, the ordered timeline, the map camera directive and
//! any items that were left out.

use anyhow::Context;
use trip_itinerary::{config::Config, DayPlanner, Trip};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays valid JSON
    init_logging()?;

    // Load configuration from environment
    let config = Config::from_env().context("Failed to load configuration")?;

    let path = config
        .trip_file
        .clone()
        .context("TRIP_FILE must point to a trip JSON document")?;
    tracing::info!(path = %path.display(), "Loading trip");

    let json = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let trip = Trip::from_json(&json).context("Failed to load trip")?;

    let date = match config.selected_date {
        Some(date) => date,
        None => trip.start_date().context("Trip has no readable start date")?,
    };

    let planner = DayPlanner::from_config(&config);
    let plan = planner.plan(&trip, date);
    let summary = plan.summary();

    tracing::info!(
        trip_id = %trip.id,
        %date,
        items = plan.itinerary.len(),
        warnings = summary.warnings.len(),
        "Day planned"
    );

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

/// Initialize structured JSON logging on stderr.
fn init_logging() -> anyhow::Result<()> {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("trip_itinerary=debug".parse()?)
                .add_directive("info".parse()?),
        )
        .with(format)
        .init();
    Ok(())
}
