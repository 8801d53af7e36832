use criterion::{criterion_group, criterion_main, Criterion};
use serde_json::json;
use std::hint::black_box;
use trip_itinerary::{DayPlanner, ItineraryFilter, Trip, ViewportAggregator};

/// A month-long trip with a stay, a few activities and a long drive every day.
fn synthetic_trip(days: u32) -> Trip {
    let location = |i: u32, salt: f64| {
        json!({
            "id": format!("loc-{}-{}", i, salt),
            "latitude": 40.0 + f64::from(i) * 0.05 + salt,
            "longitude": -3.0 + f64::from(i) * 0.07 - salt,
        })
    };
    let ts = |d: u32, h: u32| {
        format!("2024-{:02}-{:02}T{:02}:00:00Z", 1 + d / 28, 1 + d % 28, h)
    };

    let mut stays = Vec::new();
    let mut activities = Vec::new();
    let mut navigations = Vec::new();
    for d in 0..days {
        stays.push(json!({
            "id": format!("stay-{}", d),
            "name": "Stay",
            "checkIn": ts(d, 15),
            "checkOut": ts(d + 1, 10),
            "location": location(d, 0.0),
        }));
        for a in 0..4 {
            activities.push(json!({
                "id": format!("act-{}-{}", d, a),
                "name": "Activity",
                "startAt": ts(d, 9 + a * 2),
                "endAt": ts(d, 10 + a * 2),
                "category": "sightseeing",
                "location": location(d, f64::from(a) * 0.01),
            }));
        }
        // ~500 vertices, about what a few hours of driving directions return
        let coordinates: Vec<[f64; 2]> = (0..500)
            .map(|v| {
                let t = f64::from(v) / 500.0;
                [-3.0 + f64::from(d) * 0.07 + t, 40.0 + f64::from(d) * 0.05 + t * 0.3]
            })
            .collect();
        let route = json!({ "geometry": { "type": "LineString", "coordinates": coordinates } });
        navigations.push(json!({
            "id": format!("nav-{}", d),
            "type": "driving",
            "startAt": ts(d, 8),
            "startingLocation": location(d, 0.0),
            "endingLocation": location(d + 1, 0.0),
            "route": route.to_string(),
        }));
    }

    let doc = json!({
        "id": "bench-trip",
        "name": "Benchmark",
        "startAt": ts(0, 0),
        "endAt": ts(days, 0),
        "stays": { "items": stays },
        "activities": { "items": activities },
        "navigations": { "items": navigations },
    });
    Trip::from_json(&doc.to_string()).expect("Failed to build synthetic trip")
}

fn benchmark_day_planning(c: &mut Criterion) {
    let trip = synthetic_trip(30);
    let date = trip
        .start_date()
        .expect("Synthetic trip has a start date")
        .succ_opt()
        .expect("Valid date");

    let filter = ItineraryFilter::default();
    let aggregator = ViewportAggregator::default();
    let planner = DayPlanner::default();
    let itinerary = filter.filter_trip(&trip, date);

    let mut group = c.benchmark_group("day_planning");

    group.bench_function("filter_trip", |b| {
        b.iter(|| filter.filter_trip(black_box(&trip), black_box(date)))
    });

    group.bench_function("aggregate", |b| {
        b.iter(|| aggregator.aggregate(black_box(&itinerary)))
    });

    group.bench_function("plan_and_summarize", |b| {
        b.iter(|| planner.plan(black_box(&trip), black_box(date)).summary())
    });

    group.finish();
}

criterion_group!(benches, benchmark_day_planning);
criterion_main!(benches);
