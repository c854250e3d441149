//! Derived itinerary statistics.
//!
//! A pure read-only view over a finished day partition. Figures are
//! recomputed on demand and never stored as a source of truth.

use serde::{Deserialize, Serialize};

use crate::haversine::route_km;
use crate::place::Place;

/// Travel figures for one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayStats {
    /// Distance walked between that day's consecutive places, in kilometers,
    /// rounded to one decimal.
    pub total_distance: f64,
    pub place_count: usize,
}

/// Aggregate figures across the whole itinerary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripTotals {
    pub distance: f64,
    pub places: usize,
}

/// Per-day and aggregate statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryStats {
    pub per_day: Vec<DayStats>,
    pub total: TripTotals,
}

/// Compute statistics for a day-partitioned itinerary.
///
/// Each per-day distance is rounded to one decimal, and the total distance is
/// the sum of those already-rounded figures, rounded once more, so the total
/// always matches what a reader would add up from the per-day lines. Days
/// with fewer than two places contribute zero distance.
pub fn calculate_itinerary_stats(itinerary: &[Vec<Place>]) -> ItineraryStats {
    let per_day: Vec<DayStats> = itinerary
        .iter()
        .map(|day| DayStats {
            total_distance: round1(route_km(day)),
            place_count: day.len(),
        })
        .collect();

    let distance = round1(per_day.iter().map(|day| day.total_distance).sum());
    let places = per_day.iter().map(|day| day.place_count).sum();

    ItineraryStats {
        per_day,
        total: TripTotals { distance, places },
    }
}

/// Round to one decimal place, the precision every reported figure uses.
pub(crate) fn round1(km: f64) -> f64 {
    (km * 10.0).round() / 10.0
}
