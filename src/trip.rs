//! Trip state wrapped around the itinerary engine.
//!
//! Holds what the planning flow accumulates: the named date range, the
//! collected places, the generated day partition, and the hand-editing
//! operations applied after generation. The engine itself never mutates a
//! finished partition; every splice lives here.

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::itinerary::distribute_by_days;
use crate::place::Place;

const FIRST_STEP: u8 = 1;
const LAST_STEP: u8 = 4;

/// A trip spanning more days than this draws a warning.
const LONG_TRIP_DAYS: i64 = 30;

/// Trip name plus a possibly still-unset date range.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripInfo {
    pub name: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// Inclusive calendar span: a Friday-to-Sunday trip is 2 nights, 3 days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripDuration {
    pub nights: i64,
    pub days: i64,
}

impl TripInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Calendar duration counting both endpoints. `None` until both dates are
    /// set; non-positive days when the range is reversed, which validation
    /// reports as an error.
    pub fn duration(&self) -> Option<TripDuration> {
        let start = self.start_date?;
        let end = self.end_date?;
        let days = (end - start).num_days() + 1;
        Some(TripDuration {
            nights: days - 1,
            days,
        })
    }
}

/// Severity of a date-range finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WarningSeverity {
    Error,
    Warning,
    Info,
}

/// A human-readable finding about the chosen date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateWarning {
    pub severity: WarningSeverity,
    pub message: String,
}

/// Check a date range, reporting the first finding in a fixed order:
/// reversed range, day trip, overlong trip, past start, far-future start.
///
/// `today` comes from the caller so checks stay reproducible.
pub fn validate_dates(info: &TripInfo, today: NaiveDate) -> Option<DateWarning> {
    let start = info.start_date?;
    let end = info.end_date?;
    let duration = info.duration()?;

    if end < start {
        return Some(DateWarning {
            severity: WarningSeverity::Error,
            message: "End date is before the start date".to_string(),
        });
    }
    if duration.nights == 0 {
        return Some(DateWarning {
            severity: WarningSeverity::Warning,
            message: "Day trip: the schedule will be packed".to_string(),
        });
    }
    if duration.days > LONG_TRIP_DAYS {
        return Some(DateWarning {
            severity: WarningSeverity::Warning,
            message: format!("{} nights is a very long trip", duration.nights),
        });
    }
    if start < today {
        return Some(DateWarning {
            severity: WarningSeverity::Info,
            message: "The trip starts in the past".to_string(),
        });
    }
    let one_year_out = today
        .checked_add_months(Months::new(12))
        .unwrap_or(NaiveDate::MAX);
    if start > one_year_out {
        return Some(DateWarning {
            severity: WarningSeverity::Info,
            message: "The trip starts more than a year from now".to_string(),
        });
    }

    None
}

/// Mutable planning state for one trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub info: TripInfo,
    pub places: Vec<Place>,
    pub itinerary: Option<Vec<Vec<Place>>>,
    pub selected_day: usize,
    pub current_step: u8,
}

impl Default for Trip {
    fn default() -> Self {
        Self {
            info: TripInfo::default(),
            places: Vec::new(),
            itinerary: None,
            selected_day: 0,
            current_step: FIRST_STEP,
        }
    }
}

impl Trip {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            info: TripInfo::new(name),
            ..Self::default()
        }
    }

    pub fn set_dates(&mut self, start: NaiveDate, end: NaiveDate) {
        self.info.start_date = Some(start);
        self.info.end_date = Some(end);
    }

    pub fn add_place(&mut self, place: Place) {
        self.places.push(place);
    }

    /// Drop a place from the collection list by id. A generated itinerary is
    /// left as-is; it gets rebuilt when planning re-runs.
    pub fn remove_place(&mut self, id: &str) {
        self.places.retain(|place| place.id != id);
    }

    /// Day count implied by the date range; `None` when the range is missing
    /// or reversed.
    pub fn planned_days(&self) -> Option<usize> {
        let duration = self.info.duration()?;
        if duration.days < 1 {
            return None;
        }
        Some(duration.days as usize)
    }

    /// Run the engine over the current places and date range. Returns `false`
    /// with the state untouched when no valid day count exists.
    pub fn rebuild_itinerary(&mut self) -> bool {
        let Some(days) = self.planned_days() else {
            return false;
        };

        debug!("rebuilding itinerary - places={}, days={}", self.places.len(), days);
        self.itinerary = Some(distribute_by_days(&self.places, days));
        self.selected_day = 0;
        true
    }

    /// Move a place to a new position within one day of the generated
    /// itinerary. Out-of-range indices leave the state untouched.
    pub fn move_place_in_day(&mut self, day: usize, from: usize, to: usize) -> bool {
        let Some(itinerary) = self.itinerary.as_mut() else {
            return false;
        };
        let Some(list) = itinerary.get_mut(day) else {
            return false;
        };
        if from >= list.len() || to >= list.len() {
            return false;
        }

        let place = list.remove(from);
        list.insert(to, place);
        true
    }

    /// Move a place from one day to a position in another. The target index
    /// may equal the target day's length, appending.
    pub fn move_place_between_days(
        &mut self,
        from_day: usize,
        from_index: usize,
        to_day: usize,
        to_index: usize,
    ) -> bool {
        if from_day == to_day {
            return self.move_place_in_day(from_day, from_index, to_index);
        }
        let Some(itinerary) = self.itinerary.as_mut() else {
            return false;
        };
        if from_day >= itinerary.len() || to_day >= itinerary.len() {
            return false;
        }
        if from_index >= itinerary[from_day].len() || to_index > itinerary[to_day].len() {
            return false;
        }

        let place = itinerary[from_day].remove(from_index);
        itinerary[to_day].insert(to_index, place);
        true
    }

    /// Remove a place from a day of the generated itinerary.
    pub fn remove_place_from_day(&mut self, day: usize, index: usize) -> Option<Place> {
        let itinerary = self.itinerary.as_mut()?;
        let list = itinerary.get_mut(day)?;
        if index >= list.len() {
            return None;
        }
        Some(list.remove(index))
    }

    /// Focus a day of the generated itinerary for display.
    pub fn select_day(&mut self, day: usize) -> bool {
        let within = self
            .itinerary
            .as_ref()
            .is_some_and(|days| day < days.len());
        if within {
            self.selected_day = day;
        }
        within
    }

    pub fn next_step(&mut self) {
        self.current_step = self.current_step.saturating_add(1).min(LAST_STEP);
    }

    pub fn prev_step(&mut self) {
        self.current_step = self.current_step.saturating_sub(1).max(FIRST_STEP);
    }

    /// Back to a blank first-step trip.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Serializable capture of a trip plus the moment it was written. Field
/// names stay camelCase so saved JSON interchanges with JavaScript
/// consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripSnapshot {
    pub trip_info: TripInfo,
    pub places: Vec<Place>,
    pub itinerary: Option<Vec<Vec<Place>>>,
    pub selected_day: usize,
    pub current_step: u8,
    pub saved_at: String,
}

impl TripSnapshot {
    /// Capture the current trip state under the given save timestamp
    /// (RFC 3339 by convention; stores stamp it at write time).
    pub fn capture(trip: &Trip, saved_at: impl Into<String>) -> Self {
        Self {
            trip_info: trip.info.clone(),
            places: trip.places.clone(),
            itinerary: trip.itinerary.clone(),
            selected_day: trip.selected_day,
            current_step: trip.current_step,
            saved_at: saved_at.into(),
        }
    }

    /// Restore the captured state, discarding the save timestamp.
    pub fn into_trip(self) -> Trip {
        Trip {
            info: self.trip_info,
            places: self.places,
            itinerary: self.itinerary,
            selected_day: self.selected_day,
            current_step: self.current_step,
        }
    }
}
