//! Place data model shared by every stage of the itinerary pipeline.

use serde::{Deserialize, Serialize};

/// Activity category of a point of interest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlaceCategory {
    Sightseeing,
    Meal,
    Shopping,
    Cafe,
    Other,
}

impl PlaceCategory {
    /// Visiting priority used by the route pre-sort; lower sorts earlier.
    ///
    /// Sights open the day, meals land late so they can close it out, and
    /// anything uncategorized goes last.
    pub fn route_priority(self) -> u8 {
        match self {
            PlaceCategory::Sightseeing => 0,
            PlaceCategory::Shopping => 1,
            PlaceCategory::Cafe => 2,
            PlaceCategory::Meal => 3,
            PlaceCategory::Other => 4,
        }
    }
}

/// A point of interest collected for a trip.
///
/// Places are immutable inputs to the engine: every operation reorders or
/// regroups clones and never edits coordinates, names, or ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    /// Opaque caller-assigned identifier; the engine never interprets it.
    pub id: String,
    pub name: String,
    pub category: PlaceCategory,
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lng: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl Place {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: PlaceCategory,
        lat: f64,
        lng: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            lat,
            lng,
            address: None,
        }
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Coordinates as a `(lat, lng)` pair.
    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}
