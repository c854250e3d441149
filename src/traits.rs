//! Collaborator seams around the itinerary engine.
//!
//! The engine itself is pure; looking places up and persisting trip state
//! belong to the surrounding application. These traits keep those
//! collaborators swappable, with the bundled Nominatim client and JSON file
//! store as the stock implementations.

use crate::place::{Place, PlaceCategory};
use crate::trip::{Trip, TripSnapshot};

use serde::{Deserialize, Serialize};

/// A search hit not yet promoted to a [`Place`]: the caller still assigns the
/// id and category when adding it to a trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodedPlace {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    /// Full display address, when the source provides one.
    pub address: Option<String>,
}

impl GeocodedPlace {
    /// Promote to a full [`Place`] once an id and category are chosen.
    pub fn into_place(self, id: impl Into<String>, category: PlaceCategory) -> Place {
        Place {
            id: id.into(),
            name: self.name,
            category,
            lat: self.lat,
            lng: self.lng,
            address: self.address,
        }
    }
}

/// Free-text place search.
pub trait Geocoder {
    type Error;

    /// Search for places matching `query`. A blank query yields an empty
    /// result set without touching the backend.
    fn search(&self, query: &str) -> Result<Vec<GeocodedPlace>, Self::Error>;
}

/// Persistence for trip state.
///
/// Stores stamp the save time themselves, so callers hand over the live
/// [`Trip`] and get a [`TripSnapshot`] back on load.
pub trait TripStore {
    type Error;

    /// Write the current trip state, replacing any previous snapshot.
    fn save(&self, trip: &Trip) -> Result<(), Self::Error>;

    /// Read the stored snapshot; `None` when nothing has been saved.
    fn load(&self) -> Result<Option<TripSnapshot>, Self::Error>;

    /// Delete the stored snapshot, if any.
    fn clear(&self) -> Result<(), Self::Error>;
}
