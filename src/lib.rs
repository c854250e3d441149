//! trip-planner core engine
//!
//! Geographic clustering, route ordering, and day distribution for multi-day
//! trip itineraries, plus the search and persistence seams around them.

pub mod place;
pub mod haversine;
pub mod cluster;
pub mod route;
pub mod itinerary;
pub mod stats;
pub mod trip;
pub mod traits;
pub mod nominatim;
pub mod storage;
