//! Test fixtures for trip-planner.
//!
//! Real Tokyo neighborhood locations (from OpenStreetMap), grouped by
//! pocket so clustering tests have coherent geography to find.

pub mod tokyo_locations;
