//! Great-circle distance in kilometers.
//!
//! Single cost metric for the whole pipeline: clustering, routing, and
//! statistics all price travel through this module, so their decisions stay
//! mutually consistent.

use crate::place::Place;

/// Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two `(lat, lng)` points in kilometers.
///
/// Pure and total: NaN coordinates flow through to a NaN distance instead of
/// failing.
pub fn haversine_km(from: (f64, f64), to: (f64, f64)) -> f64 {
    let (lat1, lng1) = from;
    let (lat2, lng2) = to;

    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lng = (lng2 - lng1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    // atan2 keeps the angle finite when rounding nudges `a` past 1.
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Total length of a visiting order: the sum over consecutive pairs.
///
/// Zero for fewer than two places.
pub fn route_km(places: &[Place]) -> f64 {
    places
        .windows(2)
        .map(|leg| haversine_km(leg[0].coords(), leg[1].coords()))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::place::PlaceCategory;

    fn place(id: &str, lat: f64, lng: f64) -> Place {
        Place::new(id, id, PlaceCategory::Sightseeing, lat, lng)
    }

    #[test]
    fn test_haversine_same_point() {
        let dist = haversine_km((35.6812, 139.7671), (35.6812, 139.7671));
        assert!(dist < 0.001, "Same point should have ~0 distance");
    }

    #[test]
    fn test_haversine_known_distance() {
        // Tokyo Station (35.6812, 139.7671) to Kyoto Station (34.9858, 135.7588)
        // Actual distance ~370 km
        let dist = haversine_km((35.6812, 139.7671), (34.9858, 135.7588));
        assert!(dist > 350.0 && dist < 390.0, "Tokyo to Kyoto should be ~370km, got {}", dist);
    }

    #[test]
    fn test_haversine_symmetric() {
        let there = haversine_km((35.7148, 139.7967), (35.6595, 139.7005));
        let back = haversine_km((35.6595, 139.7005), (35.7148, 139.7967));
        assert!((there - back).abs() < 1e-9, "Distance should be symmetric");
    }

    #[test]
    fn test_route_km_short_inputs_are_zero() {
        assert_eq!(route_km(&[]), 0.0);
        assert_eq!(route_km(&[place("a", 35.0, 139.0)]), 0.0);
    }

    #[test]
    fn test_route_km_sums_consecutive_legs() {
        let a = place("a", 35.6812, 139.7671);
        let b = place("b", 35.6595, 139.7005);
        let c = place("c", 35.7148, 139.7967);

        let legs = haversine_km(a.coords(), b.coords()) + haversine_km(b.coords(), c.coords());
        let total = route_km(&[a, b, c]);

        assert!((total - legs).abs() < 1e-9, "Route should sum its legs");
    }
}
