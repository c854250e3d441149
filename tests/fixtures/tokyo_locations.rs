//! Real Tokyo points of interest for realistic test fixtures.
//!
//! Coordinates sourced from OpenStreetMap. Grouped by neighborhood so
//! clustering tests have geographically coherent pockets to find.

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

// ============================================================================
// Asakusa / Ueno (north-east pocket)
// ============================================================================

pub const ASAKUSA: &[Location] = &[
    Location::new("Senso-ji", 35.7148, 139.7967),
    Location::new("Nakamise Shopping Street", 35.7119, 139.7965),
    Location::new("Kappabashi Kitchen Town", 35.7140, 139.7886),
    Location::new("Ueno Park", 35.7156, 139.7745),
    Location::new("Tokyo National Museum", 35.7188, 139.7765),
    Location::new("Ameyoko Market", 35.7091, 139.7749),
];

// ============================================================================
// Shibuya / Harajuku (south-west pocket)
// ============================================================================

pub const SHIBUYA: &[Location] = &[
    Location::new("Shibuya Crossing", 35.6595, 139.7005),
    Location::new("Hachiko Statue", 35.6590, 139.7006),
    Location::new("Takeshita Street", 35.6716, 139.7031),
    Location::new("Meiji Shrine", 35.6764, 139.6993),
    Location::new("Yoyogi Park", 35.6712, 139.6949),
    Location::new("Omotesando", 35.6652, 139.7123),
];

// ============================================================================
// Marunouchi / Ginza (central pocket)
// ============================================================================

pub const CENTRAL: &[Location] = &[
    Location::new("Tokyo Station", 35.6812, 139.7671),
    Location::new("Imperial Palace East Garden", 35.6864, 139.7577),
    Location::new("Ginza Six", 35.6699, 139.7640),
    Location::new("Tsukiji Outer Market", 35.6654, 139.7707),
    Location::new("Hamarikyu Gardens", 35.6597, 139.7634),
    Location::new("Tokyo Tower", 35.6586, 139.7454),
];

// ============================================================================
// Shinjuku (north-west pocket)
// ============================================================================

pub const SHINJUKU: &[Location] = &[
    Location::new("Shinjuku Gyoen", 35.6852, 139.7100),
    Location::new("Tokyo Metropolitan Government Building", 35.6896, 139.6922),
    Location::new("Omoide Yokocho", 35.6938, 139.6993),
    Location::new("Hanazono Shrine", 35.6935, 139.7050),
    Location::new("Golden Gai", 35.6941, 139.7045),
    Location::new("Kabukicho", 35.6950, 139.7022),
];

// ============================================================================
// All Locations Combined
// ============================================================================

/// Returns all locations as a single list.
pub fn all_locations() -> Vec<Location> {
    let mut all = Vec::with_capacity(24);
    all.extend_from_slice(ASAKUSA);
    all.extend_from_slice(SHIBUYA);
    all.extend_from_slice(CENTRAL);
    all.extend_from_slice(SHINJUKU);
    all
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_locations_count() {
        assert_eq!(all_locations().len(), 24);
    }

    #[test]
    fn test_coordinates_in_tokyo_area() {
        for loc in all_locations() {
            let (lat, lng) = loc.coords();
            assert!(lat > 35.5 && lat < 35.8, "{} lat out of range: {}", loc.name, lat);
            assert!(lng > 139.6 && lng < 139.9, "{} lng out of range: {}", loc.name, lng);
        }
    }
}
