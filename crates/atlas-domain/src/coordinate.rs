//! Geographic coordinates

use std::fmt;

/// A WGS84 coordinate in GeoJSON order (longitude first)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    /// Longitude in decimal degrees
    pub longitude: f64,

    /// Latitude in decimal degrees
    pub latitude: f64,
}

impl Coordinate {
    /// Create a coordinate from a longitude/latitude pair
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self { longitude, latitude }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.longitude, self.latitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_keeps_geojson_order() {
        let c = Coordinate::new(23.7, 37.9);
        assert_eq!(c.to_string(), "[23.7, 37.9]");
    }
}
