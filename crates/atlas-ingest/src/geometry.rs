//! Geometry normalization
//!
//! The shape of `geometry.coordinates` is decided by how deeply its first
//! element is nested. `geometry.type` is never consulted, so a declared type
//! that disagrees with the nesting is stored as-is and the nesting wins.

use crate::fields::coordinate;
use atlas_domain::Coordinate;
use serde_json::Value;

/// Normalize raw coordinates into a flat list of points
///
/// - `[lon, lat]` is a single point and yields one coordinate
/// - `[[lon, lat], ...]` is a line and yields each point
/// - `[[[lon, lat], ...], ...]` is a polygon and yields its outer ring
/// - one level deeper is a multipolygon and yields the first polygon's outer ring
pub(crate) fn normalize_coordinates(raw: &Value) -> Result<Vec<Coordinate>, String> {
    let items = raw
        .as_array()
        .ok_or_else(|| "coordinates are not a list".to_string())?;
    let first = items
        .first()
        .ok_or_else(|| "coordinates are empty".to_string())?;

    match depth(first) {
        0 => coordinate(raw)
            .map(|c| vec![c])
            .ok_or_else(|| "point does not hold two numbers".to_string()),
        1 => points(items),
        2 => points(as_list(first)?),
        3 => points(as_list(&as_list(first)?[0])?),
        d => Err(format!("unsupported coordinate nesting depth {}", d + 1)),
    }
}

/// Array nesting depth along first elements (a number is depth 0)
fn depth(value: &Value) -> usize {
    let mut depth = 0;
    let mut current = value;
    while let Some(next) = current.as_array().and_then(|a| a.first()) {
        depth += 1;
        current = next;
    }
    depth
}

fn as_list(value: &Value) -> Result<&Vec<Value>, String> {
    value
        .as_array()
        .filter(|a| !a.is_empty())
        .ok_or_else(|| "expected a non-empty list of coordinates".to_string())
}

fn points(items: &[Value]) -> Result<Vec<Coordinate>, String> {
    items
        .iter()
        .enumerate()
        .map(|(idx, v)| coordinate(v).ok_or_else(|| format!("point {} is not a coordinate pair", idx)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_point() {
        let coords = normalize_coordinates(&json!([23.72, 37.97])).unwrap();
        assert_eq!(coords, vec![Coordinate::new(23.72, 37.97)]);
    }

    #[test]
    fn test_line() {
        let coords = normalize_coordinates(&json!([[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]])).unwrap();
        assert_eq!(coords.len(), 3);
        assert_eq!(coords[2], Coordinate::new(5.0, 6.0));
    }

    #[test]
    fn test_polygon_keeps_outer_ring_only() {
        let raw = json!([
            [[0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [0.0, 0.0]],
            [[1.0, 1.0], [2.0, 1.0], [2.0, 2.0], [1.0, 1.0]]
        ]);
        let coords = normalize_coordinates(&raw).unwrap();
        assert_eq!(coords.len(), 4);
        assert_eq!(coords[1], Coordinate::new(4.0, 0.0));
    }

    #[test]
    fn test_multipolygon_takes_first_outer_ring() {
        let raw = json!([[[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]]]);
        let coords = normalize_coordinates(&raw).unwrap();
        assert_eq!(coords.len(), 4);
    }

    #[test]
    fn test_single_point_line() {
        let coords = normalize_coordinates(&json!([[23.72, 37.97]])).unwrap();
        assert_eq!(coords, vec![Coordinate::new(23.72, 37.97)]);
    }

    #[test]
    fn test_malformed() {
        assert!(normalize_coordinates(&json!([])).is_err());
        assert!(normalize_coordinates(&json!("23,37")).is_err());
        assert!(normalize_coordinates(&json!([23.72])).is_err());
        assert!(normalize_coordinates(&json!([[1.0, 2.0], ["x", 3.0]])).is_err());
        assert!(normalize_coordinates(&json!([[[[[0.0, 0.0]]]]])).is_err());
    }
}
