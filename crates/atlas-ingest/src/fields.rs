//! Field extraction helpers for raw JSON-LD records
//!
//! Every Pleiades key is optional. A key that is missing, `null`, or holds an
//! empty string, empty list, empty object, `false` or numeric zero reads as
//! absent. Coordinates are the exception and are read by [`coordinate`].

use crate::config::IngestConfig;
use crate::error::IngestError;
use atlas_domain::Coordinate;
use serde_json::{Map, Value};
use tracing::warn;

/// A raw JSON object
pub type Record = Map<String, Value>;

/// Whether a value counts as present
pub(crate) fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Look up a key, treating falsy values as missing
pub(crate) fn present<'a>(record: &'a Record, key: &str) -> Option<&'a Value> {
    record.get(key).filter(|v| is_present(v))
}

/// Non-empty string field
pub(crate) fn string(record: &Record, key: &str) -> Option<String> {
    present(record, key)
        .and_then(|v| v.as_str())
        .map(str::to_string)
}

/// Attestation label; missing or non-string values read as `""`
///
/// Labels are kept even when blank so that every attestation is recorded.
pub(crate) fn label(record: &Record, key: &str) -> String {
    record
        .get(key)
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string()
}

/// Identifier field; numeric ids are rendered as strings
pub(crate) fn identifier(record: &Record, key: &str) -> Option<String> {
    match present(record, key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// First element of a list field (a bare string is accepted as a one-element list)
pub(crate) fn first_string(record: &Record, key: &str) -> Option<String> {
    match present(record, key)? {
        Value::Array(items) => items
            .first()
            .filter(|v| is_present(v))
            .and_then(|v| v.as_str())
            .map(str::to_string),
        Value::String(s) => Some(s.clone()),
        _ => None,
    }
}

/// Non-empty strings of a list field, in source order
pub(crate) fn string_list(record: &Record, key: &str) -> Vec<String> {
    present(record, key)
        .and_then(|v| v.as_array())
        .map(|items| {
            items
                .iter()
                .filter_map(|v| v.as_str())
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Year field (decimal CE); whole floats are accepted
pub(crate) fn year(record: &Record, key: &str) -> Option<i64> {
    let value = present(record, key)?;
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0)
            .map(|f| f as i64)
    })
}

/// Non-zero float field
pub(crate) fn float(record: &Record, key: &str) -> Option<f64> {
    present(record, key).and_then(|v| v.as_f64())
}

/// A `[longitude, latitude, ...]` array; extra members such as altitude are ignored
pub(crate) fn coordinate(value: &Value) -> Option<Coordinate> {
    let pair = value.as_array()?;
    let longitude = pair.first()?.as_f64()?;
    let latitude = pair.get(1)?.as_f64()?;
    Some(Coordinate::new(longitude, latitude))
}

/// Report a malformed shape, either as an error or as a logged skip
pub(crate) fn malformed(config: &IngestConfig, message: String) -> Result<(), IngestError> {
    if config.strict_shapes {
        return Err(IngestError::MalformedShape(message));
    }
    warn!("Skipping malformed data: {}", message);
    Ok(())
}

/// Sub-records stored under `key`, normalized to a list
///
/// A JSON array yields each of its objects, a single JSON object yields
/// itself. Anything else is a malformed shape.
pub(crate) fn sub_records<'a>(
    record: &'a Record,
    key: &str,
    config: &IngestConfig,
) -> Result<Vec<&'a Record>, IngestError> {
    let Some(value) = present(record, key) else {
        return Ok(Vec::new());
    };

    match value {
        Value::Object(single) => Ok(vec![single]),
        Value::Array(items) => {
            let mut records = Vec::with_capacity(items.len());
            for (idx, item) in items.iter().enumerate() {
                match item.as_object() {
                    Some(obj) => records.push(obj),
                    None => malformed(config, format!("'{}[{}]' is not an object", key, idx))?,
                }
            }
            Ok(records)
        }
        _ => {
            malformed(config, format!("'{}' is neither an object nor a list", key))?;
            Ok(Vec::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_falsy_values_are_absent() {
        let r = record(json!({
            "a": "", "b": [], "c": {}, "d": 0, "e": null, "f": false, "g": "x"
        }));
        for key in ["a", "b", "c", "d", "e", "f", "missing"] {
            assert!(present(&r, key).is_none(), "{} should be absent", key);
        }
        assert!(present(&r, "g").is_some());
    }

    #[test]
    fn test_identifier_accepts_numbers() {
        let r = record(json!({"id": 579885, "other": "abc"}));
        assert_eq!(identifier(&r, "id").as_deref(), Some("579885"));
        assert_eq!(identifier(&r, "other").as_deref(), Some("abc"));
    }

    #[test]
    fn test_label_keeps_blanks() {
        let r = record(json!({"a": "roman", "b": "", "c": null}));
        assert_eq!(label(&r, "a"), "roman");
        assert_eq!(label(&r, "b"), "");
        assert_eq!(label(&r, "c"), "");
        assert_eq!(label(&r, "missing"), "");
    }

    #[test]
    fn test_first_string() {
        let r = record(json!({
            "list": ["settlement", "temple"],
            "bare": "representative",
            "blank": [""]
        }));
        assert_eq!(first_string(&r, "list").as_deref(), Some("settlement"));
        assert_eq!(first_string(&r, "bare").as_deref(), Some("representative"));
        assert_eq!(first_string(&r, "blank"), None);
    }

    #[test]
    fn test_year_accepts_whole_floats() {
        let r = record(json!({"a": -550, "b": 300.0, "c": 12.5, "d": 0}));
        assert_eq!(year(&r, "a"), Some(-550));
        assert_eq!(year(&r, "b"), Some(300));
        assert_eq!(year(&r, "c"), None);
        assert_eq!(year(&r, "d"), None);
    }

    #[test]
    fn test_coordinate_ignores_altitude() {
        let c = coordinate(&json!([23.72, 37.97, 150.0])).unwrap();
        assert_eq!(c, Coordinate::new(23.72, 37.97));
        assert!(coordinate(&json!([23.72])).is_none());
        assert!(coordinate(&json!("23.72,37.97")).is_none());
    }

    #[test]
    fn test_sub_records_shapes() {
        let config = IngestConfig::default();
        let r = record(json!({
            "single": {"id": "a"},
            "many": [{"id": "a"}, {"id": "b"}],
            "mixed": [{"id": "a"}, "oops"],
            "scalar": "oops"
        }));

        assert_eq!(sub_records(&r, "single", &config).unwrap().len(), 1);
        assert_eq!(sub_records(&r, "many", &config).unwrap().len(), 2);
        assert_eq!(sub_records(&r, "mixed", &config).unwrap().len(), 1);
        assert!(sub_records(&r, "scalar", &config).unwrap().is_empty());
        assert!(sub_records(&r, "missing", &config).unwrap().is_empty());
    }

    #[test]
    fn test_sub_records_strict() {
        let config = IngestConfig::strict();
        let r = record(json!({"mixed": [{"id": "a"}, 3]}));
        let err = sub_records(&r, "mixed", &config).unwrap_err();
        assert!(matches!(err, IngestError::MalformedShape(_)));
    }
}
