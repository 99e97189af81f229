//! Location record normalization

use crate::config::IngestConfig;
use crate::error::IngestError;
use crate::fields::{self, malformed, present, Record};
use crate::geometry::normalize_coordinates;
use atlas_domain::Location;
use tracing::debug;

/// Build a [`Location`] from one raw location record
///
/// Absent fields stay absent. A record without an `id` still produces a
/// location; validation reports it.
pub fn parse_location(record: &Record, config: &IngestConfig) -> Result<Location, IngestError> {
    let mut location = Location::default();
    location.location_id = fields::identifier(record, "id");
    location.title = fields::string(record, "title");
    location.start_date = fields::year(record, "start");
    location.end_date = fields::year(record, "end");
    location.archaeological_remains = fields::string(record, "archaeologicalRemains");
    location.details = fields::string(record, "details");
    location.description = fields::string(record, "description");
    location.accuracy_value = fields::float(record, "accuracy_value");
    location.accuracy_info = fields::string(record, "accuracy");
    location.location_type = fields::first_string(record, "locationType");
    location.uri = fields::string(record, "uri");

    if let Some(uri) = fields::first_string(record, "featureTypeURI") {
        location.feature_type = fields::first_string(record, "featureType");
        location.feature_type_uri = Some(uri);
    }

    // Every entry is recorded, blank labels included
    for attestation in fields::sub_records(record, "attestations", config)? {
        location.record_attestation(
            &fields::label(attestation, "timePeriod"),
            &fields::label(attestation, "timePeriodURI"),
            &fields::label(attestation, "confidence"),
            &fields::label(attestation, "confidenceURI"),
        );
    }

    if let Some(geometry) = present(record, "geometry").and_then(|g| g.as_object()) {
        location.geometry_type = fields::string(geometry, "type");
        if let Some(raw) = present(geometry, "coordinates") {
            match normalize_coordinates(raw) {
                Ok(coordinates) => location.coordinates = coordinates,
                Err(reason) => malformed(
                    config,
                    format!(
                        "geometry of location {}: {}",
                        location.location_id.as_deref().unwrap_or("<no id>"),
                        reason
                    ),
                )?,
            }
        }
    }

    debug!(
        "Parsed location {:?} with {} attestations and {} points",
        location.location_id,
        location.attestations().len(),
        location.coordinates.len()
    );

    Ok(location)
}
