//! Place record normalization

use crate::config::IngestConfig;
use crate::error::IngestError;
use crate::fields::{self, malformed, present, Record};
use crate::location::parse_location;
use crate::name::parse_name;
use atlas_domain::{AssociationCertainty, Connection, Place};
use serde_json::Value;
use tracing::debug;

/// Build a [`Place`] from one raw JSON-LD place record
///
/// Every location and name is fully built before the place is returned.
/// Returns `Ok(None)` when the record carries no id; whether that is fatal is
/// decided by the caller.
pub fn parse_place(record: &Record, config: &IngestConfig) -> Result<Option<Place>, IngestError> {
    let Some(id) = fields::identifier(record, "id") else {
        return Ok(None);
    };
    let mut place = Place::new(id);

    for raw in fields::sub_records(record, "locations", config)? {
        let location = parse_location(raw, config)?;
        place.add_location(location, certainty(raw));
    }

    for raw in fields::sub_records(record, "connections", config)? {
        match fields::identifier(raw, "id") {
            Some(target) => place.add_connection(
                target,
                Connection {
                    connection_type: fields::string(raw, "connectionType"),
                    title: fields::string(raw, "title"),
                    start: fields::year(raw, "start"),
                    end: fields::year(raw, "end"),
                },
            ),
            None => malformed(config, format!("connection on place {} has no id", place.id()))?,
        }
    }

    for raw in fields::sub_records(record, "names", config)? {
        let name = parse_name(raw, config)?;
        place.add_name(name, certainty(raw));
    }

    place.subjects = fields::string_list(record, "subject");
    place.title = fields::string(record, "title");
    place.provenance = fields::string(record, "provenance");
    place.details = fields::string(record, "details");
    place.legacy_type = fields::string(record, "type");
    place.uri = fields::string(record, "uri");
    place.description = fields::string(record, "description");
    place.place_types = fields::string_list(record, "placeTypes");

    if let Some(raw) = present(record, "bbox") {
        match bounds(raw) {
            Some([min_lon, min_lat, max_lon, max_lat]) => {
                place.min_longitude = Some(min_lon);
                place.min_latitude = Some(min_lat);
                place.max_longitude = Some(max_lon);
                place.max_latitude = Some(max_lat);
            }
            None => malformed(config, format!("bbox of place {} is not four numbers", place.id()))?,
        }
    }

    if let Some(raw) = present(record, "reprPoint") {
        match fields::coordinate(raw) {
            Some(point) => place.representative_point = Some(point),
            None => malformed(config, format!("reprPoint of place {} is not a coordinate", place.id()))?,
        }
    }

    debug!(
        "Parsed place {} with {} locations, {} names, {} connections",
        place.id(),
        place.locations().len(),
        place.names().len(),
        place.connections().len()
    );

    Ok(Some(place))
}

/// Association certainty carried by a location or name record
fn certainty(record: &Record) -> Option<AssociationCertainty> {
    let value = fields::string(record, "associationCertainty")?;
    let mut certainty = AssociationCertainty::new(value);
    certainty.uri = fields::string(record, "associationCertaintyURI");
    Some(certainty)
}

/// `[min_lon, min_lat, max_lon, max_lat]`; zero is a real bound here
fn bounds(raw: &Value) -> Option<[f64; 4]> {
    let items = raw.as_array().filter(|a| a.len() == 4)?;
    let mut out = [0.0; 4];
    for (slot, item) in out.iter_mut().zip(items) {
        *slot = item.as_f64()?;
    }
    Some(out)
}
