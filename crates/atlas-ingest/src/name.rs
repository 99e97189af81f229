//! Name record normalization

use crate::config::IngestConfig;
use crate::error::IngestError;
use crate::fields::{self, Record};
use atlas_domain::Name;

/// Build a [`Name`] from one raw name record
pub fn parse_name(record: &Record, config: &IngestConfig) -> Result<Name, IngestError> {
    let mut name = Name::default();
    name.name_id = fields::identifier(record, "id");
    name.name_type = fields::string(record, "nameType");
    name.transcription_accuracy = fields::string(record, "transcriptionAccuracy");
    name.transcription_completeness = fields::string(record, "transcriptionCompleteness");
    name.association_certainty = fields::string(record, "associationCertainty");
    name.romanized_name = fields::string(record, "romanized");
    name.language = fields::string(record, "language");
    name.description = fields::string(record, "description");
    name.name_uri = fields::string(record, "uri");
    name.name_attested = fields::string(record, "attested");
    name.provenance = fields::string(record, "provenance");

    for attestation in fields::sub_records(record, "attestations", config)? {
        name.record_attestation(
            &fields::label(attestation, "timePeriod"),
            &fields::label(attestation, "confidence"),
        );
    }

    Ok(name)
}
