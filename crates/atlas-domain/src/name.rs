//! Name module - attested textual designations of a place
//!
//! A name reflects the identity of a place in human language, not its
//! position in the landscape. Identical spellings attached to different places
//! are separate names.

use std::collections::BTreeMap;
use std::fmt;

/// An attested name of a place
///
/// Built field by field during normalization; once added to a
/// [`Place`](crate::Place) it is only reachable through shared references.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Name {
    /// Unique identifier of the name within Pleiades
    pub name_id: Option<String>,

    /// Kind of name, e.g. `"geographic"` or `"ethnic"`
    pub name_type: Option<String>,

    /// Accuracy of the name as transmitted
    pub transcription_accuracy: Option<String>,

    /// How complete the transcribed name is
    pub transcription_completeness: Option<String>,

    /// Certainty of the link between this name and its place
    pub association_certainty: Option<String>,

    /// Transliteration into Roman characters
    pub romanized_name: Option<String>,

    /// Language and writing system of the attested spelling
    pub language: Option<String>,

    /// Description of the name and its source
    pub description: Option<String>,

    /// Pleiades URI of this name
    pub name_uri: Option<String>,

    /// Original, non-romanized spelling
    pub name_attested: Option<String>,

    /// Provenance of the record
    pub provenance: Option<String>,

    attestations: BTreeMap<String, String>,
}

impl Name {
    /// Create an empty name with the given id and romanized form
    pub fn new(name_id: impl Into<String>, romanized_name: impl Into<String>) -> Self {
        Self {
            name_id: Some(name_id.into()),
            romanized_name: Some(romanized_name.into()),
            ..Self::default()
        }
    }

    /// Record one source attestation
    ///
    /// Unlike locations, names keep a single confidence per time period: a
    /// repeated period overwrites the earlier confidence.
    pub fn record_attestation(&mut self, time_period: &str, confidence: &str) {
        self.attestations
            .insert(time_period.to_string(), confidence.to_string());
    }

    /// Time period labels mapped to confidence labels
    pub fn attestations(&self) -> &BTreeMap<String, String> {
        &self.attestations
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name_type) = &self.name_type {
            write!(f, "[{}] ", name_type)?;
        }
        write!(f, "{}", self.romanized_name.as_deref().unwrap_or("<unnamed>"))?;
        if let Some(attested) = &self.name_attested {
            write!(f, " ({})", attested)?;
        }
        if let Some(description) = &self.description {
            write!(f, ": {}", description)?;
        }
        Ok(())
    }
}
