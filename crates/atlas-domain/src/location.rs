//! Location module - spatial/temporal instances of a place
//!
//! A location identifies a specific area on the earth's surface that is
//! associated with a place during a particular date range. A location belongs
//! to exactly one place.

use crate::{Attestation, Coordinate};
use std::collections::BTreeMap;

/// Category of a location within the Pleiades gazetteer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocationType {
    /// A modern feature associated with the ancient place
    AssociatedModern,

    /// A central point standing in for a larger area
    CentralPoint,

    /// Imported from a legacy dataset
    Legacy,

    /// A representative point or geometry
    Representative,

    /// A modern relocation of the ancient feature
    RelocatedModern,
}

impl LocationType {
    /// All known location types
    pub const ALL: [LocationType; 5] = [
        LocationType::AssociatedModern,
        LocationType::CentralPoint,
        LocationType::Legacy,
        LocationType::Representative,
        LocationType::RelocatedModern,
    ];

    /// Get the canonical label
    pub fn as_str(&self) -> &'static str {
        match self {
            LocationType::AssociatedModern => "associated-modern",
            LocationType::CentralPoint => "central-point",
            LocationType::Legacy => "legacy",
            LocationType::Representative => "representative",
            LocationType::RelocatedModern => "relocated-modern",
        }
    }

    /// Parse a location type label
    ///
    /// The exports are inconsistent about separators, so hyphens, underscores
    /// and spaces are treated alike.
    pub fn parse(s: &str) -> Option<Self> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .map(|c| if c == '_' || c == ' ' { '-' } else { c })
            .collect();

        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == normalized)
    }
}

/// A single spatial/temporal attestation of a place
///
/// Scalar fields are plain data, filled in while the record is normalized.
/// The attestation list and its two label registries are only reachable through
/// [`Location::record_attestation`], which keeps every attested label
/// registered. Once added to a [`Place`](crate::Place) a location is only
/// reachable through shared references.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Location {
    /// Unique identifier of the location within Pleiades
    pub location_id: Option<String>,

    /// Title as recorded; see [`Location::resolved_title`] for the fallback
    pub title: Option<String>,

    /// Primary feature type label (deprecated in Pleiades, still exported)
    pub feature_type: Option<String>,

    /// Explanatory URI for the primary feature type
    pub feature_type_uri: Option<String>,

    /// Earliest attested date (decimal CE year)
    pub start_date: Option<i64>,

    /// Latest attested date (decimal CE year)
    pub end_date: Option<i64>,

    /// Whether, and how substantially, remains are visible on the ground
    pub archaeological_remains: Option<String>,

    /// Discussion beyond the description
    pub details: Option<String>,

    /// Short description
    pub description: Option<String>,

    /// Pleiades accuracy value
    pub accuracy_value: Option<f64>,

    /// URI describing the accuracy assessment
    pub accuracy_info: Option<String>,

    /// Location category label, see [`LocationType`]
    pub location_type: Option<String>,

    /// Pleiades URI of this location
    pub uri: Option<String>,

    /// Geometry type as declared by the source (never used to interpret coordinates)
    pub geometry_type: Option<String>,

    /// Normalized coordinates: one point, a line, or a polygon's outer ring
    pub coordinates: Vec<Coordinate>,

    time_periods: BTreeMap<String, String>,
    confidence_metrics: BTreeMap<String, String>,
    attestations: Vec<Attestation>,
}

impl Location {
    /// Create an empty location with the given id
    pub fn new(location_id: impl Into<String>) -> Self {
        Self {
            location_id: Some(location_id.into()),
            ..Self::default()
        }
    }

    /// Record one source attestation
    ///
    /// Both labels are registered with their URI the first time they are seen;
    /// a later URI for an already registered label is ignored. The attestation
    /// itself is always appended, so duplicates are kept in source order.
    pub fn record_attestation(
        &mut self,
        time_period: &str,
        time_period_uri: &str,
        confidence: &str,
        confidence_uri: &str,
    ) {
        self.time_periods
            .entry(time_period.to_string())
            .or_insert_with(|| time_period_uri.to_string());
        self.confidence_metrics
            .entry(confidence.to_string())
            .or_insert_with(|| confidence_uri.to_string());
        self.attestations
            .push(Attestation::new(time_period, confidence));
    }

    /// Title, falling back to the location id
    pub fn resolved_title(&self) -> Option<&str> {
        self.title.as_deref().or(self.location_id.as_deref())
    }

    /// Parsed location category, if the label is a known one
    pub fn parsed_location_type(&self) -> Option<LocationType> {
        self.location_type.as_deref().and_then(LocationType::parse)
    }

    /// Time period labels mapped to explanatory URIs
    pub fn time_periods(&self) -> &BTreeMap<String, String> {
        &self.time_periods
    }

    /// Confidence labels mapped to explanatory URIs
    pub fn confidence_metrics(&self) -> &BTreeMap<String, String> {
        &self.confidence_metrics
    }

    /// Attestations in source order, duplicates included
    pub fn attestations(&self) -> &[Attestation] {
        &self.attestations
    }

    /// Attestations whose labels are missing from the registries
    ///
    /// Always empty for locations built through [`Location::record_attestation`];
    /// exposed so that validation can assert the invariant.
    pub fn unregistered_attestations(&self) -> Vec<&Attestation> {
        self.attestations
            .iter()
            .filter(|a| {
                !self.time_periods.contains_key(&a.time_period)
                    || !self.confidence_metrics.contains_key(&a.confidence)
            })
            .collect()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: every recorded attestation is kept and its labels are registered
        #[test]
        fn test_attestation_invariant(
            pairs in proptest::collection::vec(("[a-d]{1,2}", "[w-z]{1,2}"), 0..20)
        ) {
            let mut loc = Location::new("l");
            for (period, confidence) in &pairs {
                loc.record_attestation(period, "p-uri", confidence, "c-uri");
            }

            prop_assert_eq!(loc.attestations().len(), pairs.len());
            prop_assert!(loc.unregistered_attestations().is_empty());
        }
    }
}
