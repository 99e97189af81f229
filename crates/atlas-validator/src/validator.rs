//! Place validation logic

use crate::{ValidationConfig, ValidatorError};
use atlas_domain::Place;
use atlas_ingest::Corpus;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Result of place validation
#[derive(Debug, Clone, Serialize)]
pub struct ValidationResult {
    /// Id of the validated place
    pub place_id: String,

    /// Overall verdict
    pub status: ValidationStatus,

    /// Issues found (empty when accepted)
    pub issues: Vec<ValidationIssue>,

    /// Quality score (0.0-1.0)
    pub quality_score: f64,
}

/// Validation status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationStatus {
    /// No issues
    Accepted,

    /// Only minor issues, and the score clears the threshold
    Flagged,

    /// At least one inconsistency, or the score is below the threshold
    Rejected,
}

/// How serious an issue is
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Incomplete data
    Warning,

    /// Self-contradictory data
    Error,
}

/// A data-quality finding on one place
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationIssue {
    /// A location has no id
    LocationWithoutId {
        /// Position among the place's locations
        index: usize,
    },

    /// A name lacks a romanized form or an id
    NameWithoutIdentity {
        /// Position among the place's names
        index: usize,
    },

    /// A location type outside the known vocabulary
    UnknownLocationType {
        /// Location title or position
        location: String,
        /// The unrecognized label
        value: String,
    },

    /// An attestation label missing from the location's registries
    UnregisteredAttestation {
        /// Location title or position
        location: String,
        /// Time period label
        time_period: String,
        /// Confidence label
        confidence: String,
    },

    /// A location ends before it starts
    InvertedDateRange {
        /// Location title or position
        location: String,
        /// Start year
        start: i64,
        /// End year
        end: i64,
    },

    /// Some but not all bounding-box members are set
    IncompleteBoundingBox,

    /// A minimum bound exceeds its maximum
    InvertedBoundingBox {
        /// Which axis is inverted
        axis: &'static str,
        /// Minimum bound
        min: f64,
        /// Maximum bound
        max: f64,
    },

    /// The place has no locations
    NoLocations,
}

impl ValidationIssue {
    /// Short machine-readable name of the issue kind
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationIssue::LocationWithoutId { .. } => "location_without_id",
            ValidationIssue::NameWithoutIdentity { .. } => "name_without_identity",
            ValidationIssue::UnknownLocationType { .. } => "unknown_location_type",
            ValidationIssue::UnregisteredAttestation { .. } => "unregistered_attestation",
            ValidationIssue::InvertedDateRange { .. } => "inverted_date_range",
            ValidationIssue::IncompleteBoundingBox => "incomplete_bounding_box",
            ValidationIssue::InvertedBoundingBox { .. } => "inverted_bounding_box",
            ValidationIssue::NoLocations => "no_locations",
        }
    }

    /// Severity of the issue
    pub fn severity(&self) -> Severity {
        match self {
            ValidationIssue::UnregisteredAttestation { .. }
            | ValidationIssue::InvertedDateRange { .. }
            | ValidationIssue::InvertedBoundingBox { .. } => Severity::Error,
            _ => Severity::Warning,
        }
    }

    fn penalty(&self) -> f64 {
        match self {
            ValidationIssue::LocationWithoutId { .. } => 0.2,
            ValidationIssue::NameWithoutIdentity { .. } => 0.2,
            ValidationIssue::UnknownLocationType { .. } => 0.1,
            ValidationIssue::UnregisteredAttestation { .. } => 0.3,
            ValidationIssue::InvertedDateRange { .. } => 0.3,
            ValidationIssue::IncompleteBoundingBox => 0.2,
            ValidationIssue::InvertedBoundingBox { .. } => 0.3,
            ValidationIssue::NoLocations => 0.1,
        }
    }
}

/// Aggregated outcome of validating a whole corpus
#[derive(Debug, Clone, Default, Serialize)]
pub struct CorpusReport {
    /// Places validated
    pub places: usize,

    /// Places with no issues
    pub accepted: usize,

    /// Places with minor issues only
    pub flagged: usize,

    /// Places rejected
    pub rejected: usize,

    /// Issue counts keyed by [`ValidationIssue::kind`]
    pub issue_counts: BTreeMap<String, usize>,

    /// Connections whose target is not in the corpus
    pub unresolved_connections: usize,

    /// Mean quality score (1.0 for an empty corpus)
    pub mean_quality_score: f64,

    /// Results for every place that was not accepted
    pub findings: Vec<ValidationResult>,
}

/// Applies data-quality rules to normalized places
#[derive(Debug, Clone)]
pub struct Validator {
    config: ValidationConfig,
}

impl Validator {
    /// Create a validator with the given configuration
    pub fn new(config: ValidationConfig) -> Result<Self, ValidatorError> {
        config.validate().map_err(ValidatorError::Config)?;
        Ok(Self { config })
    }

    /// Create a validator with default configuration
    pub fn default_config() -> Self {
        Self {
            config: ValidationConfig::default(),
        }
    }

    /// The active configuration
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validate one place against the configured rules
    pub fn validate(&self, place: &Place) -> ValidationResult {
        let mut issues = Vec::new();

        if self.config.require_locations && place.locations().is_empty() {
            issues.push(ValidationIssue::NoLocations);
        }

        self.check_locations(place, &mut issues);

        if self.config.check_name_identity {
            for (index, entry) in place.names().iter().enumerate() {
                if entry.name.romanized_name.is_none() || entry.name.name_id.is_none() {
                    issues.push(ValidationIssue::NameWithoutIdentity { index });
                }
            }
        }

        if self.config.check_bounding_box {
            check_bounding_box(place, &mut issues);
        }

        let quality_score = (1.0 - issues.iter().map(ValidationIssue::penalty).sum::<f64>()).max(0.0);

        let status = if issues.is_empty() {
            ValidationStatus::Accepted
        } else if issues.iter().any(|i| i.severity() == Severity::Error)
            || quality_score < self.config.min_quality_score
        {
            ValidationStatus::Rejected
        } else {
            ValidationStatus::Flagged
        };

        debug!(
            "Validated place {}: {:?} with {} issues (score {:.2})",
            place.id(),
            status,
            issues.len(),
            quality_score
        );

        ValidationResult {
            place_id: place.id().to_string(),
            status,
            issues,
            quality_score,
        }
    }

    /// Validate every place in a corpus and aggregate the findings
    pub fn validate_corpus(&self, corpus: &Corpus) -> CorpusReport {
        let mut report = CorpusReport {
            places: corpus.len(),
            unresolved_connections: corpus.unresolved_connection_count(),
            ..CorpusReport::default()
        };

        let mut score_total = 0.0;
        for place in corpus.places() {
            let result = self.validate(place);
            score_total += result.quality_score;

            for issue in &result.issues {
                *report.issue_counts.entry(issue.kind().to_string()).or_default() += 1;
            }

            match result.status {
                ValidationStatus::Accepted => report.accepted += 1,
                ValidationStatus::Flagged => report.flagged += 1,
                ValidationStatus::Rejected => report.rejected += 1,
            }

            if result.status != ValidationStatus::Accepted {
                report.findings.push(result);
            }
        }

        report.mean_quality_score = if report.places == 0 {
            1.0
        } else {
            score_total / report.places as f64
        };

        info!(
            "Validated {} places: {} accepted, {} flagged, {} rejected, {} unresolved connections",
            report.places, report.accepted, report.flagged, report.rejected, report.unresolved_connections
        );

        report
    }

    fn check_locations(&self, place: &Place, issues: &mut Vec<ValidationIssue>) {
        for (index, entry) in place.locations().iter().enumerate() {
            let location = &entry.location;
            let label = || {
                location
                    .resolved_title()
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("#{}", index))
            };

            if self.config.check_location_ids && location.location_id.is_none() {
                issues.push(ValidationIssue::LocationWithoutId { index });
            }

            if self.config.check_location_types {
                if let Some(value) = &location.location_type {
                    if location.parsed_location_type().is_none() {
                        issues.push(ValidationIssue::UnknownLocationType {
                            location: label(),
                            value: value.clone(),
                        });
                    }
                }
            }

            if self.config.check_attestation_registry {
                for attestation in location.unregistered_attestations() {
                    issues.push(ValidationIssue::UnregisteredAttestation {
                        location: label(),
                        time_period: attestation.time_period.clone(),
                        confidence: attestation.confidence.clone(),
                    });
                }
            }

            if self.config.check_date_ranges {
                if let (Some(start), Some(end)) = (location.start_date, location.end_date) {
                    if start > end {
                        issues.push(ValidationIssue::InvertedDateRange {
                            location: label(),
                            start,
                            end,
                        });
                    }
                }
            }
        }
    }
}

fn check_bounding_box(place: &Place, issues: &mut Vec<ValidationIssue>) {
    let bbox = place.get_bbox();
    let set = bbox.iter().filter(|b| b.is_some()).count();

    if set == 0 {
        return;
    }
    if set < bbox.len() {
        issues.push(ValidationIssue::IncompleteBoundingBox);
        return;
    }

    // [min_lat, min_lon, max_lat, max_lon]
    if let [Some(min_lat), Some(min_lon), Some(max_lat), Some(max_lon)] = bbox {
        if min_lat > max_lat {
            issues.push(ValidationIssue::InvertedBoundingBox {
                axis: "latitude",
                min: min_lat,
                max: max_lat,
            });
        }
        if min_lon > max_lon {
            issues.push(ValidationIssue::InvertedBoundingBox {
                axis: "longitude",
                min: min_lon,
                max: max_lon,
            });
        }
    }
}
