//! Temporal attestations

/// A single (time period, confidence) attestation recorded by the sources
///
/// Labels are the short Pleiades vocabulary terms, e.g. `"roman"` or
/// `"confident"`. The explanatory URIs for those labels live on the owning
/// [`Location`](crate::Location).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Attestation {
    /// Time period label
    pub time_period: String,

    /// Confidence label
    pub confidence: String,
}

impl Attestation {
    /// Create a new attestation
    pub fn new(time_period: impl Into<String>, confidence: impl Into<String>) -> Self {
        Self {
            time_period: time_period.into(),
            confidence: confidence.into(),
        }
    }
}
