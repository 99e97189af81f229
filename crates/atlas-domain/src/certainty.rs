//! Association certainty between a place and its locations or names

/// Marker stored for a location or name whose certainty is absent
pub const UNKNOWN_CERTAINTY: &str = "None";

/// Certainty of the link between a place and one of its locations or names
///
/// Pleiades records both a short label (`"certain"`, `"less-certain"`, ...) and
/// a URI explaining that label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssociationCertainty {
    /// Certainty label
    pub value: String,

    /// Explanatory URI for the label, if the record supplied one
    pub uri: Option<String>,
}

impl AssociationCertainty {
    /// Create a certainty without an explanatory URI
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            uri: None,
        }
    }

    /// Attach the explanatory URI
    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = Some(uri.into());
        self
    }
}
