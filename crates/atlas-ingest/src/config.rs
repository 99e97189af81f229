//! Configuration for ingestion

use serde::{Deserialize, Serialize};

/// Configuration for turning raw records into a corpus
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestConfig {
    /// Fail on unexpected nesting instead of skipping the offending sub-record
    #[serde(default)]
    pub strict_shapes: bool,

    /// Fail on place records without an id instead of skipping them
    #[serde(default)]
    pub require_place_id: bool,

    /// Stop after this many places (for sampling a corpus slice)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_places: Option<usize>,
}

impl Default for IngestConfig {
    /// Tolerant defaults: skip and log whatever cannot be normalized
    fn default() -> Self {
        Self {
            strict_shapes: false,
            require_place_id: false,
            max_places: None,
        }
    }
}

impl IngestConfig {
    /// Strict preset: every shape or identity problem aborts ingestion
    pub fn strict() -> Self {
        Self {
            strict_shapes: true,
            require_place_id: true,
            max_places: None,
        }
    }

    /// Limit the number of places read
    pub fn with_max_places(mut self, max_places: usize) -> Self {
        self.max_places = Some(max_places);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_places == Some(0) {
            return Err("max_places must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str)
            .map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}
