//! Validator configuration

use serde::{Deserialize, Serialize};

/// Which data-quality rules to apply
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Flag locations that carry no id
    pub check_location_ids: bool,

    /// Flag names missing a romanized form or an id
    pub check_name_identity: bool,

    /// Flag location types outside the known vocabulary
    pub check_location_types: bool,

    /// Flag attestations whose labels are not registered on the location
    pub check_attestation_registry: bool,

    /// Flag locations whose start date is after their end date
    pub check_date_ranges: bool,

    /// Flag bounding boxes that are partial or inverted
    pub check_bounding_box: bool,

    /// Flag places with no locations at all
    pub require_locations: bool,

    /// Places scoring below this are rejected even when every issue is minor (0.0-1.0)
    pub min_quality_score: f64,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            check_location_ids: true,
            check_name_identity: true,
            check_location_types: true,
            check_attestation_registry: true,
            check_date_ranges: true,
            check_bounding_box: true,
            require_locations: false,
            min_quality_score: 0.5,
        }
    }
}

impl ValidationConfig {
    /// Create a permissive configuration (structural checks only)
    pub fn permissive() -> Self {
        Self {
            check_location_ids: false,
            check_name_identity: false,
            check_location_types: false,
            check_attestation_registry: true,
            check_date_ranges: true,
            check_bounding_box: false,
            require_locations: false,
            min_quality_score: 0.0,
        }
    }

    /// Create a strict configuration (all checks enabled)
    pub fn strict() -> Self {
        Self {
            check_location_ids: true,
            check_name_identity: true,
            check_location_types: true,
            check_attestation_registry: true,
            check_date_ranges: true,
            check_bounding_box: true,
            require_locations: true,
            min_quality_score: 0.8,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.min_quality_score) {
            return Err(format!(
                "min_quality_score {} is outside [0.0, 1.0]",
                self.min_quality_score
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ValidationConfig::default();
        assert!(config.check_location_ids);
        assert!(!config.require_locations);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_permissive_config() {
        let config = ValidationConfig::permissive();
        assert!(!config.check_location_types);
        assert_eq!(config.min_quality_score, 0.0);
    }

    #[test]
    fn test_strict_config() {
        let config = ValidationConfig::strict();
        assert!(config.require_locations);
        assert_eq!(config.min_quality_score, 0.8);
    }

    #[test]
    fn test_out_of_range_threshold() {
        let config = ValidationConfig {
            min_quality_score: 1.5,
            ..ValidationConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
