//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use atlas_ingest::IngestConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Default input and output files
    #[serde(default)]
    pub data: DataPaths,

    /// Ingestion rules
    #[serde(default)]
    pub ingest: IngestConfig,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Default data file locations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataPaths {
    /// Pleiades JSON-LD dump
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pleiades: Option<PathBuf>,

    /// ToposText gazetteer (JSON-LD)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gazetteer: Option<PathBuf>,

    /// ToposText reference table (CSV)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub references: Option<PathBuf>,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".classical-atlas").join("config.toml"))
    }

    /// Load configuration from the default path, or defaults if there is no file.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load configuration from `path`, or defaults if there is no file.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.ingest.validate().map_err(CliError::Config)?;
        Ok(config)
    }

    /// Save configuration to `path`.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Render the configuration as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Pick a file: the command-line value if given, else the configured one.
    pub fn resolve(flag: Option<PathBuf>, configured: &Option<PathBuf>, what: &str) -> Result<PathBuf> {
        flag.or_else(|| configured.clone()).ok_or_else(|| {
            CliError::InvalidInput(format!(
                "no {} file given; pass it on the command line or set it under [data] in the config",
                what
            ))
        })
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.settings.color);
        assert_eq!(config.settings.format, OutputFormat::Table);
        assert!(config.data.pleiades.is_none());
        assert!(!config.ingest.strict_shapes);
    }

    #[test]
    fn test_partial_toml() {
        let config: Config = toml::from_str(
            r#"
            [data]
            pleiades = "/data/pleiades-places.json"

            [settings]
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.data.pleiades, Some(PathBuf::from("/data/pleiades-places.json")));
        assert_eq!(config.settings.format, OutputFormat::Json);
        assert!(config.settings.color);
        assert!(!config.ingest.require_place_id);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.data.gazetteer = Some(PathBuf::from("/data/ToposTextGazetteer.jsonld"));
        config.ingest = IngestConfig::strict();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.data.gazetteer, config.data.gazetteer);
        assert!(loaded.ingest.strict_shapes);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = Config::load_from(Path::new("/nonexistent/config.toml")).unwrap();
        assert!(config.data.references.is_none());
    }

    #[test]
    fn test_resolve_prefers_flag() {
        let configured = Some(PathBuf::from("configured.json"));

        let picked = Config::resolve(Some(PathBuf::from("flag.json")), &configured, "Pleiades").unwrap();
        assert_eq!(picked, PathBuf::from("flag.json"));

        let picked = Config::resolve(None, &configured, "Pleiades").unwrap();
        assert_eq!(picked, PathBuf::from("configured.json"));

        assert!(matches!(
            Config::resolve(None, &None, "Pleiades"),
            Err(CliError::InvalidInput(_))
        ));
    }
}
