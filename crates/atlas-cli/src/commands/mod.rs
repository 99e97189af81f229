//! Command implementations.

pub mod config;
pub mod load;
pub mod reconcile;
pub mod show;
pub mod validate;

pub use self::config::execute_config;
pub use self::load::execute_load;
pub use self::reconcile::execute_reconcile;
pub use self::show::execute_show;
pub use self::validate::execute_validate;

use crate::cli::SourceArgs;
use crate::config::Config;
use crate::error::Result;
use atlas_ingest::{build_corpus, load_json, Corpus, CorpusStats, IngestConfig};
use tracing::debug;

/// Ingest rules for this run: the configured ones, tightened or capped by flags.
pub(crate) fn ingest_config(source: &SourceArgs, config: &Config) -> IngestConfig {
    let mut ingest = if source.strict {
        IngestConfig {
            max_places: config.ingest.max_places,
            ..IngestConfig::strict()
        }
    } else {
        config.ingest.clone()
    };

    if let Some(max_places) = source.max_places {
        ingest = ingest.with_max_places(max_places);
    }
    ingest
}

/// Read the Pleiades dump named by the flags or the config and build the corpus.
pub(crate) fn load_corpus(source: &SourceArgs, config: &Config) -> Result<(Corpus, CorpusStats)> {
    let path = Config::resolve(source.pleiades.clone(), &config.data.pleiades, "Pleiades")?;
    debug!("Loading Pleiades corpus from {}", path.display());
    let document = load_json(&path)?;
    Ok(build_corpus(&document, &ingest_config(source, config))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(strict: bool, max_places: Option<usize>) -> SourceArgs {
        SourceArgs {
            pleiades: None,
            strict,
            max_places,
        }
    }

    #[test]
    fn test_ingest_config_from_flags() {
        let mut config = Config::default();
        config.ingest.max_places = Some(50);

        let ingest = ingest_config(&source(true, None), &config);
        assert!(ingest.strict_shapes);
        assert!(ingest.require_place_id);
        assert_eq!(ingest.max_places, Some(50));

        let ingest = ingest_config(&source(false, Some(5)), &config);
        assert!(!ingest.strict_shapes);
        assert_eq!(ingest.max_places, Some(5));
    }

    #[test]
    fn test_load_corpus_without_path() {
        let result = load_corpus(&source(false, None), &Config::default());
        assert!(matches!(result, Err(crate::CliError::InvalidInput(_))));
    }
}
