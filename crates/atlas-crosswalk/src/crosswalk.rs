//! Building the ToposText ↔ Pleiades identifier crosswalk

use crate::error::CrosswalkError;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// Identifier mapping; `None` marks an id with no counterpart
pub type Crosswalk = BTreeMap<String, Option<String>>;

/// Which way a crosswalk is keyed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// ToposText id → Pleiades id (every feature gets an entry)
    #[default]
    ToposToPleiades,

    /// Pleiades id → ToposText id (only features that resolved)
    PleiadesToTopos,
}

/// Both directions of the crosswalk, built in one pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrosswalkPair {
    /// ToposText id → Pleiades id, `None` when no Pleiades link exists
    pub forward: Crosswalk,

    /// Pleiades id → ToposText id
    pub reverse: Crosswalk,
}

impl CrosswalkPair {
    /// Take the mapping for one direction
    pub fn into_direction(self, direction: Direction) -> Crosswalk {
        match direction {
            Direction::ToposToPleiades => self.forward,
            Direction::PleiadesToTopos => self.reverse,
        }
    }
}

/// Build both crosswalk directions from a ToposText gazetteer
///
/// For each feature the ToposText id is the last path segment of `@id`. The
/// Pleiades id is the last path segment of `links[0].identifier`, provided that
/// identifier mentions `pleiades`. Nothing is cached; every call rebuilds.
pub fn build_crosswalks(gazetteer: &Value) -> Result<CrosswalkPair, CrosswalkError> {
    let features = gazetteer
        .get("features")
        .and_then(|f| f.as_array())
        .ok_or_else(|| CrosswalkError::MalformedGazetteer("missing 'features' array".to_string()))?;

    let mut pair = CrosswalkPair::default();

    for (idx, feature) in features.iter().enumerate() {
        let Some(topos_id) = feature
            .get("@id")
            .and_then(|v| v.as_str())
            .and_then(last_segment)
        else {
            warn!("Skipping ToposText feature {} without a usable '@id'", idx);
            continue;
        };

        let pleiades_id = pleiades_link(feature).and_then(last_segment);
        if let Some(pleiades_id) = &pleiades_id {
            pair.reverse
                .insert(pleiades_id.clone(), Some(topos_id.clone()));
        }
        debug!("Crosswalk {} -> {:?}", topos_id, pleiades_id);
        pair.forward.insert(topos_id, pleiades_id);
    }

    info!(
        "Built crosswalk for {} ToposText features, {} with Pleiades ids",
        pair.forward.len(),
        pair.reverse.len()
    );

    Ok(pair)
}

/// Build the crosswalk for one direction
pub fn build_crosswalk(gazetteer: &Value, direction: Direction) -> Result<Crosswalk, CrosswalkError> {
    Ok(build_crosswalks(gazetteer)?.into_direction(direction))
}

/// `links[0].identifier`, if it points at Pleiades
fn pleiades_link(feature: &Value) -> Option<&str> {
    feature
        .get("links")?
        .as_array()?
        .first()?
        .get("identifier")?
        .as_str()
        .filter(|uri| uri.contains("pleiades"))
}

/// Final non-empty path segment of a URI
fn last_segment(uri: &str) -> Option<String> {
    uri.trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
