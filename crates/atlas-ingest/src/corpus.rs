//! Corpus assembly and id-keyed lookup

use crate::config::IngestConfig;
use crate::error::IngestError;
use crate::fields::malformed;
use crate::place::parse_place;
use atlas_domain::traits::GraphSink;
use atlas_domain::{Connection, Place};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use tracing::{info, warn};

/// Counts gathered while assembling a corpus
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CorpusStats {
    /// Places kept
    pub places: usize,

    /// Records skipped (no id or not an object)
    pub skipped: usize,

    /// Locations across all places
    pub locations: usize,

    /// Names across all places
    pub names: usize,

    /// Connections across all places
    pub connections: usize,
}

impl fmt::Display for CorpusStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} places ({} skipped), {} locations, {} names, {} connections",
            self.places, self.skipped, self.locations, self.names, self.connections
        )
    }
}

/// The normalized corpus: places in source order plus an id index
///
/// Read-only once built. Connections are resolved through the index on
/// demand; places never hold references to each other.
///
/// Places, and the locations and names they own, are only handed out as
/// shared references, so a built corpus cannot be edited in place:
///
/// ```compile_fail
/// use atlas_ingest::{build_corpus, IngestConfig};
///
/// let document = serde_json::json!({"@graph": [{"id": "579885", "title": "Athenae"}]});
/// let (corpus, _) = build_corpus(&document, &IngestConfig::default()).unwrap();
/// let place = corpus.get("579885").unwrap();
/// place.title = None;
/// ```
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    places: Vec<Place>,
    index: HashMap<String, usize>,
}

impl Corpus {
    /// Build a corpus from already normalized places
    ///
    /// When two places share an id, lookups resolve to the first one.
    pub fn from_places(places: Vec<Place>) -> Self {
        let mut index = HashMap::with_capacity(places.len());
        for (pos, place) in places.iter().enumerate() {
            if index.contains_key(place.id()) {
                warn!("Duplicate place id {}; keeping the first for lookups", place.id());
                continue;
            }
            index.insert(place.id().to_string(), pos);
        }
        Self { places, index }
    }

    /// Places in source order
    pub fn places(&self) -> &[Place] {
        &self.places
    }

    /// Number of places
    pub fn len(&self) -> usize {
        self.places.len()
    }

    /// Whether the corpus holds no places
    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    /// Look up a place by id
    pub fn get(&self, id: &str) -> Option<&Place> {
        self.index.get(id).map(|&pos| &self.places[pos])
    }

    /// Connections of `place` whose target is part of this corpus
    pub fn resolve_connections<'a>(&'a self, place: &'a Place) -> Vec<(&'a Place, &'a Connection)> {
        place
            .connections()
            .iter()
            .filter_map(|(target, connection)| self.get(target).map(|p| (p, connection)))
            .collect()
    }

    /// Number of connections, corpus-wide, whose target is outside this corpus
    pub fn unresolved_connection_count(&self) -> usize {
        self.places
            .iter()
            .flat_map(|p| p.connections().keys())
            .filter(|target| !self.index.contains_key(target.as_str()))
            .count()
    }

    /// Feed every place and every resolvable connection to a graph collaborator
    ///
    /// Returns the number of edges added.
    pub fn assemble_into<G: GraphSink>(&self, sink: &mut G) -> Result<usize, G::Error> {
        for place in &self.places {
            sink.add_node(place)?;
        }

        let mut edges = 0;
        for place in &self.places {
            for (target, connection) in self.resolve_connections(place) {
                sink.add_edge(place.id(), target.id(), connection)?;
                edges += 1;
            }
        }
        Ok(edges)
    }

    /// Tally locations, names and connections
    pub fn stats(&self) -> CorpusStats {
        CorpusStats {
            places: self.places.len(),
            skipped: 0,
            locations: self.places.iter().map(|p| p.locations().len()).sum(),
            names: self.places.iter().map(|p| p.names().len()).sum(),
            connections: self.places.iter().map(|p| p.connections().len()).sum(),
        }
    }
}

/// Turn a Pleiades JSON-LD document into a corpus
///
/// The document must have a top-level `@graph` array of place records.
/// Construction is all-or-nothing: any error aborts without a partial corpus.
pub fn build_corpus(document: &Value, config: &IngestConfig) -> Result<(Corpus, CorpusStats), IngestError> {
    config.validate().map_err(IngestError::Config)?;

    let graph = document
        .get("@graph")
        .and_then(|g| g.as_array())
        .ok_or_else(|| IngestError::MalformedShape("document has no '@graph' array".to_string()))?;

    let limit = config.max_places.unwrap_or(usize::MAX);
    let mut places = Vec::with_capacity(graph.len().min(limit));
    let mut skipped = 0;

    for (index, raw) in graph.iter().enumerate() {
        if places.len() >= limit {
            break;
        }

        let Some(record) = raw.as_object() else {
            malformed(config, format!("@graph[{}] is not an object", index))?;
            skipped += 1;
            continue;
        };

        match parse_place(record, config)? {
            Some(place) => places.push(place),
            None if config.require_place_id => return Err(IngestError::MissingPlaceId { index }),
            None => {
                warn!("Skipping place record {} without an id", index);
                skipped += 1;
            }
        }
    }

    let corpus = Corpus::from_places(places);
    let stats = CorpusStats {
        skipped,
        ..corpus.stats()
    };
    info!("Assembled corpus: {}", stats);

    Ok((corpus, stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn document() -> Value {
        json!({
            "@context": "https://pleiades.stoa.org/...",
            "@graph": [
                {"id": "1", "title": "Athenae", "connections": [
                    {"id": "2", "connectionType": "part_of"},
                    {"id": "404", "connectionType": "near"}
                ]},
                {"id": "2", "title": "Attica", "connections": [{"id": "1", "connectionType": "contains"}]},
                {"title": "No id"},
                {"id": "3", "title": "Isolated"}
            ]
        })
    }

    #[derive(Default)]
    struct RecordingSink {
        nodes: Vec<String>,
        edges: Vec<(String, String, Option<String>)>,
    }

    impl GraphSink for RecordingSink {
        type Error = String;

        fn add_node(&mut self, place: &Place) -> Result<(), Self::Error> {
            self.nodes.push(place.id().to_string());
            Ok(())
        }

        fn add_edge(&mut self, from_id: &str, to_id: &str, connection: &Connection) -> Result<(), Self::Error> {
            self.edges.push((from_id.to_string(), to_id.to_string(), connection.connection_type.clone()));
            Ok(())
        }
    }

    #[test]
    fn test_build_corpus() {
        let (corpus, stats) = build_corpus(&document(), &IngestConfig::default()).unwrap();

        assert_eq!(corpus.len(), 3);
        assert_eq!(stats.places, 3);
        assert_eq!(stats.skipped, 1);
        assert_eq!(stats.connections, 3);
        assert_eq!(corpus.get("2").map(|p| p.display_title()), Some("Attica"));
        assert!(corpus.get("404").is_none());
    }

    #[test]
    fn test_missing_id_strict() {
        let result = build_corpus(&document(), &IngestConfig::strict());
        assert!(matches!(result, Err(IngestError::MissingPlaceId { index: 2 })));
    }

    #[test]
    fn test_max_places() {
        let config = IngestConfig::default().with_max_places(2);
        let (corpus, _) = build_corpus(&document(), &config).unwrap();
        assert_eq!(corpus.len(), 2);
    }

    #[test]
    fn test_missing_graph() {
        let result = build_corpus(&json!({"features": []}), &IngestConfig::default());
        assert!(matches!(result, Err(IngestError::MalformedShape(_))));
    }

    #[test]
    fn test_resolve_connections() {
        let (corpus, _) = build_corpus(&document(), &IngestConfig::default()).unwrap();
        let athens = corpus.get("1").unwrap();

        let resolved = corpus.resolve_connections(athens);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].0.id(), "2");
        assert_eq!(corpus.unresolved_connection_count(), 1);
    }

    #[test]
    fn test_assemble_into_graph() {
        let (corpus, _) = build_corpus(&document(), &IngestConfig::default()).unwrap();
        let mut sink = RecordingSink::default();

        let edges = corpus.assemble_into(&mut sink).unwrap();

        assert_eq!(edges, 2);
        assert_eq!(sink.nodes, vec!["1", "2", "3"]);
        assert!(sink.edges.contains(&("1".to_string(), "2".to_string(), Some("part_of".to_string()))));
        assert!(sink.edges.contains(&("2".to_string(), "1".to_string(), Some("contains".to_string()))));
    }

    #[test]
    fn test_duplicate_ids_resolve_to_first() {
        let mut first = Place::new("7");
        first.title = Some("First".to_string());
        let mut second = Place::new("7");
        second.title = Some("Second".to_string());

        let corpus = Corpus::from_places(vec![first, second]);
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.get("7").map(|p| p.display_title()), Some("First"));
    }
}
