//! Place module - the primary organizational construct of the gazetteer
//!
//! Places are conceptual entities: a settlement mentioned in a text, an
//! archaeological site, a river, a province. Their spatial and linguistic
//! aspects are carried by the locations and names they own.

use crate::{AssociationCertainty, Connection, Coordinate, Location, Name, UNKNOWN_CERTAINTY};
use std::collections::BTreeMap;
use std::fmt;

/// Value returned by [`Place::earliest_date`] when no location carries a start date
pub const EARLIEST_DATE_SENTINEL: i64 = 3000;

/// Value returned by [`Place::latest_date`] when no location carries an end date
pub const LATEST_DATE_SENTINEL: i64 = -10000;

/// A location owned by a place, with the certainty of that association
#[derive(Debug, Clone, PartialEq)]
pub struct LocationEntry {
    /// The location itself
    pub location: Location,

    /// Association certainty label, if recorded
    pub certainty: Option<String>,
}

impl LocationEntry {
    /// Certainty label, or the `"None"` marker when absent
    pub fn certainty_label(&self) -> &str {
        self.certainty.as_deref().unwrap_or(UNKNOWN_CERTAINTY)
    }
}

/// A name owned by a place, with the certainty of that association
#[derive(Debug, Clone, PartialEq)]
pub struct NameEntry {
    /// The name itself
    pub name: Name,

    /// Association certainty label, if recorded
    pub certainty: Option<String>,
}

impl NameEntry {
    /// Certainty label, or the `"None"` marker when absent
    pub fn certainty_label(&self) -> &str {
        self.certainty.as_deref().unwrap_or(UNKNOWN_CERTAINTY)
    }
}

/// A single place from Pleiades
///
/// The id is fixed at construction. Locations, names and connections can only
/// be added, and the aggregated label registries only ever grow. Once a place
/// has been handed to a corpus it is shared read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    id: String,

    /// Stable Pleiades URI
    pub uri: Option<String>,

    /// Title as recorded; see [`Place::display_title`] for the fallback
    pub title: Option<String>,

    /// Short description
    pub description: Option<String>,

    /// Discussion beyond the description
    pub details: Option<String>,

    /// Provenance of the record
    pub provenance: Option<String>,

    /// Deprecated legacy place type
    pub legacy_type: Option<String>,

    /// Subject keywords in source order
    pub subjects: Vec<String>,

    /// Place type labels in source order
    pub place_types: Vec<String>,

    /// Western edge of the bounding box
    pub min_longitude: Option<f64>,

    /// Southern edge of the bounding box
    pub min_latitude: Option<f64>,

    /// Eastern edge of the bounding box
    pub max_longitude: Option<f64>,

    /// Northern edge of the bounding box
    pub max_latitude: Option<f64>,

    /// Representative point
    pub representative_point: Option<Coordinate>,

    locations: Vec<LocationEntry>,
    names: Vec<NameEntry>,
    location_types_info: BTreeMap<String, String>,
    association_certainty_info: BTreeMap<String, Option<String>>,
    connections: BTreeMap<String, Connection>,
}

impl Place {
    /// Create an empty place with the given id
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            uri: None,
            title: None,
            description: None,
            details: None,
            provenance: None,
            legacy_type: None,
            subjects: Vec::new(),
            place_types: Vec::new(),
            min_longitude: None,
            min_latitude: None,
            max_longitude: None,
            max_latitude: None,
            representative_point: None,
            locations: Vec::new(),
            names: Vec::new(),
            location_types_info: BTreeMap::new(),
            association_certainty_info: BTreeMap::new(),
            connections: BTreeMap::new(),
        }
    }

    /// Unique identifier of the place
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Title, falling back to the id
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.id)
    }

    /// Attach a location
    ///
    /// The certainty label and the location's primary feature type are
    /// registered in the aggregated info maps the first time they appear.
    pub fn add_location(&mut self, location: Location, certainty: Option<AssociationCertainty>) {
        if let (Some(label), Some(uri)) = (&location.feature_type, &location.feature_type_uri) {
            self.location_types_info
                .entry(label.clone())
                .or_insert_with(|| uri.clone());
        }
        let certainty = certainty.map(|c| self.register_certainty(c));
        self.locations.push(LocationEntry { location, certainty });
    }

    /// Attach a name
    pub fn add_name(&mut self, name: Name, certainty: Option<AssociationCertainty>) {
        let certainty = certainty.map(|c| self.register_certainty(c));
        self.names.push(NameEntry { name, certainty });
    }

    /// Record a connection to another place
    ///
    /// A later connection to the same target replaces the earlier one.
    pub fn add_connection(&mut self, target_id: impl Into<String>, connection: Connection) {
        self.connections.insert(target_id.into(), connection);
    }

    fn register_certainty(&mut self, certainty: AssociationCertainty) -> String {
        self.association_certainty_info
            .entry(certainty.value.clone())
            .or_insert(certainty.uri);
        certainty.value
    }

    /// Owned locations with their certainties, in source order
    pub fn locations(&self) -> &[LocationEntry] {
        &self.locations
    }

    /// Owned names with their certainties, in source order
    pub fn names(&self) -> &[NameEntry] {
        &self.names
    }

    /// Feature type labels of owned locations mapped to explanatory URIs
    pub fn location_types_info(&self) -> &BTreeMap<String, String> {
        &self.location_types_info
    }

    /// Certainty labels seen on owned locations and names mapped to explanatory URIs
    pub fn association_certainty_info(&self) -> &BTreeMap<String, Option<String>> {
        &self.association_certainty_info
    }

    /// Connections keyed by target place id
    pub fn connections(&self) -> &BTreeMap<String, Connection> {
        &self.connections
    }

    /// Bounding box as `[min_lat, min_lon, max_lat, max_lon]`
    ///
    /// Note the order: latitude comes first here, while storage and the source
    /// `bbox` array put longitude first.
    pub fn get_bbox(&self) -> [Option<f64>; 4] {
        [
            self.min_latitude,
            self.min_longitude,
            self.max_latitude,
            self.max_longitude,
        ]
    }

    /// Earliest start date across owned locations
    ///
    /// Returns [`EARLIEST_DATE_SENTINEL`] when no location has a start date;
    /// callers must read that as "no data".
    pub fn earliest_date(&self) -> i64 {
        self.locations
            .iter()
            .filter_map(|e| e.location.start_date)
            .fold(EARLIEST_DATE_SENTINEL, i64::min)
    }

    /// Latest end date across owned locations
    ///
    /// Returns [`LATEST_DATE_SENTINEL`] when no location has an end date.
    pub fn latest_date(&self) -> i64 {
        self.locations
            .iter()
            .filter_map(|e| e.location.end_date)
            .fold(LATEST_DATE_SENTINEL, i64::max)
    }

    /// Resolved titles of owned locations
    pub fn location_titles(&self) -> Vec<Option<&str>> {
        self.locations
            .iter()
            .map(|e| e.location.resolved_title())
            .collect()
    }

    /// Ids of owned locations
    pub fn location_ids(&self) -> Vec<Option<&str>> {
        self.locations
            .iter()
            .map(|e| e.location.location_id.as_deref())
            .collect()
    }

    /// Romanized forms of owned names
    pub fn name_list(&self) -> Vec<Option<&str>> {
        self.names
            .iter()
            .map(|e| e.name.romanized_name.as_deref())
            .collect()
    }

    /// Ids of owned names
    pub fn name_ids(&self) -> Vec<Option<&str>> {
        self.names
            .iter()
            .map(|e| e.name.name_id.as_deref())
            .collect()
    }
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_title())?;
        if let Some(description) = &self.description {
            write!(f, " ({})", description)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dated_location(id: &str, start: Option<i64>, end: Option<i64>) -> Location {
        let mut loc = Location::new(id);
        loc.start_date = start;
        loc.end_date = end;
        loc
    }

    #[test]
    fn test_bbox_swaps_to_lat_first() {
        let mut place = Place::new("579885");
        place.min_longitude = Some(10.0);
        place.min_latitude = Some(20.0);
        place.max_longitude = Some(30.0);
        place.max_latitude = Some(40.0);

        assert_eq!(place.get_bbox(), [Some(20.0), Some(10.0), Some(40.0), Some(30.0)]);
    }

    #[test]
    fn test_dates_without_locations_are_sentinels() {
        let place = Place::new("1");
        assert_eq!(place.earliest_date(), 3000);
        assert_eq!(place.latest_date(), -10000);
    }

    #[test]
    fn test_date_range_across_locations() {
        let mut place = Place::new("1");
        place.add_location(dated_location("a", Some(-550), Some(-330)), None);
        place.add_location(dated_location("b", Some(-30), Some(640)), None);
        place.add_location(dated_location("c", None, None), None);

        assert_eq!(place.earliest_date(), -550);
        assert_eq!(place.latest_date(), 640);
    }

    #[test]
    fn test_certainty_marker_and_registry() {
        let mut place = Place::new("1");
        place.add_location(
            Location::new("a"),
            Some(AssociationCertainty::new("certain").with_uri("uri:certain")),
        );
        place.add_location(
            Location::new("b"),
            Some(AssociationCertainty::new("certain").with_uri("uri:other")),
        );
        place.add_location(Location::new("c"), None);
        place.add_name(
            Name::new("n", "Roma"),
            Some(AssociationCertainty::new("less-certain")),
        );

        let labels: Vec<&str> = place.locations().iter().map(|e| e.certainty_label()).collect();
        assert_eq!(labels, vec!["certain", "certain", "None"]);
        assert_eq!(place.names()[0].certainty_label(), "less-certain");

        let info = place.association_certainty_info();
        assert_eq!(info.len(), 2);
        assert_eq!(info["certain"].as_deref(), Some("uri:certain"));
        assert_eq!(info["less-certain"], None);
    }

    #[test]
    fn test_location_types_info_aggregates_feature_types() {
        let mut place = Place::new("1");
        let mut loc = Location::new("a");
        loc.feature_type = Some("settlement".to_string());
        loc.feature_type_uri = Some("uri:settlement".to_string());
        place.add_location(loc.clone(), None);
        place.add_location(loc, None);

        assert_eq!(place.location_types_info().len(), 1);
        assert_eq!(place.locations().len(), 2);
    }

    #[test]
    fn test_list_accessors() {
        let mut place = Place::new("1");
        let mut titled = Location::new("loc-a");
        titled.title = Some("Acropolis".to_string());
        place.add_location(titled, None);
        place.add_location(Location::new("loc-b"), None);
        place.add_name(Name::new("n1", "Athenai"), None);

        assert_eq!(place.location_titles(), vec![Some("Acropolis"), Some("loc-b")]);
        assert_eq!(place.location_ids(), vec![Some("loc-a"), Some("loc-b")]);
        assert_eq!(place.name_list(), vec![Some("Athenai")]);
        assert_eq!(place.name_ids(), vec![Some("n1")]);
    }

    #[test]
    fn test_display_and_title_fallback() {
        let mut place = Place::new("579885");
        assert_eq!(place.to_string(), "579885");

        place.title = Some("Athenae".to_string());
        place.description = Some("An ancient city".to_string());
        assert_eq!(place.to_string(), "Athenae (An ancient city)");
    }

    #[test]
    fn test_connection_overwrite() {
        let mut place = Place::new("1");
        place.add_connection("2", Connection { connection_type: Some("near".into()), ..Default::default() });
        place.add_connection("2", Connection { connection_type: Some("part_of".into()), ..Default::default() });

        assert_eq!(place.connections().len(), 1);
        assert_eq!(place.connections()["2"].connection_type.as_deref(), Some("part_of"));
    }
}
