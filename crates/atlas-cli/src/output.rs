//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use atlas_crosswalk::{ReconcileReport, ReferenceTable};
use atlas_domain::Place;
use atlas_ingest::CorpusStats;
use atlas_validator::{CorpusReport, ValidationStatus};
use colored::*;
use std::collections::BTreeMap;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// The active output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format corpus statistics.
    pub fn format_stats(&self, stats: &CorpusStats) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "places": stats.places,
                "skipped": stats.skipped,
                "locations": stats.locations,
                "names": stats.names,
                "connections": stats.connections,
            }))?),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Places", "Skipped", "Locations", "Names", "Connections"]);
                builder.push_record([
                    stats.places.to_string(),
                    stats.skipped.to_string(),
                    stats.locations.to_string(),
                    stats.names.to_string(),
                    stats.connections.to_string(),
                ]);
                Ok(self.render(builder))
            }
            OutputFormat::Quiet => Ok(stats.places.to_string()),
        }
    }

    /// Format one place with its locations and names.
    pub fn format_place(&self, place: &Place) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&place_json(place))?),
            OutputFormat::Table => Ok(self.format_place_table(place)),
            OutputFormat::Quiet => Ok(place.id().to_string()),
        }
    }

    fn format_place_table(&self, place: &Place) -> String {
        let mut out = vec![self.colorize(&place.to_string(), "cyan")];

        let [min_lat, min_lon, max_lat, max_lon] = place.get_bbox();
        out.push(format!("  id:       {}", place.id()));
        if let Some(uri) = &place.uri {
            out.push(format!("  uri:      {}", uri));
        }
        if !place.place_types.is_empty() {
            out.push(format!("  types:    {}", place.place_types.join(", ")));
        }
        if let (Some(min_lat), Some(min_lon), Some(max_lat), Some(max_lon)) = (min_lat, min_lon, max_lat, max_lon) {
            out.push(format!(
                "  bbox:     lat {:.4}..{:.4}, lon {:.4}..{:.4}",
                min_lat, max_lat, min_lon, max_lon
            ));
        }
        if let Some(point) = &place.representative_point {
            out.push(format!("  point:    {}", point));
        }
        if !place.locations().is_empty() {
            out.push(format!("  dates:    {} to {}", place.earliest_date(), place.latest_date()));
        }

        if !place.locations().is_empty() {
            let mut builder = Builder::default();
            builder.push_record(["Location", "Type", "Certainty", "Start", "End"]);
            for entry in place.locations() {
                let location = &entry.location;
                builder.push_record([
                    location.resolved_title().unwrap_or("-").to_string(),
                    location.location_type.clone().unwrap_or_else(|| "-".to_string()),
                    entry.certainty_label().to_string(),
                    optional(location.start_date),
                    optional(location.end_date),
                ]);
            }
            out.push(self.render(builder));
        }

        if !place.names().is_empty() {
            let mut builder = Builder::default();
            builder.push_record(["Name", "Certainty"]);
            for entry in place.names() {
                builder.push_record([entry.name.to_string(), entry.certainty_label().to_string()]);
            }
            out.push(self.render(builder));
        }

        out.join("\n")
    }

    /// Format connections that resolve within the corpus.
    pub fn format_connections(&self, connections: &[(&Place, &atlas_domain::Connection)]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let items: Vec<serde_json::Value> = connections
                    .iter()
                    .map(|(target, connection)| {
                        serde_json::json!({
                            "id": target.id(),
                            "title": target.display_title(),
                            "connection_type": connection.connection_type,
                            "start": connection.start,
                            "end": connection.end,
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&items)?)
            }
            OutputFormat::Table => {
                if connections.is_empty() {
                    return Ok(self.colorize("No resolvable connections.", "yellow"));
                }
                let mut builder = Builder::default();
                builder.push_record(["Id", "Place", "Connection", "Start", "End"]);
                for (target, connection) in connections {
                    builder.push_record([
                        target.id().to_string(),
                        target.display_title().to_string(),
                        connection.connection_type.clone().unwrap_or_else(|| "-".to_string()),
                        optional(connection.start),
                        optional(connection.end),
                    ]);
                }
                Ok(self.render(builder))
            }
            OutputFormat::Quiet => Ok(connections
                .iter()
                .map(|(target, _)| target.id())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format a corpus validation report.
    pub fn format_report(&self, report: &CorpusReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Quiet => Ok(report
                .findings
                .iter()
                .filter(|r| r.status == ValidationStatus::Rejected)
                .map(|r| r.place_id.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                let mut out = vec![format!(
                    "{} places: {} accepted, {} flagged, {} rejected (mean quality {:.2}), {} unresolved connections",
                    report.places,
                    report.accepted,
                    report.flagged,
                    report.rejected,
                    report.mean_quality_score,
                    report.unresolved_connections
                )];

                if !report.issue_counts.is_empty() {
                    let mut builder = Builder::default();
                    builder.push_record(["Issue", "Count"]);
                    for (kind, count) in &report.issue_counts {
                        builder.push_record([kind.clone(), count.to_string()]);
                    }
                    out.push(self.render(builder));
                }

                for finding in report.findings.iter().filter(|r| r.status == ValidationStatus::Rejected) {
                    let kinds: Vec<&str> = finding.issues.iter().map(|i| i.kind()).collect();
                    out.push(self.error(&format!("{}: {}", finding.place_id, kinds.join(", "))));
                }

                Ok(out.join("\n"))
            }
        }
    }

    /// Format a reconciled table, keyed by title or by id.
    pub fn format_table(&self, table: &ReferenceTable, key_header: &str, value_header: &str) -> Result<String> {
        self.format_keyed(table, key_header, value_header)
    }

    /// Format an id-keyed inverted table.
    pub fn format_inverted(&self, inverted: &BTreeMap<String, Vec<String>>) -> Result<String> {
        self.format_keyed(inverted, "Place id", "Cited by")
    }

    fn format_keyed(&self, rows: &BTreeMap<String, Vec<String>>, key_header: &str, value_header: &str) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(rows)?),
            OutputFormat::Quiet => Ok(rows.keys().cloned().collect::<Vec<_>>().join("\n")),
            OutputFormat::Table => {
                if rows.is_empty() {
                    return Ok(self.colorize("No rows.", "yellow"));
                }
                let mut builder = Builder::default();
                builder.push_record([key_header, value_header]);
                for (key, values) in rows {
                    builder.push_record([key.clone(), values.join(", ")]);
                }
                Ok(self.render(builder))
            }
        }
    }

    /// Format a reconciliation summary.
    pub fn reconcile_summary(&self, report: &ReconcileReport) -> String {
        if report.unmatched == 0 {
            self.success(&report.to_string())
        } else {
            self.warning(&report.to_string())
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    fn render(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

fn optional(value: Option<i64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

fn place_json(place: &Place) -> serde_json::Value {
    let locations: Vec<serde_json::Value> = place
        .locations()
        .iter()
        .map(|entry| {
            let location = &entry.location;
            serde_json::json!({
                "id": location.location_id,
                "title": location.resolved_title(),
                "location_type": location.location_type,
                "certainty": entry.certainty_label(),
                "start": location.start_date,
                "end": location.end_date,
                "geometry_type": location.geometry_type,
                "coordinates": location
                    .coordinates
                    .iter()
                    .map(|c| [c.longitude, c.latitude])
                    .collect::<Vec<_>>(),
            })
        })
        .collect();

    let names: Vec<serde_json::Value> = place
        .names()
        .iter()
        .map(|entry| {
            serde_json::json!({
                "id": entry.name.name_id,
                "romanized": entry.name.romanized_name,
                "attested": entry.name.name_attested,
                "language": entry.name.language,
                "certainty": entry.certainty_label(),
            })
        })
        .collect();

    serde_json::json!({
        "id": place.id(),
        "title": place.display_title(),
        "uri": place.uri,
        "description": place.description,
        "place_types": place.place_types,
        "bbox": place.get_bbox(),
        "representative_point": place.representative_point.map(|c| [c.longitude, c.latitude]),
        "earliest_date": place.earliest_date(),
        "latest_date": place.latest_date(),
        "locations": locations,
        "names": names,
        "connections": place.connections().keys().collect::<Vec<_>>(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use atlas_domain::{Location, Name};

    fn create_test_place() -> Place {
        let mut place = Place::new("579885");
        place.title = Some("Athenae".to_string());
        place.description = Some("The chief city of Attica".to_string());

        let mut location = Location::new("darmc-location-1");
        location.start_date = Some(-750);
        location.end_date = Some(640);
        place.add_location(location, None);
        place.add_name(Name::new("athenai", "Athenai"), None);
        place
    }

    #[test]
    fn test_place_json() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_place(&create_test_place()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["id"], "579885");
        assert_eq!(value["earliest_date"], -750);
        assert_eq!(value["locations"][0]["certainty"], "None");
        assert_eq!(value["names"][0]["romanized"], "Athenai");
    }

    #[test]
    fn test_place_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_place(&create_test_place()).unwrap();

        assert!(output.starts_with("Athenae (The chief city of Attica)"));
        assert!(output.contains("darmc-location-1"));
        assert!(output.contains("-750 to 640"));
    }

    #[test]
    fn test_place_quiet() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        assert_eq!(formatter.format_place(&create_test_place()).unwrap(), "579885");
    }

    #[test]
    fn test_stats_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let stats = CorpusStats {
            places: 3,
            skipped: 1,
            ..CorpusStats::default()
        };
        let output = formatter.format_stats(&stats).unwrap();
        assert!(output.contains("Places"));
        assert!(output.contains("Connections"));
    }

    #[test]
    fn test_inverted_json() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let mut inverted = BTreeMap::new();
        inverted.insert("579885".to_string(), vec!["DocA".to_string(), "DocA".to_string()]);

        let output = formatter.format_inverted(&inverted).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["579885"], serde_json::json!(["DocA", "DocA"]));
    }

    #[test]
    fn test_empty_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_table(&ReferenceTable::new(), "Document", "Place ids").unwrap();
        assert!(output.contains("No rows"));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("test"), "✓ test");
        assert_eq!(formatter.warning("test"), "⚠ test");
    }
}
