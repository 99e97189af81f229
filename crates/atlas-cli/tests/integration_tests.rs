//! Integration tests for atlas-cli
//!
//! These tests drive the command implementations against gazetteer files in a
//! temporary directory.

use atlas_cli::cli::{ReconcileArgs, ShowArgs, SourceArgs, ValidateArgs};
use atlas_cli::cli::{DirectionArg, RulesArg};
use atlas_cli::commands::{execute_reconcile, execute_show, execute_validate};
use atlas_cli::config::OutputFormat;
use atlas_cli::{CliError, Config, Formatter};
use atlas_crosswalk::read_reference_table_file;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const PLEIADES: &str = r#"{
  "@graph": [
    {
      "id": "579885",
      "title": "Athenae",
      "locations": [{"id": "loc-1", "start": -750, "end": 640}],
      "names": [{"id": "athenai", "romanized": "Athenai"}],
      "connections": [{"id": "580109", "connectionType": "part_of_regional"}]
    },
    {"id": "580109", "title": "Attica"}
  ]
}"#;

const GAZETTEER: &str = r#"{
  "features": [
    {"@id": "https://topostext.org/place/379237UAth", "links": [{"identifier": "https://pleiades.stoa.org/places/579885"}]},
    {"@id": "https://topostext.org/place/381240LMar"}
  ]
}"#;

fn workspace() -> (TempDir, Config) {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("pleiades.json"), PLEIADES).unwrap();
    fs::write(dir.path().join("gazetteer.jsonld"), GAZETTEER).unwrap();
    fs::write(dir.path().join("refs.csv"), "Thucydides,379237UAth,381240LMar\n").unwrap();

    let mut config = Config::default();
    config.data.pleiades = Some(dir.path().join("pleiades.json"));
    config.data.gazetteer = Some(dir.path().join("gazetteer.jsonld"));
    config.data.references = Some(dir.path().join("refs.csv"));
    (dir, config)
}

fn source() -> SourceArgs {
    SourceArgs {
        pleiades: None,
        strict: false,
        max_places: None,
    }
}

fn formatter() -> Formatter {
    Formatter::new(OutputFormat::Quiet, false)
}

#[test]
fn test_show_known_and_unknown_place() {
    let (_dir, config) = workspace();

    let args = ShowArgs {
        id: "579885".to_string(),
        connections: true,
        source: source(),
    };
    execute_show(args, &config, &formatter()).unwrap();

    let args = ShowArgs {
        id: "000000".to_string(),
        connections: false,
        source: source(),
    };
    let result = execute_show(args, &config, &formatter());
    assert!(matches!(result, Err(CliError::NotFound(id)) if id == "000000"));
}

#[test]
fn test_validate_runs() {
    let (_dir, config) = workspace();
    let args = ValidateArgs {
        rules: RulesArg::Strict,
        source: source(),
    };
    execute_validate(args, &config, &formatter()).unwrap();
}

#[test]
fn test_reconcile_writes_output() {
    let (dir, config) = workspace();
    let output = dir.path().join("reconciled.csv");

    let args = ReconcileArgs {
        gazetteer: None,
        refs: None,
        output: Some(output.clone()),
        invert: false,
        direction: DirectionArg::ToposToPleiades,
    };
    execute_reconcile(args, &config, &formatter()).unwrap();

    let table = read_reference_table_file(&output).unwrap();
    assert_eq!(table["Thucydides"], vec!["579885", "381240LMar"]);
}

#[test]
fn test_missing_source_file() {
    let (_dir, config) = workspace();
    let args = ShowArgs {
        id: "579885".to_string(),
        connections: false,
        source: SourceArgs {
            pleiades: Some(PathBuf::from("/nonexistent/pleiades.json")),
            ..source()
        },
    };

    let result = execute_show(args, &config, &formatter());
    assert!(matches!(result, Err(CliError::Ingest(_))));
}
