//! Reconcile command implementation.

use crate::cli::ReconcileArgs;
use crate::config::{Config, OutputFormat};
use crate::error::Result;
use crate::output::Formatter;
use atlas_crosswalk::{
    apply_crosswalk, build_crosswalk, invert_to_id_keyed, read_reference_table_file, write_reference_table_file,
};
use atlas_ingest::load_json;

/// Execute the reconcile command.
pub fn execute_reconcile(args: ReconcileArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let gazetteer_path = Config::resolve(args.gazetteer, &config.data.gazetteer, "ToposText gazetteer")?;
    let refs_path = Config::resolve(args.refs, &config.data.references, "reference table")?;

    let gazetteer = load_json(&gazetteer_path)?;
    let crosswalk = build_crosswalk(&gazetteer, args.direction.into())?;

    let mut refs = read_reference_table_file(&refs_path)?;
    let report = apply_crosswalk(&mut refs, &crosswalk);

    if formatter.format() != OutputFormat::Quiet {
        eprintln!("{}", formatter.reconcile_summary(&report));
    }

    if let Some(output) = &args.output {
        write_reference_table_file(&refs, output)?;
        eprintln!(
            "{}",
            formatter.success(&format!("Wrote reconciled table to {}", output.display()))
        );
    }

    if args.invert {
        println!("{}", formatter.format_inverted(&invert_to_id_keyed(&refs))?);
    } else if args.output.is_none() {
        println!("{}", formatter.format_table(&refs, "Document", "Place ids")?);
    }

    Ok(())
}
