//! Validate command implementation.

use crate::cli::ValidateArgs;
use crate::commands::load_corpus;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use atlas_validator::Validator;

/// Execute the validate command.
pub fn execute_validate(args: ValidateArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let validator = Validator::new(args.rules.into())?;
    let (corpus, _) = load_corpus(&args.source, config)?;

    let report = validator.validate_corpus(&corpus);
    println!("{}", formatter.format_report(&report)?);

    Ok(())
}
