//! Show command implementation.

use crate::cli::ShowArgs;
use crate::commands::load_corpus;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;

/// Execute the show command.
pub fn execute_show(args: ShowArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let (corpus, _) = load_corpus(&args.source, config)?;
    let place = corpus.get(&args.id).ok_or_else(|| CliError::NotFound(args.id.clone()))?;

    println!("{}", formatter.format_place(place)?);

    if args.connections {
        let connections = corpus.resolve_connections(place);
        println!("{}", formatter.format_connections(&connections)?);
    }

    Ok(())
}
