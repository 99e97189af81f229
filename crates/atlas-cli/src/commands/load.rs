//! Load command implementation.

use crate::cli::LoadArgs;
use crate::commands::load_corpus;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;

/// Execute the load command.
pub fn execute_load(args: LoadArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let (corpus, stats) = load_corpus(&args.source, config)?;

    println!("{}", formatter.format_stats(&stats)?);

    let unresolved = corpus.unresolved_connection_count();
    if unresolved > 0 {
        eprintln!(
            "{}",
            formatter.info(&format!("{} connections point outside the corpus", unresolved))
        );
    }

    Ok(())
}
