//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Atlas CLI - Normalize Pleiades places and reconcile ToposText identifiers.
#[derive(Debug, Parser)]
#[command(name = "atlas")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "ATLAS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (ids and counts only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Load the Pleiades dump and report corpus statistics
    Load(LoadArgs),

    /// Show one place
    Show(ShowArgs),

    /// Run data-quality checks over the corpus
    Validate(ValidateArgs),

    /// Rewrite ToposText ids in a reference table as Pleiades ids
    Reconcile(ReconcileArgs),

    /// Manage the configuration file
    Config(ConfigArgs),
}

/// Options shared by commands that read the Pleiades dump.
#[derive(Debug, Clone, clap::Args)]
pub struct SourceArgs {
    /// Pleiades JSON-LD file
    #[arg(short, long)]
    pub pleiades: Option<PathBuf>,

    /// Abort on malformed records or places without ids
    #[arg(long)]
    pub strict: bool,

    /// Read at most this many places
    #[arg(long)]
    pub max_places: Option<usize>,
}

/// Arguments for the load command.
#[derive(Debug, Parser)]
pub struct LoadArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

/// Arguments for the show command.
#[derive(Debug, Parser)]
pub struct ShowArgs {
    /// Place id
    pub id: String,

    /// List connections whose target is in the corpus
    #[arg(long)]
    pub connections: bool,

    #[command(flatten)]
    pub source: SourceArgs,
}

/// Arguments for the validate command.
#[derive(Debug, Parser)]
pub struct ValidateArgs {
    /// Rule preset
    #[arg(long, value_enum, default_value = "default")]
    pub rules: RulesArg,

    #[command(flatten)]
    pub source: SourceArgs,
}

/// Arguments for the reconcile command.
#[derive(Debug, Parser)]
pub struct ReconcileArgs {
    /// ToposText gazetteer file
    #[arg(short, long)]
    pub gazetteer: Option<PathBuf>,

    /// Reference table (CSV: title, then ids)
    #[arg(short, long)]
    pub refs: Option<PathBuf>,

    /// Write the reconciled table here
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Key the result by place id instead of document title
    #[arg(long)]
    pub invert: bool,

    /// Crosswalk direction
    #[arg(long, value_enum, default_value = "topos-to-pleiades")]
    pub direction: DirectionArg,
}

/// Arguments for config management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Config management actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Validation rule preset.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum RulesArg {
    /// Standard checks
    Default,
    /// Structural checks only
    Permissive,
    /// Every check, higher threshold
    Strict,
}

/// Crosswalk direction argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum DirectionArg {
    /// ToposText id to Pleiades id
    ToposToPleiades,
    /// Pleiades id to ToposText id
    PleiadesToTopos,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<RulesArg> for atlas_validator::ValidationConfig {
    fn from(rules: RulesArg) -> Self {
        match rules {
            RulesArg::Default => atlas_validator::ValidationConfig::default(),
            RulesArg::Permissive => atlas_validator::ValidationConfig::permissive(),
            RulesArg::Strict => atlas_validator::ValidationConfig::strict(),
        }
    }
}

impl From<DirectionArg> for atlas_crosswalk::Direction {
    fn from(direction: DirectionArg) -> Self {
        match direction {
            DirectionArg::ToposToPleiades => atlas_crosswalk::Direction::ToposToPleiades,
            DirectionArg::PleiadesToTopos => atlas_crosswalk::Direction::PleiadesToTopos,
        }
    }
}
