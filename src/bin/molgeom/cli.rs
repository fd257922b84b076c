use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "molgeom",
    about = "Molecule species, bond topology and sample geometry",
    version,
    before_help = crate::display::banner_for_help(),
    propagate_version = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the species registry and bond topology of a description
    Info(InfoArgs),

    /// Print the pairwise-distance vector of every record
    #[command(visible_alias = "d")]
    Distances(RecordArgs),

    /// Print the sorted bond lengths per bond type of every record
    #[command(visible_alias = "b")]
    Bonds(RecordArgs),

    /// Keep only records that differ structurally from those already kept
    #[command(visible_alias = "f")]
    Filter(FilterArgs),
}

/// Options accepted by every command.
#[derive(Args)]
pub struct GlobalOptions {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress output and warnings (for scripting)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Molecule description options.
#[derive(Args)]
pub struct DescriptionOptions {
    /// Molecule description file
    #[arg(short, long = "description", value_name = "FILE")]
    pub description: PathBuf,

    /// Description format (inferred from the extension if omitted)
    #[arg(long = "desc-format", value_name = "FORMAT")]
    pub format: Option<DescriptionFormat>,
}

#[derive(Args)]
pub struct InfoArgs {
    #[command(flatten)]
    pub desc: DescriptionOptions,
}

/// Options shared by the record-processing commands.
#[derive(Args)]
pub struct RecordArgs {
    #[command(flatten)]
    pub desc: DescriptionOptions,

    /// Record file (stdin if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output file (stdout if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct FilterArgs {
    #[command(flatten)]
    pub records: RecordArgs,

    /// Minimum distance to every kept record for a record to be kept
    #[arg(short, long, value_name = "T")]
    pub threshold: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum DescriptionFormat {
    /// `key = value` lines
    #[value(name = "kv", alias = "text")]
    KeyValue,
    /// TOML table
    Toml,
}

pub fn parse() -> Cli {
    Cli::parse()
}
