//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Navigation tree resolver CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: nav.toml)
    #[arg(short = 'C', long, default_value = "nav.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Run the pipeline and report every violation
    #[command(visible_alias = "c")]
    Check {
        #[command(flatten)]
        args: CheckArgs,
    },

    /// Print the routing table
    #[command(visible_alias = "r")]
    Routes {
        #[command(flatten)]
        args: RoutesArgs,
    },

    /// Look up one node and its neighbourhood
    #[command(visible_alias = "q")]
    Query {
        #[command(flatten)]
        args: QueryArgs,
    },

    /// Rebuild and swap the snapshot on every change to the tree file
    #[command(visible_alias = "w")]
    Watch {
        #[command(flatten)]
        args: WatchArgs,
    },
}

/// Check command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct CheckArgs {
    /// Navigation tree file (JSON)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub tree: PathBuf,

    /// Treat violations as warnings instead of errors
    #[arg(long, short = 'w')]
    pub warn_only: bool,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

/// Routes command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct RoutesArgs {
    /// Navigation tree file (JSON)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub tree: PathBuf,

    /// Output JSON instead of a table
    #[arg(short, long)]
    pub json: bool,

    /// Pretty-print JSON output
    #[arg(short, long, requires = "json")]
    pub pretty: bool,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

/// Query command arguments.
#[derive(clap::Args, Debug, Clone)]
#[command(group = clap::ArgGroup::new("target").required(true).args(["path", "content_id"]))]
pub struct QueryArgs {
    /// Navigation tree file (JSON)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub tree: PathBuf,

    /// Route path to look up (e.g. `/topic-a/sub-1`)
    #[arg(long)]
    pub path: Option<String>,

    /// Content id to look up
    #[arg(long = "content-id", short = 'i')]
    pub content_id: Option<u64>,

    /// Print the breadcrumb trail
    #[arg(short, long)]
    pub breadcrumbs: bool,

    /// Print routable children
    #[arg(short, long)]
    pub children: bool,

    /// Print routable siblings
    #[arg(short, long)]
    pub siblings: bool,

    /// Output JSON
    #[arg(short, long)]
    pub json: bool,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

/// Watch command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct WatchArgs {
    /// Navigation tree file (JSON)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub tree: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

impl Cli {
    /// Whether the selected subcommand asked for verbose output.
    pub const fn is_verbose(&self) -> bool {
        match &self.command {
            Commands::Check { args } => args.verbose,
            Commands::Routes { args } => args.verbose,
            Commands::Query { args } => args.verbose,
            Commands::Watch { args } => args.verbose,
        }
    }
}
