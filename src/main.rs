//! tola-nav - resolve, validate and query navigation trees.

mod cli;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use tola_nav::{NavConfig, logger};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.is_verbose());

    let config = NavConfig::load(&cli.config)?;

    match &cli.command {
        Commands::Check { args } => cli::check::run_check(args, &config),
        Commands::Routes { args } => cli::routes::run_routes(args, &config),
        Commands::Query { args } => cli::query::run_query(args, &config),
        Commands::Watch { args } => cli::watch::run_watch(args, &config),
    }
}
