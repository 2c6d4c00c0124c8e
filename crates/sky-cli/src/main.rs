//! skymeta CLI - ingest-metadata tooling for chunked sky-catalog datasets

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::Cli;
use commands::{bench, manifest};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.global.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match &cli.command {
        cli::Commands::Manifest(args) => manifest::execute(args, &cli.global),
        cli::Commands::Bench(args) => bench::execute(args, &cli.global),
    }
}
