//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand};

/// skymeta - build ingest metadata for chunked sky-catalog datasets
#[derive(Parser, Debug)]
#[command(name = "skymeta")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the dataset manifest JSON from a chunked data tree
    Manifest(ManifestArgs),

    /// Generate a dbbench INI file from integration-test queries
    Bench(BenchArgs),
}

/// Arguments for the manifest command
#[derive(Args, Debug)]
pub struct ManifestArgs {
    /// Root of the chunked dataset tree
    #[arg(short, long)]
    pub data_dir: String,

    /// Run configuration YAML (database, table order, index directory)
    #[arg(short, long)]
    pub config: String,

    /// Override the index directory from the config
    #[arg(long)]
    pub index_dir: Option<String>,

    /// Output file
    #[arg(short, long, default_value = "/tmp/metadata.json")]
    pub out: String,
}

/// Arguments for the bench command
#[derive(Args, Debug)]
pub struct BenchArgs {
    /// Directory holding the case's .sql query files
    #[arg(short, long)]
    pub queries: String,

    /// Integration-test YAML config holding per-case skip lists
    #[arg(short, long)]
    pub config: String,

    /// Case identifier to generate for
    #[arg(long)]
    pub case: String,

    /// Directory dbbench writes query results into
    #[arg(long, default_value = "/tmp/dbbench")]
    pub results_dir: String,

    /// Output file
    #[arg(short, long, default_value = "/tmp/dbbench.ini")]
    pub out: String,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
