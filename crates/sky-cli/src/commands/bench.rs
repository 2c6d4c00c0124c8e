//! Bench command implementation

use anyhow::{Context, Result};
use sky_bench::BenchConfig;
use std::path::{Path, PathBuf};

use crate::cli::{BenchArgs, GlobalArgs};

/// Execute the bench command
pub fn execute(args: &BenchArgs, _global: &GlobalArgs) -> Result<()> {
    let config = BenchConfig {
        queries_dir: PathBuf::from(&args.queries),
        skip_list: PathBuf::from(&args.config),
        case_id: args.case.clone(),
        results_dir: PathBuf::from(&args.results_dir),
    };

    log::debug!(
        "Generating benchmark config for {} from {}",
        args.case,
        args.queries
    );

    let out = Path::new(&args.out);
    let count = sky_bench::generate(&config, out).context("Failed to generate benchmark config")?;

    println!("Wrote {} queries for {} to {}", count, args.case, out.display());
    Ok(())
}

#[cfg(test)]
#[path = "bench_test.rs"]
mod tests;
