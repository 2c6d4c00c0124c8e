//! Manifest command implementation

use anyhow::{Context, Result};
use sky_core::{build, Config};
use std::path::{Path, PathBuf};

use crate::cli::{GlobalArgs, ManifestArgs};

/// Execute the manifest command
pub fn execute(args: &ManifestArgs, _global: &GlobalArgs) -> Result<()> {
    let mut config =
        Config::load(Path::new(&args.config)).context("Failed to load run configuration")?;
    if let Some(index_dir) = &args.index_dir {
        config.index_dir = PathBuf::from(index_dir);
    }

    let data_dir = Path::new(&args.data_dir);
    log::debug!("Scanning {}", data_dir.display());
    log::debug!("Index directory {}", config.index_dir.display());

    let manifest = build(data_dir, &config).context("Failed to build manifest")?;

    let out = Path::new(&args.out);
    manifest.save(out).context("Failed to write manifest")?;

    println!(
        "Wrote manifest for database '{}' ({} tables) to {}",
        manifest.database,
        manifest.tables.len(),
        out.display()
    );
    Ok(())
}

#[cfg(test)]
#[path = "manifest_test.rs"]
mod tests;
