//! Manifest types and conversion from the aggregated catalog
//!
//! The manifest is built once, after both walks complete, and is immutable
//! thereafter. Conversion enforces the two table-level invariants: the
//! configured table set must equal the discovered set, and a table may hold
//! chunked data or flat data but never both.

use crate::catalog::{Catalog, DataRecord, TableEntry};
use crate::config::Config;
use crate::error::{CoreError, CoreResult};
use crate::walk::{walk_data_root, walk_index_root};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

/// The manifest document consumed by the ingest loader
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    /// Target database name
    pub database: String,

    /// Tables in emission order
    pub tables: Vec<TableManifest>,
}

/// One table in the manifest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableManifest {
    /// Schema file name, `<table>.json`
    pub schema: String,

    /// Index configuration files associated during the index walk
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub indexes: Vec<String>,

    /// Per-directory data records, in sorted-directory order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub data: Vec<DataFiles>,
}

/// Data files found in one directory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DataFiles {
    /// Directory path relative to the data root
    pub directory: String,

    /// Chunk ids
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub chunks: Vec<u32>,

    /// Overlap chunk ids; empty when identical to `chunks`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub overlaps: Vec<u32>,

    /// Flat data filenames
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<String>,
}

/// Run the full build: data walk, index walk, conversion.
///
/// The walks run strictly in sequence; any failure aborts with no output
/// written.
pub fn build(data_root: &Path, config: &Config) -> CoreResult<Manifest> {
    let mut catalog = Catalog::new();
    walk_data_root(data_root, &mut catalog)?;
    walk_index_root(&config.index_dir, &mut catalog)?;
    catalog.into_manifest(config)
}

impl Catalog {
    /// Convert the aggregated catalog into an ordered manifest.
    ///
    /// Tables are emitted in the configured order when one is set (after
    /// checking set equality with the discovered tables), otherwise in
    /// sorted-name order.
    pub fn into_manifest(mut self, config: &Config) -> CoreResult<Manifest> {
        let order = table_order(&self, config)?;

        let mut tables = Vec::with_capacity(order.len());
        for name in order {
            if let Some(entry) = self.tables.remove(&name) {
                tables.push(convert_table(&name, entry)?);
            }
        }

        Ok(Manifest {
            database: config.database.clone(),
            tables,
        })
    }
}

/// Resolve the table emission order, validating the configured set.
fn table_order(catalog: &Catalog, config: &Config) -> CoreResult<Vec<String>> {
    if config.ordered_tables.is_empty() {
        return Ok(catalog.tables.keys().cloned().collect());
    }

    let configured: BTreeSet<&str> = config.ordered_tables.iter().map(String::as_str).collect();
    let discovered: BTreeSet<&str> = catalog.tables.keys().map(String::as_str).collect();

    if configured != discovered {
        return Err(CoreError::TableSetMismatch {
            configured: config.ordered_tables.clone(),
            discovered: catalog.tables.keys().cloned().collect(),
        });
    }

    Ok(config.ordered_tables.clone())
}

/// Convert one table entry, enforcing partition-mode exclusivity.
///
/// A table is partitioned if any directory record holds chunk or overlap
/// ids, regular if any holds flat files. Both is fatal; neither is a
/// warning and the table is emitted with empty data.
fn convert_table(name: &str, entry: TableEntry) -> CoreResult<TableManifest> {
    let mut partitioned = false;
    let mut regular = false;

    let mut data = Vec::with_capacity(entry.data.len());
    for (directory, record) in entry.data {
        partitioned |= !record.chunk_ids.is_empty() || !record.overlap_ids.is_empty();
        regular |= !record.flat_files.is_empty();
        data.push(to_data_files(directory, record));
    }

    if partitioned && regular {
        return Err(CoreError::MixedTableShape {
            table: name.to_string(),
        });
    }
    if !partitioned && !regular {
        log::warn!("Table '{name}' holds no chunked or flat data; emitting it empty");
    }

    Ok(TableManifest {
        schema: format!("{name}.json"),
        indexes: entry.index_files,
        data,
    })
}

fn to_data_files(directory: String, record: DataRecord) -> DataFiles {
    let DataRecord {
        chunk_ids,
        overlap_ids,
        flat_files,
    } = record;

    // an overlap list identical to the chunk list carries no information
    let overlaps = if overlap_ids == chunk_ids {
        Vec::new()
    } else {
        overlap_ids
    };

    DataFiles {
        directory,
        chunks: chunk_ids,
        overlaps,
        files: flat_files,
    }
}

impl Manifest {
    /// Save the manifest to a file atomically
    ///
    /// Uses write-to-temp-then-rename so a failed run never leaves a
    /// truncated manifest behind. The temp file includes the process ID to
    /// avoid races between concurrent builds of different datasets.
    pub fn save(&self, path: &Path) -> CoreResult<()> {
        let json = serde_json::to_string_pretty(self)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| CoreError::IoWithPath {
                path: parent.display().to_string(),
                source: e,
            })?;
        }

        let temp_path = path.with_extension(format!("json.{}.tmp", std::process::id()));
        std::fs::write(&temp_path, &json).map_err(|e| CoreError::IoWithPath {
            path: temp_path.display().to_string(),
            source: e,
        })?;
        std::fs::rename(&temp_path, path).map_err(|e| {
            let _ = std::fs::remove_file(&temp_path);
            CoreError::IoWithPath {
                path: path.display().to_string(),
                source: e,
            }
        })?;
        Ok(())
    }

    /// Load a manifest from a file
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
                path: path.display().to_string(),
                source: e,
            })?;
        Ok(serde_json::from_str(&content)?)
    }
}

#[cfg(test)]
#[path = "manifest_test.rs"]
mod tests;
