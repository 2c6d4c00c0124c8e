//! In-memory catalog accumulated by the dataset and index walks
//!
//! The catalog is the intermediate state between the filesystem walks and
//! the manifest: one [`TableEntry`] per top-level directory under the data
//! root, one [`DataRecord`] per distinct sub-directory within a table.
//! Entries and records are created lazily on the first file seen and only
//! ever appended to within a run.

use crate::classify::FileKind;
use crate::error::{CoreError, CoreResult};
use std::collections::BTreeMap;

/// Per-directory accumulation of data files
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataRecord {
    /// Chunk ids parsed from `chunk_<id>.txt` files, in discovery order
    pub chunk_ids: Vec<u32>,

    /// Chunk ids parsed from `chunk_<id>_overlap.txt` files, in discovery order
    pub overlap_ids: Vec<u32>,

    /// Flat `.csv`/`.tsv` filenames, in discovery order
    pub flat_files: Vec<String>,
}

/// Per-table accumulation: index files plus data records keyed by directory
#[derive(Debug, Clone, Default)]
pub struct TableEntry {
    /// Index configuration filenames associated during the index walk
    pub index_files: Vec<String>,

    /// Data records keyed by directory, sorted by key
    pub data: BTreeMap<String, DataRecord>,
}

/// Aggregated state for one run, keyed by table name
///
/// `BTreeMap` keeps table and directory iteration in sorted-name order, so
/// re-running a build against an unchanged tree emits identical output.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Discovered tables, sorted by name
    pub tables: BTreeMap<String, TableEntry>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one classified data file.
    ///
    /// Lazily creates the table entry and the directory record. Repeated
    /// chunk ids accumulate verbatim; no dedup is performed.
    pub fn append(
        &mut self,
        table: &str,
        directory: &str,
        filename: &str,
        kind: FileKind,
        chunk_id: Option<u32>,
    ) {
        let record = self
            .tables
            .entry(table.to_string())
            .or_default()
            .data
            .entry(directory.to_string())
            .or_default();

        match kind {
            FileKind::Chunk => record.chunk_ids.extend(chunk_id),
            FileKind::Overlap => record.overlap_ids.extend(chunk_id),
            FileKind::Tabular => record.flat_files.push(filename.to_string()),
            // index association happens in the index walk; unknown files
            // never reach the catalog
            FileKind::Index | FileKind::Unknown => {}
        }
    }

    /// Associate one index file with the table whose name it embeds.
    ///
    /// The filename must start with `idx_<table>` for some known table and
    /// end with `.json`; the first matching table (in sorted-name order)
    /// receives the file. A file matching no table is a
    /// [`CoreError::OrphanIndexFile`].
    pub fn associate_index(&mut self, filename: &str) -> CoreResult<()> {
        if filename.ends_with(".json") {
            for (table, entry) in &mut self.tables {
                if filename.starts_with(&format!("idx_{table}")) {
                    entry.index_files.push(filename.to_string());
                    return Ok(());
                }
            }
        }
        Err(CoreError::OrphanIndexFile {
            file: filename.to_string(),
        })
    }
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
