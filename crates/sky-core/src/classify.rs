//! Filename classification for dataset and index files
//!
//! Maps a bare filename (no directory component) to the category the
//! walkers act on. The walkers decide what each category means at their
//! root; classification itself never touches the filesystem.

use crate::error::{CoreError, CoreResult};
use std::path::Path;

/// Category assigned to a single file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// `chunk_<id>.txt` partition data
    Chunk,
    /// `chunk_<id>_overlap.txt` partition overlap data
    Overlap,
    /// Flat `.csv`/`.tsv` table data
    Tabular,
    /// `.json` index configuration candidate
    Index,
    /// Anything else
    Unknown,
}

/// Classify a bare filename, returning its kind and, for chunk and overlap
/// files, the parsed chunk id.
///
/// Rules are evaluated in order, first match wins:
/// 1. `chunk_<digits>_overlap.txt` → [`FileKind::Overlap`]
/// 2. `chunk_<digits>.txt` → [`FileKind::Chunk`]
/// 3. `.csv` / `.tsv` extension → [`FileKind::Tabular`]
/// 4. `.json` extension → [`FileKind::Index`]
/// 5. everything else → [`FileKind::Unknown`]
///
/// A filename matching a chunk pattern whose digits do not parse is a
/// [`CoreError::MalformedChunkId`], not `Unknown`.
pub fn classify(filename: &str) -> CoreResult<(FileKind, Option<u32>)> {
    if let Some(stem) = filename.strip_prefix("chunk_") {
        if let Some(digits) = stem.strip_suffix("_overlap.txt") {
            return Ok((FileKind::Overlap, Some(parse_chunk_id(filename, digits)?)));
        }
        if let Some(digits) = stem.strip_suffix(".txt") {
            return Ok((FileKind::Chunk, Some(parse_chunk_id(filename, digits)?)));
        }
    }

    let ext = Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("");

    let kind = match ext {
        "csv" | "tsv" => FileKind::Tabular,
        "json" => FileKind::Index,
        _ => FileKind::Unknown,
    };

    Ok((kind, None))
}

fn parse_chunk_id(filename: &str, digits: &str) -> CoreResult<u32> {
    digits
        .parse()
        .map_err(|e: std::num::ParseIntError| CoreError::MalformedChunkId {
            file: filename.to_string(),
            message: e.to_string(),
        })
}

#[cfg(test)]
#[path = "classify_test.rs"]
mod tests;
