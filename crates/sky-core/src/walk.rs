//! Filesystem walks over the data root and the index root
//!
//! Both walks are synchronous and run strictly in sequence: the data walk
//! fully completes before the index walk starts. Directory entries are
//! sorted by name before recursion so a rebuild of an unchanged tree
//! produces identical output. Any fatal condition aborts the walk with the
//! offending path; no partial state is ever written out.

use crate::catalog::Catalog;
use crate::classify::{classify, FileKind};
use crate::error::{CoreError, CoreResult};
use std::path::{Path, PathBuf};

/// Walk the data root, feeding every classifiable file into the catalog.
///
/// The first relative path segment under `root` names the table; the full
/// relative parent path is the directory key. `.json` files are ignored
/// here (index association is a separate pass); an unrecognized file
/// aborts the walk.
pub fn walk_data_root(root: &Path, catalog: &mut Catalog) -> CoreResult<()> {
    if !root.is_dir() {
        return Err(CoreError::DataRootNotFound {
            path: root.display().to_string(),
        });
    }
    walk_data_dir(root, root, catalog)
}

fn walk_data_dir(root: &Path, dir: &Path, catalog: &mut Catalog) -> CoreResult<()> {
    for path in sorted_entries(dir)? {
        if path.is_dir() {
            walk_data_dir(root, &path, catalog)?;
        } else {
            visit_data_file(root, &path, catalog)?;
        }
    }
    Ok(())
}

fn visit_data_file(root: &Path, path: &Path, catalog: &mut Catalog) -> CoreResult<()> {
    let (table, directory, filename) = split_relative(root, path)?;
    let (kind, chunk_id) = classify(&filename)?;

    match kind {
        FileKind::Chunk | FileKind::Overlap | FileKind::Tabular => {
            catalog.append(&table, &directory, &filename, kind, chunk_id);
            Ok(())
        }
        FileKind::Index => {
            log::debug!("Skipping index candidate under data root: {}", path.display());
            Ok(())
        }
        FileKind::Unknown => Err(CoreError::UnrecognizedFile {
            path: path.display().to_string(),
        }),
    }
}

/// Walk the index root and associate every index file with its table.
///
/// Only `.json` files are legal under this root; anything else is fatal.
/// The layout is expected flat but nested directories are walked the same
/// way.
pub fn walk_index_root(root: &Path, catalog: &mut Catalog) -> CoreResult<()> {
    if !root.is_dir() {
        return Err(CoreError::IndexRootNotFound {
            path: root.display().to_string(),
        });
    }
    walk_index_dir(root, catalog)
}

fn walk_index_dir(dir: &Path, catalog: &mut Catalog) -> CoreResult<()> {
    for path in sorted_entries(dir)? {
        if path.is_dir() {
            walk_index_dir(&path, catalog)?;
            continue;
        }

        let Some(filename) = path.file_name().and_then(|n| n.to_str()) else {
            return Err(CoreError::UnexpectedIndexFile {
                path: path.display().to_string(),
            });
        };

        let (kind, _) = classify(filename)?;
        if kind != FileKind::Index {
            return Err(CoreError::UnexpectedIndexFile {
                path: path.display().to_string(),
            });
        }

        catalog.associate_index(filename)?;
    }
    Ok(())
}

/// Read one directory and return its entry paths sorted by name.
fn sorted_entries(dir: &Path) -> CoreResult<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(|e| CoreError::IoWithPath {
        path: dir.display().to_string(),
        source: e,
    })? {
        let entry = entry.map_err(|e| CoreError::IoWithPath {
            path: dir.display().to_string(),
            source: e,
        })?;
        paths.push(entry.path());
    }
    paths.sort();
    Ok(paths)
}

/// Split a file path into `(table, directory, filename)` relative to `root`.
///
/// `directory` is the relative parent path with `/` separators; `table` is
/// its first segment. Files sitting directly under the root belong to no
/// table and are rejected, as is any non-UTF-8 component.
fn split_relative(root: &Path, path: &Path) -> CoreResult<(String, String, String)> {
    let unrecognized = || CoreError::UnrecognizedFile {
        path: path.display().to_string(),
    };

    let rel = path.strip_prefix(root).map_err(|_| unrecognized())?;

    let filename = rel
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(unrecognized)?
        .to_string();

    let mut segments = Vec::new();
    for part in rel.parent().unwrap_or_else(|| Path::new("")).iter() {
        segments.push(part.to_str().ok_or_else(unrecognized)?);
    }

    match segments.first() {
        Some(table) => Ok((table.to_string(), segments.join("/"), filename)),
        None => Err(unrecognized()),
    }
}

#[cfg(test)]
#[path = "walk_test.rs"]
mod tests;
