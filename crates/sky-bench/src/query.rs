//! Query-file selection and SQL flattening

use crate::error::{BenchError, BenchResult};
use std::path::{Path, PathBuf};

/// Collect the `.sql` files under `dir`, sorted by name, dropping any whose
/// filename starts with a skipped query id.
pub fn query_files(dir: &Path, skipped: &[String]) -> BenchResult<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(BenchError::QueriesDirNotFound {
            path: dir.display().to_string(),
        });
    }

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(|e| BenchError::IoWithPath {
        path: dir.display().to_string(),
        source: e,
    })? {
        let entry = entry.map_err(|e| BenchError::IoWithPath {
            path: dir.display().to_string(),
            source: e,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !name.ends_with(".sql") {
            continue;
        }
        if skipped.iter().any(|id| name.starts_with(id.as_str())) {
            log::debug!("Skipping query {name}");
            continue;
        }
        files.push(path);
    }

    files.sort();
    Ok(files)
}

/// Flatten the text of one `.sql` file to a single line.
///
/// Per line: drop `--` comments and anything after the first `;`, trim,
/// collapse internal whitespace runs, then join the surviving lines with
/// single spaces.
pub fn flatten_sql(content: &str) -> String {
    let mut sql = String::new();
    for line in content.lines() {
        let line = line.split("--").next().unwrap_or("");
        let line = line.split(';').next().unwrap_or("");
        for word in line.split_whitespace() {
            if !sql.is_empty() {
                sql.push(' ');
            }
            sql.push_str(word);
        }
    }
    sql
}

#[cfg(test)]
#[path = "query_test.rs"]
mod tests;
