//! sky-bench - benchmark-config generation from integration-test queries
//!
//! Reads a directory of `.sql` query files plus the integration-test YAML
//! skip-list and renders the INI-like file the dbbench runner consumes:
//! one numbered section per query with the SQL flattened to a single line.

pub mod error;
mod query;
mod skiplist;

pub use error::{BenchError, BenchResult};
pub use query::{flatten_sql, query_files};
pub use skiplist::skipped_queries;

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

/// Options for one generation run
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Directory holding the case's `.sql` query files
    pub queries_dir: PathBuf,

    /// Integration-test YAML config holding per-case skip lists
    pub skip_list: PathBuf,

    /// Case identifier to look up in the skip list
    pub case_id: String,

    /// Directory dbbench writes per-query result CSVs into
    pub results_dir: PathBuf,
}

/// Generate the dbbench INI file at `out`.
///
/// Returns the number of queries written. An existing output file is
/// overwritten.
pub fn generate(config: &BenchConfig, out: &Path) -> BenchResult<usize> {
    let skipped = skipped_queries(&config.skip_list, &config.case_id)?;
    let files = query_files(&config.queries_dir, &skipped)?;
    let text = render(config, &files)?;

    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent).map_err(|e| BenchError::IoWithPath {
            path: parent.display().to_string(),
            source: e,
        })?;
    }
    std::fs::write(out, text).map_err(|e| BenchError::IoWithPath {
        path: out.display().to_string(),
        source: e,
    })?;

    Ok(files.len())
}

/// Render the INI sections for the selected query files.
fn render(config: &BenchConfig, files: &[PathBuf]) -> BenchResult<String> {
    let mut out = String::new();
    for (i, path) in files.iter().enumerate() {
        let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
        let content = std::fs::read_to_string(path).map_err(|e| BenchError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        let sql = flatten_sql(&content);

        // the writes below cannot fail on a String
        let _ = writeln!(out, "[{i}]");
        let _ = writeln!(out, "; {name}");
        let _ = writeln!(out, "query={sql}");
        let _ = writeln!(
            out,
            "query-results-file={}/{i}.csv",
            config.results_dir.display()
        );
        let _ = writeln!(out, "count=1");
        out.push('\n');
    }
    Ok(out)
}

#[cfg(test)]
#[path = "generate_test.rs"]
mod tests;
