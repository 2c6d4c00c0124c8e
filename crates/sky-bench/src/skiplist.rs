//! Skip-list extraction from the integration-test YAML config
//!
//! The config nests test-case entries at arbitrary depth; a case is any
//! mapping whose `id` scalar equals the requested case id, and its
//! `skip_numbers` sequence lists the query-file prefixes to leave out of
//! the benchmark.

use crate::error::{BenchError, BenchResult};
use serde_yaml::Value;
use std::path::Path;

/// Read the skip-list for one case from a YAML config file.
///
/// A case id that appears nowhere yields an empty list, not an error.
pub fn skipped_queries(path: &Path, case_id: &str) -> BenchResult<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|e| BenchError::IoWithPath {
        path: path.display().to_string(),
        source: e,
    })?;

    let doc: Value = serde_yaml::from_str(&content).map_err(|e| BenchError::SkipListParse {
        path: path.display().to_string(),
        source: e,
    })?;

    let mut ids = Vec::new();
    collect_skip_numbers(&doc, case_id, &mut ids);
    log::debug!("Case {case_id}: {} skipped queries", ids.len());
    Ok(ids)
}

fn collect_skip_numbers(node: &Value, case_id: &str, ids: &mut Vec<String>) {
    match node {
        Value::Sequence(items) => {
            for item in items {
                collect_skip_numbers(item, case_id, ids);
            }
        }
        Value::Mapping(map) => {
            let matches = map
                .get("id")
                .is_some_and(|id| scalar_to_string(id).as_deref() == Some(case_id));

            if matches {
                if let Some(Value::Sequence(numbers)) = map.get("skip_numbers") {
                    ids.extend(numbers.iter().filter_map(scalar_to_string));
                }
            } else {
                for (_, value) in map {
                    collect_skip_numbers(value, case_id, ids);
                }
            }
        }
        _ => {}
    }
}

/// Render a YAML scalar as a string; non-scalars yield `None`.
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
#[path = "skiplist_test.rs"]
mod tests;
