use super::*;
use std::fs;

#[test]
fn flatten_drops_comments_and_collapses_whitespace() {
    let sql = "-- header comment\nSELECT o.objectId,   o.ra\nFROM   Object o -- trailing\nWHERE o.ra > 9.5 ;\n";
    assert_eq!(
        flatten_sql(sql),
        "SELECT o.objectId, o.ra FROM Object o WHERE o.ra > 9.5"
    );
}

#[test]
fn flatten_stops_at_the_first_semicolon_per_line() {
    assert_eq!(flatten_sql("SELECT 1; SELECT 2;"), "SELECT 1");
    assert_eq!(flatten_sql("SELECT 1\n; SELECT 2"), "SELECT 1");
}

#[test]
fn flatten_of_comment_only_text_is_empty() {
    assert_eq!(flatten_sql("-- nothing here\n   \n"), "");
}

#[test]
fn query_files_are_sorted_and_filtered() {
    let dir = tempfile::tempdir().unwrap();
    for name in ["0013_select.sql", "0002_count.sql", "0001_all.sql", "notes.txt"] {
        fs::write(dir.path().join(name), "SELECT 1").unwrap();
    }

    let skipped = vec!["0002".to_string()];
    let files = query_files(dir.path(), &skipped).unwrap();

    let names: Vec<String> = files
        .iter()
        .filter_map(|p| p.file_name().and_then(|n| n.to_str()).map(String::from))
        .collect();
    assert_eq!(names, vec!["0001_all.sql", "0013_select.sql"]);
}

#[test]
fn missing_queries_dir_is_fatal() {
    let err = query_files(std::path::Path::new("/nonexistent/queries"), &[]).unwrap_err();
    assert!(matches!(err, BenchError::QueriesDirNotFound { .. }));
}
