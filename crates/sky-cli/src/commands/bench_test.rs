use super::*;
use std::fs;

#[test]
fn execute_generates_the_ini_file() {
    let dir = tempfile::tempdir().unwrap();
    let queries = dir.path().join("queries");
    fs::create_dir_all(&queries).unwrap();
    fs::write(queries.join("0001_all.sql"), "SELECT 1;\n").unwrap();
    fs::write(queries.join("0002_count.sql"), "SELECT 2;\n").unwrap();

    let skip_list = dir.path().join("integration_tests.yaml");
    fs::write(
        &skip_list,
        "cases:\n  - id: case01\n    skip_numbers: [\"0002\"]\n",
    )
    .unwrap();

    let out = dir.path().join("dbbench.ini");
    let args = BenchArgs {
        queries: queries.display().to_string(),
        config: skip_list.display().to_string(),
        case: "case01".to_string(),
        results_dir: "/tmp/dbbench".to_string(),
        out: out.display().to_string(),
    };

    execute(&args, &GlobalArgs { verbose: false }).unwrap();

    let text = fs::read_to_string(&out).unwrap();
    assert!(text.starts_with("[0]\n; 0001_all.sql\nquery=SELECT 1\n"));
    assert!(!text.contains("0002_count.sql"));
}

#[test]
fn execute_fails_on_a_missing_queries_dir() {
    let dir = tempfile::tempdir().unwrap();
    let skip_list = dir.path().join("skip.yaml");
    fs::write(&skip_list, "cases: []\n").unwrap();

    let args = BenchArgs {
        queries: dir.path().join("no-queries").display().to_string(),
        config: skip_list.display().to_string(),
        case: "case01".to_string(),
        results_dir: "/tmp/dbbench".to_string(),
        out: dir.path().join("dbbench.ini").display().to_string(),
    };

    assert!(execute(&args, &GlobalArgs { verbose: false }).is_err());
}
