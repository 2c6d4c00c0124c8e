use super::*;
use crate::catalog::TableEntry;
use std::fs;

fn touch(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, b"").unwrap();
}

#[test]
fn data_walk_collects_chunks_overlaps_and_flat_files() {
    let root = tempfile::tempdir().unwrap();
    touch(&root.path().join("Object/chunks/chunk_57866.txt"));
    touch(&root.path().join("Object/chunks/chunk_57866_overlap.txt"));
    touch(&root.path().join("Object/chunks/chunk_57867.txt"));
    touch(&root.path().join("LeapSeconds/flat/leap_seconds.csv"));
    // index candidates under the data root are skipped here
    touch(&root.path().join("Object/Object.json"));

    let mut catalog = Catalog::new();
    walk_data_root(root.path(), &mut catalog).unwrap();

    assert_eq!(catalog.tables.len(), 2);

    let object = &catalog.tables["Object"].data["Object/chunks"];
    assert_eq!(object.chunk_ids, vec![57866, 57867]);
    assert_eq!(object.overlap_ids, vec![57866]);

    let leap = &catalog.tables["LeapSeconds"].data["LeapSeconds/flat"];
    assert_eq!(leap.flat_files, vec!["leap_seconds.csv".to_string()]);
}

#[test]
fn unrecognized_data_file_aborts_the_walk() {
    let root = tempfile::tempdir().unwrap();
    touch(&root.path().join("Object/chunks/chunk_1.txt"));
    touch(&root.path().join("Object/chunks/README.md"));

    let mut catalog = Catalog::new();
    let err = walk_data_root(root.path(), &mut catalog).unwrap_err();
    assert!(matches!(err, CoreError::UnrecognizedFile { path } if path.contains("README.md")));
}

#[test]
fn file_directly_under_the_root_is_rejected() {
    let root = tempfile::tempdir().unwrap();
    touch(&root.path().join("chunk_1.txt"));

    let mut catalog = Catalog::new();
    assert!(walk_data_root(root.path(), &mut catalog).is_err());
}

#[test]
fn missing_data_root_is_fatal() {
    let mut catalog = Catalog::new();
    let err = walk_data_root(Path::new("/nonexistent/dataset"), &mut catalog).unwrap_err();
    assert!(matches!(err, CoreError::DataRootNotFound { .. }));
}

#[test]
fn index_walk_attaches_files_by_table_prefix() {
    let idx = tempfile::tempdir().unwrap();
    touch(&idx.path().join("idx_Object_objectId.json"));
    touch(&idx.path().join("idx_Source_parent.json"));

    let mut catalog = Catalog::new();
    catalog.tables.insert("Object".to_string(), TableEntry::default());
    catalog.tables.insert("Source".to_string(), TableEntry::default());

    walk_index_root(idx.path(), &mut catalog).unwrap();

    assert_eq!(
        catalog.tables["Object"].index_files,
        vec!["idx_Object_objectId.json".to_string()]
    );
    assert_eq!(
        catalog.tables["Source"].index_files,
        vec!["idx_Source_parent.json".to_string()]
    );
}

#[test]
fn non_json_file_under_index_root_is_fatal() {
    let idx = tempfile::tempdir().unwrap();
    touch(&idx.path().join("notes.txt"));

    let mut catalog = Catalog::new();
    catalog.tables.insert("Object".to_string(), TableEntry::default());

    let err = walk_index_root(idx.path(), &mut catalog).unwrap_err();
    assert!(matches!(err, CoreError::UnexpectedIndexFile { path } if path.contains("notes.txt")));
}

#[test]
fn orphan_index_file_aborts_the_index_walk() {
    let idx = tempfile::tempdir().unwrap();
    touch(&idx.path().join("idx_Nowhere_id.json"));

    let mut catalog = Catalog::new();
    catalog.tables.insert("Object".to_string(), TableEntry::default());

    let err = walk_index_root(idx.path(), &mut catalog).unwrap_err();
    assert!(matches!(err, CoreError::OrphanIndexFile { file } if file == "idx_Nowhere_id.json"));
}
