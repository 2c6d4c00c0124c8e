//! sky-core - Core library for skymeta
//!
//! This crate turns a chunked sky-catalog dataset tree into the JSON
//! manifest the ingest loader consumes: filename classification, catalog
//! aggregation over two filesystem walks (data files, then index files),
//! and conversion into a validated, deterministically ordered manifest.

pub mod catalog;
pub mod classify;
pub mod config;
pub mod error;
pub mod exec;
pub mod manifest;
pub mod walk;

pub use catalog::{Catalog, DataRecord, TableEntry};
pub use classify::{classify, FileKind};
pub use config::Config;
pub use error::{CoreError, CoreResult};
pub use exec::{ExecRequest, ExecResponse, RemoteExecutor};
pub use manifest::{build, DataFiles, Manifest, TableManifest};
pub use walk::{walk_data_root, walk_index_root};
