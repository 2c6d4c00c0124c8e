//! Error types for sky-bench

use thiserror::Error;

/// Benchmark-generation error type
#[derive(Error, Debug)]
pub enum BenchError {
    /// B001: Queries directory not found
    #[error("[B001] Queries directory not found: {path}")]
    QueriesDirNotFound { path: String },

    /// B002: Failed to parse the skip-list YAML
    #[error("[B002] Failed to parse skip-list {path}: {source}")]
    SkipListParse {
        path: String,
        source: serde_yaml::Error,
    },

    /// B003: IO error with file path context
    #[error("[B003] Failed to read '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },
}

/// Result type alias for BenchError
pub type BenchResult<T> = Result<T, BenchError>;
