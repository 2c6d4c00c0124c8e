//! Error types for sky-core

use thiserror::Error;

/// Core error type for skymeta
#[derive(Error, Debug)]
pub enum CoreError {
    /// M001: Configuration file not found
    #[error("[M001] Config file not found: {path}")]
    ConfigNotFound { path: String },

    /// M002: Failed to parse configuration file
    #[error("[M002] Failed to parse config: {message}")]
    ConfigParseError { message: String },

    /// M003: Data root directory not found
    #[error("[M003] Data directory not found: {path}")]
    DataRootNotFound { path: String },

    /// M004: Index root directory not found
    #[error("[M004] Index directory not found: {path}")]
    IndexRootNotFound { path: String },

    /// M005: Unrecognized file under the data root
    #[error("[M005] Unrecognized file under data root: {path}")]
    UnrecognizedFile { path: String },

    /// M006: Chunk filename whose id digits do not parse
    #[error("[M006] Malformed chunk id in '{file}': {message}")]
    MalformedChunkId { file: String, message: String },

    /// M007: Non-index file under the index root
    #[error("[M007] Unexpected file under index root (expected .json): {path}")]
    UnexpectedIndexFile { path: String },

    /// M008: Index file matching no known table
    #[error("[M008] Index file '{file}' matches no known table")]
    OrphanIndexFile { file: String },

    /// M009: Configured table set differs from discovered table set
    #[error("[M009] Configured tables {configured:?} do not match discovered tables {discovered:?}")]
    TableSetMismatch {
        configured: Vec<String>,
        discovered: Vec<String>,
    },

    /// M010: Table holding both chunked and flat data
    #[error("[M010] Table '{table}' holds both chunked and flat data")]
    MixedTableShape { table: String },

    /// M011: Remote command returned a non-JSON body
    #[error("[M011] Remote command on pod '{pod}' returned a non-JSON body")]
    InvalidExecResponse { pod: String },

    /// M012: IO error with file path context
    #[error("[M012] Failed to read '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
