//! Payload types for the remote-execution collaborator
//!
//! The ingest workflow shells a command into a cluster pod and expects a
//! JSON body on stdout. The executor itself lives outside this crate;
//! these are the request/response shapes plus the response validation the
//! caller applies before handing the body downstream.

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};

/// A command to run inside one pod
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExecRequest {
    /// Pod to exec into
    pub pod: String,

    /// Namespace holding the pod
    pub namespace: String,

    /// Shell command line
    pub command: String,
}

/// Captured output of a completed command
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExecResponse {
    /// Raw stdout, expected to be a JSON document
    pub stdout: String,

    /// Raw stderr, surfaced in diagnostics only
    pub stderr: String,
}

/// Executor seam implemented by the cluster client
pub trait RemoteExecutor {
    /// Run the command and capture its output
    fn exec(&self, request: &ExecRequest) -> CoreResult<ExecResponse>;
}

impl ExecResponse {
    /// Parse stdout as a JSON value, rejecting non-JSON bodies.
    pub fn json_body(&self, request: &ExecRequest) -> CoreResult<serde_json::Value> {
        serde_json::from_str(&self.stdout).map_err(|_| CoreError::InvalidExecResponse {
            pod: request.pod.clone(),
        })
    }
}

#[cfg(test)]
#[path = "exec_test.rs"]
mod tests;
