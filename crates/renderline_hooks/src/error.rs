//! Error types for the render hooks.
//!
//! None of these are recoverable locally: each hook either completes fully or
//! surfaces the failure to the DCC's hook-invocation mechanism, which aborts
//! the job. Retries belong to the orchestrator re-invoking the whole job.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Hook error type
#[derive(Error, Debug)]
pub enum HookError {
    /// The session exposes no active scene to inspect.
    #[error("Scene state unavailable: {0}")]
    SceneStateUnavailable(String),

    /// No writer node of the designated type exists in the node graph.
    #[error("Output node not found: no '{node_type}' node in the scene")]
    OutputNodeNotFound { node_type: String },

    /// The expected output directory does not exist at count time. Kept
    /// distinct from a zero count so the orchestrator can classify the
    /// failure.
    #[error("Directory unavailable: {}", path.display())]
    DirectoryUnavailable { path: PathBuf },

    /// The handoff file could not be opened or written.
    #[error("File access failure on {}: {source}", path.display())]
    FileAccessFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The session rejected an attribute write or node operation.
    #[error("Session error: {0}")]
    Session(String),

    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Protocol error: {0}")]
    Protocol(#[from] renderline_protocol::ProtocolError),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, HookError>;
