//! Renderline Handoff Protocol
//!
//! File-based handshake between a render-farm orchestrator and a DCC session
//! around a single render job. The two sides never talk directly: the
//! orchestrator provisions environment variables, the DCC-side hooks write a
//! shared handoff file in two phases, and the orchestrator reads it back to
//! validate the job.
//!
//! # Protocol Specification
//!
//! The handoff file is newline-delimited text with comma-delimited fields:
//!
//! ```text
//! versionName,frameCount,startFrame,endFrame,colorSpace   <- pre-render (truncating write)
//! renderedFrames                                          <- post-render (appending write)
//! ```
//!
//! The pre-render record always overwrites prior content; the post-render
//! record is always appended. A file therefore holds exactly two records per
//! job when both hooks ran, one if only the pre-render hook ran, and none if
//! the job never started.
//!
//! # Output Layout
//!
//! ```text
//! {renderRoot}/{versionName}_{versionTag}/{versionName}-{frame}.{ext}
//! ```
//!
//! one file per rendered frame, with the version directory derived
//! identically in both phases (see [`paths::resolve_version_dir`]).

pub mod config;
pub mod defaults;
pub mod error;
pub mod naming;
pub mod paths;
pub mod record;

// Re-export the main protocol surface for convenience
pub use config::JobContext;
pub use error::{ProtocolError, Result};
pub use paths::resolve_version_dir;
pub use record::{HandoffDocument, HandoffState, SceneMetadata};
