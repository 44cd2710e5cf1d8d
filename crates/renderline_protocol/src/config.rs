//! Job configuration resolved from orchestrator-provided environment variables.
//!
//! Both hooks resolve their configuration here; nothing else in the workspace
//! reads these environment variables directly.

use std::ffi::OsString;
use std::path::PathBuf;

use crate::defaults::{ENV_HANDOFF_FILE, ENV_RENDER_ROOT, ENV_VERSION_TAG};
use crate::error::{ProtocolError, Result};

/// Per-job context supplied by the orchestrator before each hook invocation.
///
/// Derived entirely from the environment at hook-invocation time; never
/// persisted.
#[derive(Debug, Clone)]
pub struct JobContext {
    /// Root directory all version directories live under.
    pub render_root: PathBuf,
    /// Job/version tag appended to the version directory name (e.g. "v003").
    pub version_tag: String,
    /// Path of the shared handoff file.
    pub handoff_file: PathBuf,
}

impl JobContext {
    pub fn new(
        render_root: impl Into<PathBuf>,
        version_tag: impl Into<String>,
        handoff_file: impl Into<PathBuf>,
    ) -> Self {
        Self {
            render_root: render_root.into(),
            version_tag: version_tag.into(),
            handoff_file: handoff_file.into(),
        }
    }

    /// Resolve the context from the recognized environment variables.
    ///
    /// Missing or empty variables are errors, never defaulted: a hook running
    /// without orchestrator-provided configuration must fail outright.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            render_root: PathBuf::from(read_env(ENV_RENDER_ROOT)?),
            version_tag: read_env(ENV_VERSION_TAG)?,
            handoff_file: PathBuf::from(read_env(ENV_HANDOFF_FILE)?),
        })
    }

    /// Environment variables to set on a spawned DCC process so its hooks
    /// resolve this same context.
    pub fn env_vars(&self) -> [(&'static str, OsString); 3] {
        [
            (ENV_RENDER_ROOT, self.render_root.clone().into_os_string()),
            (ENV_VERSION_TAG, OsString::from(self.version_tag.clone())),
            (ENV_HANDOFF_FILE, self.handoff_file.clone().into_os_string()),
        ]
    }
}

fn read_env(name: &'static str) -> Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        Ok(_) => Err(ProtocolError::MissingEnv(name)),
        Err(std::env::VarError::NotPresent) => Err(ProtocolError::MissingEnv(name)),
        Err(std::env::VarError::NotUnicode(_)) => Err(ProtocolError::NonUnicodeEnv(name)),
    }
}
