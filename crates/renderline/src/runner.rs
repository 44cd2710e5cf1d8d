//! DCC subprocess invocation.
//!
//! The render engine itself is external: the orchestrator spawns the DCC in
//! batch mode with the pre/post render scripts attached, and the per-job
//! context exported through the environment the hooks read.

use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use renderline_protocol::JobContext;
use thiserror::Error;
use tracing::{info, warn};

/// Binary name used when no explicit location is configured.
const DEFAULT_BINARY: &str = "HarmonyPremium";

#[derive(Error, Debug)]
pub enum RunnerError {
    #[error(
        "DCC binary '{binary}' not found. Pass --dcc-bin or set RENDERLINE_DCC_BIN."
    )]
    BinaryNotFound { binary: String },

    #[error("Failed to spawn DCC process: {0}")]
    Spawn(#[from] io::Error),

    #[error("Render failed for {scene} (exit code {code:?})")]
    RenderFailed { scene: String, code: Option<i32> },
}

pub type Result<T> = std::result::Result<T, RunnerError>;

/// How to invoke the DCC for one batch.
#[derive(Debug, Clone)]
pub struct RenderInvocation {
    pub binary: PathBuf,
    pub pre_script: Option<PathBuf>,
    pub post_script: Option<PathBuf>,
}

impl RenderInvocation {
    /// Render a single scene to completion, blocking until the DCC exits.
    ///
    /// The job context is exported on the child environment so the hooks
    /// resolve the same render root, version tag, and handoff path.
    pub fn render_scene(&self, scene: &Path, ctx: &JobContext) -> Result<()> {
        let mut cmd = Command::new(&self.binary);
        cmd.arg("-readonly").arg("-batch").arg(scene);
        if let Some(pre) = &self.pre_script {
            cmd.arg("-preRenderScript").arg(pre);
        }
        if let Some(post) = &self.post_script {
            cmd.arg("-postRenderScript").arg(post);
        }
        for (key, value) in ctx.env_vars() {
            cmd.env(key, value);
        }

        info!(scene = %scene.display(), binary = %self.binary.display(), "starting render");
        let status = cmd.status().map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                RunnerError::BinaryNotFound {
                    binary: self.binary.display().to_string(),
                }
            } else {
                RunnerError::Spawn(e)
            }
        })?;

        if !status.success() {
            warn!(scene = %scene.display(), code = ?status.code(), "render exited non-zero");
            return Err(RunnerError::RenderFailed {
                scene: scene
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_else(|| scene.display().to_string()),
                code: status.code(),
            });
        }
        Ok(())
    }
}

/// Resolve the DCC binary: explicit flag/env first, then a version-based
/// install location, then the bare binary name on PATH.
pub fn resolve_binary(explicit: Option<PathBuf>, dcc_version: Option<&str>) -> PathBuf {
    if let Some(bin) = explicit {
        return bin;
    }
    if let Some(version) = dcc_version {
        if let Some(dir) = default_install_dir(version) {
            return dir.join(DEFAULT_BINARY);
        }
    }
    PathBuf::from(DEFAULT_BINARY)
}

/// Platform-default install bin directory for a DCC version, when the
/// platform has a conventional one.
pub fn default_install_dir(version: &str) -> Option<PathBuf> {
    if cfg!(target_os = "windows") {
        Some(
            PathBuf::from("C:/Program Files (x86)/Toon Boom Animation")
                .join(format!("Toon Boom Harmony {version} Premium"))
                .join("win64")
                .join("bin"),
        )
    } else if cfg!(target_os = "macos") {
        Some(
            PathBuf::from(format!("/Applications/Toon Boom Harmony {version} Premium"))
                .join(format!("Harmony {version} Premium.app"))
                .join("Contents/tba/macosx/bin"),
        )
    } else {
        None
    }
}
