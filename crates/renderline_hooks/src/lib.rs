//! Renderline DCC Hooks
//!
//! Hook entry points invoked by the DCC around a single render job, plus the
//! pieces they are built from. The orchestrator provisions the environment,
//! the DCC runs the hooks, and the shared handoff file carries the result
//! back out.
//!
//! # Flow
//!
//! ```text
//! pre_render:   SceneSession ──▶ collect metadata ──▶ resolve version dir
//!                                    │                      │
//!                                    │              configure writer node
//!                                    ▼                      │
//!                            handoff file  ◀── truncating write
//!
//! (render executes, external)
//!
//! post_render:  resolve version dir ──▶ count frames ──▶ appending write
//! ```
//!
//! Execution is single-threaded and synchronous; each hook runs to completion
//! or fails outright. The handoff file and the writer node are exclusively
//! owned by the one session running the job.

pub mod collector;
pub mod configure;
pub mod error;
pub mod frames;
pub mod handoff;
pub mod session;

// Re-exports for convenience
pub use error::{HookError, Result};
pub use session::{NodeId, SceneSession, SessionError};

use renderline_protocol::{resolve_version_dir, JobContext};
use tracing::info;

/// Pre-render hook: capture scene state, point the writer node at the
/// version directory, and write the first handoff record.
///
/// Configuration comes from the orchestrator-provided environment
/// (`JobContext::from_env`).
pub fn pre_render(session: &mut dyn SceneSession) -> Result<()> {
    let ctx = JobContext::from_env()?;
    pre_render_with(session, &ctx)
}

/// Pre-render flow against an explicit context.
pub fn pre_render_with(session: &mut dyn SceneSession, ctx: &JobContext) -> Result<()> {
    let metadata = collector::collect_metadata(session)?;
    let version_dir =
        resolve_version_dir(&ctx.render_root, &metadata.version_name, &ctx.version_tag);

    configure::configure_output(session, &version_dir, &metadata.version_name)?;
    handoff::write_initial(&metadata, &ctx.handoff_file)?;

    info!(
        version_dir = %version_dir.display(),
        handoff = %ctx.handoff_file.display(),
        "pre-render handoff complete"
    );
    Ok(())
}

/// Post-render hook: recount produced output and append it to the handoff
/// file. Returns the counted frames.
///
/// Derives the version directory through the same resolution as the
/// pre-render hook; a missing directory fails with `DirectoryUnavailable`
/// before anything is appended.
pub fn post_render(session: &dyn SceneSession) -> Result<u64> {
    let ctx = JobContext::from_env()?;
    post_render_with(session, &ctx)
}

/// Post-render flow against an explicit context.
pub fn post_render_with(session: &dyn SceneSession, ctx: &JobContext) -> Result<u64> {
    let metadata = collector::collect_metadata(session)?;
    let version_dir =
        resolve_version_dir(&ctx.render_root, &metadata.version_name, &ctx.version_tag);

    let count = frames::count_frames(&version_dir)?;
    handoff::append_frame_count(count, &ctx.handoff_file)?;

    info!(
        version_dir = %version_dir.display(),
        count,
        "post-render handoff complete"
    );
    Ok(count)
}
