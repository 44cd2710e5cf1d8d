//! Scene metadata collection.

use renderline_protocol::SceneMetadata;
use tracing::debug;

use crate::error::{HookError, Result};
use crate::session::{SceneSession, SessionError};

/// Read scene-level facts from the session.
///
/// Side-effect-free with respect to the session. A session without an active
/// scene is `SceneStateUnavailable`, propagated rather than swallowed.
pub fn collect_metadata(session: &dyn SceneSession) -> Result<SceneMetadata> {
    let metadata = session.scene_info().map_err(|err| match err {
        SessionError::NoActiveScene => {
            HookError::SceneStateUnavailable("session has no active scene".to_string())
        }
        other => HookError::Session(other.to_string()),
    })?;

    debug!(
        version_name = %metadata.version_name,
        frame_count = metadata.frame_count,
        start_frame = metadata.start_frame,
        end_frame = metadata.end_frame,
        color_space = %metadata.color_space,
        "collected scene metadata"
    );
    Ok(metadata)
}
