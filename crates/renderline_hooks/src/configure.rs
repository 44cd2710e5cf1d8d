//! Writer-node output configuration.

use std::path::Path;

use renderline_protocol::defaults::{
    ATTR_DRAWING_NAME, ATTR_DRAWING_TYPE, WRITER_CODEC_TAG, WRITER_NODE_TYPE,
};
use renderline_protocol::naming;
use tracing::info;

use crate::error::{HookError, Result};
use crate::session::SceneSession;

/// Point the designated writer node at the version directory.
///
/// Sets the per-frame file-name prefix (`{versionDir}/{versionName}-`) and
/// the fixed codec tag on the writer node at the current frame. An absent
/// writer node is a reported `OutputNodeNotFound` failure, never an unchecked
/// dereference. Not idempotent-safe across different naming on a shared
/// node; invoke once per render job.
pub fn configure_output(
    session: &mut dyn SceneSession,
    version_dir: &Path,
    version_name: &str,
) -> Result<()> {
    let node = session
        .find_node_by_type(WRITER_NODE_TYPE)
        .ok_or_else(|| HookError::OutputNodeNotFound {
            node_type: WRITER_NODE_TYPE.to_string(),
        })?;

    let prefix = version_dir.join(naming::frame_prefix(version_name));
    let prefix = prefix.to_string_lossy();
    let frame = session.current_frame();

    session
        .set_text_attr(&node, ATTR_DRAWING_NAME, frame, &prefix)
        .map_err(|err| HookError::Session(err.to_string()))?;
    session
        .set_text_attr(&node, ATTR_DRAWING_TYPE, frame, WRITER_CODEC_TAG)
        .map_err(|err| HookError::Session(err.to_string()))?;

    info!(node = ?node, prefix = %prefix, codec = WRITER_CODEC_TAG, "configured writer node");
    Ok(())
}
