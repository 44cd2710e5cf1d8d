//! Completed-frame counting.

use std::path::Path;

use renderline_protocol::defaults::FRAME_EXTENSION;
use tracing::debug;
use walkdir::WalkDir;

use crate::error::{HookError, Result};

/// Count rendered frame containers directly inside `version_dir`.
///
/// Only files carrying the frame extension (case-insensitive) are counted;
/// subdirectories are not descended into. A missing directory is
/// `DirectoryUnavailable`, never a zero count: the orchestrator needs to tell
/// "nothing rendered" apart from "output location never existed".
pub fn count_frames(version_dir: &Path) -> Result<u64> {
    if !version_dir.is_dir() {
        return Err(HookError::DirectoryUnavailable {
            path: version_dir.to_path_buf(),
        });
    }

    let mut count = 0u64;
    for entry in WalkDir::new(version_dir).min_depth(1).max_depth(1) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let is_frame = entry
            .path()
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case(FRAME_EXTENSION))
            .unwrap_or(false);
        if is_frame {
            count += 1;
        }
    }

    debug!(dir = %version_dir.display(), count, "counted rendered frames");
    Ok(count)
}
