//! Handoff file writer.
//!
//! Two-phase write discipline: the pre-render hook truncates the file and
//! writes the metadata record as its sole content; the post-render hook
//! appends the frame-count record without disturbing the first. File handles
//! are scope-bound, so they are released on every exit path including a
//! failed write.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use renderline_protocol::record::encode_frame_count;
use renderline_protocol::SceneMetadata;
use tracing::debug;

use crate::error::{HookError, Result};

/// Truncate the handoff file and write the metadata record.
pub fn write_initial(metadata: &SceneMetadata, path: &Path) -> Result<()> {
    let record = metadata.encode()?;
    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
        .map_err(|source| file_access(path, source))?;
    file.write_all(record.as_bytes())
        .map_err(|source| file_access(path, source))?;

    debug!(path = %path.display(), "wrote initial handoff record");
    Ok(())
}

/// Append the rendered-frame count to the handoff file.
pub fn append_frame_count(count: u64, path: &Path) -> Result<()> {
    let record = encode_frame_count(count);
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| file_access(path, source))?;
    file.write_all(record.as_bytes())
        .map_err(|source| file_access(path, source))?;

    debug!(path = %path.display(), count, "appended frame count record");
    Ok(())
}

fn file_access(path: &Path, source: std::io::Error) -> HookError {
    HookError::FileAccessFailure {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn metadata(version_name: &str) -> SceneMetadata {
        SceneMetadata {
            version_name: version_name.to_string(),
            frame_count: 24,
            start_frame: 1,
            end_frame: 24,
            color_space: "sRGB".to_string(),
        }
    }

    #[test]
    fn write_initial_truncates_prior_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("handoff.txt");

        write_initial(&metadata("first"), &path).unwrap();
        write_initial(&metadata("second"), &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "second,24,1,24,sRGB\n");
    }

    #[test]
    fn append_preserves_prior_records() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("handoff.txt");

        write_initial(&metadata("shot010"), &path).unwrap();
        append_frame_count(24, &path).unwrap();
        append_frame_count(25, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "shot010,24,1,24,sRGB\n24\n25\n");
    }

    #[test]
    fn unwritable_path_is_file_access_failure() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing_parent").join("handoff.txt");

        let err = write_initial(&metadata("shot010"), &path).unwrap_err();
        assert!(matches!(err, HookError::FileAccessFailure { .. }));
    }
}
