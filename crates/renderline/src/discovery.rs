//! Render directory discovery and version numbering.
//!
//! Output for a shot lives at `{root}/{act dir}/{shot dir}/EXR`, where the
//! act and shot directories are matched by name suffix. Version directories
//! inside carry a trailing `v<NNN>` tag.

use std::io;
use std::path::{Path, PathBuf};

use renderline_protocol::naming;
use thiserror::Error;
use tracing::debug;

use crate::scene::PROJECT_TOKEN;

/// Subdirectory holding rendered frame output.
const FRAME_DIR: &str = "EXR";

#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("No act directory ending in '{act}' under {root}")]
    ActNotFound { act: String, root: String },

    #[error("No shot directory ending in '{shot}' under {act_dir}")]
    ShotNotFound { shot: String, act_dir: String },

    #[error("Render directory does not exist: {0}")]
    RenderDirMissing(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, DiscoveryError>;

/// Locate the render directory for an act/shot pair under the render root.
pub fn find_render_dir(root: &Path, act: &str, shot: &str) -> Result<PathBuf> {
    let act_dir =
        dir_with_suffix(root, act)?.ok_or_else(|| DiscoveryError::ActNotFound {
            act: act.to_string(),
            root: root.display().to_string(),
        })?;
    let shot_dir =
        dir_with_suffix(&act_dir, shot)?.ok_or_else(|| DiscoveryError::ShotNotFound {
            shot: shot.to_string(),
            act_dir: act_dir.display().to_string(),
        })?;
    let render_dir = shot_dir.join(FRAME_DIR);
    debug!(dir = %render_dir.display(), "discovered render directory");
    Ok(render_dir)
}

/// Next version tag for a render directory: one past the highest existing
/// `v<NNN>` suffix among project version directories, formatted `v001`-style.
///
/// Directories without a parseable suffix fall back to the directory count,
/// matching how versions were numbered before tags were mandatory.
pub fn next_version_tag(render_dir: &Path) -> Result<String> {
    if !render_dir.is_dir() {
        return Err(DiscoveryError::RenderDirMissing(
            render_dir.display().to_string(),
        ));
    }

    let mut names: Vec<String> = Vec::new();
    for entry in render_dir.read_dir()? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.to_lowercase().starts_with(PROJECT_TOKEN) {
            names.push(name);
        }
    }

    if names.is_empty() {
        return Ok(naming::version_tag(1));
    }

    names.sort();
    let last = names.last().map(String::as_str).unwrap_or_default();
    let current = naming::parse_version_suffix(last).unwrap_or(names.len() as u32);
    Ok(naming::version_tag(current + 1))
}

fn dir_with_suffix(parent: &Path, suffix: &str) -> Result<Option<PathBuf>> {
    for entry in parent.read_dir()? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        if entry.file_name().to_string_lossy().ends_with(suffix) {
            return Ok(Some(entry.path()));
        }
    }
    Ok(None)
}
