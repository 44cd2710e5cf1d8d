//! Naming conventions for version directories and frame files.

/// Directory name for one rendered version: `{versionName}_{versionTag}`.
pub fn version_dir_name(version_name: &str, version_tag: &str) -> String {
    format!("{version_name}_{version_tag}")
}

/// Per-frame file-name prefix handed to the writer node: `{versionName}-`.
///
/// The render engine appends the frame token and extension.
pub fn frame_prefix(version_name: &str) -> String {
    format!("{version_name}-")
}

/// Format a version number as a zero-padded tag: `version_tag(3)` -> `"v003"`.
pub fn version_tag(num: u32) -> String {
    format!("v{num:03}")
}

/// Parse the trailing version number out of a name like `shot010_v012`.
///
/// Returns `None` when no `v`-suffixed number is present.
pub fn parse_version_suffix(name: &str) -> Option<u32> {
    let (_, tail) = name.rsplit_once('v')?;
    tail.parse().ok()
}
