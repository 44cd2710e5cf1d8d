//! Version directory resolution.

use std::path::{Path, PathBuf};

use crate::naming::version_dir_name;

/// Resolve the canonical output directory for one rendered version:
/// `{renderRoot}/{versionName}_{versionTag}`, in host-native path syntax.
///
/// Pure and deterministic. Both hooks must derive the directory through this
/// function or the post-render phase counts frames in the wrong place.
/// Degenerate inputs (empty strings) produce a degenerate path rather than an
/// error; configuration is validated upstream.
pub fn resolve_version_dir(render_root: &Path, version_name: &str, version_tag: &str) -> PathBuf {
    render_root.join(version_dir_name(version_name, version_tag))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_root_slash_name_underscore_tag() {
        let dir = resolve_version_dir(Path::new("/render"), "shot010", "v3");
        assert_eq!(dir, PathBuf::from("/render/shot010_v3"));
    }

    #[test]
    fn is_deterministic() {
        let a = resolve_version_dir(Path::new("/render"), "shot010", "v3");
        let b = resolve_version_dir(Path::new("/render"), "shot010", "v3");
        assert_eq!(a, b);
    }

    #[test]
    fn empty_inputs_do_not_fail() {
        let dir = resolve_version_dir(Path::new(""), "", "");
        assert_eq!(dir, PathBuf::from("_"));
    }
}
