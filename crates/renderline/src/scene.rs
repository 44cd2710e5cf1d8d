//! Scene verification and sequence parsing.
//!
//! Scene files are named `{token}_{act}_{shot}_...`, e.g. `myt_a2_014_anim`.
//! The act/shot pair drives render-directory discovery.

use std::path::Path;

use thiserror::Error;

/// File extension of a DCC scene.
pub const SCENE_EXTENSION: &str = "xstage";

/// Project token every scene name must carry.
pub const PROJECT_TOKEN: &str = "myt";

#[derive(Error, Debug)]
pub enum SceneError {
    #[error("Path does not exist: {0}")]
    Missing(String),

    #[error("Not a scene file: {0}")]
    NotAScene(String),

    #[error("Not a project scene: {0}")]
    NotProjectScene(String),
}

/// Verify that `path` points at a renderable project scene.
pub fn verify_scene(path: &Path) -> Result<(), SceneError> {
    if !path.exists() {
        return Err(SceneError::Missing(path.display().to_string()));
    }
    let stem = stem_of(path);
    if path.extension() != Some(std::ffi::OsStr::new(SCENE_EXTENSION)) {
        return Err(SceneError::NotAScene(
            path.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
        ));
    }
    if !stem.contains(PROJECT_TOKEN) {
        return Err(SceneError::NotProjectScene(stem));
    }
    Ok(())
}

/// Derive `(act, shot)` from the scene name.
///
/// Fields 1 and 2 of the `_`-split stem; the act is the trailing character of
/// its field (`a2` -> `2`). Stems not starting with the project token are
/// parsed from the substring after the token. Unparseable names fall back to
/// `("0", "000")` so discovery reports a readable "not found" instead of the
/// parse failing here.
pub fn sequence(path: &Path) -> (String, String) {
    let stem = stem_of(path);
    if stem.to_lowercase().starts_with(PROJECT_TOKEN) {
        if let Some(pair) = act_shot(&stem) {
            return pair;
        }
    } else if let Some(tail) = stem.split(PROJECT_TOKEN).last() {
        if let Some(pair) = act_shot(tail) {
            return pair;
        }
    }
    ("0".to_string(), "000".to_string())
}

fn act_shot(stem: &str) -> Option<(String, String)> {
    let mut parts = stem.split('_');
    let _head = parts.next()?;
    let act_field = parts.next()?;
    let shot = parts.next()?;
    let act = act_field.chars().last()?;
    Some((act.to_string(), shot.to_string()))
}

fn stem_of(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn verify_accepts_project_scene() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("myt_a1_010.xstage");
        fs::write(&path, b"").unwrap();
        assert!(verify_scene(&path).is_ok());
    }

    #[test]
    fn verify_rejects_missing_path() {
        let err = verify_scene(Path::new("/nowhere/myt_a1_010.xstage")).unwrap_err();
        assert!(matches!(err, SceneError::Missing(_)));
    }

    #[test]
    fn verify_rejects_wrong_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("myt_a1_010.blend");
        fs::write(&path, b"").unwrap();
        let err = verify_scene(&path).unwrap_err();
        assert!(matches!(err, SceneError::NotAScene(_)));
    }

    #[test]
    fn verify_rejects_foreign_scene() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("other_a1_010.xstage");
        fs::write(&path, b"").unwrap();
        let err = verify_scene(&path).unwrap_err();
        assert!(matches!(err, SceneError::NotProjectScene(_)));
    }

    #[test]
    fn sequence_parses_act_and_shot() {
        let (act, shot) = sequence(Path::new("myt_a2_014_anim.xstage"));
        assert_eq!(act, "2");
        assert_eq!(shot, "014");
    }

    #[test]
    fn sequence_parses_prefixed_names() {
        let (act, shot) = sequence(Path::new("wip_myt_a3_021.xstage"));
        assert_eq!(act, "3");
        assert_eq!(shot, "021");
    }

    #[test]
    fn sequence_falls_back_on_short_names() {
        let (act, shot) = sequence(Path::new("scene.xstage"));
        assert_eq!(act, "0");
        assert_eq!(shot, "000");
    }
}
