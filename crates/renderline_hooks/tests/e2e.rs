//! End-to-end tests for the render hooks.
//!
//! The hooks are exercised against a scripted fake session and a temp
//! filesystem; no live DCC is involved.

use std::fs;
use std::path::PathBuf;

use renderline_hooks::{
    post_render_with, pre_render_with, HookError, NodeId, SceneSession, SessionError,
};
use renderline_protocol::defaults::{ATTR_DRAWING_NAME, ATTR_DRAWING_TYPE, WRITER_NODE_TYPE};
use renderline_protocol::{HandoffDocument, HandoffState, JobContext, SceneMetadata};
use tempfile::TempDir;

/// Scripted stand-in for a live DCC session.
struct FakeSession {
    scene: Option<SceneMetadata>,
    writer_node: Option<NodeId>,
    current_frame: i32,
    /// Recorded attribute writes: (node, attr, frame, value)
    attr_writes: Vec<(NodeId, String, i32, String)>,
}

impl FakeSession {
    fn with_scene(version_name: &str) -> Self {
        Self {
            scene: Some(SceneMetadata {
                version_name: version_name.to_string(),
                frame_count: 24,
                start_frame: 1,
                end_frame: 24,
                color_space: "sRGB".to_string(),
            }),
            writer_node: Some(NodeId("Top/Write".to_string())),
            current_frame: 1,
            attr_writes: Vec::new(),
        }
    }

    fn attr_value(&self, attr: &str) -> Option<&str> {
        self.attr_writes
            .iter()
            .find(|(_, a, _, _)| a == attr)
            .map(|(_, _, _, v)| v.as_str())
    }
}

impl SceneSession for FakeSession {
    fn scene_info(&self) -> Result<SceneMetadata, SessionError> {
        self.scene.clone().ok_or(SessionError::NoActiveScene)
    }

    fn current_frame(&self) -> i32 {
        self.current_frame
    }

    fn find_node_by_type(&self, node_type: &str) -> Option<NodeId> {
        if node_type == WRITER_NODE_TYPE {
            self.writer_node.clone()
        } else {
            None
        }
    }

    fn set_text_attr(
        &mut self,
        node: &NodeId,
        attr: &str,
        frame: i32,
        value: &str,
    ) -> Result<(), SessionError> {
        self.attr_writes
            .push((node.clone(), attr.to_string(), frame, value.to_string()));
        Ok(())
    }
}

struct TestEnv {
    _temp: TempDir,
    render_root: PathBuf,
    ctx: JobContext,
}

impl TestEnv {
    fn new(version_tag: &str) -> Self {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let render_root = temp.path().join("render");
        fs::create_dir_all(&render_root).expect("Failed to create render root");
        let ctx = JobContext::new(
            render_root.clone(),
            version_tag,
            temp.path().join("handoff.txt"),
        );
        Self {
            _temp: temp,
            render_root,
            ctx,
        }
    }

    fn place_frames(&self, version_dir_name: &str, count: usize) {
        let dir = self.render_root.join(version_dir_name);
        fs::create_dir_all(&dir).expect("Failed to create version dir");
        for i in 0..count {
            fs::write(dir.join(format!("frame-{i:04}.exr")), b"").unwrap();
        }
    }
}

// ============================================================================
// Pre-render
// ============================================================================

#[test]
fn pre_render_writes_metadata_and_configures_writer() {
    let env = TestEnv::new("v3");
    let mut session = FakeSession::with_scene("shot010");

    pre_render_with(&mut session, &env.ctx).unwrap();

    // Writer node got the output prefix and the codec tag at the current frame
    let prefix = session.attr_value(ATTR_DRAWING_NAME).unwrap();
    let expected_dir = env.render_root.join("shot010_v3");
    assert_eq!(
        prefix,
        expected_dir.join("shot010-").to_string_lossy().as_ref()
    );
    assert_eq!(session.attr_value(ATTR_DRAWING_TYPE), Some("EXR_ZIP_1LINE"));
    assert!(session.attr_writes.iter().all(|(_, _, frame, _)| *frame == 1));

    // Handoff file holds exactly the metadata record
    let content = fs::read_to_string(&env.ctx.handoff_file).unwrap();
    assert_eq!(content, "shot010,24,1,24,sRGB\n");

    let doc = HandoffDocument::parse(&content).unwrap();
    assert_eq!(doc.state(), HandoffState::MetadataWritten);
}

#[test]
fn pre_render_without_scene_fails_unavailable() {
    let env = TestEnv::new("v1");
    let mut session = FakeSession::with_scene("shot010");
    session.scene = None;

    let err = pre_render_with(&mut session, &env.ctx).unwrap_err();
    assert!(matches!(err, HookError::SceneStateUnavailable(_)));
    assert!(!env.ctx.handoff_file.exists());
}

#[test]
fn pre_render_without_writer_node_is_reported() {
    let env = TestEnv::new("v1");
    let mut session = FakeSession::with_scene("shot010");
    session.writer_node = None;

    let err = pre_render_with(&mut session, &env.ctx).unwrap_err();
    match err {
        HookError::OutputNodeNotFound { node_type } => assert_eq!(node_type, WRITER_NODE_TYPE),
        other => panic!("expected OutputNodeNotFound, got {other:?}"),
    }
    // Nothing was handed off for a job that cannot be configured
    assert!(!env.ctx.handoff_file.exists());
}

#[test]
fn pre_render_twice_leaves_only_latest_metadata() {
    let env = TestEnv::new("v2");
    let mut session = FakeSession::with_scene("shot010");
    pre_render_with(&mut session, &env.ctx).unwrap();

    let mut session = FakeSession::with_scene("shot020");
    pre_render_with(&mut session, &env.ctx).unwrap();

    let content = fs::read_to_string(&env.ctx.handoff_file).unwrap();
    assert_eq!(content, "shot020,24,1,24,sRGB\n");
}

// ============================================================================
// Post-render
// ============================================================================

#[test]
fn post_render_counts_matching_frames_only() {
    let env = TestEnv::new("v3");
    let mut session = FakeSession::with_scene("shot010");
    pre_render_with(&mut session, &env.ctx).unwrap();

    env.place_frames("shot010_v3", 24);
    // Non-matching clutter must not affect the count
    let dir = env.render_root.join("shot010_v3");
    fs::write(dir.join("render.log"), b"").unwrap();
    fs::write(dir.join("preview.mov"), b"").unwrap();

    let count = post_render_with(&session, &env.ctx).unwrap();
    assert_eq!(count, 24);
}

#[test]
fn post_render_missing_directory_is_not_zero() {
    let env = TestEnv::new("v3");
    let mut session = FakeSession::with_scene("shot010");
    pre_render_with(&mut session, &env.ctx).unwrap();

    // Render never produced the version directory
    let err = post_render_with(&session, &env.ctx).unwrap_err();
    assert!(matches!(err, HookError::DirectoryUnavailable { .. }));

    // The handoff file stays in MetadataWritten: no count was appended
    let content = fs::read_to_string(&env.ctx.handoff_file).unwrap();
    let doc = HandoffDocument::parse(&content).unwrap();
    assert_eq!(doc.state(), HandoffState::MetadataWritten);
}

// ============================================================================
// Full handshake
// ============================================================================

#[test]
fn both_phases_produce_a_two_record_handoff() {
    let env = TestEnv::new("v3");
    let mut session = FakeSession::with_scene("shot010");

    pre_render_with(&mut session, &env.ctx).unwrap();
    env.place_frames("shot010_v3", 24);
    let count = post_render_with(&session, &env.ctx).unwrap();
    assert_eq!(count, 24);

    let content = fs::read_to_string(&env.ctx.handoff_file).unwrap();
    assert_eq!(content, "shot010,24,1,24,sRGB\n24\n");

    let doc = HandoffDocument::parse(&content).unwrap();
    assert_eq!(doc.state(), HandoffState::FrameCountAppended);
    assert_eq!(doc.rendered_frames, Some(24));
    assert_eq!(doc.metadata.version_name, "shot010");
}

#[test]
fn zero_rendered_frames_is_a_valid_terminal_state() {
    let env = TestEnv::new("v1");
    let mut session = FakeSession::with_scene("shot010");

    pre_render_with(&mut session, &env.ctx).unwrap();
    env.place_frames("shot010_v1", 0);
    let count = post_render_with(&session, &env.ctx).unwrap();
    assert_eq!(count, 0);

    let doc =
        HandoffDocument::parse(&fs::read_to_string(&env.ctx.handoff_file).unwrap()).unwrap();
    assert_eq!(doc.state(), HandoffState::FrameCountAppended);
    assert_eq!(doc.rendered_frames, Some(0));
}
