//! SceneSession port - abstraction over the live DCC session.
//!
//! The hooks never touch ambient DCC state directly; everything goes through
//! this trait so the protocol logic runs against a scripted fake in tests and
//! against a real session binding in production.

use renderline_protocol::SceneMetadata;
use thiserror::Error;

/// Opaque handle to a node in the session's node graph.
///
/// The contents are meaningful only to the session that issued it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeId(pub String);

/// Errors surfaced by a session implementation.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("no active scene")]
    NoActiveScene,

    #[error("unknown node: {0}")]
    UnknownNode(String),

    #[error("attribute write rejected: {0}")]
    AttributeRejected(String),
}

/// Capabilities the hooks require from the DCC session.
pub trait SceneSession {
    /// Facts about the currently loaded scene: version name, frame range,
    /// frame count, active color space.
    fn scene_info(&self) -> std::result::Result<SceneMetadata, SessionError>;

    /// Frame the session is currently positioned at.
    fn current_frame(&self) -> i32;

    /// First node of the given type, if any. Explicitly optional: an absent
    /// writer node is an ordinary condition the caller must handle.
    fn find_node_by_type(&self, node_type: &str) -> Option<NodeId>;

    /// Set a text attribute on a node at a frame.
    fn set_text_attr(
        &mut self,
        node: &NodeId,
        attr: &str,
        frame: i32,
        value: &str,
    ) -> std::result::Result<(), SessionError>;
}
