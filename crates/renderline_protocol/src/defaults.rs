//! Canonical constants shared between the orchestrator and the DCC hooks.

/// File extension of rendered frame containers (matched case-insensitively).
pub const FRAME_EXTENSION: &str = "exr";

/// Codec tag set on the writer node: multi-layer zip EXR, one scanline per block.
pub const WRITER_CODEC_TAG: &str = "EXR_ZIP_1LINE";

/// Node type of the designated output writer.
pub const WRITER_NODE_TYPE: &str = "MultiLayerWrite";

/// Writer attribute holding the output file-name prefix.
pub const ATTR_DRAWING_NAME: &str = "drawingName";

/// Writer attribute holding the container/codec tag.
pub const ATTR_DRAWING_TYPE: &str = "drawingType";

/// Field delimiter of the handoff metadata record.
pub const FIELD_DELIMITER: char = ',';

/// Environment variables recognized by `JobContext::from_env`.
pub const ENV_RENDER_ROOT: &str = "RENDERLINE_RENDER_ROOT";
pub const ENV_VERSION_TAG: &str = "RENDERLINE_RENDER_VER";
pub const ENV_HANDOFF_FILE: &str = "RENDERLINE_HANDOFF_FILE";
