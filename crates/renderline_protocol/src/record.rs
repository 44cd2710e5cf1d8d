//! Handoff record schema and wire encoding.
//!
//! The exact textual form is fixed here by specification: one metadata line
//! with comma-delimited fields, then one frame-count line appended after the
//! render. Encoding rejects field values containing the delimiter or a
//! newline instead of silently producing an unparseable file; parsing is
//! strict about field count and numeric fields.

use serde::{Deserialize, Serialize};

use crate::defaults::FIELD_DELIMITER;
use crate::error::{ProtocolError, Result};

/// Scene-level facts captured once per pre-render invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneMetadata {
    pub version_name: String,
    pub frame_count: u32,
    pub start_frame: i32,
    pub end_frame: i32,
    pub color_space: String,
}

impl SceneMetadata {
    /// Encode as the first handoff record, newline-terminated.
    pub fn encode(&self) -> Result<String> {
        check_field("version_name", &self.version_name)?;
        check_field("color_space", &self.color_space)?;
        Ok(format!(
            "{}{d}{}{d}{}{d}{}{d}{}\n",
            self.version_name,
            self.frame_count,
            self.start_frame,
            self.end_frame,
            self.color_space,
            d = FIELD_DELIMITER,
        ))
    }

    /// Decode one metadata line (trailing newline tolerated).
    pub fn decode(line: &str) -> Result<Self> {
        let line = line.trim_end_matches(['\r', '\n']);
        let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
        if fields.len() != 5 {
            return Err(ProtocolError::InvalidRecord(format!(
                "expected 5 metadata fields, got {}",
                fields.len()
            )));
        }
        Ok(Self {
            version_name: fields[0].to_string(),
            frame_count: parse_number(fields[1], "frame_count")?,
            start_frame: parse_number(fields[2], "start_frame")?,
            end_frame: parse_number(fields[3], "end_frame")?,
            color_space: fields[4].to_string(),
        })
    }
}

/// Encode the post-render frame-count record, newline-terminated.
pub fn encode_frame_count(count: u64) -> String {
    format!("{count}\n")
}

/// Decode the frame-count line (trailing newline tolerated).
pub fn decode_frame_count(line: &str) -> Result<u64> {
    parse_number(line.trim_end_matches(['\r', '\n']), "rendered_frames")
}

fn parse_number<T: std::str::FromStr>(value: &str, field: &str) -> Result<T> {
    value.parse().map_err(|_| {
        ProtocolError::InvalidRecord(format!("field '{field}' is not a number: {value:?}"))
    })
}

fn check_field(field: &'static str, value: &str) -> Result<()> {
    if value.contains(FIELD_DELIMITER) || value.contains('\n') || value.contains('\r') {
        return Err(ProtocolError::ReservedCharacter {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

/// Handoff file lifecycle state, one job per file.
///
/// `Unstarted -> MetadataWritten -> FrameCountAppended`, no recovery
/// transitions. A file stuck in `MetadataWritten` means the render did not
/// complete or was never verified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandoffState {
    Unstarted,
    MetadataWritten,
    FrameCountAppended,
}

/// Parsed view of a handoff file after at least the pre-render phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandoffDocument {
    pub metadata: SceneMetadata,
    /// Present once the post-render hook has appended its record.
    pub rendered_frames: Option<u64>,
}

impl HandoffDocument {
    /// Parse full handoff file content.
    ///
    /// An empty file is `EmptyDocument` (the job never reached the pre-render
    /// write); extra records beyond the two the protocol defines are an
    /// `InvalidRecord` error.
    pub fn parse(content: &str) -> Result<Self> {
        let mut lines = content.lines().filter(|l| !l.trim().is_empty());
        let metadata_line = lines.next().ok_or(ProtocolError::EmptyDocument)?;
        let metadata = SceneMetadata::decode(metadata_line)?;

        let rendered_frames = match lines.next() {
            Some(line) => Some(decode_frame_count(line)?),
            None => None,
        };

        if lines.next().is_some() {
            return Err(ProtocolError::InvalidRecord(
                "more than two records in handoff file".to_string(),
            ));
        }

        Ok(Self {
            metadata,
            rendered_frames,
        })
    }

    pub fn state(&self) -> HandoffState {
        if self.rendered_frames.is_some() {
            HandoffState::FrameCountAppended
        } else {
            HandoffState::MetadataWritten
        }
    }
}
