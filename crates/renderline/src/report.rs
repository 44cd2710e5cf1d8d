//! Handoff validation and the TSV render log.
//!
//! After each successful render the handoff file is parsed, checked against
//! the protocol state machine, and logged as one row of `render_log.tsv`
//! alongside orchestrator-side timings.

use std::fs::{self, OpenOptions};
use std::path::Path;

use anyhow::Context;
use renderline_protocol::{HandoffDocument, HandoffState, ProtocolError};
use thiserror::Error;
use tracing::info;

/// Log columns, written once when the file is created.
const LOG_HEADERS: [&str; 10] = [
    "Date",
    "Version",
    "Frames",
    "Start",
    "End",
    "Color Space",
    "Started",
    "Finished",
    "Rendered",
    "Job ID",
];

/// Timestamp format used throughout the render log.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Error, Debug)]
pub enum ReportError {
    /// The pre-render record exists but no frame count was appended: the
    /// render did not complete or was never verified.
    #[error("Render did not complete: handoff for '{version_name}' has no frame count")]
    RenderIncomplete { version_name: String },

    /// The handoff file was never written: the pre-render hook did not run.
    #[error("Handoff file was never written: {0}")]
    NeverStarted(String),

    #[error("Invalid handoff file {path}: {source}")]
    Invalid {
        path: String,
        #[source]
        source: ProtocolError,
    },

    #[error("Cannot read handoff file {path}: {source}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Orchestrator-side facts accompanying one handoff document in the log.
#[derive(Debug, Clone)]
pub struct RenderTiming {
    pub exec_start: String,
    pub render_start: String,
    pub render_end: String,
    pub job_id: String,
}

/// Current local time in the render-log format.
pub fn timestamp_now() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Read and parse the handoff file.
pub fn read_handoff(path: &Path) -> Result<HandoffDocument, ReportError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            return Err(ReportError::NeverStarted(path.display().to_string()))
        }
        Err(source) => {
            return Err(ReportError::Unreadable {
                path: path.display().to_string(),
                source,
            })
        }
    };

    HandoffDocument::parse(&content).map_err(|source| match source {
        ProtocolError::EmptyDocument => ReportError::NeverStarted(path.display().to_string()),
        other => ReportError::Invalid {
            path: path.display().to_string(),
            source: other,
        },
    })
}

/// Check the handoff reached its terminal state; returns the frame count.
pub fn validate(doc: &HandoffDocument) -> Result<u64, ReportError> {
    match doc.state() {
        HandoffState::FrameCountAppended => Ok(doc.rendered_frames.unwrap_or(0)),
        _ => Err(ReportError::RenderIncomplete {
            version_name: doc.metadata.version_name.clone(),
        }),
    }
}

/// Append one row to the TSV render log, creating it with headers first.
pub fn append_log(
    doc: &HandoffDocument,
    timing: &RenderTiming,
    tsv_path: &Path,
) -> anyhow::Result<()> {
    let write_headers = !tsv_path.is_file();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(tsv_path)
        .with_context(|| format!("Failed to open render log: {}", tsv_path.display()))?;

    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_writer(file);

    if write_headers {
        writer.write_record(LOG_HEADERS)?;
    }

    let meta = &doc.metadata;
    let frames = meta.frame_count.to_string();
    let start = meta.start_frame.to_string();
    let end = meta.end_frame.to_string();
    let rendered = doc
        .rendered_frames
        .map(|n| n.to_string())
        .unwrap_or_default();
    writer.write_record([
        timing.exec_start.as_str(),
        meta.version_name.as_str(),
        frames.as_str(),
        start.as_str(),
        end.as_str(),
        meta.color_space.as_str(),
        timing.render_start.as_str(),
        timing.render_end.as_str(),
        rendered.as_str(),
        timing.job_id.as_str(),
    ])?;
    writer.flush()?;

    info!(log = %tsv_path.display(), version = %meta.version_name, "render logged");
    Ok(())
}
