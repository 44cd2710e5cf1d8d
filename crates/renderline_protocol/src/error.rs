//! Protocol error types

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProtocolError>;

#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("Missing environment variable: {0}")]
    MissingEnv(&'static str),

    #[error("Environment variable {0} is not valid UTF-8")]
    NonUnicodeEnv(&'static str),

    #[error("Field '{field}' contains a reserved character: {value:?}")]
    ReservedCharacter { field: &'static str, value: String },

    #[error("Invalid handoff record: {0}")]
    InvalidRecord(String),

    #[error("Handoff file is empty")]
    EmptyDocument,
}
