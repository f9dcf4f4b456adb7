use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Input '{source_name}' looks binary (contains NUL bytes)")]
    BinaryInput { source_name: String },

    #[error("Input '{source_name}' is not valid UTF-8 (invalid sequence at byte {valid_up_to})")]
    Decode {
        source_name: String,
        valid_up_to: usize,
    },

    #[error("Input '{source_name}' produced no tokens")]
    EmptyInput { source_name: String },

    #[error("Malformed tagged token at line {line}: {reason}")]
    TaggedLine { line: usize, reason: String },

    #[error("Unknown part-of-speech tag: {0}")]
    UnknownPosTag(String),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
