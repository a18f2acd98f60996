//! Error types for cascade-json.

use crate::kind::JsonKind;
use std::path::PathBuf;
use thiserror::Error;

/// Merge-related errors raised by the deep merge engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MergeError {
    #[error("Type mismatch at {path}: base is {base}, overlay is {overlay}")]
    TypeMismatch {
        path: String,
        base: JsonKind,
        overlay: JsonKind,
    },

    #[error("Unsupported merge at {path}: cannot merge two {kind} values")]
    UnsupportedType { path: String, kind: JsonKind },
}

/// Errors raised while loading a single candidate document
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors surfaced by the command-line front end
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Logging error: {0}")]
    Logging(String),

    #[error("Failed to serialize result: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<config::ConfigError> for CliError {
    fn from(err: config::ConfigError) -> Self {
        CliError::Config(err.to_string())
    }
}
