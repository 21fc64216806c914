//! Error types for the Centaur compiler.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for the Centaur compiler.
#[derive(Debug, Error)]
pub enum CentaurError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error("Failed to write {path}: {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Code generation failed for {component}: {reason}")]
    Codegen { component: String, reason: String },
}

/// Problems with the source text itself, reported before parsing.
///
/// Malformed source is never an error; the parser falls back to defaults.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Source is empty")]
    Empty,

    #[error("Cannot read {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
