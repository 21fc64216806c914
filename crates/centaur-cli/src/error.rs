//! Errors reported by the command line.

use centaur_core::{CentaurError, InputError};
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Centaur(#[from] CentaurError),

    #[error("Failed to serialize program: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{} already exists", .0.display())]
    AlreadyExists(PathBuf),
}

impl From<InputError> for CliError {
    fn from(err: InputError) -> Self {
        Self::Centaur(err.into())
    }
}
