use thiserror::Error;

use crate::activity::{ParseError, RosterError};
use crate::sport::GameError;

/// Errors surfaced across the service and storage boundary
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal error")]
    Internal,
}

impl From<GameError> for AppError {
    fn from(err: GameError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<RosterError> for AppError {
    fn from(err: RosterError) -> Self {
        match err {
            RosterError::DuplicateTeamName(_) => AppError::Conflict(err.to_string()),
            _ => AppError::Validation(err.to_string()),
        }
    }
}

impl From<ParseError> for AppError {
    fn from(err: ParseError) -> Self {
        AppError::Validation(err.to_string())
    }
}
