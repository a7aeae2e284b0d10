use std::num::ParseIntError;

use crate::application::services::validation::ValidationError;

/// Errors surfaced by use cases to the presentation layer.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The path id is not a base-10 integer.
    #[error("converting id to int: {0}")]
    InvalidId(#[source] ParseIntError),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ServiceError {
    /// Field-level hint attached to client errors, if any.
    pub fn context(&self) -> Option<(&'static str, &'static str)> {
        match self {
            ServiceError::InvalidId(_) => Some(("id", "wrong id format")),
            _ => None,
        }
    }
}
