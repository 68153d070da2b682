use thiserror::Error;

use crate::validation::ValidationError;

/// Errors produced by console operations.
///
/// `Validation` never reaches the network and stays with the form that raised
/// it; everything else crosses the services boundary and is flattened to the
/// owning collection's `error` string after being logged.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    Transport(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Remote(String),
}

impl ApiError {
    /// True for client-side precondition failures that were never dispatched.
    pub fn is_validation(&self) -> bool {
        matches!(self, ApiError::Validation(_))
    }

    /// True when the backend reported the session invalid or the role
    /// insufficient. Services react by invalidating the session guard.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized(_))
    }
}
