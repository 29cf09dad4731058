use thiserror::Error;

use crate::repository::errors::RepositoryError;

/// Errors surfaced by the service layer to the HTTP adapter.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("client id cannot be empty")]
    InvalidId,

    #[error("invalid input: {0}")]
    Form(String),

    #[error("type constraint violation: {0}")]
    TypeConstraint(String),

    #[error("client already exists: {0}")]
    DuplicateId(String),

    #[error("entity not found")]
    NotFound,

    /// The selected client was exhausted or removed before the lead could be
    /// committed. Callers may retry the whole assignment.
    #[error("lead assignment to client {0} failed")]
    AssignmentFailed(String),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            RepositoryError::AlreadyExists(id) => ServiceError::DuplicateId(id),
            // Only the assignment path increments, and it reports a full
            // client as `AssignmentFailed` before reaching this conversion.
            RepositoryError::CapacityExceeded(id) => {
                ServiceError::Internal(format!("client {id} is at capacity"))
            }
            RepositoryError::Unexpected(message) => ServiceError::Internal(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repository_errors_map_onto_service_errors() {
        assert_eq!(
            ServiceError::from(RepositoryError::NotFound),
            ServiceError::NotFound
        );
        assert_eq!(
            ServiceError::from(RepositoryError::AlreadyExists("7".to_string())),
            ServiceError::DuplicateId("7".to_string())
        );
        assert_eq!(
            ServiceError::from(RepositoryError::CapacityExceeded("7".to_string())),
            ServiceError::Internal("client 7 is at capacity".to_string())
        );
        assert_eq!(
            ServiceError::from(RepositoryError::Unexpected("poisoned".to_string())),
            ServiceError::Internal("poisoned".to_string())
        );
    }
}
