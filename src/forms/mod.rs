//! Form definitions backing the lead routing API.

use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::types::TypeConstraintError;

pub mod client;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid client id")]
    InvalidClientId,

    #[error("invalid name")]
    InvalidName,

    #[error("lead count exceeds capacity")]
    LeadCountAboveCapacity,

    #[error(transparent)]
    TypeConstraint(#[from] TypeConstraintError),
}
