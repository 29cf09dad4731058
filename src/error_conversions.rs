//! Error conversion glue between the domain, form and service layers.
//!
//! The domain layer must not depend on service error types, so the
//! conversions live here instead of next to the error definitions.

use crate::domain::types::TypeConstraintError;
use crate::forms::FormError;
use crate::services::ServiceError;

impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::TypeConstraint(val.to_string())
    }
}

impl From<FormError> for ServiceError {
    fn from(val: FormError) -> Self {
        match val {
            FormError::InvalidClientId => ServiceError::InvalidId,
            FormError::TypeConstraint(err) => err.into(),
            other => ServiceError::Form(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_id_maps_to_invalid_id() {
        assert_eq!(
            ServiceError::from(FormError::InvalidClientId),
            ServiceError::InvalidId
        );
    }

    #[test]
    fn constraint_errors_keep_their_message() {
        assert_eq!(
            ServiceError::from(FormError::TypeConstraint(
                TypeConstraintError::InvertedWindow
            )),
            ServiceError::TypeConstraint(
                "working hours start must not be after end".to_string()
            )
        );
        assert_eq!(
            ServiceError::from(FormError::LeadCountAboveCapacity),
            ServiceError::Form("lead count exceeds capacity".to_string())
        );
    }
}
