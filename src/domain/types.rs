//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (non-empty identifiers and labels,
//! ordered working-hours windows) so that once a value reaches the domain
//! layer it can be treated as trusted.
use std::fmt::{Display, Formatter};
use std::ops::Deref;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided identifier carried leading or trailing whitespace.
    #[error("value must not have surrounding whitespace")]
    SurroundingWhitespace,
    /// Provided timestamp matched none of the accepted formats.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),
    /// Window start lies after its end.
    #[error("working hours start must not be after end")]
    InvertedWindow,
}

/// Wrapper for non-empty, trimmed strings.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NonEmptyString(String);

impl NonEmptyString {
    /// Trims whitespace and rejects empty inputs.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self(trimmed))
    }

    /// Consume the wrapper returning the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

fn trimmed_non_empty(value: String) -> Result<String, TypeConstraintError> {
    NonEmptyString::new(value).map(NonEmptyString::into_inner)
}

/// Rejects padded identifiers instead of stripping them.
fn exact_non_empty(value: String) -> Result<String, TypeConstraintError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(TypeConstraintError::EmptyString);
    }
    if trimmed.len() != value.len() {
        return Err(TypeConstraintError::SurroundingWhitespace);
    }
    Ok(value)
}

macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr, $check:ident) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Constructs a validated, non-empty value.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                $check(value.into()).map(Self)
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

non_empty_string_newtype!(
    ClientId,
    "Externally assigned client identifier, stored exactly as given.",
    exact_non_empty
);

non_empty_string_newtype!(
    ClientName,
    "Client display name wrapper; surrounding whitespace is trimmed.",
    trimmed_non_empty
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_id_is_kept_verbatim() {
        assert_eq!(ClientId::new("8").unwrap().as_str(), "8");
        assert_eq!(ClientId::new("client 8").unwrap().as_str(), "client 8");
        assert_eq!(ClientId::new(""), Err(TypeConstraintError::EmptyString));
        assert_eq!(ClientId::new("   "), Err(TypeConstraintError::EmptyString));
        assert_eq!(
            ClientId::new("  8 "),
            Err(TypeConstraintError::SurroundingWhitespace)
        );
        assert!(serde_json::from_str::<ClientId>("\" 8\"").is_err());
    }

    #[test]
    fn client_name_is_trimmed() {
        assert_eq!(ClientName::new("  Client RR ").unwrap().as_str(), "Client RR");
    }

    #[test]
    fn client_name_deserialization_is_validated() {
        let name: ClientName = serde_json::from_str("\"Client ABC\"").unwrap();
        assert_eq!(name.as_str(), "Client ABC");

        let blank = serde_json::from_str::<ClientName>("\" \"");
        assert!(blank.is_err());
    }
}
