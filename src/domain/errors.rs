//! Domain validation errors.

use std::fmt;
use thiserror::Error;

/// The contact field a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    FirstName,
    LastName,
    PhoneNumber,
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FirstName => write!(f, "first name"),
            Self::LastName => write!(f, "last name"),
            Self::PhoneNumber => write!(f, "phone number"),
        }
    }
}

/// Errors that can occur during domain value object validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The field was not provided at all.
    #[error("{0} is required")]
    Missing(ContactField),

    /// The field was provided but is an empty string.
    #[error("{0} cannot be empty")]
    Empty(ContactField),
}

impl ValidationError {
    /// The field that failed validation.
    pub fn field(&self) -> ContactField {
        match self {
            Self::Missing(field) | Self::Empty(field) => *field,
        }
    }
}
