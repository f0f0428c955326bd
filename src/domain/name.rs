//! PersonName value object.

use super::errors::{ContactField, ValidationError};
use serde::{Serialize, Serializer};
use std::fmt;

/// A type-safe wrapper for a contact's first or last name.
///
/// A `PersonName` can never be empty. The value is stored as given: no
/// trimming and no case folding.
///
/// # Example
///
/// ```
/// use contact_registry::domain::{ContactField, PersonName};
///
/// let name = PersonName::new("John", ContactField::FirstName).unwrap();
/// assert_eq!(name.as_str(), "John");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PersonName(String);

impl PersonName {
    /// Create a new PersonName, validating that it's not empty.
    ///
    /// `field` is only used to label the error.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::Empty` if the provided name is empty.
    pub fn new(name: impl Into<String>, field: ContactField) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::Empty(field));
        }
        Ok(Self(name))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Serde support - serialize as string
impl Serialize for PersonName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
