//! PhoneNumber value object.

use super::errors::{ContactField, ValidationError};
use serde::{Serialize, Serializer};
use std::fmt;

/// A type-safe wrapper for phone numbers.
///
/// The only rule is that the number is not empty. Formatting characters are
/// kept exactly as entered.
///
/// # Example
///
/// ```
/// use contact_registry::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("0123456789").unwrap();
/// assert_eq!(phone.as_str(), "0123456789");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating that it's not empty.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::Empty` if the phone number is empty.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();
        if phone.is_empty() {
            return Err(ValidationError::Empty(ContactField::PhoneNumber));
        }
        Ok(Self(phone))
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
