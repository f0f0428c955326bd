//! Contact model representing a person stored in the registry.

use crate::domain::{ContactField, PersonName, PhoneNumber, ValidationError};
use serde::{Deserialize, Serialize};

/// A contact stored in the registry.
///
/// Every field is a validated value object, so a `Contact` always has a
/// non-empty first name, last name and phone number. Contacts have no
/// identity beyond their field values and are never modified once built.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", try_from = "NewContact")]
pub struct Contact {
    first_name: PersonName,
    last_name: PersonName,
    phone_number: PhoneNumber,
}

impl Contact {
    /// Build a contact from raw field values.
    ///
    /// Fields are checked in order first name, last name, phone number and the
    /// first failure is returned.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            first_name: PersonName::new(first_name, ContactField::FirstName)?,
            last_name: PersonName::new(last_name, ContactField::LastName)?,
            phone_number: PhoneNumber::new(phone_number)?,
        })
    }

    /// First name
    pub fn first_name(&self) -> &str {
        self.first_name.as_str()
    }

    /// Last name
    pub fn last_name(&self) -> &str {
        self.last_name.as_str()
    }

    /// Phone number
    pub fn phone_number(&self) -> &str {
        self.phone_number.as_str()
    }

    /// Whether all three fields equal the given values exactly.
    pub fn matches(&self, first_name: &str, last_name: &str, phone_number: &str) -> bool {
        self.first_name() == first_name
            && self.last_name() == last_name
            && self.phone_number() == phone_number
    }
}

/// Request payload for registering a contact.
///
/// Fields are optional so that absent (or JSON `null`) values can be reported
/// as missing instead of being rejected by the deserializer.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct NewContact {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
}

impl NewContact {
    /// Create a request with all three fields present.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
            phone_number: Some(phone_number.into()),
        }
    }
}

fn required(value: Option<String>, field: ContactField) -> Result<String, ValidationError> {
    value.ok_or(ValidationError::Missing(field))
}

impl TryFrom<NewContact> for Contact {
    type Error = ValidationError;

    fn try_from(request: NewContact) -> Result<Self, Self::Error> {
        let first_name = required(request.first_name, ContactField::FirstName)?;
        let first_name = PersonName::new(first_name, ContactField::FirstName)?;
        let last_name = required(request.last_name, ContactField::LastName)?;
        let last_name = PersonName::new(last_name, ContactField::LastName)?;
        let phone_number = required(request.phone_number, ContactField::PhoneNumber)?;
        let phone_number = PhoneNumber::new(phone_number)?;

        Ok(Self {
            first_name,
            last_name,
            phone_number,
        })
    }
}
