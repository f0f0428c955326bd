//! Domain value objects and types.
//!
//! Type-safe wrappers for the fields of a contact. Each value object is
//! validated at construction time, so an empty name or phone number cannot be
//! represented in a stored contact.

pub mod errors;
pub mod name;
pub mod phone;

pub use errors::{ContactField, ValidationError};
pub use name::PersonName;
pub use phone::PhoneNumber;
