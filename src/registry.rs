//! In-memory contact registry.
//!
//! The registry is append-only: contacts are validated on insertion, stored in
//! insertion order and never changed or removed afterwards. It is not
//! synchronized; mutation requires `&mut self`.

use crate::error::RegistryResult;
use crate::models::{Contact, NewContact};
use tracing::debug;

/// Append-only holder of validated contacts for a single session.
#[derive(Debug, Clone, Default)]
pub struct ContactRegistry {
    contacts: Vec<Contact>,
}

impl ContactRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a contact from three field values.
    ///
    /// Duplicates are accepted. Values are stored exactly as given.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::InvalidArgument` if any field is empty. The
    /// registry is left unchanged in that case.
    pub fn add_contact(
        &mut self,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> RegistryResult<()> {
        let contact = Contact::new(first_name, last_name, phone_number)?;
        self.push(contact);
        Ok(())
    }

    /// Add a contact from a request whose fields may be absent.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::InvalidArgument` if any field is missing or
    /// empty. The registry is left unchanged in that case.
    pub fn register(&mut self, request: NewContact) -> RegistryResult<()> {
        let contact = Contact::try_from(request)?;
        self.push(contact);
        Ok(())
    }

    /// All contacts added so far, in insertion order.
    pub fn get_all_contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Number of stored contacts.
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Whether no contact has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Whether any stored contact matches all three fields exactly.
    pub fn contains(&self, first_name: &str, last_name: &str, phone_number: &str) -> bool {
        self.contacts
            .iter()
            .any(|c| c.matches(first_name, last_name, phone_number))
    }

    fn push(&mut self, contact: Contact) {
        self.contacts.push(contact);
        debug!(count = self.contacts.len(), "Stored contact");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ContactField, ValidationError};
    use crate::error::RegistryError;
    use std::io;
    use std::sync::{Arc, Mutex};

    // Collects formatted tracing output for inspection.
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn with_captured_logs(f: impl FnOnce()) -> String {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        logs.contents()
    }

    #[test]
    fn test_new_registry_is_empty() {
        let registry = ContactRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert!(registry.get_all_contacts().is_empty());
    }

    #[test]
    fn test_add_contact() {
        let mut registry = ContactRegistry::new();
        registry.add_contact("John", "Doe", "0123456789").unwrap();

        let contacts = registry.get_all_contacts();
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].first_name(), "John");
        assert_eq!(contacts[0].last_name(), "Doe");
        assert_eq!(contacts[0].phone_number(), "0123456789");
    }

    #[test]
    fn test_add_contact_keeps_insertion_order() {
        let mut registry = ContactRegistry::new();
        registry.add_contact("John", "Doe", "1").unwrap();
        registry.add_contact("Jane", "Roe", "2").unwrap();
        registry.add_contact("Ann", "Lee", "3").unwrap();

        let first_names: Vec<&str> = registry
            .get_all_contacts()
            .iter()
            .map(Contact::first_name)
            .collect();
        assert_eq!(first_names, ["John", "Jane", "Ann"]);
    }

    #[test]
    fn test_add_contact_allows_duplicates() {
        let mut registry = ContactRegistry::new();
        registry.add_contact("John", "Doe", "0123456789").unwrap();
        registry.add_contact("John", "Doe", "0123456789").unwrap();
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_add_contact_rejects_empty_fields() {
        let mut registry = ContactRegistry::new();

        let err = registry.add_contact("", "Doe", "0123456789").unwrap_err();
        assert_eq!(
            err,
            RegistryError::InvalidArgument(ValidationError::Empty(ContactField::FirstName))
        );
        let err = registry.add_contact("John", "", "0123456789").unwrap_err();
        assert_eq!(
            err,
            RegistryError::InvalidArgument(ValidationError::Empty(ContactField::LastName))
        );
        let err = registry.add_contact("John", "Doe", "").unwrap_err();
        assert_eq!(
            err,
            RegistryError::InvalidArgument(ValidationError::Empty(ContactField::PhoneNumber))
        );

        assert!(registry.is_empty());
    }

    #[test]
    fn test_register_rejects_missing_fields() {
        let mut registry = ContactRegistry::new();
        let request = NewContact {
            last_name: None,
            ..NewContact::new("John", "Doe", "0123456789")
        };

        let err = registry.register(request).unwrap_err();
        assert_eq!(
            err,
            RegistryError::InvalidArgument(ValidationError::Missing(ContactField::LastName))
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn test_register_valid_request() {
        let mut registry = ContactRegistry::new();
        registry
            .register(NewContact::new("John", "Doe", "0123456789"))
            .unwrap();
        assert!(registry.contains("John", "Doe", "0123456789"));
        assert!(!registry.contains("John", "Doe", "0000000000"));
    }

    #[test]
    fn test_rejection_after_success_keeps_existing_contacts() {
        let mut registry = ContactRegistry::new();
        registry.add_contact("John", "Doe", "0123456789").unwrap();
        assert!(registry.add_contact("Jane", "", "555").is_err());
        assert_eq!(registry.len(), 1);
        assert!(registry.contains("John", "Doe", "0123456789"));
    }

    #[test]
    fn test_rejected_input_is_not_logged() {
        let logs = with_captured_logs(|| {
            let mut registry = ContactRegistry::new();
            assert!(registry.add_contact("", "Doe", "0123456789").is_err());
            let request = NewContact {
                phone_number: None,
                ..NewContact::new("John", "Doe", "")
            };
            assert!(registry.register(request).is_err());
        });
        assert!(logs.is_empty(), "unexpected log output: {}", logs);
    }

    #[test]
    fn test_stored_contact_is_logged() {
        let logs = with_captured_logs(|| {
            let mut registry = ContactRegistry::new();
            registry.add_contact("John", "Doe", "0123456789").unwrap();
        });
        assert!(logs.contains("Stored contact"), "log output: {}", logs);
        assert!(!logs.contains("0123456789"), "log output: {}", logs);
    }
}
