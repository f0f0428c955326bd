//! Contact Registry - an in-memory, append-only store of validated contacts.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects for names and phone numbers
//! - **models**: The stored `Contact` and the `NewContact` request
//! - **registry**: `ContactRegistry`, the append-only contact store
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **ingest**: Loading newline-delimited JSON requests into a registry
//!
//! # Example
//!
//! ```
//! use contact_registry::{ContactRegistry, RegistryError};
//!
//! let mut registry = ContactRegistry::new();
//! registry.add_contact("John", "Doe", "0123456789").unwrap();
//!
//! let err = registry.add_contact("Jane", "", "0123456789").unwrap_err();
//! assert!(matches!(err, RegistryError::InvalidArgument(_)));
//! assert_eq!(registry.get_all_contacts().len(), 1);
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod ingest;
pub mod models;
pub mod registry;

pub use config::Config;
pub use domain::{ContactField, ValidationError};
pub use error::{ConfigError, IngestError, RegistryError, RegistryResult};
pub use ingest::{ingest, IngestSummary};
pub use models::{Contact, NewContact};
pub use registry::ContactRegistry;
