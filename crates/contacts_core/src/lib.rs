//! Core domain logic for the contact book.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod persist;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::contact::{
    validate_email, validate_phone, Contact, ContactDraft, ContactValidationError, DEFAULT_GROUP,
};
pub use persist::{
    backup_json, export_csv, load_json, save_json, LoadOutcome, PersistError, PersistResult,
};
pub use service::contact_service::{AddOutcome, ContactService, ServiceError, ServiceResult};
pub use store::contact_store::{
    ContactStore, ContactUpdate, StoreError, StoreResult, StoreStats,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
