//! Contact book use-case service.
//!
//! # Responsibility
//! - Own the in-memory store and its data-file path for one session.
//! - Route duplicate adds to the caller instead of overwriting.
//!
//! # Invariants
//! - Diagnostic events are metadata-only: counts and outcomes, never
//!   names, phones or other record content.

use crate::model::contact::{Contact, ContactDraft, ContactValidationError};
use crate::persist::{self, LoadOutcome, PersistError};
use crate::store::contact_store::{ContactStore, ContactUpdate, StoreError, StoreStats};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error wrapping lower-layer failures unchanged.
#[derive(Debug)]
pub enum ServiceError {
    Validation(ContactValidationError),
    Store(StoreError),
    Persist(PersistError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
            Self::Persist(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Store(err) => Some(err),
            Self::Persist(err) => Some(err),
        }
    }
}

impl From<ContactValidationError> for ServiceError {
    fn from(value: ContactValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for ServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<PersistError> for ServiceError {
    fn from(value: PersistError) -> Self {
        Self::Persist(value)
    }
}

/// Outcome of an add attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new record was inserted under the drafted name.
    Added(String),
    /// The name is already taken; nothing changed. The caller decides
    /// whether to route to the update flow.
    DuplicateName(String),
}

/// Session-scoped facade over the store and its data file.
pub struct ContactService {
    store: ContactStore,
    data_path: PathBuf,
}

impl ContactService {
    /// Creates a service with an empty store bound to `data_path`.
    pub fn new(data_path: impl Into<PathBuf>) -> Self {
        Self {
            store: ContactStore::new(),
            data_path: data_path.into(),
        }
    }

    /// Read access for display/search callers.
    pub fn store(&self) -> &ContactStore {
        &self.store
    }

    /// Path of the JSON data file this session persists to.
    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    /// Loads the data file into the store.
    ///
    /// Returns `Ok(true)` when a file was loaded, `Ok(false)` when none
    /// exists yet (the store stays empty). Malformed JSON is an error.
    pub fn load(&mut self) -> ServiceResult<bool> {
        match persist::load_json(&self.data_path)? {
            LoadOutcome::Loaded(store) => {
                self.store = store;
                Ok(true)
            }
            LoadOutcome::MissingFile => Ok(false),
        }
    }

    /// Saves the full store to the data file.
    pub fn save(&self) -> ServiceResult<()> {
        persist::save_json(&self.store, &self.data_path)?;
        Ok(())
    }

    /// Writes a timestamped backup under `dir` and returns its path.
    pub fn backup(&self, dir: &Path) -> ServiceResult<PathBuf> {
        let path = persist::backup_json(&self.store, dir)?;
        Ok(path)
    }

    /// Exports the store as CSV to `path`.
    pub fn export_csv(&self, path: &Path) -> ServiceResult<()> {
        persist::export_csv(&self.store, path)?;
        Ok(())
    }

    /// Validates `draft` and inserts the resulting record.
    ///
    /// An existing name yields [`AddOutcome::DuplicateName`] without
    /// touching the store; the interactive layer offers the update flow
    /// in that case.
    pub fn add_contact(&mut self, draft: ContactDraft) -> ServiceResult<AddOutcome> {
        let (name, contact) = draft.into_record()?;
        if self.store.contains(&name) {
            warn!("event=contact_add_duplicate module=service status=rejected");
            return Ok(AddOutcome::DuplicateName(name));
        }
        self.store.insert(name.clone(), contact)?;
        info!(
            "event=contact_added module=service status=ok store_size={}",
            self.store.len()
        );
        Ok(AddOutcome::Added(name))
    }

    /// Applies a lenient update to `name` and returns the updated record.
    pub fn update_contact(&mut self, name: &str, update: &ContactUpdate) -> ServiceResult<Contact> {
        let updated = self.store.apply_update(name, update)?.clone();
        info!("event=contact_updated module=service status=ok");
        Ok(updated)
    }

    /// Removes `name` when confirmed; returns whether a record was removed.
    pub fn delete_contact(&mut self, name: &str, confirmed: bool) -> ServiceResult<bool> {
        let removed = self.store.remove(name, confirmed)?;
        info!(
            "event=contact_delete module=service status=ok removed={} store_size={}",
            removed,
            self.store.len()
        );
        Ok(removed)
    }

    /// Partial-match search over names and phones, in store order.
    pub fn search_contacts(&self, term: &str) -> Vec<(&str, &Contact)> {
        self.store.search(term)
    }

    /// All contacts in insertion order.
    pub fn list_all(&self) -> Vec<(&str, &Contact)> {
        self.store.iter().collect()
    }

    /// Total and per-group counts.
    pub fn statistics(&self) -> StoreStats {
        self.store.statistics()
    }
}
