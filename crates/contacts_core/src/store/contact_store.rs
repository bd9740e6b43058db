//! Insertion-ordered contact store and its CRUD surface.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the name -> contact mapping.
//! - Implement partial-match search and group statistics by linear scan.
//!
//! # Invariants
//! - Names are unique, case-sensitive keys.
//! - `apply_update` always refreshes `updated_at`, even when every supplied
//!   field is blank or invalid.
//! - Search matches are returned in store (insertion) order.

use crate::model::contact::{validate_email, validate_phone, Contact};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level error for CRUD operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Insert attempted with a name that already exists.
    DuplicateName(String),
    /// Operation referenced a name absent from the store.
    NotFound(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateName(name) => write!(f, "contact `{name}` already exists"),
            Self::NotFound(name) => write!(f, "contact not found: `{name}`"),
        }
    }
}

impl Error for StoreError {}

/// Optional per-field input for an update.
///
/// # Contract
/// Each field is applied only when supplied non-blank, and for phone/email
/// only when it validates. Invalid supplied values are silently ignored and
/// the old value kept. This lenient policy is deliberate and matches the
/// interactive "leave blank to keep old value" flow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactUpdate {
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub group: Option<String>,
}

/// Aggregated counts for the statistics view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreStats {
    /// Total number of stored contacts.
    pub total: usize,
    /// Count per group label, keys taken verbatim from records.
    pub by_group: BTreeMap<String, usize>,
}

/// The in-memory name -> contact mapping.
///
/// Backed by a plain vector: lookups are linear scans, which is the
/// intended access pattern for an interactive, single-user book.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactStore {
    entries: Vec<(String, Contact)>,
}

impl ContactStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from already-validated entries, keeping first
    /// occurrence when a name repeats.
    ///
    /// Used by the load path, where JSON object keys are unique by
    /// construction.
    pub fn from_entries(entries: impl IntoIterator<Item = (String, Contact)>) -> Self {
        let mut store = Self::new();
        for (name, contact) in entries {
            if !store.contains(&name) {
                store.entries.push((name, contact));
            }
        }
        store
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns whether `name` is present as an exact, case-sensitive key.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(key, _)| key == name)
    }

    /// Gets one contact by exact name.
    pub fn get(&self, name: &str) -> Option<&Contact> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, contact)| contact)
    }

    /// Inserts a new contact under `name`.
    ///
    /// Fails with [`StoreError::DuplicateName`] when the name exists; the
    /// caller decides whether to route to an update instead. Never
    /// overwrites.
    pub fn insert(&mut self, name: String, contact: Contact) -> StoreResult<()> {
        if self.contains(&name) {
            return Err(StoreError::DuplicateName(name));
        }
        self.entries.push((name, contact));
        Ok(())
    }

    /// Applies a lenient field-by-field update to an existing contact.
    ///
    /// Fails with [`StoreError::NotFound`] when `name` is absent. See
    /// [`ContactUpdate`] for the per-field policy. `updated_at` is
    /// refreshed on every invocation. Returns the updated record.
    pub fn apply_update(&mut self, name: &str, update: &ContactUpdate) -> StoreResult<&Contact> {
        let entry = self
            .entries
            .iter_mut()
            .find(|(key, _)| key == name)
            .ok_or_else(|| StoreError::NotFound(name.to_string()))?;
        let contact = &mut entry.1;

        if let Some(digits) = update.phone.as_deref().and_then(validate_phone) {
            contact.phone = digits;
        }
        if let Some(email) = supplied(&update.email) {
            if validate_email(email) {
                contact.email = Some(email.to_string());
            }
        }
        if let Some(address) = supplied(&update.address) {
            contact.address = Some(address.to_string());
        }
        if let Some(group) = supplied(&update.group) {
            contact.group = group.to_string();
        }
        contact.touch();

        Ok(contact)
    }

    /// Removes `name` when `confirmed` is true.
    ///
    /// Fails with [`StoreError::NotFound`] when absent. Without
    /// confirmation the contact is kept and `Ok(false)` reported; this is
    /// a no-op, not an error.
    pub fn remove(&mut self, name: &str, confirmed: bool) -> StoreResult<bool> {
        let index = self
            .entries
            .iter()
            .position(|(key, _)| key == name)
            .ok_or_else(|| StoreError::NotFound(name.to_string()))?;
        if !confirmed {
            return Ok(false);
        }
        self.entries.remove(index);
        Ok(true)
    }

    /// Partial-match search over names and phones.
    ///
    /// Case-insensitive substring match on the name, plain substring match
    /// on the normalized phone. An empty result is not an error.
    pub fn search(&self, term: &str) -> Vec<(&str, &Contact)> {
        let folded = term.to_lowercase();
        self.entries
            .iter()
            .filter(|(name, contact)| {
                name.to_lowercase().contains(&folded) || contact.phone.contains(&folded)
            })
            .map(|(name, contact)| (name.as_str(), contact))
            .collect()
    }

    /// Iterates all contacts in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Contact)> {
        self.entries
            .iter()
            .map(|(name, contact)| (name.as_str(), contact))
    }

    /// Computes total and per-group counts.
    ///
    /// Group keys are counted verbatim, with no case or whitespace
    /// normalization.
    pub fn statistics(&self) -> StoreStats {
        let mut by_group = BTreeMap::new();
        for (_, contact) in &self.entries {
            *by_group.entry(contact.group.clone()).or_insert(0) += 1;
        }
        StoreStats {
            total: self.entries.len(),
            by_group,
        }
    }
}

fn supplied(field: &Option<String>) -> Option<&str> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}
