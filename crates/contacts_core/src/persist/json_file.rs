//! JSON save/load and timestamped backups.
//!
//! # Responsibility
//! - Round-trip the store through a pretty-printed JSON object.
//! - Name backup files with a second-granularity local timestamp.
//!
//! # Invariants
//! - `save_json` overwrites the destination file.
//! - Two backups within the same second target the same filename and the
//!   later one overwrites silently.

use crate::model::contact::Contact;
use crate::persist::PersistResult;
use crate::store::contact_store::ContactStore;
use chrono::Local;
use log::info;
use serde_json::{Map, Value};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// `strftime` pattern embedded in backup filenames.
pub const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Result of a load attempt.
#[derive(Debug)]
pub enum LoadOutcome {
    /// File existed and parsed; store holds its contents in file order.
    Loaded(ContactStore),
    /// No file at the given path; the caller starts with an empty store.
    MissingFile,
}

/// Serializes the full store to `path` as a pretty-printed JSON object.
pub fn save_json(store: &ContactStore, path: &Path) -> PersistResult<()> {
    let mut object = Map::with_capacity(store.len());
    for (name, contact) in store.iter() {
        object.insert(name.to_string(), serde_json::to_value(contact)?);
    }
    let text = serde_json::to_string_pretty(&Value::Object(object))?;
    fs::write(path, text)?;
    info!(
        "event=store_saved module=persist status=ok contacts={}",
        store.len()
    );
    Ok(())
}

/// Loads the store from `path`.
///
/// Returns [`LoadOutcome::MissingFile`] when nothing exists at `path`.
/// Malformed JSON propagates as [`crate::persist::PersistError::Json`];
/// there is no repair logic.
pub fn load_json(path: &Path) -> PersistResult<LoadOutcome> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            info!("event=store_load_skipped module=persist status=ok reason=missing_file");
            return Ok(LoadOutcome::MissingFile);
        }
        Err(err) => return Err(err.into()),
    };

    // preserve_order keeps the file's key order, which becomes insertion
    // order in the rebuilt store.
    let object: Map<String, Value> = serde_json::from_str(&text)?;
    let mut entries = Vec::with_capacity(object.len());
    for (name, value) in object {
        let contact: Contact = serde_json::from_value(value)?;
        entries.push((name, contact));
    }
    let store = ContactStore::from_entries(entries);
    info!(
        "event=store_loaded module=persist status=ok contacts={}",
        store.len()
    );
    Ok(LoadOutcome::Loaded(store))
}

/// Writes a full JSON snapshot to `dir/backup_YYYYMMDD_HHMMSS.json`.
///
/// Returns the backup path. Filenames are time-unique at second
/// granularity; a second backup within the same second overwrites.
pub fn backup_json(store: &ContactStore, dir: &Path) -> PersistResult<PathBuf> {
    let stamp = Local::now().format(BACKUP_TIMESTAMP_FORMAT);
    let path = dir.join(format!("backup_{stamp}.json"));
    save_json(store, &path)?;
    Ok(path)
}
