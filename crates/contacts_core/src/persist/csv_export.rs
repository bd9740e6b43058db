//! CSV export of the contact store.
//!
//! # Responsibility
//! - Write one `Name,Phone,Email,Address,Group` row per contact.
//!
//! # Invariants
//! - Rows follow store (insertion) order.
//! - Absent email/address render as empty cells, never a "None" literal.

use crate::persist::PersistResult;
use crate::store::contact_store::ContactStore;
use log::info;
use std::path::Path;

const CSV_HEADER: [&str; 5] = ["Name", "Phone", "Email", "Address", "Group"];

/// Exports the full store to `path`, overwriting any existing file.
///
/// Standard CSV quoting applies; fields containing commas or quotes are
/// escaped by the writer.
pub fn export_csv(store: &ContactStore, path: &Path) -> PersistResult<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(CSV_HEADER)?;
    for (name, contact) in store.iter() {
        writer.write_record([
            name,
            contact.phone.as_str(),
            contact.email.as_deref().unwrap_or(""),
            contact.address.as_deref().unwrap_or(""),
            contact.group.as_str(),
        ])?;
    }
    writer.flush()?;
    info!(
        "event=store_exported module=persist status=ok format=csv contacts={}",
        store.len()
    );
    Ok(())
}
