//! In-memory contact storage.
//!
//! # Responsibility
//! - Own the single name-keyed mapping behind every use-case.
//! - Enforce key uniqueness and the lenient field-update policy.
//!
//! # Invariants
//! - Iteration order is insertion order.
//! - Inserting an existing name fails instead of overwriting.

pub mod contact_store;
