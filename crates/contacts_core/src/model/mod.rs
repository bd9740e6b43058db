//! Domain model for the contact book.
//!
//! # Responsibility
//! - Define the canonical contact record used by core business logic.
//! - Own phone/email format validation.
//!
//! # Invariants
//! - A contact's name is the unique store key, never a record field.
//! - Every constructed record carries a normalized, digits-only phone.

pub mod contact;
