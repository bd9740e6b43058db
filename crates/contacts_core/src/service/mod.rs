//! Use-case orchestration over store and persistence.
//!
//! # Responsibility
//! - Provide the stable entry points the interactive front-end calls.
//! - Keep validation and file-format details in the lower layers.
//!
//! # Invariants
//! - Service APIs never bypass model validation or store uniqueness rules.

pub mod contact_service;
