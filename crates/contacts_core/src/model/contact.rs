//! Contact record and field validation.
//!
//! # Responsibility
//! - Define the canonical contact record persisted to JSON.
//! - Validate phone/email input before any record is constructed.
//!
//! # Invariants
//! - `phone` is digits-only with 10 to 15 digits.
//! - `email`, when present, matches the `local@domain.tld` pattern.
//! - `updated_at` is never earlier than `created_at`.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

const PHONE_MIN_DIGITS: usize = 10;
const PHONE_MAX_DIGITS: usize = 15;

/// Fallback group label when the caller supplies none.
pub const DEFAULT_GROUP: &str = "Other";

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("valid email regex")
});

/// Validates and normalizes a phone number.
///
/// Strips every non-digit character, then accepts iff the remaining digit
/// count is between 10 and 15 inclusive. Returns the stripped digits on
/// success.
pub fn validate_phone(input: &str) -> Option<String> {
    let digits: String = input.chars().filter(char::is_ascii_digit).collect();
    if (PHONE_MIN_DIGITS..=PHONE_MAX_DIGITS).contains(&digits.len()) {
        Some(digits)
    } else {
        None
    }
}

/// Validates email syntax against a simple `local@domain.tld` pattern.
///
/// The local part allows letters, digits and `._%+-`; the domain allows
/// letters, digits and `.-`; the final label must be at least two letters.
pub fn validate_email(input: &str) -> bool {
    EMAIL_RE.is_match(input)
}

/// Validation error for contact construction input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactValidationError {
    /// Name is required and must be non-empty after trimming.
    EmptyName,
    /// Phone did not normalize to 10-15 digits.
    InvalidPhone(String),
    /// Email was supplied but does not match the accepted pattern.
    InvalidEmail(String),
}

impl Display for ContactValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "contact name cannot be empty"),
            Self::InvalidPhone(value) => {
                write!(f, "invalid phone `{value}`: expected 10-15 digits")
            }
            Self::InvalidEmail(value) => write!(f, "invalid email format: `{value}`"),
        }
    }
}

impl Error for ContactValidationError {}

/// Canonical contact record.
///
/// The contact's name lives outside the record as the store/JSON key, so
/// the persisted shape is exactly `name -> { phone, email, ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Normalized digits-only phone number.
    pub phone: String,
    /// Optional email, validated when present.
    pub email: Option<String>,
    /// Optional free-text address.
    pub address: Option<String>,
    /// Free-text group label used for statistics counting.
    pub group: String,
    /// Set once at creation.
    pub created_at: DateTime<Utc>,
    /// Refreshed on every update, even a field-less one.
    pub updated_at: DateTime<Utc>,
}

impl Contact {
    /// Refreshes `updated_at` to the current instant.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Raw construction input for one contact, prior to validation.
///
/// Optional fields accept blank strings and treat them as absent, matching
/// the interactive "leave blank to skip" convention.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub address: Option<String>,
    pub group: Option<String>,
}

impl ContactDraft {
    /// Validates the draft and produces the store key plus a fresh record.
    ///
    /// # Contract
    /// - Name is trimmed; empty names are rejected.
    /// - Phone is normalized to digits; out-of-range input is rejected.
    /// - Blank email/address/group collapse to absent; a supplied email
    ///   must pass [`validate_email`].
    /// - Missing group defaults to [`DEFAULT_GROUP`].
    /// - Both timestamps are set to the same current instant.
    pub fn into_record(self) -> Result<(String, Contact), ContactValidationError> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(ContactValidationError::EmptyName);
        }

        let phone = validate_phone(&self.phone)
            .ok_or_else(|| ContactValidationError::InvalidPhone(self.phone.clone()))?;

        let email = match self.email.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(value) if validate_email(value) => Some(value.to_string()),
            Some(value) => {
                return Err(ContactValidationError::InvalidEmail(value.to_string()));
            }
        };

        let address = self
            .address
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string);
        let group = self
            .group
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map_or_else(|| DEFAULT_GROUP.to_string(), str::to_string);

        let now = Utc::now();
        Ok((
            name,
            Contact {
                phone,
                email,
                address,
                group,
                created_at: now,
                updated_at: now,
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::{validate_phone, ContactDraft, ContactValidationError};

    #[test]
    fn phone_strips_separators_before_counting() {
        assert_eq!(
            validate_phone("(987) 654-3210").as_deref(),
            Some("9876543210")
        );
    }

    #[test]
    fn draft_trims_name_and_fields() {
        let (name, contact) = ContactDraft {
            name: "  Ada Lovelace  ".to_string(),
            phone: "9876543210".to_string(),
            address: Some("  12 Analytical Row  ".to_string()),
            ..ContactDraft::default()
        }
        .into_record()
        .expect("draft should validate");

        assert_eq!(name, "Ada Lovelace");
        assert_eq!(contact.address.as_deref(), Some("12 Analytical Row"));
    }

    #[test]
    fn draft_rejects_whitespace_only_name() {
        let err = ContactDraft {
            name: "   ".to_string(),
            phone: "9876543210".to_string(),
            ..ContactDraft::default()
        }
        .into_record()
        .expect_err("blank name must fail");
        assert_eq!(err, ContactValidationError::EmptyName);
    }
}
