use contacts_core::{
    validate_email, validate_phone, ContactDraft, ContactValidationError, DEFAULT_GROUP,
};

#[test]
fn phone_accepts_ten_to_fifteen_digits() {
    assert_eq!(validate_phone("9876543210").as_deref(), Some("9876543210"));
    assert_eq!(
        validate_phone("123456789012345").as_deref(),
        Some("123456789012345")
    );
}

#[test]
fn phone_rejects_out_of_range_digit_counts() {
    assert_eq!(validate_phone("123"), None);
    assert_eq!(validate_phone("123456789"), None);
    assert_eq!(validate_phone("1234567890123456"), None);
    assert_eq!(validate_phone(""), None);
}

#[test]
fn phone_strips_non_digits_before_counting() {
    assert_eq!(
        validate_phone("+1 (987) 654-3210").as_deref(),
        Some("19876543210")
    );
    // Separators alone cannot rescue a short number.
    assert_eq!(validate_phone("12-34-56"), None);
}

#[test]
fn email_accepts_simple_well_formed_addresses() {
    assert!(validate_email("test@gmail.com"));
    assert!(validate_email("first.last+tag@sub.domain.org"));
    assert!(validate_email("a@b.co"));
}

#[test]
fn email_rejects_malformed_addresses() {
    assert!(!validate_email("wrongemail"));
    assert!(!validate_email("a@b.c")); // final label shorter than 2 letters
    assert!(!validate_email("@domain.com"));
    assert!(!validate_email("user@"));
    assert!(!validate_email("user@domain"));
}

#[test]
fn draft_defaults_group_to_other() {
    let (_, contact) = ContactDraft {
        name: "Grace".to_string(),
        phone: "9876543210".to_string(),
        ..ContactDraft::default()
    }
    .into_record()
    .expect("minimal draft should validate");
    assert_eq!(contact.group, DEFAULT_GROUP);
    assert_eq!(contact.email, None);
    assert_eq!(contact.address, None);
}

#[test]
fn draft_treats_blank_optional_fields_as_absent() {
    let (_, contact) = ContactDraft {
        name: "Grace".to_string(),
        phone: "9876543210".to_string(),
        email: Some("   ".to_string()),
        address: Some("".to_string()),
        group: Some("  ".to_string()),
    }
    .into_record()
    .expect("blank optionals should validate");
    assert_eq!(contact.email, None);
    assert_eq!(contact.address, None);
    assert_eq!(contact.group, DEFAULT_GROUP);
}

#[test]
fn draft_rejects_invalid_phone_and_email() {
    let err = ContactDraft {
        name: "Grace".to_string(),
        phone: "123".to_string(),
        ..ContactDraft::default()
    }
    .into_record()
    .expect_err("short phone must fail");
    assert!(matches!(err, ContactValidationError::InvalidPhone(_)));

    let err = ContactDraft {
        name: "Grace".to_string(),
        phone: "9876543210".to_string(),
        email: Some("wrongemail".to_string()),
        ..ContactDraft::default()
    }
    .into_record()
    .expect_err("bad email must fail");
    assert!(matches!(err, ContactValidationError::InvalidEmail(_)));
}

#[test]
fn draft_sets_both_timestamps_to_creation_instant() {
    let (_, contact) = ContactDraft {
        name: "Grace".to_string(),
        phone: "9876543210".to_string(),
        ..ContactDraft::default()
    }
    .into_record()
    .expect("draft should validate");
    assert_eq!(contact.created_at, contact.updated_at);
}
