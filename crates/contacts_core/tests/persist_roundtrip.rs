use contacts_core::{
    backup_json, export_csv, load_json, save_json, ContactDraft, ContactStore, ContactUpdate,
    LoadOutcome, PersistError,
};
use std::fs;
use tempfile::tempdir;

fn sample_store() -> ContactStore {
    let mut store = ContactStore::new();
    for (name, phone, email, address, group) in [
        (
            "Zoe",
            "9876543210",
            Some("zoe@example.com"),
            Some("9 Hill Road"),
            "Friends",
        ),
        ("Alan", "5556667778", None, None, "Work"),
    ] {
        let (key, contact) = ContactDraft {
            name: name.to_string(),
            phone: phone.to_string(),
            email: email.map(str::to_string),
            address: address.map(str::to_string),
            group: Some(group.to_string()),
        }
        .into_record()
        .expect("fixture contact should validate");
        store.insert(key, contact).expect("fixture insert");
    }
    store
}

#[test]
fn save_then_load_reproduces_an_identical_mapping() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("contacts.json");
    let store = sample_store();

    save_json(&store, &path).expect("save should succeed");
    let loaded = match load_json(&path).expect("load should succeed") {
        LoadOutcome::Loaded(loaded) => loaded,
        LoadOutcome::MissingFile => panic!("file was just written"),
    };

    assert_eq!(loaded, store);
    // Key order in the file becomes insertion order again.
    let names: Vec<&str> = loaded.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["Zoe", "Alan"]);
}

#[test]
fn load_missing_file_is_a_recoverable_outcome() {
    let dir = tempdir().expect("temp dir");
    let outcome = load_json(&dir.path().join("absent.json")).expect("missing file is not an error");
    assert!(matches!(outcome, LoadOutcome::MissingFile));
}

#[test]
fn load_malformed_json_propagates_a_parse_error() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("contacts.json");
    fs::write(&path, "{ not json").expect("write fixture");

    let err = load_json(&path).expect_err("malformed json must fail");
    assert!(matches!(err, PersistError::Json(_)));
}

#[test]
fn save_overwrites_an_existing_file() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("contacts.json");
    save_json(&sample_store(), &path).expect("first save");

    let mut smaller = sample_store();
    smaller.remove("Alan", true).expect("remove fixture entry");
    save_json(&smaller, &path).expect("second save");

    let loaded = match load_json(&path).expect("reload") {
        LoadOutcome::Loaded(loaded) => loaded,
        LoadOutcome::MissingFile => panic!("file exists"),
    };
    assert_eq!(loaded.len(), 1);
    assert!(loaded.get("Alan").is_none());
}

#[test]
fn persisted_json_shape_is_name_to_record_object() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("contacts.json");
    save_json(&sample_store(), &path).expect("save should succeed");

    let text = fs::read_to_string(&path).expect("read back");
    let value: serde_json::Value = serde_json::from_str(&text).expect("valid json");
    let object = value.as_object().expect("top level must be an object");
    let zoe = object["Zoe"].as_object().expect("record is an object");
    assert_eq!(zoe["phone"], "9876543210");
    assert_eq!(zoe["email"], "zoe@example.com");
    assert_eq!(object["Alan"]["email"], serde_json::Value::Null);
    assert!(zoe.contains_key("created_at"));
    assert!(zoe.contains_key("updated_at"));
}

#[test]
fn roundtrip_preserves_updated_records() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("contacts.json");
    let mut store = sample_store();
    store
        .apply_update(
            "Alan",
            &ContactUpdate {
                email: Some("alan@example.com".to_string()),
                ..ContactUpdate::default()
            },
        )
        .expect("update fixture entry");

    save_json(&store, &path).expect("save");
    let loaded = match load_json(&path).expect("load") {
        LoadOutcome::Loaded(loaded) => loaded,
        LoadOutcome::MissingFile => panic!("file exists"),
    };
    assert_eq!(
        loaded.get("Alan").expect("Alan exists").email.as_deref(),
        Some("alan@example.com")
    );
}

#[test]
fn backup_filename_embeds_a_second_granularity_timestamp() {
    let dir = tempdir().expect("temp dir");
    let store = sample_store();
    let path = backup_json(&store, dir.path()).expect("backup should succeed");

    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .expect("backup path has a utf-8 file name");
    assert!(file_name.starts_with("backup_"));
    assert!(file_name.ends_with(".json"));
    // backup_YYYYMMDD_HHMMSS.json
    let stamp = &file_name["backup_".len()..file_name.len() - ".json".len()];
    assert_eq!(stamp.len(), 15);
    assert_eq!(&stamp[8..9], "_");
    assert!(stamp
        .chars()
        .enumerate()
        .all(|(i, c)| i == 8 || c.is_ascii_digit()));

    // A backup is a full snapshot with the regular schema.
    let reloaded = match load_json(&path).expect("backup loads") {
        LoadOutcome::Loaded(loaded) => loaded,
        LoadOutcome::MissingFile => panic!("backup exists"),
    };
    assert_eq!(reloaded, store);
}

#[test]
fn csv_export_writes_header_and_empty_cells_for_absent_fields() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("contacts.csv");
    export_csv(&sample_store(), &path).expect("export should succeed");

    let text = fs::read_to_string(&path).expect("read csv");
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("Name,Phone,Email,Address,Group"));
    assert_eq!(
        lines.next(),
        Some("Zoe,9876543210,zoe@example.com,9 Hill Road,Friends")
    );
    assert_eq!(lines.next(), Some("Alan,5556667778,,,Work"));
    assert_eq!(lines.next(), None);
}

#[test]
fn csv_export_quotes_fields_containing_commas() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("contacts.csv");
    let mut store = ContactStore::new();
    let (key, contact) = ContactDraft {
        name: "Doe, Jane".to_string(),
        phone: "9876543210".to_string(),
        address: Some("4 Elm St, Apt 2".to_string()),
        ..ContactDraft::default()
    }
    .into_record()
    .expect("draft should validate");
    store.insert(key, contact).expect("insert fixture");

    export_csv(&store, &path).expect("export should succeed");
    let text = fs::read_to_string(&path).expect("read csv");
    assert!(text.contains("\"Doe, Jane\""));
    assert!(text.contains("\"4 Elm St, Apt 2\""));
}
