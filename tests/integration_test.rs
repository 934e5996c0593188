//! Integration tests for contactr
//!
//! These tests verify end-to-end functionality by generating batches and
//! round-tripping them through CSV files.

use std::path::Path;

use contactr::export;
use contactr::generate::{ContactType, GenerateSpec, TagMode, build_rows};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Helper function to build a baseline email generation spec
fn email_spec(valid: u32, invalid: u32) -> GenerateSpec {
    GenerateSpec {
        contact_type: ContactType::Email,
        valid_count: valid,
        invalid_count: invalid,
        first_name: "John".into(),
        last_name: "Doe".into(),
        email_prefix: "John".into(),
        email_domain: "example.com".into(),
        tag_expression: String::new(),
        tag_mode: TagMode::All,
    }
}

/// Helper function to read an exported CSV back as (header, records)
fn read_csv(path: &Path) -> (Vec<String>, Vec<Vec<String>>) {
    let mut rdr = csv::Reader::from_path(path).unwrap();
    let header = rdr
        .headers()
        .unwrap()
        .iter()
        .map(ToString::to_string)
        .collect();
    let records = rdr
        .records()
        .map(|r| r.unwrap().iter().map(ToString::to_string).collect())
        .collect();
    (header, records)
}

#[test]
fn test_generate_and_export_round_trip() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut spec = email_spec(4, 2);
    spec.tag_expression = "a;b;a;;".into();
    let rows = build_rows(&spec, &mut rng);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("contacts.csv");
    export::export_to_path(&rows, spec.contact_type, &path).unwrap();

    let (header, records) = read_csv(&path);
    assert_eq!(header, vec!["email", "firstname", "lastname", "tag"]);
    assert_eq!(records.len(), rows.len());

    for (row, record) in rows.iter().zip(&records) {
        assert_eq!(record[0], row.identifier);
        assert_eq!(record[1], row.firstname);
        assert_eq!(record[2], row.lastname);
        assert_eq!(record[3], row.tag);
    }
}

#[test]
fn test_spec_scenario_two_valid_one_invalid() {
    let mut rng = StdRng::seed_from_u64(0);
    let rows = build_rows(&email_spec(2, 1), &mut rng);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("contacts.csv");
    export::export_to_path(&rows, ContactType::Email, &path).unwrap();

    let (_, records) = read_csv(&path);
    assert_eq!(
        records,
        vec![
            vec!["John1@example.com", "John1", "Doe", ""],
            vec!["John2@example.com", "John2", "Doe", ""],
            vec!["John3", "John3", "Doe", ""],
        ]
    );
}

#[test]
fn test_sms_round_trip_uses_phone_header() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut spec = email_spec(3, 1);
    spec.contact_type = ContactType::Sms;
    spec.tag_expression = "vip".into();
    let rows = build_rows(&spec, &mut rng);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sms.csv");
    export::export_to_path(&rows, spec.contact_type, &path).unwrap();

    let (header, records) = read_csv(&path);
    assert_eq!(header, vec!["phone", "firstname", "lastname", "tag"]);
    assert_eq!(records.len(), 4);
    for record in &records[..3] {
        assert!(record[0].starts_with('+'));
        assert_eq!(record[3], "vip");
    }
    // The malformed row is too short to be a phone number
    assert_eq!(records[3][0].len(), 3);
}

#[test]
fn test_tag_values_with_semicolons_survive_round_trip() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut spec = email_spec(2, 1);
    spec.tag_expression = "zebra;apple;zebra".into();
    let rows = build_rows(&spec, &mut rng);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tagged.csv");
    export::export_to_path(&rows, spec.contact_type, &path).unwrap();

    let (_, records) = read_csv(&path);
    // Valid rows: deduplicated, first-occurrence order
    assert_eq!(records[0][3], "zebra;apple");
    assert_eq!(records[1][3], "zebra;apple");
    // Invalid row: raw expression
    assert_eq!(records[2][3], "zebra;apple;zebra");
}

#[test]
fn test_empty_batch_exports_header_only() {
    let mut rng = StdRng::seed_from_u64(0);
    let rows = build_rows(&email_spec(0, 0), &mut rng);
    assert!(rows.is_empty());

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.csv");
    export::export_to_path(&rows, ContactType::Email, &path).unwrap();

    let (header, records) = read_csv(&path);
    assert_eq!(header, vec!["email", "firstname", "lastname", "tag"]);
    assert!(records.is_empty());
}
