use contact_gatherer::output::{export_records, ExportFormat};
use contact_gatherer::record::ContactRecord;
use tempfile::tempdir;

fn sample_records() -> Vec<ContactRecord> {
    vec![
        ContactRecord {
            url: "https://acme.test".to_string(),
            email: "info@acme.test; sales@acme.test".to_string(),
            phone: "+15551234567".to_string(),
            facebook_profile: "https://www.facebook.com/acme".to_string(),
            ..ContactRecord::default()
        },
        ContactRecord {
            url: "https://münchen.test".to_string(),
            ..ContactRecord::default()
        }
        .with_extra("address", "Marienplatz 1"),
    ]
}

#[test]
fn test_json_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("contacts.json");
    let records = sample_records();

    export_records(&records, &path, ExportFormat::Json).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("münchen"));
    let parsed: Vec<ContactRecord> = serde_json::from_str(&written).unwrap();
    assert_eq!(parsed, records);
}

#[test]
fn test_empty_json_export_writes_brackets() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("contacts.json");

    export_records(&[], &path, ExportFormat::Json).unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
}

#[test]
fn test_empty_csv_export_writes_nothing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("contacts.csv");

    export_records(&[], &path, ExportFormat::Csv).unwrap();

    assert!(!path.exists());
}

#[test]
fn test_empty_xlsx_export_writes_nothing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("contacts.xlsx");

    export_records(&[], &path, ExportFormat::Xlsx).unwrap();

    assert!(!path.exists());
}

#[test]
fn test_csv_header_includes_sorted_extras() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("contacts.csv");

    export_records(&sample_records(), &path, ExportFormat::Csv).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    let mut lines = written.lines();
    assert_eq!(
        lines.next(),
        Some("url,email,phone,facebook_profile,instagram_profile,linkedin_profile,twitter_x_profile,address")
    );
    assert_eq!(
        lines.next(),
        Some("https://acme.test,info@acme.test; sales@acme.test,+15551234567,https://www.facebook.com/acme,,,,")
    );
    assert_eq!(
        lines.next(),
        Some("https://münchen.test,,,,,,,Marienplatz 1")
    );
    assert_eq!(lines.next(), None);
}

#[test]
fn test_xlsx_export_writes_workbook() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("contacts.xlsx");

    export_records(&sample_records(), &path, ExportFormat::Xlsx).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn test_export_failure_is_reported() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing-dir").join("contacts.csv");

    assert!(export_records(&sample_records(), &path, ExportFormat::Csv).is_err());
}
