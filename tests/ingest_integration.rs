//! File-based parsing through the public API

mod common;

use distvis_rs::ingest::{self, InputFormat};
use distvis_rs::types::fields;
use distvis_rs::{Dashboard, DataSource, ParseError};

const CSV: &str = "SupplierID,Category,LicenseNo,Model,CustomerID,Number\n\
                   S1,X,L1,M1,C1,2\n\
                   S1,X,L1,M1,C2,1\n\
                   S2,Y,L2,M2,C1,4\n";

#[test]
fn test_parse_csv_file() {
    let file = common::write_temp(CSV, ".csv");
    let records = ingest::parse_file(file.path()).unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(records[1].key(fields::CUSTOMER_ID), "C2");
    assert_eq!(records[2].quantity(), 4.0);
}

#[test]
fn test_parse_tab_separated_file() {
    let tsv = "SupplierID\tModel\tCustomerID\nS1\tM 1\tC1\nS2\tM2\n";
    let file = common::write_temp(tsv, ".tsv");
    let records = ingest::parse_file(file.path()).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].key(fields::MODEL), "M 1");
    assert!(!records[1].contains(fields::CUSTOMER_ID));
}

#[test]
fn test_parse_json_file() {
    let json = r#"
        [
            {"SupplierID": "S1", "Model": "M1", "Number": 3},
            {"SupplierID": "S2", "Model": null}
        ]
    "#;
    let file = common::write_temp(json, ".json");
    let records = ingest::parse_file(file.path()).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].quantity(), 3.0);
    assert!(records[1].text(fields::MODEL).is_none());
}

#[test]
fn test_json_extension_forces_json() {
    assert_eq!(InputFormat::for_file("data.json", "{}"), InputFormat::Json);
    assert_eq!(InputFormat::for_file("data.csv", "a,b"), InputFormat::Delimited);

    let file = common::write_temp("{\"SupplierID\": \"S1\"}", ".json");
    let err = ingest::parse_file(file.path()).unwrap_err();
    assert!(matches!(err, ParseError::NotAnArray));
}

#[test]
fn test_byte_order_mark_is_ignored() {
    let file = common::write_temp("\u{feff}SupplierID,Model\nS1,M1\n", ".csv");
    let records = ingest::parse_file(file.path()).unwrap();
    assert_eq!(records[0].key(fields::SUPPLIER_ID), "S1");
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ingest::parse_file(dir.path().join("missing.csv")).unwrap_err();
    assert!(matches!(err, ParseError::Io(_)));
}

#[test]
fn test_dashboard_file_load_and_failed_reload() {
    let good = common::write_temp(CSV, ".csv");
    let bad = common::write_temp("[{\"SupplierID\": \"S3\"},", ".json");

    let mut dashboard = Dashboard::new();
    assert_eq!(dashboard.load_file(good.path()).unwrap(), 3);
    assert_eq!(dashboard.source(), &DataSource::File(good.path().to_path_buf()));

    let err = dashboard.load_file(bad.path()).unwrap_err();
    assert!(err.is_json());
    assert!(!err.user_message().is_empty());
    assert_eq!(dashboard.records().len(), 3);
    assert_eq!(dashboard.source(), &DataSource::File(good.path().to_path_buf()));
}
