//! Test to verify test infrastructure works correctly

mod common;

use common::builders::RecordBuilder;
use distvis_rs::types::fields;

#[test]
fn test_infrastructure_setup() {
    let record = RecordBuilder::new()
        .supplier("S9")
        .field(fields::LOT_NO, "LOT-1")
        .build();

    assert_eq!(record.key(fields::SUPPLIER_ID), "S9");
    assert_eq!(record.key(fields::LOT_NO), "LOT-1");
    assert_eq!(common::sample_records().len(), 4);
}

#[test]
fn test_temp_file_helper() {
    let file = common::write_temp("a,b\n1,2\n", ".csv");
    let text = std::fs::read_to_string(file.path()).unwrap();
    assert_eq!(text, "a,b\n1,2\n");
    assert_eq!(file.path().extension().unwrap(), "csv");
}

#[test]
fn test_float_comparison() {
    common::assert_float_eq(1.0, 1.0000001, 0.001);
}

#[test]
#[should_panic]
fn test_float_comparison_fails() {
    common::assert_float_eq(1.0, 2.0, 0.001);
}
