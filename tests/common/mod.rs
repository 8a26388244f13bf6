//! Common test utilities and helpers

#![allow(dead_code)] // Test utilities may not all be used in every test file

pub mod builders;

use distvis_rs::Record;
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;

use builders::RecordBuilder;

/// Timeout for waiting on background workers
pub fn test_timeout() -> Duration {
    Duration::from_secs(5)
}

/// Assert two floats are approximately equal
pub fn assert_float_eq(a: f64, b: f64, epsilon: f64) {
    assert!(
        (a - b).abs() < epsilon,
        "Expected {} to be approximately equal to {} (epsilon: {})",
        a,
        b,
        epsilon
    );
}

/// Write `contents` to a temp file with the given extension
pub fn write_temp(contents: &str, extension: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(extension)
        .tempfile()
        .unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Small distribution data set with two suppliers and three customers
pub fn sample_records() -> Vec<Record> {
    vec![
        RecordBuilder::new()
            .supplier("S1")
            .category("Catheter")
            .license("L1")
            .model("M1")
            .customer("C1")
            .number(2)
            .date("2024-03-01")
            .build(),
        RecordBuilder::new()
            .supplier("S1")
            .category("Catheter")
            .license("L1")
            .model("M1")
            .customer("C2")
            .number(1)
            .date("2024-03-01")
            .build(),
        RecordBuilder::new()
            .supplier("S1")
            .category("Stent")
            .license("L2")
            .model("M2")
            .customer("C1")
            .number(5)
            .date("2024-01-15")
            .build(),
        RecordBuilder::new()
            .supplier("S2")
            .category("Orthopedic Implant")
            .license("L3")
            .model("M3")
            .customer("C3")
            .date("2024-02-10")
            .build(),
    ]
}
