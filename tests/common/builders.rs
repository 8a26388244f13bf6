//! Test data builders for creating test records

use distvis_rs::types::fields;
use distvis_rs::Record;
use serde_json::Value;

/// Builder for distribution records
#[derive(Default)]
pub struct RecordBuilder {
    record: Record,
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn supplier(self, id: &str) -> Self {
        self.field(fields::SUPPLIER_ID, id)
    }

    pub fn category(self, category: &str) -> Self {
        self.field(fields::CATEGORY, category)
    }

    pub fn license(self, license: &str) -> Self {
        self.field(fields::LICENSE_NO, license)
    }

    pub fn model(self, model: &str) -> Self {
        self.field(fields::MODEL, model)
    }

    pub fn customer(self, id: &str) -> Self {
        self.field(fields::CUSTOMER_ID, id)
    }

    pub fn date(self, date: &str) -> Self {
        self.field(fields::DELIVER_DATE, date)
    }

    pub fn number(self, quantity: i64) -> Self {
        self.field(fields::NUMBER, quantity)
    }

    pub fn field(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.record.insert(name, value);
        self
    }

    pub fn build(self) -> Record {
        self.record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_builder() {
        let record = RecordBuilder::new().supplier("S1").number(3).build();

        assert_eq!(record.text(fields::SUPPLIER_ID).as_deref(), Some("S1"));
        assert_eq!(record.quantity(), 3.0);
        assert_eq!(record.len(), 2);
    }
}
