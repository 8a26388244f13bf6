//! Per-record activity feed.
//!
//! The feed lists the first records of a set as distribution events, a page
//! of [`ACTIVITY_PAGE_SIZE`] at a time.

use crate::types::{fields, Record};
use rust_i18n::t;
use serde::Serialize;

/// Entries shown initially and added by each "load more"
pub const ACTIVITY_PAGE_SIZE: usize = 5;

/// One distribution event
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityEntry {
    pub supplier: String,
    pub delivered: String,
    /// `Number` as written, or the coerced quantity when it is missing
    pub units: String,
    /// `DeviceNAME`, falling back to `Model` when empty or missing
    pub device: String,
    pub customer: String,
    pub license: String,
}

impl ActivityEntry {
    pub fn from_record(record: &Record) -> Self {
        let device = record
            .text(fields::DEVICE_NAME)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| record.key(fields::MODEL));

        Self {
            supplier: record.key(fields::SUPPLIER_ID),
            delivered: record.key(fields::DELIVER_DATE),
            units: record
                .text(fields::NUMBER)
                .unwrap_or_else(|| record.quantity().to_string()),
            device,
            customer: record.key(fields::CUSTOMER_ID),
            license: record.key(fields::LICENSE_NO),
        }
    }

    /// "Distributed N unit(s) of ... to customer ..." in the current language
    pub fn description(&self) -> String {
        t!(
            "activity_distributed",
            units = &self.units,
            device = &self.device,
            customer = &self.customer
        )
        .to_string()
    }

    pub fn license_line(&self) -> String {
        t!("activity_license", license = &self.license).to_string()
    }
}

/// The first `limit` entries of a record set
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityFeed {
    pub entries: Vec<ActivityEntry>,
    /// Number of records in the full set
    pub total: usize,
}

impl ActivityFeed {
    pub fn new(records: &[Record], limit: usize) -> Self {
        Self {
            entries: records
                .iter()
                .take(limit)
                .map(ActivityEntry::from_record)
                .collect(),
            total: records.len(),
        }
    }

    /// True when "load more" would show further entries
    pub fn has_more(&self) -> bool {
        self.entries.len() < self.total
    }

    /// Limit to request after one "load more"
    pub fn next_limit(&self) -> usize {
        self.entries.len() + ACTIVITY_PAGE_SIZE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn record(device: Option<&str>, model: &str) -> Record {
        let mut record = Record::new()
            .with(fields::SUPPLIER_ID, "S1")
            .with(fields::DELIVER_DATE, "2024-03-01")
            .with(fields::MODEL, model)
            .with(fields::CUSTOMER_ID, "C7")
            .with(fields::LICENSE_NO, "L-42")
            .with(fields::NUMBER, 3);
        if let Some(device) = device {
            record.insert(fields::DEVICE_NAME, device);
        }
        record
    }

    #[test]
    fn test_device_name_preferred() {
        let entry = ActivityEntry::from_record(&record(Some("Infusion Pump"), "IP-200"));
        assert_eq!(entry.device, "Infusion Pump");
        assert_eq!(entry.units, "3");
        assert_eq!(entry.license, "L-42");
    }

    #[test]
    fn test_model_fallback() {
        assert_eq!(ActivityEntry::from_record(&record(None, "IP-200")).device, "IP-200");
        assert_eq!(ActivityEntry::from_record(&record(Some(""), "IP-200")).device, "IP-200");
    }

    #[test]
    fn test_missing_number_uses_quantity() {
        let entry = ActivityEntry::from_record(&Record::new().with(fields::MODEL, "M1"));
        assert_eq!(entry.units, "1");
        assert_eq!(entry.customer, "");
    }

    #[test]
    fn test_limit_and_paging() {
        let records: Vec<_> = (0..12).map(|i| record(None, &format!("M{}", i))).collect();

        let feed = ActivityFeed::new(&records, ACTIVITY_PAGE_SIZE);
        assert_eq!(feed.entries.len(), 5);
        assert_eq!(feed.entries[4].device, "M4");
        assert!(feed.has_more());
        assert_eq!(feed.next_limit(), 10);

        let feed = ActivityFeed::new(&records, 15);
        assert_eq!(feed.entries.len(), 12);
        assert!(!feed.has_more());
    }

    #[test]
    #[serial]
    fn test_localized_description() {
        crate::i18n::set_language(crate::i18n::Language::English);
        let entry = ActivityEntry::from_record(&record(Some("Stent"), "ST-1"));
        assert_eq!(
            entry.description(),
            "Distributed 3 unit(s) of Stent to customer C7."
        );
        assert_eq!(entry.license_line(), "License: L-42");
    }
}
