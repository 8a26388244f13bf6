//! Dashboard analytics
//!
//! Read-only summaries computed from a record set, normally the filtered one:
//!
//! - [`DatasetOverview`] - Headline numbers (records, devices, suppliers, customers)
//! - [`DashboardCharts`] - Ranked and trend series for the chart panels
//! - [`DataPreview`] - The first rows in tabular form
//! - [`ActivityFeed`] - The first records as distribution events
//!
//! Like the filter and grouping engines these are pure functions of their
//! input and are recomputed from scratch whenever the input changes.

pub mod activity;
pub mod charts;
pub mod preview;

pub use activity::{ActivityEntry, ActivityFeed, ACTIVITY_PAGE_SIZE};
pub use charts::{
    count_by, delivery_trend, parse_delivery_date, top_counts, ChartKind, ChartPoint,
    ChartSeries, DashboardCharts,
};
pub use preview::{DataPreview, DEFAULT_PREVIEW_ROWS, PREVIEW_SIZES};

use crate::types::{fields, Record};
use rust_i18n::t;
use serde::Serialize;
use std::collections::HashSet;

/// Headline numbers for a record set
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetOverview {
    /// Number of records
    pub total_records: usize,
    /// Sum of record quantities (records without a quantity count as one)
    pub total_devices: f64,
    /// Distinct supplier IDs
    pub unique_suppliers: usize,
    /// Distinct customer IDs
    pub unique_customers: usize,
}

impl DatasetOverview {
    pub fn compute(records: &[Record]) -> Self {
        Self {
            total_records: records.len(),
            total_devices: records.iter().map(Record::quantity).sum(),
            unique_suppliers: distinct(records, fields::SUPPLIER_ID),
            unique_customers: distinct(records, fields::CUSTOMER_ID),
        }
    }

    /// `(label, value)` rows in the current language
    pub fn labeled(&self) -> Vec<(String, String)> {
        vec![
            (t!("overview_total_records").to_string(), self.total_records.to_string()),
            (t!("overview_total_devices").to_string(), self.total_devices.to_string()),
            (t!("overview_unique_suppliers").to_string(), self.unique_suppliers.to_string()),
            (t!("overview_unique_customers").to_string(), self.unique_customers.to_string()),
        ]
    }
}

fn distinct(records: &[Record], field: &str) -> usize {
    records
        .iter()
        .filter_map(|r| r.text(field))
        .collect::<HashSet<_>>()
        .len()
}
