//! Chart series derived from a (filtered) record set.
//!
//! Every series is a list of `(name, value)` points ready for a bar, pie,
//! area or line chart. Ranked series are ordered by descending count; equal
//! counts keep the order in which the names were first seen.

use crate::types::{fields, truncate_label, Record};
use chrono::{DateTime, NaiveDate};
use rust_i18n::t;
use serde::Serialize;
use std::collections::HashMap;

/// Maximum characters of a category name shown in the distribution chart
pub const CATEGORY_CHART_LABEL_CHARS: usize = 15;

/// Date layouts accepted for `Deliverdate`
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%Y%m%d", "%Y.%m.%d", "%m/%d/%Y"];

/// The dashboard charts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    TopSuppliers,
    CategoryDistribution,
    DeliveryTrend,
    TopCustomers,
    TopModels,
}

impl ChartKind {
    pub const ALL: [ChartKind; 5] = [
        ChartKind::TopSuppliers,
        ChartKind::CategoryDistribution,
        ChartKind::DeliveryTrend,
        ChartKind::TopCustomers,
        ChartKind::TopModels,
    ];

    /// Record field counted by this chart
    pub fn field(&self) -> &'static str {
        match self {
            ChartKind::TopSuppliers => fields::SUPPLIER_ID,
            ChartKind::CategoryDistribution => fields::CATEGORY,
            ChartKind::DeliveryTrend => fields::DELIVER_DATE,
            ChartKind::TopCustomers => fields::CUSTOMER_ID,
            ChartKind::TopModels => fields::MODEL,
        }
    }

    /// Number of points kept, `None` for the full trend
    pub fn limit(&self) -> Option<usize> {
        match self {
            ChartKind::CategoryDistribution => Some(5),
            ChartKind::DeliveryTrend => None,
            _ => Some(10),
        }
    }

    /// Localized chart title
    pub fn title(&self) -> String {
        match self {
            ChartKind::TopSuppliers => t!("chart_top_suppliers"),
            ChartKind::CategoryDistribution => t!("chart_category_distribution"),
            ChartKind::DeliveryTrend => t!("chart_delivery_trend"),
            ChartKind::TopCustomers => t!("chart_top_customers"),
            ChartKind::TopModels => t!("chart_top_models"),
        }
        .to_string()
    }
}

/// One point of a chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartPoint {
    pub name: String,
    pub value: usize,
}

impl ChartPoint {
    fn new(name: impl Into<String>, value: usize) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// A titled series of points
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub kind: ChartKind,
    pub points: Vec<ChartPoint>,
}

impl ChartSeries {
    /// Build the series for one chart
    pub fn compute(kind: ChartKind, records: &[Record]) -> Self {
        let points = match kind {
            ChartKind::DeliveryTrend => delivery_trend(records),
            // Counted on the full name, shortened for display only.
            ChartKind::CategoryDistribution => top_counts(records, kind.field(), kind.limit())
                .into_iter()
                .map(|p| {
                    let label = truncate_label(&p.name, CATEGORY_CHART_LABEL_CHARS);
                    ChartPoint::new(label, p.value)
                })
                .collect(),
            _ => top_counts(records, kind.field(), kind.limit()),
        };
        Self { kind, points }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// All dashboard charts for a record set
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardCharts {
    pub series: Vec<ChartSeries>,
}

impl DashboardCharts {
    pub fn compute(records: &[Record]) -> Self {
        Self {
            series: ChartKind::ALL
                .into_iter()
                .map(|kind| ChartSeries::compute(kind, records))
                .collect(),
        }
    }

    pub fn get(&self, kind: ChartKind) -> Option<&ChartSeries> {
        self.series.iter().find(|s| s.kind == kind)
    }
}

/// Count records per distinct value of `field`
///
/// Records without the field are not counted. The result is in first-seen order.
pub fn count_by(records: &[Record], field: &str) -> Vec<ChartPoint> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut points: Vec<ChartPoint> = Vec::new();

    for value in records.iter().filter_map(|r| r.text(field)) {
        match index.get(&value) {
            Some(&i) => points[i].value += 1,
            None => {
                index.insert(value.clone(), points.len());
                points.push(ChartPoint::new(value, 1));
            }
        }
    }

    points
}

/// Counts by `field`, highest first, optionally cut to `limit` entries
pub fn top_counts(records: &[Record], field: &str, limit: Option<usize>) -> Vec<ChartPoint> {
    let mut points = count_by(records, field);
    // Stable: ties stay in first-seen order.
    points.sort_by(|a, b| b.value.cmp(&a.value));
    if let Some(limit) = limit {
        points.truncate(limit);
    }
    points
}

/// Parse a delivery date in any of the accepted layouts
pub fn parse_delivery_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.date_naive())
        })
}

/// Records per delivery date
///
/// Dates that parse are ordered chronologically and come first; anything
/// else follows in lexicographic order.
pub fn delivery_trend(records: &[Record]) -> Vec<ChartPoint> {
    let mut points = count_by(records, fields::DELIVER_DATE);
    points.sort_by_cached_key(|p| {
        let date = parse_delivery_date(&p.name);
        (date.is_none(), date, p.name.clone())
    });
    points
}
