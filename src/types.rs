//! Core data types for DistVis-RS
//!
//! This module contains the record representation shared by the parser,
//! the filter engine, the grouping engine and the analytics views.
//!
//! # Main Types
//!
//! - [`Record`] - One flat distribution event (field name -> value)
//! - [`fields`] - Names of the well-known distribution fields
//!
//! # Open Record Shape
//!
//! Records are an open mapping. The well-known fields (supplier, category,
//! license, model, customer, quantity, ...) are looked up by name and may be
//! missing; JSON inputs may also carry any number of extra keys, which are
//! preserved in their original order.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Names of the well-known distribution record fields
pub mod fields {
    pub const SUPPLIER_ID: &str = "SupplierID";
    pub const DELIVER_DATE: &str = "Deliverdate";
    pub const CUSTOMER_ID: &str = "CustomerID";
    pub const LICENSE_NO: &str = "LicenseNo";
    pub const CATEGORY: &str = "Category";
    pub const DEVICE_NAME: &str = "DeviceNAME";
    pub const LOT_NO: &str = "LotNO";
    pub const SERIAL_NO: &str = "SerNo";
    pub const MODEL: &str = "Model";
    pub const NUMBER: &str = "Number";
}

/// A single distribution record
///
/// Values are kept as JSON values: delimited inputs always produce strings,
/// JSON inputs may produce numbers, booleans or nested values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: Map<String, Value>,
}

impl Record {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(field, value);
        self
    }

    /// Set a field, replacing any previous value
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Look up a field. JSON `null` is reported as absent.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field).filter(|v| !v.is_null())
    }

    /// Whether the record carries a non-null value for `field`
    pub fn contains(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    /// String form of a field, used for substring matching and grouping
    pub fn text(&self, field: &str) -> Option<String> {
        self.get(field).map(value_to_text)
    }

    /// Grouping key for a field: the string form, or empty when absent
    pub fn key(&self, field: &str) -> String {
        self.text(field).unwrap_or_default()
    }

    /// Device quantity of this record
    ///
    /// `Number` may be a JSON number or a numeric string. Missing, unparsable
    /// and zero quantities count as a single device.
    pub fn quantity(&self) -> f64 {
        let parsed = match self.get(fields::NUMBER) {
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
            Some(Value::Bool(b)) => Some(if *b { 1.0 } else { 0.0 }),
            _ => None,
        };
        match parsed {
            Some(q) if q.is_finite() && q != 0.0 => q,
            _ => 1.0,
        }
    }

    /// Field names in insertion order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Iterate over all fields in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of fields (including null-valued ones)
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Borrow the underlying JSON object
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.fields
    }
}

impl From<Map<String, Value>> for Record {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Render a JSON value the way it is shown and matched
///
/// Strings are taken verbatim, numbers use their default formatting,
/// nested arrays and objects fall back to compact JSON.
pub fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Truncate a label to `max_chars` characters, appending an ellipsis when cut
pub fn truncate_label(value: &str, max_chars: usize) -> String {
    match value.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &value[..idx]),
        None => value.to_string(),
    }
}
