//! Filter engine
//!
//! Applies [`FilterCriteria`] to a record set. A record is kept when every
//! active slot matches:
//!
//! - Slots with an empty pattern are skipped
//! - Slots without a backing record field (`timezone`) are skipped
//! - A record missing the slot's field is excluded
//! - Otherwise the field's string form must contain the pattern,
//!   compared case-insensitively
//!
//! The output is always a subsequence of the input in original order.

pub mod criteria;

pub use criteria::{FilterCriteria, FilterSlot};

use crate::types::Record;

/// Criteria resolved to `(field, lowercase pattern)` terms
#[derive(Debug, Clone)]
pub struct CompiledFilter {
    terms: Vec<(&'static str, String)>,
}

impl CompiledFilter {
    pub fn new(criteria: &FilterCriteria) -> Self {
        let terms = criteria
            .active_slots()
            .filter_map(|(slot, pattern)| slot.field().map(|f| (f, pattern.to_lowercase())))
            .collect();
        Self { terms }
    }

    /// True when the filter lets every record through
    pub fn is_passthrough(&self) -> bool {
        self.terms.is_empty()
    }

    /// Check a single record against every term
    pub fn matches(&self, record: &Record) -> bool {
        self.terms.iter().all(|(field, pattern)| match record.text(field) {
            Some(value) => value.to_lowercase().contains(pattern.as_str()),
            None => false,
        })
    }
}

/// Keep the records matching every active slot, in original order
pub fn apply_filters(records: &[Record], criteria: &FilterCriteria) -> Vec<Record> {
    let filter = CompiledFilter::new(criteria);
    if filter.is_passthrough() {
        return records.to_vec();
    }

    let filtered: Vec<Record> = records
        .iter()
        .filter(|r| filter.matches(r))
        .cloned()
        .collect();

    tracing::debug!(
        "Filter kept {} of {} record(s)",
        filtered.len(),
        records.len()
    );
    filtered
}

/// Check a single record against criteria
pub fn matches(record: &Record, criteria: &FilterCriteria) -> bool {
    CompiledFilter::new(criteria).matches(record)
}
