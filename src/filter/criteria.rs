//! Filter slots and criteria.

use crate::types::fields;
use rust_i18n::t;
use serde::{Deserialize, Serialize};

/// One of the eight named filter criteria
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterSlot {
    Timezone,
    SupplierId,
    Category,
    LicenseNo,
    Model,
    CustomerId,
    LotNo,
    SerialNo,
}

impl FilterSlot {
    /// All slots in display order
    pub const ALL: [FilterSlot; 8] = [
        FilterSlot::Timezone,
        FilterSlot::SupplierId,
        FilterSlot::Category,
        FilterSlot::LicenseNo,
        FilterSlot::Model,
        FilterSlot::CustomerId,
        FilterSlot::LotNo,
        FilterSlot::SerialNo,
    ];

    /// Slot name as used in criteria maps and settings
    pub fn key(&self) -> &'static str {
        match self {
            FilterSlot::Timezone => "timezone",
            FilterSlot::SupplierId => "supplierID",
            FilterSlot::Category => "category",
            FilterSlot::LicenseNo => "licenseNo",
            FilterSlot::Model => "model",
            FilterSlot::CustomerId => "customerID",
            FilterSlot::LotNo => "lotNo",
            FilterSlot::SerialNo => "sn",
        }
    }

    /// Parse a slot from its key
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|slot| slot.key() == key)
    }

    /// Record field this slot constrains
    ///
    /// `Timezone` has no backing field in the record schema and never
    /// constrains anything.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            FilterSlot::Timezone => None,
            FilterSlot::SupplierId => Some(fields::SUPPLIER_ID),
            FilterSlot::Category => Some(fields::CATEGORY),
            FilterSlot::LicenseNo => Some(fields::LICENSE_NO),
            FilterSlot::Model => Some(fields::MODEL),
            FilterSlot::CustomerId => Some(fields::CUSTOMER_ID),
            FilterSlot::LotNo => Some(fields::LOT_NO),
            FilterSlot::SerialNo => Some(fields::SERIAL_NO),
        }
    }

    /// Localized label for the current language
    pub fn label(&self) -> String {
        match self {
            FilterSlot::Timezone => t!("filter_timezone"),
            FilterSlot::SupplierId => t!("filter_supplier_id"),
            FilterSlot::Category => t!("filter_category"),
            FilterSlot::LicenseNo => t!("filter_license_no"),
            FilterSlot::Model => t!("filter_model"),
            FilterSlot::CustomerId => t!("filter_customer_id"),
            FilterSlot::LotNo => t!("filter_lot_no"),
            FilterSlot::SerialNo => t!("filter_serial_no"),
        }
        .to_string()
    }
}

impl std::fmt::Display for FilterSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Substring patterns for every filter slot
///
/// An empty pattern means the slot imposes no constraint. Serialized with
/// the slot keys (`supplierID`, `lotNo`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    pub timezone: String,
    #[serde(rename = "supplierID")]
    pub supplier_id: String,
    pub category: String,
    #[serde(rename = "licenseNo")]
    pub license_no: String,
    pub model: String,
    #[serde(rename = "customerID")]
    pub customer_id: String,
    #[serde(rename = "lotNo")]
    pub lot_no: String,
    pub sn: String,
}

impl FilterCriteria {
    /// Criteria with every slot empty
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style slot assignment
    pub fn with(mut self, slot: FilterSlot, pattern: impl Into<String>) -> Self {
        self.set(slot, pattern);
        self
    }

    /// Pattern currently held by a slot
    pub fn get(&self, slot: FilterSlot) -> &str {
        match slot {
            FilterSlot::Timezone => &self.timezone,
            FilterSlot::SupplierId => &self.supplier_id,
            FilterSlot::Category => &self.category,
            FilterSlot::LicenseNo => &self.license_no,
            FilterSlot::Model => &self.model,
            FilterSlot::CustomerId => &self.customer_id,
            FilterSlot::LotNo => &self.lot_no,
            FilterSlot::SerialNo => &self.sn,
        }
    }

    fn slot_mut(&mut self, slot: FilterSlot) -> &mut String {
        match slot {
            FilterSlot::Timezone => &mut self.timezone,
            FilterSlot::SupplierId => &mut self.supplier_id,
            FilterSlot::Category => &mut self.category,
            FilterSlot::LicenseNo => &mut self.license_no,
            FilterSlot::Model => &mut self.model,
            FilterSlot::CustomerId => &mut self.customer_id,
            FilterSlot::LotNo => &mut self.lot_no,
            FilterSlot::SerialNo => &mut self.sn,
        }
    }

    /// Replace the pattern of a slot
    pub fn set(&mut self, slot: FilterSlot, pattern: impl Into<String>) {
        *self.slot_mut(slot) = pattern.into();
    }

    /// Empty a single slot
    pub fn clear(&mut self, slot: FilterSlot) {
        self.slot_mut(slot).clear();
    }

    /// Empty every slot
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Slots with a non-empty pattern, in display order
    pub fn active_slots(&self) -> impl Iterator<Item = (FilterSlot, &str)> {
        FilterSlot::ALL
            .into_iter()
            .map(move |slot| (slot, self.get(slot)))
            .filter(|(_, pattern)| !pattern.is_empty())
    }

    /// True when no slot carries a pattern
    pub fn is_empty(&self) -> bool {
        self.active_slots().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_keys_round_trip() {
        for slot in FilterSlot::ALL {
            assert_eq!(FilterSlot::from_key(slot.key()), Some(slot));
        }
        assert_eq!(FilterSlot::from_key("LotNO"), None);
    }

    #[test]
    fn test_slot_fields() {
        assert_eq!(FilterSlot::LotNo.field(), Some("LotNO"));
        assert_eq!(FilterSlot::SerialNo.field(), Some("SerNo"));
        assert_eq!(FilterSlot::Timezone.field(), None);
    }

    #[test]
    fn test_set_clear_reset() {
        let mut criteria = FilterCriteria::new();
        assert!(criteria.is_empty());

        criteria.set(FilterSlot::Model, "M1");
        criteria.set(FilterSlot::SupplierId, "s1");
        assert_eq!(criteria.get(FilterSlot::Model), "M1");

        let active: Vec<_> = criteria.active_slots().map(|(s, _)| s).collect();
        assert_eq!(active, vec![FilterSlot::SupplierId, FilterSlot::Model]);

        criteria.clear(FilterSlot::Model);
        assert_eq!(criteria.active_slots().count(), 1);

        criteria.reset();
        assert!(criteria.is_empty());
    }

    #[test]
    fn test_serialized_keys() {
        let criteria = FilterCriteria::new().with(FilterSlot::CustomerId, "C1");
        let json = serde_json::to_value(&criteria).unwrap();
        assert_eq!(json["customerID"], "C1");
        assert_eq!(json.as_object().unwrap().len(), 8);

        let parsed: FilterCriteria = serde_json::from_str(r#"{"lotNo":"L9"}"#).unwrap();
        assert_eq!(parsed.get(FilterSlot::LotNo), "L9");
        assert_eq!(parsed.get(FilterSlot::Model), "");
    }
}
