//! Defaults for items synthesized from a command that matched nothing.

use serde::{Deserialize, Serialize};

use crate::unit::CanonicalUnit;

pub const DEFAULT_NEW_ITEM_CATEGORY: &str = "Snacks";
pub const DEFAULT_NEW_ITEM_UNIT: CanonicalUnit = CanonicalUnit::Pcs;
/// Low-stock threshold for items tracked in kg or litre.
pub const DEFAULT_BULK_LOW_STOCK_THRESHOLD: f64 = 0.25;
/// Low-stock threshold for every other unit.
pub const DEFAULT_UNIT_LOW_STOCK_THRESHOLD: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewItemDefaults {
    pub category: String,
    pub unit: CanonicalUnit,
    pub bulk_low_stock_threshold: f64,
    pub unit_low_stock_threshold: f64,
}

impl Default for NewItemDefaults {
    fn default() -> Self {
        Self {
            category: DEFAULT_NEW_ITEM_CATEGORY.to_string(),
            unit: DEFAULT_NEW_ITEM_UNIT,
            bulk_low_stock_threshold: DEFAULT_BULK_LOW_STOCK_THRESHOLD,
            unit_low_stock_threshold: DEFAULT_UNIT_LOW_STOCK_THRESHOLD,
        }
    }
}

impl NewItemDefaults {
    pub fn low_stock_threshold(&self, unit: CanonicalUnit) -> f64 {
        if unit.is_bulk() {
            self.bulk_low_stock_threshold
        } else {
            self.unit_low_stock_threshold
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bulk_units_get_fractional_threshold() {
        let defaults = NewItemDefaults::default();
        assert_eq!(defaults.low_stock_threshold(CanonicalUnit::Kg), 0.25);
        assert_eq!(defaults.low_stock_threshold(CanonicalUnit::Litre), 0.25);
        assert_eq!(defaults.low_stock_threshold(CanonicalUnit::G), 1.0);
        assert_eq!(defaults.low_stock_threshold(CanonicalUnit::Pcs), 1.0);
    }

    #[test]
    fn partial_json_keeps_remaining_defaults() {
        let defaults: NewItemDefaults = serde_json::from_str(r#"{"category":"Pantry"}"#).unwrap();
        assert_eq!(defaults.category, "Pantry");
        assert_eq!(defaults.unit, CanonicalUnit::Pcs);
        assert_eq!(defaults.bulk_low_stock_threshold, 0.25);
    }
}
