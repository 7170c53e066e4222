use serde::{Deserialize, Serialize};

use pantry_core::{DomainError, DomainResult, Entity, ItemId};

use crate::unit::CanonicalUnit;

/// One row of the inventory snapshot.
///
/// Rows are owned by the persistence collaborator. The applier only ever
/// returns modified copies; it never deletes a row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: ItemId,
    pub name: String,
    pub category: String,
    pub unit_type: CanonicalUnit,
    pub quantity: f64,
    pub low_stock_threshold: f64,
}

impl InventoryItem {
    /// Build a validated row.
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        category: impl Into<String>,
        unit_type: CanonicalUnit,
        quantity: f64,
        low_stock_threshold: f64,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if !(quantity.is_finite() && quantity >= 0.0) {
            return Err(DomainError::invariant("quantity must be a finite non-negative number"));
        }
        if !(low_stock_threshold.is_finite() && low_stock_threshold >= 0.0) {
            return Err(DomainError::validation(
                "low stock threshold must be a finite non-negative number",
            ));
        }

        Ok(Self {
            id,
            name,
            category: category.into(),
            unit_type,
            quantity,
            low_stock_threshold,
        })
    }

    /// At or below the restock threshold.
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.low_stock_threshold
    }
}

impl Entity for InventoryItem {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
