//! Pure application of parsed actions to an inventory snapshot.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use pantry_core::{Entity, IdGenerator, ItemId};

use crate::action::{Action, ActionKind};
use crate::defaults::NewItemDefaults;
use crate::item::InventoryItem;
use crate::unit::convert;
use crate::warning::{self, Warning};

/// Output of [`apply_actions`]: a full copy of the inventory plus warnings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyResult {
    pub next_inventory: Vec<InventoryItem>,
    pub warnings: Vec<Warning>,
}

impl ApplyResult {
    pub fn messages(&self) -> Vec<String> {
        warning::messages(&self.warnings)
    }
}

/// Apply `actions` in order to a copy of `inventory`.
///
/// Uses the default new-item settings. See [`apply_actions_with`].
pub fn apply_actions(
    inventory: &[InventoryItem],
    actions: &[Action],
    ids: &mut impl IdGenerator,
) -> ApplyResult {
    apply_actions_with(inventory, actions, ids, &NewItemDefaults::default())
}

/// Apply `actions` in order to a copy of `inventory`.
///
/// Nothing here is fatal: every anomaly becomes a [`Warning`] and the batch
/// carries on. The result is referentially transparent for a fixed id
/// generator, but replaying it against its own output double-applies deltas.
pub fn apply_actions_with(
    inventory: &[InventoryItem],
    actions: &[Action],
    ids: &mut impl IdGenerator,
    defaults: &NewItemDefaults,
) -> ApplyResult {
    let mut next_inventory: Vec<InventoryItem> = inventory.to_vec();
    let mut warnings: Vec<Warning> = Vec::new();
    // New items created in this batch, keyed by lowercased name.
    let mut created: HashMap<String, ItemId> = HashMap::new();
    // At most one over-removal warning per item and batch.
    let mut over_removed: HashSet<ItemId> = HashSet::new();

    for action in actions {
        if !(action.amount.is_finite() && action.amount >= 0.0) {
            warnings.push(Warning::InvalidQuantity {
                context: action.raw_item_name.clone(),
            });
            continue;
        }

        let target_id = action
            .item_id
            .or_else(|| created.get(&action.item_name.to_lowercase()).copied());

        let position = target_id.and_then(|id| next_inventory.iter().position(|i| *i.id() == id));
        let index = match position {
            Some(index) => index,
            None if action.is_new_item => {
                let item = synthesize_item(action, ids, defaults);
                tracing::debug!(item_id = %item.id, name = %item.name, "created inventory item");
                created.insert(action.item_name.to_lowercase(), item.id);
                next_inventory.push(item);
                next_inventory.len() - 1
            }
            None => {
                tracing::debug!(name = %action.item_name, "skipping action for unknown item");
                warnings.push(Warning::UnknownItemReference {
                    name: action.item_name.clone(),
                });
                continue;
            }
        };

        let item = &mut next_inventory[index];
        let conversion = convert(
            action.amount,
            Some(action.input_unit.unwrap_or(item.unit_type)),
            Some(item.unit_type),
        );
        warnings.extend(conversion.warning);
        let amount = conversion.value;
        let invalid_quantity = || Warning::InvalidQuantity {
            context: action.raw_item_name.clone(),
        };
        if !amount.is_finite() {
            warnings.push(invalid_quantity());
            continue;
        }

        let quantity = match action.kind {
            ActionKind::Add => item.quantity + amount,
            ActionKind::Set => amount,
            ActionKind::Remove => {
                let remaining = item.quantity - amount;
                if remaining < 0.0 && over_removed.insert(item.id) {
                    warnings.push(Warning::OverRemoval {
                        name: item.name.clone(),
                    });
                }
                remaining.max(0.0)
            }
        };
        if !quantity.is_finite() {
            warnings.push(invalid_quantity());
            continue;
        }
        item.quantity = round_quantity(quantity);
    }

    ApplyResult {
        next_inventory,
        warnings,
    }
}

fn synthesize_item(
    action: &Action,
    ids: &mut impl IdGenerator,
    defaults: &NewItemDefaults,
) -> InventoryItem {
    InventoryItem {
        id: ids.next_id(),
        name: action.item_name.clone(),
        category: action.item_category.clone(),
        unit_type: action.item_unit_type,
        quantity: 0.0,
        low_stock_threshold: defaults.low_stock_threshold(action.item_unit_type),
    }
}

/// Round to 3 decimal places so repeated operations do not accumulate drift.
fn round_quantity(quantity: f64) -> f64 {
    let scaled = quantity * 1000.0;
    if scaled.is_finite() {
        scaled.round() / 1000.0
    } else {
        quantity
    }
}
