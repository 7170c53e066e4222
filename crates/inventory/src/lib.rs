//! Inventory domain module.
//!
//! Item rows, canonical units, parsed actions and the pure applier that turns
//! (snapshot, actions) into (next snapshot, warnings). No IO, no storage.

pub mod action;
pub mod apply;
pub mod defaults;
pub mod item;
pub mod unit;
pub mod warning;

pub use action::{Action, ActionKind};
pub use apply::{ApplyResult, apply_actions, apply_actions_with};
pub use defaults::{
    DEFAULT_BULK_LOW_STOCK_THRESHOLD, DEFAULT_NEW_ITEM_CATEGORY, DEFAULT_NEW_ITEM_UNIT,
    DEFAULT_UNIT_LOW_STOCK_THRESHOLD, NewItemDefaults,
};
pub use item::InventoryItem;
pub use unit::{CanonicalUnit, Conversion, convert, to_canonical_unit};
pub use warning::Warning;
