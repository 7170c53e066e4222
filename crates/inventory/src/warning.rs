//! Non-fatal anomalies raised while interpreting or applying commands.

use serde::Serialize;
use thiserror::Error;

use pantry_core::ValueObject;

use crate::unit::CanonicalUnit;

/// A warning attached to a parse or apply result.
///
/// None of these abort a batch: the offending segment or action degrades and
/// the rest of the batch is still processed.
#[derive(Debug, Error, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Warning {
    /// Neither the SET nor the ADD/REMOVE grammar matched the segment.
    #[error("Could not understand \"{segment}\".")]
    UnparsableSegment { segment: String },

    /// Amount missing, negative or non-finite.
    #[error("Invalid quantity in \"{context}\".")]
    InvalidQuantity { context: String },

    #[error("Unit \"{token}\" is not recognized. Defaulting to item unit.")]
    UnrecognizedUnit { token: String },

    /// No inventory item scored above the match threshold; a new one will be created.
    #[error("Item not found. Will create a new item: {name}.")]
    UnmatchedItem { name: String },

    #[error("Unit {from} does not match {to}. Used {to} as-is.")]
    UnitMismatch {
        from: CanonicalUnit,
        to: CanonicalUnit,
    },

    #[error("Removed more than available for {name}. Quantity clamped to 0.")]
    OverRemoval { name: String },

    /// The action names an item id absent from the snapshot and is not a new item.
    #[error("Skipped action for unknown item: {name}")]
    UnknownItemReference { name: String },
}

impl ValueObject for Warning {}

/// Render warnings as the plain strings shown to users.
pub fn messages(warnings: &[Warning]) -> Vec<String> {
    warnings.iter().map(ToString::to_string).collect()
}
