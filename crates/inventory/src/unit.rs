//! Canonical units: alias canonicalization and dimension-aware conversion.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use pantry_core::{DomainError, ValueObject};

use crate::warning::Warning;

/// The closed set every stored quantity is expressed in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CanonicalUnit {
    Pcs,
    Kg,
    G,
    Ml,
    Litre,
    Bottle,
}

impl ValueObject for CanonicalUnit {}

impl CanonicalUnit {
    pub const ALL: [CanonicalUnit; 6] = [
        CanonicalUnit::Pcs,
        CanonicalUnit::Kg,
        CanonicalUnit::G,
        CanonicalUnit::Ml,
        CanonicalUnit::Litre,
        CanonicalUnit::Bottle,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CanonicalUnit::Pcs => "pcs",
            CanonicalUnit::Kg => "kg",
            CanonicalUnit::G => "g",
            CanonicalUnit::Ml => "ml",
            CanonicalUnit::Litre => "litre",
            CanonicalUnit::Bottle => "bottle",
        }
    }

    /// Units sold by weight or volume in bulk (used for low-stock defaults).
    pub fn is_bulk(&self) -> bool {
        matches!(self, CanonicalUnit::Kg | CanonicalUnit::Litre)
    }
}

impl core::fmt::Display for CanonicalUnit {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CanonicalUnit {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        to_canonical_unit(s).ok_or_else(|| DomainError::validation(format!("unknown unit: {s}")))
    }
}

const UNIT_ALIASES: &[(&str, CanonicalUnit)] = &[
    ("kg", CanonicalUnit::Kg),
    ("kgs", CanonicalUnit::Kg),
    ("kilo", CanonicalUnit::Kg),
    ("kilos", CanonicalUnit::Kg),
    ("kilogram", CanonicalUnit::Kg),
    ("kilograms", CanonicalUnit::Kg),
    ("g", CanonicalUnit::G),
    ("gm", CanonicalUnit::G),
    ("gms", CanonicalUnit::G),
    ("gram", CanonicalUnit::G),
    ("grams", CanonicalUnit::G),
    ("l", CanonicalUnit::Litre),
    ("lt", CanonicalUnit::Litre),
    ("ltr", CanonicalUnit::Litre),
    ("liter", CanonicalUnit::Litre),
    ("liters", CanonicalUnit::Litre),
    ("litre", CanonicalUnit::Litre),
    ("litres", CanonicalUnit::Litre),
    ("ml", CanonicalUnit::Ml),
    ("millilitre", CanonicalUnit::Ml),
    ("millilitres", CanonicalUnit::Ml),
    ("milliliter", CanonicalUnit::Ml),
    ("milliliters", CanonicalUnit::Ml),
    ("pc", CanonicalUnit::Pcs),
    ("pcs", CanonicalUnit::Pcs),
    ("piece", CanonicalUnit::Pcs),
    ("pieces", CanonicalUnit::Pcs),
    ("no", CanonicalUnit::Pcs),
    ("nos", CanonicalUnit::Pcs),
    ("number", CanonicalUnit::Pcs),
    ("numbers", CanonicalUnit::Pcs),
    ("bottle", CanonicalUnit::Bottle),
    ("bottles", CanonicalUnit::Bottle),
];

/// Map a free-form unit token to its canonical unit.
///
/// Case-insensitive; trailing periods are ignored (`"Kg."` → `kg`). Unknown
/// tokens yield `None`.
pub fn to_canonical_unit(token: &str) -> Option<CanonicalUnit> {
    let token = token.trim().to_lowercase();
    let token = token.trim_end_matches('.');
    UNIT_ALIASES
        .iter()
        .find(|(alias, _)| *alias == token)
        .map(|(_, unit)| *unit)
}

/// Outcome of [`convert`].
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub value: f64,
    pub converted: bool,
    pub warning: Option<Warning>,
}

impl Conversion {
    fn passthrough(value: f64) -> Self {
        Self {
            value,
            converted: false,
            warning: None,
        }
    }
}

/// Convert `amount` between canonical units.
///
/// Only g↔kg and ml↔litre are convertible. Any other differing pair passes the
/// value through unchanged with a mismatch warning. Never rounds or clamps.
pub fn convert(amount: f64, from: Option<CanonicalUnit>, to: Option<CanonicalUnit>) -> Conversion {
    let (from, to) = match (from, to) {
        (Some(from), Some(to)) if from != to => (from, to),
        _ => return Conversion::passthrough(amount),
    };

    let value = match (from, to) {
        (CanonicalUnit::G, CanonicalUnit::Kg) | (CanonicalUnit::Ml, CanonicalUnit::Litre) => {
            amount / 1000.0
        }
        (CanonicalUnit::Kg, CanonicalUnit::G) | (CanonicalUnit::Litre, CanonicalUnit::Ml) => {
            amount * 1000.0
        }
        _ => {
            return Conversion {
                value: amount,
                converted: false,
                warning: Some(Warning::UnitMismatch { from, to }),
            };
        }
    };

    Conversion {
        value,
        converted: true,
        warning: None,
    }
}
