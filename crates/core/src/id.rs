//! Strongly-typed identifiers and the id-generation capability.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Identifier of an inventory item.
///
/// Rows coming from the persistence collaborator already carry one; the applier
/// only mints new ids for items it synthesizes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(Uuid);

impl ItemId {
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<Uuid> for ItemId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl FromStr for ItemId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid =
            Uuid::from_str(s).map_err(|e| DomainError::invalid_id(format!("ItemId: {e}")))?;
        Ok(Self(uuid))
    }
}

/// Source of fresh item ids.
///
/// Injected wherever new items are synthesized so tests can assert exact ids.
pub trait IdGenerator {
    fn next_id(&mut self) -> ItemId;
}

/// Default generator: UUIDv7 (time-ordered).
#[derive(Debug, Default, Copy, Clone)]
pub struct UuidV7Ids;

impl IdGenerator for UuidV7Ids {
    fn next_id(&mut self) -> ItemId {
        ItemId(Uuid::now_v7())
    }
}

/// Deterministic generator yielding `Uuid::from_u128(start)`, `start + 1`, ...
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: u128,
}

impl SequentialIds {
    pub fn starting_at(start: u128) -> Self {
        Self { next: start }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> ItemId {
        let id = ItemId(Uuid::from_u128(self.next));
        self.next = self.next.wrapping_add(1);
        id
    }
}
