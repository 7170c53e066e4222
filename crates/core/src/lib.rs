//! `pantry-core` — shared domain primitives for the pantry command engine.
//!
//! This crate contains **pure domain** primitives (no IO, no storage).

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{IdGenerator, ItemId, SequentialIds, UuidV7Ids};
pub use value_object::ValueObject;
