//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Units, parsed actions and warnings are values: they carry no identity and are
/// never mutated once built. To "change" one, build a new one.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
