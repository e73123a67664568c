//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared entirely by their attribute
/// values: two [`crate::Amount`]s of `100` are the same amount, while two
/// claims with the same fields are still distinct claims (entities).
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
