//! Entity trait: objects with identity.

/// An object identified by an id rather than by its field values.
///
/// A claim whose status just changed is still the same claim; lists key
/// their in-place updates off `id()`.
pub trait Entity {
    /// Strongly-typed identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;
}
