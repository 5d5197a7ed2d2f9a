//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Anything that can be looked up by identifier (catalog products, records
/// supplied by a listing provider) implements this.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

impl<E: Entity + ?Sized> Entity for &E {
    type Id = E::Id;

    fn id(&self) -> &Self::Id {
        (**self).id()
    }
}
