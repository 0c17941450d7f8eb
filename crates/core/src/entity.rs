//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// [`User`](crate::User) is the one implementor; its id is the repository key.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
