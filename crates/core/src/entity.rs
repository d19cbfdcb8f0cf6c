//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// A part keeps its identity (the part number) while its description and price
/// change, so stores look records up through `id()` rather than by value.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
