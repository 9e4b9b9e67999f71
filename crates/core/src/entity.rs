//! Entity trait: identity + continuity across state changes.

use crate::error::DomainResult;
use crate::validation::ValidationHandler;

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Report rule violations of the current state to `handler`.
    ///
    /// Validation is opt-in: constructing or transitioning an entity never
    /// validates implicitly. Returns `Err` only when the handler decides to stop.
    fn validate(&self, handler: &mut dyn ValidationHandler) -> DomainResult<()>;
}
