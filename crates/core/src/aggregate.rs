//! Aggregate root marker.

use crate::entity::Entity;

/// Aggregate root marker.
///
/// Aggregates are the unit handed to gateways: they are loaded and persisted
/// as a whole, and every state transition goes through the root.
pub trait AggregateRoot: Entity {}
