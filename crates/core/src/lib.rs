//! `catalog-core` — domain foundation building blocks for the catalog.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! identity, validation plumbing, pagination and the domain error model.

pub mod aggregate;
pub mod entity;
pub mod error;
pub mod id;
pub mod pagination;
pub mod validation;
pub mod value_object;

pub use aggregate::AggregateRoot;
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use pagination::{Pagination, SortDirection};
pub use validation::{
    Notification, ThrowsValidationHandler, ValidationError, ValidationHandler, Validator,
};
pub use value_object::ValueObject;
