//! Persistence boundary for categories.

use std::sync::Arc;

use thiserror::Error;

use catalog_core::Pagination;

use crate::category::{Category, CategoryId};
use crate::search::CategorySearchQuery;

pub type GatewayResult<T> = Result<T, GatewayError>;

/// Failures reported by gateway implementations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("category not found: {0}")]
    NotFound(CategoryId),

    #[error("category already exists: {0}")]
    AlreadyExists(CategoryId),

    /// The backing store could not serve the request.
    #[error("category store unavailable: {0}")]
    Unavailable(String),
}

impl GatewayError {
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }
}

/// Storage-agnostic access to categories.
///
/// Implementations own indexing, filtering by `terms`, sorting and paging.
/// Categories are handed over as-is: gateways do not validate them.
pub trait CategoryGateway: Send + Sync {
    fn create(&self, category: Category) -> GatewayResult<Category>;

    fn update(&self, category: Category) -> GatewayResult<Category>;

    /// Remove a category, returning what was stored.
    ///
    /// Returns `GatewayError::NotFound` when nothing is stored under `id`.
    fn delete_by_id(&self, id: &CategoryId) -> GatewayResult<Category>;

    fn find_by_id(&self, id: &CategoryId) -> GatewayResult<Option<Category>>;

    fn find_all(&self, query: &CategorySearchQuery) -> GatewayResult<Pagination<Category>>;
}

impl<G> CategoryGateway for Arc<G>
where
    G: CategoryGateway + ?Sized,
{
    fn create(&self, category: Category) -> GatewayResult<Category> {
        (**self).create(category)
    }

    fn update(&self, category: Category) -> GatewayResult<Category> {
        (**self).update(category)
    }

    fn delete_by_id(&self, id: &CategoryId) -> GatewayResult<Category> {
        (**self).delete_by_id(id)
    }

    fn find_by_id(&self, id: &CategoryId) -> GatewayResult<Option<Category>> {
        (**self).find_by_id(id)
    }

    fn find_all(&self, query: &CategorySearchQuery) -> GatewayResult<Pagination<Category>> {
        (**self).find_all(query)
    }
}
