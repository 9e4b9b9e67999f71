//! Category domain module.
//!
//! This crate contains business rules for catalog categories, implemented purely
//! as deterministic domain logic (no IO, no HTTP, no storage). Persistence is
//! reached through the [`CategoryGateway`] trait only.

pub mod category;
pub mod gateway;
pub mod search;
pub mod validator;

pub use category::{Category, CategoryId};
pub use gateway::{CategoryGateway, GatewayError, GatewayResult};
pub use search::CategorySearchQuery;
pub use validator::CategoryValidator;
