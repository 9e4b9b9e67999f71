//! Application services for the catalog (use cases over gateways).
//!
//! Use cases orchestrate domain entities and gateways; they contain no storage
//! or transport code themselves.

pub mod category;
pub mod error;

#[cfg(test)]
mod test_support;

pub use error::{ApplicationError, ApplicationResult};

/// A single application operation.
pub trait UseCase {
    type Input;
    type Output;

    fn execute(&self, input: Self::Input) -> ApplicationResult<Self::Output>;
}
