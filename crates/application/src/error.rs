use thiserror::Error;

use catalog_category::GatewayError;
use catalog_core::{DomainError, ValidationError};

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// Every violation found, in order.
    #[error("validation failed: {}", join_messages(.0))]
    Validation(Vec<ValidationError>),

    #[error("{0}")]
    NotFound(String),

    #[error("invalid identifier: {0}")]
    InvalidId(String),

    #[error("conflict: {0}")]
    Conflict(String),

    /// The gateway failed for reasons unrelated to the request.
    #[error(transparent)]
    Gateway(GatewayError),
}

impl ApplicationError {
    pub fn category_not_found(id: impl core::fmt::Display) -> Self {
        Self::NotFound(format!("category with id {id} was not found"))
    }

    pub fn errors(&self) -> &[ValidationError] {
        match self {
            Self::Validation(errors) => errors,
            _ => &[],
        }
    }
}

impl From<DomainError> for ApplicationError {
    fn from(value: DomainError) -> Self {
        match value {
            DomainError::Validation(errors) => ApplicationError::Validation(errors),
            DomainError::InvalidId(msg) => ApplicationError::InvalidId(msg),
        }
    }
}

impl From<GatewayError> for ApplicationError {
    fn from(value: GatewayError) -> Self {
        match value {
            GatewayError::NotFound(id) => ApplicationError::category_not_found(id),
            GatewayError::AlreadyExists(id) => {
                ApplicationError::Conflict(format!("category with id {id} already exists"))
            }
            GatewayError::Unavailable(_) => ApplicationError::Gateway(value),
        }
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ValidationError::message)
        .collect::<Vec<_>>()
        .join("; ")
}
