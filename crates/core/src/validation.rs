//! Validation plumbing: violations, handlers and validators.
//!
//! Validators never decide how violations are surfaced. They report each one to
//! a [`ValidationHandler`], and the handler decides whether to stop
//! ([`ThrowsValidationHandler`]) or keep collecting ([`Notification`]).

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// A single rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl core::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.message)
    }
}

impl ValueObject for ValidationError {}

/// Strategy receiving violations as a validator finds them.
///
/// Returning `Err` tells the validator to stop; returning `Ok` lets it report
/// further violations.
pub trait ValidationHandler {
    fn append(&mut self, error: ValidationError) -> DomainResult<()>;

    fn append_all(&mut self, errors: Vec<ValidationError>) -> DomainResult<()> {
        for error in errors {
            self.append(error)?;
        }
        Ok(())
    }
}

impl<F> ValidationHandler for F
where
    F: FnMut(ValidationError) -> DomainResult<()>,
{
    fn append(&mut self, error: ValidationError) -> DomainResult<()> {
        self(error)
    }
}

/// Fail-fast handler: the first violation becomes a `DomainError::Validation`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThrowsValidationHandler;

impl ThrowsValidationHandler {
    pub fn new() -> Self {
        Self
    }
}

impl ValidationHandler for ThrowsValidationHandler {
    fn append(&mut self, error: ValidationError) -> DomainResult<()> {
        Err(DomainError::with_errors(vec![error]))
    }
}

/// Accumulating handler: keeps every violation and never stops the validator.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Notification {
    errors: Vec<ValidationError>,
}

impl Notification {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn has_error(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn first_error(&self) -> Option<&ValidationError> {
        self.errors.first()
    }

    /// `Ok(())` when nothing was reported, otherwise every collected violation.
    pub fn into_result(self) -> DomainResult<()> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(DomainError::with_errors(self.errors))
        }
    }
}

impl ValidationHandler for Notification {
    fn append(&mut self, error: ValidationError) -> DomainResult<()> {
        self.errors.push(error);
        Ok(())
    }
}

/// A set of rules checked against some state.
pub trait Validator {
    fn validate(&self, handler: &mut dyn ValidationHandler) -> DomainResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TwoRules;

    impl Validator for TwoRules {
        fn validate(&self, handler: &mut dyn ValidationHandler) -> DomainResult<()> {
            handler.append(ValidationError::new("first"))?;
            handler.append(ValidationError::new("second"))?;
            Ok(())
        }
    }

    #[test]
    fn throws_handler_stops_at_first_violation() {
        let err = TwoRules
            .validate(&mut ThrowsValidationHandler::new())
            .unwrap_err();

        assert_eq!(err.errors(), &[ValidationError::new("first")]);
    }

    #[test]
    fn notification_collects_every_violation_in_order() {
        let mut notification = Notification::new();
        TwoRules.validate(&mut notification).unwrap();

        assert!(notification.has_error());
        assert_eq!(notification.first_error().map(ValidationError::message), Some("first"));

        let err = notification.into_result().unwrap_err();
        let messages: Vec<_> = err.errors().iter().map(ValidationError::message).collect();
        assert_eq!(messages, vec!["first", "second"]);
    }

    #[test]
    fn empty_notification_is_ok() {
        let notification = Notification::new();
        assert!(!notification.has_error());
        assert_eq!(notification.into_result(), Ok(()));
    }

    #[test]
    fn closures_act_as_handlers() {
        let mut seen = Vec::new();
        let mut handler = |error: ValidationError| -> DomainResult<()> {
            seen.push(error);
            if seen.len() == 1 {
                Ok(())
            } else {
                Err(DomainError::with_errors(seen.clone()))
            }
        };

        let err = TwoRules.validate(&mut handler).unwrap_err();
        assert_eq!(err.errors().len(), 2);
    }

    #[test]
    fn append_all_respects_handler_policy() {
        let errors = vec![ValidationError::new("a"), ValidationError::new("b")];

        let mut notification = Notification::new();
        notification.append_all(errors.clone()).unwrap();
        assert_eq!(notification.errors(), errors.as_slice());

        let err = ThrowsValidationHandler.append_all(errors).unwrap_err();
        assert_eq!(err.errors(), &[ValidationError::new("a")]);
    }
}
