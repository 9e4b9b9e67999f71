//! Name rules for categories.

use catalog_core::{DomainResult, ValidationError, ValidationHandler, Validator};

use crate::category::Category;

pub const NAME_MIN_LENGTH: usize = 3;
pub const NAME_MAX_LENGTH: usize = 255;

const NAME_NULL: &str = "'name' should no be null";
const NAME_EMPTY: &str = "'name' should not be empty";
const NAME_LENGTH: &str = "'name' must be between 3 and 255 characters";

/// Checks a category's name. Description and the active flag are unconstrained.
///
/// The rules are mutually exclusive, so at most one violation is reported per
/// category.
#[derive(Debug, Clone, Copy)]
pub struct CategoryValidator<'a> {
    category: &'a Category,
}

impl<'a> CategoryValidator<'a> {
    pub fn new(category: &'a Category) -> Self {
        Self { category }
    }

    fn check_name_constraints(&self, handler: &mut dyn ValidationHandler) -> DomainResult<()> {
        let Some(name) = self.category.name() else {
            return handler.append(ValidationError::new(NAME_NULL));
        };

        let trimmed = name.trim();
        if trimmed.is_empty() {
            return handler.append(ValidationError::new(NAME_EMPTY));
        }

        // Length is counted in characters, not bytes.
        let length = trimmed.chars().count();
        if !(NAME_MIN_LENGTH..=NAME_MAX_LENGTH).contains(&length) {
            return handler.append(ValidationError::new(NAME_LENGTH));
        }

        Ok(())
    }
}

impl Validator for CategoryValidator<'_> {
    fn validate(&self, handler: &mut dyn ValidationHandler) -> DomainResult<()> {
        self.check_name_constraints(handler)
    }
}
