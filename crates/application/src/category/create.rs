use std::sync::Arc;

use serde::Deserialize;

use catalog_category::{Category, CategoryGateway};
use catalog_core::{Entity, Notification};

use crate::category::output::CategoryOutput;
use crate::{ApplicationError, ApplicationResult, UseCase};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateCategoryCommand {
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_active: bool,
}

impl CreateCategoryCommand {
    pub fn with(name: impl Into<String>, description: impl Into<String>, is_active: bool) -> Self {
        Self {
            name: Some(name.into()),
            description: Some(description.into()),
            is_active,
        }
    }
}

/// Build, validate (collecting every violation) and persist a new category.
pub struct CreateCategoryUseCase {
    gateway: Arc<dyn CategoryGateway>,
}

impl CreateCategoryUseCase {
    pub fn new(gateway: Arc<dyn CategoryGateway>) -> Self {
        Self { gateway }
    }
}

impl UseCase for CreateCategoryUseCase {
    type Input = CreateCategoryCommand;
    type Output = CategoryOutput;

    fn execute(&self, input: Self::Input) -> ApplicationResult<Self::Output> {
        let category = Category::new_category(input.name, input.description, input.is_active);

        let mut notification = Notification::new();
        category.validate(&mut notification)?;
        if notification.has_error() {
            tracing::warn!(
                errors = notification.errors().len(),
                "rejected category creation: {:?}",
                notification.first_error().map(|e| e.message())
            );
            return Err(ApplicationError::Validation(notification.errors().to_vec()));
        }

        let created = self.gateway.create(category)?;
        tracing::info!(category_id = %created.id_typed(), "category created");
        Ok(created.into())
    }
}
