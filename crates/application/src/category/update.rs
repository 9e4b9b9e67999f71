use std::sync::Arc;

use serde::Deserialize;

use catalog_category::CategoryGateway;
use catalog_core::{Entity, Notification};

use crate::category::output::CategoryOutput;
use crate::category::parse_id;
use crate::{ApplicationError, ApplicationResult, UseCase};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateCategoryCommand {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_active: bool,
}

/// Load, modify, validate (collecting every violation) and persist a category.
pub struct UpdateCategoryUseCase {
    gateway: Arc<dyn CategoryGateway>,
}

impl UpdateCategoryUseCase {
    pub fn new(gateway: Arc<dyn CategoryGateway>) -> Self {
        Self { gateway }
    }
}

impl UseCase for UpdateCategoryUseCase {
    type Input = UpdateCategoryCommand;
    type Output = CategoryOutput;

    fn execute(&self, input: Self::Input) -> ApplicationResult<Self::Output> {
        let id = parse_id(&input.id)?;
        let current = self
            .gateway
            .find_by_id(&id)?
            .ok_or_else(|| ApplicationError::category_not_found(id))?;

        let updated = current.update(input.name, input.description, input.is_active);

        let mut notification = Notification::new();
        updated.validate(&mut notification)?;
        if notification.has_error() {
            tracing::warn!(
                category_id = %id,
                errors = notification.errors().len(),
                "rejected category update"
            );
            return Err(ApplicationError::Validation(notification.errors().to_vec()));
        }

        let saved = self.gateway.update(updated)?;
        tracing::info!(category_id = %id, active = saved.is_active(), "category updated");
        Ok(saved.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_category::Category;
    use crate::test_support::InMemoryCategoryGateway;

    fn stored(name: &str, is_active: bool) -> Category {
        Category::new_category(Some(name.to_string()), Some(String::new()), is_active)
    }

    fn command(id: impl ToString, name: Option<&str>, is_active: bool) -> UpdateCategoryCommand {
        UpdateCategoryCommand {
            id: id.to_string(),
            name: name.map(str::to_string),
            description: Some("A categoria mais assistida".to_string()),
            is_active,
        }
    }

    #[test]
    fn updates_fields_and_deactivates() {
        let existing = stored("Film", true);
        let gateway = Arc::new(InMemoryCategoryGateway::with([existing.clone()]));
        let use_case = UpdateCategoryUseCase::new(gateway.clone());

        let output = use_case
            .execute(command(existing.id_typed(), Some("Filmes"), false))
            .unwrap();

        assert_eq!(output.id, existing.id_typed());
        assert_eq!(output.name.as_deref(), Some("Filmes"));
        assert!(!output.is_active);
        assert!(output.deleted_at.is_some());
        assert_eq!(output.created_at, existing.created_at());
        assert!(output.updated_at > existing.updated_at());

        let persisted = gateway.find_by_id(&existing.id_typed()).unwrap().unwrap();
        assert_eq!(persisted.name(), Some("Filmes"));
    }

    #[test]
    fn reactivates_inactive_category() {
        let existing = stored("Filmes", false);
        let gateway = Arc::new(InMemoryCategoryGateway::with([existing.clone()]));
        let use_case = UpdateCategoryUseCase::new(gateway);

        let output = use_case
            .execute(command(existing.id_typed(), Some("Filmes"), true))
            .unwrap();

        assert!(output.is_active);
        assert!(output.deleted_at.is_none());
    }

    #[test]
    fn invalid_name_keeps_stored_state() {
        let existing = stored("Filmes", true);
        let gateway = Arc::new(InMemoryCategoryGateway::with([existing.clone()]));
        let use_case = UpdateCategoryUseCase::new(gateway.clone());

        let err = use_case
            .execute(command(existing.id_typed(), Some("  "), true))
            .unwrap_err();

        assert_eq!(err.errors()[0].message(), "'name' should not be empty");
        let persisted = gateway.find_by_id(&existing.id_typed()).unwrap().unwrap();
        assert_eq!(persisted, existing);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let use_case = UpdateCategoryUseCase::new(Arc::new(InMemoryCategoryGateway::new()));
        let id = catalog_category::CategoryId::new();

        let err = use_case.execute(command(id, Some("Filmes"), true)).unwrap_err();

        assert_eq!(err, ApplicationError::category_not_found(id));
    }

    #[test]
    fn malformed_id_is_rejected() {
        let use_case = UpdateCategoryUseCase::new(Arc::new(InMemoryCategoryGateway::new()));

        let err = use_case.execute(command("123", Some("Filmes"), true)).unwrap_err();

        assert!(matches!(err, ApplicationError::InvalidId(_)));
    }
}
