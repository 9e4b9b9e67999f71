use std::sync::Arc;

use catalog_category::CategoryGateway;

use crate::category::output::CategoryOutput;
use crate::category::parse_id;
use crate::{ApplicationResult, UseCase};

/// Remove a category through the gateway, returning what was stored.
pub struct DeleteCategoryUseCase {
    gateway: Arc<dyn CategoryGateway>,
}

impl DeleteCategoryUseCase {
    pub fn new(gateway: Arc<dyn CategoryGateway>) -> Self {
        Self { gateway }
    }
}

impl UseCase for DeleteCategoryUseCase {
    type Input = String;
    type Output = CategoryOutput;

    fn execute(&self, input: Self::Input) -> ApplicationResult<Self::Output> {
        let id = parse_id(&input)?;
        let removed = self.gateway.delete_by_id(&id)?;
        tracing::info!(category_id = %id, "category deleted");
        Ok(removed.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_category::{Category, CategoryId};
    use crate::test_support::InMemoryCategoryGateway;
    use crate::ApplicationError;

    #[test]
    fn removes_stored_category() {
        let existing = Category::new_category(Some("Filmes".to_string()), None, true);
        let gateway = Arc::new(InMemoryCategoryGateway::with([existing.clone()]));
        let use_case = DeleteCategoryUseCase::new(gateway.clone());

        let output = use_case.execute(existing.id_typed().to_string()).unwrap();

        assert_eq!(output.id, existing.id_typed());
        assert_eq!(gateway.len(), 0);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let use_case = DeleteCategoryUseCase::new(Arc::new(InMemoryCategoryGateway::new()));
        let id = CategoryId::new();

        let err = use_case.execute(id.to_string()).unwrap_err();

        assert_eq!(err, ApplicationError::category_not_found(id));
    }
}
