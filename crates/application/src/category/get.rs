use std::sync::Arc;

use catalog_category::CategoryGateway;

use crate::category::output::CategoryOutput;
use crate::category::parse_id;
use crate::{ApplicationError, ApplicationResult, UseCase};

pub struct GetCategoryByIdUseCase {
    gateway: Arc<dyn CategoryGateway>,
}

impl GetCategoryByIdUseCase {
    pub fn new(gateway: Arc<dyn CategoryGateway>) -> Self {
        Self { gateway }
    }
}

impl UseCase for GetCategoryByIdUseCase {
    type Input = String;
    type Output = CategoryOutput;

    fn execute(&self, input: Self::Input) -> ApplicationResult<Self::Output> {
        let id = parse_id(&input)?;
        tracing::debug!(category_id = %id, "looking up category");
        self.gateway
            .find_by_id(&id)?
            .map(CategoryOutput::from)
            .ok_or_else(|| ApplicationError::category_not_found(id))
    }
}
