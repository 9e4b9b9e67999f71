use std::sync::Arc;

use catalog_category::{CategoryGateway, CategorySearchQuery};
use catalog_core::Pagination;

use crate::category::output::CategoryListOutput;
use crate::{ApplicationResult, UseCase};

pub struct ListCategoriesUseCase {
    gateway: Arc<dyn CategoryGateway>,
}

impl ListCategoriesUseCase {
    pub fn new(gateway: Arc<dyn CategoryGateway>) -> Self {
        Self { gateway }
    }
}

impl UseCase for ListCategoriesUseCase {
    type Input = CategorySearchQuery;
    type Output = Pagination<CategoryListOutput>;

    fn execute(&self, input: Self::Input) -> ApplicationResult<Self::Output> {
        let page = self.gateway.find_all(&input)?;
        tracing::debug!(
            page = page.current_page,
            returned = page.items.len(),
            total = page.total,
            "listed categories"
        );
        Ok(page.map(CategoryListOutput::from))
    }
}
