//! Category use cases.

pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod output;
pub mod update;

pub use create::{CreateCategoryCommand, CreateCategoryUseCase};
pub use delete::DeleteCategoryUseCase;
pub use get::GetCategoryByIdUseCase;
pub use list::ListCategoriesUseCase;
pub use output::{CategoryListOutput, CategoryOutput};
pub use update::{UpdateCategoryCommand, UpdateCategoryUseCase};

use core::str::FromStr;

use catalog_category::CategoryId;

use crate::ApplicationResult;

fn parse_id(id: &str) -> ApplicationResult<CategoryId> {
    Ok(CategoryId::from_str(id.trim())?)
}
