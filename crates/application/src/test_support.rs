//! Gateway double shared by the use-case tests.

use std::collections::HashMap;
use std::sync::RwLock;

use catalog_category::{
    Category, CategoryGateway, CategoryId, CategorySearchQuery, GatewayError, GatewayResult,
};
use catalog_core::{Entity, Pagination, SortDirection};

#[derive(Debug, Default)]
pub struct InMemoryCategoryGateway {
    inner: RwLock<HashMap<CategoryId, Category>>,
    unavailable: bool,
}

impl InMemoryCategoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// A gateway whose every call fails with `GatewayError::Unavailable`.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    pub fn with(categories: impl IntoIterator<Item = Category>) -> Self {
        let gateway = Self::new();
        for category in categories {
            gateway.create(category).unwrap();
        }
        gateway
    }

    pub fn len(&self) -> usize {
        self.inner.read().unwrap().len()
    }

    fn check(&self) -> GatewayResult<()> {
        if self.unavailable {
            Err(GatewayError::unavailable("store offline"))
        } else {
            Ok(())
        }
    }
}

impl CategoryGateway for InMemoryCategoryGateway {
    fn create(&self, category: Category) -> GatewayResult<Category> {
        self.check()?;
        let mut map = self.inner.write().unwrap();
        let id = category.id_typed();
        if map.contains_key(&id) {
            return Err(GatewayError::AlreadyExists(id));
        }
        map.insert(id, category.clone());
        Ok(category)
    }

    fn update(&self, category: Category) -> GatewayResult<Category> {
        self.check()?;
        let mut map = self.inner.write().unwrap();
        let id = category.id_typed();
        if !map.contains_key(&id) {
            return Err(GatewayError::NotFound(id));
        }
        map.insert(id, category.clone());
        Ok(category)
    }

    fn delete_by_id(&self, id: &CategoryId) -> GatewayResult<Category> {
        self.check()?;
        self.inner
            .write()
            .unwrap()
            .remove(id)
            .ok_or(GatewayError::NotFound(*id))
    }

    fn find_by_id(&self, id: &CategoryId) -> GatewayResult<Option<Category>> {
        self.check()?;
        Ok(self.inner.read().unwrap().get(id).cloned())
    }

    fn find_all(&self, query: &CategorySearchQuery) -> GatewayResult<Pagination<Category>> {
        self.check()?;
        let terms = query.terms.to_lowercase();
        let mut matching: Vec<Category> = self
            .inner
            .read()
            .unwrap()
            .values()
            .filter(|c| {
                !query.has_terms()
                    || c.name().is_some_and(|n| n.to_lowercase().contains(&terms))
                    || c.description().is_some_and(|d| d.to_lowercase().contains(&terms))
            })
            .cloned()
            .collect();

        matching.sort_by(|a, b| {
            let ordering = match query.sort.as_str() {
                "created_at" => a.created_at().cmp(&b.created_at()),
                _ => a.name().cmp(&b.name()),
            };
            ordering.then_with(|| a.id().cmp(b.id()))
        });
        if query.direction == SortDirection::Desc {
            matching.reverse();
        }

        let total = matching.len() as u64;
        let items = matching
            .into_iter()
            .skip(query.offset() as usize)
            .take(query.per_page as usize)
            .collect();

        Ok(Pagination::new(query.page, query.per_page, total, items))
    }
}
