//! Paginated results and sort direction shared by gateways.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// One page of a larger result set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination<T> {
    /// Page index (0-based).
    pub current_page: u32,
    /// Requested page size.
    pub per_page: u32,
    /// Total number of records matching the query (across all pages).
    pub total: u64,
    pub items: Vec<T>,
}

impl<T> Pagination<T> {
    pub fn new(current_page: u32, per_page: u32, total: u64, items: Vec<T>) -> Self {
        Self {
            current_page,
            per_page,
            total,
            items,
        }
    }

    pub fn empty(current_page: u32, per_page: u32) -> Self {
        Self::new(current_page, per_page, 0, Vec::new())
    }

    /// Convert the items while keeping the page metadata.
    pub fn map<U, F>(self, f: F) -> Pagination<U>
    where
        F: FnMut(T) -> U,
    {
        Pagination {
            current_page: self.current_page,
            per_page: self.per_page,
            total: self.total,
            items: self.items.into_iter().map(f).collect(),
        }
    }

    /// Whether records exist past this page.
    pub fn has_more(&self) -> bool {
        let seen = u64::from(self.current_page) * u64::from(self.per_page) + self.items.len() as u64;
        seen < self.total
    }
}

/// Sort direction of a search query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl FromStr for SortDirection {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(DomainError::validation(format!(
                "unknown sort direction: {other} (expected \"asc\" or \"desc\")"
            ))),
        }
    }
}
