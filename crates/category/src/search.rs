//! Search parameters for listing categories.

use serde::{Deserialize, Serialize};

use catalog_core::SortDirection;

/// Query passed to [`CategoryGateway::find_all`](crate::CategoryGateway::find_all).
///
/// Deserialized queries go through [`CategorySearchQuery::new`], so clamping and
/// trimming apply to them as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawCategorySearchQuery")]
pub struct CategorySearchQuery {
    /// Page index (0-based).
    pub page: u32,
    pub per_page: u32,
    /// Free-text filter; empty means "no filter".
    pub terms: String,
    /// Field to sort by (e.g. "name", "created_at").
    pub sort: String,
    pub direction: SortDirection,
}

impl CategorySearchQuery {
    pub const DEFAULT_PER_PAGE: u32 = 10;
    pub const MAX_PER_PAGE: u32 = 100;
    pub const DEFAULT_SORT: &'static str = "name";

    pub fn new(
        page: Option<u32>,
        per_page: Option<u32>,
        terms: impl Into<String>,
        sort: impl Into<String>,
        direction: SortDirection,
    ) -> Self {
        let sort = sort.into();
        Self {
            page: page.unwrap_or(0),
            per_page: per_page
                .unwrap_or(Self::DEFAULT_PER_PAGE)
                .clamp(1, Self::MAX_PER_PAGE),
            terms: terms.into().trim().to_string(),
            sort: if sort.trim().is_empty() {
                Self::DEFAULT_SORT.to_string()
            } else {
                sort.trim().to_string()
            },
            direction,
        }
    }

    /// Number of records preceding this page.
    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.per_page)
    }

    pub fn has_terms(&self) -> bool {
        !self.terms.is_empty()
    }
}

/// Wire shape of a search query; every field may be omitted.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawCategorySearchQuery {
    page: Option<u32>,
    per_page: Option<u32>,
    terms: String,
    sort: String,
    direction: SortDirection,
}

impl From<RawCategorySearchQuery> for CategorySearchQuery {
    fn from(raw: RawCategorySearchQuery) -> Self {
        Self::new(raw.page, raw.per_page, raw.terms, raw.sort, raw.direction)
    }
}

impl Default for CategorySearchQuery {
    fn default() -> Self {
        Self::new(None, None, "", Self::DEFAULT_SORT, SortDirection::Asc)
    }
}
