use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use catalog_core::{AggregateRoot, DomainResult, Entity, ValidationHandler, Validator};

use crate::validator::CategoryValidator;

catalog_core::uuid_identifier!(
    /// Category identifier.
    pub struct CategoryId,
    "CategoryId"
);

/// Aggregate root: Category.
///
/// Transitions take `&self` and return the next state; the receiver is left
/// untouched. Validation only happens when [`Entity::validate`] is called.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    id: CategoryId,
    name: Option<String>,
    description: Option<String>,
    active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl Category {
    /// Create a brand-new category with a fresh id.
    ///
    /// Inactive categories start soft-deleted (`deleted_at` set to the creation
    /// time).
    pub fn new_category(name: Option<String>, description: Option<String>, is_active: bool) -> Self {
        let now = Utc::now();
        Self {
            id: CategoryId::new(),
            name,
            description,
            active: is_active,
            created_at: now,
            updated_at: now,
            deleted_at: if is_active { None } else { Some(now) },
        }
    }

    /// Rebuild a category from previously persisted state.
    pub fn with(
        id: CategoryId,
        name: Option<String>,
        description: Option<String>,
        active: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        deleted_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            active,
            created_at,
            updated_at,
            deleted_at,
        }
    }

    pub fn activate(&self) -> Self {
        Self {
            active: true,
            deleted_at: None,
            updated_at: later_than(self.updated_at),
            ..self.clone()
        }
    }

    /// Deactivating an already inactive category keeps its original
    /// `deleted_at`.
    pub fn deactivate(&self) -> Self {
        let updated_at = later_than(self.updated_at);
        Self {
            active: false,
            deleted_at: self.deleted_at.or(Some(updated_at)),
            updated_at,
            ..self.clone()
        }
    }

    /// Replace name and description and move to the requested activation state.
    pub fn update(&self, name: Option<String>, description: Option<String>, is_active: bool) -> Self {
        let next = if is_active {
            self.activate()
        } else {
            self.deactivate()
        };
        Self {
            name,
            description,
            ..next
        }
    }

    pub fn id_typed(&self) -> CategoryId {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }
}

impl Entity for Category {
    type Id = CategoryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn validate(&self, handler: &mut dyn ValidationHandler) -> DomainResult<()> {
        CategoryValidator::new(self).validate(handler)
    }
}

impl AggregateRoot for Category {}

/// Current time, bumped past `previous` when the clock has not advanced.
fn later_than(previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = Utc::now();
    if now > previous {
        now
    } else {
        // Saturates at the latest representable instant.
        previous
            .checked_add_signed(Duration::nanoseconds(1))
            .unwrap_or(previous)
    }
}
