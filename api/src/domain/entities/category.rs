//! Category domain entity
//!
//! A named grouping that products belong to. Names are unique across the
//! catalog (checked by the use case, backed by a storage unique index).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{require_filled, ActivationStatus};
use crate::error::DomainError;

/// Unique identifier for a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryId(pub Uuid);

impl CategoryId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CategoryId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for CategoryId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A product category
///
/// `name` is private so it can only change through [`Category::set_name`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    pub id: CategoryId,
    name: String,
    pub description: Option<String>,
    status: ActivationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Category {
    /// Create a new active category with a fresh identifier
    pub fn new(name: impl Into<String>, description: Option<String>) -> Result<Self, DomainError> {
        let now = Utc::now();
        Ok(Self {
            id: CategoryId::new(),
            name: require_filled("name", name)?,
            description,
            status: ActivationStatus::Active,
            created_at: now,
            updated_at: now,
        })
    }

    /// Rebuild a category from stored state. The name invariant is checked
    /// again so a bad row cannot produce an invalid entity.
    pub fn restore(
        id: CategoryId,
        name: impl Into<String>,
        description: Option<String>,
        active: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            id,
            name: require_filled("name", name)?,
            description,
            status: ActivationStatus::from_active(active),
            created_at,
            updated_at,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Assign a new name. On error the current name is kept.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), DomainError> {
        self.name = require_filled("name", name)?;
        Ok(())
    }

    #[allow(dead_code)]
    pub fn status(&self) -> ActivationStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    pub fn deactivate(&mut self) {
        self.status = self.status.deactivate();
    }

    pub fn reactivate(&mut self) {
        self.status = self.status.reactivate();
    }

    /// Record a modification
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
