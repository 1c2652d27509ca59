//! Activation state shared by categories and products
//!
//! Catalog entities are never hard-deleted. They move between two states and
//! both transitions are always applicable, so deactivating an inactive entity
//! is a no-op rather than an error.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivationStatus {
    /// Listed by default and available for ordering
    #[default]
    Active,
    /// Soft-deleted: retained in storage, hidden from default listings
    Inactive,
}

impl ActivationStatus {
    pub fn from_active(active: bool) -> Self {
        if active {
            ActivationStatus::Active
        } else {
            ActivationStatus::Inactive
        }
    }

    pub fn is_active(self) -> bool {
        self == ActivationStatus::Active
    }

    /// Deactivate transition. Total over both states.
    pub fn deactivate(self) -> Self {
        ActivationStatus::Inactive
    }

    /// Reactivate transition. Total over both states.
    pub fn reactivate(self) -> Self {
        ActivationStatus::Active
    }
}

impl std::fmt::Display for ActivationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActivationStatus::Active => write!(f, "active"),
            ActivationStatus::Inactive => write!(f, "inactive"),
        }
    }
}

impl std::str::FromStr for ActivationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(ActivationStatus::Active),
            "inactive" => Ok(ActivationStatus::Inactive),
            _ => Err(format!("Unknown activation status: {}", s)),
        }
    }
}
